use super::ExtComputationCallbackDataSourceHandle;
use crate::{tf, vt};
use std::sync::Arc;

/// A data source which, at each shutter offset, presents one typed value.
pub trait SampledDataSource: Send + Sync {
	/// Return the value at `shutter_offset`, or the empty value if none.
	fn value(&self, shutter_offset: f64) -> vt::Value;
}

/// A data source which answers name-based queries over a nested namespace.
///
/// This is the whole protocol a consumer needs to traverse a prim: existence
/// test, ordered name enumeration and retrieval by name.
pub trait ContainerDataSource: Send + Sync {
	/// Return whether `name` is expected to be providable.
	///
	/// Must agree with [`Self::get_names`] and must not force computation of
	/// the named value.
	fn has(&self, name: &tf::Token) -> bool {
		self.get_names().contains(name)
	}

	/// Return the names this container provides, in a stable order.
	fn get_names(&self) -> Vec<tf::Token>;

	/// Return the data source named `name`, or `None` if absent.
	fn get(&self, name: &tf::Token) -> Option<DataSource>;
}

/// A data source which presents an ordered sequence of child data sources.
pub trait VectorDataSource: Send + Sync {
	fn count(&self) -> usize;

	/// Return the element at `index`, or `None` if out of range.
	fn element(&self, index: usize) -> Option<DataSource>;
}

pub type SampledDataSourceHandle = Arc<dyn SampledDataSource>;
pub type ContainerDataSourceHandle = Arc<dyn ContainerDataSource>;
pub type VectorDataSourceHandle = Arc<dyn VectorDataSource>;

/// Polymorphic result of a field query.
///
/// A field that is missing altogether is represented as `None` at the query
/// site, never as a variant here.
#[derive(Clone)]
pub enum DataSource {
	Container(ContainerDataSourceHandle),
	Vector(VectorDataSourceHandle),
	Sampled(SampledDataSourceHandle),
	/// A deferred legacy computation, invoked out-of-band by an execution
	/// engine rather than sampled in place.
	Callback(ExtComputationCallbackDataSourceHandle),
}

impl DataSource {
	pub fn as_container(&self) -> Option<&ContainerDataSourceHandle> {
		match self {
			DataSource::Container(c) => Some(c),
			_ => None,
		}
	}

	pub fn as_vector(&self) -> Option<&VectorDataSourceHandle> {
		match self {
			DataSource::Vector(v) => Some(v),
			_ => None,
		}
	}

	pub fn as_sampled(&self) -> Option<&SampledDataSourceHandle> {
		match self {
			DataSource::Sampled(s) => Some(s),
			_ => None,
		}
	}

	pub fn as_callback(&self) -> Option<&ExtComputationCallbackDataSourceHandle> {
		match self {
			DataSource::Callback(c) => Some(c),
			_ => None,
		}
	}
}

/// A sampled data source holding one prebuilt, time-invariant value.
pub struct RetainedSampledDataSource {
	value: vt::Value,
}

impl RetainedSampledDataSource {
	pub fn new(value: impl Into<vt::Value>) -> Self {
		Self {
			value: value.into(),
		}
	}

	/// Convenience for building the `DataSource::Sampled` kind directly.
	pub fn into_source(self) -> DataSource {
		DataSource::Sampled(Arc::new(self))
	}
}

impl SampledDataSource for RetainedSampledDataSource {
	fn value(&self, _shutter_offset: f64) -> vt::Value {
		self.value.clone()
	}
}

/// A container data source over a prebuilt list of named children.
///
/// Children keep the insertion order for enumeration.
pub struct RetainedContainerDataSource {
	entries: Vec<(tf::Token, DataSource)>,
}

impl RetainedContainerDataSource {
	pub fn new(entries: Vec<(tf::Token, DataSource)>) -> Self {
		Self { entries }
	}

	pub fn empty() -> Self {
		Self {
			entries: Vec::new(),
		}
	}

	pub fn into_source(self) -> DataSource {
		DataSource::Container(Arc::new(self))
	}
}

impl ContainerDataSource for RetainedContainerDataSource {
	fn has(&self, name: &tf::Token) -> bool {
		self.entries.iter().any(|(n, _)| n == name)
	}

	fn get_names(&self) -> Vec<tf::Token> {
		self.entries.iter().map(|(n, _)| n.clone()).collect()
	}

	fn get(&self, name: &tf::Token) -> Option<DataSource> {
		self.entries
			.iter()
			.find(|(n, _)| n == name)
			.map(|(_, source)| source.clone())
	}
}

/// A vector data source over a prebuilt list of children.
pub struct RetainedVectorDataSource {
	elements: Vec<DataSource>,
}

impl RetainedVectorDataSource {
	pub fn new(elements: Vec<DataSource>) -> Self {
		Self { elements }
	}

	pub fn into_source(self) -> DataSource {
		DataSource::Vector(Arc::new(self))
	}
}

impl VectorDataSource for RetainedVectorDataSource {
	fn count(&self) -> usize {
		self.elements.len()
	}

	fn element(&self, index: usize) -> Option<DataSource> {
		self.elements.get(index).cloned()
	}
}
