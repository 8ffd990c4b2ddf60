use crate::{gf, sdf, tf, vt};
use half::f16;

/// A polymorphic value holder for the types trafficked by data sources.
///
/// An empty value is the explicit "no value" result; it is distinct from any
/// held value, including default-constructed ones.
#[derive(Debug, Clone, PartialEq)]
pub struct Value {
	store: ValueStore,
}

impl Value {
	pub fn new<T: ValueType>(value: T) -> Self {
		Value {
			store: value.store(),
		}
	}

	pub fn empty() -> Self {
		Value {
			store: ValueStore::Empty,
		}
	}

	pub fn is_empty(&self) -> bool {
		matches!(self.store, ValueStore::Empty)
	}

	pub fn get<T: ValueType>(&self) -> Option<T> {
		T::load(&self.store)
	}
}

impl Default for Value {
	fn default() -> Self {
		Self::empty()
	}
}

#[derive(Debug, Clone, PartialEq)]
pub enum ValueStore {
	Empty,

	Bool(bool),
	BoolArray(vt::Array<bool>),

	Int(i32),
	IntArray(vt::Array<i32>),

	Half(f16),
	HalfArray(vt::Array<f16>),
	Float(f32),
	FloatArray(vt::Array<f32>),
	Double(f64),
	DoubleArray(vt::Array<f64>),

	Vec2f(gf::Vec2f),
	Vec2fArray(vt::Array<gf::Vec2f>),
	Vec3f(gf::Vec3f),
	Vec3fArray(vt::Array<gf::Vec3f>),
	Vec3d(gf::Vec3d),
	Vec3dArray(vt::Array<gf::Vec3d>),

	Matrix4d(gf::Matrix4d),

	Token(tf::Token),
	TokenArray(vt::Array<tf::Token>),

	String(String),
	StringArray(vt::Array<String>),

	Path(sdf::Path),
	PathArray(vt::Array<sdf::Path>),

	Range3d(gf::Range3d),
}

pub trait ValueType {
	fn load(store: &ValueStore) -> Option<Self>
	where
		Self: Sized;
	fn store(self) -> ValueStore;
}

macro_rules! impl_value_type_clone {
	($type:ty, $store:ident) => {
		impl ValueType for $type {
			fn load(store: &ValueStore) -> Option<Self> {
				match store {
					ValueStore::$store(v) => Some(v.clone()),
					_ => None,
				}
			}

			fn store(self) -> ValueStore {
				ValueStore::$store(self)
			}
		}

		impl From<$type> for Value {
			fn from(value: $type) -> Self {
				Value {
					store: ValueStore::$store(value),
				}
			}
		}
	};
}

macro_rules! impl_value_type_deref {
	($type:ty, $store:ident) => {
		impl ValueType for $type {
			fn load(store: &ValueStore) -> Option<Self> {
				match store {
					ValueStore::$store(v) => Some(*v),
					_ => None,
				}
			}

			fn store(self) -> ValueStore {
				ValueStore::$store(self)
			}
		}

		impl From<$type> for Value {
			fn from(value: $type) -> Self {
				Value {
					store: ValueStore::$store(value),
				}
			}
		}
	};
}

impl_value_type_deref!(bool, Bool);
impl_value_type_clone!(vt::Array<bool>, BoolArray);

impl_value_type_deref!(i32, Int);
impl_value_type_clone!(vt::Array<i32>, IntArray);

impl_value_type_deref!(f16, Half);
impl_value_type_clone!(vt::Array<f16>, HalfArray);
impl_value_type_deref!(f32, Float);
impl_value_type_clone!(vt::Array<f32>, FloatArray);
impl_value_type_deref!(f64, Double);
impl_value_type_clone!(vt::Array<f64>, DoubleArray);

impl_value_type_deref!(gf::Vec2f, Vec2f);
impl_value_type_clone!(vt::Array<gf::Vec2f>, Vec2fArray);
impl_value_type_deref!(gf::Vec3f, Vec3f);
impl_value_type_clone!(vt::Array<gf::Vec3f>, Vec3fArray);
impl_value_type_deref!(gf::Vec3d, Vec3d);
impl_value_type_clone!(vt::Array<gf::Vec3d>, Vec3dArray);

impl_value_type_deref!(gf::Matrix4d, Matrix4d);

impl_value_type_clone!(tf::Token, Token);
impl_value_type_clone!(vt::Array<tf::Token>, TokenArray);

impl_value_type_clone!(String, String);
impl_value_type_clone!(vt::Array<String>, StringArray);

impl_value_type_clone!(sdf::Path, Path);
impl_value_type_clone!(vt::Array<sdf::Path>, PathArray);

impl_value_type_deref!(gf::Range3d, Range3d);
