use crate::tf;

/// A hierarchical key identifying a sub-field within a prim's namespace.
///
/// Locators are used for invalidation only; they are not resolved against
/// live data sources.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct DataSourceLocator {
	elements: Vec<tf::Token>,
}

impl DataSourceLocator {
	pub fn empty() -> Self {
		Self {
			elements: Vec::new(),
		}
	}

	pub fn new(elements: Vec<tf::Token>) -> Self {
		Self { elements }
	}

	pub fn from_token(token: tf::Token) -> Self {
		Self {
			elements: vec![token],
		}
	}

	pub fn is_empty(&self) -> bool {
		self.elements.is_empty()
	}

	pub fn len(&self) -> usize {
		self.elements.len()
	}

	/// Creates a locator by appending `token` to this one.
	pub fn append(&self, token: tf::Token) -> Self {
		let mut elements = self.elements.clone();
		elements.push(token);
		Self { elements }
	}

	/// Returns whether `other` names this locator or one of its ancestors.
	///
	/// The empty locator is a prefix of every locator.
	pub fn has_prefix(&self, other: &DataSourceLocator) -> bool {
		self.elements.len() >= other.elements.len()
			&& self.elements[..other.elements.len()] == other.elements[..]
	}

	/// Returns whether the namespaces rooted at the two locators overlap,
	/// i.e. whether either is an ancestor-or-equal of the other.
	pub fn intersects(&self, other: &DataSourceLocator) -> bool {
		self.has_prefix(other) || other.has_prefix(self)
	}
}

impl std::fmt::Display for DataSourceLocator {
	fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
		let mut first = true;
		for element in &self.elements {
			if !first {
				write!(f, "/")?;
			}
			write!(f, "{element}")?;
			first = false;
		}
		Ok(())
	}
}

/// A sparse set of locators describing which sub-fields of a prim changed.
///
/// The set is kept minimal: inserting a locator that is already covered by an
/// ancestor is a no-op, and inserting an ancestor drops its covered
/// descendants.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DataSourceLocatorSet {
	locators: Vec<DataSourceLocator>,
}

impl DataSourceLocatorSet {
	pub fn new() -> Self {
		Self {
			locators: Vec::new(),
		}
	}

	pub fn is_empty(&self) -> bool {
		self.locators.is_empty()
	}

	pub fn insert(&mut self, locator: DataSourceLocator) {
		if self.locators.iter().any(|l| locator.has_prefix(l)) {
			return;
		}

		self.locators.retain(|l| !l.has_prefix(&locator));
		self.locators.push(locator);
	}

	/// Returns whether any member overlaps the namespace rooted at `locator`.
	pub fn intersects(&self, locator: &DataSourceLocator) -> bool {
		self.locators.iter().any(|l| l.intersects(locator))
	}

	pub fn iter(&self) -> std::slice::Iter<'_, DataSourceLocator> {
		self.locators.iter()
	}
}

impl FromIterator<DataSourceLocator> for DataSourceLocatorSet {
	fn from_iter<I: IntoIterator<Item = DataSourceLocator>>(iter: I) -> Self {
		let mut set = Self::new();
		for locator in iter {
			set.insert(locator);
		}
		set
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	fn loc(s: &str) -> DataSourceLocator {
		DataSourceLocator::new(s.split('/').map(tf::Token::new).collect())
	}

	#[test]
	fn prefix_matching() {
		assert!(loc("primvars/points").has_prefix(&loc("primvars")));
		assert!(loc("primvars").has_prefix(&loc("primvars")));
		assert!(!loc("primvars").has_prefix(&loc("primvars/points")));
		assert!(loc("primvars").has_prefix(&DataSourceLocator::empty()));
	}

	#[test]
	fn intersection_is_symmetric() {
		assert!(loc("primvars").intersects(&loc("primvars/points")));
		assert!(loc("primvars/points").intersects(&loc("primvars")));
		assert!(!loc("primvars/points").intersects(&loc("primvars/normals")));
		assert!(!loc("mesh").intersects(&loc("primvars")));
	}

	#[test]
	fn set_stays_minimal() {
		let mut set = DataSourceLocatorSet::new();
		set.insert(loc("primvars/points"));
		set.insert(loc("primvars/normals"));
		assert_eq!(set.iter().count(), 2);

		// An ancestor subsumes previously inserted descendants.
		set.insert(loc("primvars"));
		assert_eq!(set.iter().count(), 1);

		// A covered descendant is a no-op.
		set.insert(loc("primvars/points"));
		assert_eq!(set.iter().count(), 1);
	}

	#[test]
	fn set_intersection() {
		let set: DataSourceLocatorSet =
			[loc("primvars/points"), loc("mesh")].into_iter().collect();

		assert!(set.intersects(&loc("primvars")));
		assert!(set.intersects(&loc("primvars/points")));
		assert!(set.intersects(&loc("mesh/topology")));
		assert!(!set.intersects(&loc("primvars/normals")));
		assert!(!set.intersects(&loc("xform")));
	}
}
