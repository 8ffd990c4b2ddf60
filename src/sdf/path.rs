use crate::tf;
use std::sync::Arc;

/// A path value used to locate prims in a scenegraph.
///
/// Paths are immutable after construction; modifying operations return new
/// paths. Storage is shared between a path and the paths derived from it only
/// through the element tokens, which are themselves shared strings.
#[derive(Debug, Clone, Eq, PartialEq, Hash)]
pub struct Path {
	elements: Arc<[tf::Token]>,
	absolute: bool,
}

impl Path {
	/// The empty path value.
	pub fn empty_path() -> Self {
		Self {
			elements: Arc::from([]),
			absolute: false,
		}
	}

	/// The absolute path representing the top of the namespace hierarchy.
	pub fn absolute_root_path() -> Self {
		Self {
			elements: Arc::from([]),
			absolute: true,
		}
	}

	/// Returns true if this path is the [`Self::empty_path`].
	pub fn is_empty(&self) -> bool {
		self.elements.is_empty() && !self.absolute
	}

	/// Returns true if this path is the [`Self::absolute_root_path`].
	pub fn is_absolute_root(&self) -> bool {
		self.elements.is_empty() && self.absolute
	}

	/// The number of path elements, not counting the absolute root.
	pub fn element_count(&self) -> usize {
		self.elements.len()
	}

	/// Returns the name of the prim identified by the path as a token.
	///
	/// The empty and root paths have the empty token as their name.
	pub fn name_token(&self) -> tf::Token {
		self.elements.last().cloned().unwrap_or_default()
	}

	/// Return the path that identifies this path's namespace parent.
	pub fn parent_path(&self) -> Self {
		if self.elements.is_empty() {
			return Self::empty_path();
		}

		Self {
			elements: Arc::from(&self.elements[..self.elements.len() - 1]),
			absolute: self.absolute,
		}
	}

	/// Creates a path by appending an element for `child_name` to this path.
	pub fn append_child(&self, child_name: &tf::Token) -> Self {
		if child_name.is_empty() {
			return Self::empty_path();
		}

		let mut elements = self.elements.to_vec();
		elements.push(child_name.clone());

		Self {
			elements: Arc::from(elements),
			absolute: self.absolute,
		}
	}

	/// Returns whether `prefix` is this path or one of its ancestors.
	pub fn has_prefix(&self, prefix: &Path) -> bool {
		self.absolute == prefix.absolute
			&& self.elements.len() >= prefix.elements.len()
			&& self.elements[..prefix.elements.len()] == prefix.elements[..]
	}
}

impl Default for Path {
	fn default() -> Self {
		Self::empty_path()
	}
}

impl From<&str> for Path {
	fn from(s: &str) -> Self {
		if s.is_empty() {
			return Self::empty_path();
		}

		let absolute = s.starts_with('/');
		let elements: Vec<tf::Token> = s
			.split('/')
			.filter(|e| !e.is_empty())
			.map(tf::Token::new)
			.collect();

		if !absolute && elements.is_empty() {
			return Self::empty_path();
		}

		Self {
			elements: Arc::from(elements),
			absolute,
		}
	}
}

impl std::fmt::Display for Path {
	fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
		if self.is_absolute_root() {
			return write!(f, "/");
		}

		let mut first = true;
		for element in self.elements.iter() {
			if first && !self.absolute {
				write!(f, "{element}")?;
			} else {
				write!(f, "/{element}")?;
			}
			first = false;
		}

		Ok(())
	}
}
