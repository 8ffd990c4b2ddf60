/// An owned, contiguous array of typed elements.
#[derive(Default, Debug, Clone, PartialEq)]
pub struct Array<T> {
	data: Vec<T>,
}

impl<T> Array<T> {
	pub fn new() -> Self {
		Self { data: Vec::new() }
	}

	pub fn len(&self) -> usize {
		self.data.len()
	}

	pub fn is_empty(&self) -> bool {
		self.data.is_empty()
	}

	pub fn iter(&self) -> std::slice::Iter<'_, T> {
		self.data.iter()
	}

	pub fn push(&mut self, value: T) {
		self.data.push(value);
	}

	pub fn as_slice(&self) -> &[T] {
		&self.data
	}

	pub fn contains(&self, value: &T) -> bool
	where
		T: PartialEq,
	{
		self.data.contains(value)
	}
}

impl<T> From<Vec<T>> for Array<T> {
	fn from(vec: Vec<T>) -> Self {
		Array { data: vec }
	}
}

impl<T> std::ops::Index<usize> for Array<T> {
	type Output = T;

	fn index(&self, index: usize) -> &Self::Output {
		&self.data[index]
	}
}

impl<'a, T> IntoIterator for &'a Array<T> {
	type Item = &'a T;
	type IntoIter = std::slice::Iter<'a, T>;

	fn into_iter(self) -> Self::IntoIter {
		self.iter()
	}
}

impl<T> IntoIterator for Array<T> {
	type Item = T;
	type IntoIter = std::vec::IntoIter<T>;

	fn into_iter(self) -> Self::IntoIter {
		self.data.into_iter()
	}
}

impl<T> FromIterator<T> for Array<T> {
	fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Array<T> {
		Self {
			data: Vec::from_iter(iter),
		}
	}
}
