//! Graphics Foundations

use half::f16;

#[repr(C)]
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Vec2<T> {
	pub x: T,
	pub y: T,
}

impl<T> Vec2<T> {
	pub fn new(x: T, y: T) -> Self {
		Self { x, y }
	}
}

#[repr(C)]
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Vec3<T> {
	pub x: T,
	pub y: T,
	pub z: T,
}

impl<T> Vec3<T> {
	pub fn new(x: T, y: T, z: T) -> Self {
		Self { x, y, z }
	}
}

pub type Vec2h = Vec2<f16>;
pub type Vec2f = Vec2<f32>;
pub type Vec2d = Vec2<f64>;
pub type Vec2i = Vec2<i32>;

pub type Vec3h = Vec3<f16>;
pub type Vec3f = Vec3<f32>;
pub type Vec3d = Vec3<f64>;
pub type Vec3i = Vec3<i32>;

impl From<Vec3f> for Vec3d {
	fn from(v: Vec3f) -> Self {
		Self {
			x: v.x.into(),
			y: v.y.into(),
			z: v.z.into(),
		}
	}
}

/// A row-major 4x4 matrix of doubles.
#[repr(C)]
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Matrix4d {
	pub data: [[f64; 4]; 4],
}

impl Matrix4d {
	pub fn identity() -> Self {
		Self {
			data: [
				[1.0, 0.0, 0.0, 0.0],
				[0.0, 1.0, 0.0, 0.0],
				[0.0, 0.0, 1.0, 0.0],
				[0.0, 0.0, 0.0, 1.0],
			],
		}
	}

	pub fn from_array(m: [[f64; 4]; 4]) -> Self {
		Self { data: m }
	}

	pub fn as_array(&self) -> &[[f64; 4]; 4] {
		&self.data
	}
}

impl std::ops::Index<usize> for Matrix4d {
	type Output = [f64; 4];

	fn index(&self, i: usize) -> &Self::Output {
		&self.data[i]
	}
}

/// An axis-aligned range in three dimensions.
///
/// An empty range has `min` greater than `max` on every axis.
#[repr(C)]
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Range3d {
	pub min: Vec3d,
	pub max: Vec3d,
}

impl Range3d {
	pub fn new(min: Vec3d, max: Vec3d) -> Self {
		Self { min, max }
	}

	pub fn empty() -> Self {
		Self {
			min: Vec3d::new(f64::MAX, f64::MAX, f64::MAX),
			max: Vec3d::new(f64::MIN, f64::MIN, f64::MIN),
		}
	}

	pub fn is_empty(&self) -> bool {
		self.min.x > self.max.x || self.min.y > self.max.y || self.min.z > self.max.z
	}
}

impl Default for Range3d {
	fn default() -> Self {
		Self::empty()
	}
}
