use std::ops::{Add, Sub};

/// Integer position in board units.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Point {
	pub x: i64,
	pub y: i64,
}

impl Point {
	pub const ORIGIN: Self = Self { x: 0, y: 0 };

	pub const fn new(x: i64, y: i64) -> Self {
		Self { x, y }
	}
}

impl Add for Point {
	type Output = Self;

	fn add(self, rhs: Self) -> Self {
		Self::new(self.x + rhs.x, self.y + rhs.y)
	}
}

impl Sub for Point {
	type Output = Self;

	fn sub(self, rhs: Self) -> Self {
		Self::new(self.x - rhs.x, self.y - rhs.y)
	}
}
