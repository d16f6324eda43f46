use glam::Vec2;

/// Axis-aligned bounding box. The empty box is the identity of
/// `expanded_to_contain`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AABox {
	min: Vec2,
	max: Vec2,
}

impl AABox {
	pub const EMPTY: Self = Self {
		min: Vec2::MAX,
		max: Vec2::MIN,
	};

	pub fn new(min: Vec2, max: Vec2) -> Self {
		Self { min, max }
	}

	pub fn is_empty(&self) -> bool {
		self.min.x > self.max.x || self.min.y > self.max.y
	}

	pub fn min(&self) -> Vec2 {
		self.min
	}

	pub fn max(&self) -> Vec2 {
		self.max
	}

	pub fn expanded_to_contain(self, point: Vec2) -> Self {
		Self::new(self.min.min(point), self.max.max(point))
	}

	pub fn containing(points: impl IntoIterator<Item = Vec2>) -> Self {
		points
			.into_iter()
			.fold(Self::EMPTY, Self::expanded_to_contain)
	}

	pub fn contains(&self, point: Vec2) -> bool {
		point.x >= self.min.x && point.y >= self.min.y && point.x <= self.max.x && point.y <= self.max.y
	}
}

impl Default for AABox {
	fn default() -> Self {
		Self::EMPTY
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use glam::vec2;

	#[test]
	fn empty() {
		assert!(AABox::EMPTY.is_empty());
		assert!(!AABox::EMPTY.contains(Vec2::ZERO));
		assert!(AABox::containing([]).is_empty());
	}

	#[test]
	fn containing_points() {
		let b = AABox::containing([vec2(1.0, 5.0), vec2(-2.0, 3.0), vec2(0.0, 7.0)]);
		assert_eq!(b.min(), vec2(-2.0, 3.0));
		assert_eq!(b.max(), vec2(1.0, 7.0));
		assert!(b.contains(vec2(0.0, 5.0)));
		// Boundary points are inside.
		assert!(b.contains(vec2(-2.0, 7.0)));
		assert!(!b.contains(vec2(0.0, 2.9)));
	}

	#[test]
	fn single_point_box() {
		let b = AABox::containing([vec2(4.0, -1.0)]);
		assert!(!b.is_empty());
		assert!(b.contains(vec2(4.0, -1.0)));
		assert!(!b.contains(vec2(4.1, -1.0)));
	}
}
