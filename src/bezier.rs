use glam::Vec2;

/// Quadratic Bezier segment `B(t) = (1-t)²p0 + 2t(1-t)p1 + t²p2`, t ∈ [0, 1].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct QuadBezier {
	pub p0: Vec2,
	pub p1: Vec2,
	pub p2: Vec2,
}

impl QuadBezier {
	pub fn new(p0: Vec2, p1: Vec2, p2: Vec2) -> Self {
		Self { p0, p1, p2 }
	}

	pub fn evaluate(&self, t: f32) -> Vec2 {
		debug_assert!((0.0..=1.0).contains(&t));
		let q0 = self.p0.lerp(self.p1, t);
		let q1 = self.p1.lerp(self.p2, t);
		q0.lerp(q1, t)
	}

	/// First derivative with respect to `t`.
	pub fn derivative(&self, t: f32) -> Vec2 {
		2.0 * (self.p1 - self.p0).lerp(self.p2 - self.p1, t)
	}

	/// Second derivative. Constant over the segment and generally non-zero,
	/// so curvature may jump at joints even where tangents match.
	pub fn second_derivative(&self) -> Vec2 {
		2.0 * (self.p0 - 2.0 * self.p1 + self.p2)
	}

	/// Appends a polyline approximation of the segment (excluding `p0`) whose
	/// deviation from the curve stays below `max_error`.
	pub fn flatten_into(&self, max_error: f32, out: &mut Vec<Vec2>) {
		debug_assert!(max_error > 0.0);
		// The deviation from the chord is t(1-t)|p0 - 2p1 + p2|, at most a
		// quarter of that norm, and shrinks quadratically with subdivision.
		let deviation = 0.25 * (self.p0 - 2.0 * self.p1 + self.p2).length();
		let steps = (deviation / max_error).sqrt().ceil().max(1.0) as usize;
		for i in 1..steps {
			out.push(self.evaluate(i as f32 / steps as f32));
		}
		out.push(self.p2);
	}
}
