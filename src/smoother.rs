use glam::Vec2;

use crate::path::{Path, PathCommand};

/// A coordinate fed to [`IncrementalSmoother::try_add_point`] was NaN or
/// infinite.
#[derive(thiserror::Error, Clone, Copy, Debug, PartialEq)]
#[error("non-finite input point {0}")]
pub struct NonFiniteInput(pub Vec2);
static_assertions::assert_impl_all!(NonFiniteInput: std::error::Error, Send, Sync);

/// Incrementally smooths a freehand point stream into line and quadratic
/// Bezier segments whose tangents match at the joints.
///
/// Write the raw samples as p_0, p_1, ..., p_n and let c_i be the midpoint of
/// p_{i-1} and p_i. After the initial move and one straight lead-in segment,
/// every added point extends the path with the quadratic Bezier
///
/// ```text
/// G_i(t) = (1-t)² c_i + 2t(1-t) p_i + t² c_{i+1}
/// ```
///
/// Differentiating, `G_i'(1) = 2(c_{i+1} - p_i) = p_{i+1} - p_i` and
/// `G_{i+1}'(0) = 2(p_{i+1} - c_{i+1}) = p_{i+1} - p_i`, so adjacent segments
/// leave each glue point in the same direction without solving any system of
/// equations. `G_i'' = 2(c_i - 2p_i + c_{i+1})` is a non-zero constant per
/// segment, so curvature still jumps at the joints.
///
/// Each call appends exactly one command, so the accumulated path is
/// renderable mid-stroke for live preview.
#[derive(Clone, Debug, Default)]
pub struct IncrementalSmoother {
	path: Path,
	previous: Option<Vec2>,
	count: usize,
}
static_assertions::assert_impl_all!(IncrementalSmoother: Send, Sync);

impl IncrementalSmoother {
	pub fn new() -> Self {
		Self::default()
	}

	/// Discards the accumulated path and starts a fresh stroke.
	pub fn reset(&mut self) {
		tracing::trace!(points = self.count, "reset stroke");
		self.path.clear();
		self.previous = None;
		self.count = 0;
	}

	/// Feeds the next raw sample, appending exactly one command: `MoveTo` for
	/// the first point of a stroke, `LineTo` to the first midpoint for the
	/// second, and one `QuadTo` per point after that.
	///
	/// Coordinates are assumed finite. NaN or infinite input is passed
	/// through and poisons every midpoint that follows; use
	/// [`try_add_point`](Self::try_add_point) to reject such samples instead.
	pub fn add_point(&mut self, point: Vec2) {
		if !point.is_finite() {
			tracing::warn!(%point, "non-finite input sample");
		}
		self.count += 1;
		let Some(previous) = self.previous.replace(point) else {
			self.path.push(PathCommand::MoveTo(point));
			return;
		};
		let mid = previous.midpoint(point);
		self.path.push(if self.count == 2 {
			PathCommand::LineTo(mid)
		} else {
			PathCommand::QuadTo {
				control: previous,
				end: mid,
			}
		});
	}

	/// Checked variant of [`add_point`](Self::add_point). Rejects non-finite
	/// coordinates, leaving the stroke untouched.
	pub fn try_add_point(&mut self, point: Vec2) -> Result<(), NonFiniteInput> {
		if !point.is_finite() {
			return Err(NonFiniteInput(point));
		}
		self.add_point(point);
		Ok(())
	}

	/// Read-only view of the path accumulated so far. Callable at any time,
	/// including mid-stroke; empty before the first point.
	pub fn path(&self) -> &Path {
		&self.path
	}

	/// Consumes the smoother, returning the finished path.
	pub fn into_path(self) -> Path {
		self.path
	}

	/// Points received since the last reset.
	pub fn point_count(&self) -> usize {
		self.count
	}
}

impl Extend<Vec2> for IncrementalSmoother {
	fn extend<T: IntoIterator<Item = Vec2>>(&mut self, points: T) {
		for point in points {
			self.add_point(point);
		}
	}
}
