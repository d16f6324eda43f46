use glam::Vec2;

use crate::bezier::QuadBezier;
use crate::geom::AABox;

/// A single path-drawing instruction.
#[derive(Clone, Copy, Debug, PartialEq, derive_more::Display)]
pub enum PathCommand {
	/// Start a new sub-path at the given point.
	#[display("M {_0}")]
	MoveTo(Vec2),
	/// Straight segment from the current point.
	#[display("L {_0}")]
	LineTo(Vec2),
	/// Quadratic Bezier segment from the current point.
	#[display("Q {control} {end}")]
	QuadTo { control: Vec2, end: Vec2 },
}

impl PathCommand {
	/// The point the cursor ends at after this command.
	pub fn end(&self) -> Vec2 {
		match *self {
			PathCommand::MoveTo(p) | PathCommand::LineTo(p) => p,
			PathCommand::QuadTo { end, .. } => end,
		}
	}
}

/// A geometric segment resolved from a command and the cursor preceding it.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Segment {
	Line { start: Vec2, end: Vec2 },
	Quad(QuadBezier),
}

/// An ordered sequence of [`PathCommand`]s describing one stroke.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Path {
	commands: Vec<PathCommand>,
}

impl Path {
	pub fn new() -> Self {
		Self::default()
	}

	/// Smooths a whole stroke in one call. Equivalent to feeding every point
	/// through an [`IncrementalSmoother`](crate::IncrementalSmoother).
	pub fn from_points(points: impl IntoIterator<Item = Vec2>) -> Self {
		points.into_iter().collect()
	}

	pub fn commands(&self) -> &[PathCommand] {
		&self.commands
	}

	pub fn len(&self) -> usize {
		self.commands.len()
	}

	pub fn is_empty(&self) -> bool {
		self.commands.is_empty()
	}

	pub(crate) fn push(&mut self, command: PathCommand) {
		self.commands.push(command);
	}

	pub(crate) fn clear(&mut self) {
		self.commands.clear();
	}

	/// Resolves the command sequence against a cursor, yielding concrete
	/// geometric segments. `MoveTo` only moves the cursor.
	pub fn segments(&self) -> impl Iterator<Item = Segment> + '_ {
		self
			.commands
			.iter()
			.scan(Vec2::ZERO, |cursor, command| {
				let start = std::mem::replace(cursor, command.end());
				Some(match *command {
					PathCommand::MoveTo(_) => None,
					PathCommand::LineTo(end) => Some(Segment::Line { start, end }),
					PathCommand::QuadTo { control, end } => {
						Some(Segment::Quad(QuadBezier::new(start, control, end)))
					}
				})
			})
			.flatten()
	}

	/// A box containing the whole path. Built from each command's points;
	/// a quadratic Bezier lies in the convex hull of its control polygon, so
	/// the box contains the curve, not just its endpoints.
	pub fn bounds(&self) -> AABox {
		AABox::containing(self.commands.iter().flat_map(|command| {
			let control = match *command {
				PathCommand::QuadTo { control, .. } => Some(control),
				_ => None,
			};
			control.into_iter().chain([command.end()])
		}))
	}

	/// Approximates the path as a polyline whose deviation from the true
	/// curve stays below `max_error`.
	pub fn flatten(&self, max_error: f32) -> Vec<Vec2> {
		let mut out = Vec::with_capacity(self.commands.len() + 1);
		for command in &self.commands {
			match *command {
				PathCommand::MoveTo(p) | PathCommand::LineTo(p) => out.push(p),
				PathCommand::QuadTo { control, end } => {
					let start = out.last().copied().unwrap_or(control);
					QuadBezier::new(start, control, end).flatten_into(max_error, &mut out);
				}
			}
		}
		out
	}
}

impl<'a> IntoIterator for &'a Path {
	type Item = &'a PathCommand;
	type IntoIter = std::slice::Iter<'a, PathCommand>;

	fn into_iter(self) -> Self::IntoIter {
		self.commands.iter()
	}
}

impl FromIterator<Vec2> for Path {
	fn from_iter<T: IntoIterator<Item = Vec2>>(points: T) -> Self {
		let mut smoother = crate::IncrementalSmoother::new();
		smoother.extend(points);
		smoother.into_path()
	}
}

impl std::fmt::Display for Path {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		for (i, command) in self.commands.iter().enumerate() {
			if i > 0 {
				f.write_str(" ")?;
			}
			write!(f, "{command}")?;
		}
		Ok(())
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use glam::vec2;

	fn square_stroke() -> Path {
		Path::from_points([
			vec2(0.0, 0.0),
			vec2(10.0, 0.0),
			vec2(10.0, 10.0),
			vec2(0.0, 10.0),
		])
	}

	#[test]
	fn display_is_compact() {
		let path = square_stroke();
		assert_eq!(
			path.to_string(),
			"M [0, 0] L [5, 0] Q [10, 0] [10, 5] Q [10, 10] [5, 10]"
		);
		assert_eq!(Path::new().to_string(), "");
	}

	#[test]
	fn segments_track_the_cursor() {
		let path = square_stroke();
		let segments: Vec<_> = path.segments().collect();
		assert_eq!(
			segments,
			[
				Segment::Line {
					start: vec2(0.0, 0.0),
					end: vec2(5.0, 0.0),
				},
				Segment::Quad(QuadBezier::new(
					vec2(5.0, 0.0),
					vec2(10.0, 0.0),
					vec2(10.0, 5.0),
				)),
				Segment::Quad(QuadBezier::new(
					vec2(10.0, 5.0),
					vec2(10.0, 10.0),
					vec2(5.0, 10.0),
				)),
			]
		);
	}

	#[test]
	fn bounds_contain_controls_and_endpoints() {
		let path = square_stroke();
		let bounds = path.bounds();
		assert_eq!(bounds.min(), vec2(0.0, 0.0));
		assert_eq!(bounds.max(), vec2(10.0, 10.0));
		assert!(bounds.contains(vec2(5.0, 5.0)));
		assert!(!bounds.contains(vec2(10.5, 5.0)));
		assert!(Path::new().bounds().is_empty());
	}

	#[test]
	fn flatten_line_only_path() {
		let path = Path::from_points([vec2(0.0, 0.0), vec2(4.0, 0.0)]);
		assert_eq!(path.flatten(0.1), [vec2(0.0, 0.0), vec2(2.0, 0.0)]);
	}

	#[test]
	fn flatten_preserves_path_endpoints() {
		let path = square_stroke();
		let polyline = path.flatten(0.05);
		assert_eq!(polyline.first().copied(), Some(vec2(0.0, 0.0)));
		assert_eq!(polyline.last().copied(), Some(vec2(5.0, 10.0)));
		// Finer tolerance never yields fewer vertices.
		assert!(polyline.len() >= path.flatten(0.5).len());
	}

	#[test]
	fn path_iterates_by_reference() {
		let path = square_stroke();
		assert_eq!((&path).into_iter().count(), 4);
		assert_eq!(
			(&path).into_iter().next(),
			Some(&PathCommand::MoveTo(vec2(0.0, 0.0)))
		);
	}
}
