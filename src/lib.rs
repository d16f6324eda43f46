//! Incremental smoothing of freehand input strokes.
//!
//! Feed raw pointer samples into an [`IncrementalSmoother`] one at a time and
//! read back a [`Path`] of move, line, and quadratic Bezier commands whose
//! tangent is continuous at every joint. Each sample extends the path by
//! exactly one command, so the accumulated path is renderable mid-stroke.
//!
//! ```
//! use glam::vec2;
//! use inkpath::IncrementalSmoother;
//!
//! let mut smoother = IncrementalSmoother::new();
//! for point in [vec2(0.0, 0.0), vec2(10.0, 0.0), vec2(10.0, 10.0)] {
//! 	smoother.add_point(point);
//! }
//! assert_eq!(smoother.path().len(), 3);
//! ```
//!
//! The crate does no rendering and captures no input; hosts bring their own
//! pointer pipeline and interpret [`PathCommand`]s with whatever curve
//! backend they have.

mod bezier;
pub use bezier::*;

mod geom;
pub use geom::*;

mod path;
pub use path::*;

mod smoother;
pub use smoother::*;
