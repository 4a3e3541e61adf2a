pub mod line;
pub mod orient;
pub mod ray;
pub mod segment;
pub mod trace;

pub use line::Line;
pub use orient::{ccw, Orientation};
pub use ray::Ray;
pub use segment::LineSegment;
pub use trace::{points_coincide, slope_between, EndpointPolicy, Trace};
