pub mod error;
pub mod geometry;
pub mod math;

pub use error::{GeometryError, Result};
pub use geometry::{EndpointPolicy, Line, LineSegment, Ray, Trace};
pub use math::{Vertex, CUTOFF, EPSILON};
