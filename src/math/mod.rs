pub mod point;

pub use point::{rotate_point, Point2};
