//! Geometry kernel: vectors, field orientations, planes and 2D view frames.
//!
//! Nothing in here knows about faults. The structural-geology engine in
//! [`crate::fault`] is built entirely on these primitives.

mod core;
mod orientation;
mod plane;
mod view;

pub use self::core::{Point2, Point3, Tolerance, Vec2, Vec3};
pub use orientation::{
    HORIZONTAL_DIP_DIRECTION, Orientation, OrientationError, azimuth_vector, normalize_azimuth,
    to_dip_vector, to_normal, to_strike_vector,
};
pub use plane::{
    Line3, Plane, intersect_planes, intersect_with_horizontal, intersect_with_vertical,
    make_plane,
};
pub use view::{Line2, Segment2, ViewFrame, intersect_lines_2d};

#[cfg(test)]
mod tests;
