//! 2D view frames for rendering plane traces.
//!
//! A [`ViewFrame`] is an origin plus two orthonormal in-plane axes. Lines that
//! lie in the frame's plane are re-expressed in frame coordinates without any
//! distortion, so lengths measured on a view equal lengths in the world.

use super::orientation::azimuth_vector;
use super::plane::{Line3, Plane};
use super::{Point2, Point3, Tolerance, Vec2, Vec3};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewFrame {
    pub origin: Point3,
    pub u_axis: Vec3,
    pub v_axis: Vec3,
}

impl ViewFrame {
    /// Map view: East / North axes on the horizontal plane through `origin`.
    #[must_use]
    pub const fn map(origin: Point3) -> Self {
        Self {
            origin,
            u_axis: Vec3::EAST,
            v_axis: Vec3::NORTH,
        }
    }

    /// Vertical section through `origin`; `u` runs horizontally along
    /// `azimuth`, `v` points up.
    #[must_use]
    pub fn section(origin: Point3, azimuth: f64) -> Self {
        Self {
            origin,
            u_axis: azimuth_vector(azimuth),
            v_axis: Vec3::UP,
        }
    }

    /// Face-on view of an inclined plane: `u` along strike, `v` up-dip.
    #[must_use]
    pub fn plane_face(plane: &Plane) -> Self {
        Self {
            origin: plane.point(),
            u_axis: plane.strike_vector(),
            v_axis: -plane.dip_vector(),
        }
    }

    /// Normal of the frame's plane (`u × v`).
    #[must_use]
    pub fn normal(&self) -> Vec3 {
        self.u_axis.cross(self.v_axis)
    }

    #[must_use]
    pub fn project_vector(&self, v: Vec3) -> Vec2 {
        Vec2::new(v.dot(self.u_axis), v.dot(self.v_axis))
    }

    #[must_use]
    pub fn project_point(&self, p: Point3) -> Point2 {
        let local = p.sub_point(self.origin);
        Point2::new(local.dot(self.u_axis), local.dot(self.v_axis))
    }

    /// Inverse of [`ViewFrame::project_point`] for points on the frame plane.
    #[must_use]
    pub fn lift_point(&self, p: Point2) -> Point3 {
        self.origin + self.u_axis * p.x + self.v_axis * p.y
    }

    /// Re-expresses a line lying in the frame plane in frame coordinates.
    ///
    /// Returns `None` if the line runs (nearly) along the frame normal.
    #[must_use]
    pub fn project_line(&self, line: &Line3) -> Option<Line2> {
        let direction = self.project_vector(line.direction).normalized()?;
        Some(Line2 {
            point: self.project_point(line.point),
            direction,
        })
    }
}

/// Infinite line in a view frame; `direction` is unit length.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Line2 {
    pub point: Point2,
    pub direction: Vec2,
}

impl Line2 {
    #[must_use]
    pub fn point_at(&self, t: f64) -> Point2 {
        self.point.add_vec(self.direction.scale(t))
    }

    /// Parameter of the orthogonal projection of `p` onto the line.
    #[must_use]
    pub fn parameter_of(&self, p: Point2) -> f64 {
        p.sub_point(self.point).dot(self.direction)
    }

    /// The part of the line inside the square `[-half_extent, half_extent]²`.
    #[must_use]
    pub fn clip_to_square(&self, half_extent: f64) -> Option<Segment2> {
        if !half_extent.is_finite() || half_extent <= 0.0 {
            return None;
        }

        // Liang-Barsky over both axes.
        let mut t_min = f64::NEG_INFINITY;
        let mut t_max = f64::INFINITY;
        for (p, d) in [
            (self.point.x, self.direction.x),
            (self.point.y, self.direction.y),
        ] {
            if d.abs() <= Tolerance::default_geom().eps {
                if p.abs() > half_extent {
                    return None;
                }
                continue;
            }
            let t0 = (-half_extent - p) / d;
            let t1 = (half_extent - p) / d;
            t_min = t_min.max(t0.min(t1));
            t_max = t_max.min(t0.max(t1));
        }

        if t_min > t_max || !t_min.is_finite() || !t_max.is_finite() {
            return None;
        }
        Some(Segment2 {
            start: self.point_at(t_min),
            end: self.point_at(t_max),
        })
    }
}

/// Finite piece of a trace, ready for a plotting layer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Segment2 {
    pub start: Point2,
    pub end: Point2,
}

impl Segment2 {
    #[must_use]
    pub fn length(&self) -> f64 {
        self.start.distance_to(self.end)
    }
}

/// Crossing point of two 2D lines, `None` when they are within
/// [`Tolerance::PARALLEL`] of parallel.
#[must_use]
pub fn intersect_lines_2d(a: &Line2, b: &Line2) -> Option<Point2> {
    let denom = a.direction.perp_dot(b.direction);
    if !denom.is_finite() || denom.abs() <= Tolerance::PARALLEL.eps {
        return None;
    }
    let t = b.point.sub_point(a.point).perp_dot(b.direction) / denom;
    let hit = a.point_at(t);
    (hit.x.is_finite() && hit.y.is_finite()).then_some(hit)
}
