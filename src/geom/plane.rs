//! Oriented planes and their intersection lines.
//!
//! Degenerate intersections (parallel or coincident planes, including planes
//! within [`Tolerance::PARALLEL`] of parallel) are reported as `None` so the
//! caller can say "no intersection" instead of drawing a runaway line.

use super::orientation::Orientation;
use super::{Point3, Tolerance, Vec3};

/// A plane through `point` whose attitude is given by an [`Orientation`].
///
/// The unit normal is always derived from the orientation, so two planes with
/// the same orientation are parallel whatever their points are.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Plane {
    point: Point3,
    orientation: Orientation,
}

impl Plane {
    #[must_use]
    pub const fn new(point: Point3, orientation: Orientation) -> Self {
        Self { point, orientation }
    }

    /// Horizontal plane at `elevation`, anchored above/below `anchor`.
    #[must_use]
    pub fn horizontal(anchor: Point3, elevation: f64) -> Self {
        Self::new(anchor.with_elevation(elevation), Orientation::horizontal())
    }

    /// Vertical plane through `point` striking along `strike_azimuth`.
    #[must_use]
    pub fn vertical(point: Point3, strike_azimuth: f64) -> Self {
        Self::new(point, Orientation::vertical_striking(strike_azimuth))
    }

    #[must_use]
    pub const fn point(&self) -> Point3 {
        self.point
    }

    #[must_use]
    pub const fn orientation(&self) -> Orientation {
        self.orientation
    }

    #[must_use]
    pub fn normal(&self) -> Vec3 {
        self.orientation.to_normal()
    }

    #[must_use]
    pub fn strike_vector(&self) -> Vec3 {
        self.orientation.to_strike_vector()
    }

    #[must_use]
    pub fn dip_vector(&self) -> Vec3 {
        self.orientation.to_dip_vector()
    }

    /// Same orientation, moved to pass through `point`.
    #[must_use]
    pub const fn translated_to(&self, point: Point3) -> Self {
        Self::new(point, self.orientation)
    }

    /// Signed distance along the upward normal.
    #[must_use]
    pub fn signed_distance(&self, p: Point3) -> f64 {
        p.sub_point(self.point).dot(self.normal())
    }

    #[must_use]
    pub fn contains_point(&self, p: Point3, tol: Tolerance) -> bool {
        tol.approx_zero_f64(self.signed_distance(p))
    }

    /// `d` of the plane equation `n · x = d`.
    #[must_use]
    fn offset(&self) -> f64 {
        self.normal().dot(self.point.to_vec3())
    }
}

/// Builds the plane through `point` with the given attitude.
#[must_use]
pub fn make_plane(point: Point3, orientation: Orientation) -> Plane {
    Plane::new(point, orientation)
}

/// Infinite line in world coordinates; `direction` is unit length.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Line3 {
    pub point: Point3,
    pub direction: Vec3,
}

impl Line3 {
    #[must_use]
    pub fn point_at(&self, t: f64) -> Point3 {
        self.point + self.direction * t
    }

    #[must_use]
    pub fn distance_to_point(&self, p: Point3) -> f64 {
        p.sub_point(self.point).cross(self.direction).length()
    }
}

/// Intersection line of two planes.
///
/// The direction is `normalize(n_a × n_b)`. The point solves the two plane
/// equations plus `direction · x = direction · a.point`, i.e. it is the point
/// of the line nearest to `a.point`.
#[must_use]
pub fn intersect_planes(a: &Plane, b: &Plane) -> Option<Line3> {
    let na = a.normal();
    let nb = b.normal();
    let axis = na.cross(nb);

    // |na × nb| is the sine of the angle between two unit normals.
    if !axis.is_finite() || axis.length() <= Tolerance::PARALLEL.eps {
        return None;
    }
    let direction = axis.normalized()?;

    let d1 = a.offset();
    let d2 = b.offset();
    let d3 = direction.dot(a.point.to_vec3());

    // Cramer's rule on the rows (na, nb, direction).
    let det = na.dot(nb.cross(direction));
    if !det.is_finite() || det.abs() <= Tolerance::default_geom().eps {
        return None;
    }
    let solution =
        (nb.cross(direction) * d1 + direction.cross(na) * d2 + na.cross(nb) * d3) / det;
    if !solution.is_finite() {
        return None;
    }

    Some(Line3 {
        point: Point3::new(solution.x, solution.y, solution.z),
        direction,
    })
}

/// Trace of `plane` on the horizontal plane at `elevation`.
#[must_use]
pub fn intersect_with_horizontal(plane: &Plane, elevation: f64) -> Option<Line3> {
    intersect_planes(plane, &Plane::horizontal(plane.point(), elevation))
}

/// Trace of `plane` on the vertical plane through `through_point` striking
/// along `strike_azimuth`.
#[must_use]
pub fn intersect_with_vertical(
    plane: &Plane,
    through_point: Point3,
    strike_azimuth: f64,
) -> Option<Line3> {
    intersect_planes(plane, &Plane::vertical(through_point, strike_azimuth))
}
