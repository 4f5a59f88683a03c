//! Map and cross-section views of the fault and both bedding planes.
//!
//! Every trace is an `Option<Line2>`: a plane parallel to the view plane has
//! no trace and the `None` is handed on untouched, so a renderer can report
//! "no intersection" for that plane.

use crate::geom::{
    Line2, Line3, Plane, Segment2, Vec2, ViewFrame, intersect_with_horizontal,
    intersect_with_vertical,
};

/// Rendering window and map elevation shared by all views.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewOptions {
    /// Map elevation; `None` uses the elevation of O.
    pub elevation: Option<f64>,
    /// Half side of the square window traces are clipped to.
    pub half_extent: f64,
}

impl ViewOptions {
    pub const DEFAULT_HALF_EXTENT: f64 = 40.0;

    /// Validated options; the elevation must be finite when given and the
    /// window a positive finite size.
    pub fn new(elevation: Option<f64>, half_extent: f64) -> Result<Self, ViewOptionsError> {
        if let Some(z) = elevation.filter(|z| !z.is_finite()) {
            return Err(ViewOptionsError::InvalidElevation(z));
        }
        if !half_extent.is_finite() || half_extent <= 0.0 {
            return Err(ViewOptionsError::InvalidHalfExtent(half_extent));
        }
        Ok(Self {
            elevation,
            half_extent,
        })
    }
}

impl Default for ViewOptions {
    fn default() -> Self {
        Self {
            elevation: None,
            half_extent: Self::DEFAULT_HALF_EXTENT,
        }
    }
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ViewOptionsError {
    #[error("map elevation must be a finite number, got {0}")]
    InvalidElevation(f64),
    #[error("view half extent must be a positive number, got {0}")]
    InvalidHalfExtent(f64),
}

/// Traces of the three planes in one view frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TraceSet {
    pub frame: ViewFrame,
    pub fault: Option<Line2>,
    pub footwall: Option<Line2>,
    pub hangingwall: Option<Line2>,
}

impl TraceSet {
    fn project(frame: ViewFrame, traces: [Option<Line3>; 3]) -> Self {
        let [fault, footwall, hangingwall] =
            traces.map(|trace| trace.and_then(|line| frame.project_line(&line)));
        Self {
            frame,
            fault,
            footwall,
            hangingwall,
        }
    }

    /// Number of planes that produced no trace.
    #[must_use]
    pub fn missing_count(&self) -> usize {
        [self.fault, self.footwall, self.hangingwall]
            .iter()
            .filter(|trace| trace.is_none())
            .count()
    }

    /// Traces clipped to the rendering window, in fault / footwall /
    /// hangingwall order.
    #[must_use]
    pub fn clipped(&self, half_extent: f64) -> [Option<Segment2>; 3] {
        [self.fault, self.footwall, self.hangingwall]
            .map(|trace| trace.and_then(|line| line.clip_to_square(half_extent)))
    }
}

/// Horizontal slice at a given elevation. Frame axes: East, North.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MapView {
    pub elevation: f64,
    /// Fault strike in frame coordinates; the positive sense of strike separation.
    pub along_strike: Option<Vec2>,
    pub traces: TraceSet,
}

/// Vertical slice through O along the fault dip direction.
/// Frame axes: horizontal distance toward the dip direction, elevation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CrossSection {
    pub azimuth: f64,
    /// Fault up-dip direction in frame coordinates; the positive sense of dip separation.
    pub up_dip: Option<Vec2>,
    pub traces: TraceSet,
}

/// Intersects the three planes with the horizontal plane at `elevation`.
///
/// The map frame origin is the footwall anchor O lifted to `elevation`.
#[must_use]
pub fn build_map_view(
    fault: &Plane,
    footwall: &Plane,
    hangingwall: &Plane,
    elevation: f64,
) -> MapView {
    let frame = ViewFrame::map(footwall.point().with_elevation(elevation));
    let traces =
        [fault, footwall, hangingwall].map(|plane| intersect_with_horizontal(plane, elevation));
    MapView {
        elevation,
        along_strike: frame.project_vector(fault.strike_vector()).normalized(),
        traces: TraceSet::project(frame, traces),
    }
}

/// Intersects the three planes with the vertical plane through O (the
/// footwall anchor) that strikes along the fault dip direction.
#[must_use]
pub fn build_cross_section(fault: &Plane, footwall: &Plane, hangingwall: &Plane) -> CrossSection {
    let origin = footwall.point();
    let azimuth = fault.orientation().effective_dip_direction();
    let frame = ViewFrame::section(origin, azimuth);
    let traces =
        [fault, footwall, hangingwall].map(|plane| intersect_with_vertical(plane, origin, azimuth));
    CrossSection {
        azimuth,
        up_dip: frame.project_vector(-fault.dip_vector()).normalized(),
        traces: TraceSet::project(frame, traces),
    }
}
