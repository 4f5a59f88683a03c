//! Fault plane seen face-on, as in Ragan (2009).
//!
//! The frame is the fault's own strike / up-dip basis with O at the origin,
//! built from the same strike and dip vectors as the map and section views.
//! Bedding cut-off lines and the slip vector are drawn directly on it.

use crate::geom::{Line2, Plane, Point2, Segment2, ViewFrame, intersect_planes};

use super::slip::NetSlip;

#[derive(Debug, Clone, PartialEq)]
pub struct RaganDiagram {
    pub frame: ViewFrame,
    /// Square window of the fault face, counter-clockwise from the lower left.
    pub fault_plane_outline: [Point2; 4],
    /// Footwall cut-off line; `None` when bedding parallels the fault.
    pub footwall_trace: Option<Line2>,
    /// Hangingwall cut-off line; `None` when bedding parallels the fault.
    pub hangingwall_trace: Option<Line2>,
    /// From O to O′ in face coordinates.
    pub slip_vector: Segment2,
}

#[must_use]
pub fn build_ragan_diagram(
    fault: &Plane,
    footwall: &Plane,
    hangingwall: &Plane,
    net_slip: &NetSlip,
    half_extent: f64,
) -> RaganDiagram {
    let frame = ViewFrame::plane_face(fault);
    let on_face = |bedding: &Plane| {
        intersect_planes(fault, bedding).and_then(|line| frame.project_line(&line))
    };

    let slip = net_slip.slip_vector(fault).vector();
    let h = half_extent.abs();

    RaganDiagram {
        frame,
        fault_plane_outline: [
            Point2::new(-h, -h),
            Point2::new(h, -h),
            Point2::new(h, h),
            Point2::new(-h, h),
        ],
        footwall_trace: on_face(footwall),
        hangingwall_trace: on_face(hangingwall),
        slip_vector: Segment2 {
            start: Point2::ORIGIN,
            end: Point2::ORIGIN.add_vec(frame.project_vector(slip)),
        },
    }
}
