//! Dip and strike separation read off the section and map views.
//!
//! Both values are the signed distance, along the fault trace, from the
//! footwall cut-off point to the hangingwall cut-off point:
//!
//! - dip separation is positive up-dip, so positive reads as apparent reverse
//!   and negative as apparent normal;
//! - strike separation is positive along the fault's right-hand strike, so
//!   positive reads as apparent left-lateral and negative as apparent
//!   right-lateral.
//!
//! When either bedding trace is missing or runs parallel to the fault trace
//! there is nothing to measure and the result is `None`.

use crate::geom::{Line2, Point2, Tolerance, Vec2, intersect_lines_2d};

use super::projector::{CrossSection, MapView, TraceSet};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeparationKind {
    DipSeparation,
    StrikeSeparation,
}

/// Apparent sense of offset in a cross-section.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DipSense {
    Normal,
    Reverse,
    NoSeparation,
}

impl DipSense {
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Normal => "apparent normal",
            Self::Reverse => "apparent reverse",
            Self::NoSeparation => "no separation",
        }
    }
}

/// Apparent sense of offset in map view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StrikeSense {
    LeftLateral,
    RightLateral,
    NoSeparation,
}

impl StrikeSense {
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::LeftLateral => "apparent left-lateral",
            Self::RightLateral => "apparent right-lateral",
            Self::NoSeparation => "no separation",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SeparationMeasurement {
    pub kind: SeparationKind,
    /// Signed distance along the fault trace (see module docs).
    pub value: f64,
    /// Where the footwall bedding trace meets the fault trace.
    pub footwall_cutoff: Point2,
    /// Where the hangingwall bedding trace meets the fault trace.
    pub hangingwall_cutoff: Point2,
}

impl SeparationMeasurement {
    #[must_use]
    pub fn magnitude(&self) -> f64 {
        self.value.abs()
    }

    /// `None` for a strike separation.
    #[must_use]
    pub fn dip_sense(&self) -> Option<DipSense> {
        (self.kind == SeparationKind::DipSeparation).then(|| {
            if Tolerance::default_geom().approx_zero_f64(self.value) {
                DipSense::NoSeparation
            } else if self.value > 0.0 {
                DipSense::Reverse
            } else {
                DipSense::Normal
            }
        })
    }

    /// `None` for a dip separation.
    #[must_use]
    pub fn strike_sense(&self) -> Option<StrikeSense> {
        (self.kind == SeparationKind::StrikeSeparation).then(|| {
            if Tolerance::default_geom().approx_zero_f64(self.value) {
                StrikeSense::NoSeparation
            } else if self.value > 0.0 {
                StrikeSense::LeftLateral
            } else {
                StrikeSense::RightLateral
            }
        })
    }
}

/// Dip separation in the cross-section; positive up-dip.
#[must_use]
pub fn dip_separation(section: &CrossSection) -> Option<SeparationMeasurement> {
    measure(&section.traces, section.up_dip?, SeparationKind::DipSeparation)
}

/// Strike separation in the map view; positive along the fault strike.
#[must_use]
pub fn strike_separation(map: &MapView) -> Option<SeparationMeasurement> {
    measure(&map.traces, map.along_strike?, SeparationKind::StrikeSeparation)
}

fn measure(
    traces: &TraceSet,
    reference: Vec2,
    kind: SeparationKind,
) -> Option<SeparationMeasurement> {
    let fault = traces.fault?;
    let footwall_cutoff = cutoff_on(&fault, traces.footwall?)?;
    let hangingwall_cutoff = cutoff_on(&fault, traces.hangingwall?)?;

    let value = hangingwall_cutoff.sub_point(footwall_cutoff).dot(reference);
    value.is_finite().then_some(SeparationMeasurement {
        kind,
        value,
        footwall_cutoff,
        hangingwall_cutoff,
    })
}

fn cutoff_on(fault: &Line2, bedding: Line2) -> Option<Point2> {
    intersect_lines_2d(fault, &bedding)
}
