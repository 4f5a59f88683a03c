//! Structural-geology engine: fault, footwall and hangingwall planes, their
//! map and section traces, separations and the fault-face construction.
//!
//! Everything here is a pure function of a [`FaultRecord`]. Degenerate
//! geometry (parallel planes, parallel traces) comes back as `None` and is
//! counted in [`AnalysisDiagnostics`] rather than raised as an error.

mod analysis;
mod classify;
mod diagnostics;
mod projector;
mod ragan;
mod record;
mod separation;
mod slip;

pub use analysis::{FaultAnalysis, analyze};
pub use classify::{
    FoldFaultCharacter, SlipCharacter, cutoff_pitch, predict_dip_sense, predict_strike_sense,
};
pub use diagnostics::{AnalysisDiagnostics, NO_INTERSECTION};
pub use projector::{
    CrossSection, MapView, TraceSet, ViewOptions, ViewOptionsError, build_cross_section,
    build_map_view,
};
pub use ragan::{RaganDiagram, build_ragan_diagram};
pub use record::{FaultError, FaultModel, FaultRecord};
pub use separation::{
    DipSense, SeparationKind, SeparationMeasurement, StrikeSense, dip_separation,
    strike_separation,
};
pub use slip::{NetSlip, NetSlipError, SlipVector, apply_net_slip};
