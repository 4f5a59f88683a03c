//! One-call analysis of a fault record: every view and measurement at once.

use super::classify::{SlipCharacter, cutoff_pitch};
use super::diagnostics::{AnalysisDiagnostics, NO_INTERSECTION};
use super::projector::{
    CrossSection, MapView, TraceSet, ViewOptions, build_cross_section, build_map_view,
};
use super::ragan::{RaganDiagram, build_ragan_diagram};
use super::record::{FaultModel, FaultRecord};
use super::separation::{
    DipSense, SeparationMeasurement, StrikeSense, dip_separation, strike_separation,
};

#[derive(Debug, Clone, PartialEq)]
pub struct FaultAnalysis {
    pub record: FaultRecord,
    pub options: ViewOptions,
    pub model: FaultModel,
    pub map: MapView,
    pub section: CrossSection,
    pub ragan: RaganDiagram,
    pub dip_separation: Option<SeparationMeasurement>,
    pub strike_separation: Option<SeparationMeasurement>,
    pub dip_sense: Option<DipSense>,
    pub strike_sense: Option<StrikeSense>,
    /// Pitch of the bedding cut-off line on the fault.
    pub cutoff_pitch: Option<f64>,
    pub slip_character: SlipCharacter,
    pub diagnostics: AnalysisDiagnostics,
}

/// Builds the model and all three views for `record`.
///
/// Pure: the same record and options always give the same analysis.
#[must_use]
pub fn analyze(record: &FaultRecord, options: &ViewOptions) -> FaultAnalysis {
    let model = FaultModel::from_record(record);
    let elevation = options.elevation.unwrap_or(model.origin.z);

    let map = build_map_view(&model.fault, &model.footwall, &model.hangingwall, elevation);
    let section = build_cross_section(&model.fault, &model.footwall, &model.hangingwall);
    let ragan = build_ragan_diagram(
        &model.fault,
        &model.footwall,
        &model.hangingwall,
        &record.net_slip,
        options.half_extent,
    );

    let dip = dip_separation(&section);
    let strike = strike_separation(&map);

    let mut diagnostics = AnalysisDiagnostics::new();
    note_traces(&mut diagnostics, "map view", &map.traces);
    diagnostics.missing_map_traces = map.traces.missing_count();
    note_traces(&mut diagnostics, "cross-section", &section.traces);
    diagnostics.missing_section_traces = section.traces.missing_count();

    for (name, trace) in [
        ("footwall", ragan.footwall_trace),
        ("hangingwall", ragan.hangingwall_trace),
    ] {
        if trace.is_none() {
            diagnostics.missing_fault_traces += 1;
            diagnostics.note_missing("fault face", name);
        }
    }

    for (name, measurement) in [("dip separation", dip), ("strike separation", strike)] {
        if measurement.is_none() {
            diagnostics.unmeasurable_separations += 1;
            diagnostics.add_warning(format!("{name}: {NO_INTERSECTION}"));
        }
    }

    log::debug!(
        "analyzed fault {:.1}/{:.1} bedding {:.1}/{:.1} pitch {:.1}: \
         dip sep {:?}, strike sep {:?} ({})",
        record.fault.dip(),
        record.fault.dip_direction(),
        record.bedding.dip(),
        record.bedding.dip_direction(),
        record.net_slip.pitch(),
        dip.map(|m| m.value),
        strike.map(|m| m.value),
        diagnostics.summary()
    );

    FaultAnalysis {
        record: *record,
        options: *options,
        model,
        map,
        section,
        ragan,
        dip_sense: dip.and_then(|m| m.dip_sense()),
        strike_sense: strike.and_then(|m| m.strike_sense()),
        dip_separation: dip,
        strike_separation: strike,
        cutoff_pitch: cutoff_pitch(&model.fault, &model.footwall),
        slip_character: SlipCharacter::from_pitch(record.net_slip.pitch()),
        diagnostics,
    }
}

fn note_traces(diagnostics: &mut AnalysisDiagnostics, view: &str, traces: &TraceSet) {
    for (name, trace) in [
        ("fault", traces.fault),
        ("footwall", traces.footwall),
        ("hangingwall", traces.hangingwall),
    ] {
        if trace.is_none() {
            diagnostics.note_missing(view, name);
        }
    }
}
