#![warn(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod fault;
pub mod geom;

use std::fmt;

use fault::{
    FaultAnalysis, FaultRecord, NO_INTERSECTION, SeparationMeasurement, TraceSet, ViewOptions,
    analyze,
};
use geom::{Line2, Orientation, ViewFrame};
use serde::Serialize;
use wasm_bindgen::prelude::*;

cfg_if::cfg_if! {
    if #[cfg(all(feature = "console_error_panic_hook", target_arch = "wasm32"))] {
        #[wasm_bindgen(start)]
        pub fn initialize() {
            console_error_panic_hook::set_once();
            init_logger();
        }
    } else {
        #[wasm_bindgen(start)]
        pub fn initialize() {
            init_logger();
        }
    }
}

#[cfg(feature = "debug_logs")]
fn init_logger() {
    use log::LevelFilter;
    use wasm_bindgen_console_logger::DEFAULT_LOGGER;
    // A second call finds the logger already installed; keep the first one.
    if log::set_logger(&DEFAULT_LOGGER).is_ok() {
        log::set_max_level(LevelFilter::Debug);
    }
}

#[cfg(not(feature = "debug_logs"))]
fn init_logger() {}

/// Analyse one fault and return a [`FaultReport`] as a plain JS object.
///
/// `magnitude` defaults to [`FaultRecord::DEFAULT_MAGNITUDE`], `elevation` to
/// the elevation of O and `half_extent` to the default view window.
#[wasm_bindgen]
#[allow(clippy::too_many_arguments)]
pub fn analyze_fault(
    fault_dip: f64,
    fault_dip_direction: f64,
    bedding_dip: f64,
    bedding_dip_direction: f64,
    pitch: f64,
    magnitude: Option<f64>,
    elevation: Option<f64>,
    half_extent: Option<f64>,
) -> Result<JsValue, JsValue> {
    let record = FaultRecord::new(
        fault_dip,
        fault_dip_direction,
        bedding_dip,
        bedding_dip_direction,
        pitch,
        magnitude.unwrap_or(FaultRecord::DEFAULT_MAGNITUDE),
    )
    .map_err(to_js_error)?;

    let options = ViewOptions::new(
        elevation,
        half_extent.unwrap_or(ViewOptions::DEFAULT_HALF_EXTENT),
    )
    .map_err(to_js_error)?;

    let report = FaultReport::from_analysis(&analyze(&record, &options));
    serde_wasm_bindgen::to_value(&report).map_err(to_js_error)
}

/// Everything a plotting layer needs for one fault, in serialisable form.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct FaultReport {
    pub fault: OrientationExport,
    pub bedding: OrientationExport,
    pub net_slip: NetSlipExport,
    pub origin: [f64; 3],
    pub hangingwall_origin: [f64; 3],
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cutoff_pitch: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dip_separation: Option<SeparationExport>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub strike_separation: Option<SeparationExport>,
    pub map: ViewExport,
    pub section: ViewExport,
    pub fault_face: ViewExport,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub warnings: Vec<String>,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct OrientationExport {
    pub dip: f64,
    pub dip_direction: f64,
    pub strike: f64,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct NetSlipExport {
    pub pitch: f64,
    pub magnitude: f64,
    pub vector: [f64; 3],
    pub throw: f64,
    pub heave: f64,
    pub character: String,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct SeparationExport {
    pub value: f64,
    pub sense: String,
    pub footwall_cutoff: [f64; 2],
    pub hangingwall_cutoff: [f64; 2],
}

/// One 2D view: the frame it lives in and the items drawn on it.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct ViewExport {
    pub origin: [f64; 3],
    pub u_axis: [f64; 3],
    pub v_axis: [f64; 3],
    pub items: Vec<GeometryItem>,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(tag = "type")]
pub enum GeometryItem {
    Line {
        name: String,
        start: [f64; 2],
        end: [f64; 2],
    },
    Point {
        name: String,
        coordinates: [f64; 2],
    },
    Polygon {
        name: String,
        points: Vec<[f64; 2]>,
    },
    Arrow {
        name: String,
        start: [f64; 2],
        end: [f64; 2],
    },
    /// A plane without a trace in this view, or one that misses the window.
    Missing { name: String, reason: String },
}

impl GeometryItem {
    #[must_use]
    pub fn name(&self) -> &str {
        match self {
            Self::Line { name, .. }
            | Self::Point { name, .. }
            | Self::Polygon { name, .. }
            | Self::Arrow { name, .. }
            | Self::Missing { name, .. } => name,
        }
    }
}

impl FaultReport {
    #[must_use]
    pub fn from_analysis(analysis: &FaultAnalysis) -> Self {
        let record = &analysis.record;
        let model = &analysis.model;
        let half_extent = analysis.options.half_extent;

        let mut map = view_export(&analysis.map.traces.frame);
        append_traces(&mut map.items, &analysis.map.traces, half_extent);
        append_cutoffs(&mut map.items, analysis.strike_separation.as_ref());

        let mut section = view_export(&analysis.section.traces.frame);
        append_traces(&mut section.items, &analysis.section.traces, half_extent);
        append_cutoffs(&mut section.items, analysis.dip_separation.as_ref());

        let ragan = &analysis.ragan;
        let mut fault_face = view_export(&ragan.frame);
        fault_face.items.push(GeometryItem::Polygon {
            name: "fault".to_owned(),
            points: ragan.fault_plane_outline.iter().map(|p| p.to_array()).collect(),
        });
        for (name, trace) in [
            ("footwall", ragan.footwall_trace),
            ("hangingwall", ragan.hangingwall_trace),
        ] {
            fault_face.items.push(line_item(name, trace, half_extent));
        }
        fault_face.items.push(GeometryItem::Arrow {
            name: "net slip".to_owned(),
            start: ragan.slip_vector.start.to_array(),
            end: ragan.slip_vector.end.to_array(),
        });

        Self {
            fault: orientation_export(record.fault),
            bedding: orientation_export(record.bedding),
            net_slip: NetSlipExport {
                pitch: record.net_slip.pitch(),
                magnitude: record.net_slip.magnitude(),
                vector: model.slip.vector().to_array(),
                throw: model.slip.throw(),
                heave: model.slip.heave(),
                character: analysis.slip_character.label().to_owned(),
            },
            origin: model.origin.to_array(),
            hangingwall_origin: model.hangingwall_origin.to_array(),
            cutoff_pitch: analysis.cutoff_pitch,
            dip_separation: analysis
                .dip_separation
                .map(|m| separation_export(&m, analysis.dip_sense.map(|s| s.label()))),
            strike_separation: analysis
                .strike_separation
                .map(|m| separation_export(&m, analysis.strike_sense.map(|s| s.label()))),
            map,
            section,
            fault_face,
            warnings: analysis.diagnostics.warnings.clone(),
        }
    }
}

impl fmt::Display for FaultReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "fault      {:>5.1} / {:05.1}  (strike {:05.1})",
            self.fault.dip, self.fault.dip_direction, self.fault.strike
        )?;
        writeln!(
            f,
            "bedding    {:>5.1} / {:05.1}  (strike {:05.1})",
            self.bedding.dip, self.bedding.dip_direction, self.bedding.strike
        )?;
        writeln!(
            f,
            "net slip   pitch {:.1}, {:.3} units, {}",
            self.net_slip.pitch, self.net_slip.magnitude, self.net_slip.character
        )?;
        writeln!(
            f,
            "           throw {:.3}, heave {:.3}",
            self.net_slip.throw, self.net_slip.heave
        )?;
        let [x, y, z] = self.hangingwall_origin;
        writeln!(f, "O'         ({x:.3}, {y:.3}, {z:.3})")?;
        match self.cutoff_pitch {
            Some(pitch) => writeln!(f, "cut-off    pitch {pitch:.1}")?,
            None => writeln!(f, "cut-off    {NO_INTERSECTION}")?,
        }
        for (label, separation) in [
            ("dip sep.", &self.dip_separation),
            ("strike sep.", &self.strike_separation),
        ] {
            match separation {
                Some(s) => writeln!(f, "{label:<11}{:.3} ({})", s.value, s.sense)?,
                None => writeln!(f, "{label:<11}{NO_INTERSECTION}")?,
            }
        }
        for warning in &self.warnings {
            writeln!(f, "warning: {warning}")?;
        }
        Ok(())
    }
}

fn orientation_export(orientation: Orientation) -> OrientationExport {
    OrientationExport {
        dip: orientation.dip(),
        dip_direction: orientation.dip_direction(),
        strike: orientation.strike_azimuth(),
    }
}

fn separation_export(measurement: &SeparationMeasurement, sense: Option<&str>) -> SeparationExport {
    SeparationExport {
        value: measurement.value,
        sense: sense.unwrap_or_default().to_owned(),
        footwall_cutoff: measurement.footwall_cutoff.to_array(),
        hangingwall_cutoff: measurement.hangingwall_cutoff.to_array(),
    }
}

fn view_export(frame: &ViewFrame) -> ViewExport {
    ViewExport {
        origin: frame.origin.to_array(),
        u_axis: frame.u_axis.to_array(),
        v_axis: frame.v_axis.to_array(),
        items: Vec::new(),
    }
}

fn append_traces(items: &mut Vec<GeometryItem>, traces: &TraceSet, half_extent: f64) {
    for (name, trace) in [
        ("fault", traces.fault),
        ("footwall", traces.footwall),
        ("hangingwall", traces.hangingwall),
    ] {
        items.push(line_item(name, trace, half_extent));
    }
}

fn append_cutoffs(items: &mut Vec<GeometryItem>, measurement: Option<&SeparationMeasurement>) {
    let Some(measurement) = measurement else {
        return;
    };
    for (name, point) in [
        ("footwall cut-off", measurement.footwall_cutoff),
        ("hangingwall cut-off", measurement.hangingwall_cutoff),
    ] {
        items.push(GeometryItem::Point {
            name: name.to_owned(),
            coordinates: point.to_array(),
        });
    }
}

fn line_item(name: &str, trace: Option<Line2>, half_extent: f64) -> GeometryItem {
    let name = name.to_owned();
    match trace {
        None => GeometryItem::Missing {
            name,
            reason: NO_INTERSECTION.to_owned(),
        },
        Some(line) => match line.clip_to_square(half_extent) {
            Some(segment) => GeometryItem::Line {
                name,
                start: segment.start.to_array(),
                end: segment.end.to_array(),
            },
            None => GeometryItem::Missing {
                name,
                reason: "outside the view window".to_owned(),
            },
        },
    }
}

fn to_js_error<E: fmt::Display>(error: E) -> JsValue {
    js_error(&error.to_string())
}

fn js_error(message: &str) -> JsValue {
    #[cfg(target_arch = "wasm32")]
    {
        wasm_bindgen::JsError::new(message).into()
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        let _ = message;
        JsValue::NULL
    }
}

#[cfg(test)]
mod tests {
    use super::{FaultReport, GeometryItem};
    use crate::fault::{FaultRecord, ViewOptions, analyze};

    fn report(record: &FaultRecord) -> FaultReport {
        FaultReport::from_analysis(&analyze(record, &ViewOptions::default()))
    }

    #[test]
    fn worked_example_serialises_every_view() {
        let record = FaultRecord::new(50.0, 156.0, 10.0, 28.0, 40.0, 10.0).unwrap();
        let report = report(&record);

        assert_eq!(report.map.items.len(), 5, "three traces and two cut-offs");
        assert_eq!(report.section.items.len(), 5);
        assert_eq!(report.fault_face.items.len(), 4);
        assert!(report.warnings.is_empty());

        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["net_slip"]["character"], "Left-lateral normal");
        assert_eq!(json["section"]["items"][0]["type"], "Line");
        assert_eq!(json["section"]["items"][0]["name"], "fault");
        assert_eq!(json["fault_face"]["items"][3]["type"], "Arrow");
        assert!(json["dip_separation"]["value"].as_f64().unwrap() < 0.0);
        assert_eq!(json["dip_separation"]["sense"], "apparent normal");
        assert!(json.get("warnings").is_none());
    }

    #[test]
    fn degenerate_views_are_reported_not_dropped() {
        let record = FaultRecord::new(0.0, 90.0, 0.0, 90.0, 30.0, 10.0).unwrap();
        let report = report(&record);

        assert!(report.dip_separation.is_none());
        assert!(report.strike_separation.is_none());
        assert!(report.cutoff_pitch.is_none());
        assert_eq!(report.map.items.len(), 3);
        assert!(
            report
                .map
                .items
                .iter()
                .all(|item| matches!(item, GeometryItem::Missing { .. }))
        );

        let json = serde_json::to_value(&report).unwrap();
        assert!(json.get("dip_separation").is_none());
        assert_eq!(json["map"]["items"][0]["type"], "Missing");
        assert_eq!(json["map"]["items"][0]["reason"], "no intersection for the given inputs");
        assert!(!json["warnings"].as_array().unwrap().is_empty());
    }

    #[test]
    fn text_report_names_missing_separations() {
        let record = FaultRecord::new(0.0, 90.0, 0.0, 90.0, 30.0, 10.0).unwrap();
        let text = report(&record).to_string();
        assert!(text.contains("dip sep.   no intersection for the given inputs"));
        assert!(text.contains("Left-lateral normal"));
    }
}
