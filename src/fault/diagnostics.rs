//! What went missing during an analysis, and why.
//!
//! Degenerate geometry is an expected outcome, not an error, so it is counted
//! here instead of being raised. A renderer can use [`AnalysisDiagnostics`]
//! to print "no intersection for the given inputs" next to an empty view.
//!
//! # Example
//!
//! ```ignore
//! use fault_slip::fault::{FaultRecord, ViewOptions, analyze};
//!
//! let record = FaultRecord::new(0.0, 90.0, 0.0, 90.0, 30.0, 10.0)?;
//! let analysis = analyze(&record, &ViewOptions::default());
//!
//! if !analysis.diagnostics.is_clean() {
//!     for warning in &analysis.diagnostics.warnings {
//!         eprintln!("{warning}");
//!     }
//! }
//! ```

use std::fmt;

/// Wording shown to end users for any missing trace or measurement.
pub const NO_INTERSECTION: &str = "no intersection for the given inputs";

#[derive(Debug, Default, Clone, PartialEq)]
pub struct AnalysisDiagnostics {
    /// Planes without a trace in the map view.
    pub missing_map_traces: usize,

    /// Planes without a trace in the cross-section.
    pub missing_section_traces: usize,

    /// Bedding planes without a cut-off line on the fault face.
    pub missing_fault_traces: usize,

    /// Separations that could not be measured (0, 1 or 2).
    pub unmeasurable_separations: usize,

    /// Human-readable notes, e.g. "map view: fault: no intersection for the given inputs".
    pub warnings: Vec<String>,
}

impl AnalysisDiagnostics {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns `true` if every trace exists and both separations were measured.
    #[must_use]
    pub fn is_clean(&self) -> bool {
        self.missing_trace_count() == 0
            && self.unmeasurable_separations == 0
            && self.warnings.is_empty()
    }

    #[must_use]
    pub fn has_warnings(&self) -> bool {
        !self.warnings.is_empty()
    }

    #[must_use]
    pub fn missing_trace_count(&self) -> usize {
        self.missing_map_traces + self.missing_section_traces + self.missing_fault_traces
    }

    pub fn add_warning(&mut self, warning: impl Into<String>) {
        self.warnings.push(warning.into());
    }

    /// Records a missing trace of `what` in `view`.
    pub fn note_missing(&mut self, view: &str, what: &str) {
        self.add_warning(format!("{view}: {what}: {NO_INTERSECTION}"));
    }

    /// Short summary for logging.
    ///
    /// Format: `"clean"` or `"missing map:{n} section:{n} fault:{n} separations:{n}"`
    /// listing only non-zero counts.
    #[must_use]
    pub fn summary(&self) -> String {
        let mut parts = Vec::new();
        if self.missing_map_traces > 0 {
            parts.push(format!("map:{}", self.missing_map_traces));
        }
        if self.missing_section_traces > 0 {
            parts.push(format!("section:{}", self.missing_section_traces));
        }
        if self.missing_fault_traces > 0 {
            parts.push(format!("fault:{}", self.missing_fault_traces));
        }
        if self.unmeasurable_separations > 0 {
            parts.push(format!("separations:{}", self.unmeasurable_separations));
        }

        if parts.is_empty() {
            "clean".to_string()
        } else {
            format!("missing {}", parts.join(" "))
        }
    }
}

impl fmt::Display for AnalysisDiagnostics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Analysis Diagnostics:")?;

        if self.missing_trace_count() > 0 {
            writeln!(f, "  Missing traces:")?;
            if self.missing_map_traces > 0 {
                writeln!(f, "    - Map view: {}", self.missing_map_traces)?;
            }
            if self.missing_section_traces > 0 {
                writeln!(f, "    - Cross-section: {}", self.missing_section_traces)?;
            }
            if self.missing_fault_traces > 0 {
                writeln!(f, "    - Fault face: {}", self.missing_fault_traces)?;
            }
        }

        if self.unmeasurable_separations > 0 {
            writeln!(f, "  Unmeasurable separations: {}", self.unmeasurable_separations)?;
        }

        if !self.warnings.is_empty() {
            writeln!(f, "  Warnings:")?;
            for warning in &self.warnings {
                writeln!(f, "    - {warning}")?;
            }
        }

        let status = if self.is_clean() { "CLEAN" } else { "DEGENERATE" };
        writeln!(f, "  Status: {status}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_clean() {
        let diag = AnalysisDiagnostics::default();
        assert!(diag.is_clean());
        assert!(!diag.has_warnings());
        assert_eq!(diag.summary(), "clean");
    }

    #[test]
    fn test_note_missing_uses_user_wording() {
        let mut diag = AnalysisDiagnostics::new();
        diag.missing_map_traces += 1;
        diag.note_missing("map view", "fault");

        assert!(!diag.is_clean());
        assert_eq!(diag.warnings[0], "map view: fault: no intersection for the given inputs");
    }

    #[test]
    fn test_summary_lists_non_zero_counts() {
        let diag = AnalysisDiagnostics {
            missing_map_traces: 1,
            missing_section_traces: 2,
            unmeasurable_separations: 1,
            ..Default::default()
        };

        assert_eq!(diag.missing_trace_count(), 3);
        assert_eq!(diag.summary(), "missing map:1 section:2 separations:1");
    }

    #[test]
    fn test_display() {
        let diag = AnalysisDiagnostics {
            missing_fault_traces: 2,
            warnings: vec![format!("fault face: footwall: {NO_INTERSECTION}")],
            ..Default::default()
        };

        let output = format!("{diag}");
        assert!(output.contains("Fault face: 2"));
        assert!(output.contains("fault face: footwall"));
        assert!(output.contains("DEGENERATE"));
    }
}
