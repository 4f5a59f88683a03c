//! Closed-form classification of slip and separation from pitches.
//!
//! In the fault plane, with the footwall cut-off line through O at pitch β
//! and the hangingwall one displaced by a slip of pitch p, both separations
//! share the factor `sin(β − p)`:
//!
//! ```text
//! dip separation    = m · sin(β − p) / cos β
//! strike separation = m · sin(β − p) / sin β
//! ```
//!
//! so the pitch-versus-cutoff charts can be read without building any view.
//! These agree with the geometric measurements in [`super::separation`].

use crate::geom::{Plane, Tolerance, intersect_planes};

use super::separation::{DipSense, StrikeSense};

/// Degrees within which slip counts as parallel to an axial-plane cut-off.
const FOLD_PITCH_TOLERANCE: f64 = 1e-6;

/// Pitch in [0, 180) of the bedding cut-off line on the fault, measured from
/// the fault strike toward down-dip. `None` when bedding parallels the fault.
#[must_use]
pub fn cutoff_pitch(fault: &Plane, bedding: &Plane) -> Option<f64> {
    let line = intersect_planes(fault, bedding)?;
    let along_strike = line.direction.dot(fault.strike_vector());
    let down_dip = line.direction.dot(fault.dip_vector());
    Some(wrap_half_turn(down_dip.atan2(along_strike).to_degrees()))
}

/// Dip-separation sense predicted from pitches alone.
///
/// `None` when the cut-off line runs down the fault dip (β = 90), where the
/// section shows the bedding parallel to the fault.
#[must_use]
pub fn predict_dip_sense(pitch: f64, cutoff: f64) -> Option<DipSense> {
    let (numerator, denominator) = separation_factors(pitch, cutoff, f64::cos);
    if denominator.abs() <= Tolerance::PARALLEL.eps {
        return None;
    }
    Some(if numerator.abs() <= Tolerance::PARALLEL.eps {
        DipSense::NoSeparation
    } else if numerator / denominator > 0.0 {
        DipSense::Reverse
    } else {
        DipSense::Normal
    })
}

/// Strike-separation sense predicted from pitches alone.
///
/// `None` when the cut-off line is horizontal (β = 0), where the map shows the
/// bedding parallel to the fault.
#[must_use]
pub fn predict_strike_sense(pitch: f64, cutoff: f64) -> Option<StrikeSense> {
    let (numerator, denominator) = separation_factors(pitch, cutoff, f64::sin);
    if denominator.abs() <= Tolerance::PARALLEL.eps {
        return None;
    }
    Some(if numerator.abs() <= Tolerance::PARALLEL.eps {
        StrikeSense::NoSeparation
    } else if numerator / denominator > 0.0 {
        StrikeSense::LeftLateral
    } else {
        StrikeSense::RightLateral
    })
}

fn separation_factors(pitch: f64, cutoff: f64, denominator: fn(f64) -> f64) -> (f64, f64) {
    let beta = cutoff.to_radians();
    ((beta - pitch.to_radians()).sin(), denominator(beta))
}

/// Name of the true slip for a net-slip pitch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SlipCharacter {
    LeftLateral,
    LeftLateralNormal,
    NormalLeftLateral,
    Normal,
    NormalRightLateral,
    RightLateralNormal,
    RightLateral,
    RightLateralReverse,
    ReverseRightLateral,
    Reverse,
    ReverseLeftLateral,
    LeftLateralReverse,
}

impl SlipCharacter {
    /// Lower band edges in degrees; the last band wraps through 360 to 10.
    const BANDS: [(f64, Self); 12] = [
        (10.0, Self::LeftLateralNormal),
        (45.0, Self::NormalLeftLateral),
        (80.0, Self::Normal),
        (100.0, Self::NormalRightLateral),
        (135.0, Self::RightLateralNormal),
        (170.0, Self::RightLateral),
        (190.0, Self::RightLateralReverse),
        (225.0, Self::ReverseRightLateral),
        (260.0, Self::Reverse),
        (280.0, Self::ReverseLeftLateral),
        (315.0, Self::LeftLateralReverse),
        (350.0, Self::LeftLateral),
    ];

    #[must_use]
    pub fn from_pitch(pitch: f64) -> Self {
        let pitch = pitch.rem_euclid(360.0);
        Self::BANDS
            .iter()
            .rev()
            .find(|(edge, _)| pitch >= *edge)
            .map_or(Self::LeftLateral, |(_, character)| *character)
    }

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::LeftLateral => "Left-lateral",
            Self::LeftLateralNormal => "Left-lateral normal",
            Self::NormalLeftLateral => "Normal left-lateral",
            Self::Normal => "Normal",
            Self::NormalRightLateral => "Normal right-lateral",
            Self::RightLateralNormal => "Right-lateral normal",
            Self::RightLateral => "Right-lateral",
            Self::RightLateralReverse => "Right-lateral reverse",
            Self::ReverseRightLateral => "Reverse right-lateral",
            Self::Reverse => "Reverse",
            Self::ReverseLeftLateral => "Reverse left-lateral",
            Self::LeftLateralReverse => "Left-lateral reverse",
        }
    }
}

/// How a fault offsetting a folded marker looks along its length.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FoldFaultCharacter {
    /// Net slip parallels the axial-plane cut-off; one apparent sense throughout.
    Constant,
    /// Apparently normal and apparently reverse segments alternate.
    Alternating,
}

impl FoldFaultCharacter {
    #[must_use]
    pub fn from_pitches(net_slip_pitch: f64, axial_cutoff_pitch: f64) -> Self {
        let offset = wrap_half_turn(net_slip_pitch - axial_cutoff_pitch);
        if offset <= FOLD_PITCH_TOLERANCE || 180.0 - offset <= FOLD_PITCH_TOLERANCE {
            Self::Constant
        } else {
            Self::Alternating
        }
    }

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Constant => "constant apparent sense",
            Self::Alternating => "alternating apparent normal and reverse",
        }
    }
}

fn wrap_half_turn(degrees: f64) -> f64 {
    let wrapped = degrees.rem_euclid(180.0);
    if wrapped >= 180.0 { 0.0 } else { wrapped }
}
