//! Net-slip input (pitch and magnitude) and its application to the hangingwall.
//!
//! Pitch is measured inside the fault plane from the fault's right-hand
//! strike vector, turning toward down-dip. The resulting vector is the motion
//! of the hangingwall relative to the footwall:
//!
//! | pitch | hangingwall moves | character     |
//! |-------|-------------------|---------------|
//! | 0     | along strike      | left-lateral  |
//! | 90    | down-dip          | normal        |
//! | 180   | against strike    | right-lateral |
//! | 270   | up-dip            | reverse       |

use crate::geom::{Plane, Point3, Vec3};

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum NetSlipError {
    #[error("pitch must be finite and within [0, 360], got {0}")]
    InvalidPitch(f64),
    #[error("net-slip magnitude must be finite and >= 0, got {0}")]
    InvalidMagnitude(f64),
}

/// Pitch (degrees) and magnitude of the net slip on a fault.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NetSlip {
    pitch: f64,
    magnitude: f64,
}

impl NetSlip {
    /// Validates the slip. Pitch 360 is stored as 0; a zero magnitude is legal.
    pub fn new(pitch: f64, magnitude: f64) -> Result<Self, NetSlipError> {
        if !pitch.is_finite() || !(0.0..=360.0).contains(&pitch) {
            return Err(NetSlipError::InvalidPitch(pitch));
        }
        if !magnitude.is_finite() || magnitude < 0.0 {
            return Err(NetSlipError::InvalidMagnitude(magnitude));
        }
        Ok(Self {
            pitch: pitch % 360.0,
            magnitude,
        })
    }

    #[must_use]
    pub const fn pitch(self) -> f64 {
        self.pitch
    }

    #[must_use]
    pub const fn magnitude(self) -> f64 {
        self.magnitude
    }

    /// Unit direction of hangingwall motion within `fault`.
    ///
    /// The strike vector is rotated by the pitch about the downward fault
    /// normal, which turns strike toward down-dip for positive pitch.
    #[must_use]
    pub fn direction(self, fault: &Plane) -> Vec3 {
        let strike = fault.strike_vector();
        strike
            .rotated_about(-fault.normal(), self.pitch.to_radians())
            .unwrap_or(strike)
    }

    /// Full displacement of the hangingwall relative to the footwall.
    #[must_use]
    pub fn slip_vector(self, fault: &Plane) -> SlipVector {
        SlipVector(self.direction(fault) * self.magnitude)
    }
}

/// Hangingwall displacement in world coordinates; computed once per record.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SlipVector(Vec3);

impl SlipVector {
    #[must_use]
    pub const fn vector(self) -> Vec3 {
        self.0
    }

    #[must_use]
    pub fn length(self) -> f64 {
        self.0.length()
    }

    /// Vertical component; negative when the hangingwall drops.
    #[must_use]
    pub const fn throw(self) -> f64 {
        self.0.z
    }

    /// Length of the horizontal projection.
    #[must_use]
    pub fn heave(self) -> f64 {
        self.0.x.hypot(self.0.y)
    }
}

/// Moves `origin` by the net slip, giving the hangingwall reference point O′.
///
/// A zero magnitude returns `origin` unchanged.
#[must_use]
pub fn apply_net_slip(origin: Point3, fault: &Plane, net_slip: &NetSlip) -> Point3 {
    if net_slip.magnitude() == 0.0 {
        return origin;
    }
    origin + net_slip.slip_vector(fault).vector()
}
