//! Dip / dip-direction field measurements and their East-North-Up vectors.
//!
//! Conventions used throughout the crate:
//!
//! - x = East, y = North, z = Up.
//! - Dip direction is an azimuth in degrees, clockwise from North.
//! - Strike follows the right-hand rule: strike azimuth = dip direction − 90°,
//!   so the plane dips to the right of an observer looking along strike.
//! - A horizontal plane has no physical strike; it uses the canonical dip
//!   direction [`HORIZONTAL_DIP_DIRECTION`], giving a strike due East and a
//!   "dip" vector due South.
//!
//! The basis `(strike, dip, normal)` satisfies `dip × strike = normal`, with
//! the normal always pointing upward (or horizontal for vertical planes).

use super::{Tolerance, Vec3};

/// Dip direction substituted for horizontal planes.
pub const HORIZONTAL_DIP_DIRECTION: f64 = 180.0;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum OrientationError {
    #[error("dip must be finite and within [0, 90], got {0}")]
    InvalidDip(f64),
    #[error("dip direction must be finite and within [0, 360], got {0}")]
    InvalidDipDirection(f64),
}

/// Attitude of a plane as measured in the field.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Orientation {
    dip: f64,
    dip_direction: f64,
}

impl Orientation {
    /// Validates and builds an orientation. A dip direction of 360 is stored as 0.
    pub fn new(dip: f64, dip_direction: f64) -> Result<Self, OrientationError> {
        if !dip.is_finite() || !(0.0..=90.0).contains(&dip) {
            return Err(OrientationError::InvalidDip(dip));
        }
        if !dip_direction.is_finite() || !(0.0..=360.0).contains(&dip_direction) {
            return Err(OrientationError::InvalidDipDirection(dip_direction));
        }
        Ok(Self {
            dip,
            dip_direction: dip_direction % 360.0,
        })
    }

    #[must_use]
    pub const fn horizontal() -> Self {
        Self {
            dip: 0.0,
            dip_direction: 0.0,
        }
    }

    /// Vertical plane whose right-hand strike points along `strike_azimuth`.
    #[must_use]
    pub fn vertical_striking(strike_azimuth: f64) -> Self {
        Self {
            dip: 90.0,
            dip_direction: normalize_azimuth(strike_azimuth + 90.0),
        }
    }

    /// Recovers the orientation of a plane from any normal (either sense).
    ///
    /// Horizontal planes come back as `Orientation::horizontal()` (dip
    /// direction 0). Vertical planes keep the dip direction the normal points
    /// toward, so a plane built with dip 90 round-trips exactly.
    #[must_use]
    pub fn from_normal(normal: Vec3) -> Option<Self> {
        let n = normal.normalized()?;
        let n = if n.z < 0.0 { -n } else { n };

        let dip = n.z.clamp(-1.0, 1.0).acos().to_degrees();
        if dip <= Tolerance::ANGLE_DEG.eps {
            return Some(Self::horizontal());
        }

        Some(Self {
            dip: dip.min(90.0),
            dip_direction: normalize_azimuth(n.x.atan2(n.y).to_degrees()),
        })
    }

    #[must_use]
    pub const fn dip(self) -> f64 {
        self.dip
    }

    #[must_use]
    pub const fn dip_direction(self) -> f64 {
        self.dip_direction
    }

    #[must_use]
    pub fn is_horizontal(self) -> bool {
        self.dip <= Tolerance::ANGLE_DEG.eps
    }

    /// Dip direction actually used to build vectors (canonical when horizontal).
    #[must_use]
    pub fn effective_dip_direction(self) -> f64 {
        if self.is_horizontal() {
            HORIZONTAL_DIP_DIRECTION
        } else {
            self.dip_direction
        }
    }

    /// Right-hand-rule strike azimuth in [0, 360).
    #[must_use]
    pub fn strike_azimuth(self) -> f64 {
        normalize_azimuth(self.effective_dip_direction() - 90.0)
    }

    /// Upward unit normal.
    #[must_use]
    pub fn to_normal(self) -> Vec3 {
        let (sin_a, cos_a) = self.effective_dip_direction().to_radians().sin_cos();
        let (sin_d, cos_d) = self.dip.to_radians().sin_cos();
        Vec3::new(sin_d * sin_a, sin_d * cos_a, cos_d)
    }

    /// Horizontal unit vector along strike.
    #[must_use]
    pub fn to_strike_vector(self) -> Vec3 {
        let (sin_a, cos_a) = self.effective_dip_direction().to_radians().sin_cos();
        Vec3::new(-cos_a, sin_a, 0.0)
    }

    /// Unit vector pointing down the line of steepest descent.
    #[must_use]
    pub fn to_dip_vector(self) -> Vec3 {
        let (sin_a, cos_a) = self.effective_dip_direction().to_radians().sin_cos();
        let (sin_d, cos_d) = self.dip.to_radians().sin_cos();
        Vec3::new(sin_a * cos_d, cos_a * cos_d, -sin_d)
    }
}

/// Horizontal unit vector for a compass azimuth in degrees.
#[must_use]
pub fn azimuth_vector(azimuth: f64) -> Vec3 {
    let (sin_a, cos_a) = azimuth.to_radians().sin_cos();
    Vec3::new(sin_a, cos_a, 0.0)
}

/// Wraps any angle in degrees into [0, 360).
#[must_use]
pub fn normalize_azimuth(degrees: f64) -> f64 {
    let wrapped = degrees.rem_euclid(360.0);
    // rem_euclid can round up to exactly 360 for tiny negative inputs
    if wrapped >= 360.0 { 0.0 } else { wrapped }
}

/// Converts an orientation into its upward unit normal.
#[must_use]
pub fn to_normal(orientation: Orientation) -> Vec3 {
    orientation.to_normal()
}

#[must_use]
pub fn to_strike_vector(orientation: Orientation) -> Vec3 {
    orientation.to_strike_vector()
}

#[must_use]
pub fn to_dip_vector(orientation: Orientation) -> Vec3 {
    orientation.to_dip_vector()
}
