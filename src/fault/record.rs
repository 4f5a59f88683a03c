//! Validated inputs and the three planes derived from them.

use crate::geom::{Orientation, OrientationError, Plane, Point3};

use super::slip::{NetSlip, NetSlipError, SlipVector, apply_net_slip};

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum FaultError {
    #[error("invalid fault orientation: {0}")]
    Fault(#[source] OrientationError),
    #[error("invalid bedding orientation: {0}")]
    Bedding(#[source] OrientationError),
    #[error("invalid net slip: {0}")]
    NetSlip(#[from] NetSlipError),
}

/// Everything the engine needs for one fault, as an immutable value.
///
/// Each request builds (or reuses) a record and hands it to the engine; the
/// engine keeps nothing between calls.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FaultRecord {
    pub fault: Orientation,
    pub bedding: Orientation,
    pub net_slip: NetSlip,
}

impl FaultRecord {
    /// Net-slip magnitude used when the caller leaves it blank.
    pub const DEFAULT_MAGNITUDE: f64 = 10.0;

    pub fn new(
        fault_dip: f64,
        fault_dip_direction: f64,
        bedding_dip: f64,
        bedding_dip_direction: f64,
        pitch: f64,
        magnitude: f64,
    ) -> Result<Self, FaultError> {
        let fault = Orientation::new(fault_dip, fault_dip_direction).map_err(FaultError::Fault)?;
        let bedding =
            Orientation::new(bedding_dip, bedding_dip_direction).map_err(FaultError::Bedding)?;
        let net_slip = NetSlip::new(pitch, magnitude)?;
        Ok(Self {
            fault,
            bedding,
            net_slip,
        })
    }

    pub fn with_default_magnitude(
        fault_dip: f64,
        fault_dip_direction: f64,
        bedding_dip: f64,
        bedding_dip_direction: f64,
        pitch: f64,
    ) -> Result<Self, FaultError> {
        Self::new(
            fault_dip,
            fault_dip_direction,
            bedding_dip,
            bedding_dip_direction,
            pitch,
            Self::DEFAULT_MAGNITUDE,
        )
    }
}

/// Planes of a record placed in space.
///
/// O is the world origin and lies on both the fault and the footwall bedding,
/// so it sits on the footwall cut-off line. O′ is O moved by the net slip and
/// anchors the hangingwall bedding.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FaultModel {
    pub origin: Point3,
    pub hangingwall_origin: Point3,
    pub slip: SlipVector,
    pub fault: Plane,
    pub footwall: Plane,
    pub hangingwall: Plane,
}

impl FaultModel {
    #[must_use]
    pub fn from_record(record: &FaultRecord) -> Self {
        Self::at(Point3::ORIGIN, record)
    }

    /// Same construction anchored at an arbitrary O.
    #[must_use]
    pub fn at(origin: Point3, record: &FaultRecord) -> Self {
        let fault = Plane::new(origin, record.fault);
        let footwall = Plane::new(origin, record.bedding);
        let hangingwall_origin = apply_net_slip(origin, &fault, &record.net_slip);

        Self {
            origin,
            hangingwall_origin,
            slip: record.net_slip.slip_vector(&fault),
            fault,
            footwall,
            hangingwall: footwall.translated_to(hangingwall_origin),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geom::Tolerance;

    #[test]
    fn default_magnitude_is_ten() {
        let record = FaultRecord::with_default_magnitude(50.0, 156.0, 10.0, 28.0, 40.0).unwrap();
        assert_eq!(record.net_slip.magnitude(), 10.0);
    }

    #[test]
    fn errors_name_the_offending_plane() {
        let err = FaultRecord::new(95.0, 10.0, 10.0, 10.0, 0.0, 1.0).unwrap_err();
        assert!(matches!(err, FaultError::Fault(OrientationError::InvalidDip(_))));

        let err = FaultRecord::new(45.0, 10.0, 10.0, -3.0, 0.0, 1.0).unwrap_err();
        assert!(matches!(
            err,
            FaultError::Bedding(OrientationError::InvalidDipDirection(_))
        ));
        assert!(err.to_string().starts_with("invalid bedding orientation"));

        let err = FaultRecord::new(45.0, 10.0, 10.0, 3.0, 400.0, 1.0).unwrap_err();
        assert!(matches!(err, FaultError::NetSlip(NetSlipError::InvalidPitch(_))));
    }

    #[test]
    fn hangingwall_bedding_passes_through_displaced_origin() {
        let tol = Tolerance::default_geom();
        let record = FaultRecord::new(50.0, 156.0, 10.0, 28.0, 40.0, 10.0).unwrap();
        let model = FaultModel::from_record(&record);

        assert!(model.fault.contains_point(model.origin, tol));
        assert!(model.footwall.contains_point(model.origin, tol));
        assert!(model.fault.contains_point(model.hangingwall_origin, tol));
        assert!(model.hangingwall.contains_point(model.hangingwall_origin, tol));
        assert!((model.origin.distance_to(model.hangingwall_origin) - 10.0).abs() < 1e-9);
        assert_eq!(model.hangingwall.normal(), model.footwall.normal());
    }
}
