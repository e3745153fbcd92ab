//! Per-joint calibration data from the zeroing procedure
//!
//! Each build of the robot is zeroed during assembly: every servo is driven
//! to a known angle and the leg is fastened in the aligned position. The
//! angles recorded here are the reference build's results and define each
//! joint's mechanically usable travel.

use super::{JOINT_COUNT, Joint};

/// Calibrated reference angles for one joint (degrees).
///
/// `home` and `extended` are the mechanical travel endpoints; `level` is
/// the zeroing angle at which the leg segment sits flat. Note that home
/// may be numerically above extended: half the joints are mirrored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct JointCalibration {
    /// Angle with the leg segment folded against the body
    pub home_deg: u8,
    /// Angle with the leg segment fully extended
    pub extended_deg: u8,
    /// Zeroing angle (leg segment level)
    pub level_deg: u8,
}

/// Calibration table in canonical joint order.
const CALIBRATIONS: [JointCalibration; JOINT_COUNT] = [
    // URP
    JointCalibration {
        home_deg: 0,
        extended_deg: 180,
        level_deg: 140,
    },
    // URA
    JointCalibration {
        home_deg: 180,
        extended_deg: 40,
        level_deg: 92,
    },
    // LRA
    JointCalibration {
        home_deg: 0,
        extended_deg: 135,
        level_deg: 90,
    },
    // LRP
    JointCalibration {
        home_deg: 175,
        extended_deg: 0,
        level_deg: 28,
    },
    // ULP
    JointCalibration {
        home_deg: 177,
        extended_deg: 0,
        level_deg: 40,
    },
    // ULA
    JointCalibration {
        home_deg: 0,
        extended_deg: 135,
        level_deg: 85,
    },
    // LLA
    JointCalibration {
        home_deg: 175,
        extended_deg: 35,
        level_deg: 80,
    },
    // LLP
    JointCalibration {
        home_deg: 2,
        extended_deg: 180,
        level_deg: 142,
    },
];

/// Look up the calibrated reference angles for a joint.
pub fn calibration(joint: Joint) -> JointCalibration {
    CALIBRATIONS[joint.index()]
}

/// All joints at their level (zeroing) angles, canonical order.
pub const LEVEL_POSE: [u8; JOINT_COUNT] = [140, 92, 90, 28, 40, 85, 80, 142];

/// Power-on pose commanded before the first gait, canonical order.
pub const INITIAL_POSE: [u8; JOINT_COUNT] = [60, 92, 90, 102, 120, 85, 82, 62];

/// Hold time for the power-on pose (milliseconds).
pub const INITIAL_POSE_HOLD_MS: u32 = 500;
