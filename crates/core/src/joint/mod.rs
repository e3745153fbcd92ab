//! Joint model and actuator abstraction for the eight-servo quadruped
//!
//! This module provides platform-agnostic types and functions for driving
//! the robot's leg servos:
//! - The [`Joint`] identifier set and its canonical ordering
//! - The [`JointActuator`] trait the movement engine writes through
//! - Angle → pulse width → duty cycle conversions for 50 Hz servo PWM
//!
//! # Design
//!
//! This module is pure `no_std` with no feature gates. Platform-specific
//! implementations (hardware PWM, simulated servo banks) live outside this
//! crate and plug in through [`JointActuator`].

pub mod calibration;

pub use calibration::{INITIAL_POSE, INITIAL_POSE_HOLD_MS, LEVEL_POSE, JointCalibration};

/// Number of independently driven joints (two per leg).
pub const JOINT_COUNT: usize = 8;

/// Servo pulse width at the low end of the travel range (microseconds).
pub const MIN_PULSE_US: u16 = 500;

/// Servo pulse width at the high end of the travel range (microseconds).
pub const MAX_PULSE_US: u16 = 2500;

/// One of the eight leg joints.
///
/// Each leg has an "arm" rotation joint and a "paw" lift joint. The variant
/// order here is the canonical joint order: gait tables list their angle
/// columns in this order and actuator sweeps write joints in this order.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Joint {
    /// Upper right paw
    UpperRightPaw,
    /// Upper right arm
    UpperRightArm,
    /// Lower right arm
    LowerRightArm,
    /// Lower right paw
    LowerRightPaw,
    /// Upper left paw
    UpperLeftPaw,
    /// Upper left arm
    UpperLeftArm,
    /// Lower left arm
    LowerLeftArm,
    /// Lower left paw
    LowerLeftPaw,
}

impl Joint {
    /// All joints in canonical order.
    pub const ALL: [Joint; JOINT_COUNT] = [
        Joint::UpperRightPaw,
        Joint::UpperRightArm,
        Joint::LowerRightArm,
        Joint::LowerRightPaw,
        Joint::UpperLeftPaw,
        Joint::UpperLeftArm,
        Joint::LowerLeftArm,
        Joint::LowerLeftPaw,
    ];

    /// Position of this joint in the canonical order (0..8).
    ///
    /// Doubles as the column index into gait table angle rows.
    pub fn index(self) -> usize {
        self as usize
    }

    /// ESP8266 GPIO pin this joint's servo is wired to on the
    /// reference robot's extension board.
    pub fn gpio_pin(self) -> u8 {
        match self {
            Joint::UpperRightPaw => 14,
            Joint::UpperRightArm => 12,
            Joint::LowerRightArm => 13,
            Joint::LowerRightPaw => 15,
            Joint::UpperLeftPaw => 16,
            Joint::UpperLeftArm => 5,
            Joint::LowerLeftArm => 4,
            Joint::LowerLeftPaw => 2,
        }
    }

    /// Short display name for logs and telemetry.
    pub fn name(self) -> &'static str {
        match self {
            Joint::UpperRightPaw => "URP",
            Joint::UpperRightArm => "URA",
            Joint::LowerRightArm => "LRA",
            Joint::LowerRightPaw => "LRP",
            Joint::UpperLeftPaw => "ULP",
            Joint::UpperLeftArm => "ULA",
            Joint::LowerLeftArm => "LLA",
            Joint::LowerLeftPaw => "LLP",
        }
    }
}

/// Joint actuator interface the movement engine drives.
///
/// `attach` is called once per joint at startup with the servo travel range;
/// `write` is called once per joint whenever a step boundary is crossed.
/// There is no read-back path and no error path: an implementation that
/// cannot honor a write should drop or log it rather than fail the caller.
pub trait JointActuator {
    /// Configure a joint's servo with its pulse width travel range.
    fn attach(&mut self, joint: Joint, min_pulse_us: u16, max_pulse_us: u16);

    /// Command a joint to a target angle in degrees (0-180).
    ///
    /// The angle takes effect asynchronously in hardware; the caller does
    /// not wait for the joint to arrive.
    fn write(&mut self, joint: Joint, angle_deg: u8);
}

/// Convert a target angle in degrees to a servo pulse width (microseconds)
///
/// Maps 1..=180 degrees onto the 500..=2500 microsecond travel range with
/// integer arithmetic. Out-of-range angles are clamped to the travel
/// endpoints, the same limiting a servo driver applies to pulses outside
/// the attach range.
///
/// # Arguments
///
/// * `angle_deg` - Target angle (degrees)
///
/// # Returns
///
/// Pulse width in microseconds
pub fn angle_to_pulse_us(angle_deg: u8) -> u16 {
    let clamped = angle_deg.clamp(1, 180) as u32;
    let pulse = (clamped - 1) * (MAX_PULSE_US - MIN_PULSE_US) as u32 / 179 + MIN_PULSE_US as u32;
    pulse as u16
}

/// Convert pulse width to PWM duty cycle
///
/// For 50 Hz PWM (20 ms period):
/// - 500 μs = 2.5% duty cycle
/// - 1500 μs = 7.5% duty cycle
/// - 2500 μs = 12.5% duty cycle
///
/// # Arguments
///
/// * `pulse_us` - Pulse width in microseconds
///
/// # Returns
///
/// Duty cycle (0.0 to 1.0)
pub fn pulse_to_duty_cycle(pulse_us: u16) -> f32 {
    // 50 Hz = 20,000 μs period
    const PERIOD_US: f32 = 20_000.0;
    pulse_us as f32 / PERIOD_US
}
