//! Simulated servo bank recording everything the movement engine commands.

use std::sync::{Arc, Mutex};

use quadbot_core::joint::{
    JOINT_COUNT, Joint, JointActuator, angle_to_pulse_us, pulse_to_duty_cycle,
};

#[derive(Debug, Default)]
struct BankState {
    ranges: [Option<(u16, u16)>; JOINT_COUNT],
    angles: [Option<u8>; JOINT_COUNT],
    writes: u64,
}

/// Eight recorded servo channels behind a shared handle.
///
/// Stands in for the PWM hardware on a host run: it stores the attach range
/// and the last commanded angle per joint instead of generating pulses.
/// Clones share state, so the bridge can drive the bank while tests and
/// observers read back what was commanded.
#[derive(Clone, Debug, Default)]
pub struct SimServoBank {
    state: Arc<Mutex<BankState>>,
}

impl SimServoBank {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pulse range the joint was attached with, if it was attached.
    pub fn attach_range(&self, joint: Joint) -> Option<(u16, u16)> {
        self.state.lock().ok()?.ranges[joint.index()]
    }

    /// Last commanded angle for the joint in degrees.
    pub fn angle(&self, joint: Joint) -> Option<u8> {
        self.state.lock().ok()?.angles[joint.index()]
    }

    /// Pulse width the last commanded angle maps to, in microseconds.
    pub fn pulse_us(&self, joint: Joint) -> Option<u16> {
        self.angle(joint).map(angle_to_pulse_us)
    }

    /// 50 Hz PWM duty cycle the last commanded angle maps to.
    pub fn duty_cycle(&self, joint: Joint) -> Option<f32> {
        self.pulse_us(joint).map(pulse_to_duty_cycle)
    }

    /// Total writes across all joints since construction.
    pub fn write_count(&self) -> u64 {
        self.state.lock().map(|state| state.writes).unwrap_or(0)
    }

    /// Last commanded angle per joint, in canonical joint order.
    pub fn pose(&self) -> [Option<u8>; JOINT_COUNT] {
        self.state
            .lock()
            .map(|state| state.angles)
            .unwrap_or([None; JOINT_COUNT])
    }
}

impl JointActuator for SimServoBank {
    fn attach(&mut self, joint: Joint, min_pulse_us: u16, max_pulse_us: u16) {
        if let Ok(mut state) = self.state.lock() {
            state.ranges[joint.index()] = Some((min_pulse_us, max_pulse_us));
        }
    }

    fn write(&mut self, joint: Joint, angle_deg: u8) {
        if let Ok(mut state) = self.state.lock() {
            state.angles[joint.index()] = Some(angle_deg);
            state.writes += 1;
        }
    }
}
