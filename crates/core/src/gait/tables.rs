//! Static gait step tables for the reference robot build
//!
//! Angle columns are in canonical joint order (URP, URA, LRA, LRP, ULP,
//! ULA, LLA, LLP); the final argument is the hold time in milliseconds.
//! Values are hand-tuned against the calibration angles in
//! [`crate::joint::calibration`] and not derived at runtime.

use super::Step;

pub(super) static STANDBY: [Step; 1] = [Step::new([80, 112, 70, 88, 95, 65, 100, 82], 1000)];

pub(super) static READY: [Step; 1] = [Step::new([100, 132, 50, 78, 75, 45, 120, 92], 2000)];

pub(super) static FORWARD: [Step; 8] = [
    Step::new([125, 132, 50, 78, 75, 45, 120, 117], 200),
    Step::new([125, 162, 50, 78, 75, 45, 90, 117], 400),
    Step::new([100, 162, 50, 53, 50, 45, 90, 92], 200),
    Step::new([100, 132, 80, 53, 50, 15, 120, 92], 400),
    Step::new([125, 132, 80, 78, 75, 15, 120, 117], 200),
    Step::new([125, 162, 50, 78, 75, 45, 90, 117], 400),
    Step::new([100, 162, 50, 78, 75, 45, 90, 92], 200),
    Step::new([100, 132, 50, 78, 75, 45, 120, 92], 400),
];

pub(super) static BACKWARD: [Step; 8] = [
    Step::new([125, 132, 50, 78, 75, 45, 120, 117], 200),
    Step::new([125, 102, 50, 78, 75, 45, 150, 117], 400),
    Step::new([100, 102, 50, 53, 50, 45, 150, 92], 200),
    Step::new([100, 132, 20, 53, 50, 75, 120, 92], 400),
    Step::new([125, 132, 20, 78, 75, 75, 120, 117], 200),
    Step::new([125, 102, 50, 78, 75, 45, 150, 117], 400),
    Step::new([100, 102, 50, 78, 75, 45, 150, 92], 200),
    Step::new([100, 132, 50, 78, 75, 45, 120, 92], 400),
];

pub(super) static TURN_LEFT: [Step; 9] = [
    Step::new([125, 172, 50, 78, 75, 45, 120, 92], 200),
    Step::new([100, 172, 50, 78, 75, 45, 120, 92], 400),
    Step::new([100, 172, 90, 53, 75, 45, 120, 92], 200),
    Step::new([100, 172, 90, 78, 75, 45, 120, 92], 400),
    Step::new([100, 172, 90, 78, 75, 45, 160, 117], 200),
    Step::new([100, 172, 90, 78, 75, 45, 160, 92], 400),
    Step::new([100, 172, 90, 78, 50, 85, 160, 92], 200),
    Step::new([100, 172, 90, 78, 75, 85, 160, 92], 400),
    Step::new([100, 132, 50, 78, 75, 45, 120, 92], 400),
];

pub(super) static TURN_RIGHT: [Step; 9] = [
    Step::new([125, 92, 50, 78, 75, 45, 120, 92], 200),
    Step::new([100, 92, 50, 78, 75, 45, 120, 92], 400),
    Step::new([100, 92, 10, 53, 75, 45, 120, 92], 200),
    Step::new([100, 92, 10, 78, 75, 45, 120, 92], 400),
    Step::new([100, 92, 10, 78, 75, 45, 80, 117], 200),
    Step::new([100, 92, 10, 78, 75, 45, 80, 92], 400),
    Step::new([100, 92, 10, 78, 50, 5, 80, 92], 200),
    Step::new([100, 92, 10, 78, 75, 5, 80, 92], 400),
    Step::new([100, 132, 50, 78, 75, 45, 120, 92], 400),
];

pub(super) static STRAFE_LEFT: [Step; 5] = [
    Step::new([100, 132, 20, 53, 50, 75, 120, 92], 200),
    Step::new([125, 132, 20, 78, 75, 75, 120, 117], 400),
    Step::new([125, 162, 50, 78, 75, 45, 90, 117], 200),
    Step::new([100, 162, 50, 53, 50, 45, 90, 92], 400),
    Step::new([100, 132, 50, 78, 75, 45, 120, 92], 400),
];

pub(super) static STRAFE_RIGHT: [Step; 5] = [
    Step::new([125, 102, 50, 78, 75, 45, 150, 117], 200),
    Step::new([100, 102, 50, 53, 50, 45, 150, 92], 400),
    Step::new([100, 132, 80, 53, 50, 15, 120, 92], 200),
    Step::new([125, 132, 80, 78, 75, 15, 120, 117], 400),
    Step::new([100, 132, 50, 78, 75, 45, 120, 92], 400),
];

pub(super) static WAVE_HELLO: [Step; 12] = [
    Step::new([100, 132, 50, 68, 90, 45, 120, 112], 100),
    Step::new([100, 132, 50, 68, 82, 35, 120, 112], 50),
    Step::new([180, 132, 50, 68, 90, 35, 120, 112], 400),
    Step::new([180, 172, 50, 68, 90, 35, 120, 112], 200),
    Step::new([180, 132, 50, 68, 90, 35, 120, 112], 200),
    Step::new([180, 172, 50, 68, 90, 35, 120, 112], 200),
    Step::new([180, 132, 50, 68, 90, 35, 120, 112], 200),
    Step::new([180, 172, 50, 68, 90, 35, 120, 112], 400),
    Step::new([180, 132, 50, 68, 90, 35, 120, 112], 50),
    Step::new([100, 132, 50, 68, 90, 35, 120, 112], 50),
    Step::new([100, 132, 50, 68, 82, 45, 120, 112], 50),
    Step::new([100, 132, 50, 68, 90, 45, 120, 112], 900),
];

pub(super) static DANCE_1: [Step; 9] = [
    Step::new([60, 92, 90, 78, 90, 85, 80, 92], 400),
    Step::new([90, 92, 90, 108, 90, 85, 80, 92], 400),
    Step::new([90, 92, 90, 78, 90, 85, 80, 62], 400),
    Step::new([90, 92, 90, 78, 120, 85, 80, 92], 400),
    Step::new([60, 92, 90, 78, 90, 85, 80, 92], 400),
    Step::new([90, 92, 90, 108, 90, 85, 80, 92], 400),
    Step::new([90, 92, 90, 78, 90, 85, 80, 62], 400),
    Step::new([90, 92, 90, 78, 120, 85, 80, 92], 400),
    Step::new([90, 92, 90, 78, 90, 85, 80, 92], 400),
];

pub(super) static DANCE_2: [Step; 8] = [
    Step::new([100, 92, 90, 68, 95, 85, 80, 82], 400),
    Step::new([80, 92, 90, 88, 75, 85, 80, 102], 400),
    Step::new([100, 92, 90, 68, 95, 85, 80, 82], 400),
    Step::new([80, 92, 90, 88, 75, 85, 80, 102], 400),
    Step::new([100, 92, 90, 68, 95, 85, 80, 82], 400),
    Step::new([80, 92, 90, 88, 75, 85, 80, 102], 400),
    Step::new([100, 92, 90, 68, 95, 85, 80, 82], 400),
    Step::new([80, 92, 90, 88, 95, 85, 80, 82], 400),
];

pub(super) static DANCE_3: [Step; 16] = [
    Step::new([80, 92, 90, 80, 95, 85, 80, 82], 50),
    Step::new([80, 92, 2, 88, 95, 85, 80, 82], 100),
    Step::new([80, 92, 2, 88, 95, 85, 80, 76], 50),
    Step::new([80, 92, 2, 88, 95, 85, 170, 82], 100),
    Step::new([100, 92, 2, 63, 75, 85, 170, 82], 400),
    Step::new([80, 92, 2, 88, 95, 85, 170, 82], 400),
    Step::new([100, 92, 2, 88, 75, 85, 170, 107], 400),
    Step::new([80, 92, 2, 88, 95, 85, 170, 82], 400),
    Step::new([100, 92, 2, 63, 75, 85, 170, 82], 400),
    Step::new([80, 92, 2, 88, 95, 85, 170, 82], 400),
    Step::new([100, 92, 2, 88, 75, 85, 170, 107], 400),
    Step::new([80, 92, 2, 88, 95, 85, 170, 82], 50),
    Step::new([80, 92, 2, 80, 95, 85, 170, 82], 50),
    Step::new([80, 92, 90, 88, 95, 85, 170, 82], 100),
    Step::new([80, 92, 90, 80, 95, 85, 170, 76], 50),
    Step::new([80, 92, 90, 88, 95, 85, 80, 82], 500),
];

pub(super) static LIE_DOWN: [Step; 2] = [
    Step::new([110, 90, 90, 70, 70, 90, 90, 110], 1000),
    Step::new([100, 132, 50, 78, 75, 45, 120, 92], 1000),
];

pub(super) static FIGHTING: [Step; 15] = [
    Step::new([70, 132, 50, 78, 105, 45, 120, 92], 500),
    Step::new([70, 112, 30, 78, 105, 25, 100, 92], 300),
    Step::new([70, 152, 70, 78, 105, 65, 140, 92], 300),
    Step::new([70, 112, 30, 78, 105, 25, 100, 92], 300),
    Step::new([70, 152, 70, 78, 105, 65, 140, 92], 300),
    Step::new([70, 112, 30, 78, 105, 25, 100, 92], 300),
    Step::new([70, 132, 50, 78, 105, 45, 120, 92], 500),
    Step::new([100, 132, 50, 98, 75, 45, 120, 72], 500),
    Step::new([100, 112, 30, 98, 75, 25, 100, 72], 300),
    Step::new([100, 152, 70, 98, 75, 65, 140, 72], 300),
    Step::new([100, 112, 30, 98, 75, 25, 100, 72], 300),
    Step::new([100, 152, 70, 98, 75, 65, 140, 72], 300),
    Step::new([100, 112, 30, 98, 75, 25, 100, 72], 300),
    Step::new([100, 132, 50, 98, 75, 45, 120, 72], 500),
    Step::new([100, 132, 50, 78, 75, 45, 120, 92], 500),
];

pub(super) static PUSH_UPS: [Step; 21] = [
    Step::new([100, 132, 2, 68, 75, 45, 120, 92], 50),
    Step::new([100, 132, 2, 78, 75, 45, 120, 102], 50),
    Step::new([100, 132, 2, 78, 75, 45, 170, 92], 50),
    Step::new([100, 132, 2, 58, 75, 45, 170, 112], 50),
    Step::new([100, 102, 2, 58, 75, 75, 170, 112], 500),
    Step::new([60, 102, 2, 58, 120, 75, 170, 112], 500),
    Step::new([100, 102, 2, 58, 75, 75, 170, 112], 500),
    Step::new([60, 102, 2, 58, 120, 75, 170, 112], 500),
    Step::new([100, 102, 2, 58, 75, 75, 170, 112], 500),
    Step::new([60, 102, 2, 58, 120, 75, 170, 112], 500),
    Step::new([100, 102, 2, 58, 75, 75, 170, 112], 500),
    Step::new([60, 102, 2, 58, 120, 75, 170, 112], 500),
    Step::new([100, 102, 2, 58, 75, 75, 170, 112], 500),
    Step::new([60, 102, 2, 58, 120, 75, 170, 112], 500),
    Step::new([100, 102, 2, 58, 75, 75, 170, 112], 500),
    Step::new([60, 102, 2, 58, 120, 75, 170, 112], 500),
    Step::new([60, 132, 2, 58, 120, 45, 170, 112], 200),
    Step::new([60, 132, 50, 48, 120, 45, 170, 112], 100),
    Step::new([60, 132, 50, 78, 120, 45, 120, 122], 100),
    Step::new([60, 132, 50, 78, 120, 45, 120, 92], 100),
    Step::new([100, 132, 50, 78, 75, 45, 120, 92], 400),
];

pub(super) static SLEEP: [Step; 4] = [
    Step::new([100, 178, 2, 78, 75, 3, 170, 92], 500),
    Step::new([0, 178, 2, 175, 177, 3, 170, 2], 3000),
    Step::new([100, 178, 2, 78, 75, 3, 170, 92], 500),
    Step::new([100, 132, 50, 78, 75, 45, 120, 92], 1000),
];
