//! Control App Protocol
//!
//! Everything the robot shares with the phone control app: the framed wire
//! format ([`frame`]), the command vocabulary and acknowledgment packets
//! (this module), and per-connection supervision with its silence standby
//! ([`link`]).
//!
//! The sequencer never sees any of this. A host reads bytes from its
//! transport, pushes them through an [`AppLink`], and maps the resulting
//! [`AppCommand`]s to gait starts.

pub mod frame;
pub mod link;

pub use frame::{CommandFrame, DecoderStats, FrameDecoder};
pub use link::{AppLink, LINK_TIMEOUT_MS, LinkStats};

use crate::gait::GaitId;

// ===== Wire constants =====

/// Frame preamble, also the first two bytes of every acknowledgment.
pub const FRAME_PREAMBLE: [u8; 2] = [0xFF, 0x55];

/// Marker byte the app trails its traffic with; arms the silence standby.
pub const STANDBY_MARKER_BYTE: u8 = 200;

// Action codes (frame offset 9)
pub const ACTION_RUN: u8 = 1;
pub const ACTION_STANDBY: u8 = 3;
pub const ACTION_SLEEP: u8 = 5;
pub const ACTION_LIE_DOWN: u8 = 6;
pub const ACTION_WAVE_HELLO: u8 = 7;
pub const ACTION_PUSH_UPS: u8 = 8;
pub const ACTION_FIGHTING: u8 = 9;
pub const ACTION_DANCE_1: u8 = 10;
pub const ACTION_DANCE_2: u8 = 11;
pub const ACTION_DANCE_3: u8 = 12;

// Movement sub-codes (frame offset 12, run action only)
pub const MOVE_FORWARD: u8 = 0x01;
pub const MOVE_BACKWARD: u8 = 0x02;
pub const MOVE_STRAFE_LEFT: u8 = 0x03;
pub const MOVE_STRAFE_RIGHT: u8 = 0x04;
pub const MOVE_TURN_LEFT: u8 = 0x05;
pub const MOVE_TURN_RIGHT: u8 = 0x06;

/// One well-formed command from the control app.
///
/// Movement commands carry the run action plus a sub-code; the rest are
/// standalone action codes. The device byte is not consulted: every command
/// the app sends addresses the whole robot.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AppCommand {
    Forward,
    Backward,
    StrafeLeft,
    StrafeRight,
    TurnLeft,
    TurnRight,
    Standby,
    Sleep,
    LieDown,
    WaveHello,
    PushUps,
    Fighting,
    Dance1,
    Dance2,
    Dance3,
}

impl AppCommand {
    /// Interpret a decoded frame. Unknown action or movement codes yield
    /// `None` and are ignored upstream, unacknowledged.
    pub fn from_frame(frame: &CommandFrame) -> Option<Self> {
        match frame.action {
            ACTION_RUN => match frame.movement {
                MOVE_FORWARD => Some(AppCommand::Forward),
                MOVE_BACKWARD => Some(AppCommand::Backward),
                MOVE_STRAFE_LEFT => Some(AppCommand::StrafeLeft),
                MOVE_STRAFE_RIGHT => Some(AppCommand::StrafeRight),
                MOVE_TURN_LEFT => Some(AppCommand::TurnLeft),
                MOVE_TURN_RIGHT => Some(AppCommand::TurnRight),
                _ => None,
            },
            ACTION_STANDBY => Some(AppCommand::Standby),
            ACTION_SLEEP => Some(AppCommand::Sleep),
            ACTION_LIE_DOWN => Some(AppCommand::LieDown),
            ACTION_WAVE_HELLO => Some(AppCommand::WaveHello),
            ACTION_PUSH_UPS => Some(AppCommand::PushUps),
            ACTION_FIGHTING => Some(AppCommand::Fighting),
            ACTION_DANCE_1 => Some(AppCommand::Dance1),
            ACTION_DANCE_2 => Some(AppCommand::Dance2),
            ACTION_DANCE_3 => Some(AppCommand::Dance3),
            _ => None,
        }
    }

    /// Gait this command starts.
    pub fn gait(self) -> GaitId {
        match self {
            AppCommand::Forward => GaitId::Forward,
            AppCommand::Backward => GaitId::Backward,
            AppCommand::StrafeLeft => GaitId::StrafeLeft,
            AppCommand::StrafeRight => GaitId::StrafeRight,
            AppCommand::TurnLeft => GaitId::TurnLeft,
            AppCommand::TurnRight => GaitId::TurnRight,
            AppCommand::Standby => GaitId::Standby,
            AppCommand::Sleep => GaitId::Sleep,
            AppCommand::LieDown => GaitId::LieDown,
            AppCommand::WaveHello => GaitId::WaveHello,
            AppCommand::PushUps => GaitId::PushUps,
            AppCommand::Fighting => GaitId::Fighting,
            AppCommand::Dance1 => GaitId::Dance1,
            AppCommand::Dance2 => GaitId::Dance2,
            AppCommand::Dance3 => GaitId::Dance3,
        }
    }

    /// The 5-byte acknowledgment packet echoed to the app: preamble, a
    /// length of 2, a device byte of 1, then the per-command callback code
    /// (movements echo their sub-code; actions use the 0x07.. table).
    pub fn ack(self) -> [u8; 5] {
        let code = match self {
            AppCommand::Forward => MOVE_FORWARD,
            AppCommand::Backward => MOVE_BACKWARD,
            AppCommand::StrafeLeft => MOVE_STRAFE_LEFT,
            AppCommand::StrafeRight => MOVE_STRAFE_RIGHT,
            AppCommand::TurnLeft => MOVE_TURN_LEFT,
            AppCommand::TurnRight => MOVE_TURN_RIGHT,
            AppCommand::Standby => 0x07,
            AppCommand::Sleep => 0x08,
            AppCommand::LieDown => 0x09,
            AppCommand::WaveHello => 0x0A,
            AppCommand::PushUps => 0x0B,
            AppCommand::Fighting => 0x0C,
            AppCommand::Dance1 => 0x0D,
            AppCommand::Dance2 => 0x0E,
            AppCommand::Dance3 => 0x0F,
        };
        [FRAME_PREAMBLE[0], FRAME_PREAMBLE[1], 0x02, 0x01, code]
    }
}

impl core::fmt::Display for AppCommand {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.gait().name())
    }
}
