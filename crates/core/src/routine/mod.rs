//! Demo Choreography
//!
//! A scripted show for running the robot standalone: wake up into standby
//! and ready, then patrol through walks, turns, strafes, a wave, and the
//! dance routines forever, with a resting beat between acts.
//!
//! The script leans on the sequencer's own mechanics: each entry fires only
//! when the sequencer has gone quiet, and the resting beats are ordinary
//! idle holds with the next gait queued. Poll it from the same loop that
//! polls the sequencer.

use crate::gait::{GaitCatalog, GaitId};
use crate::joint::JointActuator;
use crate::sequencer::MovementSequencer;

/// Resting beat between acts.
pub const ACT_PAUSE_MS: u64 = 1000;

/// One script entry, taken when the previous act has finished.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RoutineAction {
    /// Start a gait immediately.
    Start(GaitId),
    /// Pause, then start the next gait through the sequencer's queued slot.
    IdleThen { pause_ms: u64, next: GaitId },
}

/// The show. Entries 0-1 are the one-time wake-up; the wrap from the last
/// entry lands on [`LOOP_INDEX`], so every later cycle walks forward twice
/// (the last entry itself provides the first pass) before turning.
const SCRIPT: [RoutineAction; 15] = [
    RoutineAction::Start(GaitId::Standby),
    RoutineAction::Start(GaitId::Ready),
    RoutineAction::Start(GaitId::Forward),
    RoutineAction::Start(GaitId::Forward),
    RoutineAction::IdleThen {
        pause_ms: ACT_PAUSE_MS,
        next: GaitId::TurnLeft,
    },
    RoutineAction::Start(GaitId::TurnRight),
    RoutineAction::IdleThen {
        pause_ms: ACT_PAUSE_MS,
        next: GaitId::Backward,
    },
    RoutineAction::Start(GaitId::Backward),
    RoutineAction::IdleThen {
        pause_ms: ACT_PAUSE_MS,
        next: GaitId::StrafeLeft,
    },
    RoutineAction::Start(GaitId::StrafeRight),
    RoutineAction::IdleThen {
        pause_ms: ACT_PAUSE_MS,
        next: GaitId::WaveHello,
    },
    RoutineAction::IdleThen {
        pause_ms: ACT_PAUSE_MS,
        next: GaitId::Dance1,
    },
    RoutineAction::IdleThen {
        pause_ms: ACT_PAUSE_MS,
        next: GaitId::Dance2,
    },
    RoutineAction::IdleThen {
        pause_ms: ACT_PAUSE_MS,
        next: GaitId::Dance3,
    },
    RoutineAction::IdleThen {
        pause_ms: ACT_PAUSE_MS,
        next: GaitId::Forward,
    },
];

/// Where the wrap re-enters the script: the second forward pass.
const LOOP_INDEX: usize = 3;

/// Cursor over the demo script.
///
/// [`poll`](Self::poll) applies the next entry to the sequencer whenever the
/// sequencer is quiet: not executing a gait and not sitting in an idle hold.
/// The very first poll fires unconditionally to lift the robot out of its
/// power-on rest.
pub struct DemoRoutine {
    cursor: usize,
    started: bool,
}

impl DemoRoutine {
    /// Create a routine at the top of the script
    /// (const fn for static initialization).
    pub const fn new() -> Self {
        Self {
            cursor: 0,
            started: false,
        }
    }

    /// Advance the show by at most one entry, returning the action applied.
    ///
    /// Call every loop iteration, after the sequencer's own update. Returns
    /// `None` while an act is still playing or resting.
    pub fn poll(
        &mut self,
        seq: &mut MovementSequencer,
        catalog: &GaitCatalog,
        actuator: &mut dyn JointActuator,
        now_ms: u64,
    ) -> Option<RoutineAction> {
        if self.started && (seq.is_busy() || seq.is_idling()) {
            return None;
        }

        let action = SCRIPT[self.cursor];
        self.cursor = if self.cursor + 1 == SCRIPT.len() {
            LOOP_INDEX
        } else {
            self.cursor + 1
        };
        self.started = true;

        match action {
            RoutineAction::Start(gait) => {
                seq.start(catalog, actuator, gait, now_ms);
            }
            RoutineAction::IdleThen { pause_ms, next } => {
                seq.idle(pause_ms, next, now_ms);
            }
        }

        Some(action)
    }
}

impl Default for DemoRoutine {
    fn default() -> Self {
        Self::new()
    }
}
