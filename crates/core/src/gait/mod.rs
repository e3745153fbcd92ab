//! Gait library: identifiers, step records, and the gait catalog
//!
//! A gait is an immutable, named, ordered sequence of [`Step`]s; the
//! [`GaitCatalog`] maps every [`GaitId`] to its step table. All gait data is
//! compiled-in constant tables; nothing here mutates or allocates.
//!
//! The identifier set is a closed enum, so "unknown gait" is unrepresentable
//! and catalog lookup is total. [`GaitId::Idle`] is a sentinel with an empty
//! step table; it marks the sequencer's deliberate-pause state and is never
//! executed.

mod tables;

use crate::joint::{JOINT_COUNT, Joint};

/// Number of gait identifiers, including the idle sentinel.
pub const GAIT_COUNT: usize = 17;

/// Identifier for one gait in the catalog.
///
/// The discriminant doubles as the catalog table index, so variant order is
/// load-bearing: it must match the table order in [`GaitCatalog::standard`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum GaitId {
    Standby,
    Ready,
    Forward,
    Backward,
    TurnLeft,
    TurnRight,
    StrafeLeft,
    StrafeRight,
    WaveHello,
    Dance1,
    Dance2,
    Dance3,
    LieDown,
    Fighting,
    PushUps,
    Sleep,
    /// Sentinel: no steps, marks the deliberate-pause state.
    #[default]
    Idle,
}

impl GaitId {
    /// All gait identifiers in catalog order.
    pub const ALL: [GaitId; GAIT_COUNT] = [
        GaitId::Standby,
        GaitId::Ready,
        GaitId::Forward,
        GaitId::Backward,
        GaitId::TurnLeft,
        GaitId::TurnRight,
        GaitId::StrafeLeft,
        GaitId::StrafeRight,
        GaitId::WaveHello,
        GaitId::Dance1,
        GaitId::Dance2,
        GaitId::Dance3,
        GaitId::LieDown,
        GaitId::Fighting,
        GaitId::PushUps,
        GaitId::Sleep,
        GaitId::Idle,
    ];

    /// Display name for logs and telemetry.
    pub fn name(self) -> &'static str {
        match self {
            GaitId::Standby => "standby",
            GaitId::Ready => "ready",
            GaitId::Forward => "forward",
            GaitId::Backward => "backward",
            GaitId::TurnLeft => "turn-left",
            GaitId::TurnRight => "turn-right",
            GaitId::StrafeLeft => "strafe-left",
            GaitId::StrafeRight => "strafe-right",
            GaitId::WaveHello => "wave-hello",
            GaitId::Dance1 => "dance-1",
            GaitId::Dance2 => "dance-2",
            GaitId::Dance3 => "dance-3",
            GaitId::LieDown => "lie-down",
            GaitId::Fighting => "fighting",
            GaitId::PushUps => "push-ups",
            GaitId::Sleep => "sleep",
            GaitId::Idle => "idle",
        }
    }
}

impl core::fmt::Display for GaitId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.name())
    }
}

/// One timed joint-position step of a gait.
///
/// Angles are in canonical joint order; `hold_ms` is how long the pose is
/// held before the sequencer advances to the next step.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Step {
    /// Target angle per joint in degrees, canonical joint order
    pub angles: [u8; JOINT_COUNT],
    /// Hold duration in milliseconds
    pub hold_ms: u32,
}

impl Step {
    /// Create a step from an angle row and a hold duration.
    pub const fn new(angles: [u8; JOINT_COUNT], hold_ms: u32) -> Self {
        Self { angles, hold_ms }
    }

    /// Target angle for one joint.
    pub fn angle_for(&self, joint: Joint) -> u8 {
        self.angles[joint.index()]
    }
}

/// Mapping from gait identifier to step table.
///
/// The standard catalog carries the reference build's hand-tuned tables.
/// Individual tables can be swapped for build-specific tunings with
/// [`with_table`](GaitCatalog::with_table); the sequencer takes the catalog
/// as a parameter, so alternate catalogs coexist freely.
#[derive(Clone, Copy, Debug)]
pub struct GaitCatalog {
    tables: [&'static [Step]; GAIT_COUNT],
}

impl GaitCatalog {
    /// The reference robot's gait tables.
    pub const fn standard() -> Self {
        Self {
            tables: [
                &tables::STANDBY,
                &tables::READY,
                &tables::FORWARD,
                &tables::BACKWARD,
                &tables::TURN_LEFT,
                &tables::TURN_RIGHT,
                &tables::STRAFE_LEFT,
                &tables::STRAFE_RIGHT,
                &tables::WAVE_HELLO,
                &tables::DANCE_1,
                &tables::DANCE_2,
                &tables::DANCE_3,
                &tables::LIE_DOWN,
                &tables::FIGHTING,
                &tables::PUSH_UPS,
                &tables::SLEEP,
                &[],
            ],
        }
    }

    /// Replace one gait's table, e.g. with angles retuned for a specific
    /// build. The idle sentinel's table should stay empty.
    pub const fn with_table(mut self, id: GaitId, steps: &'static [Step]) -> Self {
        self.tables[id as usize] = steps;
        self
    }

    /// Step table for a gait. Total: every identifier has a table, and the
    /// idle sentinel's is empty.
    pub fn steps(&self, id: GaitId) -> &'static [Step] {
        self.tables[id as usize]
    }

    /// Number of steps in a gait.
    pub fn step_count(&self, id: GaitId) -> usize {
        self.steps(id).len()
    }
}

impl Default for GaitCatalog {
    fn default() -> Self {
        Self::standard()
    }
}
