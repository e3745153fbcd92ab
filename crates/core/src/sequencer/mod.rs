//! Movement Sequencer
//!
//! Platform-agnostic state machine that plays gaits step by step against a
//! monotonic clock. Owns gait selection, step advancement, deferred queuing
//! of the next gait, and idle-hold management.
//!
//! The sequencer does not know about PWM hardware, network transports, or any
//! platform service. It moves physical joints through the [`JointActuator`]
//! trait, reads step tables from a caller-supplied [`GaitCatalog`], and
//! consumes time as caller-sampled millisecond timestamps. [`update`] never
//! blocks or sleeps; it performs one elapsed-time comparison and returns.
//!
//! [`update`]: MovementSequencer::update

use heapless::Vec;

use crate::gait::{GaitCatalog, GaitId, Step};
use crate::joint::{Joint, JointActuator, MAX_PULSE_US, MIN_PULSE_US};

/// Maximum sequencer events emitted per call.
pub const MAX_SEQUENCER_EVENTS: usize = 4;

/// Observable state transition, for host-side logging and telemetry.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SequencerEvent {
    /// A gait began executing and its first step was written.
    GaitStarted(GaitId),
    /// The running gait crossed a step boundary and wrote the new step.
    StepAdvanced { gait: GaitId, step: usize },
    /// The running gait finished its last step.
    GaitCompleted(GaitId),
}

/// Movement sequencer that plays gaits through a [`JointActuator`].
///
/// All timing is elapsed-time polling: the caller invokes
/// [`update`](Self::update) every loop iteration with the current monotonic
/// time, and the sequencer advances at most one step per call. Requesting a
/// gait while another is executing never preempts; the request lands in a
/// single queued-next slot (last writer wins) and starts in the same
/// `update` call that completes the running gait, with no idle gap.
///
/// Three resting situations are distinct:
/// - fresh or explicitly paused: `current_gait()` is the idle sentinel
/// - finished, nothing queued: `current_gait()` keeps the finished gait and
///   `is_busy()` is false
/// - idle hold: the sentinel plus a deadline after which the queued gait
///   auto-starts
#[derive(Debug)]
pub struct MovementSequencer {
    current_gait: GaitId,
    last_gait: GaitId,
    /// Queued-next slot; the idle sentinel means "nothing queued"
    queued_gait: GaitId,
    current_step: usize,
    /// Timestamp (ms) when the current step was written, or the idle hold began
    step_started_ms: u64,
    executing: bool,
    idle_hold_ms: u64,
}

impl MovementSequencer {
    /// Create a new sequencer at rest in the idle sentinel state
    /// (const fn for static initialization).
    pub const fn new() -> Self {
        Self {
            current_gait: GaitId::Idle,
            last_gait: GaitId::Idle,
            queued_gait: GaitId::Idle,
            current_step: 0,
            step_started_ms: 0,
            executing: false,
            idle_hold_ms: 0,
        }
    }

    /// Gait currently selected. After a gait finishes with nothing queued it
    /// keeps its finished value; the idle sentinel appears only when fresh or
    /// after an explicit [`idle`](Self::idle).
    pub fn current_gait(&self) -> GaitId {
        self.current_gait
    }

    /// Gait that was selected before the current one.
    pub fn last_gait(&self) -> GaitId {
        self.last_gait
    }

    /// Gait waiting in the queued-next slot, if any.
    pub fn queued_gait(&self) -> Option<GaitId> {
        if self.queued_gait == GaitId::Idle {
            None
        } else {
            Some(self.queued_gait)
        }
    }

    /// Step index the running gait is holding at.
    pub fn current_step(&self) -> usize {
        self.current_step
    }

    /// Check if a gait is executing. False both at rest in the idle sentinel
    /// and in the finished-quiescent state.
    pub fn is_busy(&self) -> bool {
        self.executing
    }

    /// Check if the sequencer is in the idle sentinel state (fresh, or
    /// paused via [`idle`](Self::idle)).
    pub fn is_idling(&self) -> bool {
        self.current_gait == GaitId::Idle
    }

    /// Attach every joint to the actuator at the servo pulse range.
    ///
    /// Call once at startup. Joints may twitch to the actuator's power-on
    /// default; follow with a [`start`](Self::start) of a known pose.
    pub fn begin(&self, actuator: &mut dyn JointActuator) {
        for joint in Joint::ALL {
            actuator.attach(joint, MIN_PULSE_US, MAX_PULSE_US);
        }
    }

    /// Request that `gait` begin executing.
    ///
    /// When no gait is executing this transitions immediately: step 0's
    /// angles are written and a [`SequencerEvent::GaitStarted`] is emitted.
    /// When a gait is executing the request is deferred instead: it
    /// overwrites the queued-next slot (last writer wins), nothing is
    /// written, and no event is emitted until the running gait completes.
    ///
    /// Requesting the idle sentinel starts nothing; while busy it clears the
    /// queued-next slot.
    pub fn start(
        &mut self,
        catalog: &GaitCatalog,
        actuator: &mut dyn JointActuator,
        gait: GaitId,
        now_ms: u64,
    ) -> Vec<SequencerEvent, MAX_SEQUENCER_EVENTS> {
        let mut events = Vec::new();

        if self.executing {
            self.queued_gait = gait;
            return events;
        }

        self.begin_gait(catalog, actuator, gait, now_ms, &mut events);
        events
    }

    /// Pause for `duration_ms`, then auto-start `queued` if it is not the
    /// idle sentinel.
    ///
    /// Halts execution bookkeeping immediately but writes nothing; joints
    /// stay at their last commanded angles. The pause elapses through
    /// [`update`](Self::update) polling.
    pub fn idle(&mut self, duration_ms: u64, queued: GaitId, now_ms: u64) {
        self.executing = false;
        self.current_gait = GaitId::Idle;
        self.step_started_ms = now_ms;
        self.idle_hold_ms = duration_ms;
        self.queued_gait = queued;
    }

    /// Main tick: advance at most one step boundary and emit events.
    ///
    /// Call every loop iteration with the current monotonic time. A step
    /// whose hold has elapsed advances; the final step's elapse completes
    /// the gait, and a queued gait then starts within the same call. Skipped
    /// polls never drop steps, they only stretch holds.
    pub fn update(
        &mut self,
        catalog: &GaitCatalog,
        actuator: &mut dyn JointActuator,
        now_ms: u64,
    ) -> Vec<SequencerEvent, MAX_SEQUENCER_EVENTS> {
        let mut events = Vec::new();

        // Idle hold: wait out the pause, then drain the queued-next slot
        if self.current_gait == GaitId::Idle {
            if now_ms.saturating_sub(self.step_started_ms) >= self.idle_hold_ms
                && self.queued_gait != GaitId::Idle
            {
                let next = self.queued_gait;
                self.queued_gait = GaitId::Idle;
                self.begin_gait(catalog, actuator, next, now_ms, &mut events);
            }
            return events;
        }

        // Finished-quiescent: nothing to advance
        if !self.executing {
            return events;
        }

        let steps = catalog.steps(self.current_gait);
        let hold_ms = steps[self.current_step].hold_ms as u64;
        if now_ms.saturating_sub(self.step_started_ms) < hold_ms {
            return events;
        }

        self.current_step += 1;
        if self.current_step == steps.len() {
            self.executing = false;
            let _ = events.push(SequencerEvent::GaitCompleted(self.current_gait));
            if self.queued_gait != GaitId::Idle {
                // Chain with no idle gap
                let next = self.queued_gait;
                self.queued_gait = GaitId::Idle;
                self.begin_gait(catalog, actuator, next, now_ms, &mut events);
            }
        } else {
            self.write_step(actuator, &steps[self.current_step]);
            self.step_started_ms = now_ms;
            let _ = events.push(SequencerEvent::StepAdvanced {
                gait: self.current_gait,
                step: self.current_step,
            });
        }

        events
    }

    // ========================================================================
    // Internal methods
    // ========================================================================

    /// Transition into `gait` and write its first step.
    ///
    /// Callers guarantee nothing is executing. The idle sentinel (empty step
    /// table) transitions nothing.
    fn begin_gait(
        &mut self,
        catalog: &GaitCatalog,
        actuator: &mut dyn JointActuator,
        gait: GaitId,
        now_ms: u64,
        events: &mut Vec<SequencerEvent, MAX_SEQUENCER_EVENTS>,
    ) {
        let steps = catalog.steps(gait);
        if steps.is_empty() {
            return;
        }

        self.last_gait = self.current_gait;
        self.current_gait = gait;
        self.current_step = 0;
        self.step_started_ms = now_ms;
        self.executing = true;
        self.write_step(actuator, &steps[0]);
        let _ = events.push(SequencerEvent::GaitStarted(gait));
    }

    /// Write one step's target angle to every joint, in canonical joint order.
    fn write_step(&self, actuator: &mut dyn JointActuator, step: &Step) {
        for joint in Joint::ALL {
            actuator.write(joint, step.angle_for(joint));
        }
    }
}

impl Default for MovementSequencer {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::joint::JOINT_COUNT;

    // ========================================================================
    // MockActuator
    // ========================================================================

    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    enum MockCall {
        Attach(Joint, u16, u16),
        Write(Joint, u8),
    }

    struct MockActuator {
        calls: Vec<MockCall, 256>,
    }

    impl MockActuator {
        fn new() -> Self {
            Self { calls: Vec::new() }
        }

        fn writes(&self) -> Vec<(Joint, u8), 256> {
            self.calls
                .iter()
                .filter_map(|c| {
                    if let MockCall::Write(joint, angle) = c {
                        Some((*joint, *angle))
                    } else {
                        None
                    }
                })
                .collect()
        }
    }

    impl JointActuator for MockActuator {
        fn attach(&mut self, joint: Joint, min_pulse_us: u16, max_pulse_us: u16) {
            let _ = self
                .calls
                .push(MockCall::Attach(joint, min_pulse_us, max_pulse_us));
        }

        fn write(&mut self, joint: Joint, angle_deg: u8) {
            let _ = self.calls.push(MockCall::Write(joint, angle_deg));
        }
    }

    // ========================================================================
    // Helpers
    // ========================================================================

    /// One full sweep's expected writes for a step, canonical joint order.
    fn sweep_for(step: &Step) -> Vec<(Joint, u8), 8> {
        Joint::ALL
            .iter()
            .map(|&joint| (joint, step.angle_for(joint)))
            .collect()
    }

    /// Drive `seq` through every remaining step boundary of the running
    /// gait, advancing `now` past each hold. Returns the time after the
    /// completing update.
    fn run_to_completion(
        seq: &mut MovementSequencer,
        catalog: &GaitCatalog,
        act: &mut MockActuator,
        mut now: u64,
    ) -> u64 {
        let steps = catalog.steps(seq.current_gait());
        for i in seq.current_step()..steps.len() {
            now += steps[i].hold_ms as u64;
            seq.update(catalog, act, now);
        }
        now
    }

    // ========================================================================
    // Tests: Construction and begin
    // ========================================================================

    #[test]
    fn test_new_sequencer_at_rest() {
        let seq = MovementSequencer::new();
        assert_eq!(seq.current_gait(), GaitId::Idle);
        assert_eq!(seq.last_gait(), GaitId::Idle);
        assert_eq!(seq.queued_gait(), None);
        assert_eq!(seq.current_step(), 0);
        assert!(!seq.is_busy());
        assert!(seq.is_idling());
    }

    #[test]
    fn test_begin_attaches_all_joints_without_writing() {
        let mut act = MockActuator::new();
        let seq = MovementSequencer::new();

        seq.begin(&mut act);

        assert_eq!(act.calls.len(), JOINT_COUNT);
        for (call, joint) in act.calls.iter().zip(Joint::ALL) {
            assert_eq!(*call, MockCall::Attach(joint, MIN_PULSE_US, MAX_PULSE_US));
        }
        assert!(act.writes().is_empty());
    }

    // ========================================================================
    // Tests: Start from rest
    // ========================================================================

    #[test]
    fn test_start_writes_first_step_in_joint_order() {
        let catalog = GaitCatalog::standard();
        let mut act = MockActuator::new();
        let mut seq = MovementSequencer::new();

        let events = seq.start(&catalog, &mut act, GaitId::Standby, 0);

        assert_eq!(events.len(), 1);
        assert_eq!(events[0], SequencerEvent::GaitStarted(GaitId::Standby));
        assert!(seq.is_busy());
        assert_eq!(seq.current_gait(), GaitId::Standby);
        assert_eq!(seq.current_step(), 0);

        let expected = sweep_for(&catalog.steps(GaitId::Standby)[0]);
        assert_eq!(act.writes().as_slice(), expected.as_slice());
    }

    #[test]
    fn test_start_records_last_gait() {
        let catalog = GaitCatalog::standard();
        let mut act = MockActuator::new();
        let mut seq = MovementSequencer::new();

        seq.start(&catalog, &mut act, GaitId::Standby, 0);
        assert_eq!(seq.last_gait(), GaitId::Idle);

        let now = run_to_completion(&mut seq, &catalog, &mut act, 0);
        seq.start(&catalog, &mut act, GaitId::Ready, now);
        assert_eq!(seq.last_gait(), GaitId::Standby);
        assert_eq!(seq.current_gait(), GaitId::Ready);
    }

    #[test]
    fn test_start_idle_sentinel_from_rest_is_noop() {
        let catalog = GaitCatalog::standard();
        let mut act = MockActuator::new();
        let mut seq = MovementSequencer::new();

        let events = seq.start(&catalog, &mut act, GaitId::Idle, 0);

        assert!(events.is_empty());
        assert!(act.calls.is_empty());
        assert!(!seq.is_busy());
        assert_eq!(seq.current_gait(), GaitId::Idle);
    }

    // ========================================================================
    // Tests: Step advancement
    // ========================================================================

    #[test]
    fn test_gait_performs_exactly_n_write_sweeps_in_step_order() {
        let catalog = GaitCatalog::standard();
        let mut act = MockActuator::new();
        let mut seq = MovementSequencer::new();
        let steps = catalog.steps(GaitId::Forward);

        let mut now = 0u64;
        seq.start(&catalog, &mut act, GaitId::Forward, now);

        for i in 1..steps.len() {
            now += steps[i - 1].hold_ms as u64;
            let events = seq.update(&catalog, &mut act, now);
            assert_eq!(
                events.as_slice(),
                &[SequencerEvent::StepAdvanced {
                    gait: GaitId::Forward,
                    step: i
                }]
            );
        }

        // Final step's hold elapses: completion, no further writes
        now += steps[steps.len() - 1].hold_ms as u64;
        let events = seq.update(&catalog, &mut act, now);
        assert_eq!(
            events.as_slice(),
            &[SequencerEvent::GaitCompleted(GaitId::Forward)]
        );

        let writes = act.writes();
        assert_eq!(writes.len(), steps.len() * JOINT_COUNT);
        for (i, step) in steps.iter().enumerate() {
            let expected = sweep_for(step);
            assert_eq!(
                &writes[i * JOINT_COUNT..(i + 1) * JOINT_COUNT],
                expected.as_slice()
            );
        }

        assert!(!seq.is_busy());
        assert_eq!(seq.current_gait(), GaitId::Forward);
    }

    #[test]
    fn test_update_before_hold_elapsed_does_nothing() {
        let catalog = GaitCatalog::standard();
        let mut act = MockActuator::new();
        let mut seq = MovementSequencer::new();

        seq.start(&catalog, &mut act, GaitId::Standby, 0);
        let writes_after_start = act.writes().len();

        // Standby holds for 1000ms
        for now in [1, 250, 999] {
            let events = seq.update(&catalog, &mut act, now);
            assert!(events.is_empty());
            assert_eq!(seq.current_step(), 0);
            assert_eq!(act.writes().len(), writes_after_start);
        }
    }

    #[test]
    fn test_zero_duration_step_completes_on_first_update() {
        static INSTANT: [Step; 1] = [Step::new([90, 90, 90, 90, 90, 90, 90, 90], 0)];
        let catalog = GaitCatalog::standard().with_table(GaitId::Standby, &INSTANT);
        let mut act = MockActuator::new();
        let mut seq = MovementSequencer::new();

        seq.start(&catalog, &mut act, GaitId::Standby, 5);

        // Same timestamp: a 0ms hold has already elapsed
        let events = seq.update(&catalog, &mut act, 5);
        assert_eq!(
            events.as_slice(),
            &[SequencerEvent::GaitCompleted(GaitId::Standby)]
        );
        assert!(!seq.is_busy());
        assert_eq!(act.writes().len(), JOINT_COUNT);
    }

    // ========================================================================
    // Tests: Deferred queuing
    // ========================================================================

    #[test]
    fn test_start_while_busy_defers_without_preempting() {
        let catalog = GaitCatalog::standard();
        let mut act = MockActuator::new();
        let mut seq = MovementSequencer::new();

        seq.start(&catalog, &mut act, GaitId::Forward, 0);
        let writes_after_start = act.writes().len();

        let events = seq.start(&catalog, &mut act, GaitId::Backward, 10);

        assert!(events.is_empty());
        assert_eq!(seq.current_gait(), GaitId::Forward);
        assert_eq!(seq.current_step(), 0);
        assert!(seq.is_busy());
        assert_eq!(seq.queued_gait(), Some(GaitId::Backward));
        assert_eq!(act.writes().len(), writes_after_start);
    }

    #[test]
    fn test_queued_slot_last_writer_wins() {
        let catalog = GaitCatalog::standard();
        let mut act = MockActuator::new();
        let mut seq = MovementSequencer::new();

        seq.start(&catalog, &mut act, GaitId::Forward, 0);
        seq.start(&catalog, &mut act, GaitId::Backward, 10);
        seq.start(&catalog, &mut act, GaitId::TurnLeft, 20);
        assert_eq!(seq.queued_gait(), Some(GaitId::TurnLeft));

        let now = run_to_completion(&mut seq, &catalog, &mut act, 20);
        assert_eq!(seq.current_gait(), GaitId::TurnLeft);
        assert!(seq.is_busy());

        run_to_completion(&mut seq, &catalog, &mut act, now);
        assert!(!seq.is_busy());
        assert_eq!(seq.current_gait(), GaitId::TurnLeft);
    }

    #[test]
    fn test_completion_chains_queued_gait_in_same_call() {
        let catalog = GaitCatalog::standard();
        let mut act = MockActuator::new();
        let mut seq = MovementSequencer::new();
        let forward = catalog.steps(GaitId::Forward);

        let mut now = 0u64;
        seq.start(&catalog, &mut act, GaitId::Forward, now);
        seq.start(&catalog, &mut act, GaitId::Backward, now);

        for step in forward.iter().take(forward.len() - 1) {
            now += step.hold_ms as u64;
            seq.update(&catalog, &mut act, now);
        }
        assert_eq!(seq.current_gait(), GaitId::Forward);

        // The completing call also starts the queued gait, no idle gap
        let writes_before = act.writes().len();
        now += forward[forward.len() - 1].hold_ms as u64;
        let events = seq.update(&catalog, &mut act, now);

        assert_eq!(
            events.as_slice(),
            &[
                SequencerEvent::GaitCompleted(GaitId::Forward),
                SequencerEvent::GaitStarted(GaitId::Backward),
            ]
        );
        assert_eq!(seq.current_gait(), GaitId::Backward);
        assert_eq!(seq.last_gait(), GaitId::Forward);
        assert!(seq.is_busy());
        assert_eq!(seq.queued_gait(), None);

        let writes = act.writes();
        assert_eq!(writes.len(), writes_before + JOINT_COUNT);
        let expected = sweep_for(&catalog.steps(GaitId::Backward)[0]);
        assert_eq!(&writes[writes_before..], expected.as_slice());
    }

    #[test]
    fn test_start_idle_sentinel_while_busy_clears_queue() {
        let catalog = GaitCatalog::standard();
        let mut act = MockActuator::new();
        let mut seq = MovementSequencer::new();

        seq.start(&catalog, &mut act, GaitId::Forward, 0);
        seq.start(&catalog, &mut act, GaitId::Backward, 10);
        assert_eq!(seq.queued_gait(), Some(GaitId::Backward));

        seq.start(&catalog, &mut act, GaitId::Idle, 20);
        assert_eq!(seq.queued_gait(), None);

        run_to_completion(&mut seq, &catalog, &mut act, 20);
        assert!(!seq.is_busy());
        assert_eq!(seq.current_gait(), GaitId::Forward);
    }

    // ========================================================================
    // Tests: Idle hold
    // ========================================================================

    #[test]
    fn test_idle_hold_defers_queued_gait_until_duration() {
        let catalog = GaitCatalog::standard();
        let mut act = MockActuator::new();
        let mut seq = MovementSequencer::new();

        seq.idle(1000, GaitId::Forward, 0);
        assert!(!seq.is_busy());
        assert!(seq.is_idling());
        assert_eq!(seq.queued_gait(), Some(GaitId::Forward));

        for now in [1, 500, 999] {
            let events = seq.update(&catalog, &mut act, now);
            assert!(events.is_empty());
            assert!(act.calls.is_empty());
        }

        let events = seq.update(&catalog, &mut act, 1000);
        assert_eq!(
            events.as_slice(),
            &[SequencerEvent::GaitStarted(GaitId::Forward)]
        );
        assert_eq!(seq.current_gait(), GaitId::Forward);
        assert!(seq.is_busy());
        assert_eq!(seq.queued_gait(), None);
        assert_eq!(act.writes().len(), JOINT_COUNT);
    }

    #[test]
    fn test_idle_hold_starts_queued_gait_exactly_once() {
        let catalog = GaitCatalog::standard();
        let mut act = MockActuator::new();
        let mut seq = MovementSequencer::new();

        seq.idle(100, GaitId::Standby, 0);
        seq.update(&catalog, &mut act, 100);
        assert_eq!(seq.current_gait(), GaitId::Standby);
        let writes_after_start = act.writes().len();

        // Later polls hold the running step; nothing restarts
        let events = seq.update(&catalog, &mut act, 150);
        assert!(events.is_empty());
        assert_eq!(seq.current_step(), 0);
        assert_eq!(act.writes().len(), writes_after_start);
    }

    #[test]
    fn test_idle_without_queued_gait_stays_at_rest() {
        let catalog = GaitCatalog::standard();
        let mut act = MockActuator::new();
        let mut seq = MovementSequencer::new();

        seq.start(&catalog, &mut act, GaitId::Standby, 0);
        seq.idle(50, GaitId::Idle, 10);

        for now in [20, 60, 10_000] {
            let events = seq.update(&catalog, &mut act, now);
            assert!(events.is_empty());
        }
        assert!(seq.is_idling());
        assert!(!seq.is_busy());
    }

    #[test]
    fn test_idle_halts_execution_without_moving_joints() {
        let catalog = GaitCatalog::standard();
        let mut act = MockActuator::new();
        let mut seq = MovementSequencer::new();

        seq.start(&catalog, &mut act, GaitId::Forward, 0);
        let writes_after_start = act.writes().len();

        seq.idle(500, GaitId::Idle, 100);
        assert!(!seq.is_busy());
        assert!(seq.is_idling());
        assert_eq!(act.writes().len(), writes_after_start);

        // The abandoned gait does not resume
        let events = seq.update(&catalog, &mut act, 10_000);
        assert!(events.is_empty());
        assert_eq!(act.writes().len(), writes_after_start);
    }

    #[test]
    fn test_queued_gait_survives_direct_start_during_idle_hold() {
        let catalog = GaitCatalog::standard();
        let mut act = MockActuator::new();
        let mut seq = MovementSequencer::new();

        // An explicit start during an idle hold takes over immediately, but
        // the queued slot keeps its gait and chains after the new one.
        seq.idle(5000, GaitId::Forward, 0);
        seq.start(&catalog, &mut act, GaitId::Standby, 100);
        assert_eq!(seq.current_gait(), GaitId::Standby);
        assert_eq!(seq.queued_gait(), Some(GaitId::Forward));

        run_to_completion(&mut seq, &catalog, &mut act, 100);
        assert_eq!(seq.current_gait(), GaitId::Forward);
        assert!(seq.is_busy());
    }

    // ========================================================================
    // Tests: Finished-quiescent state
    // ========================================================================

    #[test]
    fn test_finished_gait_stays_quiescent() {
        let catalog = GaitCatalog::standard();
        let mut act = MockActuator::new();
        let mut seq = MovementSequencer::new();

        seq.start(&catalog, &mut act, GaitId::Standby, 0);
        let now = run_to_completion(&mut seq, &catalog, &mut act, 0);

        assert!(!seq.is_busy());
        assert_eq!(seq.current_gait(), GaitId::Standby);
        assert!(!seq.is_idling());

        let writes_after_completion = act.writes().len();
        for later in [now + 1, now + 1000, now + 100_000] {
            let events = seq.update(&catalog, &mut act, later);
            assert!(events.is_empty());
        }
        assert_eq!(act.writes().len(), writes_after_completion);
        assert_eq!(seq.current_gait(), GaitId::Standby);
    }

    // ========================================================================
    // Tests: Wake-up scenario
    // ========================================================================

    #[test]
    fn test_standby_ready_forward_scenario() {
        let catalog = GaitCatalog::standard();
        let mut act = MockActuator::new();
        let mut seq = MovementSequencer::new();
        let mut now = 0u64;

        seq.start(&catalog, &mut act, GaitId::Standby, now);
        now = run_to_completion(&mut seq, &catalog, &mut act, now);
        assert!(!seq.is_busy());
        assert_eq!(seq.current_gait(), GaitId::Standby);

        seq.start(&catalog, &mut act, GaitId::Ready, now);
        now = run_to_completion(&mut seq, &catalog, &mut act, now);
        assert!(!seq.is_busy());
        assert_eq!(seq.current_gait(), GaitId::Ready);

        seq.start(&catalog, &mut act, GaitId::Forward, now);
        run_to_completion(&mut seq, &catalog, &mut act, now);
        assert!(!seq.is_busy());
        assert_eq!(seq.current_gait(), GaitId::Forward);

        let total_steps = catalog.step_count(GaitId::Standby)
            + catalog.step_count(GaitId::Ready)
            + catalog.step_count(GaitId::Forward);
        assert_eq!(act.writes().len(), total_steps * JOINT_COUNT);
    }
}
