//! Scripted choreography demo on the simulated servo bank.
//!
//! Runs the built-in demo routine the way the standalone show firmware
//! does: the sequencer is polled on a fixed cadence and the routine feeds
//! it the next act whenever the robot comes to rest. Stops after a fixed
//! number of completed gaits and prints the final pose.
//!
//! Run with: `cargo run -p quadbot_sim --example choreography`

use tokio::time::{Duration, interval};

use quadbot_core::gait::GaitCatalog;
use quadbot_core::joint::Joint;
use quadbot_core::routine::{DemoRoutine, RoutineAction};
use quadbot_core::sequencer::{MovementSequencer, SequencerEvent};
use quadbot_core::traits::TimeSource;
use quadbot_sim::{SimServoBank, WallClock};

const COMPLETIONS_TO_RUN: u32 = 20;

#[tokio::main(flavor = "current_thread")]
async fn main() {
    println!("=== QuadBot Choreography Demo ===\n");

    // 1. Build the movement stack on the simulated servo bank
    let catalog = GaitCatalog::standard();
    let mut servos = SimServoBank::new();
    let mut seq = MovementSequencer::new();
    seq.begin(&mut servos);

    // 2. The routine feeds the sequencer, the wall clock paces it
    let mut routine = DemoRoutine::new();
    let clock = WallClock::new();
    let mut tick = interval(Duration::from_millis(20));

    // 3. Poll until enough gaits have played
    let mut completions = 0u32;
    while completions < COMPLETIONS_TO_RUN {
        tick.tick().await;
        let now = clock.now_ms();

        for event in seq.update(&catalog, &mut servos, now) {
            match event {
                SequencerEvent::GaitStarted(gait) => {
                    println!("[{now:>6} ms] started   {gait}");
                }
                SequencerEvent::GaitCompleted(gait) => {
                    completions += 1;
                    println!("[{now:>6} ms] completed {gait} ({completions}/{COMPLETIONS_TO_RUN})");
                }
                SequencerEvent::StepAdvanced { .. } => {}
            }
        }

        match routine.poll(&mut seq, &catalog, &mut servos, now) {
            Some(RoutineAction::Start(gait)) => {
                println!("[{now:>6} ms] act: start {gait}");
            }
            Some(RoutineAction::IdleThen { pause_ms, next }) => {
                println!("[{now:>6} ms] act: rest {pause_ms} ms, then {next}");
            }
            None => {}
        }
    }

    // 4. Show where the joints ended up
    println!("\nFinal pose after {} servo writes:", servos.write_count());
    for joint in Joint::ALL {
        match (servos.angle(joint), servos.pulse_us(joint)) {
            (Some(angle), Some(pulse)) => {
                println!("  {:<3} {angle:>3} deg  ({pulse} us)", joint.name());
            }
            _ => println!("  {:<3} never written", joint.name()),
        }
    }
}
