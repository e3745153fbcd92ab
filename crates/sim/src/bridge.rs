//! TCP bridge between the control app protocol and the movement engine.
//!
//! Plays the role the robot's own access point firmware plays on hardware:
//! accept the control app, feed its byte stream through the frame decoder,
//! apply each decoded command to the movement sequencer, and answer with the
//! command's acknowledgment packet. One client is served at a time; further
//! connections wait in the accept backlog until the current client leaves.

use std::net::SocketAddr;

use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::{TcpListener, TcpStream};
use tokio::sync::watch;
use tokio::time::{Duration, Interval, interval};
use tracing::{debug, info, warn};

use quadbot_core::gait::{GaitCatalog, GaitId};
use quadbot_core::protocol::AppLink;
use quadbot_core::sequencer::{MovementSequencer, SequencerEvent};
use quadbot_core::traits::TimeSource;

use crate::clock::WallClock;
use crate::error::SimError;
use crate::servo::SimServoBank;

/// TCP port the control app dials, same as the robot's access point.
pub const DEFAULT_APP_PORT: u16 = 100;

/// Default sequencer polling interval in milliseconds.
pub const DEFAULT_TICK_MS: u64 = 20;

/// Bridge settings with firmware-faithful defaults.
#[derive(Clone, Copy, Debug)]
pub struct AppBridgeConfig {
    /// TCP port to listen on.
    pub port: u16,
    /// Sequencer polling interval in milliseconds.
    pub tick_ms: u64,
}

impl AppBridgeConfig {
    pub fn new() -> Self {
        Self {
            port: DEFAULT_APP_PORT,
            tick_ms: DEFAULT_TICK_MS,
        }
    }
}

impl Default for AppBridgeConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// One robot's worth of app serving: listener, link supervision, sequencer.
///
/// Construct with [`bind`](Self::bind), then drive with [`run`](Self::run).
/// The sequencer's current gait is published on a watch channel so tests
/// and monitors can follow along from outside the run loop.
#[derive(Debug)]
pub struct AppBridge {
    listener: TcpListener,
    link: AppLink,
    seq: MovementSequencer,
    catalog: GaitCatalog,
    servos: SimServoBank,
    clock: WallClock,
    tick_ms: u64,
    gait_tx: watch::Sender<GaitId>,
}

impl AppBridge {
    /// Bind the listener and attach the servo bank.
    ///
    /// The bank handle is cloneable; keep a clone to observe commanded
    /// angles while the bridge runs.
    pub async fn bind(config: AppBridgeConfig, mut servos: SimServoBank) -> Result<Self, SimError> {
        let listener = TcpListener::bind(("0.0.0.0", config.port))
            .await
            .map_err(|e| SimError::Bind(config.port, e))?;

        let seq = MovementSequencer::new();
        seq.begin(&mut servos);

        let (gait_tx, _) = watch::channel(GaitId::Idle);

        Ok(Self {
            listener,
            link: AppLink::new(),
            seq,
            catalog: GaitCatalog::standard(),
            servos,
            clock: WallClock::new(),
            tick_ms: config.tick_ms,
            gait_tx,
        })
    }

    /// Local listener address, useful after binding port 0.
    pub fn local_addr(&self) -> Result<SocketAddr, SimError> {
        Ok(self.listener.local_addr()?)
    }

    /// Watch the sequencer's current gait from outside the run loop.
    pub fn subscribe_gait(&self) -> watch::Receiver<GaitId> {
        self.gait_tx.subscribe()
    }

    /// Serve clients forever, one at a time.
    ///
    /// Parks the robot in standby first, then alternates between sequencer
    /// ticks and client traffic. Returns only on listener failure.
    pub async fn run(mut self) -> Result<(), SimError> {
        let addr = self.local_addr()?;
        info!("App bridge listening on {addr}");

        // Power-on behavior: plant the feet in the standby pose
        self.start_gait(GaitId::Standby);

        let mut tick = interval(Duration::from_millis(self.tick_ms));

        loop {
            tokio::select! {
                _ = tick.tick() => self.step(),
                accepted = self.listener.accept() => {
                    let (stream, peer) = accepted?;
                    self.serve_client(stream, peer, &mut tick).await;
                }
            }
        }
    }

    /// Drive one connected client until it leaves or goes silent.
    async fn serve_client(&mut self, mut stream: TcpStream, peer: SocketAddr, tick: &mut Interval) {
        info!("Client connected: {peer}");
        self.link.on_connect(self.clock.now_ms());

        let mut buf = [0u8; 64];
        loop {
            tokio::select! {
                _ = tick.tick() => {
                    self.step();
                    if self.link.timed_out(self.clock.now_ms()) {
                        info!("Client silent, dropping: {peer}");
                        break;
                    }
                }
                read = stream.read(&mut buf) => match read {
                    Ok(0) => {
                        info!("Client closed: {peer}");
                        break;
                    }
                    Ok(n) => {
                        for &byte in &buf[..n] {
                            if let Some(cmd) = self.link.on_byte(byte, self.clock.now_ms()) {
                                info!("App command: {cmd}");
                                self.start_gait(cmd.gait());
                                if let Err(e) = stream.write_all(&cmd.ack()).await {
                                    warn!("Ack write failed: {e}");
                                }
                            }
                        }
                    }
                    Err(e) => {
                        warn!("Client read failed: {e}");
                        break;
                    }
                },
            }
        }

        let stats = self.link.stats();
        debug!(
            "Link totals: {} frames, {} commands, {} unknown codes",
            self.link.decoder_stats().frames_decoded,
            stats.commands_dispatched,
            stats.unknown_codes
        );

        // However the session ended, the robot returns to standby
        if let Some(cmd) = self.link.on_disconnect() {
            info!("Client gone, returning to {}", cmd.gait());
            self.start_gait(cmd.gait());
        }
    }

    /// One sequencer tick against the wall clock.
    fn step(&mut self) {
        let now = self.clock.now_ms();
        let events = self.seq.update(&self.catalog, &mut self.servos, now);
        self.publish_events(&events);
    }

    /// Request a gait start now and publish the resulting events.
    fn start_gait(&mut self, gait: GaitId) {
        let now = self.clock.now_ms();
        let events = self.seq.start(&self.catalog, &mut self.servos, gait, now);
        self.publish_events(&events);
    }

    fn publish_events(&mut self, events: &[SequencerEvent]) {
        for event in events {
            match event {
                SequencerEvent::GaitStarted(gait) => info!("Gait started: {gait}"),
                SequencerEvent::StepAdvanced { gait, step } => debug!("Gait {gait} step {step}"),
                SequencerEvent::GaitCompleted(gait) => info!("Gait completed: {gait}"),
            }
        }

        let current = self.seq.current_gait();
        self.gait_tx.send_if_modified(|seen| {
            if *seen == current {
                false
            } else {
                *seen = current;
                true
            }
        });
    }
}
