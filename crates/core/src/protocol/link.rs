//! App Link Supervision
//!
//! Per-connection state around the [`FrameDecoder`]: decoder resets on
//! connect, silence tracking, and the synthesized standby that parks the
//! robot when the app goes away.
//!
//! The link owns no socket. The host accepts, reads, and closes its
//! transport, reporting those facts here; the link answers with commands,
//! including ones no frame carried.

use super::AppCommand;
use super::frame::{DecoderStats, FrameDecoder};

/// Silence on an armed link longer than this synthesizes a standby.
pub const LINK_TIMEOUT_MS: u64 = 3000;

/// Dispatch statistics for monitoring and diagnostics.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LinkStats {
    /// Decoded commands handed to the host
    pub commands_dispatched: u32,
    /// Well-formed frames carrying an unrecognized action or movement code
    pub unknown_codes: u32,
}

/// Connection supervisor for one control-app client slot.
///
/// Lifecycle per connection: [`on_connect`](Self::on_connect), then
/// [`on_byte`](Self::on_byte) for every received byte, with the host polling
/// [`timed_out`](Self::timed_out) between reads and calling
/// [`on_disconnect`](Self::on_disconnect) when it drops the transport for
/// any reason. The standby that parks the robot is emitted exactly once per
/// connection, by `on_disconnect`.
#[derive(Debug)]
pub struct AppLink {
    decoder: FrameDecoder,
    connected: bool,
    last_byte_ms: u64,
    stats: LinkStats,
}

impl AppLink {
    /// Create an unconnected link (const fn for static initialization).
    pub const fn new() -> Self {
        Self {
            decoder: FrameDecoder::new(),
            connected: false,
            last_byte_ms: 0,
            stats: LinkStats {
                commands_dispatched: 0,
                unknown_codes: 0,
            },
        }
    }

    /// Check if a client is attached.
    pub fn is_connected(&self) -> bool {
        self.connected
    }

    /// Cumulative decoder statistics across connections.
    pub fn decoder_stats(&self) -> DecoderStats {
        self.decoder.stats()
    }

    /// Cumulative dispatch statistics across connections.
    pub fn stats(&self) -> LinkStats {
        self.stats
    }

    /// Attach a client. Drops any partial frame from the previous
    /// connection and restarts the silence clock.
    pub fn on_connect(&mut self, now_ms: u64) {
        self.decoder.reset();
        self.connected = true;
        self.last_byte_ms = now_ms;
    }

    /// Feed one received byte, yielding a command when a well-formed frame
    /// completes. Bytes arriving with no client attached are dropped.
    pub fn on_byte(&mut self, byte: u8, now_ms: u64) -> Option<AppCommand> {
        if !self.connected {
            return None;
        }

        self.last_byte_ms = now_ms;
        let frame = self.decoder.push_byte(byte)?;
        match AppCommand::from_frame(&frame) {
            Some(cmd) => {
                self.stats.commands_dispatched += 1;
                Some(cmd)
            }
            None => {
                self.stats.unknown_codes += 1;
                None
            }
        }
    }

    /// Check if the connection has gone silent past [`LINK_TIMEOUT_MS`] with
    /// the standby marker armed. The host should drop the transport and call
    /// [`on_disconnect`](Self::on_disconnect).
    pub fn timed_out(&self, now_ms: u64) -> bool {
        self.connected
            && self.decoder.standby_armed()
            && now_ms.saturating_sub(self.last_byte_ms) > LINK_TIMEOUT_MS
    }

    /// Detach the client. Returns the standby command that parks the robot,
    /// once per connection.
    pub fn on_disconnect(&mut self) -> Option<AppCommand> {
        if !self.connected {
            return None;
        }
        self.connected = false;
        Some(AppCommand::Standby)
    }
}

impl Default for AppLink {
    fn default() -> Self {
        Self::new()
    }
}
