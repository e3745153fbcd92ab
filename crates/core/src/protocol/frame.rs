//! Command Frame Decoder
//!
//! Byte-at-a-time decoder for the control app's wire format. Feed it the TCP
//! stream one byte per call; it hunts for the `0xFF 0x55` preamble, counts
//! the length byte down across the payload, and yields a [`CommandFrame`]
//! when a frame completes.
//!
//! # Wire format
//!
//! - Bytes 0-1: preamble `0xFF 0x55`
//! - Byte 2: payload length
//! - Bytes 3..: payload; offset 9 = action code, offset 10 = device code,
//!   offset 12 = movement sub-code (meaningful only for the run action)
//!
//! The payload buffer is not cleared between frames, exactly as the control
//! app expects: a short frame leaves earlier bytes in the high offsets, and
//! the parse masks the movement sub-code to 0 for non-run actions.

use super::{ACTION_RUN, STANDBY_MARKER_BYTE};

/// Highest buffer index a frame byte may occupy; crossing it resyncs the hunt.
pub const MAX_FRAME_INDEX: usize = 120;

const FRAME_BUF_LEN: usize = MAX_FRAME_INDEX + 1;

/// Decoder statistics for monitoring and diagnostics.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DecoderStats {
    /// Complete frames decoded
    pub frames_decoded: u32,
    /// Hunt resyncs after a frame overran the buffer
    pub overflow_resets: u32,
}

/// One decoded command frame, before interpretation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CommandFrame {
    /// Action code (payload offset 9)
    pub action: u8,
    /// Device/category code (payload offset 10)
    pub device: u8,
    /// Movement sub-code (payload offset 12); 0 unless the action is run
    pub movement: u8,
}

/// Streaming frame decoder.
///
/// Owns the hunt/receive state machine and the frame buffer. Connection
/// supervision (timeouts, the standby marker) lives in
/// [`AppLink`](super::AppLink); this type only turns bytes into frames.
#[derive(Debug)]
pub struct FrameDecoder {
    buf: [u8; FRAME_BUF_LEN],
    /// Running byte index; advances even while hunting
    index: usize,
    /// Payload bytes left before the frame completes (wraps like the length
    /// byte it mirrors, so a zero-length frame never completes)
    remaining: u8,
    previous: u8,
    receiving: bool,
    standby_armed: bool,
    stats: DecoderStats,
}

impl FrameDecoder {
    /// Create a decoder hunting for a preamble
    /// (const fn for static initialization).
    pub const fn new() -> Self {
        Self {
            buf: [0; FRAME_BUF_LEN],
            index: 0,
            remaining: 0,
            previous: 0,
            receiving: false,
            standby_armed: false,
            stats: DecoderStats {
                frames_decoded: 0,
                overflow_resets: 0,
            },
        }
    }

    /// Get decoder statistics.
    pub fn stats(&self) -> DecoderStats {
        self.stats
    }

    /// Check if the most recent byte was the standby marker. The link layer
    /// synthesizes a silence standby only while this is armed.
    pub fn standby_armed(&self) -> bool {
        self.standby_armed
    }

    /// Drop any partial frame and resume hunting.
    ///
    /// Called on a fresh connection. Statistics survive; the frame buffer
    /// keeps its bytes (only a completed parse ever reads them).
    pub fn reset(&mut self) {
        self.index = 0;
        self.remaining = 0;
        self.previous = 0;
        self.receiving = false;
        self.standby_armed = false;
    }

    /// Consume one byte from the stream, yielding a frame when one completes.
    pub fn push_byte(&mut self, byte: u8) -> Option<CommandFrame> {
        self.standby_armed = byte == STANDBY_MARKER_BYTE;

        if byte == 0x55 && !self.receiving {
            if self.previous == 0xFF {
                self.index = 1;
                self.receiving = true;
            }
        } else {
            self.previous = byte;
            if self.receiving {
                if self.index == 2 {
                    self.remaining = byte;
                } else if self.index > 2 {
                    self.remaining = self.remaining.wrapping_sub(1);
                }
                self.buf[self.index] = byte;
            }
        }

        self.index += 1;

        if self.index > MAX_FRAME_INDEX {
            self.index = 0;
            self.receiving = false;
            self.stats.overflow_resets += 1;
        }

        if self.receiving && self.remaining == 0 && self.index > 3 {
            self.receiving = false;
            self.index = 0;
            self.stats.frames_decoded += 1;
            return Some(self.parse());
        }

        None
    }

    /// Lift the interesting offsets out of the completed frame.
    fn parse(&self) -> CommandFrame {
        let action = self.buf[9];
        let device = self.buf[10];
        let movement = if action == ACTION_RUN { self.buf[12] } else { 0 };
        CommandFrame {
            action,
            device,
            movement,
        }
    }
}

impl Default for FrameDecoder {
    fn default() -> Self {
        Self::new()
    }
}
