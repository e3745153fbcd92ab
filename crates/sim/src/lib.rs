pub mod bridge;
pub mod clock;
pub mod error;
pub mod servo;

pub use bridge::{AppBridge, AppBridgeConfig, DEFAULT_APP_PORT, DEFAULT_TICK_MS};
pub use clock::WallClock;
pub use error::SimError;
pub use servo::SimServoBank;
