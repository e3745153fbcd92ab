//! TCP app bridge for driving the simulated robot from the control app.
//!
//! Binds the app protocol port, parks the robot in standby, and serves one
//! client at a time the way the robot's own access point firmware does.
//!
//! Usage:
//!   cargo run -p quadbot_sim --bin app_bridge -- [OPTIONS]
//!
//! Options:
//!   --port <PORT>    TCP port to listen on (default: 100)
//!   --tick-ms <MS>   Sequencer polling interval (default: 20)

use std::env;
use std::process;

use tracing_subscriber::EnvFilter;

use quadbot_sim::{AppBridge, AppBridgeConfig, SimServoBank};

fn parse_args() -> AppBridgeConfig {
    let mut config = AppBridgeConfig::new();

    let raw: Vec<String> = env::args().collect();
    let mut i = 1;
    while i < raw.len() {
        match raw[i].as_str() {
            "--port" => {
                i += 1;
                config.port = parse_arg(&raw, i, "port");
            }
            "--tick-ms" => {
                i += 1;
                config.tick_ms = parse_arg(&raw, i, "tick-ms");
            }
            "-h" | "--help" => {
                print_usage();
                process::exit(0);
            }
            other => {
                eprintln!("Unknown option: {other}");
                print_usage();
                process::exit(1);
            }
        }
        i += 1;
    }

    if config.tick_ms == 0 {
        eprintln!("Error: tick-ms must be at least 1");
        process::exit(1);
    }

    config
}

fn parse_arg<T: std::str::FromStr>(raw: &[String], i: usize, name: &str) -> T {
    raw.get(i)
        .unwrap_or_else(|| {
            eprintln!("Error: --{name} requires a value");
            process::exit(1);
        })
        .parse()
        .unwrap_or_else(|_| {
            eprintln!("Error: invalid value for --{name}");
            process::exit(1);
        })
}

fn print_usage() {
    eprintln!(
        "Usage: app_bridge [OPTIONS]\n\
         \n\
         Options:\n\
         \x20 --port <PORT>    TCP port to listen on (default: 100)\n\
         \x20                  Ports below 1024 need elevated privileges.\n\
         \x20 --tick-ms <MS>   Sequencer polling interval (default: 20)\n\
         \x20 -h, --help       Show this help"
    );
}

#[tokio::main(flavor = "current_thread")]
async fn main() {
    let config = parse_args();

    // Log filtering via RUST_LOG, info by default
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("info".parse().unwrap()))
        .init();

    println!("=== QuadBot App Bridge ===");
    println!("Port: {}, tick: {} ms", config.port, config.tick_ms);
    println!("Point the control app at this host, TCP port {}.", config.port);
    println!();

    let servos = SimServoBank::new();
    let bridge = match AppBridge::bind(config, servos).await {
        Ok(bridge) => bridge,
        Err(e) => {
            eprintln!("Error: {e}");
            process::exit(1);
        }
    };

    let ctrl_c = tokio::signal::ctrl_c();
    tokio::select! {
        result = bridge.run() => {
            if let Err(e) = result {
                eprintln!("Bridge error: {e}");
                process::exit(1);
            }
        }
        _ = ctrl_c => {
            println!("\nShutdown requested.");
        }
    }
}
