//! Agent configuration: compile-time defaults plus a couple of CLI/env overrides.

use std::path::PathBuf;
use std::time::Duration;

pub const DEFAULT_PORT: u16 = 3002;
pub const DEFAULT_LOG_FILE: &str = "metrics.log";
pub const TICK_INTERVAL: Duration = Duration::from_secs(2);

// CORS: the browser dashboard's dev origin
pub const ALLOWED_ORIGIN: &str = "http://localhost:3000";
pub const ALLOWED_HEADER: &str = "my-custom-header";

pub const USAGE: &str = "Usage: sysdash_agent [--port PORT|-p PORT]\n\
Environment: SYSDASH_AGENT_LOG_FILE=path  SYSDASH_AGENT_TICK_MS=ms  RUST_LOG=filter";

#[derive(Debug, Clone, PartialEq)]
pub struct AgentConfig {
    pub port: u16,
    pub log_path: PathBuf,
    pub tick: Duration,
}

impl Default for AgentConfig {
    fn default() -> Self {
        Self {
            port: DEFAULT_PORT,
            log_path: PathBuf::from(DEFAULT_LOG_FILE),
            tick: TICK_INTERVAL,
        }
    }
}

impl AgentConfig {
    /// Returns `None` when help was requested.
    pub fn from_args_and_env<I: IntoIterator<Item = String>>(args: I) -> Option<Self> {
        let args: Vec<String> = args.into_iter().collect();
        if args.iter().skip(1).any(|a| a == "-h" || a == "--help") {
            return None;
        }
        let log_path = std::env::var_os("SYSDASH_AGENT_LOG_FILE")
            .filter(|v| !v.is_empty())
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_LOG_FILE));
        let tick = std::env::var("SYSDASH_AGENT_TICK_MS")
            .ok()
            .and_then(|v| v.parse::<u64>().ok())
            .filter(|&ms| ms > 0)
            .map(Duration::from_millis)
            .unwrap_or(TICK_INTERVAL);
        Some(Self {
            port: parse_port(args, DEFAULT_PORT),
            log_path,
            tick,
        })
    }
}

pub fn parse_port<I: IntoIterator<Item = String>>(args: I, default_port: u16) -> u16 {
    let mut it = args.into_iter();
    let _ = it.next(); // program name
    let mut long: Option<String> = None;
    let mut short: Option<String> = None;
    while let Some(a) = it.next() {
        match a.as_str() {
            "--port" => long = it.next(),
            "-p" => short = it.next(),
            _ if a.starts_with("--port=") => {
                if let Some((_, v)) = a.split_once('=') {
                    long = Some(v.to_string());
                }
            }
            _ => {}
        }
    }
    long.or(short)
        .and_then(|s| s.parse::<u16>().ok())
        .unwrap_or(default_port)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(v: &[&str]) -> Vec<String> {
        v.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn port_long_short_and_assign() {
        assert_eq!(parse_port(args(&["agent", "--port", "9001"]), 3002), 9001);
        assert_eq!(parse_port(args(&["agent", "-p", "9002"]), 3002), 9002);
        assert_eq!(parse_port(args(&["agent", "--port=9003"]), 3002), 9003);
        assert_eq!(parse_port(args(&["agent"]), 3002), 3002);
    }

    #[test]
    fn bad_port_falls_back() {
        assert_eq!(parse_port(args(&["agent", "--port", "nope"]), 3002), 3002);
        assert_eq!(parse_port(args(&["agent", "-p"]), 3002), 3002);
    }

    #[test]
    fn help_short_circuits() {
        assert!(AgentConfig::from_args_and_env(args(&["agent", "--help"])).is_none());
        assert!(AgentConfig::from_args_and_env(args(&["agent", "-p", "1", "-h"])).is_none());
    }

    #[test]
    fn defaults() {
        let c = AgentConfig::default();
        assert_eq!(c.port, 3002);
        assert_eq!(c.tick, Duration::from_secs(2));
        assert_eq!(c.log_path, PathBuf::from("metrics.log"));
    }
}
