//! Engine configuration, read from the environment.

use std::path::PathBuf;
use std::time::{Duration, SystemTime, UNIX_EPOCH};

use crate::types::DEFAULT_TICK_MS;

/// Default capacity of the intent channel
pub const DEFAULT_COMMAND_BUFFER: usize = 64;

#[derive(Debug, Clone)]
pub struct EngineConfig {
    /// Gravity period
    pub tick_interval: Duration,
    /// Seed for the first episode's bag
    pub seed: u64,
    /// JSON-lines event log; `None` disables logging
    pub event_log_path: Option<PathBuf>,
    /// Capacity of the intent channel
    pub command_buffer: usize,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            tick_interval: Duration::from_millis(DEFAULT_TICK_MS),
            seed: clock_seed(),
            event_log_path: None,
            command_buffer: DEFAULT_COMMAND_BUFFER,
        }
    }
}

impl EngineConfig {
    /// Create from environment variables
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Create from an arbitrary variable lookup (unset or unparsable values use defaults)
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();

        let tick_interval = lookup("TETRIC_TICK_MS")
            .and_then(|s| s.trim().parse::<u64>().ok())
            .filter(|&ms| ms > 0)
            .map(Duration::from_millis)
            .unwrap_or(defaults.tick_interval);

        let seed = lookup("TETRIC_SEED")
            .and_then(|s| s.trim().parse().ok())
            .unwrap_or(defaults.seed);

        let event_log_path = lookup("TETRIC_EVENT_LOG")
            .map(|s| s.trim().to_string())
            .and_then(|s| if s.is_empty() { None } else { Some(PathBuf::from(s)) });

        let command_buffer = lookup("TETRIC_COMMAND_BUFFER")
            .and_then(|s| s.trim().parse::<usize>().ok())
            .unwrap_or(defaults.command_buffer)
            .max(1);

        Self {
            tick_interval,
            seed,
            event_log_path,
            command_buffer,
        }
    }

    pub fn with_tick_interval(mut self, tick_interval: Duration) -> Self {
        self.tick_interval = tick_interval;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    pub fn with_event_log(mut self, path: impl Into<PathBuf>) -> Self {
        self.event_log_path = Some(path.into());
        self
    }
}

fn clock_seed() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos() as u64)
        .unwrap_or(1)
}
