//! Runtime knobs for the terminal front-end, read from the environment.
//!
//! Game rules are compile-time constants; nothing here can change them.

use std::time::{SystemTime, UNIX_EPOCH};

use crate::types::TICK_MS;

/// Front-end configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunConfig {
    /// Shape factory seed.
    pub seed: u32,
    /// Scheduler cadence in milliseconds, never zero.
    pub tick_ms: u64,
    /// Log file; logging is off when `None`.
    pub log_path: Option<String>,
    /// Ring the terminal bell on lock and game over.
    pub bell: bool,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            seed: time_seed(),
            tick_ms: TICK_MS,
            log_path: None,
            bell: true,
        }
    }
}

impl RunConfig {
    /// Create from `FALLING_BLOCKS_*` environment variables.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Create from an arbitrary variable source. Absent or unparseable values
    /// fall back to the defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let seed = lookup("FALLING_BLOCKS_SEED")
            .and_then(|s| s.trim().parse().ok())
            .unwrap_or_else(time_seed);

        let tick_ms = lookup("FALLING_BLOCKS_TICK_MS")
            .and_then(|s| s.trim().parse::<u64>().ok())
            .unwrap_or(TICK_MS)
            .max(1);

        let log_path = lookup("FALLING_BLOCKS_LOG_PATH")
            .map(|s| s.trim().to_string())
            .and_then(|s| if s.is_empty() { None } else { Some(s) });

        let bell = lookup("FALLING_BLOCKS_BELL")
            .map(|v| {
                let v = v.trim().to_lowercase();
                !(v == "0" || v == "false" || v == "off")
            })
            .unwrap_or(true);

        Self {
            seed,
            tick_ms,
            log_path,
            bell,
        }
    }
}

fn time_seed() -> u32 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos() as u32)
        .unwrap_or(1)
}
