// file: src/utils/delay.rs
// description: fixed pause applied before a failed run exits
// reference: https://docs.rs/tokio/latest/tokio/time/fn.sleep.html

use std::fmt::Display;
use std::time::Duration;
use tracing::{error, info, warn};

pub const FALLBACK_DELAY_SECS: u64 = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FailureDelay {
    secs: u64,
}

impl FailureDelay {
    pub fn from_secs(secs: u64) -> Self {
        Self { secs }
    }

    /// Reads the `--delay` argument. Anything that is not a non-negative
    /// integer falls back to [`FALLBACK_DELAY_SECS`].
    pub fn from_arg(raw: &str) -> Self {
        match raw.trim().parse::<i64>() {
            Ok(secs) if secs >= 0 => Self::from_secs(secs as u64),
            Ok(secs) => {
                warn!(
                    "Invalid delay value '{}' (must not be negative), defaulting to {} seconds",
                    secs, FALLBACK_DELAY_SECS
                );
                Self::from_secs(FALLBACK_DELAY_SECS)
            }
            Err(e) => {
                warn!(
                    "Invalid delay value '{}', defaulting to {} seconds: {}",
                    raw, FALLBACK_DELAY_SECS, e
                );
                Self::from_secs(FALLBACK_DELAY_SECS)
            }
        }
    }

    pub fn secs(&self) -> u64 {
        self.secs
    }

    pub fn duration(&self) -> Duration {
        Duration::from_secs(self.secs)
    }

    pub async fn wait(&self) {
        if self.secs == 0 {
            return;
        }

        info!("Delaying for {} seconds before exiting", self.secs);
        tokio::time::sleep(self.duration()).await;
    }

    /// Logs a failed run and holds for the configured delay before handing
    /// the error back; successful results pass through untouched.
    pub async fn on_failure<T, E: Display>(
        &self,
        result: std::result::Result<T, E>,
    ) -> std::result::Result<T, E> {
        if let Err(e) = &result {
            error!("Error: {:#}", e);
            self.wait().await;
        }
        result
    }
}
