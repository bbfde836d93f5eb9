#![deny(warnings)]

//! Core domain models and rules for the Startup Survival Simulator.
//!
//! This crate defines the startup/investor state, the three weekly choices,
//! the deterministic end-of-week adjustments, stat clamping and the
//! end-condition evaluator. Randomness lives in `sim-events` and sequencing in
//! `sim-runtime`.

pub mod adjust;
pub mod choice;
pub mod constants;
pub mod outcome;
pub mod state;

pub use adjust::{cash_reserve_check, morale_recovery};
pub use choice::{apply_choice, PlayerChoice};
pub use outcome::{evaluate, GameStatus};
pub use state::{clamp_stats, InvestorState, StartupState};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Run configuration supplied by the front end.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct SimConfig {
    /// Display name of the startup (non-empty).
    pub startup_name: String,
    /// Seed for the deterministic event RNG.
    pub rng_seed: u64,
}

/// Validation errors for values crossing into the core.
#[derive(Debug, Error, PartialEq)]
pub enum ValidationError {
    /// The startup name is empty or whitespace.
    #[error("startup name cannot be empty")]
    EmptyStartupName,
    /// Menu input other than "1", "2" or "3".
    #[error("unknown choice {0:?}, expected 1, 2, or 3")]
    UnknownChoice(String),
}

/// Validate a startup name entered by the player.
pub fn validate_startup_name(name: &str) -> Result<(), ValidationError> {
    if name.trim().is_empty() {
        return Err(ValidationError::EmptyStartupName);
    }
    Ok(())
}

/// Format a dollar amount with thousands separators, e.g. `-$6,000`.
pub fn format_usd(amount: i64) -> String {
    let digits = amount.unsigned_abs().to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3 + 2);
    if amount < 0 {
        out.push('-');
    }
    out.push('$');
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// Validate a run configuration.
pub fn validate_config(cfg: &SimConfig) -> Result<(), ValidationError> {
    validate_startup_name(&cfg.startup_name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_names_are_rejected() {
        assert_eq!(
            validate_startup_name(""),
            Err(ValidationError::EmptyStartupName)
        );
        assert_eq!(
            validate_startup_name("   "),
            Err(ValidationError::EmptyStartupName)
        );
        assert!(validate_startup_name("Acme").is_ok());
    }

    #[test]
    fn config_roundtrip() {
        let cfg = SimConfig {
            startup_name: "Acme".to_string(),
            rng_seed: 42,
        };
        validate_config(&cfg).unwrap();
        let s = serde_json::to_string(&cfg).unwrap();
        let back: SimConfig = serde_json::from_str(&s).unwrap();
        assert_eq!(back.startup_name, "Acme");
        assert_eq!(back.rng_seed, 42);
    }

    #[test]
    fn usd_formatting() {
        assert_eq!(format_usd(0), "$0");
        assert_eq!(format_usd(999), "$999");
        assert_eq!(format_usd(6_000), "$6,000");
        assert_eq!(format_usd(100_000), "$100,000");
        assert_eq!(format_usd(1_234_567), "$1,234,567");
        assert_eq!(format_usd(-8_000), "-$8,000");
    }

    #[test]
    fn error_messages_are_readable() {
        let e = ValidationError::UnknownChoice("7".to_string());
        assert_eq!(e.to_string(), "unknown choice \"7\", expected 1, 2, or 3");
    }
}
