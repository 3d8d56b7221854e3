//! Configuration parsing for showreel
//!
//! This module handles parsing of environment variables that can optionally
//! override settings from the config file. The primary configuration source
//! is the config.toml file (see config_file module); command-line arguments
//! take precedence over both.
//!
//! Environment variables (all optional):
//! - SHOWREEL_INTERVAL: Override auto-advance interval from config file
//! - SHOWREEL_TRANSITION_MS: Override transition duration from config file

use crate::carousel::{
    ADVANCE_INTERVAL_MAX_SECS, ADVANCE_INTERVAL_MIN_SECS, TRANSITION_MAX_MS, TRANSITION_MIN_MS,
};
use log::{debug, info, warn};
use std::env;

/// Parse the SHOWREEL_INTERVAL environment variable
///
/// Returns Some(seconds) if a valid interval is configured (2-60 seconds)
/// Returns None if not set or invalid
pub fn parse_advance_interval() -> Option<u64> {
    match env::var("SHOWREEL_INTERVAL") {
        Ok(val) => match val.parse::<u64>() {
            Ok(seconds)
                if (ADVANCE_INTERVAL_MIN_SECS..=ADVANCE_INTERVAL_MAX_SECS).contains(&seconds) =>
            {
                info!(
                    "Auto-advance interval set via environment variable: {} seconds",
                    seconds
                );
                Some(seconds)
            }
            Ok(seconds) => {
                warn!(
                    "Invalid auto-advance interval: {} (must be {}-{} seconds). Using default.",
                    seconds, ADVANCE_INTERVAL_MIN_SECS, ADVANCE_INTERVAL_MAX_SECS
                );
                None
            }
            Err(e) => {
                warn!("Failed to parse SHOWREEL_INTERVAL: {}. Using default.", e);
                None
            }
        },
        Err(_) => {
            debug!("SHOWREEL_INTERVAL not set.");
            None
        }
    }
}

/// Parse the SHOWREEL_TRANSITION_MS environment variable
///
/// Returns Some(milliseconds) if a valid duration is configured (100-3000 ms)
/// Returns None if not set or invalid
pub fn parse_transition_ms() -> Option<u64> {
    match env::var("SHOWREEL_TRANSITION_MS") {
        Ok(val) => match val.parse::<u64>() {
            Ok(ms) if (TRANSITION_MIN_MS..=TRANSITION_MAX_MS).contains(&ms) => {
                info!("Transition duration set via environment variable: {} ms", ms);
                Some(ms)
            }
            Ok(ms) => {
                warn!(
                    "Invalid transition duration: {} (must be {}-{} ms). Using default.",
                    ms, TRANSITION_MIN_MS, TRANSITION_MAX_MS
                );
                None
            }
            Err(e) => {
                warn!(
                    "Failed to parse SHOWREEL_TRANSITION_MS: {}. Using default.",
                    e
                );
                None
            }
        },
        Err(_) => {
            debug!("SHOWREEL_TRANSITION_MS not set.");
            None
        }
    }
}
