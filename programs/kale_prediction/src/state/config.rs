//! Global Protocol Configuration
//!
//! Holds the counter that hands out round identifiers.

use anchor_lang::prelude::*;

use crate::constants::SEED_CONFIG;

/// Global configuration account (singleton PDA)
///
/// Seeds: ["config"]
#[account]
#[derive(InitSpace)]
pub struct Config {
    /// Total rounds started (used as incrementing ID)
    pub round_count: u64,

    /// PDA bump seed
    pub bump: u8,
}

impl Config {
    pub const SEED: &'static [u8] = SEED_CONFIG;
}
