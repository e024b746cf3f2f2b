//! Prediction Round State
//!
//! A round is one over/under market on an invocation count. Its admin,
//! prediction and schedule are fixed at creation; only the pools and the
//! status ever change, and the status changes at most once.

use anchor_lang::prelude::*;

use crate::constants::SEED_ROUND;

/// Side of the prediction a stake is placed on
#[derive(
    AnchorSerialize, AnchorDeserialize, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, InitSpace, Debug,
)]
pub enum Side {
    /// Actual count lands at or below the prediction
    Lower,
    /// Actual count lands strictly above the prediction
    Higher,
}

impl Side {
    /// Single-byte PDA seed for the side
    pub fn to_seed(self) -> [u8; 1] {
        match self {
            Side::Lower => [0],
            Side::Higher => [1],
        }
    }

    pub fn opposite(self) -> Side {
        match self {
            Side::Lower => Side::Higher,
            Side::Higher => Side::Lower,
        }
    }
}

/// Round lifecycle status
///
/// Resolution data only exists on the `Resolved` variant.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, PartialEq, Eq, InitSpace, Debug, Default)]
pub enum RoundStatus {
    /// Accepting bets until the deadline, awaiting resolution after it
    #[default]
    Open,
    /// Terminal: outcome recorded, pools frozen
    Resolved {
        actual_count: u64,
        winning_side: Side,
    },
}

/// Individual prediction round account
///
/// Seeds: ["round", round_id.to_le_bytes()]
#[account]
#[derive(InitSpace, Debug, PartialEq)]
pub struct Round {
    /// Unique round identifier
    pub id: u64,

    /// Identity allowed to resolve this round
    pub admin: Pubkey,

    /// Baseline the actual count is compared against
    pub predicted_count: u64,

    /// Bets are accepted while `now < deadline_ledger`
    pub deadline_ledger: u64,

    /// Resolution is allowed once `now >= finality_ledger`
    pub finality_ledger: u64,

    /// Sum of all HIGHER stakes
    pub high_pool: u64,

    /// Sum of all LOWER stakes
    pub low_pool: u64,

    pub status: RoundStatus,

    /// PDA bump seed
    pub bump: u8,
}

impl Round {
    pub const SEED: &'static [u8] = SEED_ROUND;

    pub fn pool(&self, side: Side) -> u64 {
        match side {
            Side::Higher => self.high_pool,
            Side::Lower => self.low_pool,
        }
    }

    /// Both pools combined; overflow is rejected when stakes are added,
    /// so this never wraps for a stored round.
    pub fn total_pool(&self) -> Option<u64> {
        self.high_pool.checked_add(self.low_pool)
    }

    pub fn is_open(&self) -> bool {
        self.status == RoundStatus::Open
    }

    pub fn winning_side(&self) -> Option<Side> {
        match self.status {
            RoundStatus::Open => None,
            RoundStatus::Resolved { winning_side, .. } => Some(winning_side),
        }
    }
}
