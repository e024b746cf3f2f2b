//! Per-account stake ledger
//!
//! One account per (round, bettor, side). The amount only grows while the
//! round accepts bets; afterwards only the status moves, and only once.

use anchor_lang::prelude::*;

use crate::constants::SEED_BET;
use crate::state::Side;

/// Settlement status of a stake
///
/// A stake is either paid out or refunded, never both.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, PartialEq, Eq, InitSpace, Debug, Default)]
pub enum BetStatus {
    #[default]
    Active,
    Claimed,
    Refunded,
}

/// Stake of one account on one side of one round
///
/// Seeds: ["bet", round_id.to_le_bytes(), bettor, [side]]
#[account]
#[derive(InitSpace, Debug, PartialEq)]
pub struct Bet {
    pub round_id: u64,

    pub bettor: Pubkey,

    pub side: Side,

    /// Aggregated stake; zero only on an account created in the current
    /// instruction and not yet credited
    pub amount: u64,

    pub status: BetStatus,

    /// PDA bump seed
    pub bump: u8,
}

impl Bet {
    pub const SEED: &'static [u8] = SEED_BET;

    /// Fresh, uncredited entry for `bettor` on `side`
    pub fn empty(round_id: u64, bettor: Pubkey, side: Side, bump: u8) -> Self {
        Self {
            round_id,
            bettor,
            side,
            amount: 0,
            status: BetStatus::Active,
            bump,
        }
    }

    pub fn is_claimed(&self) -> bool {
        self.status == BetStatus::Claimed
    }

    pub fn is_refunded(&self) -> bool {
        self.status == BetStatus::Refunded
    }
}
