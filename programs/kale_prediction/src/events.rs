use anchor_lang::prelude::*;

use crate::state::Side;

#[event]
#[derive(Clone, Debug, PartialEq)]
pub struct ProtocolInitialized {
    pub config: Pubkey,
}

// --- ROUND LIFECYCLE ---
#[event]
#[derive(Clone, Debug, PartialEq)]
pub struct RoundStarted {
    pub round_id: u64,
    pub admin: Pubkey,
    pub predicted_count: u64,
    pub deadline_ledger: u64,
    pub finality_ledger: u64,
}

#[event]
#[derive(Clone, Debug, PartialEq)]
pub struct RoundResolved {
    pub round_id: u64,
    pub actual_count: u64,
    pub winning_side: Side,
}

// --- BETTING ---
#[event]
#[derive(Clone, Debug, PartialEq)]
pub struct BetPlaced {
    pub round_id: u64,
    pub account: Pubkey,
    pub side: Side,
    pub amount: u64,
}

// --- SETTLEMENT ---
#[event]
#[derive(Clone, Debug, PartialEq)]
pub struct PayoutClaimed {
    pub round_id: u64,
    pub account: Pubkey,
    pub amount: u64,
}

#[event]
#[derive(Clone, Debug, PartialEq)]
pub struct StakeRefunded {
    pub round_id: u64,
    pub account: Pubkey,
    pub amount: u64,
}
