//! # Event-sourced Round Index
//!
//! Off-chain consumers rebuild round state purely from the event log. The
//! index here folds events in arrival order and never reads the round or
//! bet accounts, so it can be checked against them.

pub mod round_index;

pub use round_index::*;

use crate::events::{BetPlaced, PayoutClaimed, RoundResolved, RoundStarted, StakeRefunded};

/// Any event emitted by a state-changing instruction
#[derive(Clone, Debug, PartialEq)]
pub enum RoundEvent {
    Started(RoundStarted),
    BetPlaced(BetPlaced),
    Resolved(RoundResolved),
    Claimed(PayoutClaimed),
    Refunded(StakeRefunded),
}

impl RoundEvent {
    pub fn round_id(&self) -> u64 {
        match self {
            RoundEvent::Started(e) => e.round_id,
            RoundEvent::BetPlaced(e) => e.round_id,
            RoundEvent::Resolved(e) => e.round_id,
            RoundEvent::Claimed(e) => e.round_id,
            RoundEvent::Refunded(e) => e.round_id,
        }
    }
}

impl From<RoundStarted> for RoundEvent {
    fn from(event: RoundStarted) -> Self {
        RoundEvent::Started(event)
    }
}

impl From<BetPlaced> for RoundEvent {
    fn from(event: BetPlaced) -> Self {
        RoundEvent::BetPlaced(event)
    }
}

impl From<RoundResolved> for RoundEvent {
    fn from(event: RoundResolved) -> Self {
        RoundEvent::Resolved(event)
    }
}

impl From<PayoutClaimed> for RoundEvent {
    fn from(event: PayoutClaimed) -> Self {
        RoundEvent::Claimed(event)
    }
}

impl From<StakeRefunded> for RoundEvent {
    fn from(event: StakeRefunded) -> Self {
        RoundEvent::Refunded(event)
    }
}
