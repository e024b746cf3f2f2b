//! Refund fallback for rounds the admin never resolved.
//!
//! Not a stored state: a round is refundable while it is still `Open` and
//! the grace window past finality has elapsed. Pools are left as historical
//! totals; disbursement is tracked on the bets themselves.

use anchor_lang::prelude::*;

use crate::constants::GRACE_LEDGERS;
use crate::errors::PredictionError;
use crate::events::StakeRefunded;
use crate::state::{Bet, BetStatus, Round};

pub struct RefundCalculator;

impl RefundCalculator {
    /// First ledger at which refunds open; `None` if it lies beyond `u64`
    pub fn refund_ledger(round: &Round) -> Option<u64> {
        round.finality_ledger.checked_add(GRACE_LEDGERS)
    }

    pub fn is_eligible(round: &Round, now: u64) -> bool {
        round.is_open() && Self::refund_ledger(round).is_some_and(|opens| now >= opens)
    }

    /// Return the full stake and mark the bet refunded
    pub fn refund(round: &Round, bet: &mut Bet, now: u64) -> Result<StakeRefunded> {
        require!(
            Self::is_eligible(round, now),
            PredictionError::RefundNotEligible
        );
        require!(
            bet.status == BetStatus::Active,
            PredictionError::AlreadyClaimed
        );
        require!(bet.amount > 0, PredictionError::NothingToClaim);

        bet.status = BetStatus::Refunded;

        Ok(StakeRefunded {
            round_id: round.id,
            account: bet.bettor,
            amount: bet.amount,
        })
    }
}
