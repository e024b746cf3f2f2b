//! # Pro-rata Settlement
//!
//! Winners take back their stake plus a share of the losing pool
//! proportional to their weight in the winning pool:
//!
//! ```text
//! payout = amount + floor(amount × losing_pool / winning_pool)
//! ```
//!
//! The product is formed in `u128`, so it cannot overflow for `u64`
//! operands. Flooring leaves at most `winning_pool - 1` units of the losing
//! pool unclaimed across all winners; that dust stays where it is.

use anchor_lang::prelude::*;

use crate::errors::PredictionError;
use crate::events::PayoutClaimed;
use crate::state::{Bet, BetStatus, Round, Side};

pub struct SettlementCalculator;

impl SettlementCalculator {
    /// Raw payout for a winning stake of `amount`
    pub fn payout(amount: u64, winning_pool: u64, losing_pool: u64) -> Result<u64> {
        require!(amount > 0, PredictionError::NothingToClaim);
        require!(amount <= winning_pool, PredictionError::NothingToClaim);

        let share = (amount as u128)
            .checked_mul(losing_pool as u128)
            .ok_or(PredictionError::ArithmeticOverflow)?
            .checked_div(winning_pool as u128)
            .ok_or(PredictionError::ArithmeticOverflow)?;
        let payout = (amount as u128)
            .checked_add(share)
            .ok_or(PredictionError::ArithmeticOverflow)?;

        u64::try_from(payout).map_err(|_| error!(PredictionError::ArithmeticOverflow))
    }

    /// What a stake of `amount` on `side` is worth against a resolved round.
    /// Losing stakes are worth nothing.
    pub fn quote(round: &Round, side: Side, amount: u64) -> Result<u64> {
        let winning_side = round
            .winning_side()
            .ok_or(PredictionError::NotResolved)?;
        if side != winning_side || amount == 0 {
            return Ok(0);
        }
        Self::payout(
            amount,
            round.pool(winning_side),
            round.pool(winning_side.opposite()),
        )
    }

    /// Settle a winning bet. The only write is `bet.status`.
    pub fn claim(round: &Round, bet: &mut Bet) -> Result<PayoutClaimed> {
        let winning_side = round
            .winning_side()
            .ok_or(PredictionError::NotResolved)?;
        require!(
            bet.status == BetStatus::Active,
            PredictionError::AlreadyClaimed
        );
        require!(
            bet.amount > 0 && bet.side == winning_side,
            PredictionError::NothingToClaim
        );

        let amount = Self::payout(
            bet.amount,
            round.pool(winning_side),
            round.pool(winning_side.opposite()),
        )?;
        bet.status = BetStatus::Claimed;

        Ok(PayoutClaimed {
            round_id: round.id,
            account: bet.bettor,
            amount,
        })
    }
}
