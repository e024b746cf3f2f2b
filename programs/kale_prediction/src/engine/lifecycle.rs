//! Round state machine: Open → Resolved, nothing else.

use anchor_lang::prelude::*;

use crate::engine::AdminGate;
use crate::errors::PredictionError;
use crate::events::{BetPlaced, RoundResolved, RoundStarted};
use crate::state::{Bet, Round, RoundStatus, Side};

pub struct RoundLifecycle;

impl RoundLifecycle {
    /// Deadline must come strictly before finality, and strictly after `now`
    pub fn check_schedule(now: u64, deadline_ledger: u64, finality_ledger: u64) -> Result<()> {
        require!(
            deadline_ledger < finality_ledger,
            PredictionError::InvalidSchedule
        );
        require!(deadline_ledger > now, PredictionError::InvalidSchedule);
        Ok(())
    }

    /// Build a freshly opened round administered by `admin`
    pub fn start(
        round_id: u64,
        admin: Pubkey,
        predicted_count: u64,
        deadline_ledger: u64,
        finality_ledger: u64,
        now: u64,
        bump: u8,
    ) -> Result<(Round, RoundStarted)> {
        Self::check_schedule(now, deadline_ledger, finality_ledger)?;

        let round = Round {
            id: round_id,
            admin,
            predicted_count,
            deadline_ledger,
            finality_ledger,
            high_pool: 0,
            low_pool: 0,
            status: RoundStatus::Open,
            bump,
        };
        let event = RoundStarted {
            round_id,
            admin,
            predicted_count,
            deadline_ledger,
            finality_ledger,
        };

        Ok((round, event))
    }

    /// Credit `amount` to `bet` and to the matching pool of `round`.
    ///
    /// Both counters are computed before either is written, so an overflow
    /// leaves the pair unchanged.
    pub fn place_bet(round: &mut Round, bet: &mut Bet, now: u64, amount: u64) -> Result<BetPlaced> {
        require!(round.is_open(), PredictionError::AlreadyResolved);
        require!(now < round.deadline_ledger, PredictionError::BettingClosed);
        require!(amount > 0, PredictionError::InvalidAmount);

        let side_pool = round
            .pool(bet.side)
            .checked_add(amount)
            .ok_or(PredictionError::ArithmeticOverflow)?;
        round
            .total_pool()
            .and_then(|total| total.checked_add(amount))
            .ok_or(PredictionError::ArithmeticOverflow)?;
        let staked = bet
            .amount
            .checked_add(amount)
            .ok_or(PredictionError::ArithmeticOverflow)?;

        match bet.side {
            Side::Higher => round.high_pool = side_pool,
            Side::Lower => round.low_pool = side_pool,
        }
        bet.amount = staked;

        Ok(BetPlaced {
            round_id: round.id,
            account: bet.bettor,
            side: bet.side,
            amount,
        })
    }

    /// Record the outcome. Terminal; a resolved round never reopens.
    pub fn resolve(
        round: &mut Round,
        caller: &Pubkey,
        actual_count: u64,
        now: u64,
    ) -> Result<RoundResolved> {
        require!(round.is_open(), PredictionError::AlreadyResolved);
        AdminGate::authorize(round, caller)?;
        require!(now >= round.finality_ledger, PredictionError::NotYetFinal);

        let winning_side = Self::winning_side(round.predicted_count, actual_count);
        round.status = RoundStatus::Resolved {
            actual_count,
            winning_side,
        };

        Ok(RoundResolved {
            round_id: round.id,
            actual_count,
            winning_side,
        })
    }

    /// A tie goes to LOWER
    pub fn winning_side(predicted_count: u64, actual_count: u64) -> Side {
        if actual_count > predicted_count {
            Side::Higher
        } else {
            Side::Lower
        }
    }
}
