//! Payout Claims
//!
//! After resolution, each winning entry can be claimed exactly once for its
//! stake plus its pro-rata share of the losing pool.
//!
//! ## Claim Calculation
//!
//! ```text
//! payout = stake + floor(stake * losing_pool / winning_pool)
//! ```
//!
//! For example:
//! - Alice staked 100 on HIGHER, Bob staked 300 on LOWER
//! - Actual count lands above the prediction, HIGHER wins
//! - Alice claims 100 + floor(100 * 300 / 100) = 400
//!
//! The engine only computes and records the amount owed; moving value is
//! left to the surrounding token ledger, which consumes `PayoutClaimed`.

use anchor_lang::prelude::*;

use crate::engine::SettlementCalculator;
use crate::errors::PredictionError;
use crate::state::{load_account, store_account, Bet, Round, Side};

#[derive(Accounts)]
#[instruction(round_id: u64, side: Side)]
pub struct Claim<'info> {
    pub bettor: Signer<'info>,

    /// CHECK: PDA-validated here, deserialized in the handler so that a
    /// missing round reports `RoundNotFound`
    #[account(
        seeds = [Round::SEED, round_id.to_le_bytes().as_ref()],
        bump,
    )]
    pub round: UncheckedAccount<'info>,

    /// CHECK: PDA-validated here, deserialized in the handler so that a
    /// missing entry reports `NothingToClaim`
    #[account(
        mut,
        seeds = [
            Bet::SEED,
            round_id.to_le_bytes().as_ref(),
            bettor.key().as_ref(),
            side.to_seed().as_ref(),
        ],
        bump,
    )]
    pub bet: UncheckedAccount<'info>,
}

impl<'info> Claim<'info> {
    /// Claim the payout of a winning entry
    pub fn claim(&mut self) -> Result<u64> {
        let round: Round = load_account(&self.round, PredictionError::RoundNotFound)?;
        round
            .winning_side()
            .ok_or(PredictionError::NotResolved)?;
        let mut bet: Bet = load_account(&self.bet, PredictionError::NothingToClaim)?;

        let event = SettlementCalculator::claim(&round, &mut bet)?;
        store_account(&self.bet, &bet)?;

        let payout = event.amount;
        emit!(event);

        msg!(
            "Round {}: {} claimed {} on a {} stake",
            round.id,
            bet.bettor,
            payout,
            bet.amount
        );

        Ok(payout)
    }
}
