//! Refunds
//!
//! Safety valve for rounds the admin never resolves: once the grace window
//! past finality has elapsed on a still-open round, every entry can take
//! back its full stake, once.

use anchor_lang::prelude::*;

use crate::engine::{ledger_now, RefundCalculator};
use crate::errors::PredictionError;
use crate::state::{load_account, store_account, Bet, Round, Side};

#[derive(Accounts)]
#[instruction(round_id: u64, side: Side)]
pub struct Refund<'info> {
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

impl<'info> Refund<'info> {
    pub fn refund(&mut self) -> Result<u64> {
        let now = ledger_now()?;
        let round: Round = load_account(&self.round, PredictionError::RoundNotFound)?;
        require!(
            RefundCalculator::is_eligible(&round, now),
            PredictionError::RefundNotEligible
        );
        let mut bet: Bet = load_account(&self.bet, PredictionError::NothingToClaim)?;

        let event = RefundCalculator::refund(&round, &mut bet, now)?;
        store_account(&self.bet, &bet)?;

        let amount = event.amount;
        emit!(event);

        msg!("Round {}: refunded {} to {}", round.id, amount, bet.bettor);

        Ok(amount)
    }
}
