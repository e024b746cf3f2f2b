//! Round Resolution
//!
//! The round's own admin records the actual invocation count once the
//! finality ledger is reached.
//!
//! ## Resolution Flow
//!
//! 1. Betting deadline passes
//! 2. Finality ledger is reached and the count is final
//! 3. Admin calls `resolve_round` with the actual count
//! 4. Round transitions to Resolved, pools are frozen
//! 5. Winners can claim

use anchor_lang::prelude::*;

use crate::engine::{ledger_now, RoundLifecycle};
use crate::errors::PredictionError;
use crate::state::{load_account, store_account, Round, Side};

/// Accounts for round resolution
#[derive(Accounts)]
#[instruction(round_id: u64)]
pub struct ResolveRound<'info> {
    /// Must match the admin stored on the round
    pub admin: Signer<'info>,

    /// CHECK: PDA-validated here, deserialized in the handler so that a
    /// missing round reports `RoundNotFound`
    #[account(
        mut,
        seeds = [Round::SEED, round_id.to_le_bytes().as_ref()],
        bump,
    )]
    pub round: UncheckedAccount<'info>,
}

impl<'info> ResolveRound<'info> {
    /// Resolve the round with the observed count
    pub fn resolve_round(&mut self, actual_count: u64) -> Result<Side> {
        let now = ledger_now()?;
        let mut round: Round = load_account(&self.round, PredictionError::RoundNotFound)?;

        let event = RoundLifecycle::resolve(&mut round, &self.admin.key(), actual_count, now)?;
        store_account(&self.round, &round)?;

        let winning_side = event.winning_side;
        emit!(event);

        msg!(
            "Round {} resolved: actual {} vs predicted {}, {:?} wins",
            round.id,
            actual_count,
            round.predicted_count,
            winning_side
        );

        Ok(winning_side)
    }
}
