//! Round Creation
//!
//! Anyone may open a round; the caller becomes its admin and is the only
//! identity that can later resolve it. Identifiers come from the global
//! config counter.

use anchor_lang::prelude::*;

use crate::engine::{ledger_now, RoundLifecycle};
use crate::errors::PredictionError;
use crate::state::{Config, Round};

#[derive(Accounts)]
pub struct StartRound<'info> {
    /// Round creator, stored as the round admin
    #[account(mut)]
    pub admin: Signer<'info>,

    #[account(
        mut,
        seeds = [Config::SEED],
        bump = config.bump,
    )]
    pub config: Account<'info, Config>,

    /// Addressed by the counter the client read before submitting. When
    /// another start lands first the address no longer matches and the
    /// transaction fails with `ConstraintSeeds`; re-read `round_count` and
    /// retry.
    #[account(
        init,
        payer = admin,
        space = 8 + Round::INIT_SPACE,
        seeds = [Round::SEED, config.round_count.to_le_bytes().as_ref()],
        bump,
    )]
    pub round: Account<'info, Round>,

    pub system_program: Program<'info, System>,
}

impl<'info> StartRound<'info> {
    pub fn start_round(
        &mut self,
        predicted_count: u64,
        deadline_ledger: u64,
        finality_ledger: u64,
        bumps: &StartRoundBumps,
    ) -> Result<u64> {
        let now = ledger_now()?;
        let round_id = self.config.round_count;

        let (round, event) = RoundLifecycle::start(
            round_id,
            self.admin.key(),
            predicted_count,
            deadline_ledger,
            finality_ledger,
            now,
            bumps.round,
        )?;
        let next_id = round_id
            .checked_add(1)
            .ok_or(PredictionError::ArithmeticOverflow)?;

        self.round.set_inner(round);
        self.config.round_count = next_id;

        emit!(event);

        msg!(
            "Round {} opened: predicted {}, bets until {}, final at {}",
            round_id,
            predicted_count,
            deadline_ledger,
            finality_ledger
        );

        Ok(round_id)
    }
}
