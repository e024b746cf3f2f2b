//! Staking
//!
//! Bettors stake on HIGHER or LOWER while the round is open and before its
//! deadline. Repeated stakes on the same side aggregate into one entry; an
//! account may also hold an independent entry on the other side.

use anchor_lang::prelude::*;

use crate::engine::{ledger_now, RoundLifecycle};
use crate::errors::PredictionError;
use crate::state::{load_account, store_account, Bet, Round, Side};

#[derive(Accounts)]
#[instruction(round_id: u64, side: Side)]
pub struct PlaceBet<'info> {
    #[account(mut)]
    pub bettor: Signer<'info>,

    /// CHECK: PDA-validated here, deserialized in the handler so that a
    /// missing round reports `RoundNotFound`
    #[account(
        mut,
        seeds = [Round::SEED, round_id.to_le_bytes().as_ref()],
        bump,
    )]
    pub round: UncheckedAccount<'info>,

    #[account(
        init_if_needed,
        payer = bettor,
        space = 8 + Bet::INIT_SPACE,
        seeds = [
            Bet::SEED,
            round_id.to_le_bytes().as_ref(),
            bettor.key().as_ref(),
            side.to_seed().as_ref(),
        ],
        bump,
    )]
    pub bet: Account<'info, Bet>,

    pub system_program: Program<'info, System>,
}

impl<'info> PlaceBet<'info> {
    pub fn place_bet(
        &mut self,
        round_id: u64,
        side: Side,
        amount: u64,
        bumps: &PlaceBetBumps,
    ) -> Result<()> {
        let now = ledger_now()?;
        let mut round: Round = load_account(&self.round, PredictionError::RoundNotFound)?;

        // a zero stake only exists on an entry created by this instruction
        if self.bet.amount == 0 {
            self.bet
                .set_inner(Bet::empty(round_id, self.bettor.key(), side, bumps.bet));
        }

        let event = RoundLifecycle::place_bet(&mut round, &mut self.bet, now, amount)?;
        store_account(&self.round, &round)?;

        emit!(event);

        Ok(())
    }
}
