//! # Kale Prediction: Over/Under Rounds on Invocation Counts
//!
//! A round-based binary prediction market. An admin opens a round with a
//! predicted invocation count for some external contract; bettors stake on
//! whether the final count lands above it (HIGHER) or at or below it (LOWER).
//!
//! ## How it works
//! - Bets are accepted until the round's deadline ledger.
//! - From the finality ledger on, the round's admin records the actual count.
//! - Winners split the losing pool pro-rata to their stake.
//! - If the admin never resolves, stakes become refundable a fixed grace
//!   window after finality.
//!
//! The program computes and records what each account is owed and emits one
//! event per state change; moving tokens is left to the surrounding ledger.

use anchor_lang::prelude::*;

pub mod constants;
pub mod engine;
pub mod errors;
pub mod events;
pub mod instructions;
pub mod read_model;
pub mod state;

pub use instructions::*;
pub use state::Side;


// Replace with your deployed program ID
declare_id!("48za85EjfnsYMeiVLdMq45pYwZBbkSgAAdgTaAi5fdR1");

/// Main Kale Prediction program
#[program]
pub mod kale_prediction {
    use super::*;

    /// Initialize the round counter
    pub fn initialize(ctx: Context<Initialize>) -> Result<()> {
        ctx.accounts.initialize(&ctx.bumps)
    }

    /// Open a new round; the signer becomes its admin
    pub fn start_round(
        ctx: Context<StartRound>,
        predicted_count: u64,
        deadline_ledger: u64,
        finality_ledger: u64,
    ) -> Result<u64> {
        ctx.accounts
            .start_round(predicted_count, deadline_ledger, finality_ledger, &ctx.bumps)
    }

    /// Stake on one side of an open round
    pub fn place_bet(ctx: Context<PlaceBet>, round_id: u64, side: Side, amount: u64) -> Result<()> {
        ctx.accounts.place_bet(round_id, side, amount, &ctx.bumps)
    }

    /// Resolve the round (round admin only)
    pub fn resolve_round(
        ctx: Context<ResolveRound>,
        _round_id: u64,
        actual_count: u64,
    ) -> Result<Side> {
        ctx.accounts.resolve_round(actual_count)
    }

    /// Claim the payout of a winning stake
    pub fn claim(ctx: Context<Claim>, _round_id: u64, _side: Side) -> Result<u64> {
        ctx.accounts.claim()
    }

    /// Recover a stake from a round that was never resolved
    pub fn refund(ctx: Context<Refund>, _round_id: u64, _side: Side) -> Result<u64> {
        ctx.accounts.refund()
    }
}
