//! Protocol Initialization
//!
//! Creates the global configuration that allocates round identifiers.
//! Called once during deployment; a second call fails because the config
//! account already exists.

use anchor_lang::prelude::*;

use crate::events::ProtocolInitialized;
use crate::state::Config;

/// Accounts required for protocol initialization
#[derive(Accounts)]
pub struct Initialize<'info> {
    /// Pays for the config account
    #[account(mut)]
    pub payer: Signer<'info>,

    /// Global configuration account (created)
    #[account(
        init,
        payer = payer,
        space = 8 + Config::INIT_SPACE,
        seeds = [Config::SEED],
        bump,
    )]
    pub config: Account<'info, Config>,

    /// System program
    pub system_program: Program<'info, System>,
}

impl<'info> Initialize<'info> {
    /// Initialize the protocol configuration
    pub fn initialize(&mut self, bumps: &InitializeBumps) -> Result<()> {
        self.config.set_inner(Config {
            round_count: 0,
            bump: bumps.config,
        });

        emit!(ProtocolInitialized {
            config: self.config.key(),
        });

        msg!("Protocol initialized!");
        msg!("Payer: {}", self.payer.key());

        Ok(())
    }
}
