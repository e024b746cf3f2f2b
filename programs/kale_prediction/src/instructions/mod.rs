//! Instruction handlers for the prediction round protocol
//!
//! Each instruction represents an action users can take:
//! - `initialize` - Set up the round counter (once)
//! - `start_round` - Open a new round (permissionless, caller becomes admin)
//! - `place_bet` - Stake on HIGHER or LOWER before the deadline
//! - `resolve` - Record the actual count (round admin only)
//! - `claim` - Collect a winning payout after resolution
//! - `refund` - Recover a stake from a round that was never resolved

pub mod claim;
pub mod initialize;
pub mod place_bet;
pub mod refund;
pub mod round;

pub use claim::*;
pub use initialize::*;
pub use place_bet::*;
pub use refund::*;
pub use round::*;
