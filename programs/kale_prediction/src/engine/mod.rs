//! # Settlement Engine
//!
//! Host-independent rules for a prediction round. Every function here takes
//! the current ledger time as an argument and works on plain `Round` / `Bet`
//! values, so the same rules back the instruction handlers and the tests.
//!
//! ```text
//!            start                bet*                 resolve
//!   ───────────●──────────────────────────┤deadline   ├finality──●────▶ claim
//!                                                      │
//!                                                      └─ +GRACE, still Open ─▶ refund
//! ```
//!
//! Each operation validates every precondition before its first write, so a
//! rejected call leaves both the round and the bet untouched.

pub mod gate;
pub mod lifecycle;
pub mod refund;
pub mod settlement;

pub use gate::*;
pub use lifecycle::*;
pub use refund::*;
pub use settlement::*;

use anchor_lang::prelude::*;

/// Current ledger time: the cluster slot
pub fn ledger_now() -> Result<u64> {
    Ok(Clock::get()?.slot)
}
