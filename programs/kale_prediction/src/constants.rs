/// Ledgers after `finality_ledger` before an unresolved round becomes refundable.
pub const GRACE_LEDGERS: u64 = 100;

pub const SEED_CONFIG: &[u8] = b"config";
pub const SEED_ROUND: &[u8] = b"round";
pub const SEED_BET: &[u8] = b"bet";
