use anchor_lang::prelude::*;

#[error_code]
pub enum PredictionError {
    #[msg("Caller is not the admin of this round")]
    Unauthorized,
    #[msg("Round does not exist")]
    RoundNotFound,
    #[msg("Deadline must precede finality and both must be in the future")]
    InvalidSchedule,
    #[msg("Bet amount must be greater than zero")]
    InvalidAmount,
    #[msg("Betting is closed for this round")]
    BettingClosed,
    #[msg("Round has already been resolved")]
    AlreadyResolved,
    #[msg("Round cannot be resolved before its finality ledger")]
    NotYetFinal,
    #[msg("Nothing to claim for this bet")]
    NothingToClaim,
    #[msg("Bet has already been claimed or refunded")]
    AlreadyClaimed,
    #[msg("Refund is not available for this round")]
    RefundNotEligible,
    #[msg("Arithmetic overflow")]
    ArithmeticOverflow,
    #[msg("Round has not been resolved yet")]
    NotResolved,
}
