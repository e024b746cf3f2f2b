use anchor_lang::prelude::*;

use crate::errors::PredictionError;
use crate::state::Round;

/// Per-round capability check against the admin stored at creation
pub struct AdminGate;

impl AdminGate {
    pub fn authorize(round: &Round, caller: &Pubkey) -> Result<()> {
        require_keys_eq!(*caller, round.admin, PredictionError::Unauthorized);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::RoundLifecycle;

    #[test]
    fn test_only_stored_admin_passes() {
        let admin = Pubkey::new_unique();
        let (round, _) = RoundLifecycle::start(0, admin, 5, 10, 20, 0, 255).unwrap();

        assert!(AdminGate::authorize(&round, &admin).is_ok());
        assert_eq!(
            AdminGate::authorize(&round, &Pubkey::new_unique()).unwrap_err(),
            error!(PredictionError::Unauthorized)
        );
    }
}
