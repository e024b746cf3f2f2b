//! State structures for the prediction round protocol

pub mod bet;
pub mod config;
pub mod round;

pub use bet::*;
pub use config::*;
pub use round::*;

use anchor_lang::prelude::*;

use crate::errors::PredictionError;

/// Deserialize a program-owned account, reporting `missing` when the
/// address holds nothing created by this program.
pub(crate) fn load_account<T>(info: &AccountInfo, missing: PredictionError) -> Result<T>
where
    T: AccountDeserialize + Owner,
{
    if info.owner != &T::owner() || info.data_is_empty() {
        return Err(missing.into());
    }
    let data = info.try_borrow_data()?;
    T::try_deserialize(&mut &data[..])
}

/// Write an account loaded with [`load_account`] back in place
pub(crate) fn store_account<T>(info: &AccountInfo, value: &T) -> Result<()>
where
    T: AccountSerialize,
{
    let mut data = info.try_borrow_mut_data()?;
    let mut writer: &mut [u8] = &mut data[..];
    value.try_serialize(&mut writer)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::RoundLifecycle;

    #[test]
    fn test_store_then_load_round() {
        let key = Pubkey::new_unique();
        let owner = crate::ID;
        let mut lamports = 1_000_000;
        let mut data = vec![0u8; 8 + Round::INIT_SPACE];
        let info = AccountInfo::new(&key, false, true, &mut lamports, &mut data, &owner, false, 0);

        let (mut round, _) =
            RoundLifecycle::start(3, Pubkey::new_unique(), 5, 10, 20, 0, 254).unwrap();
        store_account(&info, &round).unwrap();
        let loaded: Round = load_account(&info, PredictionError::RoundNotFound).unwrap();
        assert_eq!(loaded, round);

        // the resolved variant carries a payload and must still fit
        round.high_pool = 100;
        round.low_pool = 300;
        round.status = RoundStatus::Resolved {
            actual_count: 7,
            winning_side: Side::Higher,
        };
        store_account(&info, &round).unwrap();
        let loaded: Round = load_account(&info, PredictionError::RoundNotFound).unwrap();
        assert_eq!(loaded, round);
        assert_eq!(loaded.winning_side(), Some(Side::Higher));

        // a round is not a bet
        assert!(load_account::<Bet>(&info, PredictionError::NothingToClaim).is_err());
    }

    #[test]
    fn test_missing_account_reports_given_error() {
        let key = Pubkey::new_unique();
        let system = anchor_lang::system_program::ID;
        let mut lamports = 0;
        let mut empty: [u8; 0] = [];
        let info = AccountInfo::new(&key, false, true, &mut lamports, &mut empty, &system, false, 0);

        assert_eq!(
            load_account::<Round>(&info, PredictionError::RoundNotFound).unwrap_err(),
            error!(PredictionError::RoundNotFound)
        );
        assert_eq!(
            load_account::<Bet>(&info, PredictionError::NothingToClaim).unwrap_err(),
            error!(PredictionError::NothingToClaim)
        );
    }

    #[test]
    fn test_foreign_owner_is_missing() {
        let key = Pubkey::new_unique();
        let owner = crate::ID;
        let foreign = Pubkey::new_unique();
        let mut lamports = 1_000_000;
        let mut data = vec![0u8; 8 + Bet::INIT_SPACE];

        {
            let info =
                AccountInfo::new(&key, false, true, &mut lamports, &mut data, &owner, false, 0);
            let bet = Bet::empty(0, Pubkey::new_unique(), Side::Lower, 250);
            store_account(&info, &bet).unwrap();
        }

        let info = AccountInfo::new(&key, false, true, &mut lamports, &mut data, &foreign, false, 0);
        assert_eq!(
            load_account::<Bet>(&info, PredictionError::NothingToClaim).unwrap_err(),
            error!(PredictionError::NothingToClaim)
        );
    }
}
