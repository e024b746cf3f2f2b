use std::collections::BTreeMap;

use anchor_lang::prelude::*;

use crate::read_model::RoundEvent;
use crate::state::{RoundStatus, Side};

/// Materialized view of one round, built only from its events
#[derive(Clone, Debug, PartialEq)]
pub struct RoundView {
    pub round_id: u64,
    pub admin: Pubkey,
    pub predicted_count: u64,
    pub deadline_ledger: u64,
    pub finality_ledger: u64,
    pub status: RoundStatus,
    pub high_pool: u64,
    pub low_pool: u64,
    /// Aggregated stake per (account, side)
    pub stakes: BTreeMap<(Pubkey, Side), u64>,
    /// Sum of all claim payouts
    pub claimed: u64,
    /// Sum of all refunded stakes
    pub refunded: u64,
}

impl RoundView {
    pub fn total_staked(&self) -> Option<u64> {
        self.stakes
            .values()
            .try_fold(0u64, |acc, s| acc.checked_add(*s))
    }

    pub fn disbursed(&self) -> Option<u64> {
        self.claimed.checked_add(self.refunded)
    }

    /// Value collected but not yet paid back out. After every winner has
    /// claimed, this is the floor-division dust. `None` when more was paid
    /// out than staked.
    pub fn outstanding(&self) -> Option<u64> {
        self.total_staked()?.checked_sub(self.disbursed()?)
    }

    pub fn stake(&self, account: &Pubkey, side: Side) -> u64 {
        self.stakes.get(&(*account, side)).copied().unwrap_or(0)
    }
}

/// Round views keyed by round id
#[derive(Clone, Debug, Default)]
pub struct RoundIndex {
    rounds: BTreeMap<u64, RoundView>,
}

impl RoundIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fold a whole log in order
    pub fn from_events<'a, I>(events: I) -> Self
    where
        I: IntoIterator<Item = &'a RoundEvent>,
    {
        let mut index = Self::new();
        for event in events {
            index.apply(event);
        }
        index
    }

    /// Apply one event. Returns `false`, leaving the index untouched, when
    /// the event refers to a round the index has not seen start, restarts a
    /// known one, or would overflow a running total.
    pub fn apply(&mut self, event: &RoundEvent) -> bool {
        if let RoundEvent::Started(e) = event {
            if self.rounds.contains_key(&e.round_id) {
                return false;
            }
            self.rounds.insert(
                e.round_id,
                RoundView {
                    round_id: e.round_id,
                    admin: e.admin,
                    predicted_count: e.predicted_count,
                    deadline_ledger: e.deadline_ledger,
                    finality_ledger: e.finality_ledger,
                    status: RoundStatus::Open,
                    high_pool: 0,
                    low_pool: 0,
                    stakes: BTreeMap::new(),
                    claimed: 0,
                    refunded: 0,
                },
            );
            return true;
        }

        let Some(view) = self.rounds.get_mut(&event.round_id()) else {
            return false;
        };

        match event {
            RoundEvent::Started(_) => return false,
            RoundEvent::BetPlaced(e) => {
                let Some(new_stake) = view.stake(&e.account, e.side).checked_add(e.amount) else {
                    return false;
                };
                let pool = match e.side {
                    Side::Higher => &mut view.high_pool,
                    Side::Lower => &mut view.low_pool,
                };
                let Some(new_pool) = pool.checked_add(e.amount) else {
                    return false;
                };
                *pool = new_pool;
                view.stakes.insert((e.account, e.side), new_stake);
            }
            RoundEvent::Resolved(e) => {
                view.status = RoundStatus::Resolved {
                    actual_count: e.actual_count,
                    winning_side: e.winning_side,
                };
            }
            RoundEvent::Claimed(e) => match view.claimed.checked_add(e.amount) {
                Some(claimed) => view.claimed = claimed,
                None => return false,
            },
            RoundEvent::Refunded(e) => match view.refunded.checked_add(e.amount) {
                Some(refunded) => view.refunded = refunded,
                None => return false,
            },
        }

        true
    }

    pub fn get(&self, round_id: u64) -> Option<&RoundView> {
        self.rounds.get(&round_id)
    }

    pub fn rounds(&self) -> impl Iterator<Item = &RoundView> {
        self.rounds.values()
    }

    /// Rounds still accepting bets at `now`
    pub fn bettable(&self, now: u64) -> impl Iterator<Item = &RoundView> {
        self.rounds
            .values()
            .filter(move |v| v.status == RoundStatus::Open && now < v.deadline_ledger)
    }

    pub fn len(&self) -> usize {
        self.rounds.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rounds.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::events::{BetPlaced, PayoutClaimed, RoundResolved, RoundStarted};

    fn started(round_id: u64, admin: Pubkey) -> RoundEvent {
        RoundStarted {
            round_id,
            admin,
            predicted_count: 5,
            deadline_ledger: 10,
            finality_ledger: 20,
        }
        .into()
    }

    fn bet(round_id: u64, account: Pubkey, side: Side, amount: u64) -> RoundEvent {
        BetPlaced {
            round_id,
            account,
            side,
            amount,
        }
        .into()
    }

    #[test]
    fn test_folds_round_history() {
        let admin = Pubkey::new_unique();
        let alice = Pubkey::new_unique();
        let bob = Pubkey::new_unique();

        let log = vec![
            started(0, admin),
            bet(0, alice, Side::Higher, 100),
            bet(0, bob, Side::Lower, 300),
            bet(0, alice, Side::Higher, 20),
            RoundResolved {
                round_id: 0,
                actual_count: 7,
                winning_side: Side::Higher,
            }
            .into(),
            PayoutClaimed {
                round_id: 0,
                account: alice,
                amount: 420,
            }
            .into(),
        ];
        let index = RoundIndex::from_events(&log);
        let view = index.get(0).unwrap();

        assert_eq!(view.high_pool, 120);
        assert_eq!(view.low_pool, 300);
        assert_eq!(view.stake(&alice, Side::Higher), 120);
        assert_eq!(view.stake(&alice, Side::Lower), 0);
        assert_eq!(view.total_staked(), Some(420));
        assert_eq!(view.outstanding(), Some(0));
        assert_eq!(
            view.status,
            RoundStatus::Resolved {
                actual_count: 7,
                winning_side: Side::Higher
            }
        );
    }

    #[test]
    fn test_rejects_orphan_and_duplicate_starts() {
        let admin = Pubkey::new_unique();
        let mut index = RoundIndex::new();

        assert!(!index.apply(&bet(4, Pubkey::new_unique(), Side::Lower, 1)));
        assert!(index.apply(&started(4, admin)));
        assert!(!index.apply(&started(4, Pubkey::new_unique())));
        assert_eq!(index.len(), 1);
        assert_eq!(index.get(4).unwrap().admin, admin);
    }

    #[test]
    fn test_bettable_filters_closed_and_resolved() {
        let admin = Pubkey::new_unique();
        let mut index = RoundIndex::new();
        index.apply(&started(0, admin));
        index.apply(&started(1, admin));
        index.apply(
            &RoundResolved {
                round_id: 1,
                actual_count: 0,
                winning_side: Side::Lower,
            }
            .into(),
        );

        let ids: Vec<u64> = index.bettable(9).map(|v| v.round_id).collect();
        assert_eq!(ids, vec![0]);
        assert_eq!(index.bettable(10).count(), 0);

        let all: Vec<u64> = index.rounds().map(|v| v.round_id).collect();
        assert_eq!(all, vec![0, 1]);
    }

    #[test]
    fn test_overflowing_event_leaves_view_unchanged() {
        let admin = Pubkey::new_unique();
        let alice = Pubkey::new_unique();
        let bob = Pubkey::new_unique();
        let mut index = RoundIndex::new();
        index.apply(&started(0, admin));
        assert!(index.apply(&bet(0, alice, Side::Higher, u64::MAX - 1)));
        let before = index.get(0).unwrap().clone();

        // pool overflows even though bob's own stake would not
        assert!(!index.apply(&bet(0, bob, Side::Higher, 2)));
        assert!(!index.apply(&bet(0, alice, Side::Higher, 2)));
        assert_eq!(index.get(0).unwrap(), &before);
        assert_eq!(index.get(0).unwrap().stake(&bob, Side::Higher), 0);

        // the other side is independent
        assert!(index.apply(&bet(0, bob, Side::Lower, 2)));
        assert_eq!(index.get(0).unwrap().total_staked(), None);

        let claimed = |amount| -> RoundEvent {
            PayoutClaimed {
                round_id: 0,
                account: alice,
                amount,
            }
            .into()
        };
        assert!(index.apply(&claimed(u64::MAX)));
        assert!(!index.apply(&claimed(1)));
        assert_eq!(index.get(0).unwrap().claimed, u64::MAX);
    }
}
