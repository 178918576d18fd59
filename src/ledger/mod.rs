//! Chore reward ledger: completion history, payment status, and member
//! payout projections.

pub mod rewards;

pub use rewards::RewardLedger;
