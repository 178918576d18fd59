use std::collections::BTreeMap;

use uuid::Uuid;

use crate::domain::{ChoreDraft, ChoreRecord, ChoreUpdate, Member};
use crate::errors::{CoreError, CoreResult};
use crate::storage::ChoreStore;

/// Stateless service over an injected [`ChoreStore`]. Each operation is
/// a read-modify-write of one chore record (`pay_member` walks a small
/// working set); per-record atomicity against concurrent mutation is the
/// store's job, and nothing here retries.
pub struct RewardLedger;

impl RewardLedger {
    /// Validates the draft and persists a fresh chore record.
    pub fn create_chore<S: ChoreStore>(store: &mut S, draft: ChoreDraft) -> CoreResult<ChoreRecord> {
        let chore = ChoreRecord::from_draft(draft)?;
        let saved = store.save(chore)?;
        tracing::debug!(chore_id = %saved.id, title = %saved.title, "chore created");
        Ok(saved)
    }

    /// Applies a partial update. Validation happens before the store is
    /// touched, so a bad patch has no partial effect.
    pub fn update_chore<S: ChoreStore>(
        store: &mut S,
        id: Uuid,
        update: ChoreUpdate,
    ) -> CoreResult<ChoreRecord> {
        let mut chore = Self::require(store, id)?;
        update.apply(&mut chore)?;
        store.save(chore)
    }

    /// Removes the chore outright. Outstanding unpaid completions go
    /// with it; collaborators own any cross-references.
    pub fn delete_chore<S: ChoreStore>(store: &mut S, id: Uuid) -> CoreResult<ChoreRecord> {
        store
            .delete(id)?
            .ok_or_else(|| CoreError::not_found(format!("chore {id}")))
    }

    /// Appends a completion entry stamped now, attributed to `member_id`
    /// when given. Reward fields are left alone.
    pub fn record_completion<S: ChoreStore>(
        store: &mut S,
        id: Uuid,
        member_id: Option<&str>,
    ) -> CoreResult<ChoreRecord> {
        let mut chore = Self::require(store, id)?;
        chore.record_completion(member_id.map(str::to_string));
        let saved = store.save(chore)?;
        tracing::debug!(chore_id = %id, member = member_id.unwrap_or("-"), "completion recorded");
        Ok(saved)
    }

    /// Marks every completion entry of the chore as paid. Idempotent:
    /// re-running flips nothing and is not an error.
    pub fn mark_chore_paid<S: ChoreStore>(store: &mut S, id: Uuid) -> CoreResult<ChoreRecord> {
        let mut chore = Self::require(store, id)?;
        let flipped = chore.mark_all_paid();
        if flipped == 0 {
            return Ok(chore);
        }
        let saved = store.save(chore)?;
        tracing::info!(chore_id = %id, entries = flipped, "chore paid out");
        Ok(saved)
    }

    /// Flips every unpaid entry of `member_id` across all chores, saving
    /// record by record, and returns the full refreshed list.
    ///
    /// No cross-record atomicity: if a save fails mid-batch the earlier
    /// records stay paid, and re-running only touches what is still
    /// unpaid, so retrying the whole call is safe.
    pub fn pay_member<S: ChoreStore>(store: &mut S, member_id: &str) -> CoreResult<Vec<ChoreRecord>> {
        let member_id = member_id.trim();
        if member_id.is_empty() {
            return Err(CoreError::validation("memberId is required"));
        }

        let mut flipped_total = 0;
        for mut chore in store.find_all()? {
            if !chore.has_unpaid_for(member_id) {
                continue;
            }
            flipped_total += chore.pay_member(member_id);
            store.save(chore)?;
        }
        if flipped_total > 0 {
            tracing::info!(member = member_id, entries = flipped_total, "member paid out");
        }
        store.find_all()
    }

    /// Outstanding (unpaid) reward per known member id over the given
    /// snapshot. Every known member appears in the map, so a settled
    /// member reads as an explicit zero. Entries without a member id, or
    /// attributed to an unknown id, count for no one. Pure projection.
    pub fn member_totals(chores: &[ChoreRecord], members: &[Member]) -> BTreeMap<String, f64> {
        Self::totals(chores, members, false)
    }

    /// Lifetime-earnings counterpart: reward already paid per member.
    pub fn settled_totals(chores: &[ChoreRecord], members: &[Member]) -> BTreeMap<String, f64> {
        Self::totals(chores, members, true)
    }

    fn totals(chores: &[ChoreRecord], members: &[Member], paid: bool) -> BTreeMap<String, f64> {
        let mut totals: BTreeMap<String, f64> = members
            .iter()
            .map(|member| (member.id.clone(), 0.0))
            .collect();
        for chore in chores {
            // Zero-reward chores contribute nothing even with history.
            if chore.reward_amount == 0.0 {
                continue;
            }
            for entry in chore.completions.iter().filter(|entry| entry.paid == paid) {
                let Some(member_id) = entry.member_id.as_deref() else {
                    continue;
                };
                // Unknown ids count for no one.
                if let Some(total) = totals.get_mut(member_id) {
                    *total += chore.reward_amount;
                }
            }
        }
        totals
    }

    fn require<S: ChoreStore>(store: &S, id: Uuid) -> CoreResult<ChoreRecord> {
        store
            .find_by_id(id)?
            .ok_or_else(|| CoreError::not_found(format!("chore {id}")))
    }
}
