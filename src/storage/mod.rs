//! Collaborator contracts and the storage backends the core ships with.
//!
//! The ledger and aggregator never perform I/O of their own; everything
//! flows through these traits. Per-record atomicity (two concurrent
//! mutations of the same chore must not lose an entry) is the
//! implementor's responsibility.

pub mod json_backend;
pub mod memory;

use uuid::Uuid;

use crate::domain::{ChoreRecord, Member, Recipe};
use crate::errors::CoreResult;
use crate::grocery::AggregatedIngredient;

/// Persistence contract for chore records.
pub trait ChoreStore {
    fn find_by_id(&self, id: Uuid) -> CoreResult<Option<ChoreRecord>>;
    fn find_all(&self) -> CoreResult<Vec<ChoreRecord>>;
    fn save(&mut self, record: ChoreRecord) -> CoreResult<ChoreRecord>;
    fn delete(&mut self, id: Uuid) -> CoreResult<Option<ChoreRecord>>;
}

/// Read-side contract for recipes feeding the aggregator.
pub trait RecipeStore {
    fn find_recipe(&self, id: Uuid) -> CoreResult<Option<Recipe>>;
}

/// Source of valid attribution targets for member totals.
pub trait MemberRegistry {
    fn list_members(&self) -> CoreResult<Vec<Member>>;
}

/// External shopping list that a generated aggregate replaces wholesale.
pub trait GrocerySink {
    fn replace_all(&mut self, items: &[AggregatedIngredient]) -> CoreResult<()>;
}

pub use json_backend::{HouseholdSnapshot, JsonHouseholdStorage, SNAPSHOT_SCHEMA_VERSION};
pub use memory::MemoryStore;
