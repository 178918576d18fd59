use uuid::Uuid;

use crate::domain::{ChoreRecord, Member, Recipe};
use crate::errors::CoreResult;
use crate::grocery::AggregatedIngredient;
use crate::storage::{
    ChoreStore, GrocerySink, HouseholdSnapshot, MemberRegistry, RecipeStore,
};

/// In-process store implementing every collaborator contract. Used as
/// the reference collaborator in tests and by embedders that persist a
/// [`HouseholdSnapshot`] themselves.
#[derive(Debug, Default, Clone)]
pub struct MemoryStore {
    chores: Vec<ChoreRecord>,
    members: Vec<Member>,
    recipes: Vec<Recipe>,
    grocery: Vec<AggregatedIngredient>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_snapshot(snapshot: HouseholdSnapshot) -> Self {
        Self {
            chores: snapshot.chores,
            members: snapshot.members,
            recipes: snapshot.recipes,
            grocery: snapshot.grocery,
        }
    }

    pub fn snapshot(&self) -> HouseholdSnapshot {
        HouseholdSnapshot {
            schema_version: HouseholdSnapshot::schema_version_default(),
            chores: self.chores.clone(),
            members: self.members.clone(),
            recipes: self.recipes.clone(),
            grocery: self.grocery.clone(),
        }
    }

    pub fn add_member(&mut self, member: Member) {
        self.members.push(member);
    }

    pub fn add_recipe(&mut self, recipe: Recipe) -> Uuid {
        let id = recipe.id;
        self.recipes.push(recipe);
        id
    }

    pub fn grocery_items(&self) -> &[AggregatedIngredient] {
        &self.grocery
    }
}

impl ChoreStore for MemoryStore {
    fn find_by_id(&self, id: Uuid) -> CoreResult<Option<ChoreRecord>> {
        Ok(self.chores.iter().find(|chore| chore.id == id).cloned())
    }

    fn find_all(&self) -> CoreResult<Vec<ChoreRecord>> {
        Ok(self.chores.clone())
    }

    fn save(&mut self, record: ChoreRecord) -> CoreResult<ChoreRecord> {
        match self.chores.iter_mut().find(|chore| chore.id == record.id) {
            Some(existing) => *existing = record.clone(),
            None => self.chores.push(record.clone()),
        }
        Ok(record)
    }

    fn delete(&mut self, id: Uuid) -> CoreResult<Option<ChoreRecord>> {
        let index = self.chores.iter().position(|chore| chore.id == id);
        Ok(index.map(|index| self.chores.remove(index)))
    }
}

impl RecipeStore for MemoryStore {
    fn find_recipe(&self, id: Uuid) -> CoreResult<Option<Recipe>> {
        Ok(self.recipes.iter().find(|recipe| recipe.id == id).cloned())
    }
}

impl MemberRegistry for MemoryStore {
    fn list_members(&self) -> CoreResult<Vec<Member>> {
        Ok(self.members.clone())
    }
}

impl GrocerySink for MemoryStore {
    fn replace_all(&mut self, items: &[AggregatedIngredient]) -> CoreResult<()> {
        self.grocery = items.to_vec();
        Ok(())
    }
}
