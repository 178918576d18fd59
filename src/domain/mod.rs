//! Household domain models, persistence-friendly types, and helpers.

pub mod chore;
pub mod meal_plan;
pub mod member;
pub mod recipe;

pub use chore::{AssignedTo, ChoreDraft, ChoreRecord, ChoreUpdate, CompletionEntry, Priority};
pub use meal_plan::{MealPlan, MealPlanDay, MealSlot};
pub use member::Member;
pub use recipe::{IngredientReference, Quantity, Recipe};
