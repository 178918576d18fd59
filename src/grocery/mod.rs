//! Turns a week's meal-plan recipe selections into a deduplicated
//! shopping list.

pub mod aggregate;

pub use aggregate::{aggregate_ingredients, AggregatedIngredient, QuantityMerger};

use crate::domain::{IngredientReference, MealPlan};
use crate::errors::CoreResult;
use crate::storage::{GrocerySink, RecipeStore};

/// Builds the aggregated shopping list for every recipe placed in the
/// plan. Recipe ids the store can no longer resolve are skipped: the
/// plan may still point at recipes deleted since it was saved.
pub fn shopping_list_for_plan<S: RecipeStore>(
    plan: &MealPlan,
    recipes: &S,
) -> CoreResult<Vec<AggregatedIngredient>> {
    let mut references: Vec<IngredientReference> = Vec::new();
    for recipe_id in plan.recipe_ids() {
        match recipes.find_recipe(recipe_id)? {
            Some(recipe) => references.extend(recipe.ingredients),
            None => {
                tracing::warn!(%recipe_id, "meal plan references a missing recipe; skipping");
            }
        }
    }
    Ok(aggregate_ingredients(&references))
}

/// Builds the list and hands it to the external sink, replacing whatever
/// the sink held. Returns the generated list so callers can refresh
/// their own view without re-reading the sink.
pub fn regenerate_grocery_list<S, K>(
    plan: &MealPlan,
    recipes: &S,
    sink: &mut K,
) -> CoreResult<Vec<AggregatedIngredient>>
where
    S: RecipeStore,
    K: GrocerySink,
{
    let items = shopping_list_for_plan(plan, recipes)?;
    sink.replace_all(&items)?;
    tracing::info!(items = items.len(), "grocery list regenerated from meal plan");
    Ok(items)
}
