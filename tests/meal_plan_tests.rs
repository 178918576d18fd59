mod common;

use chrono::NaiveDate;
use household_core::domain::{IngredientReference, MealPlan, MealSlot, Quantity, Recipe};
use household_core::grocery::{regenerate_grocery_list, shopping_list_for_plan};
use household_core::storage::MemoryStore;
use uuid::Uuid;

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn seeded_store() -> (MemoryStore, Uuid, Uuid) {
    let mut store = common::family_store();
    let omelette = store.add_recipe(Recipe::new("Omelette").with_ingredients(vec![
        IngredientReference::new("Egg").with_quantity(3.0),
        IngredientReference::new("Butter").with_quantity("a knob"),
    ]));
    let pancakes = store.add_recipe(Recipe::new("Pancakes").with_ingredients(vec![
        IngredientReference::new("egg").with_quantity(2.0),
        IngredientReference::new("Flour").with_quantity("200"),
        IngredientReference::new("Milk").with_quantity("1 carton"),
    ]));
    (store, omelette, pancakes)
}

#[test]
fn shopping_list_spans_every_placed_recipe() {
    let (store, omelette, pancakes) = seeded_store();
    let mut plan = MealPlan::for_week(date(2025, 11, 24));
    plan.set_recipe(0, MealSlot::Breakfast, Some(omelette));
    plan.set_recipe(2, MealSlot::Breakfast, Some(pancakes));

    let list = shopping_list_for_plan(&plan, &store).unwrap();
    let names: Vec<&str> = list.iter().map(|item| item.name.as_str()).collect();
    assert_eq!(names, vec!["Butter", "Egg", "Flour", "Milk"]);

    let egg = list.iter().find(|item| item.name == "Egg").unwrap();
    assert_eq!(egg.quantity, Some(Quantity::Count(5.0)));
}

#[test]
fn repeated_recipe_buys_its_ingredients_twice() {
    let (store, omelette, _) = seeded_store();
    let mut plan = MealPlan::for_week(date(2025, 11, 24));
    plan.set_recipe(0, MealSlot::Breakfast, Some(omelette));
    plan.set_recipe(4, MealSlot::Dinner, Some(omelette));

    let list = shopping_list_for_plan(&plan, &store).unwrap();
    let egg = list.iter().find(|item| item.name == "Egg").unwrap();
    assert_eq!(egg.quantity, Some(Quantity::Count(6.0)));
    let butter = list.iter().find(|item| item.name == "Butter").unwrap();
    assert_eq!(butter.quantity, Some(Quantity::from("a knob, a knob")));
}

#[test]
fn stale_recipe_ids_are_skipped() {
    let (store, omelette, _) = seeded_store();
    let mut plan = MealPlan::for_week(date(2025, 11, 24));
    plan.set_recipe(0, MealSlot::Lunch, Some(omelette));
    plan.set_recipe(1, MealSlot::Lunch, Some(Uuid::new_v4()));

    let list = shopping_list_for_plan(&plan, &store).unwrap();
    assert_eq!(list.len(), 2, "only the resolvable recipe contributes");
}

#[test]
fn empty_plan_produces_empty_list() {
    let (store, _, _) = seeded_store();
    let plan = MealPlan::for_week(date(2025, 11, 24));
    let list = shopping_list_for_plan(&plan, &store).unwrap();
    assert!(list.is_empty());
}

#[test]
fn regenerate_replaces_the_sink_contents() {
    let (store, omelette, pancakes) = seeded_store();
    let mut sink = MemoryStore::new();

    let mut plan = MealPlan::for_week(date(2025, 11, 24));
    plan.set_recipe(0, MealSlot::Breakfast, Some(omelette));
    let first = regenerate_grocery_list(&plan, &store, &mut sink).unwrap();
    assert_eq!(sink.grocery_items(), first.as_slice());

    plan.clear_slots();
    plan.set_recipe(1, MealSlot::Breakfast, Some(pancakes));
    let second = regenerate_grocery_list(&plan, &store, &mut sink).unwrap();
    assert_eq!(sink.grocery_items(), second.as_slice());
    assert!(sink.grocery_items().iter().all(|item| item.name != "Butter"));
}
