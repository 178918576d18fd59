use chrono::{Datelike, Duration, NaiveDate, Weekday};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

pub const DAYS_PER_WEEK: usize = 7;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum MealSlot {
    Breakfast,
    Lunch,
    Dinner,
}

impl MealSlot {
    pub const ALL: [MealSlot; 3] = [MealSlot::Breakfast, MealSlot::Lunch, MealSlot::Dinner];
}

/// One calendar day of the plan; each slot holds the id of the recipe
/// placed there, or `None` when empty.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct MealPlanDay {
    pub date: NaiveDate,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub breakfast: Option<Uuid>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lunch: Option<Uuid>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dinner: Option<Uuid>,
}

impl MealPlanDay {
    fn empty(date: NaiveDate) -> Self {
        Self {
            date,
            breakfast: None,
            lunch: None,
            dinner: None,
        }
    }

    pub fn slot(&self, slot: MealSlot) -> Option<Uuid> {
        match slot {
            MealSlot::Breakfast => self.breakfast,
            MealSlot::Lunch => self.lunch,
            MealSlot::Dinner => self.dinner,
        }
    }

    pub fn slot_mut(&mut self, slot: MealSlot) -> &mut Option<Uuid> {
        match slot {
            MealSlot::Breakfast => &mut self.breakfast,
            MealSlot::Lunch => &mut self.lunch,
            MealSlot::Dinner => &mut self.dinner,
        }
    }
}

/// A Monday-anchored week of meal selections. The plan only stores
/// recipe ids; resolving them is the recipe store's job.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct MealPlan {
    pub week_start: NaiveDate,
    pub days: Vec<MealPlanDay>,
}

impl MealPlan {
    /// Builds an empty plan for the week containing `date`.
    ///
    /// Monday through Saturday belong to their own week; Sunday is
    /// treated as the start of the upcoming week and rolls forward.
    pub fn for_week(date: NaiveDate) -> Self {
        let monday = week_anchor(date);
        let days = (0..DAYS_PER_WEEK as i64)
            .map(|offset| MealPlanDay::empty(monday + Duration::days(offset)))
            .collect();
        Self {
            week_start: monday,
            days,
        }
    }

    /// Places (or clears, with `None`) a recipe in one day/slot.
    /// Out-of-range day indexes are ignored.
    pub fn set_recipe(&mut self, day_index: usize, slot: MealSlot, recipe_id: Option<Uuid>) {
        if let Some(day) = self.days.get_mut(day_index) {
            *day.slot_mut(slot) = recipe_id;
        }
    }

    /// Empties every slot while keeping the same week range.
    pub fn clear_slots(&mut self) {
        let week_start = self.week_start;
        *self = Self::for_week(week_start);
    }

    /// Every placed recipe id in day-then-slot order. Duplicates are
    /// preserved: a recipe cooked twice buys its ingredients twice.
    pub fn recipe_ids(&self) -> Vec<Uuid> {
        self.days
            .iter()
            .flat_map(|day| MealSlot::ALL.iter().filter_map(|slot| day.slot(*slot)))
            .collect()
    }

    pub fn is_empty(&self) -> bool {
        self.days
            .iter()
            .all(|day| MealSlot::ALL.iter().all(|slot| day.slot(*slot).is_none()))
    }
}

/// Monday of the week owning `date`, with Sunday rolling forward to the
/// next Monday.
pub fn week_anchor(date: NaiveDate) -> NaiveDate {
    if date.weekday() == Weekday::Sun {
        date + Duration::days(1)
    } else {
        date - Duration::days(date.weekday().num_days_from_monday() as i64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn week_anchor_snaps_back_to_monday() {
        // 2025-11-26 is a Wednesday.
        assert_eq!(week_anchor(date(2025, 11, 26)), date(2025, 11, 24));
        assert_eq!(week_anchor(date(2025, 11, 24)), date(2025, 11, 24));
    }

    #[test]
    fn sunday_belongs_to_the_upcoming_week() {
        // 2025-11-30 is a Sunday.
        assert_eq!(week_anchor(date(2025, 11, 30)), date(2025, 12, 1));
    }

    #[test]
    fn plan_spans_seven_consecutive_days() {
        let plan = MealPlan::for_week(date(2025, 11, 26));
        assert_eq!(plan.days.len(), DAYS_PER_WEEK);
        assert_eq!(plan.days[0].date, date(2025, 11, 24));
        assert_eq!(plan.days[6].date, date(2025, 11, 30));
        assert!(plan.is_empty());
    }

    #[test]
    fn recipe_ids_follow_day_then_slot_order_and_keep_duplicates() {
        let mut plan = MealPlan::for_week(date(2025, 11, 24));
        let soup = Uuid::new_v4();
        let eggs = Uuid::new_v4();
        plan.set_recipe(0, MealSlot::Dinner, Some(soup));
        plan.set_recipe(1, MealSlot::Breakfast, Some(eggs));
        plan.set_recipe(3, MealSlot::Lunch, Some(soup));
        assert_eq!(plan.recipe_ids(), vec![soup, eggs, soup]);
    }

    #[test]
    fn clear_slots_keeps_week_range() {
        let mut plan = MealPlan::for_week(date(2025, 11, 24));
        plan.set_recipe(2, MealSlot::Lunch, Some(Uuid::new_v4()));
        plan.clear_slots();
        assert_eq!(plan.week_start, date(2025, 11, 24));
        assert!(plan.is_empty());
    }
}
