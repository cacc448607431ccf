use crate::plan::MealSlot;
use crate::profile::Goal;

/// One catalog entry: macro content of a single serving.
///
/// Empty `goals` or `slots` means the item suits every goal or slot;
/// non-empty lists restrict where the composer may use it.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FoodItem {
    pub name: String,
    pub kcal: f64,
    pub protein_g: f64,
    pub fat_g: f64,
    pub carbs_g: f64,
    #[cfg_attr(feature = "serde", serde(default))]
    pub goals: Vec<Goal>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub slots: Vec<MealSlot>,
}

impl FoodItem {
    pub fn suits_goal(&self, goal: Goal) -> bool {
        self.goals.is_empty() || self.goals.contains(&goal)
    }

    pub fn suits_slot(&self, slot: MealSlot) -> bool {
        self.slots.is_empty() || self.slots.contains(&slot)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(goals: Vec<Goal>, slots: Vec<MealSlot>) -> FoodItem {
        FoodItem {
            name: "Banana".to_string(),
            kcal: 105.0,
            protein_g: 1.3,
            fat_g: 0.4,
            carbs_g: 27.0,
            goals,
            slots,
        }
    }

    #[test]
    fn untagged_items_suit_everything() {
        let item = item(vec![], vec![]);
        assert!(item.suits_goal(Goal::Lose));
        assert!(item.suits_goal(Goal::Gain));
        assert!(item.suits_slot(MealSlot::Breakfast));
        assert!(item.suits_slot(MealSlot::Dinner));
    }

    #[test]
    fn tagged_items_are_restricted() {
        let item = item(vec![Goal::Gain], vec![MealSlot::Breakfast]);
        assert!(item.suits_goal(Goal::Gain));
        assert!(!item.suits_goal(Goal::Lose));
        assert!(item.suits_slot(MealSlot::Breakfast));
        assert!(!item.suits_slot(MealSlot::Lunch));
    }
}
