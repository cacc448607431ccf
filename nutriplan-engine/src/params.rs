//! Tunable model constants. The contracts that hold regardless of the
//! exact values: activity multipliers strictly increase, goal targets
//! order as gain > maintain > lose, macro shares plus the carb remainder
//! reproduce the calorie total, and steps increase with activity.

use nutriplan_model::plan::MealSlot;

/// TDEE multipliers for activity levels 1 through 5.
pub const ACTIVITY_MULTIPLIERS: [f64; 5] = [1.2, 1.375, 1.55, 1.725, 1.9];

/// Calorie deficit applied for a `lose` goal, floored at BMR.
pub const LOSE_DEFICIT_KCAL: f64 = 500.0;

/// Calorie surplus applied for a `gain` goal.
pub const GAIN_SURPLUS_KCAL: f64 = 500.0;

/// Share of daily calories assigned to protein and fat; carbohydrates
/// take the remainder.
pub const PROTEIN_CALORIE_SHARE: f64 = 0.30;
pub const FAT_CALORIE_SHARE: f64 = 0.25;

pub const KCAL_PER_G_PROTEIN: f64 = 4.0;
pub const KCAL_PER_G_FAT: f64 = 9.0;
pub const KCAL_PER_G_CARBS: f64 = 4.0;

/// Daily water intake in liters per kilogram of body weight.
pub const WATER_LITERS_PER_KG: f64 = 0.033;

/// Daily step goals for activity levels 1 through 5.
pub const STEPS_BY_LEVEL: [u32; 5] = [5000, 7000, 10000, 12000, 15000];

/// Extra steps asked of users on a `lose` goal.
pub const LOSE_STEPS_BONUS: u32 = 2000;

/// Share of daily calories assigned to each meal slot. Sums to 1.0.
pub const SLOT_CALORIE_SHARES: [(MealSlot, f64); 5] = [
    (MealSlot::Breakfast, 0.25),
    (MealSlot::MidMorning, 0.10),
    (MealSlot::Lunch, 0.30),
    (MealSlot::Snack, 0.10),
    (MealSlot::Dinner, 0.25),
];

/// How far above its calorie share a slot may go during composition.
pub const SLOT_KCAL_TOLERANCE: f64 = 0.10;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn activity_multipliers_strictly_increase() {
        for pair in ACTIVITY_MULTIPLIERS.windows(2) {
            assert!(pair[0] < pair[1]);
        }
    }

    #[test]
    fn step_goals_increase_with_activity() {
        for pair in STEPS_BY_LEVEL.windows(2) {
            assert!(pair[0] < pair[1]);
        }
    }

    #[test]
    fn slot_shares_sum_to_one() {
        let total: f64 = SLOT_CALORIE_SHARES.iter().map(|(_, share)| share).sum();
        assert!((total - 1.0).abs() < 1e-9);
    }
}
