use nutriplan_model::profile::{ActivityLevel, Goal, UserProfile};

use crate::energy::{bmr, tdee};
use crate::params::{
    FAT_CALORIE_SHARE, GAIN_SURPLUS_KCAL, KCAL_PER_G_CARBS, KCAL_PER_G_FAT, KCAL_PER_G_PROTEIN,
    LOSE_DEFICIT_KCAL, LOSE_STEPS_BONUS, PROTEIN_CALORIE_SHARE, STEPS_BY_LEVEL,
    WATER_LITERS_PER_KG,
};

/// Daily calorie and macro gram targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MacroTargets {
    pub calories: u32,
    pub protein_g: u32,
    pub fat_g: u32,
    pub carbs_g: u32,
}

/// Goal-adjusted calorie target, rounded to the nearest kcal. A `lose`
/// deficit never takes the target below BMR.
pub fn calorie_target(profile: &UserProfile) -> u32 {
    let tdee = tdee(profile);
    let target = match profile.goal {
        Goal::Lose => (tdee - LOSE_DEFICIT_KCAL).max(bmr(profile)),
        Goal::Maintain => tdee,
        Goal::Gain => tdee + GAIN_SURPLUS_KCAL,
    };
    target.round().max(0.0) as u32
}

/// Splits a calorie target into macro grams. Protein and fat take their
/// fixed calorie shares; carbohydrates absorb the remainder, keeping
/// `protein*4 + fat*9 + carbs*4` within rounding distance of the target.
pub fn macro_targets(calories: u32) -> MacroTargets {
    let kcal = f64::from(calories);
    let protein_g = (kcal * PROTEIN_CALORIE_SHARE / KCAL_PER_G_PROTEIN).round();
    let fat_g = (kcal * FAT_CALORIE_SHARE / KCAL_PER_G_FAT).round();
    let carbs_kcal =
        (kcal - protein_g * KCAL_PER_G_PROTEIN - fat_g * KCAL_PER_G_FAT).max(0.0);

    MacroTargets {
        calories,
        protein_g: protein_g as u32,
        fat_g: fat_g as u32,
        carbs_g: (carbs_kcal / KCAL_PER_G_CARBS).round() as u32,
    }
}

/// Daily water intake in liters, rounded to two decimals.
pub fn water_intake_liters(weight_kg: f64) -> f64 {
    (weight_kg * WATER_LITERS_PER_KG * 100.0).round() / 100.0
}

/// Daily step goal by activity level, bumped for a `lose` goal.
pub fn steps_goal(activity_level: ActivityLevel, goal: Goal) -> u32 {
    let base = STEPS_BY_LEVEL[usize::from(activity_level.index() - 1)];
    match goal {
        Goal::Lose => base + LOSE_STEPS_BONUS,
        _ => base,
    }
}

#[cfg(test)]
mod tests {
    use nutriplan_model::profile::Gender;

    use super::*;

    fn profile(goal: Goal) -> UserProfile {
        UserProfile {
            name: "Alex".to_string(),
            weight_kg: 70.0,
            height_cm: 175.0,
            age: 30,
            gender: Gender::Male,
            activity_level: ActivityLevel::Moderate,
            goal,
        }
    }

    #[test]
    fn maintain_target_matches_the_worked_example() {
        // BMR 1673.75, multiplier 1.55
        assert_eq!(calorie_target(&profile(Goal::Maintain)), 2594);
    }

    #[test]
    fn goal_targets_are_strictly_ordered() {
        let lose = calorie_target(&profile(Goal::Lose));
        let maintain = calorie_target(&profile(Goal::Maintain));
        let gain = calorie_target(&profile(Goal::Gain));

        assert!(gain > maintain, "{} > {}", gain, maintain);
        assert!(maintain > lose, "{} > {}", maintain, lose);
    }

    #[test]
    fn lose_deficit_is_floored_at_bmr() {
        // Sedentary multiplier 1.2 leaves less than the full deficit
        // between TDEE and BMR.
        let mut p = profile(Goal::Lose);
        p.activity_level = ActivityLevel::Sedentary;

        let target = calorie_target(&p);
        assert_eq!(target, bmr(&p).round() as u32);
        assert!(target < calorie_target(&{
            let mut p = p.clone();
            p.goal = Goal::Maintain;
            p
        }));
    }

    #[test]
    fn target_is_monotonic_in_activity_level() {
        let targets: Vec<u32> = ActivityLevel::ALL
            .into_iter()
            .map(|level| {
                let mut p = profile(Goal::Maintain);
                p.activity_level = level;
                calorie_target(&p)
            })
            .collect();

        for pair in targets.windows(2) {
            assert!(pair[0] <= pair[1]);
        }
    }

    #[test]
    fn macro_grams_reproduce_the_calorie_target() {
        for calories in [1200, 1674, 2094, 2594, 3094, 4100] {
            let macros = macro_targets(calories);
            let kcal = macros.protein_g * 4 + macros.fat_g * 9 + macros.carbs_g * 4;
            let diff = kcal.abs_diff(calories);
            assert!(diff <= 4, "off by {} kcal for target {}", diff, calories);
        }
    }

    #[test]
    fn worked_example_macro_split() {
        let macros = macro_targets(2594);
        assert_eq!(macros.protein_g, 195);
        assert_eq!(macros.fat_g, 72);
        assert_eq!(macros.carbs_g, 292);
    }

    #[test]
    fn water_intake_scales_linearly_with_weight() {
        assert!((water_intake_liters(70.0) - 2.31).abs() < 1e-9);
        assert!((water_intake_liters(140.0) - 2.0 * 2.31).abs() < 1e-9);
        assert!((water_intake_liters(50.0) - 1.65).abs() < 1e-9);
    }

    #[test]
    fn steps_goal_follows_the_level_table() {
        let test_data = [
            (ActivityLevel::Sedentary, Goal::Maintain, 5000),
            (ActivityLevel::Low, Goal::Gain, 7000),
            (ActivityLevel::Moderate, Goal::Maintain, 10000),
            (ActivityLevel::High, Goal::Maintain, 12000),
            (ActivityLevel::VeryHigh, Goal::Maintain, 15000),
            (ActivityLevel::Sedentary, Goal::Lose, 7000),
            (ActivityLevel::VeryHigh, Goal::Lose, 17000),
        ];

        for (i, (level, goal, expected)) in test_data.into_iter().enumerate() {
            assert_eq!(steps_goal(level, goal), expected, "Test case #{}", i);
        }
    }
}
