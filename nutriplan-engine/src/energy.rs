use nutriplan_model::profile::{Gender, UserProfile};

use crate::params::ACTIVITY_MULTIPLIERS;

/// Basal Metabolic Rate (kcal/day), Mifflin-St Jeor.
pub fn bmr(profile: &UserProfile) -> f64 {
    let base =
        10.0 * profile.weight_kg + 6.25 * profile.height_cm - 5.0 * f64::from(profile.age);
    match profile.gender {
        Gender::Male => base + 5.0,
        Gender::Female => base - 161.0,
    }
}

/// Total Daily Energy Expenditure (kcal/day): BMR scaled by the
/// activity multiplier.
pub fn tdee(profile: &UserProfile) -> f64 {
    bmr(profile) * ACTIVITY_MULTIPLIERS[usize::from(profile.activity_level.index() - 1)]
}

#[cfg(test)]
mod tests {
    use nutriplan_model::profile::{ActivityLevel, Goal};

    use super::*;

    fn profile(gender: Gender, activity_level: ActivityLevel) -> UserProfile {
        UserProfile {
            name: "Alex".to_string(),
            weight_kg: 70.0,
            height_cm: 175.0,
            age: 30,
            gender,
            activity_level,
            goal: Goal::Maintain,
        }
    }

    #[test]
    fn bmr_matches_mifflin_st_jeor() {
        let male = profile(Gender::Male, ActivityLevel::Moderate);
        assert!((bmr(&male) - 1673.75).abs() < 1e-9);

        let female = profile(Gender::Female, ActivityLevel::Moderate);
        assert!((bmr(&female) - 1507.75).abs() < 1e-9);
    }

    #[test]
    fn tdee_scales_bmr_by_activity() {
        let p = profile(Gender::Male, ActivityLevel::Moderate);
        assert!((tdee(&p) - 1673.75 * 1.55).abs() < 1e-9);
    }

    #[test]
    fn tdee_is_monotonic_in_activity_level() {
        let tdees: Vec<f64> = ActivityLevel::ALL
            .into_iter()
            .map(|level| tdee(&profile(Gender::Female, level)))
            .collect();

        for pair in tdees.windows(2) {
            assert!(pair[0] < pair[1]);
        }
    }
}
