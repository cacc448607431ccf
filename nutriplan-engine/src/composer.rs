use itertools::Itertools;
use log::debug;
use nutriplan_model::food::FoodItem;
use nutriplan_model::plan::{MealPlan, MealSlot};
use nutriplan_model::profile::Goal;

use crate::catalog::Catalog;
use crate::params::{
    KCAL_PER_G_CARBS, KCAL_PER_G_FAT, KCAL_PER_G_PROTEIN, SLOT_CALORIE_SHARES,
    SLOT_KCAL_TOLERANCE,
};
use crate::targets::MacroTargets;

#[derive(Debug, Clone, Copy, Default)]
struct MacroSum {
    kcal: f64,
    protein_g: f64,
    fat_g: f64,
    carbs_g: f64,
}

impl MacroSum {
    fn add(&self, item: &FoodItem) -> MacroSum {
        MacroSum {
            kcal: self.kcal + item.kcal,
            protein_g: self.protein_g + item.protein_g,
            fat_g: self.fat_g + item.fat_g,
            carbs_g: self.carbs_g + item.carbs_g,
        }
    }

    /// Kcal-weighted L1 distance in macro space.
    fn distance(&self, target: &MacroSum) -> f64 {
        (self.protein_g - target.protein_g).abs() * KCAL_PER_G_PROTEIN
            + (self.fat_g - target.fat_g).abs() * KCAL_PER_G_FAT
            + (self.carbs_g - target.carbs_g).abs() * KCAL_PER_G_CARBS
    }
}

/// Distributes the daily macro targets across the meal slots, picking
/// catalog items per slot. Deterministic for a fixed target and catalog:
/// the greedy step and the tie-break both follow catalog declaration
/// order.
pub fn compose_meals(targets: &MacroTargets, goal: Goal, catalog: &dyn Catalog) -> MealPlan {
    let items: Vec<FoodItem> = catalog
        .items()
        .into_iter()
        .filter(|item| item.suits_goal(goal))
        .collect();
    debug!("{} catalog items available for goal {}", items.len(), goal);

    let mut plan = MealPlan::new();
    for (slot, share) in SLOT_CALORIE_SHARES {
        let slot_target = MacroSum {
            kcal: f64::from(targets.calories) * share,
            protein_g: f64::from(targets.protein_g) * share,
            fat_g: f64::from(targets.fat_g) * share,
            carbs_g: f64::from(targets.carbs_g) * share,
        };
        let candidates: Vec<&FoodItem> =
            items.iter().filter(|item| item.suits_slot(slot)).collect();

        let names = select_items(&candidates, &slot_target)
            .into_iter()
            .map(|item| item.name.clone())
            .collect();
        plan.push(slot, names);
    }
    plan
}

/// Greedy selection towards `target`: repeatedly adds the candidate that
/// most reduces the macro distance, never taking the slot beyond its
/// kcal tolerance band. Each candidate is used at most once. If no
/// candidate fits the band at all, degrades to the single closest item
/// rather than returning nothing.
fn select_items<'a>(candidates: &[&'a FoodItem], target: &MacroSum) -> Vec<&'a FoodItem> {
    let kcal_cap = target.kcal * (1.0 + SLOT_KCAL_TOLERANCE);
    let mut used = vec![false; candidates.len()];
    let mut selected = Vec::new();
    let mut totals = MacroSum::default();
    let mut best = totals.distance(target);

    loop {
        let mut next: Option<(usize, f64)> = None;
        for (i, item) in candidates.iter().enumerate() {
            if used[i] || totals.kcal + item.kcal > kcal_cap {
                continue;
            }
            let distance = totals.add(item).distance(target);
            // Strict comparisons: earlier catalog entries win ties.
            if distance < best && next.map_or(true, |(_, d)| distance < d) {
                next = Some((i, distance));
            }
        }

        match next {
            Some((i, distance)) => {
                used[i] = true;
                selected.push(candidates[i]);
                totals = totals.add(candidates[i]);
                best = distance;
            }
            None => break,
        }
    }

    if selected.is_empty() {
        let closest = candidates.iter().position_min_by(|a, b| {
            (a.kcal - target.kcal)
                .abs()
                .total_cmp(&(b.kcal - target.kcal).abs())
        });
        if let Some(i) = closest {
            debug!(
                "No candidate set within tolerance of {:.0} kcal, degrading to closest item",
                target.kcal
            );
            selected.push(candidates[i]);
        }
    }

    selected
}
