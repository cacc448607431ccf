use log::info;
use nutriplan_engine::catalog::Catalog;
use nutriplan_engine::{composer, targets};
use nutriplan_model::plan::DietPlan;
use nutriplan_model::profile::{RawProfile, UserProfile, ValidationError};
use nutriplan_report::{ReportStore, StorageError};
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("{0}")]
    Validation(#[from] ValidationError),
    #[error("failed to generate report")]
    Storage(#[from] StorageError),
}

/// The response contract consumed by the frontend: the complete plan
/// together with its report identifier, or nothing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalculateResponse {
    pub diet_plan: DietPlan,
    pub pdf_file: String,
}

/// Sequences validation, energy and target derivation, meal composition
/// and report generation for one request. Holds no state between
/// requests; the catalog and the store are the only shared
/// collaborators.
pub struct PlanService {
    catalog: Box<dyn Catalog>,
    store: Box<dyn ReportStore>,
}

impl PlanService {
    pub fn new(catalog: Box<dyn Catalog>, store: Box<dyn ReportStore>) -> Self {
        Self { catalog, store }
    }

    pub async fn calculate(&self, raw: RawProfile) -> Result<CalculateResponse, ServiceError> {
        let profile = UserProfile::from_raw(raw)?;
        info!(
            "Computing plan: goal {}, activity level {}",
            profile.goal,
            profile.activity_level.index()
        );

        let calories = targets::calorie_target(&profile);
        let macros = targets::macro_targets(calories);
        let meals = composer::compose_meals(&macros, profile.goal, self.catalog.as_ref());

        let plan = DietPlan {
            calories: macros.calories,
            protein_g: macros.protein_g,
            fat_g: macros.fat_g,
            carbs_g: macros.carbs_g,
            water_intake_liters: targets::water_intake_liters(profile.weight_kg),
            steps_goal: targets::steps_goal(profile.activity_level, profile.goal),
            meals,
        };

        let pdf_file = self.store.store(&profile, &plan).await?;
        Ok(CalculateResponse {
            diet_plan: plan,
            pdf_file,
        })
    }

    pub async fn report(&self, file_name: &str) -> Result<Vec<u8>, ServiceError> {
        Ok(self.store.load(file_name).await?)
    }
}
