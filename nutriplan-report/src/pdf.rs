use std::io::BufWriter;

use itertools::Itertools;
use nutriplan_model::plan::DietPlan;
use nutriplan_model::profile::UserProfile;
use printpdf::{BuiltinFont, Mm, PdfDocument};

use crate::StorageError;

const PAGE_WIDTH_MM: f32 = 210.0;
const PAGE_HEIGHT_MM: f32 = 297.0;
const MARGIN_MM: f32 = 20.0;
const LINE_HEIGHT_MM: f32 = 9.0;

/// Renders one plan into a single-page PDF.
pub(crate) fn render(profile: &UserProfile, plan: &DietPlan) -> Result<Vec<u8>, StorageError> {
    let (doc, page, layer) = PdfDocument::new(
        "Nutriplan Report",
        Mm(PAGE_WIDTH_MM),
        Mm(PAGE_HEIGHT_MM),
        "Layer 1",
    );
    let font = doc
        .add_builtin_font(BuiltinFont::Helvetica)
        .map_err(|e| StorageError::Render(e.to_string()))?;
    let bold = doc
        .add_builtin_font(BuiltinFont::HelveticaBold)
        .map_err(|e| StorageError::Render(e.to_string()))?;
    let layer = doc.get_page(page).get_layer(layer);

    let mut y = PAGE_HEIGHT_MM - MARGIN_MM;
    layer.use_text("Nutriplan Report", 16.0, Mm(MARGIN_MM), Mm(y), &bold);
    y -= 2.0 * LINE_HEIGHT_MM;

    let summary = [
        format!("Name: {}", profile.name),
        format!("Calories: {} kcal", plan.calories),
        format!("Protein: {} g", plan.protein_g),
        format!("Fat: {} g", plan.fat_g),
        format!("Carbs: {} g", plan.carbs_g),
        format!("Water: {} L", plan.water_intake_liters),
        format!("Steps Goal: {} steps", plan.steps_goal),
    ];
    for line in summary {
        layer.use_text(line, 12.0, Mm(MARGIN_MM), Mm(y), &font);
        y -= LINE_HEIGHT_MM;
    }

    y -= LINE_HEIGHT_MM;
    layer.use_text("Diet Plan:", 12.0, Mm(MARGIN_MM), Mm(y), &bold);
    y -= LINE_HEIGHT_MM;
    for (slot, items) in plan.meals.iter() {
        let line = format!("{}: {}", slot, items.iter().join(", "));
        layer.use_text(line, 12.0, Mm(MARGIN_MM), Mm(y), &font);
        y -= LINE_HEIGHT_MM;
    }

    let mut buffer = BufWriter::new(Vec::new());
    doc.save(&mut buffer)
        .map_err(|e| StorageError::Render(e.to_string()))?;
    buffer
        .into_inner()
        .map_err(|e| StorageError::Io(e.into_error()))
}
