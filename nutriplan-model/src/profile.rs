use strum::{Display, EnumString};
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString)]
#[strum(ascii_case_insensitive, serialize_all = "lowercase")]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Gender {
    Male,
    Female,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString)]
#[strum(ascii_case_insensitive, serialize_all = "lowercase")]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Goal {
    Lose,
    Maintain,
    Gain,
}

/// Activity levels as reported by the intake form, 1 (sedentary)
/// through 5 (very high).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ActivityLevel {
    Sedentary,
    Low,
    Moderate,
    High,
    VeryHigh,
}

impl ActivityLevel {
    pub const ALL: [ActivityLevel; 5] = [
        ActivityLevel::Sedentary,
        ActivityLevel::Low,
        ActivityLevel::Moderate,
        ActivityLevel::High,
        ActivityLevel::VeryHigh,
    ];

    pub fn from_index(index: u8) -> Option<Self> {
        match index {
            1 => Some(ActivityLevel::Sedentary),
            2 => Some(ActivityLevel::Low),
            3 => Some(ActivityLevel::Moderate),
            4 => Some(ActivityLevel::High),
            5 => Some(ActivityLevel::VeryHigh),
            _ => None,
        }
    }

    pub fn index(self) -> u8 {
        self as u8 + 1
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("weight must be greater than zero")]
    Weight,
    #[error("height must be greater than zero")]
    Height,
    #[error("age must be between 1 and 129")]
    Age,
    #[error("gender must be one of: male, female")]
    Gender,
    #[error("activity_level must be between 1 and 5")]
    ActivityLevel,
    #[error("goal must be one of: lose, maintain, gain")]
    Goal,
}

impl ValidationError {
    /// Name of the request field that failed validation.
    pub fn field(&self) -> &'static str {
        match self {
            ValidationError::Weight => "weight",
            ValidationError::Height => "height",
            ValidationError::Age => "age",
            ValidationError::Gender => "gender",
            ValidationError::ActivityLevel => "activity_level",
            ValidationError::Goal => "goal",
        }
    }
}

/// Untyped intake form values, as posted by the frontend.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RawProfile {
    pub name: String,
    pub weight: f64,
    pub height: f64,
    pub age: i64,
    pub gender: String,
    pub activity_level: i64,
    pub goal: String,
}

/// A validated profile. Constructed only through [`UserProfile::from_raw`],
/// so downstream components never see out-of-range values.
#[derive(Debug, Clone, PartialEq)]
pub struct UserProfile {
    pub name: String,
    pub weight_kg: f64,
    pub height_cm: f64,
    pub age: u32,
    pub gender: Gender,
    pub activity_level: ActivityLevel,
    pub goal: Goal,
}

impl UserProfile {
    pub fn from_raw(raw: RawProfile) -> Result<Self, ValidationError> {
        if !raw.weight.is_finite() || raw.weight <= 0.0 {
            return Err(ValidationError::Weight);
        }
        if !raw.height.is_finite() || raw.height <= 0.0 {
            return Err(ValidationError::Height);
        }
        let age = u32::try_from(raw.age)
            .ok()
            .filter(|age| (1..130).contains(age))
            .ok_or(ValidationError::Age)?;
        let gender = raw
            .gender
            .parse::<Gender>()
            .map_err(|_| ValidationError::Gender)?;
        let activity_level = u8::try_from(raw.activity_level)
            .ok()
            .and_then(ActivityLevel::from_index)
            .ok_or(ValidationError::ActivityLevel)?;
        let goal = raw.goal.parse::<Goal>().map_err(|_| ValidationError::Goal)?;

        Ok(Self {
            name: raw.name,
            weight_kg: raw.weight,
            height_cm: raw.height,
            age,
            gender,
            activity_level,
            goal,
        })
    }
}
