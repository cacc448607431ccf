use strum::{Display, EnumString};

/// Named positions in the daily meal schedule, in serving order.
///
/// The serde form keeps the plain variant identifiers (used by the RON
/// catalog); the wire names shown to users come from `Display`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum MealSlot {
    Breakfast,
    #[strum(serialize = "Mid-morning")]
    MidMorning,
    Lunch,
    Snack,
    Dinner,
}

impl MealSlot {
    pub const ALL: [MealSlot; 5] = [
        MealSlot::Breakfast,
        MealSlot::MidMorning,
        MealSlot::Lunch,
        MealSlot::Snack,
        MealSlot::Dinner,
    ];
}

/// Ordered mapping from meal slot to food item names. Insertion order is
/// serving order and is preserved through serialization, which is why this
/// is not a plain map type.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct MealPlan(Vec<(MealSlot, Vec<String>)>);

impl MealPlan {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a slot. Re-pushing an existing slot replaces its items
    /// without changing its position.
    pub fn push(&mut self, slot: MealSlot, items: Vec<String>) {
        if let Some(existing) = self.0.iter_mut().find(|(s, _)| *s == slot) {
            existing.1 = items;
        } else {
            self.0.push((slot, items));
        }
    }

    pub fn get(&self, slot: MealSlot) -> Option<&[String]> {
        self.0
            .iter()
            .find(|(s, _)| *s == slot)
            .map(|(_, items)| items.as_slice())
    }

    pub fn iter(&self) -> impl Iterator<Item = (MealSlot, &[String])> {
        self.0.iter().map(|(slot, items)| (*slot, items.as_slice()))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl FromIterator<(MealSlot, Vec<String>)> for MealPlan {
    fn from_iter<T: IntoIterator<Item = (MealSlot, Vec<String>)>>(iter: T) -> Self {
        let mut plan = MealPlan::new();
        for (slot, items) in iter {
            plan.push(slot, items);
        }
        plan
    }
}

/// The computed daily plan, derived once per request and immutable after.
/// `protein_g*4 + fat_g*9 + carbs_g*4` stays within rounding distance of
/// `calories`.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DietPlan {
    pub calories: u32,
    #[cfg_attr(feature = "serde", serde(rename = "protein"))]
    pub protein_g: u32,
    #[cfg_attr(feature = "serde", serde(rename = "fat"))]
    pub fat_g: u32,
    #[cfg_attr(feature = "serde", serde(rename = "carbs"))]
    pub carbs_g: u32,
    pub water_intake_liters: f64,
    pub steps_goal: u32,
    pub meals: MealPlan,
}

#[cfg(feature = "serde")]
mod serde_impl {
    use std::fmt;
    use std::str::FromStr;

    use serde::{
        de::{MapAccess, Visitor},
        ser::SerializeMap,
        Deserialize, Deserializer, Serialize, Serializer,
    };

    use super::{MealPlan, MealSlot};

    impl Serialize for MealPlan {
        fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
        where
            S: Serializer,
        {
            let mut map = serializer.serialize_map(Some(self.0.len()))?;
            for (slot, items) in &self.0 {
                map.serialize_entry(&slot.to_string(), items)?;
            }
            map.end()
        }
    }

    impl<'de> Deserialize<'de> for MealPlan {
        fn deserialize<D>(deserializer: D) -> Result<MealPlan, D::Error>
        where
            D: Deserializer<'de>,
        {
            struct MealPlanVisitor;
            impl<'de> Visitor<'de> for MealPlanVisitor {
                type Value = MealPlan;

                fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                    write!(f, "a map from meal slot to a list of food items")
                }

                fn visit_map<A>(self, mut map: A) -> Result<Self::Value, A::Error>
                where
                    A: MapAccess<'de>,
                {
                    let mut plan = MealPlan::new();
                    while let Some((slot, items)) = map.next_entry::<String, Vec<String>>()? {
                        let slot = MealSlot::from_str(&slot).map_err(|_| {
                            serde::de::Error::custom(format!("unknown meal slot: {}", slot))
                        })?;
                        plan.push(slot, items);
                    }
                    Ok(plan)
                }
            }
            deserializer.deserialize_map(MealPlanVisitor)
        }
    }
}
