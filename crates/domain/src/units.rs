use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

use crate::Weight;

pub const LBS_TO_KG: f32 = 0.453_592;

/// Unit used to display weights. Stored weights are always in pounds.
#[derive(
    Debug, Default, Clone, Copy, PartialEq, Eq, Display, EnumString, Serialize, Deserialize,
)]
pub enum Units {
    #[default]
    #[strum(serialize = "lbs")]
    #[serde(rename = "lbs")]
    Pounds,
    #[strum(serialize = "kg")]
    #[serde(rename = "kg")]
    Kilograms,
}

impl Units {
    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            Units::Pounds => Units::Kilograms,
            Units::Kilograms => Units::Pounds,
        }
    }

    /// Converts pounds into this unit, rounding kilograms to whole numbers.
    #[must_use]
    pub fn convert(self, pounds: f32) -> f32 {
        match self {
            Units::Pounds => pounds,
            Units::Kilograms => (pounds * LBS_TO_KG).round(),
        }
    }

    #[must_use]
    pub fn format(self, weight: Weight) -> String {
        self.convert(f32::from(weight)).to_string()
    }
}
