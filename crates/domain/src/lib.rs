#![warn(clippy::pedantic)]
#![allow(clippy::missing_errors_doc)]

mod error;
mod name;
mod one_rep_max;
mod options;
mod units;
mod variant;

pub use error::Error;
pub use name::{Name, NameError, ShortName, ShortNameError};
pub use one_rep_max::{OneRepMaxEntry, OneRepMaxID, WorkoutField, estimate_one_rep_max};
pub use options::{
    SelectOption, UNSET, lift_name_choices, parse_choice, percentage_choices, percentages,
    reps_options, rpe_options, sets_options, weight_options,
};
pub use units::{LBS_TO_KG, Units};
pub use variant::{Variant, VariantField, VariantID, derive_variant_one_rep_max};

use std::fmt::{self, Display};

use derive_more::{Display, Into};
use thiserror::Error;

#[derive(Debug, Display, Clone, Copy, PartialEq, PartialOrd)]
pub struct Reps(u8);

impl Reps {
    pub fn new(value: u32) -> Result<Self, RepsError> {
        if !(1..=12).contains(&value) {
            return Err(RepsError::OutOfRange);
        }

        #[allow(clippy::cast_possible_truncation)]
        Ok(Self(value as u8))
    }
}

impl From<Reps> for f32 {
    fn from(value: Reps) -> Self {
        f32::from(value.0)
    }
}

impl TryFrom<&str> for Reps {
    type Error = RepsError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value.trim().parse::<u32>() {
            Ok(parsed_value) => Reps::new(parsed_value),
            Err(_) => Err(RepsError::ParseError),
        }
    }
}

#[derive(Error, Debug, PartialEq)]
pub enum RepsError {
    #[error("Reps must be in the range 1 to 12")]
    OutOfRange,
    #[error("Reps must be an integer")]
    ParseError,
}

/// Weight in pounds, independent of the unit chosen for display.
#[derive(Debug, Default, Display, Clone, Copy, Into, PartialEq, PartialOrd)]
pub struct Weight(f32);

impl Weight {
    pub fn new(value: f32) -> Result<Self, WeightError> {
        if !(0.0..1000.0).contains(&value) {
            return Err(WeightError::OutOfRange);
        }

        if (value * 10.0 % 1.0).abs() > f32::EPSILON {
            return Err(WeightError::InvalidResolution);
        }

        Ok(Self(value))
    }
}

impl TryFrom<&str> for Weight {
    type Error = WeightError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value.trim().parse::<f32>() {
            Ok(parsed_value) => Weight::new(parsed_value),
            Err(_) => Err(WeightError::ParseError),
        }
    }
}

#[derive(Error, Debug, PartialEq)]
pub enum WeightError {
    #[error("Weight must be in the range 0.0 to 999.9 lbs")]
    OutOfRange,
    #[error("Weight must be a multiple of 0.1 lbs")]
    InvalidResolution,
    #[error("Weight must be a decimal")]
    ParseError,
}

#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct RPE(u8);

impl RPE {
    pub const SIX_AND_A_HALF: RPE = RPE(65);
    pub const SEVEN: RPE = RPE(70);
    pub const EIGHT: RPE = RPE(80);
    pub const NINE: RPE = RPE(90);
    pub const TEN: RPE = RPE(100);

    pub fn new(value: f32) -> Result<Self, RPEError> {
        if !(6.5..=10.0).contains(&value) {
            return Err(RPEError::OutOfRange);
        }

        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let v = (value * 10.0) as u8;

        if v % 5 != 0 {
            return Err(RPEError::InvalidResolution);
        }

        Ok(Self(v))
    }
}

impl From<RPE> for f32 {
    fn from(value: RPE) -> Self {
        f32::from(value.0) / 10.0
    }
}

impl TryFrom<&str> for RPE {
    type Error = RPEError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value.trim().parse::<f32>() {
            Ok(parsed_value) => RPE::new(parsed_value),
            Err(_) => Err(RPEError::ParseError),
        }
    }
}

impl Display for RPE {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", f32::from(*self))
    }
}

#[derive(Error, Debug, PartialEq)]
pub enum RPEError {
    #[error("RPE must be in the range 6.5 to 10.0")]
    OutOfRange,
    #[error("RPE must be a multiple of 0.5")]
    InvalidResolution,
    #[error("RPE must be a decimal")]
    ParseError,
}

/// Reps in reserve.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct RIR(u8);

impl From<RPE> for RIR {
    fn from(value: RPE) -> Self {
        Self(100 - value.0)
    }
}

impl From<RIR> for f32 {
    fn from(value: RIR) -> Self {
        f32::from(value.0) / 10.0
    }
}

impl Display for RIR {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", f32::from(*self))
    }
}

#[derive(Debug, Display, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Sets(u8);

impl Sets {
    pub fn new(value: u32) -> Result<Self, SetsError> {
        if !(1..=5).contains(&value) {
            return Err(SetsError::OutOfRange);
        }

        #[allow(clippy::cast_possible_truncation)]
        Ok(Self(value as u8))
    }
}

impl TryFrom<&str> for Sets {
    type Error = SetsError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value.trim().parse::<u32>() {
            Ok(parsed_value) => Sets::new(parsed_value),
            Err(_) => Err(SetsError::ParseError),
        }
    }
}

#[derive(Error, Debug, PartialEq)]
pub enum SetsError {
    #[error("Sets must be in the range 1 to 5")]
    OutOfRange,
    #[error("Sets must be an integer")]
    ParseError,
}

/// Share of a main lift's one rep max.
#[derive(Debug, Display, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Percent(u8);

impl Percent {
    pub const MIN: Percent = Percent(10);
    pub const MAX: Percent = Percent(200);

    pub fn new(value: u32) -> Result<Self, PercentError> {
        if !(u32::from(Self::MIN.0)..=u32::from(Self::MAX.0)).contains(&value) {
            return Err(PercentError::OutOfRange);
        }

        #[allow(clippy::cast_possible_truncation)]
        Ok(Self(value as u8))
    }
}

impl From<Percent> for f32 {
    fn from(value: Percent) -> Self {
        f32::from(value.0)
    }
}

impl TryFrom<&str> for Percent {
    type Error = PercentError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value.trim().parse::<u32>() {
            Ok(parsed_value) => Percent::new(parsed_value),
            Err(_) => Err(PercentError::ParseError),
        }
    }
}

#[derive(Error, Debug, PartialEq)]
pub enum PercentError {
    #[error("Percent must be in the range 10 to 200")]
    OutOfRange,
    #[error("Percent must be an integer")]
    ParseError,
}
