use std::iter;

use crate::{OneRepMaxEntry, Percent, RPE, Reps, Sets, ShortName, Units, Weight};

/// Select value standing for "no selection".
pub const UNSET: &str = "-";

#[derive(Debug, Clone, PartialEq)]
pub struct SelectOption<T> {
    pub value: T,
    pub text: String,
}

impl<T: ToString> SelectOption<T> {
    fn from_value(value: T) -> Self {
        Self {
            text: value.to_string(),
            value,
        }
    }
}

impl<T> SelectOption<Option<T>> {
    fn unset() -> Self {
        Self {
            value: None,
            text: UNSET.to_string(),
        }
    }
}

/// Parses a select value, mapping the unset sentinel to `None`.
pub fn parse_choice<T, E>(value: &str) -> Result<Option<T>, E>
where
    T: for<'a> TryFrom<&'a str, Error = E>,
{
    if value.trim() == UNSET {
        Ok(None)
    } else {
        T::try_from(value).map(Some)
    }
}

pub fn reps_options() -> impl Iterator<Item = SelectOption<Reps>> + Clone {
    (1..=12).map(|reps| SelectOption::from_value(Reps(reps)))
}

pub fn rpe_options() -> impl Iterator<Item = SelectOption<RPE>> + Clone {
    (13..=20).map(|half_steps| SelectOption::from_value(RPE(half_steps * 5)))
}

pub fn sets_options() -> impl Iterator<Item = SelectOption<Sets>> + Clone {
    (1..=5).map(|sets| SelectOption::from_value(Sets(sets)))
}

pub fn percentages() -> impl Iterator<Item = SelectOption<Percent>> + Clone {
    (Percent::MIN.0..=Percent::MAX.0).map(|percent| SelectOption::from_value(Percent(percent)))
}

/// Percentages preceded by the unset sentinel.
pub fn percentage_choices() -> impl Iterator<Item = SelectOption<Option<Percent>>> + Clone {
    iter::once(SelectOption::unset()).chain(percentages().map(|option| SelectOption {
        value: Some(option.value),
        text: option.text,
    }))
}

/// Weights from 100 to 800 lbs in steps of 5, labeled in the given units.
pub fn weight_options(units: Units) -> impl Iterator<Item = SelectOption<Weight>> + Clone {
    (100_u16..=800)
        .filter(|pounds| pounds % 5 == 0)
        .map(move |pounds| {
            let weight = Weight(f32::from(pounds));
            SelectOption {
                value: weight,
                text: units.format(weight),
            }
        })
}

/// Short names of all main lifts preceded by the unset sentinel.
pub fn lift_name_choices(
    entries: &[OneRepMaxEntry],
) -> impl Iterator<Item = SelectOption<Option<ShortName>>> + Clone + '_ {
    iter::once(SelectOption::unset()).chain(entries.iter().map(|entry| SelectOption {
        value: Some(entry.short_name.clone()),
        text: entry.short_name.to_string(),
    }))
}
