use std::fmt::Display;

use liftmax_domain::{
    SelectOption, UNSET, Units, percentages, reps_options, rpe_options, sets_options,
    weight_options,
};

#[derive(Debug, Clone, PartialEq)]
pub struct Item {
    pub value: String,
    pub text: String,
}

#[must_use]
pub fn item<T: Display>(option: SelectOption<T>) -> Item {
    Item {
        value: option.value.to_string(),
        text: option.text,
    }
}

/// Converts an option whose value may be unset, using the sentinel as value.
#[must_use]
pub fn choice_item<T: Display>(option: SelectOption<Option<T>>) -> Item {
    Item {
        value: option
            .value
            .map_or_else(|| UNSET.to_string(), |value| value.to_string()),
        text: option.text,
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum SelectKind {
    Reps,
    RPE,
    Weights,
    Sets,
    Percentages,
    Custom(Vec<Item>),
}

#[must_use]
pub fn items(kind: &SelectKind, units: Units) -> Vec<Item> {
    match kind {
        SelectKind::Reps => reps_options().map(item).collect(),
        SelectKind::RPE => rpe_options().map(item).collect(),
        SelectKind::Weights => weight_options(units).map(item).collect(),
        SelectKind::Sets => sets_options().map(item).collect(),
        SelectKind::Percentages => percentages().map(item).collect(),
        SelectKind::Custom(items) => items.clone(),
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Select {
    pub name: String,
    pub selected: String,
    pub items: Vec<Item>,
}

impl Select {
    #[must_use]
    pub fn new(name: &str, kind: &SelectKind, units: Units, selected: String) -> Self {
        Self {
            name: name.to_string(),
            selected,
            items: items(kind, units),
        }
    }

    /// Text of the selected item, if the selected value is one of the items.
    #[must_use]
    pub fn selected_text(&self) -> Option<&str> {
        self.items
            .iter()
            .find(|item| item.value == self.selected)
            .map(|item| item.text.as_str())
    }
}
