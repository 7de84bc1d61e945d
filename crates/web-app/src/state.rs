use log::debug;
use strum::{Display, EnumIter, IntoEnumIterator};

use liftmax_domain::{
    self as domain, OneRepMaxEntry, OneRepMaxID, Units, Variant, VariantField, VariantID,
    WorkoutField,
};

#[derive(Debug, Clone, Default, PartialEq)]
pub struct State {
    pub one_rep_max: Vec<OneRepMaxEntry>,
    pub variants: Variants,
    pub units: Units,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Variants {
    /// Whether the form for creating a new variant is open.
    pub is_active: bool,
    pub list: Vec<Variant>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    AddWorkout(OneRepMaxEntry),
    RemoveWorkout(OneRepMaxID),
    ChangeWorkout {
        id: OneRepMaxID,
        field: WorkoutField,
    },
    AddVariant(Variant),
    RemoveVariant(VariantID),
    ChangeVariant {
        id: VariantID,
        field: VariantField,
    },
    SetActiveTrue,
    SetActiveFalse,
    SetUnits(Units),
    ToggleUnits,
}

/// Part of the state a subscriber can observe.
#[derive(Debug, Display, Clone, Copy, PartialEq, Eq, Hash, EnumIter)]
pub enum Slice {
    OneRepMax,
    Variants,
    Units,
}

impl Slice {
    #[must_use]
    pub fn changed(previous: &State, current: &State) -> Vec<Slice> {
        Slice::iter()
            .filter(|slice| match slice {
                Slice::OneRepMax => previous.one_rep_max != current.one_rep_max,
                Slice::Variants => previous.variants != current.variants,
                Slice::Units => previous.units != current.units,
            })
            .collect()
    }
}

/// Applies an action to the state. Derived values are not updated, see `derive`.
#[must_use]
pub fn reduce(mut state: State, action: Action) -> State {
    match action {
        Action::AddWorkout(entry) => {
            state.one_rep_max.push(entry);
        }
        Action::RemoveWorkout(id) => {
            let len = state.one_rep_max.len();
            state.one_rep_max.retain(|entry| entry.id != id);
            if state.one_rep_max.len() == len {
                debug!("ignore removal of unknown one rep max entry {}", *id);
            }
        }
        Action::ChangeWorkout { id, field } => {
            match state.one_rep_max.iter_mut().find(|entry| entry.id == id) {
                Some(entry) => entry.apply(field),
                None => debug!("ignore change of unknown one rep max entry {}", *id),
            }
        }
        Action::AddVariant(variant) => {
            state.variants.list.push(variant);
        }
        Action::RemoveVariant(id) => {
            let len = state.variants.list.len();
            state.variants.list.retain(|variant| variant.id != id);
            if state.variants.list.len() == len {
                debug!("ignore removal of unknown variant {}", *id);
            }
        }
        Action::ChangeVariant { id, field } => {
            match state.variants.list.iter_mut().find(|variant| variant.id == id) {
                Some(variant) => variant.apply(field),
                None => debug!("ignore change of unknown variant {}", *id),
            }
        }
        Action::SetActiveTrue => state.variants.is_active = true,
        Action::SetActiveFalse => state.variants.is_active = false,
        Action::SetUnits(units) => state.units = units,
        Action::ToggleUnits => state.units = state.units.toggled(),
    }
    state
}

/// Recomputes all derived values: first the estimates of the main lifts, then the variants
/// referring to them. Returns the lookup failures that left a variant undefined.
pub fn derive(state: &mut State) -> Vec<domain::Error> {
    for entry in &mut state.one_rep_max {
        if entry.recompute() {
            debug!("one rep max of {} changed to {}", entry.short_name, entry.one_rm);
        }
    }
    state
        .variants
        .list
        .iter_mut()
        .filter_map(|variant| variant.recompute(&state.one_rep_max).err())
        .collect()
}
