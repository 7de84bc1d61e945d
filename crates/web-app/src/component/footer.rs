use log::{debug, warn};

use liftmax_domain::{
    self as domain, Name, OneRepMaxEntry, OneRepMaxID, Percent, RPE, Reps, ShortName, UNSET,
    Units, Variant, VariantField, VariantID, Weight, WorkoutField, lift_name_choices,
    parse_choice, percentage_choices,
};

use crate::{
    component::select::{Select, SelectKind, choice_item},
    state::{Action, State},
    store::Dispatch,
};

// ------ ------
//     Model
// ------ ------

/// Settings panel listing the estimated one rep maxes and the variants.
#[derive(Debug, Clone, PartialEq)]
pub struct Footer {
    pub units: Units,
    pub one_rep_max: Vec<OneRepMaxRow>,
    pub variants: Vec<VariantRow>,
    pub show_new_variant: bool,
    pub add_variant_disabled: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct OneRepMaxRow {
    pub id: OneRepMaxID,
    pub lift: String,
    pub weight: Select,
    pub reps: Select,
    pub rpe: Select,
    pub one_rm: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct VariantRow {
    pub id: VariantID,
    pub name: String,
    pub main: Select,
    pub percent: Select,
    pub one_rm: String,
}

impl Footer {
    #[must_use]
    pub fn units_label(&self) -> String {
        format!("({})", self.units)
    }
}

// ------ ------
//     View
// ------ ------

#[must_use]
pub fn view(state: &State) -> Footer {
    Footer {
        units: state.units,
        one_rep_max: state
            .one_rep_max
            .iter()
            .map(|entry| one_rep_max_row(entry, state.units))
            .collect(),
        variants: state
            .variants
            .list
            .iter()
            .map(|variant| variant_row(variant, &state.one_rep_max, state.units))
            .collect(),
        show_new_variant: state.variants.is_active,
        add_variant_disabled: state.variants.is_active,
    }
}

fn one_rep_max_row(entry: &OneRepMaxEntry, units: Units) -> OneRepMaxRow {
    OneRepMaxRow {
        id: entry.id,
        lift: entry.short_name.to_string(),
        weight: Select::new("weight", &SelectKind::Weights, units, entry.weight.to_string()),
        reps: Select::new("reps", &SelectKind::Reps, units, entry.reps.to_string()),
        rpe: Select::new("rpe", &SelectKind::RPE, units, entry.rpe.to_string()),
        one_rm: units.convert(entry.one_rm).to_string(),
    }
}

#[allow(clippy::cast_precision_loss)]
fn variant_row(variant: &Variant, entries: &[OneRepMaxEntry], units: Units) -> VariantRow {
    VariantRow {
        id: variant.id,
        name: variant.name.to_string(),
        main: Select::new(
            "main",
            &SelectKind::Custom(lift_name_choices(entries).map(choice_item).collect()),
            units,
            variant
                .main
                .as_ref()
                .map_or_else(|| UNSET.to_string(), ToString::to_string),
        ),
        percent: Select::new(
            "percent",
            &SelectKind::Custom(percentage_choices().map(choice_item).collect()),
            units,
            variant
                .percent
                .map_or_else(|| UNSET.to_string(), |percent| percent.to_string()),
        ),
        one_rm: variant.one_rm.map_or_else(
            || UNSET.to_string(),
            |one_rm| units.convert(one_rm as f32).to_string(),
        ),
    }
}

// ------ ------
//    Update
// ------ ------

#[derive(Debug, Clone, PartialEq)]
pub enum Msg {
    AddWorkout,
    RemoveWorkout(OneRepMaxID),
    LiftChanged(OneRepMaxID, String),
    WeightSelected(OneRepMaxID, String),
    RepsSelected(OneRepMaxID, String),
    RPESelected(OneRepMaxID, String),

    ShowNewVariant,
    VariantNameChanged(VariantID, String),
    MainSelected(VariantID, String),
    PercentSelected(VariantID, String),
    RemoveVariant(VariantID),

    ToggleUnits,
}

pub fn update(msg: Msg, store: &mut impl Dispatch) {
    match msg {
        Msg::AddWorkout => {
            if let Some(entry) = new_workout(store.state()) {
                store.dispatch(Action::AddWorkout(entry));
            }
        }
        Msg::RemoveWorkout(id) => {
            store.dispatch(Action::RemoveWorkout(id));
        }
        Msg::LiftChanged(id, value) => {
            if let Some(short_name) = parse::<ShortName, _>("lift", &value) {
                change_workout(store, id, WorkoutField::ShortName(short_name));
            }
        }
        Msg::WeightSelected(id, value) => {
            if let Some(weight) = parse::<Weight, _>("weight", &value) {
                change_workout(store, id, WorkoutField::Weight(weight));
            }
        }
        Msg::RepsSelected(id, value) => {
            if let Some(reps) = parse::<Reps, _>("reps", &value) {
                change_workout(store, id, WorkoutField::Reps(reps));
            }
        }
        Msg::RPESelected(id, value) => {
            if let Some(rpe) = parse::<RPE, _>("rpe", &value) {
                change_workout(store, id, WorkoutField::RPE(rpe));
            }
        }

        Msg::ShowNewVariant => {
            if store.state().variants.is_active {
                debug!("new variant form already open");
            } else {
                store.dispatch(Action::SetActiveTrue);
            }
        }
        Msg::VariantNameChanged(id, value) => match Name::new(&value) {
            Ok(name) => change_variant(store, id, VariantField::Name(name)),
            Err(err) => warn!("name: {}", domain::Error::from(err)),
        },
        Msg::MainSelected(id, value) => {
            if let Some(main) = parse::<ShortName, _>("main", &value) {
                change_variant(store, id, VariantField::Main(main));
            }
        }
        Msg::PercentSelected(id, value) => {
            if let Some(percent) = parse::<Percent, _>("percent", &value) {
                change_variant(store, id, VariantField::Percent(percent));
            }
        }
        Msg::RemoveVariant(id) => {
            store.dispatch(Action::RemoveVariant(id));
        }

        Msg::ToggleUnits => {
            store.dispatch(Action::ToggleUnits);
        }
    }
}

fn change_workout(store: &mut impl Dispatch, id: OneRepMaxID, field: WorkoutField) {
    store.dispatch(Action::ChangeWorkout { id, field });
}

fn change_variant(store: &mut impl Dispatch, id: VariantID, field: VariantField) {
    store.dispatch(Action::ChangeVariant { id, field });
}

/// Parses a selected value. The unset sentinel and invalid input yield `None`, so that the
/// current value is kept.
fn parse<T, E>(field: &str, value: &str) -> Option<T>
where
    T: for<'a> TryFrom<&'a str, Error = E>,
    domain::Error: From<E>,
{
    match parse_choice::<T, E>(value) {
        Ok(Some(parsed)) => Some(parsed),
        Ok(None) => {
            debug!("ignore unset {field}");
            None
        }
        Err(err) => {
            warn!("{field}: {}", domain::Error::from(err));
            None
        }
    }
}

fn new_workout(state: &State) -> Option<OneRepMaxEntry> {
    let short_name = (1..)
        .map(|n| format!("LIFT{n}"))
        .find(|name| {
            state
                .one_rep_max
                .iter()
                .all(|entry| entry.short_name.to_string() != *name)
        })
        .map(|name| ShortName::new(&name));
    match short_name {
        Some(Ok(short_name)) => Some(OneRepMaxEntry::new(
            OneRepMaxID::new(),
            short_name,
            Weight::new(100.0).ok()?,
            Reps::new(1).ok()?,
            RPE::TEN,
        )),
        Some(Err(err)) => {
            warn!("failed to add workout: {}", domain::Error::from(err));
            None
        }
        None => None,
    }
}
