use log::{debug, warn};

use liftmax_domain::{
    self as domain, Name, Percent, ShortName, UNSET, Variant, VariantID, lift_name_choices,
    parse_choice, percentage_choices,
};

use crate::{
    component::select::{Select, SelectKind, choice_item},
    state::{Action, State},
    store::Dispatch,
};

// ------ ------
//     Init
// ------ ------

#[must_use]
pub fn init() -> Model {
    Model {
        name: (String::new(), None),
        main: (UNSET.to_string(), None),
        percent: (UNSET.to_string(), None),
    }
}

// ------ ------
//     Model
// ------ ------

/// Local state of the form for creating a variant. Each field keeps the raw input next to the
/// parsed value.
#[derive(Debug, Clone, PartialEq)]
pub struct Model {
    name: (String, Option<Name>),
    main: (String, Option<ShortName>),
    percent: (String, Option<Percent>),
}

impl Model {
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.name.1.is_some()
    }
}

// ------ ------
//    Update
// ------ ------

#[derive(Debug, Clone, PartialEq)]
pub enum Msg {
    NameChanged(String),
    MainSelected(String),
    PercentSelected(String),
    Save,
    Cancel,
}

pub fn update(msg: Msg, model: &mut Model, store: &mut impl Dispatch) {
    match msg {
        Msg::NameChanged(name) => {
            let parsed_name = Name::new(&name).ok();
            model.name = (name, parsed_name);
        }
        Msg::MainSelected(main) => match parse_choice::<ShortName, _>(&main) {
            Ok(parsed_main) => model.main = (main, parsed_main),
            Err(err) => warn!("main: {}", domain::Error::from(err)),
        },
        Msg::PercentSelected(percent) => match parse_choice::<Percent, _>(&percent) {
            Ok(parsed_percent) => model.percent = (percent, parsed_percent),
            Err(err) => warn!("percent: {}", domain::Error::from(err)),
        },
        Msg::Save => {
            if !store.state().variants.is_active {
                debug!("ignore saving of new variant: form not open");
                return;
            }
            let Some(name) = model.name.1.clone() else {
                warn!("{}", domain::Error::InvalidInput(format!("name {:?}", model.name.0)));
                return;
            };
            store.dispatch(Action::AddVariant(Variant::new(
                VariantID::new(),
                name,
                model.main.1.clone(),
                model.percent.1,
            )));
            store.dispatch(Action::SetActiveFalse);
            *model = init();
        }
        Msg::Cancel => {
            store.dispatch(Action::SetActiveFalse);
            *model = init();
        }
    }
}

// ------ ------
//     View
// ------ ------

#[derive(Debug, Clone, PartialEq)]
pub struct NewVariant {
    pub name: String,
    pub name_is_valid: bool,
    pub main: Select,
    pub percent: Select,
    pub save_enabled: bool,
}

#[must_use]
pub fn view(model: &Model, state: &State) -> NewVariant {
    NewVariant {
        name: model.name.0.clone(),
        name_is_valid: model.name.1.is_some(),
        main: Select::new(
            "main",
            &SelectKind::Custom(lift_name_choices(&state.one_rep_max).map(choice_item).collect()),
            state.units,
            model.main.0.clone(),
        ),
        percent: Select::new(
            "percent",
            &SelectKind::Custom(percentage_choices().map(choice_item).collect()),
            state.units,
            model.percent.0.clone(),
        ),
        save_enabled: model.is_valid(),
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use liftmax_domain::{OneRepMaxEntry, RPE, Reps, Weight};

    use super::*;
    use crate::store::Store;

    fn store() -> Store {
        let mut store = Store::new(State {
            one_rep_max: vec![OneRepMaxEntry::new(
                1.into(),
                ShortName::new("DL").unwrap(),
                Weight::new(405.0).unwrap(),
                Reps::new(1).unwrap(),
                RPE::TEN,
            )],
            ..State::default()
        });
        store.dispatch(Action::SetActiveTrue);
        store
    }

    #[test]
    fn test_save() {
        let mut store = store();
        let mut model = init();

        update(Msg::NameChanged("Deficit Deadlift".to_string()), &mut model, &mut store);
        update(Msg::MainSelected("DL".to_string()), &mut model, &mut store);
        update(Msg::PercentSelected("90".to_string()), &mut model, &mut store);
        assert!(view(&model, store.state()).save_enabled);

        update(Msg::Save, &mut model, &mut store);

        let variants = &store.state().variants;
        assert!(!variants.is_active);
        assert_eq!(variants.list.len(), 1);
        assert_eq!(variants.list[0].name.to_string(), "Deficit Deadlift");
        assert_eq!(variants.list[0].one_rm, Some(365));
        assert_eq!(model, init());
    }

    #[test]
    fn test_save_with_unset_percent() {
        let mut store = store();
        let mut model = init();

        update(Msg::NameChanged("Block Pull".to_string()), &mut model, &mut store);
        update(Msg::MainSelected("DL".to_string()), &mut model, &mut store);
        update(Msg::PercentSelected("-".to_string()), &mut model, &mut store);
        update(Msg::Save, &mut model, &mut store);

        let variant = &store.state().variants.list[0];
        assert_eq!(variant.percent, None);
        assert_eq!(variant.one_rm, None);
    }

    #[test]
    fn test_save_without_name() {
        let mut store = store();
        let mut model = init();

        update(Msg::NameChanged("   ".to_string()), &mut model, &mut store);
        let view = view(&model, store.state());
        assert!(!view.name_is_valid);
        assert!(!view.save_enabled);

        update(Msg::Save, &mut model, &mut store);

        assert!(store.state().variants.is_active);
        assert!(store.state().variants.list.is_empty());
    }

    #[test]
    fn test_save_when_form_closed() {
        let mut store = store();
        store.dispatch(Action::SetActiveFalse);
        let mut model = init();

        update(Msg::NameChanged("Snatch Grip".to_string()), &mut model, &mut store);
        update(Msg::Save, &mut model, &mut store);

        assert!(store.state().variants.list.is_empty());
    }

    #[test]
    fn test_invalid_percent_keeps_previous_value() {
        let mut store = store();
        let mut model = init();

        update(Msg::PercentSelected("75".to_string()), &mut model, &mut store);
        update(Msg::PercentSelected("750".to_string()), &mut model, &mut store);

        assert_eq!(view(&model, store.state()).percent.selected, "75");
    }

    #[test]
    fn test_cancel() {
        let mut store = store();
        let mut model = init();

        update(Msg::NameChanged("Pin Pull".to_string()), &mut model, &mut store);
        update(Msg::Cancel, &mut model, &mut store);

        assert!(!store.state().variants.is_active);
        assert!(store.state().variants.list.is_empty());
        assert_eq!(model, init());
    }

    #[test]
    fn test_view() {
        let store = store();
        let view = view(&init(), store.state());

        assert_eq!(view.name, "");
        assert_eq!(view.main.selected, "-");
        assert_eq!(
            view.main
                .items
                .iter()
                .map(|item| item.value.as_str())
                .collect::<Vec<_>>(),
            vec!["-", "DL"]
        );
        assert_eq!(view.percent.selected_text(), Some("-"));
    }
}
