use std::mem;

use log::{debug, warn};

use crate::state::{Action, Slice, State, derive, reduce};

/// Target for the actions emitted by components.
pub trait Dispatch {
    fn state(&self) -> &State;
    fn dispatch(&mut self, action: Action) -> Vec<Slice>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct SubscriptionID(usize);

struct Subscription {
    id: SubscriptionID,
    slice: Slice,
    callback: Box<dyn FnMut(&State)>,
}

/// Owner of the application state.
///
/// Every dispatched action is reduced and followed by a derive pass before subscribers of the
/// changed slices are notified.
pub struct Store {
    state: State,
    subscriptions: Vec<Subscription>,
    next_subscription_id: usize,
}

impl Store {
    #[must_use]
    pub fn new(mut state: State) -> Self {
        for error in derive(&mut state) {
            warn!("{error}");
        }
        Self {
            state,
            subscriptions: Vec::new(),
            next_subscription_id: 0,
        }
    }

    pub fn subscribe(
        &mut self,
        slice: Slice,
        callback: impl FnMut(&State) + 'static,
    ) -> SubscriptionID {
        let id = SubscriptionID(self.next_subscription_id);
        self.next_subscription_id += 1;
        self.subscriptions.push(Subscription {
            id,
            slice,
            callback: Box::new(callback),
        });
        id
    }

    pub fn unsubscribe(&mut self, id: SubscriptionID) {
        self.subscriptions.retain(|subscription| subscription.id != id);
    }
}

impl Default for Store {
    fn default() -> Self {
        Self::new(State::default())
    }
}

impl Dispatch for Store {
    fn state(&self) -> &State {
        &self.state
    }

    fn dispatch(&mut self, action: Action) -> Vec<Slice> {
        debug!("dispatch {action:?}");
        let previous = self.state.clone();
        let mut state = reduce(mem::take(&mut self.state), action);
        for error in derive(&mut state) {
            warn!("{error}");
        }
        self.state = state;

        let changed = Slice::changed(&previous, &self.state);
        for subscription in &mut self.subscriptions {
            if changed.contains(&subscription.slice) {
                (subscription.callback)(&self.state);
            }
        }
        changed
    }
}

#[cfg(test)]
mod tests {
    use std::{cell::RefCell, rc::Rc};

    use pretty_assertions::assert_eq;

    use liftmax_domain::{
        Name, OneRepMaxEntry, Percent, RPE, Reps, ShortName, Units, Variant, VariantField, Weight,
    };

    use super::*;
    use crate::state::Variants;

    fn store() -> Store {
        Store::new(State {
            one_rep_max: vec![OneRepMaxEntry::new(
                1.into(),
                ShortName::new("SQ").unwrap(),
                Weight::new(315.0).unwrap(),
                Reps::new(1).unwrap(),
                RPE::TEN,
            )],
            variants: Variants {
                is_active: false,
                list: vec![Variant::new(
                    1.into(),
                    Name::new("Pause Squat").unwrap(),
                    Some(ShortName::new("SQ").unwrap()),
                    Some(Percent::new(80).unwrap()),
                )],
            },
            units: Units::Pounds,
        })
    }

    fn record(store: &mut Store, slice: Slice) -> Rc<RefCell<Vec<State>>> {
        let calls = Rc::new(RefCell::new(vec![]));
        let c = calls.clone();
        store.subscribe(slice, move |state| c.borrow_mut().push(state.clone()));
        calls
    }

    #[test]
    fn test_store_new_derives() {
        assert_eq!(store().state().variants.list[0].one_rm, Some(252));
    }

    #[test]
    fn test_store_dispatch_notifies_changed_slices() {
        let mut store = store();
        let variants = record(&mut store, Slice::Variants);
        let units = record(&mut store, Slice::Units);

        let changed = store.dispatch(Action::ChangeVariant {
            id: 1.into(),
            field: VariantField::Percent(Percent::new(50).unwrap()),
        });

        assert_eq!(changed, vec![Slice::Variants]);
        assert_eq!(variants.borrow().len(), 1);
        assert_eq!(variants.borrow()[0].variants.list[0].one_rm, Some(158));
        assert!(units.borrow().is_empty());
    }

    #[test]
    fn test_store_dispatch_derived_change_notifies_variants() {
        let mut store = store();
        let one_rep_max = record(&mut store, Slice::OneRepMax);
        let variants = record(&mut store, Slice::Variants);

        store.dispatch(Action::RemoveWorkout(1.into()));

        assert_eq!(one_rep_max.borrow().len(), 1);
        assert_eq!(variants.borrow().len(), 1);
        assert_eq!(store.state().variants.list[0].one_rm, None);
    }

    #[test]
    fn test_store_dispatch_no_op() {
        let mut store = store();
        let variants = record(&mut store, Slice::Variants);
        let expected = store.state().clone();

        assert_eq!(store.dispatch(Action::RemoveVariant(9.into())), vec![]);

        assert_eq!(*store.state(), expected);
        assert!(variants.borrow().is_empty());
    }

    #[test]
    fn test_store_unsubscribe() {
        let mut store = store();
        let calls = Rc::new(RefCell::new(0));
        let c = calls.clone();
        let id = store.subscribe(Slice::Units, move |_| *c.borrow_mut() += 1);

        store.dispatch(Action::ToggleUnits);
        store.unsubscribe(id);
        store.dispatch(Action::ToggleUnits);

        assert_eq!(*calls.borrow(), 1);
        assert_eq!(store.state().units, Units::Pounds);
    }
}
