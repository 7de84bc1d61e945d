use log::{debug, error};

use crate::{
    settings::{Settings, SettingsRepository},
    state::{Action, Slice, State},
    store::{Dispatch, Store},
};

/// Store whose units are loaded from and persisted to the settings.
pub struct App<R> {
    store: Store,
    settings: R,
}

impl<R: SettingsRepository> App<R> {
    pub fn new(settings: R, mut state: State) -> Self {
        match settings.read_settings() {
            Ok(Settings { units }) => state.units = units,
            Err(err) => error!("failed to read settings: {err}"),
        }
        Self {
            store: Store::new(state),
            settings,
        }
    }

    pub fn store_mut(&mut self) -> &mut Store {
        &mut self.store
    }

    pub fn settings(&self) -> &R {
        &self.settings
    }
}

impl<R: SettingsRepository> Dispatch for App<R> {
    fn state(&self) -> &State {
        self.store.state()
    }

    fn dispatch(&mut self, action: Action) -> Vec<Slice> {
        let changed = self.store.dispatch(action);
        if changed.contains(&Slice::Units) {
            let settings = Settings {
                units: self.store.state().units,
            };
            match self.settings.write_settings(settings) {
                Ok(()) => debug!("units changed to {}", settings.units),
                Err(err) => error!("failed to write settings: {err}"),
            }
        }
        changed
    }
}
