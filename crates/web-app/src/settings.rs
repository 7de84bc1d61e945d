use std::cell::RefCell;

use liftmax_domain::Units;

pub trait SettingsRepository {
    fn read_settings(&self) -> Result<Settings, Error>;
    fn write_settings(&self, settings: Settings) -> Result<(), Error>;
}

#[derive(serde::Serialize, serde::Deserialize, Debug, Default, Clone, Copy, PartialEq)]
pub struct Settings {
    #[serde(default)]
    pub units: Units,
}

#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Serialization(#[from] serde_json::Error),
    #[error("{0}")]
    Unknown(String),
}

/// Keeps the serialized settings in memory, the way a browser's local storage keeps them under
/// a single key.
#[derive(Default)]
pub struct MemorySettings {
    value: RefCell<Option<String>>,
}

impl MemorySettings {
    #[must_use]
    pub fn new(value: Option<String>) -> Self {
        Self {
            value: RefCell::new(value),
        }
    }

    #[must_use]
    pub fn raw(&self) -> Option<String> {
        self.value.borrow().clone()
    }
}

impl SettingsRepository for MemorySettings {
    fn read_settings(&self) -> Result<Settings, Error> {
        match self.value.borrow().as_deref() {
            Some(value) => Ok(serde_json::from_str(value)?),
            None => Ok(Settings::default()),
        }
    }

    fn write_settings(&self, settings: Settings) -> Result<(), Error> {
        let value = serde_json::to_string(&settings)?;
        self.value
            .try_borrow_mut()
            .map_err(|err| Error::Unknown(err.to_string()))?
            .replace(value);
        Ok(())
    }
}
