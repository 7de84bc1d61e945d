#![warn(clippy::pedantic)]
#![allow(clippy::missing_errors_doc)]

pub mod app;
pub mod component;
pub mod log;
pub mod settings;
pub mod state;
pub mod store;

pub use app::App;
pub use settings::{MemorySettings, Settings, SettingsRepository};
pub use state::{Action, Slice, State, Variants};
pub use store::{Dispatch, Store, SubscriptionID};
