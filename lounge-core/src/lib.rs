//! Navigation and focus model for the lounge terminal UI.

pub mod catalog;
pub mod config;
pub mod error;
pub mod escape;
pub mod focus;
pub mod nav;
pub mod screen;

pub use catalog::{Catalog, CatalogItem};
pub use config::LoungeConfig;
pub use error::{LoungeError, Result};
pub use escape::{Direction, EscapeRule, ExitTarget};
pub use focus::{FocusHandle, FocusOwner, FocusRegistry};
pub use nav::NavEntry;
pub use screen::{ContentView, Region, RowId, Screen};
