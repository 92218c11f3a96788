//! Terminal front end for the lounge navigation model.
//!
//! `lounge-core` owns the behavioral contract (selection, focus flags,
//! the leftward escape); this crate maps terminal keys onto that model
//! and renders what it reads back.

pub mod app;
pub mod event;
pub mod terminal;
pub mod theme;
pub mod ui;

// Re-export commonly used types
pub use app::App;
pub use theme::Theme;
