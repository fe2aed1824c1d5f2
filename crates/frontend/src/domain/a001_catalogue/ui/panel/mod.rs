//! Catalogue Panel UI Module
//!
//! Simplified MVVM pattern implementation:
//! - state.rs: owned panel state (cache, paging, edit mode, form), no signals
//! - commands.rs: async flows over `CatalogueApi`
//! - view_model.rs: signals + spawn_local wiring, notifications
//! - view.rs: Leptos component (pure UI)

pub mod commands;
pub mod state;
mod view;
mod view_model;

pub use view::CataloguePanel;
pub use view_model::CataloguePanelViewModel;
