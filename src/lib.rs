//! Terminal client for browsing fighters by universe.
//!
//! - [`model`]: catalog entities and the universe filter
//! - [`api`]: HTTP catalog client and the background fetch worker
//! - [`ui`]: MVI stores, the home screen view-model and the ratatui front end
//! - [`config`]: TOML configuration

pub mod api;
pub mod config;
pub mod logging;
pub mod model;
pub mod shutdown;
pub mod ui;
