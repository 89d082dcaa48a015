//! Remote catalog access.
//!
//! [`CatalogApi`] is the seam between the UI and the network: the UI only
//! ever talks to a [`FetchWorker`] through [`FetchCommand`]s, and the worker
//! reports results back as [`AppEvent`](crate::ui::events::AppEvent)s.

mod client;
mod error;
mod worker;

pub use client::{ApiFuture, CatalogApi, HttpCatalogApi};
pub use error::ApiError;
pub use worker::{FetchCommand, FetchCommandSender, FetchWorker};
