pub mod app;
pub mod events;
pub mod fighters;
pub mod footer;
pub mod header;
pub mod home;
pub mod input;
pub mod layout;
pub mod mvi;
pub mod navigation;
pub mod render;
pub mod runtime;
pub mod terminal_guard;
pub mod theme;
pub mod universes;
