pub mod app;
pub mod dialog;
pub mod events;
pub mod footer;
pub mod header;
pub mod home;
pub mod host;
pub mod input;
pub mod layout;
pub mod mvi;
pub mod render;
pub mod runtime;
pub mod terminal_guard;
pub mod theme;

pub use runtime::run;
