//! Terminal dialog toolkit.
//!
//! A modal dialog controller that keeps an imperative overlay surface in
//! sync with host-owned open state, plus the theme/auth context and the
//! demo host application built around it.

pub mod args;
pub mod config;
pub mod context;
pub mod logging;
pub mod surface;
pub mod ui;
