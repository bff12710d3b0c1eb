//! Application context passed explicitly down the render tree.
//!
//! Theme and auth state have a clear lifetime: the host creates the
//! context at startup and owns it until shutdown. Widgets receive it by
//! reference; nothing reads it from a global.

mod auth;
mod theme;

pub use auth::{AuthContext, AuthIntent, AuthReducer, User};
pub use theme::{ThemeContext, ThemeMode};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AppContext {
    pub theme: ThemeContext,
    pub auth: AuthContext,
}

impl AppContext {
    pub fn new(theme: ThemeContext, auth: AuthContext) -> Self {
        Self { theme, auth }
    }
}
