//! Authenticated-user context.
//!
//! The identity provider lives outside this crate; it reports its result
//! through [`AuthIntent::Resolved`] and the reducer derives the context.

use crate::ui::mvi::{Intent, Reducer, UiState};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub id: String,
    pub email: String,
}

impl User {
    /// Build a user whose id is derived from the email's local part.
    pub fn from_email(email: impl Into<String>) -> Self {
        let email = email.into();
        let id = email.split('@').next().unwrap_or_default().to_string();
        Self { id, email }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum AuthContext {
    #[default]
    Loading,
    SignedIn(User),
    SignedOut,
}

impl UiState for AuthContext {}

impl AuthContext {
    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }

    pub fn user(&self) -> Option<&User> {
        match self {
            Self::SignedIn(user) => Some(user),
            _ => None,
        }
    }
}

#[derive(Debug, Clone)]
pub enum AuthIntent {
    /// The provider reported its current user (`None` when signed out).
    Resolved(Option<User>),
    SignOut,
}

impl Intent for AuthIntent {}

pub struct AuthReducer;

impl Reducer for AuthReducer {
    type State = AuthContext;
    type Intent = AuthIntent;

    fn reduce(_state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            AuthIntent::Resolved(Some(user)) => {
                tracing::debug!(user = %user.id, "user signed in");
                AuthContext::SignedIn(user)
            }
            AuthIntent::Resolved(None) | AuthIntent::SignOut => {
                tracing::info!("user is signed out");
                AuthContext::SignedOut
            }
        }
    }
}
