//! Routing definitions for the Citadel UI.
use yew_router::prelude::*;

/// Top-level routes.
#[derive(Clone, Routable, PartialEq, Eq, Debug)]
pub(crate) enum Route {
    /// Authenticated character catalog.
    #[at("/")]
    Home,
    /// Demo login form.
    #[at("/login")]
    Login,
    /// Fallback for unknown paths.
    #[not_found]
    #[at("/404")]
    NotFound,
}
