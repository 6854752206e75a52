//! Application shell: context bootstrap, routing, and the route guard.

use crate::app::api::ApiCtx;
use crate::app::preferences::detect_locale;
use crate::app::session::{restore_session, use_session, SessionCtx};
use crate::components::characters::CharactersPage;
use crate::components::login::LoginPage;
use crate::i18n::{TranslationBundle, DEFAULT_LOCALE};
use crate::services::api::API_BASE_URL;
pub(crate) use routes::Route;
use yew::prelude::*;
use yew_router::prelude::*;

pub(crate) mod api;
mod preferences;
mod routes;
pub(crate) mod session;

#[function_component(CitadelApp)]
pub(crate) fn citadel_app() -> Html {
    let session = use_state(restore_session);
    let session_ctx = SessionCtx::new(session.clone());
    let api_ctx = use_memo(|_| ApiCtx::new(API_BASE_URL), ());
    let bundle = use_memo(|_| TranslationBundle::new(detect_locale()), ());

    html! {
        <ContextProvider<SessionCtx> context={session_ctx}>
            <ContextProvider<ApiCtx> context={(*api_ctx).clone()}>
                <ContextProvider<TranslationBundle> context={(*bundle).clone()}>
                    <BrowserRouter>
                        <Switch<Route> render={switch} />
                    </BrowserRouter>
                </ContextProvider<TranslationBundle>>
            </ContextProvider<ApiCtx>>
        </ContextProvider<SessionCtx>>
    }
}

fn switch(route: Route) -> Html {
    match route {
        Route::Home => html! { <Guarded><CharactersPage /></Guarded> },
        Route::Login => html! { <LoginPage /> },
        Route::NotFound => html! { <NotFoundPage /> },
    }
}

#[derive(Properties, PartialEq)]
struct GuardedProps {
    #[prop_or_default]
    children: Children,
}

/// Route guard: unauthenticated visitors are sent to the login view before
/// any gated content renders.
#[function_component(Guarded)]
fn guarded(props: &GuardedProps) -> Html {
    let session = use_session();
    if session.authenticated() {
        html! { <>{ for props.children.iter() }</> }
    } else {
        html! { <Redirect<Route> to={Route::Login} /> }
    }
}

#[function_component(NotFoundPage)]
fn not_found_page() -> Html {
    let bundle = use_context::<TranslationBundle>()
        .unwrap_or_else(|| TranslationBundle::new(DEFAULT_LOCALE));
    html! {
        <div class="placeholder">
            <h2>{bundle.text("notfound.title", "Not found")}</h2>
            <p class="muted">{bundle.text("notfound.body", "")}</p>
        </div>
    }
}

/// Entrypoint invoked by Trunk for wasm32 builds.
pub fn run_app() {
    console_error_panic_hook::set_once();
    if let Some(root) = gloo::utils::document().get_element_by_id("root") {
        yew::Renderer::<CitadelApp>::with_root(root).render();
    } else {
        yew::Renderer::<CitadelApp>::new().render();
    }
}
