//! Demo login form.
//!
//! Validates against the single hardcoded credential pair; a mismatch stays
//! on the form with an inline error naming the expected test credentials.
//! Authenticated visitors are redirected away without rendering the form.

use crate::app::session::use_session;
use crate::app::Route;
use crate::core::session::verify_credentials;
use crate::i18n::{TranslationBundle, DEFAULT_LOCALE};
use yew::prelude::*;
use yew_router::prelude::*;

#[function_component(LoginPage)]
pub(crate) fn login_page() -> Html {
    let bundle = use_context::<TranslationBundle>()
        .unwrap_or_else(|| TranslationBundle::new(DEFAULT_LOCALE));
    let session = use_session();
    let username = use_state(String::new);
    let password = use_state(String::new);
    let error = use_state(|| None as Option<String>);
    let busy = use_state(|| false);

    // Idempotent guard: an authenticated session never sees the form.
    if session.authenticated() {
        return html! { <Redirect<Route> to={Route::Home} /> };
    }

    let on_username = {
        let username = username.clone();
        Callback::from(move |event: InputEvent| {
            if let Some(input) = event.target_dyn_into::<web_sys::HtmlInputElement>() {
                username.set(input.value());
            }
        })
    };
    let on_password = {
        let password = password.clone();
        Callback::from(move |event: InputEvent| {
            if let Some(input) = event.target_dyn_into::<web_sys::HtmlInputElement>() {
                password.set(input.value());
            }
        })
    };
    let onsubmit = {
        let username = username.clone();
        let password = password.clone();
        let error = error.clone();
        let busy = busy.clone();
        let session = session.clone();
        let bundle = bundle.clone();
        Callback::from(move |event: SubmitEvent| {
            event.prevent_default();
            busy.set(true);
            error.set(None);
            if verify_credentials(username.as_str(), password.as_str()) {
                session.login(username.as_str());
            } else {
                error.set(Some(bundle.text(
                    "login.error_invalid",
                    "Invalid username or password. Use: admin / password",
                )));
            }
            busy.set(false);
        })
    };

    html! {
        <div class="login-screen">
            <div class="card login-card">
                <header>
                    <h2>{bundle.text("login.title", "Sign in")}</h2>
                    <p class="muted">{bundle.text("login.subtitle", "")}</p>
                </header>
                <form {onsubmit}>
                    <label class="stack">
                        <span>{bundle.text("login.username", "Username")}</span>
                        <input
                            type="text"
                            placeholder={bundle.text("login.username_placeholder", "")}
                            value={(*username).clone()}
                            oninput={on_username}
                            required={true}
                        />
                    </label>
                    <label class="stack">
                        <span>{bundle.text("login.password", "Password")}</span>
                        <input
                            type="password"
                            placeholder={bundle.text("login.password_placeholder", "")}
                            value={(*password).clone()}
                            oninput={on_password}
                            required={true}
                        />
                    </label>
                    {if let Some(message) = &*error {
                        html! { <p class="error-text" role="alert">{message.clone()}</p> }
                    } else {
                        html! {}
                    }}
                    <button type="submit" class="solid" disabled={*busy}>
                        {if *busy {
                            bundle.text("login.submitting", "Signing in...")
                        } else {
                            bundle.text("login.submit", "Sign in")
                        }}
                    </button>
                </form>
                <div class="hint">
                    <strong>{bundle.text("login.hint_title", "Test credentials:")}</strong>
                    <p>{bundle.text("login.hint_user", "Username: admin")}</p>
                    <p>{bundle.text("login.hint_pass", "Password: password")}</p>
                </div>
            </div>
        </div>
    }
}
