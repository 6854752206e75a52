//! Loading, error, and empty-state panels shared by the catalog views.

use crate::i18n::{TranslationBundle, DEFAULT_LOCALE};
use yew::prelude::*;

/// Spinner footprint: small for inline sections, large for whole views.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum SpinnerSize {
    Small,
    Large,
}

#[derive(Properties, PartialEq)]
pub(crate) struct LoadingSpinnerProps {
    #[prop_or(SpinnerSize::Large)]
    pub size: SpinnerSize,
}

#[function_component(LoadingSpinner)]
pub(crate) fn loading_spinner(props: &LoadingSpinnerProps) -> Html {
    let bundle = use_context::<TranslationBundle>()
        .unwrap_or_else(|| TranslationBundle::new(DEFAULT_LOCALE));
    let (spinner_class, label_key) = match props.size {
        SpinnerSize::Small => ("spinner spinner-sm", "loading.generic"),
        SpinnerSize::Large => ("spinner spinner-lg", "loading.characters"),
    };
    html! {
        <div class="spinner-wrap" role="status" aria-live="polite">
            <div class={spinner_class}></div>
            <div class="muted">{bundle.text(label_key, "Loading...")}</div>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub(crate) struct ErrorPanelProps {
    pub message: String,
    pub on_retry: Callback<()>,
}

/// Retryable failure panel for the list view.
#[function_component(ErrorPanel)]
pub(crate) fn error_panel(props: &ErrorPanelProps) -> Html {
    let bundle = use_context::<TranslationBundle>()
        .unwrap_or_else(|| TranslationBundle::new(DEFAULT_LOCALE));
    let retry = {
        let on_retry = props.on_retry.clone();
        Callback::from(move |_| on_retry.emit(()))
    };
    html! {
        <div class="error-panel card" role="alert">
            <h3>{bundle.text("error.title", "Oops! Something went wrong")}</h3>
            <p class="muted">{&props.message}</p>
            <button class="solid" onclick={retry}>{bundle.text("error.retry", "Try again")}</button>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub(crate) struct EmptyStateProps {
    pub message: String,
    pub on_clear: Callback<()>,
}

/// Zero-result panel with a shortcut back to the unfiltered list.
#[function_component(EmptyState)]
pub(crate) fn empty_state(props: &EmptyStateProps) -> Html {
    let bundle = use_context::<TranslationBundle>()
        .unwrap_or_else(|| TranslationBundle::new(DEFAULT_LOCALE));
    let clear = {
        let on_clear = props.on_clear.clone();
        Callback::from(move |_| on_clear.emit(()))
    };
    html! {
        <div class="empty-state">
            <p class="muted">{&props.message}</p>
            <button class="ghost" onclick={clear}>{bundle.text("list.clear", "Clear filters")}</button>
        </div>
    }
}
