//! Previous/next pager with a page position readout.

use crate::core::logic::clamp_page;
use crate::i18n::{TranslationBundle, DEFAULT_LOCALE};
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub(crate) struct PaginationProps {
    #[prop_or(1)]
    pub current: u32,
    #[prop_or(1)]
    pub total: u32,
    pub on_change: Callback<u32>,
}

#[function_component(Pagination)]
pub(crate) fn pagination(props: &PaginationProps) -> Html {
    let bundle = use_context::<TranslationBundle>()
        .unwrap_or_else(|| TranslationBundle::new(DEFAULT_LOCALE));
    let current = clamp_page(props.current, props.total);
    let total = props.total.max(1);

    let prev = {
        let on_change = props.on_change.clone();
        Callback::from(move |_| {
            if current > 1 {
                on_change.emit(current - 1);
            }
        })
    };
    let next = {
        let on_change = props.on_change.clone();
        Callback::from(move |_| {
            if current < total {
                on_change.emit(current + 1);
            }
        })
    };

    html! {
        <nav class="pagination" aria-label="pagination">
            <button class="ghost" disabled={current <= 1} onclick={prev}>{"‹"}</button>
            <span class="muted">
                {format!("{} {current} / {total}", bundle.text("list.page", "Page"))}
            </span>
            <button class="ghost" disabled={current >= total} onclick={next}>{"›"}</button>
        </nav>
    }
}
