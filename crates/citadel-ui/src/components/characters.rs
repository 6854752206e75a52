//! Authenticated catalog view: filter bar, paged grid, and detail modal.
//!
//! Filter edits stay local until a search or clear fires; page turns and
//! applied filter changes drive the fetch effect. Each fetch bumps a
//! generation counter so a slow response for an older request can never
//! overwrite a newer one.

use crate::app::api::ApiCtx;
use crate::app::session::use_session;
use crate::components::card::CharacterCard;
use crate::components::detail::CharacterModal;
use crate::components::filters::FilterBar;
use crate::components::pagination::Pagination;
use crate::components::status::{EmptyState, ErrorPanel, LoadingSpinner};
use crate::core::error::ApiError;
use crate::core::logic::Filters;
use crate::i18n::{TranslationBundle, DEFAULT_LOCALE};
use crate::models::Character;
use yew::platform::spawn_local;
use yew::prelude::*;

#[function_component(CharactersPage)]
pub(crate) fn characters_page() -> Html {
    let bundle = use_context::<TranslationBundle>()
        .unwrap_or_else(|| TranslationBundle::new(DEFAULT_LOCALE));
    let api = use_context::<ApiCtx>();
    let session = use_session();

    let page = use_state(|| 1u32);
    let draft = use_state(Filters::default);
    let applied = use_state(Filters::default);
    let refresh = use_state(|| 0u32);
    let characters = use_state(Vec::<Character>::new);
    let total_pages = use_state(|| 0u32);
    let loading = use_state(|| true);
    let error = use_state(|| None as Option<String>);
    let notice = use_state(|| None as Option<String>);
    let selected = use_state(|| None as Option<Character>);
    let modal_open = use_state(|| false);
    // Monotonic request id, only the newest in-flight fetch may land.
    let generation = use_mut_ref(|| 0u64);

    {
        let characters = characters.clone();
        let total_pages = total_pages.clone();
        let loading = loading.clone();
        let error = error.clone();
        let notice = notice.clone();
        let bundle = bundle.clone();
        let api = api.clone();
        let generation = generation.clone();
        use_effect_with_deps(
            move |(page, applied, _refresh): &(u32, Filters, u32)| {
                let Some(api) = api else {
                    return Box::new(|| ()) as Box<dyn FnOnce()>;
                };
                let request = {
                    let mut counter = generation.borrow_mut();
                    *counter += 1;
                    *counter
                };
                loading.set(true);
                error.set(None);
                notice.set(None);
                let page = *page;
                let applied = applied.clone();
                spawn_local(async move {
                    let outcome = api.client.fetch_characters(page, &applied).await;
                    if *generation.borrow() != request {
                        return;
                    }
                    match outcome {
                        Ok(batch) => {
                            characters.set(batch.results);
                            total_pages.set(batch.info.pages);
                        }
                        Err(ApiError::NotFound) => {
                            characters.set(Vec::new());
                            total_pages.set(0);
                            notice.set(Some(bundle.text(
                                "list.not_found",
                                "No characters matched your filters",
                            )));
                        }
                        Err(ApiError::Status(status)) => {
                            characters.set(Vec::new());
                            total_pages.set(0);
                            error.set(Some(format!(
                                "{} (HTTP {status})",
                                bundle.text("list.load_failed", "Could not load characters"),
                            )));
                        }
                        Err(ApiError::Network | ApiError::Decode) => {
                            characters.set(Vec::new());
                            total_pages.set(0);
                            error.set(Some(bundle.text(
                                "list.load_error",
                                "Could not reach the character service",
                            )));
                        }
                    }
                    loading.set(false);
                });
                Box::new(|| ()) as Box<dyn FnOnce()>
            },
            (*page, (*applied).clone(), *refresh),
        );
    }

    let on_filters_change = {
        let draft = draft.clone();
        Callback::from(move |next: Filters| draft.set(next))
    };
    let on_search = {
        let draft = draft.clone();
        let applied = applied.clone();
        let page = page.clone();
        let refresh = refresh.clone();
        Callback::from(move |_| {
            applied.set((*draft).clone());
            page.set(1);
            refresh.set(*refresh + 1);
        })
    };
    let on_clear = {
        let draft = draft.clone();
        let applied = applied.clone();
        let page = page.clone();
        let refresh = refresh.clone();
        Callback::from(move |_| {
            draft.set(Filters::default());
            applied.set(Filters::default());
            page.set(1);
            refresh.set(*refresh + 1);
        })
    };
    let on_retry = {
        let refresh = refresh.clone();
        Callback::from(move |_| refresh.set(*refresh + 1))
    };
    let on_page = {
        let page = page.clone();
        Callback::from(move |next: u32| page.set(next))
    };
    let on_select = {
        let selected = selected.clone();
        let modal_open = modal_open.clone();
        Callback::from(move |character: Character| {
            selected.set(Some(character));
            modal_open.set(true);
        })
    };
    let on_close = {
        let modal_open = modal_open.clone();
        Callback::from(move |_| modal_open.set(false))
    };
    let on_logout = {
        let session = session.clone();
        Callback::from(move |_| session.logout())
    };

    let body = if *loading {
        html! { <LoadingSpinner /> }
    } else if let Some(message) = &*error {
        html! { <ErrorPanel message={message.clone()} {on_retry} /> }
    } else if characters.is_empty() {
        let message = notice
            .as_ref()
            .cloned()
            .unwrap_or_else(|| bundle.text("list.empty", "No characters to show"));
        html! { <EmptyState {message} on_clear={on_clear.clone()} /> }
    } else {
        html! {
            <>
                <div class="character-grid">
                    {for characters.iter().map(|character| html! {
                        <CharacterCard
                            key={character.id.to_string()}
                            character={character.clone()}
                            on_select={on_select.clone()}
                        />
                    })}
                </div>
                <Pagination current={*page} total={*total_pages} on_change={on_page} />
            </>
        }
    };

    html! {
        <div class="characters-screen">
            <header class="screen-header">
                <h1>{bundle.text("list.title", "Character Catalog")}</h1>
                <button class="ghost" onclick={on_logout}>
                    {bundle.text("list.logout", "Log out")}
                </button>
            </header>
            <FilterBar
                draft={(*draft).clone()}
                busy={*loading}
                on_change={on_filters_change}
                on_search={on_search}
                on_clear={on_clear}
            />
            {body}
            <CharacterModal
                character={(*selected).clone()}
                open={*modal_open}
                on_close={on_close}
            />
        </div>
    }
}
