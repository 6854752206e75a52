//! Character detail modal.
//!
//! Opening the modal fetches at most the first five referenced episodes in a
//! single batched request; anything beyond that is summarized as a count.
//! An episode failure degrades to an inline notice, the facts stay visible.

use crate::app::api::ApiCtx;
use crate::components::status::{LoadingSpinner, SpinnerSize};
use crate::core::logic::{
    episode_batch_ids, gender_label_key, hidden_episode_count, species_tone, StatusKind,
};
use crate::i18n::{TranslationBundle, DEFAULT_LOCALE};
use crate::models::{Character, Episode};
use yew::platform::spawn_local;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub(crate) struct CharacterModalProps {
    #[prop_or_default]
    pub character: Option<Character>,
    #[prop_or(false)]
    pub open: bool,
    pub on_close: Callback<()>,
}

#[function_component(CharacterModal)]
pub(crate) fn character_modal(props: &CharacterModalProps) -> Html {
    let bundle = use_context::<TranslationBundle>()
        .unwrap_or_else(|| TranslationBundle::new(DEFAULT_LOCALE));
    let api = use_context::<ApiCtx>();
    let episodes = use_state(Vec::<Episode>::new);
    let loading = use_state(|| false);
    let error = use_state(|| None as Option<String>);

    {
        let episodes = episodes.clone();
        let loading = loading.clone();
        let error = error.clone();
        let bundle = bundle.clone();
        let api = api.clone();
        use_effect_with_deps(
            move |(character, open): &(Option<Character>, bool)| {
                episodes.set(Vec::new());
                error.set(None);
                match (character, api) {
                    (Some(character), Some(api)) if *open => {
                        loading.set(true);
                        let ids = episode_batch_ids(&character.episode);
                        spawn_local(async move {
                            match api.client.fetch_episodes(&ids).await {
                                Ok(batch) => episodes.set(batch),
                                Err(_) => error.set(Some(bundle.text(
                                    "detail.episodes_failed",
                                    "Could not load episodes",
                                ))),
                            }
                            loading.set(false);
                        });
                    }
                    _ => loading.set(false),
                }
                || ()
            },
            (props.character.clone(), props.open),
        );
    }

    let character = match &props.character {
        Some(character) if props.open => character.clone(),
        _ => return html! {},
    };
    let status = StatusKind::from_text(&character.status);
    let hidden = hidden_episode_count(character.episode.len());
    let close = {
        let on_close = props.on_close.clone();
        Callback::from(move |_| on_close.emit(()))
    };
    let close_backdrop = {
        let on_close = props.on_close.clone();
        Callback::from(move |_| on_close.emit(()))
    };

    html! {
        <div class="modal-backdrop" onclick={close_backdrop}>
            <div
                class={classes!("modal", "modal-open", species_tone(&character.species))}
                role="dialog"
                aria-modal="true"
                onclick={Callback::from(|event: MouseEvent| event.stop_propagation())}
            >
                <header class="modal-header">
                    <h2>{&character.name}</h2>
                    <button class="ghost" onclick={close} aria-label={bundle.text("detail.close", "Close")}>
                        {"×"}
                    </button>
                </header>
                <img src={character.image.clone()} alt={character.name.clone()} />
                <section class="modal-facts">
                    <h3>{bundle.text("detail.info", "Information")}</h3>
                    <dl>
                        <dt>{bundle.text("detail.status", "Status")}</dt>
                        <dd>
                            <span class={classes!("badge", status.badge_class())}>
                                {bundle.text(status.label_key(), &character.status)}
                            </span>
                        </dd>
                        <dt>{bundle.text("detail.species", "Species")}</dt>
                        <dd>{&character.species}</dd>
                        <dt>{bundle.text("detail.gender", "Gender")}</dt>
                        <dd>{bundle.text(gender_label_key(&character.gender), &character.gender)}</dd>
                        <dt>{bundle.text("detail.origin", "Origin")}</dt>
                        <dd>{&character.origin.name}</dd>
                    </dl>
                </section>
                <section class="modal-episodes">
                    <h3>
                        {format!(
                            "{} ({} {})",
                            bundle.text("detail.episodes", "Episodes"),
                            character.episode.len(),
                            bundle.text("detail.total", "total"),
                        )}
                    </h3>
                    {if *loading {
                        html! { <LoadingSpinner size={SpinnerSize::Small} /> }
                    } else if let Some(message) = &*error {
                        html! { <p class="error-text">{message.clone()}</p> }
                    } else {
                        html! {
                            <ul class="episode-list">
                                {for episodes.iter().map(|episode| html! {
                                    <li key={episode.id.to_string()}>
                                        <span class="episode-code">{&episode.episode}</span>
                                        <span>{&episode.name}</span>
                                    </li>
                                })}
                            </ul>
                        }
                    }}
                    {if hidden > 0 {
                        html! {
                            <p class="muted">
                                {format!(
                                    "{} {hidden} {}",
                                    bundle.text("detail.more_prefix", "... and"),
                                    bundle.text("detail.more_suffix", "more episodes"),
                                )}
                            </p>
                        }
                    } else {
                        html! {}
                    }}
                </section>
            </div>
        </div>
    }
}
