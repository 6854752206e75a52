//! Character summary card for the catalog grid.

use crate::core::logic::{species_tone, StatusKind};
use crate::i18n::{TranslationBundle, DEFAULT_LOCALE};
use crate::models::Character;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub(crate) struct CharacterCardProps {
    pub character: Character,
    pub on_select: Callback<Character>,
}

#[function_component(CharacterCard)]
pub(crate) fn character_card(props: &CharacterCardProps) -> Html {
    let bundle = use_context::<TranslationBundle>()
        .unwrap_or_else(|| TranslationBundle::new(DEFAULT_LOCALE));
    let character = &props.character;
    let status = StatusKind::from_text(&character.status);
    let onclick = {
        let character = character.clone();
        let on_select = props.on_select.clone();
        Callback::from(move |_| on_select.emit(character.clone()))
    };

    html! {
        <button class={classes!("character-card", species_tone(&character.species))} {onclick}>
            <img src={character.image.clone()} alt={character.name.clone()} loading="lazy" />
            <div class="character-card-body">
                <h3>{&character.name}</h3>
                <p class="muted">{&character.species}</p>
                <span class={classes!("badge", status.badge_class())}>
                    {bundle.text(status.label_key(), &character.status)}
                </span>
            </div>
        </button>
    }
}
