//! Filter bar: name search plus status and species selects.
//!
//! The bar edits a draft filter set; nothing is fetched until the caller's
//! search or clear intent fires. Enter in the name field is a search.

use crate::core::logic::{Filters, SPECIES_OPTIONS, STATUS_OPTIONS};
use crate::i18n::{TranslationBundle, DEFAULT_LOCALE};
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub(crate) struct FilterBarProps {
    pub draft: Filters,
    pub busy: bool,
    pub on_change: Callback<Filters>,
    pub on_search: Callback<()>,
    pub on_clear: Callback<()>,
}

#[function_component(FilterBar)]
pub(crate) fn filter_bar(props: &FilterBarProps) -> Html {
    let bundle = use_context::<TranslationBundle>()
        .unwrap_or_else(|| TranslationBundle::new(DEFAULT_LOCALE));

    let on_name = {
        let draft = props.draft.clone();
        let on_change = props.on_change.clone();
        Callback::from(move |event: InputEvent| {
            if let Some(input) = event.target_dyn_into::<web_sys::HtmlInputElement>() {
                on_change.emit(Filters {
                    name: input.value(),
                    ..draft.clone()
                });
            }
        })
    };
    let on_name_key = {
        let on_search = props.on_search.clone();
        Callback::from(move |event: KeyboardEvent| {
            if event.key() == "Enter" {
                on_search.emit(());
            }
        })
    };
    let on_status = {
        let draft = props.draft.clone();
        let on_change = props.on_change.clone();
        Callback::from(move |event: Event| {
            if let Some(select) = event.target_dyn_into::<web_sys::HtmlSelectElement>() {
                on_change.emit(Filters {
                    status: select.value(),
                    ..draft.clone()
                });
            }
        })
    };
    let on_species = {
        let draft = props.draft.clone();
        let on_change = props.on_change.clone();
        Callback::from(move |event: Event| {
            if let Some(select) = event.target_dyn_into::<web_sys::HtmlSelectElement>() {
                on_change.emit(Filters {
                    species: select.value(),
                    ..draft.clone()
                });
            }
        })
    };
    let search = {
        let on_search = props.on_search.clone();
        Callback::from(move |_| on_search.emit(()))
    };
    let clear = {
        let on_clear = props.on_clear.clone();
        Callback::from(move |_| on_clear.emit(()))
    };

    html! {
        <div class="filter-bar card">
            <label class="stack">
                <span>{bundle.text("filters.name", "Name")}</span>
                <input
                    type="text"
                    placeholder={bundle.text("filters.name_placeholder", "")}
                    value={props.draft.name.clone()}
                    oninput={on_name}
                    onkeydown={on_name_key}
                />
            </label>
            <label class="stack">
                <span>{bundle.text("filters.status", "Status")}</span>
                <select onchange={on_status}>
                    <option value="" selected={props.draft.status.is_empty()}>
                        {bundle.text("filters.status_any", "All statuses")}
                    </option>
                    {for STATUS_OPTIONS.iter().map(|(value, label_key)| html! {
                        <option value={*value} selected={props.draft.status == *value}>
                            {bundle.text(label_key, value)}
                        </option>
                    })}
                </select>
            </label>
            <label class="stack">
                <span>{bundle.text("filters.species", "Species")}</span>
                <select onchange={on_species}>
                    <option value="" selected={props.draft.species.is_empty()}>
                        {bundle.text("filters.species_any", "All species")}
                    </option>
                    {for SPECIES_OPTIONS.iter().map(|(value, label_key)| html! {
                        <option value={*value} selected={props.draft.species == *value}>
                            {bundle.text(label_key, value)}
                        </option>
                    })}
                </select>
            </label>
            <div class="actions">
                <button class="solid" disabled={props.busy} onclick={search}>
                    {bundle.text("filters.search", "Search")}
                </button>
                {if props.draft.is_active() {
                    html! {
                        <button class="ghost" disabled={props.busy} onclick={clear}>
                            {bundle.text("filters.clear", "Clear")}
                        </button>
                    }
                } else {
                    html! {}
                }}
            </div>
        </div>
    }
}
