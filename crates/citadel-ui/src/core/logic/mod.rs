//! Pure UI helpers extracted from components for non-wasm testing.
//!
//! Everything here is deterministic and DOM-free: query path construction,
//! episode reference handling, payload normalization, pagination clamping,
//! and the enumerated-value-to-label mappings used by cards and the modal.

use crate::models::Episode;
use serde_json::Value;
use std::fmt::Write;

/// How many episode references the detail view resolves per character.
pub const EPISODE_PREVIEW_LIMIT: usize = 5;

/// Client-chosen constraints forwarded as query parameters. An empty string
/// means the filter is unset.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Filters {
    /// Name substring filter.
    pub name: String,
    /// Life status filter (`alive`, `dead`, `unknown`).
    pub status: String,
    /// Species filter.
    pub species: String,
}

impl Filters {
    /// Whether any filter holds a non-empty value.
    #[must_use]
    pub fn is_active(&self) -> bool {
        !self.name.is_empty() || !self.status.is_empty() || !self.species.is_empty()
    }
}

/// Status filter options offered by the filter bar: API value, label key.
pub const STATUS_OPTIONS: [(&str, &str); 3] = [
    ("alive", "status.alive"),
    ("dead", "status.dead"),
    ("unknown", "status.unknown"),
];

/// Species filter options offered by the filter bar: API value, label key.
/// Values are the exact strings the external API matches on.
pub const SPECIES_OPTIONS: [(&str, &str); 10] = [
    ("Human", "species.human"),
    ("Alien", "species.alien"),
    ("Humanoid", "species.humanoid"),
    ("unknown", "species.unknown"),
    ("Poopybutthole", "species.poopybutthole"),
    ("Mythological Creature", "species.mythological"),
    ("Animal", "species.animal"),
    ("Robot", "species.robot"),
    ("Cronenberg", "species.cronenberg"),
    ("Disease", "species.disease"),
];

/// Build the character list path for a page and filter set.
///
/// Only non-empty filters are appended, in name→status→species order, with
/// percent-encoded values.
#[must_use]
pub fn build_character_path(page: u32, filters: &Filters) -> String {
    let mut path = format!("/character?page={page}");
    let params = [
        ("name", filters.name.as_str()),
        ("status", filters.status.as_str()),
        ("species", filters.species.as_str()),
    ];
    for (key, value) in params {
        if !value.is_empty() {
            let _ = write!(path, "&{key}={}", urlencoding::encode(value));
        }
    }
    path
}

/// Extract up to the first [`EPISODE_PREVIEW_LIMIT`] episode ids from a list
/// of reference URLs. The id is the trailing non-empty path segment.
#[must_use]
pub fn episode_batch_ids(references: &[String]) -> Vec<String> {
    references
        .iter()
        .take(EPISODE_PREVIEW_LIMIT)
        .filter_map(|reference| reference.rsplit('/').find(|segment| !segment.is_empty()))
        .map(str::to_string)
        .collect()
}

/// Build the batched episode path for a set of ids (`/episode/1,2,3`).
#[must_use]
pub fn episode_batch_path(ids: &[String]) -> String {
    format!("/episode/{}", ids.join(","))
}

/// How many of a character's episodes are not shown by the preview.
#[must_use]
pub const fn hidden_episode_count(total: usize) -> usize {
    total.saturating_sub(EPISODE_PREVIEW_LIMIT)
}

/// Fold the episode endpoint's two response shapes into one list: a single
/// object when one id was requested, an array otherwise.
///
/// # Errors
/// Returns the serde error when the payload matches neither shape.
pub fn normalize_episodes(payload: Value) -> Result<Vec<Episode>, serde_json::Error> {
    if payload.is_array() {
        serde_json::from_value(payload)
    } else {
        serde_json::from_value(payload).map(|episode| vec![episode])
    }
}

/// Clamp a requested page into the valid range `[1, max(total, 1)]`.
#[must_use]
pub fn clamp_page(current: u32, total: u32) -> u32 {
    current.clamp(1, total.max(1))
}

/// Life status bucket derived from the API's free-text status value.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StatusKind {
    /// The character is alive.
    Alive,
    /// The character is dead.
    Dead,
    /// Anything else the API reports.
    Unknown,
}

impl StatusKind {
    /// Case-insensitive classification; unrecognized text maps to
    /// [`StatusKind::Unknown`] rather than failing.
    #[must_use]
    pub fn from_text(status: &str) -> Self {
        match status.to_ascii_lowercase().as_str() {
            "alive" => Self::Alive,
            "dead" => Self::Dead,
            _ => Self::Unknown,
        }
    }

    /// Translation key for the display label.
    #[must_use]
    pub const fn label_key(self) -> &'static str {
        match self {
            Self::Alive => "status.alive",
            Self::Dead => "status.dead",
            Self::Unknown => "status.unknown",
        }
    }

    /// Style token for the status badge.
    #[must_use]
    pub const fn badge_class(self) -> &'static str {
        match self {
            Self::Alive => "badge-alive",
            Self::Dead => "badge-dead",
            Self::Unknown => "badge-unknown",
        }
    }
}

/// Translation key for a gender value, case-insensitive with an unknown
/// fallback.
#[must_use]
pub fn gender_label_key(gender: &str) -> &'static str {
    match gender.to_ascii_lowercase().as_str() {
        "male" => "gender.male",
        "female" => "gender.female",
        "genderless" => "gender.genderless",
        _ => "gender.unknown",
    }
}

/// Style token for a species value, case-insensitive; species outside the
/// known set share a generic tone.
#[must_use]
pub fn species_tone(species: &str) -> &'static str {
    match species.to_ascii_lowercase().as_str() {
        "human" => "tone-human",
        "alien" => "tone-alien",
        "humanoid" => "tone-humanoid",
        "unknown" => "tone-unknown",
        "poopybutthole" => "tone-poopybutthole",
        "mythological creature" => "tone-mythological",
        "animal" => "tone-animal",
        "robot" => "tone-robot",
        "cronenberg" => "tone-cronenberg",
        "disease" => "tone-disease",
        _ => "tone-other",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn refs(ids: &[u32]) -> Vec<String> {
        ids.iter()
            .map(|id| format!("https://rickandmortyapi.com/api/episode/{id}"))
            .collect()
    }

    #[test]
    fn character_path_without_filters_has_only_the_page() {
        assert_eq!(
            build_character_path(1, &Filters::default()),
            "/character?page=1"
        );
        assert_eq!(
            build_character_path(7, &Filters::default()),
            "/character?page=7"
        );
    }

    #[test]
    fn character_path_appends_filters_in_fixed_order() {
        let filters = Filters {
            name: "rick".into(),
            status: "alive".into(),
            species: "Human".into(),
        };
        assert_eq!(
            build_character_path(2, &filters),
            "/character?page=2&name=rick&status=alive&species=Human"
        );
    }

    #[test]
    fn character_path_skips_empty_filters() {
        let filters = Filters {
            name: String::new(),
            status: String::new(),
            species: "Alien".into(),
        };
        assert_eq!(
            build_character_path(1, &filters),
            "/character?page=1&species=Alien"
        );
    }

    #[test]
    fn character_path_percent_encodes_values() {
        let filters = Filters {
            name: "birdperson & co".into(),
            status: String::new(),
            species: "Mythological Creature".into(),
        };
        let path = build_character_path(1, &filters);
        assert_eq!(
            path,
            "/character?page=1&name=birdperson%20%26%20co&species=Mythological%20Creature"
        );
    }

    #[test]
    fn episode_ids_cap_at_the_preview_limit() {
        let references = refs(&[1, 2, 3, 4, 5, 6, 7]);
        let ids = episode_batch_ids(&references);
        assert_eq!(ids, vec!["1", "2", "3", "4", "5"]);
    }

    #[test]
    fn episode_ids_keep_short_lists_whole() {
        let references = refs(&[10, 28]);
        assert_eq!(episode_batch_ids(&references), vec!["10", "28"]);
        assert!(episode_batch_ids(&[]).is_empty());
    }

    #[test]
    fn episode_ids_survive_trailing_slashes() {
        let references = vec!["https://rickandmortyapi.com/api/episode/12/".to_string()];
        assert_eq!(episode_batch_ids(&references), vec!["12"]);
    }

    #[test]
    fn episode_path_joins_ids_with_commas() {
        let ids = vec!["1".to_string(), "2".to_string(), "3".to_string()];
        assert_eq!(episode_batch_path(&ids), "/episode/1,2,3");
        assert_eq!(episode_batch_path(&ids[..1]), "/episode/1");
    }

    #[test]
    fn hidden_count_is_zero_at_or_below_the_limit() {
        assert_eq!(hidden_episode_count(0), 0);
        assert_eq!(hidden_episode_count(5), 0);
        assert_eq!(hidden_episode_count(6), 1);
        assert_eq!(hidden_episode_count(51), 46);
    }

    #[test]
    fn normalize_accepts_both_payload_shapes() {
        let single = serde_json::json!({ "id": 1, "name": "Pilot", "episode": "S01E01" });
        let one = normalize_episodes(single).unwrap();
        assert_eq!(one.len(), 1);
        assert_eq!(one[0].episode, "S01E01");

        let many = serde_json::json!([
            { "id": 1, "name": "Pilot", "episode": "S01E01" },
            { "id": 2, "name": "Lawnmower Dog", "episode": "S01E02" }
        ]);
        let list = normalize_episodes(many).unwrap();
        assert_eq!(list.len(), 2);
        assert_eq!(list[1].name, "Lawnmower Dog");
    }

    #[test]
    fn normalize_rejects_malformed_payloads() {
        assert!(normalize_episodes(serde_json::json!({ "error": "nope" })).is_err());
        assert!(normalize_episodes(serde_json::json!(42)).is_err());
    }

    #[test]
    fn page_clamp_never_leaves_the_valid_range() {
        assert_eq!(clamp_page(0, 10), 1);
        assert_eq!(clamp_page(5, 10), 5);
        assert_eq!(clamp_page(11, 10), 10);
        // Zero total pages still renders as page 1.
        assert_eq!(clamp_page(3, 0), 1);
    }

    #[test]
    fn status_classification_is_case_insensitive() {
        assert_eq!(StatusKind::from_text("Alive"), StatusKind::Alive);
        assert_eq!(StatusKind::from_text("DEAD"), StatusKind::Dead);
        assert_eq!(StatusKind::from_text("unknown"), StatusKind::Unknown);
        assert_eq!(StatusKind::from_text("presumed dead"), StatusKind::Unknown);
        assert_eq!(StatusKind::from_text(""), StatusKind::Unknown);
    }

    #[test]
    fn status_tokens_are_stable() {
        assert_eq!(StatusKind::Alive.badge_class(), "badge-alive");
        assert_eq!(StatusKind::Dead.label_key(), "status.dead");
    }

    #[test]
    fn gender_labels_fall_back_to_unknown() {
        assert_eq!(gender_label_key("Male"), "gender.male");
        assert_eq!(gender_label_key("female"), "gender.female");
        assert_eq!(gender_label_key("Genderless"), "gender.genderless");
        assert_eq!(gender_label_key("fluid"), "gender.unknown");
    }

    #[test]
    fn species_tones_cover_the_known_set_with_fallback() {
        assert_eq!(species_tone("Human"), "tone-human");
        assert_eq!(species_tone("mythological creature"), "tone-mythological");
        assert_eq!(species_tone("Parasite"), "tone-other");
    }

    #[test]
    fn filter_activity_tracks_any_non_empty_field() {
        assert!(!Filters::default().is_active());
        let with_status = Filters {
            status: "alive".into(),
            ..Filters::default()
        };
        assert!(with_status.is_active());
    }

    #[test]
    fn filter_option_values_are_unique_and_non_empty() {
        for options in [&STATUS_OPTIONS[..], &SPECIES_OPTIONS[..]] {
            let values: Vec<&str> = options.iter().map(|(value, _)| *value).collect();
            assert!(values.iter().all(|value| !value.is_empty()));
            let mut deduped = values.clone();
            deduped.sort_unstable();
            deduped.dedup();
            assert_eq!(deduped.len(), values.len());
        }
    }
}
