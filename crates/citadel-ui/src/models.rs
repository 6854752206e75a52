//! Data transfer objects for the Rick and Morty REST API.
//!
//! Fields mirror the subset of the external payloads the UI actually renders;
//! serde ignores everything else the service sends alongside.

use serde::Deserialize;

/// One page of characters together with its pagination envelope.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct CharacterPage {
    /// Pagination metadata for the query that produced this page.
    pub info: PageInfo,
    /// Characters on this page.
    pub results: Vec<Character>,
}

impl CharacterPage {
    /// The representation of "nothing matched": no results, zero pages.
    #[must_use]
    pub const fn empty() -> Self {
        Self {
            info: PageInfo {
                count: 0,
                pages: 0,
                next: None,
                prev: None,
            },
            results: Vec::new(),
        }
    }
}

/// Pagination metadata returned alongside every list response.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct PageInfo {
    /// Total number of entities matching the query.
    pub count: u32,
    /// Total number of pages for the query.
    pub pages: u32,
    /// Absolute URL of the next page, when one exists.
    pub next: Option<String>,
    /// Absolute URL of the previous page, when one exists.
    pub prev: Option<String>,
}

/// A character as served by the external API. Immutable once fetched; a page
/// of these is superseded wholesale on every refetch.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct Character {
    /// Stable numeric identifier.
    pub id: u32,
    /// Display name.
    pub name: String,
    /// Life status as free text (`Alive`, `Dead`, `unknown`, ...).
    pub status: String,
    /// Species as free text.
    pub species: String,
    /// Gender as free text.
    pub gender: String,
    /// Origin location reference.
    pub origin: Origin,
    /// Portrait image URL.
    pub image: String,
    /// Ordered episode reference URLs; only the trailing id segment is used
    /// locally.
    pub episode: Vec<String>,
}

/// Origin reference embedded in a character payload.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct Origin {
    /// Location display name.
    pub name: String,
}

/// An episode as served by the episode endpoint.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct Episode {
    /// Stable numeric identifier.
    pub id: u32,
    /// Episode title.
    pub name: String,
    /// Episode code string such as `S01E01`.
    pub episode: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    const PAGE_FIXTURE: &str = r#"{
        "info": { "count": 826, "pages": 42, "next": "https://rickandmortyapi.com/api/character?page=2", "prev": null },
        "results": [{
            "id": 1,
            "name": "Rick Sanchez",
            "status": "Alive",
            "species": "Human",
            "type": "",
            "gender": "Male",
            "origin": { "name": "Earth (C-137)", "url": "https://rickandmortyapi.com/api/location/1" },
            "location": { "name": "Citadel of Ricks", "url": "https://rickandmortyapi.com/api/location/3" },
            "image": "https://rickandmortyapi.com/api/character/avatar/1.jpeg",
            "episode": [
                "https://rickandmortyapi.com/api/episode/1",
                "https://rickandmortyapi.com/api/episode/2"
            ],
            "url": "https://rickandmortyapi.com/api/character/1",
            "created": "2017-11-04T18:48:46.250Z"
        }]
    }"#;

    #[test]
    fn envelope_deserializes_and_ignores_extra_fields() {
        let page: CharacterPage = serde_json::from_str(PAGE_FIXTURE).unwrap();
        assert_eq!(page.info.pages, 42);
        assert_eq!(page.info.prev, None);
        assert_eq!(page.results.len(), 1);
        let rick = &page.results[0];
        assert_eq!(rick.name, "Rick Sanchez");
        assert_eq!(rick.origin.name, "Earth (C-137)");
        assert_eq!(rick.episode.len(), 2);
    }

    #[test]
    fn episode_deserializes() {
        let episode: Episode = serde_json::from_str(
            r#"{ "id": 28, "name": "The Ricklantis Mixup", "episode": "S03E07", "air_date": "September 10, 2017" }"#,
        )
        .unwrap();
        assert_eq!(episode.episode, "S03E07");
    }

    #[test]
    fn empty_page_has_zero_pages() {
        let page = CharacterPage::empty();
        assert_eq!(page.info.pages, 0);
        assert!(page.results.is_empty());
    }
}
