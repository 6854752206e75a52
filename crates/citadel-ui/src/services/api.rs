//! HTTP client helpers (REST) for the Rick and Morty API.
//!
//! # Design
//! - Paths are produced by the pure builders in [`crate::core::logic`] so the
//!   request shapes stay natively testable.
//! - A 404 surfaces as [`ApiError::NotFound`]; callers decide whether that is
//!   an empty state or a failure.
//! - Transport and decode failures are logged to the console before being
//!   collapsed into coarse error variants.

use crate::core::error::ApiError;
use crate::core::logic::{build_character_path, episode_batch_path, normalize_episodes, Filters};
use crate::models::{CharacterPage, Episode};
use gloo::console;
use gloo_net::http::Request;

/// Public base URL of the catalog service.
pub(crate) const API_BASE_URL: &str = "https://rickandmortyapi.com/api";

/// Thin client over the external REST API.
#[derive(Clone, Debug)]
pub(crate) struct ApiClient {
    base_url: String,
}

impl ApiClient {
    pub(crate) fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
        }
    }

    async fn get_json<T: for<'de> serde::Deserialize<'de>>(
        &self,
        path: &str,
    ) -> Result<T, ApiError> {
        let url = format!("{}{}", self.base_url.trim_end_matches('/'), path);
        let response = Request::get(&url).send().await.map_err(|err| {
            console::error!("request failed", url.clone(), err.to_string());
            ApiError::Network
        })?;
        if !response.ok() {
            return Err(ApiError::from_status(response.status()));
        }
        response.json::<T>().await.map_err(|err| {
            console::error!("response decode failed", url.clone(), err.to_string());
            ApiError::Decode
        })
    }

    /// Fetch one page of characters for the given filter set.
    pub(crate) async fn fetch_characters(
        &self,
        page: u32,
        filters: &Filters,
    ) -> Result<CharacterPage, ApiError> {
        self.get_json(&build_character_path(page, filters)).await
    }

    /// Fetch the episodes for a pre-extracted id batch in one call. The
    /// endpoint answers with an object for a single id and an array
    /// otherwise; both normalize to a list.
    pub(crate) async fn fetch_episodes(&self, ids: &[String]) -> Result<Vec<Episode>, ApiError> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }
        let payload: serde_json::Value = self.get_json(&episode_batch_path(ids)).await?;
        normalize_episodes(payload).map_err(|err| {
            console::error!("episode payload normalization failed", err.to_string());
            ApiError::Decode
        })
    }
}
