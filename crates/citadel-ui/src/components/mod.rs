//! Presentation components for the catalog views.

pub(crate) mod card;
pub(crate) mod characters;
pub(crate) mod detail;
pub(crate) mod filters;
pub(crate) mod login;
pub(crate) mod pagination;
pub(crate) mod status;
