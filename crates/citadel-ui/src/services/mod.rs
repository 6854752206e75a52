//! Transport clients for the external catalog API (wasm only).

pub(crate) mod api;
