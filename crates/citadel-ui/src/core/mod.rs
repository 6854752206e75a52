//! DOM-free application core: session model, API error taxonomy, and pure
//! view logic extracted from components for native testing.

pub mod error;
pub mod logic;
pub mod session;
