// Adapters layer: concrete implementations for external systems (Notion, HTTP, Lambda).

pub mod http;
#[cfg(feature = "lambda")]
pub mod lambda;
pub mod notion;
