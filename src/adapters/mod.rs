// Adapters layer: concrete implementations for external systems.

pub mod content;
pub mod http;
