// Adapters layer: concrete implementations for external systems (model files, sessions, http).

pub mod http;
pub mod model_artifact;
pub mod session;
