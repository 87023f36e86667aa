pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use adapters::http::AppState;
pub use adapters::model_artifact::TreeEnsembleClassifier;
pub use adapters::session::InMemoryResultStore;
pub use config::PlannerConfig;
pub use core::planner::PlannerService;
pub use utils::error::{PlannerError, Result};
