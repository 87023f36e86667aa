pub mod render;
pub mod routes;
pub mod server;

pub use server::{router, run, AppState};
