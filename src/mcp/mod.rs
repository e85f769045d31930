pub mod error;
pub mod registry;
pub mod server;
pub mod tools;
pub mod types;

pub use registry::{tmdb_registry, ToolRegistry, ToolSpec};
pub use server::TmdbServer;
pub use types::*;
