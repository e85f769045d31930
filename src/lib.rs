pub mod cli;
pub mod error;
pub mod init;
pub mod mcp;
pub mod models;
pub mod normalize;
pub mod provider;

pub use error::GatewayError;
