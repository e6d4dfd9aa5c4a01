//! API services module

pub mod api_client;
pub mod config_api;
pub mod follower_api;

pub use api_client::*;
pub use config_api::*;
pub use follower_api::*;
