//! Pages module

pub mod federation_settings;
pub mod followers;

pub use federation_settings::FederationSettings;
pub use followers::FollowersPage;
