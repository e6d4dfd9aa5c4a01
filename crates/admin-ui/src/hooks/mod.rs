//! State management hooks

pub mod use_followers;

pub use use_followers::{use_followers, FollowersContext};
