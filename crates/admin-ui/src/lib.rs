//! Glowcast Admin UI
//!
//! Administration screens for the Glowcast live-streaming server's Fediverse
//! federation feature: the federation settings form and the followers
//! management view. Built with Dioxus and compiled to WebAssembly.

pub mod app;
pub mod components;
pub mod hooks;
pub mod models;
pub mod pages;
pub mod services;
pub mod utils;

pub use app::App;
