//! Augmentation proxy: forwards a word to a generative model and relays a
//! single-field JSON result.

pub mod augmenter;
pub mod config;
pub mod prompts;
pub mod rest;
pub mod routes;
pub mod state;

pub use augmenter::{Augmenter, ModelAugmenter};
pub use config::ApiConfig;
pub use routes::build_router;
pub use state::AppState;
