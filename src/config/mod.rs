//! Project configuration (`.vitalseal.toml`).

pub mod settings;

pub use settings::Settings;
