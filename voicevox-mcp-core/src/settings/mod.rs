pub mod config;
pub mod loader;

#[cfg(test)]
mod tests;

pub use config::{PlayerSettings, Settings};
