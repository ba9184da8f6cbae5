//! Core module - terminal configuration

pub mod config;

pub use config::Config;
