//! Infrastructure layer for filesystem and environment interactions.
//!
//! Zellij mounts the host filesystem under `/host` inside the plugin sandbox;
//! everything here translates between the two views.

pub mod paths;

pub use paths::{expand_tilde, get_data_dir, trace_file};
