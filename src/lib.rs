// ABOUTME: Library root for lambda-deploy - exposes the pipeline and its collaborators.
// ABOUTME: The main binary is in main.rs.

pub mod build;
pub mod cloud;
pub mod config;
pub mod deploy;
pub mod diagnostics;
pub mod error;
pub mod output;
pub mod types;
