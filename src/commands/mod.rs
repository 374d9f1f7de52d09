// ABOUTME: Command handlers for the lambda-deploy CLI.

mod deploy;

pub use deploy::deploy;
