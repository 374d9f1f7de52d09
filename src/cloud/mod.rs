// ABOUTME: Cloud provider abstraction and its AWS implementation.
// ABOUTME: Object storage uploads and function code updates sit behind traits.

pub mod aws;
mod traits;

pub use aws::{AwsConnector, AwsSession};
pub use traits::*;
