// ABOUTME: Deployment state marker types for the type state pattern.
// ABOUTME: Later states carry the results of the steps that produced them.

use crate::cloud::{FunctionCodeUpdate, UploadReceipt};

/// Initial state: arguments resolved, nothing executed.
/// Available actions: `build()`, `skip_build()`
#[derive(Debug, Clone, Copy, Default)]
pub struct Initialized;

/// Built: compile and package commands succeeded (or were skipped).
/// Available actions: `upload()`
#[derive(Debug, Clone, Copy, Default)]
pub struct Built;

/// Uploaded: artifact stored in the bucket.
/// Available actions: `update_function()`
#[derive(Debug, Clone)]
pub struct Uploaded {
    pub(crate) receipt: UploadReceipt,
}

/// Completed: function now references the uploaded object.
/// Available actions: `finish()`
#[derive(Debug, Clone)]
pub struct Completed {
    pub(crate) receipt: UploadReceipt,
    pub(crate) update: FunctionCodeUpdate,
}
