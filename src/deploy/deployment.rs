// ABOUTME: Generic deployment struct parameterized by state marker.
// ABOUTME: State types carry their own data for compile-time guarantees.

use crate::cloud::{FunctionCodeUpdate, UploadReceipt};

use super::request::DeployRequest;
use super::state::{Completed, Initialized, Uploaded};

/// A deployment in progress, parameterized by its current state.
///
/// Each transition consumes the deployment, so the function can only be
/// updated after an upload, and an upload only happens after a build.
#[derive(Debug)]
pub struct Deployment<S> {
    pub(crate) request: DeployRequest,
    pub(crate) state: S,
}

impl Deployment<Initialized> {
    pub fn new(request: DeployRequest) -> Self {
        Deployment {
            request,
            state: Initialized,
        }
    }
}

impl<S> Deployment<S> {
    pub fn request(&self) -> &DeployRequest {
        &self.request
    }

    pub(crate) fn transition<T>(self, state: T) -> Deployment<T> {
        Deployment {
            request: self.request,
            state,
        }
    }
}

impl Deployment<Uploaded> {
    pub fn receipt(&self) -> &UploadReceipt {
        &self.state.receipt
    }
}

impl Deployment<Completed> {
    pub fn receipt(&self) -> &UploadReceipt {
        &self.state.receipt
    }

    pub fn function_update(&self) -> &FunctionCodeUpdate {
        &self.state.update
    }
}
