// ABOUTME: Validated domain types for deployment targets.
// ABOUTME: Malformed bucket, function, key, or profile values are rejected at parse time.

mod bucket_name;
mod function_name;
mod object_key;
mod profile_name;

pub use bucket_name::{BucketName, BucketNameError};
pub use function_name::{FunctionName, FunctionNameError};
pub use object_key::{ObjectKey, ObjectKeyError};
pub use profile_name::{ProfileName, ProfileNameError};
