//! Error reporting for the PIG domain compiler.
//!
//! - Error codes for searchability
//! - Clear messages (what went wrong)
//! - Context (domain, member and property involved)
//!
//! All errors are fatal: a compilation either fully succeeds or produces no
//! model at all.

mod error;
mod error_code;

pub use error::{CompileError, DomainRole, ShapeError};
pub use error_code::ErrorCode;
