//! Error types for struct failures.
//!
//! This module provides [`StructError`], the single error a struct returns
//! when input does not fit, together with its [`ErrorKind`] taxonomy.

mod struct_error;

pub use struct_error::{Cause, ErrorKind, StructError};
