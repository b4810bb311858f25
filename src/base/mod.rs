//! Base types and error handling.
//!
//! - [`PslError`](pslerror::PslError): error kinds surfaced by normalization
//!   and rule list loading.

pub mod pslerror;

pub use pslerror::PslError;
