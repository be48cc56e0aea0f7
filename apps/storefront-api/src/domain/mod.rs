//! Domain layer.
//!
//! Pure business logic: catalog records, the order aggregate, and the
//! validation rules that gate order intake. No I/O happens here; persistence
//! is reached only through the repository traits defined alongside each
//! bounded context.

pub mod catalog;
pub mod ordering;
pub mod shared;
