//! Infrastructure layer: driver and driven adapters.

pub mod http;
pub mod persistence;
pub mod seed;
