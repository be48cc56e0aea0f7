//! Application layer: use cases and DTOs.

pub mod dto;
pub mod use_cases;
