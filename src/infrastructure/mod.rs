//! Infrastructure layer: registry implementations and DTOs.

pub mod dto;
pub mod registry;
