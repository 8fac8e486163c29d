//! Infrastructure layer: repository implementations, external service
//! clients and DTOs.

pub mod dto;
pub mod identity;
pub mod recommendation;
pub mod repository;

#[cfg(test)]
pub(crate) mod stub;
