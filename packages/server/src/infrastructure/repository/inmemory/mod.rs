//! In-memory repository implementations.

pub mod catalog;
pub mod profile;
pub mod seed;
pub mod session;

pub use catalog::InMemoryCatalogRepository;
pub use profile::InMemoryProfileRepository;
pub use session::InMemorySessionRepository;
