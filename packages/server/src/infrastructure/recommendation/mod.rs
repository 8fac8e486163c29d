//! Recommendation service implementations.

pub mod gemini;
pub mod offline;

pub use gemini::{DEFAULT_GEMINI_MODEL, GeminiRecommendationService};
pub use offline::OfflineRecommendationService;
