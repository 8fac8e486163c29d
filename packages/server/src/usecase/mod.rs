//! UseCase 層
//!
//! ビジネスロジックを実装するレイヤー。
//! UI 層から呼び出され、Domain 層を操作します。

pub mod ask_concierge;
pub mod browse_catalog;
pub mod current_user;
pub mod error;
pub mod list_safe_zones;
pub mod sign_in;
pub mod sign_out;
pub mod sign_up;
pub mod suggest_description;

pub use ask_concierge::AskConciergeUseCase;
pub use browse_catalog::{BrowseCatalogUseCase, CatalogPage};
pub use current_user::CurrentUserUseCase;
pub use error::{AuthError, CatalogError};
pub use list_safe_zones::ListSafeZonesUseCase;
pub use sign_in::SignInUseCase;
pub use sign_out::SignOutUseCase;
pub use sign_up::SignUpUseCase;
pub use suggest_description::{DESCRIPTION_FALLBACK, SuggestDescriptionUseCase};
