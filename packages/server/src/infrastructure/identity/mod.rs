//! Identity provider implementations.

pub mod inmemory;
pub mod supabase;

pub use inmemory::InMemoryIdentityProvider;
pub use supabase::SupabaseClient;
