// Stores layer - Data access and repository pattern
pub mod user_lookup;
pub mod user_store;

pub use user_lookup::UserLookup;
pub use user_store::UserStore;
