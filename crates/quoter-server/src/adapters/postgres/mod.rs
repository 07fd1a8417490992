//! PostgreSQL Adapters

pub mod profile_repository;
pub mod quote_repository;
pub mod session_repository;

pub use profile_repository::PgProfileRepository;
pub use quote_repository::PgQuoteRepository;
pub use session_repository::PgSessionRepository;
