//! Hero Repository Implementations

mod sqlite;

pub use sqlite::SqliteHeroRepository;
