//! HeroPower Repository Implementations

mod sqlite;

pub use sqlite::SqliteHeroPowerRepository;
