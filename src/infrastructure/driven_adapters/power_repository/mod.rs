//! Power Repository Implementations

mod sqlite;

pub use sqlite::SqlitePowerRepository;
