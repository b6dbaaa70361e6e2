pub mod filter;
pub mod images;
pub mod initialize;
pub mod inquiries;
pub mod log;
pub mod migrate;
pub mod pool;
pub mod projects;
pub mod stats;
pub mod tasks;
pub mod users;

/// Shared error constructor for rows carrying text a model enum cannot parse.
pub(crate) fn bad_text(what: &str, value: &str) -> rusqlite::Error {
    rusqlite::Error::FromSqlConversionFailure(
        0,
        rusqlite::types::Type::Text,
        Box::new(std::io::Error::other(format!(
            "invalid {}: '{}'",
            what, value
        ))),
    )
}
