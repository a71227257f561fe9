//! CLI subcommand implementations.

pub mod admin;
pub mod migrate;

/// Database URL shared by every subcommand.
///
/// Defaults to the same file the web binary opens, so the CLI and the
/// server operate on one store unless told otherwise.
pub(crate) fn database_url() -> String {
    std::env::var("FLUIR_DATABASE_URL").unwrap_or_else(|_| "sqlite://fluir.db".to_owned())
}
