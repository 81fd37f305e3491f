//! CLI argument definitions using clap.
//!
//! Every flag falls back to an environment variable, then to a built-in
//! default (port 2349, database "book").

use clap::Parser;

use crate::rest::ServerConfig;

/// bookshelf - a document-backed CRUD service for authors, sections, and books
#[derive(Parser, Debug)]
#[command(name = "bookshelf")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Host to bind to
    #[arg(long, env = "BOOKSHELF_HOST", default_value = "0.0.0.0")]
    pub host: String,

    /// Port to listen on
    #[arg(long, env = "BOOKSHELF_PORT", default_value_t = 2349)]
    pub port: u16,

    /// Logical database name for the document store
    #[arg(long, env = "BOOKSHELF_DATABASE", default_value = "book")]
    pub database: String,

    /// Reject book writes whose author_id/section_id resolve to nothing
    #[arg(long, env = "BOOKSHELF_ENFORCE_REFERENCES")]
    pub enforce_references: bool,
}

impl Cli {
    /// Parse command line arguments.
    pub fn parse_args() -> Self {
        Cli::parse()
    }

    /// Convert parsed arguments into the server configuration.
    pub fn into_config(self) -> ServerConfig {
        ServerConfig {
            host: self.host,
            port: self.port,
            database: self.database,
            enforce_references: self.enforce_references,
        }
    }
}
