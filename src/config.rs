// src/config.rs
use crate::api::QueryOptions;
use crate::constants::{DEFAULT_CHANNEL, DEFAULT_CONTENT_DIR, READY_STATUS};
use crate::error::AppError;
use crate::metadata::PropertyNames;
use crate::types::{ApiKey, DatabaseId};
use clap::Parser;
use std::path::PathBuf;

/// Environment variable holding the integration token.
pub const TOKEN_VAR: &str = "NOTION_TOKEN";

/// Environment variable holding the blog database ID or URL.
pub const DATABASE_VAR: &str = "NOTION_DATABASE_ID";

/// Parsed command-line input.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct CommandLineInput {
    /// Directory the Markdown posts are written into
    #[arg(short = 'd', long, default_value = DEFAULT_CONTENT_DIR)]
    pub content_dir: PathBuf,

    /// Author name added to every post's frontmatter
    #[arg(short, long)]
    pub author: Option<String>,

    /// Print a preview of each post instead of writing files
    #[arg(long, default_value_t = false)]
    pub dry_run: bool,

    /// Channel a post must be tagged with to be published
    #[arg(long, default_value = DEFAULT_CHANNEL)]
    pub channel: String,

    /// Status value that marks a post as ready
    #[arg(long, default_value = READY_STATUS)]
    pub status: String,

    /// Log a failing page and continue with the next one
    #[arg(short, long, default_value_t = false)]
    pub keep_going: bool,

    /// Enable verbose logging (debug level)
    #[arg(short, long, default_value_t = false)]
    pub verbose: bool,
}

/// Resolved sync configuration, validated before any request is made.
#[derive(Debug, Clone)]
pub struct SyncConfig {
    pub database_id: DatabaseId,
    pub api_key: ApiKey,
    pub content_dir: PathBuf,
    pub author: Option<String>,
    pub dry_run: bool,
    pub keep_going: bool,
    pub query: QueryOptions,
    pub properties: PropertyNames,
}

impl SyncConfig {
    /// Resolves the configuration from CLI input and the process environment.
    ///
    /// `.env` files must already have been loaded into the environment.
    pub fn resolve(cli: CommandLineInput) -> Result<Self, AppError> {
        Self::from_sources(cli, |name| std::env::var(name).ok())
    }

    /// Resolves the configuration, reading variables through `lookup`.
    pub fn from_sources<F>(cli: CommandLineInput, lookup: F) -> Result<Self, AppError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let api_key_str = required_var(&lookup, TOKEN_VAR)?;
        let database_str = required_var(&lookup, DATABASE_VAR)?;

        let api_key = ApiKey::new(api_key_str)?;
        let database_id = DatabaseId::parse(&database_str)?;

        Ok(SyncConfig {
            database_id,
            api_key,
            content_dir: cli.content_dir,
            author: cli.author.filter(|author| !author.trim().is_empty()),
            dry_run: cli.dry_run,
            keep_going: cli.keep_going,
            query: QueryOptions {
                ready_status: cli.status,
                channel: cli.channel,
            },
            properties: PropertyNames::default(),
        })
    }
}

fn required_var<F>(lookup: &F, name: &str) -> Result<String, AppError>
where
    F: Fn(&str) -> Option<String>,
{
    lookup(name)
        .filter(|value| !value.trim().is_empty())
        .ok_or_else(|| {
            AppError::MissingConfiguration(format!("{} environment variable not set", name))
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    const DATABASE: &str = "0123456789abcdef0123456789abcdef";

    fn cli(args: &[&str]) -> CommandLineInput {
        let mut argv = vec!["notion2hugo"];
        argv.extend_from_slice(args);
        CommandLineInput::parse_from(argv)
    }

    fn env(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name: &str| vars.get(name).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = SyncConfig::from_sources(
            cli(&[]),
            env(&[(TOKEN_VAR, "secret_abc123"), (DATABASE_VAR, DATABASE)]),
        )
        .unwrap();

        assert_eq!(config.content_dir, PathBuf::from("site/content/posts"));
        assert_eq!(config.author, None);
        assert!(!config.dry_run);
        assert!(!config.keep_going);
        assert_eq!(config.query, QueryOptions::default());
        assert_eq!(config.database_id.as_str(), DATABASE);
    }

    #[test]
    fn test_flags_are_applied() {
        let config = SyncConfig::from_sources(
            cli(&[
                "--content-dir",
                "out",
                "--author",
                "Jane",
                "--dry-run",
                "--channel",
                "Blog",
                "--status",
                "published",
                "--keep-going",
                "-v",
            ]),
            env(&[(TOKEN_VAR, "secret_abc123"), (DATABASE_VAR, DATABASE)]),
        )
        .unwrap();

        assert_eq!(config.content_dir, PathBuf::from("out"));
        assert_eq!(config.author.as_deref(), Some("Jane"));
        assert!(config.dry_run);
        assert!(config.keep_going);
        assert_eq!(config.query.channel, "Blog");
        assert_eq!(config.query.ready_status, "published");
    }

    #[test]
    fn test_missing_token_is_reported() {
        let err = SyncConfig::from_sources(cli(&[]), env(&[(DATABASE_VAR, DATABASE)]))
            .unwrap_err();
        assert!(err.is_configuration());
        assert!(err.to_string().contains(TOKEN_VAR));
    }

    #[test]
    fn test_missing_database_is_reported() {
        let err = SyncConfig::from_sources(cli(&[]), env(&[(TOKEN_VAR, "secret_abc123")]))
            .unwrap_err();
        assert!(err.to_string().contains(DATABASE_VAR));
    }

    #[test]
    fn test_invalid_database_id_is_a_configuration_error() {
        let err = SyncConfig::from_sources(
            cli(&[]),
            env(&[(TOKEN_VAR, "secret_abc123"), (DATABASE_VAR, "not-an-id")]),
        )
        .unwrap_err();
        assert!(err.is_configuration());
    }
}
