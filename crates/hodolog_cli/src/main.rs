//! Command-line front end over the post service.
//!
//! # Responsibility
//! - Map subcommands onto `PostService` use-cases.
//! - Print results as JSON on stdout and errors on stderr.

use clap::{Parser, Subcommand};
use hodolog_core::db::open_db;
use hodolog_core::{
    init_logging, CoreConfig, PostCreate, PostEdit, PostId, PostSearch, PostService,
    SqlitePostRepository,
};
use log::error;
use serde_json::{json, Value};
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Debug, Parser)]
#[command(name = "hodolog", version, about = "Manage blog posts stored in SQLite")]
struct Cli {
    /// SQLite database file; overrides HODOLOG_DB_PATH.
    #[arg(long, global = true)]
    db: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Check that the core library is linked.
    Ping,
    #[command(flatten)]
    Post(PostCommand),
}

#[derive(Debug, Subcommand)]
enum PostCommand {
    /// Create a post and print its id.
    Write { title: String, content: String },
    /// Print one post.
    Get { id: PostId },
    /// Print every post in creation order.
    List,
    /// Print one zero-based page of five posts, newest first.
    Page { page: u32 },
    /// Print one 1-based page of posts, newest first.
    Search {
        #[arg(long, default_value_t = 1)]
        page: u32,
        #[arg(long, default_value_t = 10)]
        size: u32,
    },
    /// Overwrite the given fields of a post.
    Edit {
        id: PostId,
        #[arg(long)]
        title: Option<String>,
        #[arg(long)]
        content: Option<String>,
    },
    /// Permanently delete a post.
    Delete { id: PostId },
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    let mut config = CoreConfig::from_env();
    if let Some(db) = cli.db {
        config.db_path = db;
    }

    if let Some(log_dir) = &config.log_dir {
        if let Err(err) = init_logging(&config.log_level, &log_dir.to_string_lossy()) {
            eprintln!("warning: logging disabled: {err}");
        }
    }

    let result = match cli.command {
        Command::Ping => Ok(json!({
            "ping": hodolog_core::ping(),
            "version": hodolog_core::core_version(),
        })),
        Command::Post(command) => run(&config, command),
    };

    match result {
        Ok(output) => {
            println!("{output}");
            ExitCode::SUCCESS
        }
        Err(message) => {
            error!("event=cli_command module=cli status=error error={message}");
            eprintln!("error: {message}");
            ExitCode::FAILURE
        }
    }
}

fn run(config: &CoreConfig, command: PostCommand) -> Result<Value, String> {
    let conn = open_db(&config.db_path).map_err(|err| format!("db open failed: {err}"))?;
    let repo =
        SqlitePostRepository::try_new(&conn).map_err(|err| format!("repo init failed: {err}"))?;
    let service = PostService::new(repo);

    let output = match command {
        PostCommand::Write { title, content } => service
            .write(PostCreate::new(title, content))
            .map(|id| json!({ "id": id })),
        PostCommand::Get { id } => service.get(id).map(|post| json!(post)),
        PostCommand::List => service.get_list().map(|posts| json!(posts)),
        PostCommand::Page { page } => service.get_list_by_page(page).map(|posts| json!(posts)),
        PostCommand::Search { page, size } => service
            .get_list_by_page_dsl(&PostSearch::new(page, size))
            .map(|posts| json!(posts)),
        PostCommand::Edit { id, title, content } => service
            .edit(id, PostEdit { title, content })
            .map(|()| json!({ "id": id, "edited": true })),
        PostCommand::Delete { id } => service
            .delete(id)
            .map(|()| json!({ "id": id, "deleted": true })),
    };

    output.map_err(|err| format!("{} ({}): {err}", err.code(), err.status_code()))
}

#[cfg(test)]
mod tests {
    use super::{run, Cli, Command, PostCommand};
    use clap::{CommandFactory, Parser};
    use hodolog_core::CoreConfig;

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn edit_parses_optional_fields() {
        let cli = Cli::parse_from(["hodolog", "edit", "4", "--title", "new"]);
        match cli.command {
            Command::Post(PostCommand::Edit { id, title, content }) => {
                assert_eq!(id, 4);
                assert_eq!(title.as_deref(), Some("new"));
                assert!(content.is_none());
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn write_then_get_through_commands() {
        let dir = tempfile::tempdir().expect("temp dir should be created");
        let config = CoreConfig {
            db_path: dir.path().join("cli.db"),
            ..CoreConfig::default()
        };

        let written = run(
            &config,
            PostCommand::Write {
                title: "t".to_string(),
                content: "c".to_string(),
            },
        )
        .expect("write command should succeed");
        let id = written["id"].as_i64().expect("write output should carry an id");

        let fetched = run(&config, PostCommand::Get { id }).expect("get command should succeed");
        assert_eq!(fetched["title"], "t");

        let missing = run(&config, PostCommand::Delete { id: id + 1 })
            .expect_err("deleting a missing post should fail");
        assert!(missing.starts_with("post_not_found (404)"));
    }
}
