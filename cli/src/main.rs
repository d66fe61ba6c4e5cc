//! Terminal client for the task manager API.
//!
//! Drives the same session store and task board as the web app, with a
//! `reqwest` transport and a file-backed token. Task commands require a
//! stored credential.


mod render;
mod token_file;
mod transport;

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Args, Parser, Subcommand};
use tasks::forms::REGISTERED_NOTICE;
use tasks::types::{DONE_STATUS, INITIAL_STATUS};
use tasks::{ApiClient, ApiConfig, AuthError, Credential, ResourceError, ResourceId, Session, TaskBoard};

use crate::token_file::FileTokenStore;
use crate::transport::ReqwestTransport;

type CliSession = Session<ReqwestTransport, FileTokenStore>;

#[derive(Debug, thiserror::Error)]
enum CliError {
    #[error("not logged in; run `taskdeck-cli login` first")]
    NotLoggedIn,
    #[error(transparent)]
    Auth(#[from] AuthError),
    #[error(transparent)]
    Resource(#[from] ResourceError),
}

#[derive(Parser, Debug)]
#[command(name = "taskdeck-cli", about = "Task manager API client")]
struct Cli {
    /// API base address. Defaults to `TASKDECK_API_BASE`, then the local API.
    #[arg(long)]
    base_url: Option<String>,

    /// Where the login token is kept between runs.
    #[arg(long, env = "TASKDECK_TOKEN_FILE")]
    token_file: Option<PathBuf>,

    /// Log requests and responses to stderr.
    #[arg(short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    Register(CredentialArgs),
    Login(CredentialArgs),
    Logout,
    Whoami,
    Tasks(TasksCommand),
}

#[derive(Args, Debug)]
struct CredentialArgs {
    #[arg(long)]
    email: String,
    #[arg(long)]
    password: String,
}

#[derive(Args, Debug)]
struct TasksCommand {
    #[command(subcommand)]
    command: TasksSubcommand,
}

#[derive(Subcommand, Debug)]
enum TasksSubcommand {
    List {
        /// Show this task's full description.
        #[arg(long)]
        expand: Option<ResourceId>,
    },
    Add {
        title: String,
        #[arg(long, default_value = "")]
        description: String,
    },
    Show {
        id: ResourceId,
    },
    Done {
        id: ResourceId,
    },
    Reopen {
        id: ResourceId,
    },
    Delete {
        id: ResourceId,
    },
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let token_file = cli.token_file.unwrap_or_else(FileTokenStore::default_path);
    let api = ApiClient::new(api_config(cli.base_url.as_deref()), ReqwestTransport::default());
    let session = Session::restore(api, FileTokenStore::new(token_file));

    report(run(&session, cli.command).await)
}

/// `--base-url` when given and non-blank, else the environment.
fn api_config(flag: Option<&str>) -> ApiConfig {
    match flag {
        Some(base) if !base.trim().is_empty() => ApiConfig::from_value(Some(base)),
        _ => ApiConfig::from_env(),
    }
}

fn report(result: Result<(), CliError>) -> ExitCode {
    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}

fn init_tracing(verbose: bool) {
    let level = if verbose { tracing::Level::DEBUG } else { tracing::Level::WARN };
    tracing_subscriber::fmt().with_writer(std::io::stderr).with_max_level(level).init();
}

async fn run(session: &CliSession, command: Command) -> Result<(), CliError> {
    match command {
        Command::Register(args) => {
            session.register(&args.email, &args.password).await?;
            println!("{REGISTERED_NOTICE}");
        }
        Command::Login(args) => {
            session.login(&args.email, &args.password).await?;
            match session.snapshot().user {
                Some(user) => println!("Logged in as {}", render::profile(&user)),
                None => println!("Logged in."),
            }
        }
        Command::Logout => {
            session.logout();
            println!("Logged out.");
        }
        Command::Whoami => {
            let credential = require_credential(session)?;
            let user = session.api().current_user(&credential).await?;
            println!("{}", render::profile(&user));
        }
        Command::Tasks(tasks) => run_tasks(session, tasks.command).await?,
    }
    Ok(())
}

async fn run_tasks(session: &CliSession, command: TasksSubcommand) -> Result<(), CliError> {
    let credential = require_credential(session)?;
    let board = TaskBoard::new(session.api().clone(), credential.clone());

    match command {
        TasksSubcommand::List { expand } => {
            board.load().await?;
            if let Some(id) = expand {
                board.toggle_expanded(&id);
            }
        }
        TasksSubcommand::Add { title, description } => {
            board.edit_draft(|draft| {
                draft.title = title;
                draft.description = description;
            });
            board.create().await?;
        }
        TasksSubcommand::Show { id } => {
            let task = session.api().fetch_task(&credential, &id).await?;
            println!("{}", render::task(&task));
            return Ok(());
        }
        TasksSubcommand::Done { id } => board.set_status(&id, DONE_STATUS).await?,
        TasksSubcommand::Reopen { id } => board.set_status(&id, INITIAL_STATUS).await?,
        TasksSubcommand::Delete { id } => {
            board.delete(&id).await?;
            println!("Deleted task {id}.");
        }
    }

    println!("{}", render::board(&board.snapshot()));
    Ok(())
}

fn require_credential(session: &CliSession) -> Result<Credential, CliError> {
    session.credential().ok_or(CliError::NotLoggedIn)
}
