use std::{ffi::OsString, path::PathBuf, process};

use anyhow::Result;
use clap::{CommandFactory, Parser, Subcommand, ValueHint, error::ErrorKind};

use task_cli::{
    add_task, list_tasks, mark_task, model::Status, remove_task, storage::TaskFile, update_task,
};

#[derive(Parser, Debug)]
#[command(name = "task-cli", version, about = "Track short tasks from the command line")]
struct Cli {
    /// Main verb. If omitted, usage is printed.
    #[command(subcommand)]
    verb: Option<Verb>,

    /// Where the task collection lives.
    #[arg(short, long, value_hint = ValueHint::FilePath, default_value = "tasks.json")]
    file: PathBuf,
}

#[derive(Subcommand, Debug)]
enum Verb {
    /// Add a new task.
    Add {
        /// Task description; multiple words are joined with single spaces.
        #[arg(required = true)]
        description: Vec<String>,
    },

    /// Replace a task's description.
    Update {
        #[arg(value_parser = clap::value_parser!(u64).range(1..))]
        id: u64,

        /// New description; multiple words are joined with single spaces.
        #[arg(required = true)]
        description: Vec<String>,
    },

    /// Delete a task.
    Delete {
        #[arg(value_parser = clap::value_parser!(u64).range(1..))]
        id: u64,
    },

    /// Move a task to in-progress.
    MarkInProgress {
        #[arg(value_parser = clap::value_parser!(u64).range(1..))]
        id: u64,
    },

    /// Move a task to done.
    MarkDone {
        #[arg(value_parser = clap::value_parser!(u64).range(1..))]
        id: u64,
    },

    /// List tasks, optionally only those with the given status.
    List {
        /// Status filter: todo, in-progress or done.
        status: Option<String>,
    },

    // Unknown verbs land here and get the help text, not a parse error.
    #[command(external_subcommand)]
    Unrecognized(Vec<OsString>),
}

fn main() {
    // Everything user-facing goes to stdout; failures are signalled by the
    // exit status alone. Help and version keep status 0.
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => {
            let ok = matches!(
                err.kind(),
                ErrorKind::DisplayHelp | ErrorKind::DisplayVersion
            );
            print!("{err}");
            process::exit(if ok { 0 } else { 1 });
        }
    };

    if let Err(err) = run(cli) {
        println!("{err}");
        process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    let verb = match cli.verb {
        Some(Verb::Unrecognized(_)) | None => {
            Cli::command().print_help()?;
            return Ok(());
        }
        Some(verb) => verb,
    };

    let store = TaskFile::new(cli.file);
    let mut tasks = store.load()?;

    match verb {
        Verb::Add { description } => {
            let id = add_task(&mut tasks, &description.join(" "))?;
            store.save(&tasks)?;
            println!("Task added (ID: {id})");
        }
        Verb::Update { id, description } => {
            update_task(&mut tasks, id, &description.join(" "))?;
            store.save(&tasks)?;
            println!("Task {id} updated");
        }
        Verb::Delete { id } => {
            remove_task(&mut tasks, id)?;
            store.save(&tasks)?;
            println!("Task {id} deleted");
        }
        Verb::MarkInProgress { id } => {
            mark_task(&mut tasks, id, Status::InProgress)?;
            store.save(&tasks)?;
            println!("Task {id} marked in-progress");
        }
        Verb::MarkDone { id } => {
            mark_task(&mut tasks, id, Status::Done)?;
            store.save(&tasks)?;
            println!("Task {id} marked done");
        }
        Verb::List { status } => {
            let shown = list_tasks(&tasks, status.as_deref());
            if shown.is_empty() {
                println!("No tasks found");
            }
            for task in shown {
                println!("[{}] {} ({})", task.id, task.description, task.status);
            }
        }
        Verb::Unrecognized(_) => unreachable!("handled before the store is touched"),
    }

    Ok(())
}
