use anyhow::Result;
use clap::{Parser, Subcommand};
use colored::Colorize;
use grit::areas::repository::Repository;
use grit::artifacts::objects::commit::Author;
use std::path::{Path, PathBuf};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(
    name = "grit",
    version,
    about = "A minimal content-addressable version control system",
    long_about = "grit stores file snapshots as hash-addressed objects, stages changes in an \
    index, \
    records commits on branches and switches the working directory between them.",
    help_template = r"
{name} {version} - {about}

USAGE:
    {usage}

OPTIONS:
    {all-args}
"
)]
struct Cli {
    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    #[command(
        name = "init",
        about = "Initialize a new repository",
        long_about = "This command initializes a new repository in the current directory or at \
        the specified path."
    )]
    Init {
        #[arg(index = 1, help = "The path to the repository")]
        path: Option<PathBuf>,
    },
    #[command(
        name = "add",
        about = "Stage files for the next commit",
        long_about = "This command stores the content of the given files, or of every file \
        under the given directories, and records it in the index. Files deleted under a staged \
        directory leave the index."
    )]
    Add {
        #[arg(required = true, help = "Files or directories to stage")]
        paths: Vec<PathBuf>,
    },
    #[command(
        name = "commit",
        about = "Create a new commit with the specified message",
        long_about = "This command records the index as a new commit on the current branch. \
        The author is read from GRIT_AUTHOR_NAME and GRIT_AUTHOR_EMAIL unless --author is given."
    )]
    Commit {
        #[arg(short, long, help = "The commit message")]
        message: String,
        #[arg(long, help = "Override the author, written as \"Name <email>\"")]
        author: Option<String>,
    },
    #[command(
        name = "branch",
        about = "Create or list branches",
        long_about = "This command creates a branch pointing at the current commit, or lists \
        the branches when no name is given."
    )]
    Branch {
        #[arg(index = 1, help = "The name of the branch to create")]
        name: Option<String>,
    },
    #[command(
        name = "checkout",
        about = "Switch branches",
        long_about = "This command replaces the working directory and the index with the \
        content of a branch. \
        It refuses to run when there are uncommitted changes."
    )]
    Checkout {
        #[arg(short = 'b', help = "Create the branch at the current commit first")]
        create: bool,
        #[arg(index = 1, help = "The branch to switch to")]
        branch: String,
    },
    #[command(
        name = "status",
        about = "Show the working tree status",
        long_about = "This command lists staged changes, unstaged changes and untracked files."
    )]
    Status {
        #[arg(long, help = "Print one line per path in a stable format")]
        porcelain: bool,
    },
    #[command(
        name = "cat-file",
        about = "Print the content of an object",
        long_about = "This command prints the content of an object in the repository. \
        It requires the SHA of the object to be specified."
    )]
    CatFile {
        #[arg(short = 'p', conflicts_with = "object_type", help = "Pretty-print the object")]
        pretty: bool,
        #[arg(short = 't', help = "Print the object type")]
        object_type: bool,
        #[arg(index = 1, help = "The object SHA to print")]
        sha: String,
    },
    #[command(
        name = "hash-object",
        about = "Hash an object and optionally write it to the object database",
        long_about = "This command hashes an object file and can write it to the object database. \
        It requires the path to the file to be specified."
    )]
    HashObject {
        #[arg(short, long, required = false, help = "Write the object to the object database")]
        write: bool,
        #[arg(index = 1)]
        file: PathBuf,
    },
    #[command(
        name = "ls-tree",
        about = "List the contents of a tree object",
        long_about = "This command lists the entries of a tree, given a tree SHA, a commit SHA \
        or HEAD."
    )]
    LsTree {
        #[arg(short, help = "Recurse into subtrees")]
        recursive: bool,
        #[arg(index = 1, default_value = "HEAD")]
        revision: String,
    },
    #[command(
        name = "write-tree",
        about = "Write the index as a tree object",
        long_about = "This command stores the trees for the current index and prints the root \
        tree SHA."
    )]
    WriteTree,
}

fn main() {
    let cli = Cli::parse();

    let log_level = match cli.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| format!("grit={log_level}").into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    if let Err(e) = run(cli.command) {
        eprintln!("{} {e:#}", "error:".red().bold());
        std::process::exit(1);
    }
}

fn run(command: Commands) -> Result<()> {
    let pwd = std::env::current_dir()?.canonicalize()?;

    if let Commands::Init { path } = &command {
        let path = match path {
            Some(path) => pwd.join(path),
            None => pwd,
        };
        return Repository::new(&path, Box::new(std::io::stdout()))?.init();
    }

    let repository = Repository::discover(&pwd, Box::new(std::io::stdout()))?;

    match command {
        Commands::Init { .. } => Ok(()),
        Commands::Add { paths } => {
            let paths = paths
                .iter()
                .map(|path| absolute_from(&pwd, path))
                .collect::<Vec<_>>();
            repository.add(&paths)?;
            Ok(())
        }
        Commands::Commit { message, author } => {
            let author = match author {
                Some(identity) => Author::load_with_identity(&identity)?,
                None => Author::load_from_env()?,
            };
            repository.commit(&message, author)?;
            Ok(())
        }
        Commands::Branch { name } => {
            match name {
                Some(name) => {
                    repository.branch(&name)?;
                }
                None => {
                    repository.list_branches()?;
                }
            }
            Ok(())
        }
        Commands::Checkout { create, branch } => repository.checkout(&branch, create),
        Commands::Status { porcelain } => {
            repository.status(porcelain)?;
            Ok(())
        }
        Commands::CatFile {
            pretty: _,
            object_type,
            sha,
        } => {
            if object_type {
                repository.cat_file_type(&sha)?;
            } else {
                repository.cat_file(&sha)?;
            }
            Ok(())
        }
        Commands::HashObject { write, file } => {
            repository.hash_object(&absolute_from(&pwd, &file), write)?;
            Ok(())
        }
        Commands::LsTree {
            recursive,
            revision,
        } => repository.ls_tree(&revision, recursive),
        Commands::WriteTree => {
            repository.write_tree()?;
            Ok(())
        }
    }
}

/// Resolve a command-line path against the directory grit was started in
fn absolute_from(pwd: &Path, path: &Path) -> PathBuf {
    if path.is_absolute() {
        path.to_path_buf()
    } else {
        pwd.join(path)
    }
}
