use clap::{Parser, Subcommand};
use std::path::PathBuf;

use demogit::commands::{
    AddCommand, CatFileCommand, CatFileMode, CloneCommand, CommitCommand, HashObjectCommand,
    InitCommand, LsTreeCommand, PushCommand, RemoveCommand, StatusCommand, UnstageCommand,
    WriteTreeCommand,
};

#[derive(Parser)]
#[command(name = "demogit")]
#[command(version)]
#[command(about = "A minimal content-addressable version-control engine", long_about = None)]
struct Cli {
    /// Repository root to operate on
    #[arg(short = 'C', long = "repo", default_value = ".", global = true)]
    repo: PathBuf,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Initialize the repository store
    Init,

    /// Remove the store and clear all history
    Remove,

    /// Inspect a stored object's type, size or content
    CatFile {
        /// What to print
        mode: CatFileMode,

        /// Digest of the object
        digest: String,
    },

    /// Compute a file's blob digest, storing it with -w
    HashObject {
        /// Write the blob into the object store
        #[arg(short = 'w')]
        write: bool,

        /// File to hash
        file: PathBuf,
    },

    /// List the entries of a tree object
    LsTree {
        /// Digest of the tree
        digest: String,
    },

    /// Snapshot a directory as a tree object
    WriteTree {
        /// Directory to snapshot, relative to the repository root
        #[arg(default_value = ".")]
        dir: PathBuf,
    },

    /// Stage a file, or every file with "."
    Add {
        /// File to stage, or "." for the whole tree
        path: String,
    },

    /// Clear the staging area
    UnstageAll,

    /// Show staged, unstaged and untracked paths
    Status,

    /// Record the staged entries as a commit
    Commit {
        /// Commit message
        message: String,
    },

    /// Upload the current tree to a newly created remote repository
    Push {
        /// Hosting API access token
        token: String,

        /// Name of the remote repository to create
        repo_name: String,
    },

    /// Fetch a remote repository into a fresh local one
    Clone {
        /// Hosting API access token
        token: String,

        /// URL of the repository to clone
        url: String,

        /// Directory to clone into
        #[arg(default_value = ".")]
        dir: PathBuf,
    },
}

fn main() {
    let cli = Cli::parse();
    if let Err(err) = run(cli) {
        eprintln!("error: {}", err);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> demogit::Result<()> {
    match cli.command {
        Commands::Init => InitCommand::new(&cli.repo).execute(),
        Commands::Remove => RemoveCommand::new(&cli.repo).execute(),
        Commands::CatFile { mode, digest } => {
            CatFileCommand::new(mode, &digest, &cli.repo).execute()
        }
        Commands::HashObject { write, file } => {
            HashObjectCommand::new(&file, write, &cli.repo).execute()
        }
        Commands::LsTree { digest } => LsTreeCommand::new(&digest, &cli.repo).execute(),
        Commands::WriteTree { dir } => WriteTreeCommand::new(&dir, &cli.repo).execute(),
        Commands::Add { path } => AddCommand::new(&path, &cli.repo).execute(),
        Commands::UnstageAll => UnstageCommand::new(&cli.repo).execute(),
        Commands::Status => StatusCommand::new(&cli.repo).execute(),
        Commands::Commit { message } => CommitCommand::new(&message, &cli.repo).execute(),
        Commands::Push { token, repo_name } => {
            PushCommand::new(&token, &repo_name, &cli.repo).execute()
        }
        Commands::Clone { token, url, dir } => CloneCommand::new(&token, &url, &dir).execute(),
    }
}
