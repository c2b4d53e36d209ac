//! Build tasks for the pdfdrop workspace.
//!
//! ```text
//! cargo xtask build-ui --release
//! cargo xtask serve --port 8080
//! ```

use std::path::{Path, PathBuf};
use std::process::Command;

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(about = "Build tasks for the pdfdrop workspace")]
struct Cli {
    #[command(subcommand)]
    task: Task,
}

#[derive(Subcommand)]
enum Task {
    /// Build the web UI bundle into crates/pdfdrop-ui/dist.
    BuildUi {
        /// Optimized build.
        #[arg(long)]
        release: bool,
    },
    /// Serve the web UI with live reload.
    Serve {
        /// Port to listen on.
        #[arg(long, default_value_t = 8080)]
        port: u16,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let ui_dir = workspace_root()?.join("crates").join("pdfdrop-ui");

    match cli.task {
        Task::BuildUi { release } => {
            let mut args = vec!["build"];
            if release {
                args.push("--release");
            }
            trunk(&ui_dir, &args)
        }
        Task::Serve { port } => {
            let port = port.to_string();
            trunk(&ui_dir, &["serve", "--port", &port])
        }
    }
}

fn workspace_root() -> Result<PathBuf> {
    let manifest_dir = Path::new(env!("CARGO_MANIFEST_DIR"));
    manifest_dir
        .parent()
        .map(Path::to_path_buf)
        .context("xtask has no parent directory")
}

fn trunk(dir: &Path, args: &[&str]) -> Result<()> {
    let status = Command::new("trunk")
        .args(args)
        .current_dir(dir)
        .status()
        .context("failed to run trunk (install with `cargo install trunk`)")?;
    if !status.success() {
        bail!("trunk {} exited with {status}", args.join(" "));
    }
    Ok(())
}
