use std::{path::PathBuf, process::ExitCode};

use clap::Parser;

fn default_index_path() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("..")
        .join("src-tauri")
        .join("build")
        .join("web")
        .join("index.html")
}

/// Rewrite `<base href="/">` to `<base href="./">` so the web bundle can be
/// loaded from a file path.
#[derive(Debug, Parser)]
#[command(name = "patch-base", version)]
struct Cli {
    /// index.html to patch in place.
    #[arg(default_value_os_t = default_index_path())]
    index: PathBuf,

    /// Fail instead of rewriting unchanged when no root base tag is present.
    #[arg(long)]
    strict: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    match patch_base::patch_index_file(&cli.index, cli.strict) {
        Ok(outcome) => {
            println!(
                "[patch-base] Rewrote <base href> to \"./\" in {}",
                outcome.path.display()
            );
            ExitCode::SUCCESS
        }
        Err(error) => {
            eprintln!("[patch-base] {error}");
            ExitCode::FAILURE
        }
    }
}
