use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;
use std::process::ExitCode;

use docx_table_merge::{logging, merge_tables, ConfigOverrides, MergeConfig};

#[derive(Parser)]
#[command(name = "docx-table-merge")]
#[command(about = "Merge the first table of every .docx file in a directory, deduplicated by first column")]
#[command(version)]
struct Cli {
    /// Directory containing the .docx files to merge
    directory: Option<PathBuf>,

    /// Name of the merged document, written inside the input directory
    #[arg(short, long)]
    output: Option<String>,

    /// Path to a TOML configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Log file to append to
    #[arg(long)]
    log_file: Option<PathBuf>,

    /// Write the default configuration file and exit
    #[arg(long)]
    init_config: bool,
}

fn main() -> Result<ExitCode> {
    let cli = Cli::parse();

    if cli.init_config {
        let path = MergeConfig::init_default(cli.config.as_deref())?;
        println!("Wrote default configuration to {}", path.display());
        return Ok(ExitCode::SUCCESS);
    }

    let config = MergeConfig::load(cli.config.as_deref())?.with_overrides(ConfigOverrides {
        directory: cli.directory,
        output_file: cli.output,
        log_file: cli.log_file,
    })?;

    let _guard = logging::init_logging(&config.log_file)?;

    if merge_tables(&config.directory, &config.output_file) {
        tracing::info!("Tables merged successfully");
        Ok(ExitCode::SUCCESS)
    } else {
        tracing::error!("An error occurred during table merging");
        eprintln!(
            "Table merge failed; see {} for details",
            config.log_file.display()
        );
        Ok(ExitCode::FAILURE)
    }
}
