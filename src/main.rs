use anyhow::Result;
use chunkbench::{run_job, split_text, JobConfig};
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "chunkbench",
    version = env!("CARGO_PKG_VERSION"),
    about = "Splits a demo matrix job into timed chunks and logs the proof as JSON."
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Run the matrix job and write the timing log
    Run(RunArgs),
    /// Split a demo payload into parts and print them
    Split(SplitArgs),
}

#[derive(Args, Debug)]
struct RunArgs {
    /// Job name, embedded in task ids and the log filename
    #[arg(long, default_value = "demo_job")]
    job_name: String,

    /// Number of chunks to run
    #[arg(long, default_value_t = 3)]
    chunks: u32,

    /// Edge length of the square matrices
    #[arg(long, default_value_t = 512)]
    size: usize,

    /// Matrix multiplications per chunk
    #[arg(long, default_value_t = 10)]
    passes: u32,

    /// Directory the log file is written to
    #[arg(long, default_value = "logs", value_hint = clap::ValueHint::DirPath)]
    log_dir: PathBuf,
}

#[derive(Args, Debug)]
struct SplitArgs {
    /// Payload to split
    #[arg(long, default_value = "THIS_IS_A_DEMO_AI_JOB_PAYLOAD")]
    text: String,

    /// Number of parts to aim for
    #[arg(long, default_value_t = 4)]
    parts: usize,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Command::Run(args) => {
            let config = JobConfig {
                name: args.job_name,
                chunks: args.chunks,
                size: args.size,
                passes: args.passes,
                log_dir: args.log_dir,
            };
            run_job(&config)?;
        }
        Command::Split(args) => {
            let chunks = split_text(&args.text, args.parts);
            println!("Split {:?} into {} chunks:", args.text, chunks.len());
            for (i, chunk) in chunks.iter().enumerate() {
                println!("  [{}] {:?}", i + 1, chunk);
            }
        }
    }

    Ok(())
}
