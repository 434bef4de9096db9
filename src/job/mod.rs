//! Sequential job driver: runs the chunks and persists the proof log.


use crate::device::Device;
use crate::runner::{run_unit, ExecutionRecord};
use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};
use uuid::Uuid;

/// Parameters for one job.
#[derive(Debug, Clone)]
pub struct JobConfig {
    /// Job name, embedded in task ids and the log filename.
    pub name: String,
    /// How many units to run.
    pub chunks: u32,
    /// Edge length of the matrices multiplied by each unit.
    pub size: usize,
    /// Multiplications per unit.
    pub passes: u32,
    /// Directory the log file is written to, created if absent.
    pub log_dir: PathBuf,
}

impl JobConfig {
    /// Config with the standard workload (256x256 matrices, 5 passes) and
    /// logs under `logs/` relative to the working directory.
    pub fn new(name: impl Into<String>, chunks: u32) -> Self {
        Self {
            name: name.into(),
            chunks,
            size: 256,
            passes: 5,
            log_dir: PathBuf::from("logs"),
        }
    }
}

/// Run every chunk of the job in order on the detected device and persist all
/// records as one pretty-printed JSON array.
///
/// Returns the path of the written log file. Task ids are
/// `"{name}_chunk_{i}"`, 1-indexed. Units run strictly one after another on
/// the calling thread; nothing is persisted until every unit has finished, so
/// a failure mid-job loses the run.
pub fn run_job(config: &JobConfig) -> Result<PathBuf> {
    let device = Device::detect();
    println!(
        "Starting job: {} ({} chunks on {})",
        config.name,
        config.chunks,
        device.label()
    );

    let mut records: Vec<ExecutionRecord> = Vec::with_capacity(config.chunks as usize);
    for i in 1..=config.chunks {
        println!("  Running chunk {}/{}...", i, config.chunks);
        let task_id = format!("{}_chunk_{}", config.name, i);
        let record = run_unit(&device, &task_id, config.size, config.passes);
        println!(
            "  Chunk {}/{} done in {:.4}s",
            i, config.chunks, record.duration_sec
        );
        records.push(record);
    }

    let output_path = write_log(&config.log_dir, &config.name, &records)?;
    println!(
        "Finished all chunks. Log saved to {}",
        output_path.display()
    );

    Ok(output_path)
}

/// Serialize the records to `{log_dir}/{job_name}_{8-hex}.json`.
///
/// The random suffix keeps repeated runs of the same job from overwriting
/// each other. The write is a single `fs::write`, not atomic.
fn write_log(log_dir: &Path, job_name: &str, records: &[ExecutionRecord]) -> Result<PathBuf> {
    fs::create_dir_all(log_dir)
        .with_context(|| format!("Failed to create log directory {}", log_dir.display()))?;

    let mut suffix = Uuid::new_v4().simple().to_string();
    suffix.truncate(8);
    let output_path = log_dir.join(format!("{job_name}_{suffix}.json"));

    let json = serde_json::to_string_pretty(records).context("Failed to serialize job log")?;
    fs::write(&output_path, json)
        .with_context(|| format!("Failed to write log file {}", output_path.display()))?;

    Ok(output_path)
}
