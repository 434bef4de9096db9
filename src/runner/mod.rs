//! Runs one timed matrix-multiplication unit and records the outcome.


use crate::device::{Device, Matrix};
use chrono::{SecondsFormat, Utc};
use serde::{Deserialize, Serialize};
use std::time::Instant;

/// Proof record for one completed unit of work.
///
/// Field order matches the serialized log format. Records are append-only:
/// created once at the end of a unit and never mutated afterward.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExecutionRecord {
    /// Caller-supplied identifier for this unit.
    pub task_id: String,
    /// Label of the backend the unit ran on.
    pub device: String,
    /// Edge lengths of the multiplied matrices, formatted `"{n}x{n}"`.
    pub matrix_size: String,
    /// How many times the running product was multiplied.
    pub passes: u32,
    /// Wall-clock duration in seconds, rounded to 4 decimal places.
    pub duration_sec: f64,
    /// UTC completion time, RFC 3339 with a trailing `Z`.
    pub timestamp: String,
}

/// Run one unit: two random `size × size` matrices, with the running product
/// left-multiplied by the second matrix `passes` times.
///
/// The duration covers allocation, all passes, and the device barrier; the
/// timestamp is captured immediately after completion.
pub fn run_unit(device: &Device, task_id: &str, size: usize, passes: u32) -> ExecutionRecord {
    let started = Instant::now();

    let mut x = Matrix::random(size, size);
    let y = Matrix::random(size, size);

    for _ in 0..passes {
        x = device.matmul(&x, &y);
    }
    device.synchronize();

    let elapsed = started.elapsed().as_secs_f64();

    ExecutionRecord {
        task_id: task_id.to_string(),
        device: device.label().to_string(),
        matrix_size: format!("{size}x{size}"),
        passes,
        duration_sec: round4(elapsed),
        timestamp: Utc::now().to_rfc3339_opts(SecondsFormat::Micros, true),
    }
}

fn round4(seconds: f64) -> f64 {
    (seconds * 10_000.0).round() / 10_000.0
}
