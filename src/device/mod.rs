//! Compute-backend selection and the matrix kernels behind it.

mod matrix;

#[cfg(test)]
mod tests;

pub use matrix::Matrix;

use rayon::prelude::*;
use std::thread;

/// Compute backend, chosen once per job by availability.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Device {
    /// Multi-threaded kernel driven by the rayon pool.
    Parallel { threads: usize },
    /// Single-threaded fallback kernel.
    Serial,
}

impl Device {
    /// Capability check: the parallel backend when the host reports more than
    /// one hardware thread, otherwise the serial fallback.
    pub fn detect() -> Self {
        match thread::available_parallelism() {
            Ok(n) if n.get() > 1 => Device::Parallel { threads: n.get() },
            _ => Device::Serial,
        }
    }

    /// Label recorded alongside every timed unit.
    pub fn label(&self) -> &'static str {
        match self {
            Device::Parallel { .. } => "cpu:parallel",
            Device::Serial => "cpu",
        }
    }

    /// Multiply `a * b` on this backend.
    ///
    /// Both backends accumulate each output element in the same order, so
    /// they produce bit-identical results.
    ///
    /// # Panics
    ///
    /// Panics if `a.cols() != b.rows()`.
    pub fn matmul(&self, a: &Matrix, b: &Matrix) -> Matrix {
        assert_eq!(a.cols(), b.rows(), "matmul: inner dimensions must match");

        let mut out = Matrix::zeros(a.rows(), b.cols());
        match self {
            Device::Serial => matmul_serial(a, b, &mut out),
            Device::Parallel { .. } => matmul_parallel(a, b, &mut out),
        }
        out
    }

    /// Block until all queued work on this device has finished.
    ///
    /// Both CPU backends run to completion inside [`Device::matmul`], so
    /// there is never outstanding work here; the runner still calls it before
    /// reading the clock so the measurement covers the compute.
    pub fn synchronize(&self) {}
}

/// Naive row-major kernel: `out[i][j] = sum(a[i][p] * b[p][j])`.
fn matmul_serial(a: &Matrix, b: &Matrix, out: &mut Matrix) {
    let (m, k, n) = (a.rows(), a.cols(), b.cols());
    let (a, b, out) = (a.as_slice(), b.as_slice(), out.as_mut_slice());

    for i in 0..m {
        for j in 0..n {
            let mut sum = 0.0;
            for p in 0..k {
                sum += a[i * k + p] * b[p * n + j];
            }
            out[i * n + j] = sum;
        }
    }
}

/// Same kernel with the output rows fanned out across the rayon pool.
fn matmul_parallel(a: &Matrix, b: &Matrix, out: &mut Matrix) {
    let (k, n) = (a.cols(), b.cols());
    let (a, b) = (a.as_slice(), b.as_slice());

    out.as_mut_slice()
        .par_chunks_mut(n)
        .enumerate()
        .for_each(|(i, row)| {
            for (j, cell) in row.iter_mut().enumerate() {
                let mut sum = 0.0;
                for p in 0..k {
                    sum += a[i * k + p] * b[p * n + j];
                }
                *cell = sum;
            }
        });
}
