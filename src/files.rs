// src/files.rs

//! File-to-file operations with the size and timing figures a CLI or UI
//! layer needs for reporting.

use crate::decoder::decompress_stream;
use crate::encoder::compress_stream;
use crate::utils::error::Result;
use log::info;
use std::fs::{self, File};
use std::io::{BufReader, BufWriter};
use std::path::Path;
use std::time::{Duration, Instant};

/// Size and timing figures for one compress or decompress run.
#[derive(Debug, Clone, Copy)]
pub struct CodecReport {
    pub input_bytes: u64,
    pub output_bytes: u64,
    pub elapsed: Duration,
}

impl CodecReport {
    /// Output size as a percentage of input size; 0 for empty input.
    pub fn size_ratio(&self) -> f64 {
        if self.input_bytes == 0 {
            return 0.0;
        }
        100.0 * self.output_bytes as f64 / self.input_bytes as f64
    }
}

/// Compresses `input` into a new file at `output`.
pub fn compress_file<P: AsRef<Path>, Q: AsRef<Path>>(input: P, output: Q) -> Result<CodecReport> {
    let start = Instant::now();
    let reader = BufReader::new(File::open(&input)?);
    let writer = BufWriter::new(File::create(&output)?);
    compress_stream(reader, writer)?;

    let report = CodecReport {
        input_bytes: fs::metadata(&input)?.len(),
        output_bytes: fs::metadata(&output)?.len(),
        elapsed: start.elapsed(),
    };
    info!(
        "compressed {} -> {} bytes ({:.2}%) in {:?}",
        report.input_bytes,
        report.output_bytes,
        report.size_ratio(),
        report.elapsed
    );
    Ok(report)
}

/// Expands a compressed file at `input` into a new file at `output`.
pub fn decompress_file<P: AsRef<Path>, Q: AsRef<Path>>(input: P, output: Q) -> Result<CodecReport> {
    let start = Instant::now();
    let reader = BufReader::new(File::open(&input)?);
    let writer = BufWriter::new(File::create(&output)?);
    decompress_stream(reader, writer)?;

    let report = CodecReport {
        input_bytes: fs::metadata(&input)?.len(),
        output_bytes: fs::metadata(&output)?.len(),
        elapsed: start.elapsed(),
    };
    info!(
        "decompressed {} -> {} bytes in {:?}",
        report.input_bytes, report.output_bytes, report.elapsed
    );
    Ok(report)
}
