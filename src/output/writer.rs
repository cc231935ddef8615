// src/output/writer.rs
//! Executes output operations by performing actual I/O.
//!
//! This module is the only place where file I/O operations occur,
//! keeping the rest of the codebase pure and testable.

use super::types::*;
use crate::error::AppError;
use std::fs;
use std::io::Write;
use std::path::Path;

/// Delivers the output plan, stopping at the first failed operation.
pub fn deliver(plan: OutputPlan) -> Result<OutputReport, AppError> {
    let mut report = OutputReport::new();

    log::debug!(
        "Executing output plan with {} operations",
        plan.operations.len()
    );

    for operation in plan.operations {
        match operation {
            DeliveryTarget::WriteFile { path, content } => {
                write_file(&path, &content)?;
                report.bytes_written += content.len();
                report.written.push(path);
            }
            DeliveryTarget::CreateDirectory { path } => create_directory(&path)?,
            DeliveryTarget::PrintToStdout { content } => print_to_stdout(&content)?,
        }
        report.operations_completed += 1;
    }

    Ok(report)
}

/// Writes content to a file.
fn write_file(path: &Path, content: &str) -> Result<(), AppError> {
    log::debug!("Writing {} bytes to {}", content.len(), path.display());

    fs::write(path, content).map_err(|source| AppError::WriteFailed {
        path: path.to_path_buf(),
        source,
    })
}

/// Creates a directory.
fn create_directory(path: &Path) -> Result<(), AppError> {
    if path.is_dir() {
        return Ok(());
    }

    if path.exists() {
        return Err(AppError::WriteFailed {
            path: path.to_path_buf(),
            source: std::io::Error::new(
                std::io::ErrorKind::AlreadyExists,
                "path exists but is not a directory",
            ),
        });
    }

    fs::create_dir_all(path).map_err(|source| AppError::WriteFailed {
        path: path.to_path_buf(),
        source,
    })?;
    log::info!("Created directory: {}", path.display());
    Ok(())
}

/// Prints content to stdout.
fn print_to_stdout(content: &str) -> Result<(), AppError> {
    let mut stdout = std::io::stdout().lock();
    stdout.write_all(content.as_bytes())?;
    stdout.flush()?;
    Ok(())
}
