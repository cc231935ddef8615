// src/output/types.rs
//! Type definitions for output operations.

use std::path::PathBuf;

/// Represents a complete output plan.
#[derive(Debug, Clone, Default)]
pub struct OutputPlan {
    /// Operations, executed in order
    pub operations: Vec<DeliveryTarget>,
}

impl OutputPlan {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds an operation to the plan.
    pub fn with_operation(mut self, operation: DeliveryTarget) -> Self {
        self.operations.push(operation);
        self
    }
}

/// Represents a single output operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeliveryTarget {
    /// Write content to a file, replacing any previous version
    WriteFile { path: PathBuf, content: String },
    /// Create a directory (and its parents) if missing
    CreateDirectory { path: PathBuf },
    /// Print to stdout
    PrintToStdout { content: String },
}

/// Result of executing an output plan.
#[derive(Debug, Clone, Default)]
pub struct OutputReport {
    /// Files written, in plan order
    pub written: Vec<PathBuf>,
    pub operations_completed: usize,
    pub bytes_written: usize,
}

impl OutputReport {
    pub fn new() -> Self {
        Self::default()
    }
}
