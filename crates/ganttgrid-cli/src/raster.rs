//! External-command rasterization backend
//!
//! The host environment supplies the actual rasterization capability as any
//! command that reads markup on stdin and writes an encoded image to
//! stdout (a headless browser wrapper, typically). Without one, export
//! stays unavailable and is reported as such.

use std::io::Write;
use std::process::{Command, Stdio};

use ganttgrid_core::{RasterError, Rasterizer};

/// Rasterizer that shells out to a host-supplied command
pub struct CommandRasterizer {
    program: String,
    args: Vec<String>,
}

impl CommandRasterizer {
    /// Split a command line into program and arguments
    pub fn new(command_line: &str) -> Self {
        let mut parts = command_line.split_whitespace().map(String::from);
        Self {
            program: parts.next().unwrap_or_default(),
            args: parts.collect(),
        }
    }
}

impl Rasterizer for CommandRasterizer {
    fn rasterize(&self, markup: &str) -> Result<Vec<u8>, RasterError> {
        if self.program.is_empty() {
            return Err(RasterError::Failed("empty rasterizer command".into()));
        }

        tracing::debug!(program = %self.program, "invoking rasterizer");
        let mut child = Command::new(&self.program)
            .args(&self.args)
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()?;

        if let Some(mut stdin) = child.stdin.take() {
            stdin.write_all(markup.as_bytes())?;
        }

        let output = child.wait_with_output()?;
        if !output.status.success() {
            return Err(RasterError::Failed(format!(
                "{} exited with {}: {}",
                self.program,
                output.status,
                String::from_utf8_lossy(&output.stderr).trim()
            )));
        }
        Ok(output.stdout)
    }
}
