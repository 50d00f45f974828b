use crate::config::GeneratorSettings;
use crate::domain::ports::CodeFormatter;
use crate::utils::error::{GenError, Result};
use std::io::Write;
use std::path::Path;
use std::process::{Command, Stdio};

pub const DEFAULT_PRETTIER_CMD: &str = "npx prettier";

/// Runs Prettier (or anything with the same command line) as a child process,
/// feeding the code on stdin.
#[derive(Debug, Clone)]
pub struct PrettierFormatter {
    command: String,
}

impl PrettierFormatter {
    pub fn new(command: impl Into<String>) -> Self {
        Self {
            command: command.into(),
        }
    }

    fn args(&self, filename_hint: &str, config_path: Option<&Path>) -> Result<Vec<String>> {
        let mut args: Vec<String> = self.command.split_whitespace().map(String::from).collect();
        if args.is_empty() {
            return Err(GenError::ConfigError {
                message: "prettier_cmd is empty".to_string(),
            });
        }
        if let Some(config_path) = config_path {
            args.push("--config".to_string());
            args.push(config_path.display().to_string());
        }
        args.push("--stdin-filepath".to_string());
        args.push(filename_hint.to_string());
        Ok(args)
    }
}

impl Default for PrettierFormatter {
    fn default() -> Self {
        Self::new(DEFAULT_PRETTIER_CMD)
    }
}

impl CodeFormatter for PrettierFormatter {
    fn format(
        &self,
        code: &str,
        filename_hint: &str,
        config_path: Option<&Path>,
    ) -> Result<String> {
        let args = self.args(filename_hint, config_path)?;
        tracing::debug!("Running formatter: {}", args.join(" "));

        let mut child = Command::new(&args[0])
            .args(&args[1..])
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()?;

        // Feed stdin from its own thread so a formatter that streams output
        // cannot fill the stdout pipe while we are still writing.
        let writer = child.stdin.take().map(|mut stdin| {
            let code = code.to_owned();
            std::thread::spawn(move || stdin.write_all(code.as_bytes()))
        });

        let output = child.wait_with_output()?;
        if let Some(writer) = writer {
            let written = writer.join().map_err(|_| GenError::ConfigError {
                message: format!("stdin writer for `{}` panicked", self.command),
            })?;
            // A formatter that exits early closes the pipe; its exit status is
            // the more useful error.
            if let Err(e) = written {
                if e.kind() != std::io::ErrorKind::BrokenPipe {
                    return Err(e.into());
                }
            }
        }
        if !output.status.success() {
            return Err(GenError::FormatterError {
                command: self.command.clone(),
                status: output.status.to_string(),
                stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
            });
        }

        Ok(String::from_utf8(output.stdout)?)
    }
}

/// Returns the code unchanged; used when formatting is switched off.
#[derive(Debug, Clone, Copy, Default)]
pub struct PassthroughFormatter;

impl CodeFormatter for PassthroughFormatter {
    fn format(&self, code: &str, _filename_hint: &str, _config_path: Option<&Path>) -> Result<String> {
        Ok(code.to_string())
    }
}

/// Prettier when enabled in `settings`, otherwise a pass-through.
pub fn formatter_for(settings: &GeneratorSettings) -> Box<dyn CodeFormatter> {
    if settings.prettier {
        Box::new(PrettierFormatter::new(settings.prettier_cmd.clone()))
    } else {
        Box::new(PassthroughFormatter)
    }
}
