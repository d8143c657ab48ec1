use std::io::{self, BufReader};
use std::process::{Child, ChildStdout, Command, Stdio};

pub const DEFAULT_COMPILER: &str = "pdflatex";

/// Build the full compiler invocation: the compiler command (default
/// `pdflatex`), non-stop interaction so a prompt never stalls the stream,
/// then the caller's arguments verbatim.
pub fn build_command(compiler: Option<Vec<String>>, passthrough: &[String]) -> Vec<String> {
    let mut command = compiler.unwrap_or_else(|| vec![DEFAULT_COMPILER.to_string()]);
    command.push("-interaction=nonstopmode".to_string());
    command.extend(passthrough.iter().cloned());
    command
}

/// The spawned compiler whose transcript we are re-rendering. Owns the
/// process; its piped stdout is the scanner's input stream.
pub struct CompilerProcess {
    child: Child,
    pub stdout: BufReader<ChildStdout>,
}

impl CompilerProcess {
    pub fn spawn(command: &[String]) -> io::Result<Self> {
        let (program, args) = command.split_first().ok_or_else(|| {
            io::Error::new(io::ErrorKind::InvalidInput, "empty compiler command")
        })?;

        let mut child = Command::new(program)
            .args(args)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .spawn()?;

        let stdout = child.stdout.take().ok_or_else(|| {
            io::Error::new(io::ErrorKind::Other, "compiler stdout not captured")
        })?;

        Ok(Self {
            child,
            stdout: BufReader::new(stdout),
        })
    }

    /// Wait for the compiler to exit; call after its stdout hits EOF.
    pub fn wait(mut self) -> io::Result<i32> {
        let status = self.child.wait()?;
        Ok(status.code().unwrap_or(-1))
    }
}
