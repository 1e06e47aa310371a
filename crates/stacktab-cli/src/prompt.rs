use anyhow::{Result, bail};
use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};

/// Blocking line source feeding the pager and the filename prompt.
///
/// Abstracted so the interactive loops can run against scripted input in
/// tests without a real terminal.
pub trait LineSource {
    /// Read one line, without the trailing newline. `None` means the
    /// channel closed (EOF or interrupt).
    fn read_line(&mut self) -> Result<Option<String>>;
}

/// Line source backed by the process stdin.
pub struct StdinLines;

impl LineSource for StdinLines {
    fn read_line(&mut self) -> Result<Option<String>> {
        let mut line = String::new();
        let read = io::stdin().lock().read_line(&mut line)?;
        if read == 0 {
            return Ok(None);
        }
        while line.ends_with('\n') || line.ends_with('\r') {
            line.pop();
        }
        Ok(Some(line))
    }
}

/// Scripted line source for tests.
pub struct ScriptedLines {
    lines: std::vec::IntoIter<String>,
}

impl ScriptedLines {
    pub fn new(lines: &[&str]) -> Self {
        Self {
            lines: lines
                .iter()
                .map(|s| s.to_string())
                .collect::<Vec<_>>()
                .into_iter(),
        }
    }
}

impl LineSource for ScriptedLines {
    fn read_line(&mut self) -> Result<Option<String>> {
        Ok(self.lines.next())
    }
}

/// Ask for the CSV filename until an existing file is named. An empty
/// reply takes the default; a name that does not exist re-prompts.
pub fn prompt_filename(input: &mut dyn LineSource, default: &Path) -> Result<PathBuf> {
    loop {
        print!(
            "Enter the filename of the CSV file [{}]: ",
            default.display()
        );
        io::stdout().flush()?;

        let Some(line) = input.read_line()? else {
            bail!("Input closed while waiting for a filename");
        };

        let trimmed = line.trim();
        let candidate = if trimmed.is_empty() {
            default.to_path_buf()
        } else {
            PathBuf::from(trimmed)
        };

        if candidate.exists() {
            return Ok(candidate);
        }
        eprintln!("File '{}' does not exist", candidate.display());
    }
}
