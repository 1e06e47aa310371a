use crate::args::{Cli, OutputFormat};
use crate::config::StackSizeConfig;
use crate::prompt::{self, LineSource, StdinLines};
use crate::source;
use crate::views::PageView;
use anyhow::{Result, bail};
use is_terminal::IsTerminal;
use stacktab_core::{
    DecomposeMode, DisplayRow, Pager, PagerState, StackTable, Termination, transform_row,
};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

const DEFAULT_FILENAME: &str = "list.csv";

pub fn run(cli: Cli) -> Result<()> {
    let table = load_table(cli.stack_sizes.as_deref())?;
    let mode = if cli.flat {
        DecomposeMode::Flat
    } else {
        DecomposeMode::Shulkered
    };

    let mut input = StdinLines;
    let path = resolve_file(cli.file, &mut input)?;

    let batch = source::read_rows(&path)?;
    if batch.dropped > 0 {
        eprintln!(
            "Warning: dropped {} malformed row(s) from {}",
            batch.dropped,
            path.display()
        );
    }

    let rows: Vec<DisplayRow> = batch
        .rows
        .into_iter()
        .map(|row| transform_row(row, &table, mode))
        .collect();

    match cli.format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&rows)?);
            Ok(())
        }
        OutputFormat::Plain => {
            let color = io::stdout().is_terminal();
            run_pager(&rows, cli.page_size, mode, color, &mut input)
        }
    }
}

fn load_table(path: Option<&Path>) -> Result<StackTable> {
    match path {
        Some(path) => StackSizeConfig::load_from(path)?.into_table(),
        None => Ok(StackTable::default()),
    }
}

fn resolve_file(file: Option<PathBuf>, input: &mut dyn LineSource) -> Result<PathBuf> {
    match file {
        Some(path) => {
            if !path.exists() {
                bail!("CSV file '{}' does not exist", path.display());
            }
            Ok(path)
        }
        None => prompt::prompt_filename(input, Path::new(DEFAULT_FILENAME)),
    }
}

/// Drive the pager state machine against the terminal: render each due
/// page, prompt, and feed the reply back until the list is exhausted or
/// the user asks out.
fn run_pager(
    rows: &[DisplayRow],
    page_size: usize,
    mode: DecomposeMode,
    color: bool,
    input: &mut dyn LineSource,
) -> Result<()> {
    let mut pager = Pager::new(rows.len(), page_size)?;
    let show_shulkers = mode == DecomposeMode::Shulkered;

    while let Some(range) = pager.page() {
        print!("{}", PageView::new(&rows[range], show_shulkers, color));
        pager.page_shown();

        println!();
        print!("Press Enter to continue or type 'exit' to stop: ");
        io::stdout().flush()?;

        let Some(line) = input.read_line()? else {
            bail!("Input closed while paging");
        };
        pager.feed_line(&line);
    }

    // The explicit exit keyword is a graceful stop: no trailing output,
    // status 0. Only a completed run gets the end-of-list prompt.
    if pager.state() == PagerState::Finished(Termination::Completed) {
        println!();
        print!("End of list; press Enter to continue... ");
        io::stdout().flush()?;
        if input.read_line()?.is_none() {
            bail!("Input closed while waiting for acknowledgment");
        }
    }

    Ok(())
}
