use owo_colors::{OwoColorize, Style};
use stacktab_core::DisplayRow;
use std::fmt;

// Display constants
const ITEM_WIDTH: usize = 25;
const NUMBER_WIDTH: usize = 10;
const SEPARATOR: &str = " | ";
const MISSING_ITEM: &str = "N/A";

/// One rendered page of breakdown rows.
///
/// Columns are fixed-width: item left-padded to 25, numbers right-aligned
/// in 10. The shulker column only appears for shulkered breakdowns.
pub struct PageView<'a> {
    rows: &'a [DisplayRow],
    show_shulkers: bool,
    color: bool,
}

impl<'a> PageView<'a> {
    pub fn new(rows: &'a [DisplayRow], show_shulkers: bool, color: bool) -> Self {
        Self {
            rows,
            show_shulkers,
            color,
        }
    }

    fn styled(&self, style: Style) -> Style {
        if self.color { style } else { Style::new() }
    }

    fn rule_width(&self) -> usize {
        let numeric_columns = if self.show_shulkers { 3 } else { 2 };
        ITEM_WIDTH + numeric_columns * (SEPARATOR.len() + NUMBER_WIDTH)
    }
}

impl fmt::Display for PageView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f)?;

        // Header
        write!(
            f,
            "{}",
            format!("{:<ITEM_WIDTH$}", "Item").style(self.styled(Style::new().green().bold()))
        )?;
        if self.show_shulkers {
            write!(
                f,
                "{}{}",
                SEPARATOR,
                format!("{:<NUMBER_WIDTH$}", "Shulkers")
                    .style(self.styled(Style::new().magenta().bold()))
            )?;
        }
        writeln!(
            f,
            "{}{}{}{}",
            SEPARATOR,
            format!("{:<NUMBER_WIDTH$}", "Stacks").style(self.styled(Style::new().cyan().bold())),
            SEPARATOR,
            format!("{:<NUMBER_WIDTH$}", "Items").style(self.styled(Style::new().yellow().bold()))
        )?;
        writeln!(
            f,
            "{}",
            "-".repeat(self.rule_width())
                .style(self.styled(Style::new().bright_black()))
        )?;

        for row in self.rows {
            let item = row.item.as_deref().unwrap_or(MISSING_ITEM);
            let breakdown = row.breakdown.unwrap_or_default();

            write!(
                f,
                "{}",
                format!("{:<ITEM_WIDTH$}", item).style(self.styled(Style::new().magenta()))
            )?;
            if self.show_shulkers {
                let shulkers = breakdown.shulker_boxes.unwrap_or(0);
                write!(
                    f,
                    "{}{}",
                    SEPARATOR,
                    format!("{:>NUMBER_WIDTH$}", shulkers)
                        .style(self.styled(Style::new().green()))
                )?;
            }
            writeln!(
                f,
                "{}{}{}{}",
                SEPARATOR,
                format!("{:>NUMBER_WIDTH$}", breakdown.stacks)
                    .style(self.styled(Style::new().blue())),
                SEPARATOR,
                format!("{:>NUMBER_WIDTH$}", breakdown.items)
                    .style(self.styled(Style::new().red()))
            )?;
        }

        Ok(())
    }
}
