use super::{Page, ResultsTable, StatsPanel};

/// Renders the page surface to text. Implementations override the table and
/// stats renderings; the page layout itself is shared.
pub trait Stringify {
    fn stringify(&mut self, page: &Page) -> String {
        self.str_page(page)
    }

    fn str_page(&mut self, page: &Page) -> String {
        format!(
            "{}\n\n{}",
            self.str_table(page.table()),
            self.str_stats(page.stats())
        )
    }

    fn str_table(&mut self, table: &ResultsTable) -> String;

    fn str_stats(&mut self, panel: &StatsPanel) -> String;
}

/// Fixed-width text columns.
#[derive(Default)]
pub struct SimpleStringifier;

impl SimpleStringifier {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Stringify for SimpleStringifier {
    fn str_table(&mut self, table: &ResultsTable) -> String {
        let mut widths: Vec<usize> = table.header().iter().map(String::len).collect();
        for row in table.rows() {
            for (i, cell) in row.iter().enumerate() {
                if cell.len() > widths[i] {
                    widths[i] = cell.len();
                }
            }
        }

        let fmt_row = |cells: &[String]| -> String {
            let padded: Vec<_> = cells
                .iter()
                .zip(widths.iter().copied())
                .map(|(cell, width)| format!("{:<width$}", cell, width = width))
                .collect();
            padded.join("  ").trim_end().to_owned()
        };

        let mut lines = vec![fmt_row(table.header())];
        lines.extend(table.rows().iter().map(|row| fmt_row(row)));
        lines.join("\n")
    }

    fn str_stats(&mut self, panel: &StatsPanel) -> String {
        panel
            .fields()
            .iter()
            .map(|(label, value)| format!("{}: {}", label, value))
            .collect::<Vec<_>>()
            .join("\n")
    }
}

/// Markdown pipe table with a bold stats block.
#[derive(Default)]
pub struct MarkdownStringifier;

impl MarkdownStringifier {
    pub fn new() -> Self {
        Self::default()
    }

    fn fmt_row(cells: &[String]) -> String {
        format!("| {} |", cells.join(" | "))
    }
}

impl Stringify for MarkdownStringifier {
    fn str_table(&mut self, table: &ResultsTable) -> String {
        let mut lines = vec![
            Self::fmt_row(table.header()),
            format!("|{}", " --- |".repeat(table.header().len())),
        ];
        lines.extend(table.rows().iter().map(|row| Self::fmt_row(row)));
        lines.join("\n")
    }

    fn str_stats(&mut self, panel: &StatsPanel) -> String {
        panel
            .fields()
            .iter()
            .map(|(label, value)| format!("**{}:** {}", label, value))
            .collect::<Vec<_>>()
            .join("\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::{DieCount, NonZeroUInt};
    use crate::sim::StepRoller;

    macro_rules! check {
        ($cls:ident, $dice:expr, $rolls:expr, $expected:expr) => {
            let roller = StepRoller::new(NonZeroUInt::new(1).unwrap(), 1);
            let outcome =
                crate::simulate_with(DieCount::new($dice).unwrap(), $rolls, roller).unwrap();
            let mut page = Page::new();
            page.render(&outcome.session, outcome.stats.as_ref());
            let actual = $cls::new().stringify(&page);
            assert_eq!(actual, $expected);
        };
    }

    #[test]
    fn test_simple_stringify() {
        check!(
            SimpleStringifier,
            2,
            2,
            "Roll    Die 1  Die 2\n\
             Roll 1  1      2\n\
             Roll 2  3      4\n\
             \n\
             Mean: 2.5\n\
             Median: 2.5\n\
             Mode: 1\n\
             Doubles: 0\n\
             Triples: 0"
        );
    }

    #[test]
    fn test_simple_stringify_empty_session() {
        check!(
            SimpleStringifier,
            2,
            0,
            "Roll  Die 1  Die 2\n\
             \n\
             Mean: N/A\n\
             Median: N/A\n\
             Mode: N/A\n\
             Doubles: N/A\n\
             Triples: N/A"
        );
    }

    #[test]
    fn test_markdown_stringify() {
        check!(
            MarkdownStringifier,
            2,
            2,
            "| Roll | Die 1 | Die 2 |\n\
             | --- | --- | --- |\n\
             | Roll 1 | 1 | 2 |\n\
             | Roll 2 | 3 | 4 |\n\
             \n\
             **Mean:** 2.5\n\
             **Median:** 2.5\n\
             **Mode:** 1\n\
             **Doubles:** 0\n\
             **Triples:** 0"
        );
    }
}
