mod panel;
mod stringify;
mod table;

pub use panel::StatsPanel;
pub use stringify::{MarkdownStringifier, SimpleStringifier, Stringify};
pub use table::ResultsTable;

use crate::sim::{RollSession, SessionStats};

/// The output surfaces of one page, owned by the shell and passed into the
/// render step instead of being resolved by ambient lookup.
#[derive(Debug, Clone, Default)]
pub struct Page {
    table: ResultsTable,
    stats: StatsPanel,
}

impl Page {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn table(&self) -> &ResultsTable {
        &self.table
    }

    pub fn stats(&self) -> &StatsPanel {
        &self.stats
    }

    /// Write one invocation's results into the surfaces. `stats` is absent
    /// when the session produced no values; the panel blanks out rather
    /// than keeping the previous run's numbers.
    pub fn render(&mut self, session: &RollSession, stats: Option<&SessionStats>) {
        self.table.rebuild(session);
        self.stats.update(stats);
    }
}
