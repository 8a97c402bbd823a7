use crate::sim::RollSession;

/// The results table surface. The original page kept one table node alive
/// across runs; this owns the same role as plain rows of cells.
#[derive(Debug, Clone, Default, Eq, PartialEq)]
pub struct ResultsTable {
    header: Vec<String>,
    rows: Vec<Vec<String>>,
}

impl ResultsTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn header(&self) -> &[String] {
        &self.header
    }

    pub fn rows(&self) -> &[Vec<String>] {
        &self.rows
    }

    /// Rebuild the surface from scratch for a new session. The header is
    /// reset along with the data rows, so a run with fewer dice never
    /// inherits result columns from an earlier, wider one.
    pub fn rebuild(&mut self, session: &RollSession) {
        self.header.clear();
        self.rows.clear();

        self.header.push("Roll".to_owned());
        for i in 1..=session.die_count().get() {
            self.header.push(format!("Die {}", i));
        }

        for (i, record) in session.records().iter().enumerate() {
            let mut row = Vec::with_capacity(record.values().len() + 1);
            row.push(format!("Roll {}", i + 1));
            row.extend(record.values().iter().map(ToString::to_string));
            self.rows.push(row);
        }

        log::debug!(
            "table rebuilt: {} columns, {} rows",
            self.header.len(),
            self.rows.len()
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::{DieCount, NonZeroUInt};
    use crate::sim::{SimContext, StepRoller};

    fn session(die_count: u32, roll_count: usize) -> RollSession {
        let roller = StepRoller::new(NonZeroUInt::new(1).unwrap(), 1);
        let mut ctx = SimContext::new_unbounded(roller);
        ctx.run(DieCount::new(die_count).unwrap(), roll_count).unwrap()
    }

    #[test]
    fn test_rebuild_dimensions() {
        let mut table = ResultsTable::new();
        table.rebuild(&session(2, 3));
        assert_eq!(table.header(), &["Roll", "Die 1", "Die 2"]);
        assert_eq!(table.rows().len(), 3);
        assert!(table.rows().iter().all(|row| row.len() == 3));
    }

    #[test]
    fn test_rows_are_labeled_in_roll_order() {
        let mut table = ResultsTable::new();
        table.rebuild(&session(1, 2));
        assert_eq!(table.rows()[0][0], "Roll 1");
        assert_eq!(table.rows()[1][0], "Roll 2");
    }

    #[test]
    fn test_no_column_leakage_between_runs() {
        let mut table = ResultsTable::new();
        table.rebuild(&session(3, 4));
        assert_eq!(table.header().len(), 4);
        table.rebuild(&session(1, 2));
        assert_eq!(table.header(), &["Roll", "Die 1"]);
        assert!(table.rows().iter().all(|row| row.len() == 2));
    }

    #[test]
    fn test_empty_session_renders_header_only() {
        let mut table = ResultsTable::new();
        table.rebuild(&session(2, 0));
        assert_eq!(table.header().len(), 3);
        assert!(table.rows().is_empty());
    }
}
