use crate::common::{DieValue, Float, UInt};
use crate::sim::SessionStats;

/// The five display targets under the table. Empty fields show as "N/A"
/// instead of a stale or undefined number.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StatsPanel {
    mean: Option<Float>,
    median: Option<Float>,
    mode: Option<DieValue>,
    doubles: Option<UInt>,
    triples: Option<UInt>,
}

impl StatsPanel {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn update(&mut self, stats: Option<&SessionStats>) {
        match stats {
            Some(stats) => {
                self.mean = Some(stats.mean);
                self.median = Some(stats.median);
                self.mode = Some(stats.mode);
                self.doubles = Some(stats.doubles);
                self.triples = Some(stats.triples);
            }
            None => *self = Self::default(),
        }
    }

    /// Label/value pairs in display order.
    pub fn fields(&self) -> [(&'static str, String); 5] {
        [
            ("Mean", display(self.mean)),
            ("Median", display(self.median)),
            ("Mode", display(self.mode)),
            ("Doubles", display(self.doubles)),
            ("Triples", display(self.triples)),
        ]
    }
}

fn display<T: std::fmt::Display>(field: Option<T>) -> String {
    match field {
        Some(value) => value.to_string(),
        None => "N/A".to_owned(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_update_fills_fields() {
        let mut panel = StatsPanel::new();
        panel.update(Some(&SessionStats {
            mean: 3.5,
            median: 3.0,
            mode: 2,
            doubles: 4,
            triples: 1,
        }));
        let fields = panel.fields();
        assert_eq!(fields[0], ("Mean", "3.5".to_owned()));
        assert_eq!(fields[1], ("Median", "3".to_owned()));
        assert_eq!(fields[2], ("Mode", "2".to_owned()));
        assert_eq!(fields[3], ("Doubles", "4".to_owned()));
        assert_eq!(fields[4], ("Triples", "1".to_owned()));
    }

    #[test]
    fn test_update_with_nothing_blanks_fields() {
        let mut panel = StatsPanel::new();
        panel.update(Some(&SessionStats {
            mean: 3.5,
            median: 3.0,
            mode: 2,
            doubles: 4,
            triples: 1,
        }));
        panel.update(None);
        assert!(panel.fields().iter().all(|(_, value)| value == "N/A"));
    }
}
