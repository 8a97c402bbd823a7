use crate::common::{DieCount, DieValue, NonEmpty, UInt};

/// One throw of all dice, values in fixed die-index order.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct RollRecord {
    values: NonEmpty<DieValue>,
}

impl RollRecord {
    pub(crate) fn new(values: NonEmpty<DieValue>) -> Self {
        Self { values }
    }

    pub fn values(&self) -> &[DieValue] {
        &self.values
    }
}

/// Everything one invocation produced: the ordered rolls plus the match
/// tallies accumulated while they were generated. Superseded wholesale by
/// the next invocation.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct RollSession {
    die_count: DieCount,
    records: Vec<RollRecord>,
    doubles: UInt,
    triples: UInt,
}

impl RollSession {
    pub(crate) fn new(
        die_count: DieCount,
        records: Vec<RollRecord>,
        doubles: UInt,
        triples: UInt,
    ) -> Self {
        Self {
            die_count,
            records,
            doubles,
            triples,
        }
    }

    pub fn die_count(&self) -> DieCount {
        self.die_count
    }

    pub fn records(&self) -> &[RollRecord] {
        &self.records
    }

    pub fn doubles(&self) -> UInt {
        self.doubles
    }

    pub fn triples(&self) -> UInt {
        self.triples
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// All die values in roll order, then die-index order within each roll.
    pub fn flat_values(&self) -> Vec<DieValue> {
        self.records
            .iter()
            .flat_map(|r| r.values().iter().copied())
            .collect()
    }
}

/// Counts the equal pairs within one roll, and how many of those pairs the
/// remaining die also matches. Every unordered pair is checked on its own,
/// so a three-of-a-kind counts three doubles and three triples. Collapsing
/// that to one per roll would change the reported numbers.
pub(crate) fn match_tally(values: &[DieValue]) -> (UInt, UInt) {
    let mut doubles = 0;
    let mut triples = 0;
    for i in 0..values.len() {
        for j in i + 1..values.len() {
            if values[i] != values[j] {
                continue;
            }
            doubles += 1;
            if values.len() == 3 {
                let k = 3 - i - j; // index of the remaining die
                if values[k] == values[i] {
                    triples += 1;
                }
            }
        }
    }
    (doubles, triples)
}
