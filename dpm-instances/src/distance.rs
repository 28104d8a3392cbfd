use crate::values::Distance;

#[derive(Debug, Clone, PartialEq)]
pub struct DistanceTable {
    pub(crate) rows: Vec<Vec<Distance>>,
}

impl DistanceTable {
    /// Returns `None` unless every row has exactly `rows.len()` entries.
    pub fn new(rows: Vec<Vec<Distance>>) -> Option<Self> {
        let n = rows.len();
        if rows.iter().all(|row| row.len() == n) {
            Some(Self { rows })
        } else {
            None
        }
    }

    pub fn from_finite(rows: Vec<Vec<f64>>) -> Option<Self> {
        Self::new(
            rows.into_iter()
                .map(|row| row.into_iter().map(Distance::Finite).collect())
                .collect(),
        )
    }

    pub fn dimension(&self) -> usize {
        self.rows.len()
    }

    pub fn get(&self, from: usize, to: usize) -> Distance {
        self.rows[from][to]
    }

    pub fn rows(&self) -> &[Vec<Distance>] {
        &self.rows
    }
}
