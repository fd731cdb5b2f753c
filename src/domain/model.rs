use crate::utils::error::{OnCourtError, Result};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// JSON envelope returned by the stats endpoints.
#[derive(Debug, Clone, Deserialize)]
pub struct Envelope {
    #[serde(rename = "resultSets", default)]
    pub result_sets: Vec<ResultSet>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ResultSet {
    #[serde(default)]
    pub name: Option<String>,
    pub headers: Vec<String>,
    #[serde(rename = "rowSet")]
    pub row_set: Vec<Vec<Value>>,
}

impl Envelope {
    pub fn first(self) -> Result<ResultSet> {
        self.result_sets
            .into_iter()
            .next()
            .ok_or(OnCourtError::MissingResultSetError)
    }
}

/// Column-labelled rows, in response order.
#[derive(Debug, Clone, PartialEq)]
pub struct Table {
    headers: Vec<String>,
    rows: Vec<Vec<Value>>,
}

impl Table {
    pub fn new(headers: Vec<String>, rows: Vec<Vec<Value>>) -> Result<Self> {
        if let Some((row, values)) = rows
            .iter()
            .enumerate()
            .find(|(_, values)| values.len() != headers.len())
        {
            return Err(OnCourtError::RowArityError {
                row,
                expected: headers.len(),
                found: values.len(),
            });
        }
        Ok(Self { headers, rows })
    }

    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    pub fn rows(&self) -> &[Vec<Value>] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn column_index(&self, column: &str) -> Result<usize> {
        self.headers
            .iter()
            .position(|h| h == column)
            .ok_or_else(|| OnCourtError::ColumnNotFoundError {
                column: column.to_string(),
                available: self.headers.join(", "),
            })
    }

    /// Projects the given columns, in the given order.
    pub fn select(&self, columns: &[&str]) -> Result<Table> {
        let indices = columns
            .iter()
            .map(|c| self.column_index(c))
            .collect::<Result<Vec<_>>>()?;

        let rows = self
            .rows
            .iter()
            .map(|row| indices.iter().map(|&i| row[i].clone()).collect())
            .collect();

        Ok(Table {
            headers: columns.iter().map(|c| c.to_string()).collect(),
            rows,
        })
    }
}

impl TryFrom<ResultSet> for Table {
    type Error = OnCourtError;

    fn try_from(set: ResultSet) -> Result<Self> {
        Table::new(set.headers, set.row_set)
    }
}

/// One play-by-play row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlayEvent {
    pub period: u32,
    pub clock: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimedEvent {
    pub period: u32,
    pub clock: String,
    /// Tenths of a second since tip-off.
    pub elapsed: i64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct BoundarySample {
    pub period: u32,
    pub elapsed: i64,
}

/// Range query bounds in tenths of a second (`rangeType=2`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TimeWindow {
    pub lower: i64,
    pub upper: i64,
}

impl TimeWindow {
    pub fn around(center: i64, radius: i64) -> Self {
        Self {
            lower: center.saturating_sub(radius),
            upper: center.saturating_add(radius),
        }
    }
}

/// A boundary sample with the boxscore query it turns into.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PeriodWindow {
    pub sample: BoundarySample,
    pub window: TimeWindow,
    pub url: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OnCourtPlayer {
    pub player_id: i64,
    pub player_name: String,
    pub period: u32,
}

#[derive(Debug, Clone, Default)]
pub struct TransformResult {
    pub boundaries: Vec<BoundarySample>,
    pub players: Vec<OnCourtPlayer>,
}
