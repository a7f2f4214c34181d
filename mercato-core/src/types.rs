//! Common data structures shared across the mercato workspace.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::MercatoError;

/// Coin identifier that must be present for dominance to be defined.
pub const BITCOIN: &str = "bitcoin";

/// Column name of the derived bitcoin dominance series.
pub const DOMINANCE_COLUMN: &str = "btc_dominance";

/// Reserved series name used by search-interest producers to flag incomplete
/// trailing buckets. Dropped before the merge; never reaches the table.
pub const PARTIAL_MARKER_COLUMN: &str = "is_partial";

/// Default lookback window, in days, for a table request.
pub const DEFAULT_LOOKBACK_DAYS: u32 = 365;

/// Default search-interest timeframe string passed to producers.
pub const DEFAULT_TRENDS_TIMEFRAME: &str = "today 12-m";

/// One cell of a series or table: a number, display-only text, or nothing.
///
/// Strict numeric coercion lives in [`Cell::as_numeric`]: numbers pass through
/// when finite, text parses with `str::parse::<f64>` after trimming, and
/// everything else is missing for numeric purposes. Text that fails parsing is
/// retained for display and CSV export only.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Cell {
    /// A numeric observation.
    Number(f64),
    /// A non-numeric observation kept for display only.
    Text(String),
    /// No observation.
    Missing,
}

impl Cell {
    /// Strictly coerce this cell to a finite numeric value.
    #[must_use]
    pub fn as_numeric(&self) -> Option<f64> {
        match self {
            Self::Number(v) if v.is_finite() => Some(*v),
            Self::Number(_) | Self::Missing => None,
            Self::Text(s) => s.trim().parse::<f64>().ok().filter(|v| v.is_finite()),
        }
    }

    /// Whether this cell carries no observation at all.
    #[must_use]
    pub const fn is_missing(&self) -> bool {
        matches!(self, Self::Missing)
    }
}

impl From<f64> for Cell {
    fn from(v: f64) -> Self {
        Self::Number(v)
    }
}

/// One named series of dated observations from a single producer.
///
/// Dates are sorted and unique by construction; they need not be contiguous
/// or aligned with any other series.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DatedSeries {
    name: String,
    points: BTreeMap<NaiveDate, Cell>,
}

impl DatedSeries {
    /// Create an empty series with the given name.
    pub fn empty(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            points: BTreeMap::new(),
        }
    }

    /// Build a series from numeric (date, value) pairs. Later duplicates win.
    pub fn from_values<I>(name: impl Into<String>, values: I) -> Self
    where
        I: IntoIterator<Item = (NaiveDate, f64)>,
    {
        let mut s = Self::empty(name);
        for (date, v) in values {
            s.points.insert(date, Cell::Number(v));
        }
        s
    }

    /// Insert or replace the cell at `date`.
    pub fn insert(&mut self, date: NaiveDate, cell: Cell) {
        self.points.insert(date, cell);
    }

    /// The series (and future column) name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Number of dated observations.
    #[must_use]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Whether the series holds no observations.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Cell at `date`, if present.
    #[must_use]
    pub fn get(&self, date: NaiveDate) -> Option<&Cell> {
        self.points.get(&date)
    }

    /// Iterate observations in ascending date order.
    pub fn iter(&self) -> impl Iterator<Item = (NaiveDate, &Cell)> {
        self.points.iter().map(|(d, c)| (*d, c))
    }

    /// Deconstruct into the name and the sorted point map.
    #[must_use]
    pub fn into_parts(self) -> (String, BTreeMap<NaiveDate, Cell>) {
        (self.name, self.points)
    }
}

/// One named column of an [`AlignedTable`], holding exactly one cell per row.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Column {
    pub(crate) name: String,
    pub(crate) cells: Vec<Cell>,
}

impl Column {
    /// The column name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Cells aligned positionally with the table's row dates.
    #[must_use]
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }
}

/// The outer-joined, gap-filled, multi-column daily table combining all
/// sources.
///
/// Invariants:
/// - row dates are strictly ascending with no duplicates and span the union
///   of all input dates;
/// - every column holds exactly one cell per row;
/// - the table is never mutated after construction, except by the caller's
///   own [`AlignedTable::between`] windowing, which only narrows the row set.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AlignedTable {
    pub(crate) dates: Vec<NaiveDate>,
    pub(crate) columns: Vec<Column>,
}

impl AlignedTable {
    /// Number of rows.
    #[must_use]
    pub fn len(&self) -> usize {
        self.dates.len()
    }

    /// Whether the table has no rows.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.dates.is_empty()
    }

    /// The ascending, duplicate-free row dates.
    #[must_use]
    pub fn dates(&self) -> &[NaiveDate] {
        &self.dates
    }

    /// Column names in insertion order.
    pub fn column_names(&self) -> impl Iterator<Item = &str> {
        self.columns.iter().map(|c| c.name.as_str())
    }

    /// Look up a column by name.
    #[must_use]
    pub fn column(&self, name: &str) -> Option<&Column> {
        self.columns.iter().find(|c| c.name == name)
    }

    /// Cell at (`date`, `column`), if both exist.
    #[must_use]
    pub fn cell(&self, date: NaiveDate, column: &str) -> Option<&Cell> {
        let row = self.dates.binary_search(&date).ok()?;
        self.column(column).map(|c| &c.cells[row])
    }

    /// Strictly coerced numeric value at (`date`, `column`).
    #[must_use]
    pub fn numeric_at(&self, date: NaiveDate, column: &str) -> Option<f64> {
        self.cell(date, column).and_then(Cell::as_numeric)
    }

    /// The numeric-only view of one column: rows whose cell is missing or
    /// fails strict coercion are dropped, in ascending date order.
    ///
    /// Returns an empty vector for an unknown column name.
    #[must_use]
    pub fn numeric_series(&self, column: &str) -> Vec<(NaiveDate, f64)> {
        let Some(col) = self.column(column) else {
            return Vec::new();
        };
        self.dates
            .iter()
            .zip(&col.cells)
            .filter_map(|(d, c)| c.as_numeric().map(|v| (*d, v)))
            .collect()
    }

    /// Window the table to the inclusive date range `[from, to]`.
    ///
    /// Slicing only narrows the row set, so all table invariants hold on the
    /// result.
    #[must_use]
    pub fn between(&self, from: NaiveDate, to: NaiveDate) -> Self {
        let start = self.dates.partition_point(|d| *d < from);
        let end = self.dates.partition_point(|d| *d <= to);
        Self {
            dates: self.dates[start..end].to_vec(),
            columns: self
                .columns
                .iter()
                .map(|c| Column {
                    name: c.name.clone(),
                    cells: c.cells[start..end].to_vec(),
                })
                .collect(),
        }
    }

    /// Export the table as a flat, comma-separated, dated row format: one
    /// header row with `date` as the row-key column, ISO-8601 dates, empty
    /// fields for missing cells. This is the only exported artifact of the
    /// core.
    ///
    /// # Errors
    /// Returns `Err(MercatoError::Csv)` if record serialization fails.
    pub fn to_csv(&self) -> Result<String, MercatoError> {
        let mut wtr = csv::Writer::from_writer(Vec::new());
        let mut header = Vec::with_capacity(self.columns.len() + 1);
        header.push("date".to_string());
        header.extend(self.columns.iter().map(|c| c.name.clone()));
        wtr.write_record(&header)?;

        let mut record = Vec::with_capacity(self.columns.len() + 1);
        for (row, date) in self.dates.iter().enumerate() {
            record.clear();
            record.push(date.to_string());
            for col in &self.columns {
                record.push(match &col.cells[row] {
                    Cell::Number(v) => v.to_string(),
                    Cell::Text(s) => s.clone(),
                    Cell::Missing => String::new(),
                });
            }
            wtr.write_record(&record)?;
        }

        let bytes = wtr
            .into_inner()
            .map_err(|e| MercatoError::InvalidArg(format!("csv buffer: {e}")))?;
        Ok(String::from_utf8_lossy(&bytes).into_owned())
    }
}

/// One point of a forecast trajectory: central estimate plus the lower and
/// upper uncertainty bounds.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ForecastPoint {
    /// Calendar date of this point.
    pub date: NaiveDate,
    /// Central estimate.
    pub yhat: f64,
    /// Lower uncertainty bound.
    pub yhat_lower: f64,
    /// Upper uncertainty bound.
    pub yhat_upper: f64,
}

/// A full forecast for one column: the reconstructed history plus exactly
/// `horizon` future daily points, and the historical-fit error metrics.
#[derive(Debug, Clone, PartialEq)]
pub struct Forecast {
    /// Trajectory spanning the cleaned observed history (one point per
    /// observation) followed by `horizon` consecutive future daily dates.
    pub points: Vec<ForecastPoint>,
    /// Mean absolute error of the reconstruction over observed history.
    pub mae: f64,
    /// Root-mean-squared error of the reconstruction over observed history.
    pub rmse: f64,
    /// Number of future days beyond the last observed date.
    pub horizon: u32,
}

impl Forecast {
    /// The reconstructed-history portion of the trajectory.
    #[must_use]
    pub fn history(&self) -> &[ForecastPoint] {
        let split = self.points.len() - self.horizon as usize;
        &self.points[..split]
    }

    /// The future portion of the trajectory: exactly `horizon` points with
    /// dates strictly after the last observed date, consecutive daily.
    #[must_use]
    pub fn future(&self) -> &[ForecastPoint] {
        let split = self.points.len() - self.horizon as usize;
        &self.points[split..]
    }
}

/// Parameters for one table aggregation.
///
/// All configuration is explicit; the core holds no ambient state and is
/// re-entrant across requests.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TableRequest {
    /// Coin identifiers to fetch market caps for. Must include `bitcoin` for
    /// dominance to be defined.
    pub coins: Vec<String>,
    /// Access key for the macro series producer; `None` skips the macro
    /// fetch entirely and an empty macro column is merged instead.
    pub macro_key: Option<String>,
    /// Free-text search-interest keywords.
    pub keywords: Vec<String>,
    /// Lookback window in days.
    pub days: u32,
    /// Timeframe string handed to the search-interest producer.
    pub trends_timeframe: String,
}

impl TableRequest {
    /// Build a request for the given coins with the default lookback window
    /// and timeframe, no macro key, and no keywords.
    pub fn new<I, S>(coins: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            coins: coins.into_iter().map(Into::into).collect(),
            macro_key: None,
            keywords: Vec::new(),
            days: DEFAULT_LOOKBACK_DAYS,
            trends_timeframe: DEFAULT_TRENDS_TIMEFRAME.to_string(),
        }
    }

    /// Set the macro access key.
    #[must_use]
    pub fn macro_key(mut self, key: impl Into<String>) -> Self {
        self.macro_key = Some(key.into());
        self
    }

    /// Set the search-interest keywords.
    #[must_use]
    pub fn keywords<I, S>(mut self, keywords: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.keywords = keywords.into_iter().map(Into::into).collect();
        self
    }

    /// Set the lookback window in days.
    #[must_use]
    pub const fn days(mut self, days: u32) -> Self {
        self.days = days;
        self
    }
}
