use crate::core::dataset::Dataset;
use crate::core::{Rating, Record, RecordSource, Storage};
use crate::utils::error::{DashboardError, Result};
use async_trait::async_trait;
use chrono::NaiveDate;

pub const MAKE_COLUMN: &str = "Make";
pub const MODEL_COLUMN: &str = "Model";
pub const YEAR_COLUMN: &str = "Year";
pub const RATING_COLUMN: &str = "Rating";

struct ColumnIndex {
    make: usize,
    model: usize,
    year: usize,
    rating: usize,
}

impl ColumnIndex {
    fn from_headers(headers: &csv::StringRecord) -> Result<Self> {
        let find = |name: &str| {
            headers
                .iter()
                .position(|h| h.trim() == name)
                .ok_or_else(|| DashboardError::MissingColumnError {
                    column: name.to_string(),
                })
        };

        Ok(Self {
            make: find(MAKE_COLUMN)?,
            model: find(MODEL_COLUMN)?,
            year: find(YEAR_COLUMN)?,
            rating: find(RATING_COLUMN)?,
        })
    }
}

fn malformed(line: u64, column: &str, value: &str, reason: &str) -> DashboardError {
    DashboardError::MalformedRecordError {
        line,
        column: column.to_string(),
        value: value.to_string(),
        reason: reason.to_string(),
    }
}

/// 年份以 `%Y` 解析，對應當年一月一日
pub fn parse_year(raw: &str) -> Option<NaiveDate> {
    let raw = raw.trim();
    if raw.len() != 4 || !raw.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    raw.parse::<i32>()
        .ok()
        .and_then(|year| NaiveDate::from_ymd_opt(year, 1, 1))
}

/// Parses the ratings table. Any structural problem is an error; only the
/// rating column is coerced (non-numeric becomes missing).
pub fn parse_records(data: &[u8]) -> Result<Vec<Record>> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .from_reader(data);

    let columns = ColumnIndex::from_headers(reader.headers()?)?;
    let mut records = Vec::new();

    for row in reader.records() {
        let row = row?;
        let line = row.position().map(|p| p.line()).unwrap_or_default();
        let field = |index: usize| row.get(index).unwrap_or("");

        let make = field(columns.make);
        if make.is_empty() {
            return Err(malformed(line, MAKE_COLUMN, make, "make cannot be empty"));
        }

        let model = field(columns.model);
        if model.is_empty() {
            return Err(malformed(line, MODEL_COLUMN, model, "model cannot be empty"));
        }

        let raw_year = field(columns.year);
        let year = parse_year(raw_year)
            .ok_or_else(|| malformed(line, YEAR_COLUMN, raw_year, "expected a four digit year"))?;

        let raw_rating = field(columns.rating);
        let rating = Rating::parse(raw_rating);
        if rating.is_missing() && !raw_rating.is_empty() {
            tracing::debug!(
                "Line {}: rating '{}' is not numeric, treating as missing",
                line,
                raw_rating
            );
        }

        records.push(Record::new(make, model, year, rating));
    }

    Ok(records)
}

/// 從儲存層讀取 CSV 檔案的資料來源
pub struct CsvRecordSource<S: Storage> {
    storage: S,
    path: String,
}

impl<S: Storage> CsvRecordSource<S> {
    pub fn new(storage: S, path: impl Into<String>) -> Self {
        Self {
            storage,
            path: path.into(),
        }
    }
}

#[async_trait]
impl<S: Storage> RecordSource for CsvRecordSource<S> {
    async fn load(&self) -> Result<Vec<Record>> {
        tracing::info!("📥 Loading ratings from: {}", self.path);
        let data = self.storage.read_file(&self.path).await?;
        let records = parse_records(&data)?;

        let missing = records.iter().filter(|r| r.rating.is_missing()).count();
        tracing::info!(
            "✅ Loaded {} records ({} without a numeric rating)",
            records.len(),
            missing
        );
        Ok(records)
    }
}

/// 載入資料並建立唯讀的 `Dataset`
pub async fn load_dataset<R: RecordSource + ?Sized>(source: &R) -> Result<Dataset> {
    let records = source.load().await?;
    if records.is_empty() {
        tracing::warn!("⚠️ Dataset is empty, the chart will have no series");
    }

    let dataset = Dataset::from_records(records);
    tracing::info!(
        "📊 {} makes, {} (make, model) series",
        dataset.makes().len(),
        dataset.groups().len()
    );
    Ok(dataset)
}
