use std::collections::BTreeSet;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use arrow::array::{Array, ArrayRef, AsArray};
use arrow::compute::cast;
use arrow::datatypes::{DataType, Float32Type, Float64Type, Int32Type, Int64Type};
use calamine::Reader;
use parquet::arrow::arrow_reader::ParquetRecordBatchReaderBuilder;
use serde_json::Value as JsonValue;
use thiserror::Error;

use super::model::{CellValue, Offer, OfferDataset};

// ---------------------------------------------------------------------------
// Source schema
// ---------------------------------------------------------------------------

pub const COL_CUTOFF: &str = "NU_NOTACORTE";
pub const COL_COURSE: &str = "NO_CURSO";
pub const COL_STATE: &str = "SG_UF_CAMPUS";
pub const COL_INSTITUTION: &str = "SG_IES";
pub const COL_CATEGORY: &str = "TIPO_CONCORRENCIA";
pub const COL_MODALITY: &str = "DS_MOD_CONCORRENCIA";

pub const REQUIRED_COLUMNS: [&str; 6] = [
    COL_CUTOFF,
    COL_COURSE,
    COL_STATE,
    COL_INSTITUTION,
    COL_CATEGORY,
    COL_MODALITY,
];

// ---------------------------------------------------------------------------
// Errors
// ---------------------------------------------------------------------------

/// Fatal load failure. No partial dataset is ever returned alongside it.
#[derive(Debug, Error)]
pub enum DataLoadError {
    #[error("unsupported file extension: .{0}")]
    UnsupportedFormat(String),
    #[error("required column '{0}' not found")]
    MissingColumn(&'static str),
    #[error("failed to load {}: {cause:#}", path.display())]
    Read { path: PathBuf, cause: anyhow::Error },
}

// ---------------------------------------------------------------------------
// Public entry-point
// ---------------------------------------------------------------------------

/// Load an offer dataset from a file.  Dispatch by extension.
///
/// Supported formats:
/// * `.xlsx` / `.xlsm` / `.xls` / `.ods` – first worksheet, header in row 1
/// * `.csv`     – header row, `,` or `;` separated
/// * `.json`    – `[{ "NO_CURSO": "...", "NU_NOTACORTE": 650.0, ... }, ...]`
/// * `.parquet` – flat table with the source column names
pub fn load_file(path: &Path) -> Result<OfferDataset, DataLoadError> {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("")
        .to_ascii_lowercase();

    let table = match ext.as_str() {
        "xlsx" | "xlsm" | "xls" | "ods" => load_spreadsheet(path),
        "csv" => load_csv(path),
        "json" => load_json(path),
        "parquet" | "pq" => load_parquet(path),
        other => return Err(DataLoadError::UnsupportedFormat(other.to_string())),
    }
    .map_err(|cause| DataLoadError::Read {
        path: path.to_path_buf(),
        cause,
    })?;

    let dataset = table.into_dataset()?;
    let missing = dataset.missing_cutoffs();
    if missing > 0 {
        log::warn!(
            "{missing} of {} rows in {} have no usable {COL_CUTOFF}",
            dataset.len(),
            path.display()
        );
    }
    Ok(dataset)
}

// ---------------------------------------------------------------------------
// Raw table → offers
// ---------------------------------------------------------------------------

/// Header plus untyped rows, as read from any format.
#[derive(Debug, Default)]
struct RawTable {
    headers: Vec<String>,
    rows: Vec<Vec<CellValue>>,
}

/// Position of each required column in a [`RawTable`] row.
#[derive(Debug, Clone, Copy)]
struct ColumnIndex {
    cutoff: usize,
    course: usize,
    state: usize,
    institution: usize,
    category: usize,
    modality: usize,
}

impl ColumnIndex {
    fn resolve(headers: &[String]) -> Result<Self, DataLoadError> {
        let find = |name: &'static str| {
            headers
                .iter()
                .position(|h| h.trim() == name)
                .ok_or(DataLoadError::MissingColumn(name))
        };
        Ok(ColumnIndex {
            cutoff: find(COL_CUTOFF)?,
            course: find(COL_COURSE)?,
            state: find(COL_STATE)?,
            institution: find(COL_INSTITUTION)?,
            category: find(COL_CATEGORY)?,
            modality: find(COL_MODALITY)?,
        })
    }

    fn offer(&self, row: &[CellValue]) -> Offer {
        let cell = |idx: usize| row.get(idx).unwrap_or(&CellValue::Empty);
        Offer {
            course_name: cell(self.course).to_text(),
            institution_code: cell(self.institution).to_text(),
            campus_state: cell(self.state).to_text(),
            competition_category: cell(self.category).to_text(),
            competition_modality_label: cell(self.modality).to_text(),
            cutoff_score: cell(self.cutoff).to_number(),
        }
    }
}

impl RawTable {
    fn into_dataset(self) -> Result<OfferDataset, DataLoadError> {
        let index = ColumnIndex::resolve(&self.headers)?;
        let offers = self.rows.iter().map(|row| index.offer(row)).collect();
        Ok(OfferDataset::from_offers(offers))
    }
}

// ---------------------------------------------------------------------------
// Spreadsheet loader
// ---------------------------------------------------------------------------

fn load_spreadsheet(path: &Path) -> Result<RawTable> {
    let mut workbook = calamine::open_workbook_auto(path).context("opening spreadsheet")?;
    let range = workbook
        .worksheet_range_at(0)
        .context("spreadsheet has no worksheets")?
        .context("reading first worksheet")?;

    let mut rows = range.rows();
    let Some(header) = rows.next() else {
        return Ok(RawTable::default());
    };
    let headers: Vec<String> = header
        .iter()
        .map(|c| spreadsheet_cell(c).to_text())
        .collect();
    let rows: Vec<Vec<CellValue>> = rows
        .map(|r| r.iter().map(spreadsheet_cell).collect())
        .collect();

    Ok(RawTable { headers, rows })
}

fn spreadsheet_cell(cell: &calamine::DataType) -> CellValue {
    match cell {
        calamine::DataType::String(s) => CellValue::Text(s.clone()),
        calamine::DataType::Float(v) => CellValue::Float(*v),
        calamine::DataType::Int(i) => CellValue::Integer(*i),
        calamine::DataType::Bool(b) => CellValue::Bool(*b),
        // Kept as the raw serial number; none of the source columns hold dates.
        calamine::DataType::DateTime(v) => CellValue::Float(*v),
        // `#N/A`, `#VALUE!` and friends read as missing.
        calamine::DataType::Empty | calamine::DataType::Error(_) => CellValue::Empty,
        other => CellValue::Text(other.to_string()),
    }
}

// ---------------------------------------------------------------------------
// CSV loader
// ---------------------------------------------------------------------------

/// CSV layout: header row with column names, one offer per record.
/// Government exports are often `;`-separated; the delimiter is picked from
/// the header line.
fn load_csv(path: &Path) -> Result<RawTable> {
    let text = std::fs::read_to_string(path).context("reading CSV file")?;
    let text = text.strip_prefix('\u{feff}').unwrap_or(&text);

    let mut reader = csv::ReaderBuilder::new()
        .delimiter(sniff_delimiter(text))
        .flexible(true)
        .from_reader(text.as_bytes());

    let headers: Vec<String> = reader
        .headers()
        .context("reading CSV headers")?
        .iter()
        .map(|h| h.to_string())
        .collect();

    let mut rows = Vec::new();
    for (row_no, result) in reader.records().enumerate() {
        let record = result.with_context(|| format!("CSV row {row_no}"))?;
        rows.push(record.iter().map(csv_cell).collect());
    }

    Ok(RawTable { headers, rows })
}

fn sniff_delimiter(text: &str) -> u8 {
    let header = text.lines().next().unwrap_or("");
    if header.matches(';').count() > header.matches(',').count() {
        b';'
    } else {
        b','
    }
}

fn csv_cell(s: &str) -> CellValue {
    if s.is_empty() {
        CellValue::Empty
    } else {
        CellValue::Text(s.to_string())
    }
}

// ---------------------------------------------------------------------------
// JSON loader
// ---------------------------------------------------------------------------

/// Records-oriented JSON, as written by `df.to_json(orient='records')`.
/// Keys absent from a record read as empty cells.
fn load_json(path: &Path) -> Result<RawTable> {
    let text = std::fs::read_to_string(path).context("reading JSON file")?;
    let root: JsonValue = serde_json::from_str(&text).context("parsing JSON")?;

    let records = root
        .as_array()
        .context("Expected top-level JSON array")?;

    let mut objects = Vec::with_capacity(records.len());
    let mut keys = BTreeSet::new();
    for (i, rec) in records.iter().enumerate() {
        let obj = rec
            .as_object()
            .with_context(|| format!("Row {i} is not a JSON object"))?;
        keys.extend(obj.keys().cloned());
        objects.push(obj);
    }

    let headers: Vec<String> = keys.into_iter().collect();
    let rows: Vec<Vec<CellValue>> = objects
        .iter()
        .map(|obj| {
            headers
                .iter()
                .map(|h| obj.get(h).map(json_cell).unwrap_or(CellValue::Empty))
                .collect()
        })
        .collect();

    Ok(RawTable { headers, rows })
}

fn json_cell(val: &JsonValue) -> CellValue {
    match val {
        JsonValue::String(s) => CellValue::Text(s.clone()),
        JsonValue::Number(n) => {
            if let Some(i) = n.as_i64() {
                CellValue::Integer(i)
            } else if let Some(f) = n.as_f64() {
                CellValue::Float(f)
            } else {
                CellValue::Text(n.to_string())
            }
        }
        JsonValue::Bool(b) => CellValue::Bool(*b),
        JsonValue::Null => CellValue::Empty,
        other => CellValue::Text(other.to_string()),
    }
}

// ---------------------------------------------------------------------------
// Parquet loader
// ---------------------------------------------------------------------------

/// Load a flat Parquet table (as written by `df.to_parquet()`).
///
/// Required columns are cast to plain Utf8/Float64 first, so dictionary
/// (pandas `category`) and decimal encodings read as values. Other columns are
/// ignored and read as empty cells.
fn load_parquet(path: &Path) -> Result<RawTable> {
    let file = std::fs::File::open(path).context("opening parquet file")?;
    let builder = ParquetRecordBatchReaderBuilder::try_new(file)
        .context("reading parquet metadata")?;
    let headers: Vec<String> = builder
        .schema()
        .fields()
        .iter()
        .map(|f| f.name().clone())
        .collect();
    let reader = builder.build().context("building parquet reader")?;

    let mut rows = Vec::new();
    for batch_result in reader {
        let batch = batch_result.context("reading parquet record batch")?;
        if batch.num_columns() != headers.len() {
            bail!(
                "record batch has {} columns, schema has {}",
                batch.num_columns(),
                headers.len()
            );
        }
        let columns = headers
            .iter()
            .zip(batch.columns())
            .map(|(name, col)| {
                if REQUIRED_COLUMNS.contains(&name.trim()) {
                    normalize_column(name, col).map(Some)
                } else {
                    Ok(None)
                }
            })
            .collect::<Result<Vec<Option<ArrayRef>>>>()?;

        for row in 0..batch.num_rows() {
            let cells = columns
                .iter()
                .map(|col| match col {
                    Some(col) => arrow_cell(col, row),
                    None => Ok(CellValue::Empty),
                })
                .collect::<Result<Vec<CellValue>>>()?;
            rows.push(cells);
        }
    }

    Ok(RawTable { headers, rows })
}

/// Cast a column to one of the types [`arrow_cell`] reads directly.
fn normalize_column(name: &str, col: &ArrayRef) -> Result<ArrayRef> {
    let target = match col.data_type() {
        DataType::Null
        | DataType::Utf8
        | DataType::LargeUtf8
        | DataType::Int32
        | DataType::Int64
        | DataType::Float32
        | DataType::Float64
        | DataType::Boolean => return Ok(col.clone()),
        DataType::Dictionary(_, value) if value.is_numeric() => DataType::Float64,
        other if other.is_numeric() => DataType::Float64,
        _ => DataType::Utf8,
    };
    cast(col.as_ref(), &target).with_context(|| {
        format!("unsupported column type {:?} for '{name}'", col.data_type())
    })
}

/// Extract a single cell from a normalized Arrow column at a given row.
fn arrow_cell(col: &ArrayRef, row: usize) -> Result<CellValue> {
    if col.is_null(row) {
        return Ok(CellValue::Empty);
    }
    let cell = match col.data_type() {
        DataType::Null => CellValue::Empty,
        DataType::Utf8 => CellValue::Text(col.as_string::<i32>().value(row).to_string()),
        DataType::LargeUtf8 => CellValue::Text(col.as_string::<i64>().value(row).to_string()),
        DataType::Int32 => CellValue::Integer(col.as_primitive::<Int32Type>().value(row) as i64),
        DataType::Int64 => CellValue::Integer(col.as_primitive::<Int64Type>().value(row)),
        DataType::Float32 => {
            CellValue::Float(col.as_primitive::<Float32Type>().value(row) as f64)
        }
        DataType::Float64 => CellValue::Float(col.as_primitive::<Float64Type>().value(row)),
        DataType::Boolean => CellValue::Bool(col.as_boolean().value(row)),
        other => bail!("unexpected column type {other:?} after normalization"),
    };
    Ok(cell)
}

#[cfg(test)]
mod tests {
    use std::io::Write;
    use std::sync::Arc;

    use arrow::array::{Decimal128Array, DictionaryArray, Float64Array, ListArray, StringArray};
    use arrow::datatypes::{Field, Schema};
    use arrow::record_batch::RecordBatch;
    use parquet::arrow::ArrowWriter;
    use pretty_assertions::assert_eq;

    use super::*;

    const HEADER: &str = "NO_CURSO,SG_IES,SG_UF_CAMPUS,TIPO_CONCORRENCIA,DS_MOD_CONCORRENCIA,NU_NOTACORTE";

    fn write_fixture(dir: &tempfile::TempDir, name: &str, contents: &str) -> PathBuf {
        let path = dir.path().join(name);
        let mut f = std::fs::File::create(&path).unwrap();
        f.write_all(contents.as_bytes()).unwrap();
        path
    }

    #[test]
    fn csv_loads_and_coerces() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_fixture(
            &dir,
            "offers.csv",
            &format!(
                "{HEADER},EXTRA\n\
                 Medicina,UFX,SP,AC,Ampla concorrência,650.5,1\n\
                 Medicina,UFY,,L1,Escola pública,abc,2\n\
                 ,UFZ,RJ,AC,Ampla concorrência,,3\n"
            ),
        );

        let ds = load_file(&path).unwrap();
        assert_eq!(ds.len(), 3);

        let first = &ds.offers()[0];
        assert_eq!(first.course_name, "Medicina");
        assert_eq!(first.institution_code, "UFX");
        assert_eq!(first.campus_state, "SP");
        assert_eq!(first.competition_category, "AC");
        assert_eq!(first.competition_modality_label, "Ampla concorrência");
        assert_eq!(first.cutoff_score, Some(650.5));

        assert_eq!(ds.offers()[1].campus_state, "nan");
        assert_eq!(ds.offers()[1].cutoff_score, None);
        assert_eq!(ds.offers()[2].course_name, "nan");
        assert_eq!(ds.offers()[2].cutoff_score, None);
        assert_eq!(ds.courses(), ["Medicina", "nan"]);
    }

    #[test]
    fn csv_semicolon_delimiter_is_detected() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_fixture(
            &dir,
            "offers.csv",
            "\u{feff}NO_CURSO;SG_IES;SG_UF_CAMPUS;TIPO_CONCORRENCIA;DS_MOD_CONCORRENCIA;NU_NOTACORTE\n\
             Direito;UFX;MG;AC;Ampla, geral;701.25\n",
        );

        let ds = load_file(&path).unwrap();
        assert_eq!(ds.len(), 1);
        assert_eq!(ds.offers()[0].competition_modality_label, "Ampla, geral");
        assert_eq!(ds.offers()[0].cutoff_score, Some(701.25));
    }

    #[test]
    fn json_records_load_with_typed_cells() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_fixture(
            &dir,
            "offers.json",
            r#"[
                {"NO_CURSO": "Medicina", "SG_IES": "UFX", "SG_UF_CAMPUS": "SP",
                 "TIPO_CONCORRENCIA": "AC", "DS_MOD_CONCORRENCIA": "Ampla", "NU_NOTACORTE": 720},
                {"NO_CURSO": "Medicina", "SG_IES": "UFY", "SG_UF_CAMPUS": "RJ",
                 "TIPO_CONCORRENCIA": "L2", "DS_MOD_CONCORRENCIA": "Cota", "NU_NOTACORTE": null}
            ]"#,
        );

        let ds = load_file(&path).unwrap();
        assert_eq!(ds.len(), 2);
        assert_eq!(ds.offers()[0].cutoff_score, Some(720.0));
        assert_eq!(ds.offers()[1].cutoff_score, None);
        assert_eq!(ds.offers()[1].competition_category, "L2");
    }

    #[test]
    fn parquet_table_loads() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("offers.parquet");

        let text = |name: &str| Field::new(name, DataType::Utf8, true);
        let schema = Arc::new(Schema::new(vec![
            text(COL_COURSE),
            text(COL_INSTITUTION),
            text(COL_STATE),
            text(COL_CATEGORY),
            text(COL_MODALITY),
            Field::new(COL_CUTOFF, DataType::Float64, true),
        ]));
        let batch = RecordBatch::try_new(
            schema.clone(),
            vec![
                Arc::new(StringArray::from(vec!["Medicina", "Medicina"])),
                Arc::new(StringArray::from(vec!["UFX", "UFY"])),
                Arc::new(StringArray::from(vec![Some("SP"), None])),
                Arc::new(StringArray::from(vec!["AC", "AC"])),
                Arc::new(StringArray::from(vec!["Ampla", "Ampla"])),
                Arc::new(Float64Array::from(vec![Some(650.0), None])),
            ],
        )
        .unwrap();
        let file = std::fs::File::create(&path).unwrap();
        let mut writer = ArrowWriter::try_new(file, schema, None).unwrap();
        writer.write(&batch).unwrap();
        writer.close().unwrap();

        let ds = load_file(&path).unwrap();
        assert_eq!(ds.len(), 2);
        assert_eq!(ds.offers()[0].cutoff_score, Some(650.0));
        assert_eq!(ds.offers()[1].campus_state, "nan");
        assert_eq!(ds.offers()[1].cutoff_score, None);
    }

    #[test]
    fn parquet_dictionary_and_decimal_columns_are_cast() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("offers.parquet");

        let dictionary = |name: &str| {
            Field::new(
                name,
                DataType::Dictionary(Box::new(DataType::Int32), Box::new(DataType::Utf8)),
                true,
            )
        };
        let dict_column = |values: [&str; 2]| -> ArrayRef {
            Arc::new(values.into_iter().collect::<DictionaryArray<Int32Type>>())
        };
        let tags = ListArray::from_iter_primitive::<Int32Type, _, _>(vec![
            Some(vec![Some(1)]),
            None,
        ]);
        let schema = Arc::new(Schema::new(vec![
            dictionary(COL_COURSE),
            Field::new(COL_INSTITUTION, DataType::Utf8, true),
            dictionary(COL_STATE),
            dictionary(COL_CATEGORY),
            Field::new(COL_MODALITY, DataType::Utf8, true),
            Field::new(COL_CUTOFF, DataType::Decimal128(10, 2), true),
            Field::new("TAGS", tags.data_type().clone(), true),
        ]));
        let cutoffs = Decimal128Array::from(vec![Some(65050_i128), None])
            .with_precision_and_scale(10, 2)
            .unwrap();
        let batch = RecordBatch::try_new(
            schema.clone(),
            vec![
                dict_column(["Medicina", "Direito"]),
                Arc::new(StringArray::from(vec!["UFX", "UFY"])),
                dict_column(["SP", "RJ"]),
                dict_column(["AC", "L1"]),
                Arc::new(StringArray::from(vec!["Ampla", "Cota"])),
                Arc::new(cutoffs),
                Arc::new(tags),
            ],
        )
        .unwrap();
        let file = std::fs::File::create(&path).unwrap();
        let mut writer = ArrowWriter::try_new(file, schema, None).unwrap();
        writer.write(&batch).unwrap();
        writer.close().unwrap();

        let ds = load_file(&path).unwrap();
        assert_eq!(ds.courses(), ["Direito", "Medicina"]);
        assert_eq!(ds.offers()[0].campus_state, "SP");
        assert_eq!(ds.offers()[1].competition_category, "L1");
        assert_eq!(ds.offers()[0].cutoff_score, Some(650.5));
        assert_eq!(ds.offers()[1].cutoff_score, None);
    }

    #[test]
    fn xlsx_first_sheet_loads_and_coerces() {
        use rust_xlsxwriter::{Formula, Workbook};

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("planilha.xlsx");

        let mut workbook = Workbook::new();
        let sheet = workbook.add_worksheet();
        let header = [
            COL_COURSE,
            COL_INSTITUTION,
            COL_STATE,
            COL_CATEGORY,
            COL_MODALITY,
            COL_CUTOFF,
        ];
        for (col, name) in header.iter().enumerate() {
            sheet.write_string(0, col as u16, *name).unwrap();
        }
        let rows = [
            ["Medicina", "UFX", "SP", "AC", "Ampla concorrência"],
            ["Medicina", "UFY", "RJ", "L1", "Escola pública"],
            ["Direito", "UFZ", "MG", "AC", "Ampla concorrência"],
            ["Direito", "UFW", "BA", "L2", "Escola pública"],
        ];
        for (r, row) in rows.iter().enumerate() {
            for (c, value) in row.iter().enumerate() {
                sheet.write_string(r as u32 + 1, c as u16, *value).unwrap();
            }
        }
        // Cutoffs: a number, a numeric string, an empty cell and an error.
        sheet.write_number(1, 5, 650.5).unwrap();
        sheet.write_string(2, 5, "712.25").unwrap();
        sheet
            .write_formula(4, 5, Formula::new("=NA()").set_result("#N/A"))
            .unwrap();
        workbook.save(&path).unwrap();

        let ds = load_file(&path).unwrap();
        assert_eq!(ds.len(), 4);
        assert_eq!(ds.courses(), ["Direito", "Medicina"]);

        let first = &ds.offers()[0];
        assert_eq!(first.course_name, "Medicina");
        assert_eq!(first.institution_code, "UFX");
        assert_eq!(first.campus_state, "SP");
        assert_eq!(first.competition_category, "AC");
        assert_eq!(first.competition_modality_label, "Ampla concorrência");
        assert_eq!(first.cutoff_score, Some(650.5));

        assert_eq!(ds.offers()[1].cutoff_score, Some(712.25));
        assert_eq!(ds.offers()[2].cutoff_score, None);
        assert_eq!(ds.offers()[3].cutoff_score, None);
        assert_eq!(ds.missing_cutoffs(), 2);
    }

    #[test]
    fn missing_column_is_reported() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_fixture(
            &dir,
            "offers.csv",
            "NO_CURSO,SG_IES,SG_UF_CAMPUS,TIPO_CONCORRENCIA,DS_MOD_CONCORRENCIA\nMedicina,UFX,SP,AC,Ampla\n",
        );

        let err = load_file(&path).unwrap_err();
        assert!(matches!(err, DataLoadError::MissingColumn(COL_CUTOFF)), "{err}");
        assert_eq!(err.to_string(), "required column 'NU_NOTACORTE' not found");
    }

    #[test]
    fn unknown_extension_is_rejected() {
        let err = load_file(Path::new("planilha.txt")).unwrap_err();
        assert!(matches!(err, DataLoadError::UnsupportedFormat(ref e) if e == "txt"));
    }

    #[test]
    fn missing_file_carries_cause() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("absent.xlsx");

        let err = load_file(&path).unwrap_err();
        match &err {
            DataLoadError::Read { path: p, .. } => assert_eq!(p, &path),
            other => panic!("unexpected error: {other}"),
        }
        assert!(err.to_string().contains("opening spreadsheet"));
    }

    #[test]
    fn malformed_json_is_a_read_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_fixture(&dir, "offers.json", "{\"not\": \"an array\"}");

        let err = load_file(&path).unwrap_err();
        assert!(matches!(err, DataLoadError::Read { .. }));
        assert!(err.to_string().contains("Expected top-level JSON array"));
    }
}
