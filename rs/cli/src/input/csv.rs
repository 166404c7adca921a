use std::fs::File;
use std::io::Read;
use std::path::Path;

use anyhow::{Context, Result};
use clustering::{ClusteringError, Point};
use csv::{ReaderBuilder, StringRecord, Trim};
use log::debug;

use super::{Input, Row};

/// Reads a `name,birthrate,life_expectancy` table. The first row is always treated
/// as a header.
pub struct CsvReader {
    records: Vec<(usize, std::result::Result<StringRecord, String>)>,
    row_idx: usize,
}

impl CsvReader {
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let file = File::open(path)
            .with_context(|| format!("Failed to open input file {}", path.display()))?;
        let reader = Self::from_reader(file)
            .with_context(|| format!("Failed to read input file {}", path.display()))?;
        debug!("Read {} rows from {}", reader.num_rows(), path.display());
        Ok(reader)
    }

    pub fn from_reader<R: Read>(mut reader: R) -> Result<Self> {
        let mut data = vec![];
        reader.read_to_end(&mut data)?;
        Ok(Self::from_bytes(&data))
    }

    pub fn from_bytes(data: &[u8]) -> Self {
        let mut reader = ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .trim(Trim::All)
            .from_reader(data);

        let records = reader
            .records()
            .enumerate()
            .map(|(idx, record)| {
                let position = match &record {
                    Ok(r) => r.position(),
                    Err(e) => e.position(),
                };
                // Header is line 1
                let line = position.map_or(idx + 2, |p| Self::physical_line(data, p.byte()));
                (line, record.map_err(|e| e.to_string()))
            })
            .collect();
        Self {
            records,
            row_idx: 0,
        }
    }

    /// 1-based line of the record starting at `byte`. The csv crate skips blank
    /// lines without counting them, and reports a record as starting right after
    /// the previous terminator, so line breaks are skipped before counting.
    fn physical_line(data: &[u8], byte: u64) -> usize {
        let mut start = (byte as usize).min(data.len());
        while start < data.len() && matches!(data[start], b'\n' | b'\r') {
            start += 1;
        }
        1 + data[..start].iter().filter(|&&b| b == b'\n').count()
    }

    fn parse_field(
        line: usize,
        field: Option<&str>,
        column: &str,
    ) -> std::result::Result<f64, ClusteringError> {
        let field = field
            .filter(|f| !f.is_empty())
            .ok_or_else(|| ClusteringError::MalformedInputRow {
                line,
                reason: format!("missing {}", column),
            })?;
        match field.parse::<f64>() {
            Ok(value) if value.is_finite() => Ok(value),
            _ => Err(ClusteringError::MalformedInputRow {
                line,
                reason: format!("invalid {} {:?}", column, field),
            }),
        }
    }
}

impl Input for CsvReader {
    fn has_next(&self) -> bool {
        self.row_idx < self.records.len()
    }

    // Caller is responsible for checking `has_next` first
    fn next(&mut self) -> std::result::Result<Row, ClusteringError> {
        let idx = self.row_idx;
        self.row_idx += 1;

        let (line, record) = &self.records[idx];
        let line = *line;
        let record = record
            .as_ref()
            .map_err(|reason| ClusteringError::MalformedInputRow {
                line,
                reason: reason.clone(),
            })?;
        let name = record.get(0).unwrap_or_default().to_string();
        let birthrate = Self::parse_field(line, record.get(1), "birthrate")?;
        let life_expectancy = Self::parse_field(line, record.get(2), "life expectancy")?;
        Ok(Row {
            line,
            name,
            point: Point::new(birthrate, life_expectancy),
        })
    }

    fn reset(&mut self) {
        self.row_idx = 0;
    }

    fn num_rows(&self) -> usize {
        self.records.len()
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use tempdir::TempDir;

    use super::*;
    use crate::input::CountryTable;

    const DATA: &str = "\
Countries,BirthRate(Per1000 - 1953),LifeExpectancy(1953)
Afghanistan, 52.8, 31.3
Albania,38.8,53.7

Algeria,47.4,43.4
";

    #[test]
    fn test_csv_reader() {
        let mut reader = CsvReader::from_bytes(DATA.as_bytes());
        assert_eq!(reader.num_rows(), 3);

        let row = reader.next().unwrap();
        assert_eq!(row.line, 2);
        assert_eq!(row.name, "Afghanistan");
        assert_eq!(row.point, Point::new(52.8, 31.3));

        let row = reader.next().unwrap();
        assert_eq!(row.name, "Albania");

        let row = reader.next().unwrap();
        assert_eq!(row.line, 5);
        assert_eq!(row.name, "Algeria");
        assert!(!reader.has_next());

        reader.reset();
        assert!(reader.has_next());
        assert_eq!(reader.next().unwrap().name, "Afghanistan");
    }

    #[test]
    fn test_csv_reader_malformed_rows() {
        let data = "\
name,birthrate,life
Chad,45.1
Peru,abc,72.0
Mali,,49.0
Oman,20.1,nan
Fiji,22.4,66.5
";
        let mut reader = CsvReader::from_bytes(data.as_bytes());
        let (table, errors) = CountryTable::load(&mut reader);

        assert_eq!(table.len(), 1);
        assert_eq!(table.get("Fiji"), Some(&Point::new(22.4, 66.5)));
        assert_eq!(
            errors,
            vec![
                ClusteringError::MalformedInputRow {
                    line: 2,
                    reason: "missing life expectancy".to_string()
                },
                ClusteringError::MalformedInputRow {
                    line: 3,
                    reason: "invalid birthrate \"abc\"".to_string()
                },
                ClusteringError::MalformedInputRow {
                    line: 4,
                    reason: "missing birthrate".to_string()
                },
                ClusteringError::MalformedInputRow {
                    line: 5,
                    reason: "invalid life expectancy \"nan\"".to_string()
                },
            ]
        );
    }

    #[test]
    fn test_csv_reader_lines_after_blank_lines() {
        let data = "name,birthrate,life\r\n\r\nChad,45.1,50.2\r\n\r\n\r\nPeru,x,72.0\r\nFiji,22.4,66.5\n\nOman,20.1\n";
        let mut reader = CsvReader::from_bytes(data.as_bytes());
        assert_eq!(reader.num_rows(), 4);

        let row = reader.next().unwrap();
        assert_eq!(row.name, "Chad");
        assert_eq!(row.line, 3);
        assert_eq!(
            reader.next().err(),
            Some(ClusteringError::MalformedInputRow {
                line: 6,
                reason: "invalid birthrate \"x\"".to_string()
            })
        );
        assert_eq!(reader.next().unwrap().line, 7);
        assert_eq!(
            reader.next().err(),
            Some(ClusteringError::MalformedInputRow {
                line: 9,
                reason: "missing life expectancy".to_string()
            })
        );
    }

    #[test]
    fn test_csv_reader_from_reader() {
        let mut reader = CsvReader::from_reader(DATA.as_bytes()).unwrap();
        assert_eq!(reader.num_rows(), 3);
        assert_eq!(reader.next().unwrap().name, "Afghanistan");
    }

    #[test]
    fn test_csv_reader_header_only() {
        let mut reader = CsvReader::from_bytes("name,birthrate,life\n".as_bytes());
        let (table, errors) = CountryTable::load(&mut reader);
        assert!(table.is_empty());
        assert!(errors.is_empty());
    }

    #[test]
    fn test_csv_reader_open_file() {
        let temp_dir = TempDir::new("test_csv_reader_open_file").unwrap();
        let path = temp_dir.path().join("data1953.csv");
        let mut file = File::create(&path).unwrap();
        file.write_all(DATA.as_bytes()).unwrap();

        let mut reader = CsvReader::open(&path).unwrap();
        let (table, errors) = CountryTable::load(&mut reader);
        assert_eq!(table.len(), 3);
        assert!(errors.is_empty());
    }

    #[test]
    fn test_csv_reader_missing_file() {
        let err = CsvReader::open("/nonexistent/data1953.csv").err().unwrap();
        assert!(err.to_string().contains("/nonexistent/data1953.csv"));
    }
}
