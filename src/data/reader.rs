use std::path::Path;

use log::debug;
use ndarray::{Array1, Array2};

use crate::error::{HarError, Result};

// ---------------------------------------------------------------------------
// Public entry-points
// ---------------------------------------------------------------------------

/// Read a whitespace-delimited numeric file into a `(rows, columns)` matrix.
pub fn read_matrix(path: &Path) -> Result<Array2<f64>> {
    let text = read_text(path)?;
    let matrix = parse_matrix(&text, path)?;
    debug!("read {} -> {:?}", path.display(), matrix.dim());
    Ok(matrix)
}

/// Read a single-column file of integer class ids.
pub fn read_label_column(path: &Path) -> Result<Array1<i64>> {
    let text = read_text(path)?;
    let labels = parse_label_column(&text, path)?;
    debug!("read {} -> {} labels", path.display(), labels.len());
    Ok(labels)
}

// ---------------------------------------------------------------------------
// Parsing
// ---------------------------------------------------------------------------

fn read_text(path: &Path) -> Result<String> {
    std::fs::read_to_string(path).map_err(|source| HarError::Io {
        path: path.to_path_buf(),
        source,
    })
}

/// `path` is only used to label errors.
pub(crate) fn parse_matrix(text: &str, path: &Path) -> Result<Array2<f64>> {
    let table = parse_table(text, path, |token, line, column| {
        token.parse::<f64>().map_err(|_| HarError::Parse {
            path: path.to_path_buf(),
            line,
            column,
            token: token.to_string(),
        })
    })?;
    Ok(Array2::from_shape_vec((table.rows, table.columns), table.values)?)
}

pub(crate) fn parse_label_column(text: &str, path: &Path) -> Result<Array1<i64>> {
    let table = parse_table(text, path, |token, line, _| {
        parse_class_id(token).ok_or_else(|| HarError::InvalidLabel {
            path: path.to_path_buf(),
            line,
            token: token.to_string(),
        })
    })?;
    if table.columns != 1 {
        return Err(HarError::RaggedRow {
            path: path.to_path_buf(),
            line: table.first_line,
            expected: 1,
            found: table.columns,
        });
    }
    Ok(Array1::from_vec(table.values))
}

/// Accepts `5` as well as the `5.0` some exporters write.
fn parse_class_id(token: &str) -> Option<i64> {
    if let Ok(i) = token.parse::<i64>() {
        return Some(i);
    }
    let f = token.parse::<f64>().ok()?;
    (f.is_finite() && f.fract() == 0.0).then_some(f as i64)
}

struct Table<T> {
    values: Vec<T>,
    rows: usize,
    columns: usize,
    first_line: u64,
}

/// Split `text` into rows of whitespace-separated tokens and convert each
/// token with `parse(token, line, column)`. Every row must have as many
/// tokens as the first one.
fn parse_table<T>(
    text: &str,
    path: &Path,
    parse: impl Fn(&str, u64, usize) -> Result<T>,
) -> Result<Table<T>> {
    // Runs of spaces become empty fields, which are dropped below.
    let normalized = text.replace('\t', " ");
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .delimiter(b' ')
        .quoting(false)
        .flexible(true)
        .from_reader(normalized.as_bytes());

    let mut values = Vec::new();
    let mut rows = 0;
    let mut columns = 0;
    let mut first_line = 0;

    for result in reader.records() {
        let record = result.map_err(|source| HarError::Csv {
            path: path.to_path_buf(),
            source,
        })?;
        let line = record.position().map(|p| p.line()).unwrap_or_default();
        let tokens: Vec<&str> = record.iter().filter(|f| !f.is_empty()).collect();
        if tokens.is_empty() {
            continue;
        }

        if rows == 0 {
            columns = tokens.len();
            first_line = line;
            values.reserve(columns);
        } else if tokens.len() != columns {
            return Err(HarError::RaggedRow {
                path: path.to_path_buf(),
                line,
                expected: columns,
                found: tokens.len(),
            });
        }

        for (column, token) in tokens.into_iter().enumerate() {
            values.push(parse(token, line, column)?);
        }
        rows += 1;
    }

    if rows == 0 {
        return Err(HarError::EmptyFile {
            path: path.to_path_buf(),
        });
    }

    Ok(Table {
        values,
        rows,
        columns,
        first_line,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;

    fn path() -> &'static Path {
        Path::new("fixture.txt")
    }

    #[test]
    fn whitespace_runs_are_one_separator() {
        let text = "  1.0e-1  2.5   -3\n\t4\t\t5 6  \n";
        let m = parse_matrix(text, path()).unwrap();
        assert_eq!(m, array![[0.1, 2.5, -3.0], [4.0, 5.0, 6.0]]);
    }

    #[test]
    fn blank_lines_and_crlf_are_skipped() {
        let text = "1 2\r\n\r\n   \r\n3 4\r\n";
        let m = parse_matrix(text, path()).unwrap();
        assert_eq!(m.dim(), (2, 2));
        assert_eq!(m[[1, 0]], 3.0);
    }

    #[test]
    fn ragged_row_reports_line() {
        let err = parse_matrix("1 2 3\n4 5\n", path()).unwrap_err();
        match err {
            HarError::RaggedRow {
                line,
                expected,
                found,
                ..
            } => {
                assert_eq!(line, 2);
                assert_eq!(expected, 3);
                assert_eq!(found, 2);
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn non_numeric_token() {
        let err = parse_matrix("1 2\n3 abc\n", path()).unwrap_err();
        match err {
            HarError::Parse {
                line,
                column,
                token,
                ..
            } => {
                assert_eq!((line, column), (2, 1));
                assert_eq!(token, "abc");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn empty_file() {
        assert!(matches!(
            parse_matrix("\n  \n", path()),
            Err(HarError::EmptyFile { .. })
        ));
    }

    #[test]
    fn labels_accept_integral_floats() {
        let labels = parse_label_column("5\n 2\n6.0\n", path()).unwrap();
        assert_eq!(labels, array![5, 2, 6]);
    }

    #[test]
    fn labels_reject_fractions_and_extra_columns() {
        assert!(matches!(
            parse_label_column("1\n2.5\n", path()),
            Err(HarError::InvalidLabel { line: 2, .. })
        ));
        assert!(matches!(
            parse_label_column("1 2\n3 4\n", path()),
            Err(HarError::RaggedRow { expected: 1, found: 2, .. })
        ));
    }

    #[test]
    fn missing_file_is_io_error() {
        let err = read_matrix(Path::new("/no/such/dir/body_acc_x_train.txt")).unwrap_err();
        assert!(matches!(err, HarError::Io { .. }));
        assert!(err.to_string().contains("body_acc_x_train.txt"));
    }
}
