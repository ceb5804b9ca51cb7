use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::num::ParseFloatError;
use std::path::{Path, PathBuf};

use thiserror::Error;

use super::model::{StatsFormat, StatsRecord};

// ---------------------------------------------------------------------------
// ParseError
// ---------------------------------------------------------------------------

/// A statistics file could not be parsed.  Every variant names the file, and
/// row-level variants carry the 1-based line number.  Input is static, so
/// none of these are worth retrying.
#[derive(Debug, Error)]
pub enum ParseError {
    #[error("{}: {source}", .path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("{}:{line}: {source}", .path.display())]
    Read {
        path: PathBuf,
        line: usize,
        #[source]
        source: io::Error,
    },

    #[error("{}:{line}: malformed token '{token}'", .path.display())]
    BadToken {
        path: PathBuf,
        line: usize,
        token: String,
        #[source]
        source: ParseFloatError,
    },

    #[error("{}:{line}: expected at least {expected} columns, found {found}", .path.display())]
    ColumnCount {
        path: PathBuf,
        line: usize,
        expected: usize,
        found: usize,
    },
}

// ---------------------------------------------------------------------------
// read_stats
// ---------------------------------------------------------------------------

/// Parse a solver statistics file into its time, enstrophy, and
/// kinetic-energy columns.
///
/// Row filtering and column indices follow the given [`StatsFormat`]; blank
/// lines are ignored under both conventions.  The returned columns have equal
/// length, one entry per data row, in file order, so the result is a pure
/// function of the file contents.  The file handle is scoped to this call and
/// released on every path, including parse failure.
pub fn read_stats(path: &Path, format: StatsFormat) -> Result<StatsRecord, ParseError> {
    let file = File::open(path).map_err(|source| ParseError::Open {
        path: path.to_path_buf(),
        source,
    })?;
    let reader = BufReader::new(file);
    let layout = format.layout();

    let mut record = StatsRecord::default();

    for (index, line) in reader.lines().enumerate() {
        let line_no = index + 1;
        let line = line.map_err(|source| ParseError::Read {
            path: path.to_path_buf(),
            line: line_no,
            source,
        })?;

        // Exactly one header row, regardless of content.
        if format == StatsFormat::HeaderPrefixed && index == 0 {
            continue;
        }
        if format == StatsFormat::CommentPrefixed && line.starts_with('#') {
            continue;
        }
        if line.trim().is_empty() {
            continue;
        }

        let tokens: Vec<&str> = line.split_whitespace().collect();
        if tokens.len() < layout.min_columns() {
            return Err(ParseError::ColumnCount {
                path: path.to_path_buf(),
                line: line_no,
                expected: layout.min_columns(),
                found: tokens.len(),
            });
        }

        let parse_column = |column: usize| -> Result<f64, ParseError> {
            let token = tokens[column];
            token.parse::<f64>().map_err(|source| ParseError::BadToken {
                path: path.to_path_buf(),
                line: line_no,
                token: token.to_string(),
                source,
            })
        };

        record.time.push(parse_column(layout.time)?);
        record.enstrophy.push(parse_column(layout.enstrophy)?);
        record.kinetic_energy.push(parse_column(layout.kinetic_energy)?);
    }

    Ok(record)
}

#[cfg(test)]
mod tests {
    use std::fs;
    use std::path::PathBuf;

    use tempfile::TempDir;

    use super::*;

    fn write_stats(dir: &TempDir, name: &str, contents: &str) -> PathBuf {
        let path = dir.path().join(name);
        fs::write(&path, contents).unwrap();
        path
    }

    #[test]
    fn comment_prefixed_rows_parse_into_three_columns() {
        let dir = TempDir::new().unwrap();
        let path = write_stats(
            &dir,
            "x3d.dat",
            "# t enstrophy eps_t ke\n0.0 1.0 9.0 2.0\n1.0 1.5 9.0 2.5\n",
        );

        let record = read_stats(&path, StatsFormat::CommentPrefixed).unwrap();
        assert_eq!(record.time, vec![0.0, 1.0]);
        assert_eq!(record.enstrophy, vec![1.0, 1.5]);
        assert_eq!(record.kinetic_energy, vec![2.0, 2.5]);
    }

    #[test]
    fn header_prefixed_skips_exactly_the_first_line() {
        let dir = TempDir::new().unwrap();
        let path = write_stats(&dir, "e3d.dat", "time enst ke\n2.0 3.0 4.0\n");

        let record = read_stats(&path, StatsFormat::HeaderPrefixed).unwrap();
        assert_eq!(record.time, vec![2.0]);
        assert_eq!(record.enstrophy, vec![3.0]);
        assert_eq!(record.kinetic_energy, vec![4.0]);
    }

    #[test]
    fn columns_always_have_equal_length() {
        let dir = TempDir::new().unwrap();
        let path = write_stats(
            &dir,
            "x3d.dat",
            "# header\n0.0 1.0 9.0 2.0\n\n0.01 1.1 9.0 2.1\n0.02 1.2 9.0 2.2\n",
        );

        let record = read_stats(&path, StatsFormat::CommentPrefixed).unwrap();
        assert_eq!(record.len(), 3);
        assert_eq!(record.time.len(), record.enstrophy.len());
        assert_eq!(record.time.len(), record.kinetic_energy.len());
    }

    #[test]
    fn rereading_yields_identical_records() {
        let dir = TempDir::new().unwrap();
        let path = write_stats(&dir, "x3d.dat", "# c\n0.0 1.0 9.0 2.0\n1.0 1.5 9.0 2.5\n");

        let first = read_stats(&path, StatsFormat::CommentPrefixed).unwrap();
        let second = read_stats(&path, StatsFormat::CommentPrefixed).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn equivalent_data_parses_equally_under_both_conventions() {
        let dir = TempDir::new().unwrap();
        let comment = write_stats(&dir, "a.dat", "# t enst x ke\n0.5 1.0 0.0 2.0\n1.5 1.1 0.0 2.1\n");
        let header = write_stats(&dir, "b.dat", "t enst ke\n0.5 1.0 2.0\n1.5 1.1 2.1\n");

        let from_comment = read_stats(&comment, StatsFormat::CommentPrefixed).unwrap();
        let from_header = read_stats(&header, StatsFormat::HeaderPrefixed).unwrap();
        assert_eq!(from_comment, from_header);
    }

    #[test]
    fn malformed_token_names_file_line_and_token() {
        let dir = TempDir::new().unwrap();
        let path = write_stats(&dir, "x3d.dat", "# c\n0.0 1.0 9.0 2.0\n1.0 oops 9.0 2.5\n");

        let err = read_stats(&path, StatsFormat::CommentPrefixed).unwrap_err();
        match &err {
            ParseError::BadToken { line, token, .. } => {
                assert_eq!(*line, 3);
                assert_eq!(token, "oops");
            }
            other => panic!("expected BadToken, got {other:?}"),
        }
        let message = err.to_string();
        assert!(message.contains("x3d.dat"));
        assert!(message.contains(":3:"));
    }

    #[test]
    fn short_row_is_a_column_count_error() {
        let dir = TempDir::new().unwrap();
        let path = write_stats(&dir, "x3d.dat", "0.0 1.0 9.0\n");

        let err = read_stats(&path, StatsFormat::CommentPrefixed).unwrap_err();
        match err {
            ParseError::ColumnCount {
                line,
                expected,
                found,
                ..
            } => {
                assert_eq!(line, 1);
                assert_eq!(expected, 4);
                assert_eq!(found, 3);
            }
            other => panic!("expected ColumnCount, got {other:?}"),
        }
    }

    #[test]
    fn missing_file_is_an_open_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("absent.dat");

        let err = read_stats(&path, StatsFormat::HeaderPrefixed).unwrap_err();
        assert!(matches!(err, ParseError::Open { .. }));
        assert!(err.to_string().contains("absent.dat"));
    }

    #[test]
    fn header_only_file_yields_an_empty_record() {
        let dir = TempDir::new().unwrap();
        let path = write_stats(&dir, "e3d.dat", "time enst ke\n");

        let record = read_stats(&path, StatsFormat::HeaderPrefixed).unwrap();
        assert!(record.is_empty());
    }
}
