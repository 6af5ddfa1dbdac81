use std::fs::File;
use std::io::{BufRead, BufReader, Read};
use std::path::Path;

use csv::StringRecord;
use log::{debug, trace};

use super::error::{Result, RosterError};
use super::model::{Record, FIELD_COUNT};

// ---------------------------------------------------------------------------
// Public entry-points
// ---------------------------------------------------------------------------

/// Read every record from the file at `path`.
///
/// The file handle lives only for the duration of this call. Open and read
/// failures come back as [`RosterError::Io`]; content problems as
/// [`RosterError::MalformedLine`] or [`RosterError::Csv`].
pub fn load_file(path: &Path) -> Result<Vec<Record>> {
    let file = File::open(path).map_err(|source| RosterError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let records = parse_records(file).map_err(|err| attach_path(err, path))?;
    debug!("loaded {} records from {}", records.len(), path.display());
    Ok(records)
}

/// Parse `first|last|house|adviser|cohort` lines from any reader.
///
/// * No header row, no quoting: every character except `|` is literal.
/// * Trailing whitespace at the end of a line is dropped.
/// * Empty and whitespace-only lines are skipped.
/// * Any other line must have exactly five fields.
///
/// Line numbers in errors count every physical line, blank ones included.
pub fn parse_records<R: Read>(reader: R) -> Result<Vec<Record>> {
    let splitter = line_splitter();
    let mut records = Vec::new();
    let mut raw = StringRecord::new();

    for (idx, line) in BufReader::new(reader).split(b'\n').enumerate() {
        let line = line.map_err(RosterError::Read)?;
        let line_no = idx as u64 + 1;

        if line.iter().all(u8::is_ascii_whitespace) {
            trace!("line {line_no}: blank, skipped");
            continue;
        }
        // One physical line never holds more than one record.
        if !splitter.from_reader(line.as_slice()).read_record(&mut raw)? {
            continue;
        }

        let mut fields: Vec<&str> = raw.iter().collect();
        if let Some(last) = fields.last_mut() {
            *last = last.trim_end();
        }
        records.push(record_from_fields(&fields, line_no)?);
    }

    Ok(records)
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Field splitter for a single line. `\r` is left in the last field and
/// removed with the rest of the trailing whitespace.
fn line_splitter() -> csv::ReaderBuilder {
    let mut builder = csv::ReaderBuilder::new();
    builder
        .delimiter(b'|')
        .terminator(csv::Terminator::Any(b'\n'))
        .has_headers(false)
        .flexible(true)
        .quoting(false);
    builder
}

fn record_from_fields(fields: &[&str], line: u64) -> Result<Record> {
    match fields {
        [first_name, last_name, house, adviser, cohort] => Ok(Record::new(
            *first_name,
            *last_name,
            *house,
            *adviser,
            *cohort,
        )),
        _ => Err(RosterError::MalformedLine {
            line,
            expected: FIELD_COUNT,
            found: fields.len(),
        }),
    }
}

/// Read failures surface as `Io` with the offending path.
fn attach_path(err: RosterError, path: &Path) -> RosterError {
    match err {
        RosterError::Read(source) => RosterError::Io {
            path: path.to_path_buf(),
            source,
        },
        other => other,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn parse(text: &str) -> Result<Vec<Record>> {
        parse_records(text.as_bytes())
    }

    #[test]
    fn parses_fields_in_fixed_order() {
        let recs = parse("Harry|Potter|Gryffindor|McGonagall|Fall 2015\n").unwrap();
        assert_eq!(
            recs,
            vec![Record::new("Harry", "Potter", "Gryffindor", "McGonagall", "Fall 2015")]
        );
    }

    #[test]
    fn keeps_empty_house_field() {
        let recs = parse("Severus|Snape||Dumbledore|I\n").unwrap();
        assert_eq!(recs[0].house, "");
        assert_eq!(recs[0].cohort, "I");
    }

    #[test]
    fn apostrophes_and_quotes_are_literal() {
        let recs = parse("Luna|Lovegood|Dumbledore's Army|\"Flitwick\"|Winter 2016\n").unwrap();
        assert_eq!(recs[0].house, "Dumbledore's Army");
        assert_eq!(recs[0].adviser, "\"Flitwick\"");
    }

    #[test]
    fn strips_trailing_whitespace_and_crlf() {
        let recs = parse("Cho|Chang|Ravenclaw|Flitwick|Fall 2015  \r\nRon|Weasley|Gryffindor|McGonagall|Fall 2015\t\n")
            .unwrap();
        assert_eq!(recs.len(), 2);
        assert_eq!(recs[0].cohort, "Fall 2015");
        assert_eq!(recs[1].cohort, "Fall 2015");
    }

    #[test]
    fn skips_blank_lines() {
        let text = "Harry|Potter|Gryffindor|McGonagall|Fall 2015\n\n   \nRon|Weasley|Gryffindor|McGonagall|Fall 2015\n\n";
        let recs = parse(text).unwrap();
        assert_eq!(recs.len(), 2);
        assert_eq!(recs[1].first_name, "Ron");
    }

    #[test]
    fn last_line_without_newline_is_read() {
        let recs = parse("Harry|Potter|Gryffindor|McGonagall|Fall 2015").unwrap();
        assert_eq!(recs.len(), 1);
    }

    #[test]
    fn empty_input_yields_no_records() {
        assert!(parse("").unwrap().is_empty());
    }

    #[test]
    fn too_few_fields_is_malformed_with_line_number() {
        let text = "Harry|Potter|Gryffindor|McGonagall|Fall 2015\nRon|Weasley|Gryffindor\n";
        match parse(text) {
            Err(RosterError::MalformedLine { line, expected, found }) => {
                assert_eq!(line, 2);
                assert_eq!(expected, 5);
                assert_eq!(found, 3);
            }
            other => panic!("expected MalformedLine, got {other:?}"),
        }
    }

    #[test]
    fn too_many_fields_is_malformed() {
        let err = parse("a|b|c|d|e|f\n").unwrap_err();
        assert!(matches!(err, RosterError::MalformedLine { found: 6, .. }));
    }

    #[test]
    fn line_numbers_count_empty_lines() {
        let text = "Harry|Potter|Gryffindor|McGonagall|Fall 2015\n\n\nRon|Weasley\n";
        assert!(matches!(
            parse(text),
            Err(RosterError::MalformedLine { line: 4, found: 2, .. })
        ));

        let text = "Harry|Potter|Gryffindor|McGonagall|Fall 2015\n  \nRon|Weasley\n";
        assert!(matches!(parse(text), Err(RosterError::MalformedLine { line: 3, .. })));
    }

    #[test]
    fn line_numbers_with_crlf_endings() {
        let text = "Harry|Potter|Gryffindor|McGonagall|Fall 2015\r\n\r\nRon|Weasley\r\n";
        assert!(matches!(
            parse(text),
            Err(RosterError::MalformedLine { line: 3, found: 2, .. })
        ));

        let text = "Harry|Potter|Gryffindor|McGonagall|Fall 2015\r\n\
                    Cho|Chang|Ravenclaw|Flitwick|Fall 2015\r\n\
                    Ron|Weasley\r\n";
        assert!(matches!(parse(text), Err(RosterError::MalformedLine { line: 3, .. })));
    }

    #[test]
    fn read_failure_keeps_original_io_error() {
        struct Failing;
        impl Read for Failing {
            fn read(&mut self, _buf: &mut [u8]) -> std::io::Result<usize> {
                Err(std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"))
            }
        }

        let err = attach_path(parse_records(Failing).unwrap_err(), Path::new("cohort_data.txt"));
        match err {
            RosterError::Io { path, source } => {
                assert_eq!(path, Path::new("cohort_data.txt"));
                assert_eq!(source.kind(), std::io::ErrorKind::PermissionDenied);
                assert_eq!(source.to_string(), "denied");
            }
            other => panic!("expected Io, got {other:?}"),
        }
    }

    #[test]
    fn missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nope.txt");
        let err = load_file(&path).unwrap_err();
        assert!(matches!(err, RosterError::Io { .. }), "got {err:?}");
    }

    #[test]
    fn invalid_utf8_is_a_read_error_not_io() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(b"Harry|Potter|Gryff\xffindor|McGonagall|Fall 2015\n")
            .unwrap();
        let err = load_file(file.path()).unwrap_err();
        assert!(matches!(err, RosterError::Csv(_)), "got {err:?}");
    }

    #[test]
    fn load_file_reads_from_disk() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "Harry|Potter|Gryffindor|McGonagall|Fall 2015").unwrap();
        writeln!(file, "Nearly|Headless Nick|||G").unwrap();
        let recs = load_file(file.path()).unwrap();
        assert_eq!(recs.len(), 2);
        assert!(recs[1].is_ghost());
    }
}
