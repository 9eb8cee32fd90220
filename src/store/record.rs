//! One user record per CSV row
//!
//! Fields are stored in the order name, contact info, level, sponsors,
//! valid-from, valid-to, codes. List fields are joined with `;`, absent
//! timestamps are empty fields, and a row whose first field starts with `#` is a
//! comment.

use csv::{ReaderBuilder, StringRecord, Writer, WriterBuilder};
use std::io::{Read, Write};

use crate::store::error::{RecordError, StoreResult, FIELD_COUNT};
use crate::types::{format_timestamp, parse_timestamp, Level};
use crate::user::{DisplayName, User};

/// Separator inside the sponsors and codes fields
pub const LIST_SEPARATOR: &str = ";";

/// Marker opening a comment row
pub const COMMENT_MARKER: char = '#';

/// What a single row turned into
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RowOutcome {
    /// A valid record
    User(User),
    /// A comment row
    Comment,
    /// A malformed row to skip
    Skipped(RecordError),
}

/// Decode one row into a record
pub fn decode_row(row: &StringRecord) -> RowOutcome {
    let first = row.get(0).unwrap_or_default();
    if first.trim_start().starts_with(COMMENT_MARKER) {
        return RowOutcome::Comment;
    }
    match decode_fields(row) {
        Ok(user) => RowOutcome::User(user),
        Err(error) => RowOutcome::Skipped(error),
    }
}

fn decode_fields(row: &StringRecord) -> Result<User, RecordError> {
    if row.len() != FIELD_COUNT {
        return Err(RecordError::FieldCount { found: row.len() });
    }

    let level: Level =
        row[2].parse().map_err(|_| RecordError::InvalidLevel(row[2].to_string()))?;
    let valid_from = parse_timestamp(&row[4]).map_err(|_| RecordError::InvalidTimestamp {
        field: "valid_from",
        value: row[4].to_string(),
    })?;
    let valid_to = parse_timestamp(&row[5]).map_err(|_| RecordError::InvalidTimestamp {
        field: "valid_to",
        value: row[5].to_string(),
    })?;

    Ok(User {
        name: DisplayName::from_stored(&row[0]),
        contact_info: row[1].to_string(),
        level,
        sponsors: split_list(&row[3]),
        valid_from,
        valid_to,
        codes: split_list(&row[6]),
    })
}

/// Encode one record into a seven-field row
pub fn encode_row(user: &User) -> StringRecord {
    StringRecord::from(vec![
        user.name.as_str().to_string(),
        user.contact_info.clone(),
        user.level.as_str().to_string(),
        join_list(&user.sponsors),
        format_timestamp(user.valid_from),
        format_timestamp(user.valid_to),
        join_list(&user.codes),
    ])
}

fn split_list(field: &str) -> Vec<String> {
    if field.is_empty() {
        return Vec::new();
    }
    field.split(LIST_SEPARATOR).map(str::to_string).collect()
}

fn join_list(items: &[String]) -> String {
    items.join(LIST_SEPARATOR)
}

/// Result of reading the next row from a [`UserReader`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReadOutcome {
    /// A valid record
    User(User),
    /// A comment row, nothing to do
    Comment,
    /// A malformed row was skipped; reading may continue
    Skipped {
        /// Line the row started on (1-based)
        line: u64,
        /// Why it was skipped
        error: RecordError,
    },
    /// End of input
    Done,
}

/// Reads user records row by row from a caller-owned stream
#[derive(Debug)]
pub struct UserReader<R> {
    inner: csv::Reader<R>,
    row: StringRecord,
}

impl<R: Read> UserReader<R> {
    /// Wrap a stream; rows may have any number of fields
    pub fn new(reader: R) -> Self {
        let inner = ReaderBuilder::new().has_headers(false).flexible(true).from_reader(reader);
        Self { inner, row: StringRecord::new() }
    }

    /// Read the next row
    ///
    /// Only failures of the stream itself are errors; malformed rows come back
    /// as [`ReadOutcome::Skipped`].
    pub fn read_next(&mut self) -> StoreResult<ReadOutcome> {
        match self.inner.read_record(&mut self.row) {
            Ok(false) => Ok(ReadOutcome::Done),
            Ok(true) => {
                let line = self.row.position().map_or(0, |p| p.line());
                Ok(match decode_row(&self.row) {
                    RowOutcome::User(user) => ReadOutcome::User(user),
                    RowOutcome::Comment => ReadOutcome::Comment,
                    RowOutcome::Skipped(error) => ReadOutcome::Skipped { line, error },
                })
            }
            Err(error) if !error.is_io_error() => {
                let line = error.position().map_or(0, |p| p.line());
                Ok(ReadOutcome::Skipped { line, error: RecordError::Encoding(error.to_string()) })
            }
            Err(error) => Err(error.into()),
        }
    }
}

/// Writes user records row by row to a caller-owned stream
#[derive(Debug)]
pub struct UserWriter<W: Write> {
    inner: Writer<W>,
}

impl<W: Write> UserWriter<W> {
    /// Wrap a stream
    pub fn new(writer: W) -> Self {
        Self { inner: WriterBuilder::new().has_headers(false).from_writer(writer) }
    }

    /// Write one record as one row
    pub fn write_user(&mut self, user: &User) -> StoreResult<()> {
        self.inner.write_record(&encode_row(user))?;
        Ok(())
    }

    /// Flush buffered rows to the stream
    pub fn flush(&mut self) -> StoreResult<()> {
        self.inner.flush()?;
        Ok(())
    }
}
