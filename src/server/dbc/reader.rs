//! Streaming reader turning a comma separated extract into `FlatRecord`s.
//!
//! The first parsed row is the header. Header cells are normalized to lower camel case
//! with `[`/`]` removed (`Title_lang[0]` becomes `titleLang0`), and only the fields named
//! in the allow-list are kept. The resulting stream is single pass; reading the table
//! again means opening the source again.

use std::{path::PathBuf, sync::Arc};

use csv_async::{AsyncReader, AsyncReaderBuilder, StringRecord};
use futures_util::{stream::BoxStream, StreamExt, TryStreamExt};
use tokio::io::AsyncRead;

use crate::server::{
    dbc::record::{FlatRecord, FlatValue},
    error::dbc::DbcError,
};

const DEFAULT_CHUNK_SIZE: usize = 64 * 1024;

/// Normalizes a raw header cell into a field name.
///
/// Words are split on `_`, `-`, `.` and whitespace, and on case changes
/// (`ClassID` is `Class` + `ID`). The first word is lowercased, every following word is
/// capitalized.
///
/// # Arguments
/// - `raw` - Header cell as found in the extract
///
/// # Returns
/// - `String` - Lower camel case field name without brackets
pub fn normalize_header(raw: &str) -> String {
    let chars: Vec<char> = raw.chars().filter(|c| *c != '[' && *c != ']').collect();

    let mut words: Vec<String> = Vec::new();
    let mut current = String::new();
    for (i, &c) in chars.iter().enumerate() {
        if c == '_' || c == '-' || c == '.' || c.is_whitespace() {
            if !current.is_empty() {
                words.push(std::mem::take(&mut current));
            }
            continue;
        }

        if c.is_uppercase() && !current.is_empty() {
            let prev = chars[i - 1];
            let next_is_lower = chars.get(i + 1).is_some_and(|n| n.is_lowercase());
            if prev.is_lowercase() || prev.is_ascii_digit() || (prev.is_uppercase() && next_is_lower) {
                words.push(std::mem::take(&mut current));
            }
        }
        current.push(c);
    }
    if !current.is_empty() {
        words.push(current);
    }

    let mut name = String::new();
    for (i, word) in words.iter().enumerate() {
        let lower = word.to_lowercase();
        if i == 0 {
            name.push_str(&lower);
        } else {
            let mut chars = lower.chars();
            if let Some(first) = chars.next() {
                name.extend(first.to_uppercase());
                name.push_str(chars.as_str());
            }
        }
    }

    name
}

/// Header-derived layout shared by every record of one table.
struct Schema {
    /// (column index in the source row, normalized name) of every retained field.
    retained: Vec<(usize, Arc<str>)>,
}

impl Schema {
    fn from_header(header: &StringRecord, allow: &[String]) -> Self {
        let retained = header
            .iter()
            .map(normalize_header)
            .enumerate()
            .filter(|(_, name)| allow.is_empty() || allow.iter().any(|a| a == name))
            .map(|(index, name)| (index, Arc::from(name)))
            .collect();

        Self { retained }
    }

    fn record(&self, row: &StringRecord) -> FlatRecord {
        let fields = self
            .retained
            .iter()
            .filter_map(|(index, name)| {
                let raw = row.get(*index)?;
                Some((name.clone(), FlatValue::parse(raw.to_string())))
            })
            .collect();

        FlatRecord::new(fields)
    }
}

/// Reader over any asynchronous byte source.
pub struct FlatTableReader<R> {
    source: R,
    allow: Vec<String>,
    chunk_size: usize,
}

impl<R> FlatTableReader<R>
where
    R: AsyncRead + Unpin + Send + 'static,
{
    /// Creates a reader retaining only `allow` fields; an empty allow-list keeps all.
    pub fn new(source: R, allow: &[&str]) -> Self {
        Self {
            source,
            allow: allow.iter().map(|field| field.to_string()).collect(),
            chunk_size: DEFAULT_CHUNK_SIZE,
        }
    }

    /// Overrides the read buffer size.
    pub fn with_chunk_size(mut self, chunk_size: usize) -> Self {
        self.chunk_size = chunk_size.max(1);
        self
    }

    /// Turns the reader into a lazy stream of records.
    ///
    /// Nothing is read until the stream is polled. The header row is consumed before the
    /// first record; an empty source yields no records. Rows may be shorter or longer
    /// than the header and blank lines are skipped.
    pub fn into_stream(self) -> BoxStream<'static, Result<FlatRecord, DbcError>> {
        let csv = AsyncReaderBuilder::new()
            .has_headers(false)
            .flexible(true)
            .buffer_capacity(self.chunk_size)
            .create_reader(self.source);

        let state = ReadState {
            csv,
            allow: self.allow,
            row: StringRecord::new(),
            schema: None,
        };

        futures_util::stream::try_unfold(state, |mut state| async move {
            let record = state.next_record().await?;
            Ok(record.map(|record| (record, state)))
        })
        .boxed()
    }
}

impl FlatTableReader<tokio::fs::File> {
    /// Streams a file from disk.
    ///
    /// The file is opened on first poll, so building the stream never touches the disk.
    ///
    /// # Arguments
    /// - `path` - Extract to read
    /// - `allow` - Field names to retain
    ///
    /// # Returns
    /// - Stream of records; a missing or unreadable file surfaces as the first item
    pub fn open(
        path: PathBuf,
        allow: &'static [&'static str],
    ) -> BoxStream<'static, Result<FlatRecord, DbcError>> {
        let opened = async move {
            tokio::fs::File::open(&path)
                .await
                .map_err(|source| match source.kind() {
                    std::io::ErrorKind::NotFound => DbcError::Missing { path },
                    _ => DbcError::Io { path, source },
                })
        };

        futures_util::stream::once(opened)
            .map_ok(move |file| FlatTableReader::new(file, allow).into_stream())
            .try_flatten()
            .boxed()
    }
}

struct ReadState<R> {
    csv: AsyncReader<R>,
    allow: Vec<String>,
    row: StringRecord,
    schema: Option<Schema>,
}

impl<R> ReadState<R>
where
    R: AsyncRead + Unpin + Send,
{
    async fn next_record(&mut self) -> Result<Option<FlatRecord>, DbcError> {
        while self.csv.read_record(&mut self.row).await? {
            if let Some(schema) = &self.schema {
                return Ok(Some(schema.record(&self.row)));
            }
            self.schema = Some(Schema::from_header(&self.row, &self.allow));
        }

        Ok(None)
    }
}
