//! Data grid request parsed from the query string.
//!
//! The grid widget sends its state as flat bracketed keys:
//! `draw`, `start`, `length`, `search[value]`, `order[i][column]`, `order[i][dir]`,
//! `columns[i][data]`, `columns[i][name]`, `columns[i][searchable]`,
//! `columns[i][orderable]`. Unknown keys are ignored so the same query string can carry
//! endpoint parameters such as `realm`.

use std::collections::BTreeMap;

use crate::server::error::ssp::SspError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDirection {
    Asc,
    Desc,
}

impl SortDirection {
    pub fn as_sql(self) -> &'static str {
        match self {
            SortDirection::Asc => "ASC",
            SortDirection::Desc => "DESC",
        }
    }
}

/// Per-column metadata sent by the client.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestColumn {
    /// Index of the grid column this request column displays.
    pub data: usize,
    pub name: String,
    pub searchable: bool,
    pub orderable: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SortRequest {
    /// Index into `SspRequest::columns`.
    pub column: usize,
    pub dir: SortDirection,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SspRequest {
    /// Correlation token echoed back verbatim.
    pub draw: i64,
    pub start: u64,
    /// Page length; `None` returns every matching row.
    pub length: Option<u64>,
    pub order: Vec<SortRequest>,
    pub columns: Vec<RequestColumn>,
    /// Free-text search term; empty means no search.
    pub search: String,
}

#[derive(Default)]
struct PartialColumn {
    data: Option<usize>,
    name: String,
    searchable: bool,
    orderable: bool,
}

#[derive(Default)]
struct PartialOrder {
    column: Option<usize>,
    dir: Option<SortDirection>,
}

impl SspRequest {
    /// Parses a grid request from decoded query string pairs.
    ///
    /// Missing `draw` and `start` default to 0; a missing `length` or `-1` means an
    /// unbounded page. Sort entries are applied in ascending `order[i]` index.
    ///
    /// # Arguments
    /// - `pairs` - Decoded `(key, value)` pairs of the query string
    ///
    /// # Returns
    /// - `Ok(SspRequest)` - Parsed request
    /// - `Err(SspError::InvalidParameter)` - A grid parameter is malformed
    pub fn from_pairs<I, K, V>(pairs: I) -> Result<Self, SspError>
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: AsRef<str>,
    {
        let mut request = SspRequest::default();
        let mut columns: BTreeMap<usize, PartialColumn> = BTreeMap::new();
        let mut orders: BTreeMap<usize, PartialOrder> = BTreeMap::new();

        for (key, value) in pairs {
            let (key, value) = (key.as_ref(), value.as_ref());
            let (base, path) = split_key(key);

            match (base, path.as_slice()) {
                ("draw", []) => request.draw = parse_number(key, value)?,
                ("start", []) => request.start = parse_number(key, value)?,
                ("length", []) => request.length = parse_length(key, value)?,
                ("search", ["value"]) => request.search = value.to_string(),
                ("order", [index, field]) => {
                    let entry = orders.entry(parse_number(key, index)?).or_default();
                    match *field {
                        "column" => entry.column = Some(parse_number(key, value)?),
                        "dir" => entry.dir = Some(parse_direction(key, value)?),
                        _ => {}
                    }
                }
                ("columns", [index, field]) => {
                    let entry = columns.entry(parse_number(key, index)?).or_default();
                    match *field {
                        "data" => entry.data = Some(parse_number(key, value)?),
                        "name" => entry.name = value.to_string(),
                        "searchable" => entry.searchable = value == "true",
                        "orderable" => entry.orderable = value == "true",
                        _ => {}
                    }
                }
                _ => {}
            }
        }

        request.columns = columns
            .into_iter()
            .map(|(index, column)| RequestColumn {
                data: column.data.unwrap_or(index),
                name: column.name,
                searchable: column.searchable,
                orderable: column.orderable,
            })
            .collect();

        request.order = orders
            .into_iter()
            .map(|(index, order)| {
                let column = order.column.ok_or_else(|| SspError::InvalidParameter {
                    name: format!("order[{index}][column]"),
                    value: String::new(),
                })?;
                Ok(SortRequest {
                    column,
                    dir: order.dir.unwrap_or(SortDirection::Asc),
                })
            })
            .collect::<Result<_, SspError>>()?;

        Ok(request)
    }
}

/// Splits `columns[0][search][value]` into `("columns", ["0", "search", "value"])`.
fn split_key(key: &str) -> (&str, Vec<&str>) {
    match key.find('[') {
        None => (key, Vec::new()),
        Some(open) => {
            let path = key[open..]
                .split('[')
                .filter(|segment| !segment.is_empty())
                .map(|segment| segment.trim_end_matches(']'))
                .collect();
            (&key[..open], path)
        }
    }
}

fn invalid(name: &str, value: &str) -> SspError {
    SspError::InvalidParameter {
        name: name.to_string(),
        value: value.to_string(),
    }
}

fn parse_number<T: std::str::FromStr>(name: &str, value: &str) -> Result<T, SspError> {
    value.trim().parse().map_err(|_| invalid(name, value))
}

fn parse_length(name: &str, value: &str) -> Result<Option<u64>, SspError> {
    match parse_number::<i64>(name, value)? {
        -1 => Ok(None),
        length if length >= 0 => Ok(Some(length as u64)),
        _ => Err(invalid(name, value)),
    }
}

fn parse_direction(name: &str, value: &str) -> Result<SortDirection, SspError> {
    match value.to_ascii_lowercase().as_str() {
        "asc" => Ok(SortDirection::Asc),
        "desc" => Ok(SortDirection::Desc),
        _ => Err(invalid(name, value)),
    }
}
