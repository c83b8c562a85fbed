//! Server-side processing for data grid endpoints.
//!
//! Endpoints describe a grid with `ColumnSpec`s, `JoinSpec`s and static predicates;
//! the client only chooses the page window, the sort and the search term, sent as an
//! `SspRequest`. `ServerSideProcessor::run` answers with a `PagedResult`.

pub mod builder;
pub mod column;
pub mod request;

#[cfg(test)]
mod test;
