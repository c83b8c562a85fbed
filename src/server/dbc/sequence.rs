//! Uniform lazy sequence over a reference table.
//!
//! A table is either materialized in memory or streamed from disk on every access.
//! Consumers use the same `map`/`filter`/`find`/`collect` operations on both, so the
//! catalog can switch between eager and streaming mode without touching callers.

use std::sync::Arc;

use futures_util::{future, stream::BoxStream, StreamExt, TryStreamExt};

use crate::server::error::dbc::DbcError;

pub enum Sequence<T> {
    /// Rows loaded once and shared across requests.
    Materialized(Arc<Vec<T>>),
    /// Single-pass read of the backing extract.
    Streaming(BoxStream<'static, Result<T, DbcError>>),
}

impl<T> Sequence<T>
where
    T: Clone + Send + Sync + 'static,
{
    /// Converts the sequence into a stream, cloning rows out of a materialized backing.
    pub fn into_stream(self) -> BoxStream<'static, Result<T, DbcError>> {
        match self {
            Self::Materialized(items) => {
                let len = items.len();
                futures_util::stream::iter((0..len).map(move |i| Ok(items[i].clone()))).boxed()
            }
            Self::Streaming(stream) => stream,
        }
    }

    /// Lazily transforms every row.
    pub fn map<U, F>(self, mut f: F) -> Sequence<U>
    where
        U: Clone + Send + Sync + 'static,
        F: FnMut(T) -> U + Send + 'static,
    {
        Sequence::Streaming(self.into_stream().map_ok(move |item| f(item)).boxed())
    }

    /// Lazily keeps rows matching `predicate`.
    pub fn filter<P>(self, mut predicate: P) -> Sequence<T>
    where
        P: FnMut(&T) -> bool + Send + 'static,
    {
        Sequence::Streaming(
            self.into_stream()
                .try_filter(move |item| future::ready(predicate(item)))
                .boxed(),
        )
    }

    /// Returns the first row matching `predicate`, reading no further than that row.
    ///
    /// # Returns
    /// - `Ok(Some(T))` - First match
    /// - `Ok(None)` - No row matched
    /// - `Err(DbcError)` - The backing extract could not be read
    pub async fn find<P>(self, mut predicate: P) -> Result<Option<T>, DbcError>
    where
        P: FnMut(&T) -> bool,
    {
        match self {
            Self::Materialized(items) => Ok(items.iter().find(|item| predicate(item)).cloned()),
            Self::Streaming(mut stream) => {
                while let Some(item) = stream.try_next().await? {
                    if predicate(&item) {
                        return Ok(Some(item));
                    }
                }
                Ok(None)
            }
        }
    }

    /// Collects every row into a list.
    pub async fn collect(self) -> Result<Vec<T>, DbcError> {
        match self {
            Self::Materialized(items) => {
                Ok(Arc::try_unwrap(items).unwrap_or_else(|items| items.as_ref().clone()))
            }
            Self::Streaming(stream) => stream.try_collect().await,
        }
    }
}

impl<T> From<Vec<T>> for Sequence<T> {
    fn from(items: Vec<T>) -> Self {
        Self::Materialized(Arc::new(items))
    }
}
