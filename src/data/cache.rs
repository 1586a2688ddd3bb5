use std::sync::Arc;

use super::error::DataUnavailable;
use super::model::PassengerTable;

/// Something that can produce a fresh [`PassengerTable`].
pub trait DatasetSource {
    fn fetch(&self) -> Result<PassengerTable, DataUnavailable>;
}

/// Memoizes the table produced by a [`DatasetSource`].
///
/// The first [`get_or_load`](Self::get_or_load) fetches; later calls hand out
/// the same `Arc` until [`invalidate`](Self::invalidate) or
/// [`reload`](Self::reload). Failed fetches are not memoized.
pub struct DatasetCache<S> {
    source: S,
    table: Option<Arc<PassengerTable>>,
}

impl<S: DatasetSource> DatasetCache<S> {
    pub fn new(source: S) -> Self {
        Self {
            source,
            table: None,
        }
    }

    pub fn get_or_load(&mut self) -> Result<Arc<PassengerTable>, DataUnavailable> {
        if let Some(table) = &self.table {
            log::debug!("Reusing cached dataset ({} rows)", table.len());
            return Ok(Arc::clone(table));
        }
        let table = Arc::new(self.source.fetch()?);
        self.table = Some(Arc::clone(&table));
        Ok(table)
    }

    /// Drop the memoized table; the next access fetches again.
    pub fn invalidate(&mut self) {
        if self.table.take().is_some() {
            log::info!("Dataset cache invalidated");
        }
    }

    pub fn reload(&mut self) -> Result<Arc<PassengerTable>, DataUnavailable> {
        self.invalidate();
        self.get_or_load()
    }

    pub fn is_loaded(&self) -> bool {
        self.table.is_some()
    }
}
