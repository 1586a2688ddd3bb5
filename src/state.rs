use std::sync::Arc;

use crate::data::cache::{DatasetCache, DatasetSource};
use crate::data::error::DataUnavailable;
use crate::data::filter::{FilterSpec, GenderFilter};
use crate::data::loader::RemoteCsv;
use crate::data::model::PassengerTable;
use crate::data::pipeline::{self, PipelineOutput};

// ---------------------------------------------------------------------------
// Application state
// ---------------------------------------------------------------------------

/// The full UI state, independent of rendering.
pub struct AppState<S = RemoteCsv> {
    /// Loads the dataset once and hands out the memoized table.
    cache: DatasetCache<S>,

    /// Loaded dataset (None until a load succeeds).
    pub dataset: Option<Arc<PassengerTable>>,

    /// Current sidebar selections.
    pub spec: FilterSpec,

    /// Pipeline result for `spec` (cached until the next control change).
    pub output: Option<PipelineOutput>,

    /// "Show Raw Data" toggle.
    pub show_raw_data: bool,

    /// Status / error message shown in the UI.
    pub status_message: Option<String>,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(RemoteCsv)
    }
}

impl<S: DatasetSource> AppState<S> {
    pub fn new(source: S) -> Self {
        Self {
            cache: DatasetCache::new(source),
            dataset: None,
            spec: FilterSpec::default(),
            output: None,
            show_raw_data: false,
            status_message: None,
        }
    }

    /// Load the dataset through the cache (no-op fetch if already loaded).
    pub fn load_dataset(&mut self) {
        let result = self.cache.get_or_load();
        self.handle_load(result);
    }

    /// Explicit refresh: drop the cached table and fetch again.
    pub fn reload_dataset(&mut self) {
        let result = self.cache.reload();
        self.handle_load(result);
    }

    fn handle_load(
        &mut self,
        result: Result<Arc<PassengerTable>, DataUnavailable>,
    ) {
        match result {
            Ok(table) => self.set_dataset(table),
            Err(e) => {
                log::error!("Failed to load dataset: {e}");
                self.dataset = None;
                self.output = None;
                self.status_message = Some(format!("Error: {e}"));
            }
        }
    }

    /// Ingest a newly loaded dataset and reset filters to "everything".
    pub fn set_dataset(&mut self, table: Arc<PassengerTable>) {
        self.spec = FilterSpec::all(&table);
        self.dataset = Some(table);
        self.status_message = None;
        self.refilter();
    }

    /// Recompute `output` after a filter change.
    pub fn refilter(&mut self) {
        let Some(table) = &self.dataset else {
            return;
        };
        match pipeline::apply(table, &self.spec) {
            Ok(output) => {
                self.output = Some(output);
                self.status_message = None;
            }
            Err(e) => {
                log::error!("Rejected filter: {e}");
                self.output = None;
                self.status_message = Some(format!("Error: {e}"));
            }
        }
    }

    /// Toggle a single class in the class selector.
    pub fn toggle_class(&mut self, class: u8) {
        if !self.spec.classes.remove(&class) {
            self.spec.classes.insert(class);
        }
        self.refilter();
    }

    pub fn select_all_classes(&mut self) {
        if let Some(ds) = &self.dataset {
            self.spec.classes = ds.classes.clone();
            self.refilter();
        }
    }

    pub fn select_no_classes(&mut self) {
        self.spec.classes.clear();
        self.refilter();
    }

    pub fn set_gender(&mut self, gender: GenderFilter) {
        if self.spec.gender != gender {
            self.spec.gender = gender;
            self.refilter();
        }
    }
}
