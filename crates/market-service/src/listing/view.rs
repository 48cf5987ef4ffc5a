//! View-local list state with memoized recomputation.
//!
//! A [`ListView`] is created when an admin table is mounted and dropped
//! with it. Filter and sort changes send the view back to the first page
//! so a shrinking result never leaves the user on an empty page.

use std::sync::Arc;

use tracing::{debug, trace, warn};

use market_core::error::AppError;
use market_core::types::filter::FilterState;
use market_core::types::pagination::{Page, PageState, page_count};
use market_core::types::record::{FieldValue, Record, RecordSchema};
use market_core::types::sorting::SortState;

use super::{filter, paginate, sort};

/// A record paired with its position in the source collection.
struct Indexed<'a, R> {
    index: usize,
    record: &'a R,
}

impl<R: Record> Record for Indexed<'_, R> {
    fn schema() -> &'static RecordSchema {
        R::schema()
    }

    fn field(&self, name: &str) -> Option<FieldValue<'_>> {
        self.record.field(name)
    }
}

/// Filtered and sorted source positions for one input combination.
#[derive(Debug)]
struct Memo {
    generation: u64,
    filter: FilterState,
    sort: Option<SortState>,
    indices: Vec<usize>,
}

impl Memo {
    fn is_fresh(&self, generation: u64, filter: &FilterState, sort: Option<&SortState>) -> bool {
        self.generation == generation && &self.filter == filter && self.sort.as_ref() == sort
    }
}

/// State and derived results of one admin list page.
#[derive(Debug)]
pub struct ListView<R> {
    records: Arc<[R]>,
    /// Bumped whenever `records` is replaced; identifies the collection.
    generation: u64,
    filter: FilterState,
    sort: Option<SortState>,
    page: PageState,
    memo: Option<Memo>,
    recomputations: usize,
}

impl<R: Record> ListView<R> {
    /// Mount a view with no filter, the schema's default sort and the
    /// first page.
    pub fn new(records: Vec<R>, page_size: usize) -> Self {
        Self {
            records: Arc::from(records),
            generation: 0,
            filter: FilterState::default(),
            sort: R::schema().default_sort(),
            page: PageState::first(page_size),
            memo: None,
            recomputations: 0,
        }
    }

    /// Mount a view with explicit state, rejecting fields the record type
    /// does not support before anything is computed.
    pub fn with_state(
        records: Vec<R>,
        filter: FilterState,
        sort: Option<SortState>,
        page: PageState,
    ) -> Result<Self, AppError> {
        filter::Predicate::compile::<R>(&filter)?;
        if let Some(sort) = &sort {
            R::schema().require_sortable(&sort.field)?;
        }

        Ok(Self {
            records: Arc::from(records),
            generation: 0,
            filter,
            sort,
            page,
            memo: None,
            recomputations: 0,
        })
    }

    /// The full source collection.
    pub fn records(&self) -> &[R] {
        &self.records
    }

    /// Current filter state.
    pub fn filter(&self) -> &FilterState {
        &self.filter
    }

    /// Current sort, if any.
    pub fn sort(&self) -> Option<&SortState> {
        self.sort.as_ref()
    }

    /// Current page window.
    pub fn page_state(&self) -> PageState {
        self.page
    }

    /// How many times filter and sort have actually run.
    pub fn recompute_count(&self) -> usize {
        self.recomputations
    }

    /// Replace the search text and return to the first page.
    pub fn set_search(&mut self, term: impl Into<String>) {
        self.filter.set_search(term);
        self.page.reset();
    }

    /// Select a categorical value and return to the first page.
    pub fn set_filter(
        &mut self,
        field: impl Into<String>,
        value: impl Into<String>,
    ) -> Result<(), AppError> {
        let field = field.into();
        R::schema().require_categorical(&field)?;
        self.filter.set_filter(field, value);
        self.page.reset();
        Ok(())
    }

    /// Drop one categorical selection and return to the first page.
    pub fn clear_filter(&mut self, field: &str) {
        if self.filter.clear_filter(field) {
            self.page.reset();
        }
    }

    /// Drop the search text and every categorical selection.
    pub fn clear_filters(&mut self) {
        self.filter.clear();
        self.page.reset();
    }

    /// Order by `sort` and return to the first page.
    pub fn set_sort(&mut self, sort: SortState) -> Result<(), AppError> {
        R::schema().require_sortable(&sort.field)?;
        self.sort = Some(sort);
        self.page.reset();
        Ok(())
    }

    /// Column-header click: flip the direction on the current field or
    /// start ascending on a new one.
    pub fn toggle_sort(&mut self, field: &str) -> Result<(), AppError> {
        let next = SortState::toggle_or_set(self.sort.as_ref(), field);
        self.set_sort(next)
    }

    /// Show records in source order.
    pub fn clear_sort(&mut self) {
        self.sort = None;
        self.page.reset();
    }

    /// Jump to a page. Out-of-range indices are allowed and render empty.
    pub fn set_page(&mut self, index: usize) {
        self.page.index = index;
    }

    /// Change the page size and return to the first page.
    pub fn set_page_size(&mut self, size: usize) {
        self.page = PageState::first(size);
    }

    /// Advance one page unless already on the last. Returns whether the
    /// page changed.
    pub fn next_page(&mut self) -> Result<bool, AppError> {
        let pages = page_count(self.total()?, self.page.size);
        if self.page.index.saturating_add(1) < pages {
            self.page.index += 1;
            Ok(true)
        } else {
            Ok(false)
        }
    }

    /// Go back one page unless already on the first.
    pub fn previous_page(&mut self) -> bool {
        if self.page.index == 0 {
            return false;
        }
        self.page.index -= 1;
        true
    }

    /// Swap in a freshly fetched collection. The current page is kept.
    pub fn replace_records(&mut self, records: Vec<R>) {
        self.records = Arc::from(records);
        self.generation += 1;
    }

    /// Number of records matching the current filter.
    pub fn total(&mut self) -> Result<usize, AppError> {
        Ok(self.matches()?.len())
    }

    /// The page to render for the current state.
    pub fn current(&mut self) -> Result<Page<&R>, AppError> {
        let state = self.page;
        let window = paginate::apply(self.matches()?, state);

        if window.items.is_empty() && window.total_items > 0 {
            warn!(
                entity = R::schema().entity,
                page = state.index,
                total_pages = window.total_pages,
                "Requested page is past the end of the result"
            );
        }

        Ok(window.map(|i| &self.records[i]))
    }

    fn matches(&mut self) -> Result<&[usize], AppError> {
        let memo = match self.memo.take() {
            Some(memo) if memo.is_fresh(self.generation, &self.filter, self.sort.as_ref()) => {
                trace!(entity = R::schema().entity, "List view memo hit");
                memo
            }
            _ => {
                let indices = self.compute()?;
                self.recomputations += 1;
                debug!(
                    entity = R::schema().entity,
                    source = self.records.len(),
                    matched = indices.len(),
                    sort = ?self.sort,
                    "Recomputed list view"
                );
                Memo {
                    generation: self.generation,
                    filter: self.filter.clone(),
                    sort: self.sort.clone(),
                    indices,
                }
            }
        };

        Ok(&self.memo.insert(memo).indices)
    }

    fn compute(&self) -> Result<Vec<usize>, AppError> {
        let indexed: Vec<Indexed<'_, R>> = self
            .records
            .iter()
            .enumerate()
            .map(|(index, record)| Indexed { index, record })
            .collect();

        let filtered = filter::apply(&indexed, &self.filter)?;
        let sorted = sort::apply_optional(&filtered, self.sort.as_ref())?;
        Ok(sorted.into_iter().map(|row| row.index).collect())
    }
}
