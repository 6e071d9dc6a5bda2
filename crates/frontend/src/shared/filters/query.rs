//! Result state for a page query parameterized by filter selections.
//!
//! Pages fetch their data whenever the filter chain is fully resolved and
//! drop the result state while it is not. Both transitions run under the
//! same generation counter, so a fetch started for one filter combination
//! can never deliver into a later one.

use leptos::prelude::*;

/// Reactive holder for one query's rows, with a generation guard against
/// stale in-flight fetches.
pub struct QueryState<T: Send + Sync + 'static> {
    pub rows: RwSignal<Vec<T>>,
    pub loading: RwSignal<bool>,
    generation: RwSignal<u64>,
}

impl<T: Send + Sync + 'static> Clone for QueryState<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T: Send + Sync + 'static> Copy for QueryState<T> {}

impl<T: Send + Sync + 'static> QueryState<T> {
    pub fn new() -> Self {
        Self {
            rows: RwSignal::new(Vec::new()),
            loading: RwSignal::new(false),
            generation: RwSignal::new(0),
        }
    }

    /// Open a new load generation for a refetch.
    pub fn begin(&self) -> u64 {
        self.loading.set(true);
        let generation = self.generation.get_untracked() + 1;
        self.generation.set(generation);
        generation
    }

    /// The filter chain is no longer fully resolved: drop the rows and
    /// supersede any in-flight fetch so a late response cannot repopulate
    /// them.
    pub fn reset(&self) {
        self.rows.set(Vec::new());
        self.loading.set(false);
        self.generation.update(|generation| *generation += 1);
    }

    /// Deliver fetched rows, unless the load has been superseded.
    pub fn apply(&self, generation: u64, rows: Vec<T>) {
        if self.generation.get_untracked() != generation {
            log::debug!("query: dropping result of superseded load");
            return;
        }
        self.rows.set(rows);
        self.loading.set(false);
    }

    pub fn is_empty(&self) -> bool {
        self.rows.with(|rows| rows.is_empty())
    }
}

impl<T: Send + Sync + 'static> Default for QueryState<T> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn applies_rows_for_the_current_generation() {
        let owner = Owner::new();
        owner.set();
        let query = QueryState::<i64>::new();
        let generation = query.begin();
        assert!(query.loading.get_untracked());

        query.apply(generation, vec![1, 2]);
        assert_eq!(query.rows.get_untracked(), vec![1, 2]);
        assert!(!query.loading.get_untracked());
    }

    #[test]
    fn newer_fetch_supersedes_the_older_one() {
        let owner = Owner::new();
        owner.set();
        let query = QueryState::<i64>::new();
        let stale = query.begin();
        let fresh = query.begin();
        query.apply(fresh, vec![2]);
        query.apply(stale, vec![1]);
        assert_eq!(query.rows.get_untracked(), vec![2]);
    }

    #[test]
    fn reset_supersedes_an_in_flight_fetch() {
        let owner = Owner::new();
        owner.set();
        let query = QueryState::<i64>::new();

        // A fetch starts for a filter combination that is then torn down
        // (e.g. the selection upstream of the query gets cleared).
        let generation = query.begin();
        query.reset();
        assert!(!query.loading.get_untracked());

        // The late response must not repopulate the cleared rows.
        query.apply(generation, vec![1, 2]);
        assert!(query.is_empty());
        assert!(!query.loading.get_untracked());
    }
}
