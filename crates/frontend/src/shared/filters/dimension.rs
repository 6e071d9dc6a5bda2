//! One globally managed filter axis and its reconciliation algorithm.

use contracts::domain::Entity;
use leptos::prelude::*;

use super::store::SelectionStore;

/// Outcome of reconciling a candidate list with a persisted selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Reconciliation {
    /// Candidates are empty (still loading or the provider returned
    /// nothing); keep the selection untouched and retry on the next load.
    Pending,
    /// A selection was resolved. `write_back` is set when the resolved id
    /// differs from what the store holds and must be persisted.
    Resolved { selected: i64, write_back: bool },
}

/// Resolve a dimension's selection from its candidate list and the
/// persisted value.
///
/// A persisted value matching a current candidate wins; otherwise the first
/// candidate is the default and is written back so future loads agree.
/// Re-running with unchanged inputs is idempotent: once the write-back has
/// landed, the persisted value matches and no further write is requested.
pub fn reconcile<X>(candidates: &[Entity<X>], persisted: Option<i64>) -> Reconciliation {
    let Some(first) = candidates.first() else {
        return Reconciliation::Pending;
    };
    match persisted {
        Some(id) if candidates.iter().any(|entity| entity.id == id) => Reconciliation::Resolved {
            selected: id,
            write_back: false,
        },
        _ => Reconciliation::Resolved {
            selected: first.id,
            write_back: true,
        },
    }
}

/// Reactive state of one managed dimension: candidate list, loading flag and
/// the current selection, plus a generation counter guarding against stale
/// in-flight loads.
pub struct FilterDimension<X: Send + Sync + 'static> {
    /// Stable key, also the persistence key suffix (`global_selected_<key>`).
    pub key: &'static str,
    pub candidates: RwSignal<Vec<Entity<X>>>,
    pub loading: RwSignal<bool>,
    pub selected: RwSignal<Option<i64>>,
    generation: RwSignal<u64>,
}

// Signals are Copy themselves, so the dimension is too; a derive would
// needlessly require `X: Copy`.
impl<X: Send + Sync + 'static> Clone for FilterDimension<X> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<X: Send + Sync + 'static> Copy for FilterDimension<X> {}

impl<X: Clone + Send + Sync + 'static> FilterDimension<X> {
    pub fn new(key: &'static str) -> Self {
        Self {
            key,
            candidates: RwSignal::new(Vec::new()),
            loading: RwSignal::new(true),
            selected: RwSignal::new(None),
            generation: RwSignal::new(0),
        }
    }

    /// Current selection (reactive). `None` only while candidates have never
    /// loaded.
    pub fn selected_id(&self) -> Option<i64> {
        self.selected.get()
    }

    /// Pass-through view of the provider's candidate list (reactive).
    pub fn candidates(&self) -> Vec<Entity<X>> {
        self.candidates.get()
    }

    pub fn is_loading(&self) -> bool {
        self.loading.get()
    }

    /// Explicit user selection: the in-memory value updates synchronously
    /// and is authoritative; the store write is best-effort.
    pub fn select(&self, id: i64, store: &impl SelectionStore) {
        self.selected.set(Some(id));
        if let Err(err) = store.write(self.key, id) {
            log::warn!("filter '{}': persisting selection {} failed: {}", self.key, id, err);
        }
    }

    /// Mark the dimension as loading and open a new load generation.
    /// The returned token must be passed to [`apply_candidates`].
    ///
    /// [`apply_candidates`]: FilterDimension::apply_candidates
    pub fn begin_load(&self) -> u64 {
        self.loading.set(true);
        let generation = self.generation.get_untracked() + 1;
        self.generation.set(generation);
        generation
    }

    /// Deliver a loaded candidate list. Results from a superseded load are
    /// dropped so older data never overwrites a newer list.
    pub fn apply_candidates(
        &self,
        generation: u64,
        items: Vec<Entity<X>>,
        store: &impl SelectionStore,
    ) {
        if self.generation.get_untracked() != generation {
            log::debug!("filter '{}': dropping result of superseded load", self.key);
            return;
        }
        self.candidates.set(items);
        self.loading.set(false);
        self.resolve(store);
    }

    /// Run reconciliation against the persisted store and apply the outcome.
    /// Independent per dimension; never touches another dimension's state.
    pub fn resolve(&self, store: &impl SelectionStore) {
        let persisted = store.read(self.key);
        let outcome = self
            .candidates
            .with_untracked(|candidates| reconcile(candidates, persisted));
        match outcome {
            Reconciliation::Pending => {}
            Reconciliation::Resolved { selected, write_back } => {
                if self.selected.get_untracked() != Some(selected) {
                    self.selected.set(Some(selected));
                }
                if write_back {
                    if let Err(err) = store.write(self.key, selected) {
                        log::warn!(
                            "filter '{}': persisting default {} failed: {}",
                            self.key,
                            selected,
                            err
                        );
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::super::store::MemoryStore;
    use super::*;

    fn candidates() -> Vec<Entity> {
        vec![Entity::new(1, "Main"), Entity::new(2, "North")]
    }

    #[test]
    fn reconcile_defaults_to_first_candidate() {
        assert_eq!(
            reconcile(&candidates(), None),
            Reconciliation::Resolved { selected: 1, write_back: true }
        );
    }

    #[test]
    fn reconcile_honors_valid_persisted_value() {
        assert_eq!(
            reconcile(&candidates(), Some(2)),
            Reconciliation::Resolved { selected: 2, write_back: false }
        );
    }

    #[test]
    fn reconcile_falls_back_on_stale_persisted_value() {
        assert_eq!(
            reconcile(&candidates(), Some(99)),
            Reconciliation::Resolved { selected: 1, write_back: true }
        );
    }

    #[test]
    fn reconcile_waits_for_candidates() {
        let empty: Vec<Entity> = Vec::new();
        assert_eq!(reconcile(&empty, Some(2)), Reconciliation::Pending);
    }

    #[test]
    fn resolve_is_idempotent_and_writes_once() {
        let owner = Owner::new();
        owner.set();
        let store = MemoryStore::new();
        let dimension = FilterDimension::<contracts::domain::common::NoExtra>::new("branch");
        let generation = dimension.begin_load();
        dimension.apply_candidates(generation, candidates(), &store);
        assert_eq!(dimension.selected.get_untracked(), Some(1));
        assert_eq!(store.write_count(), 1);

        // Same candidates, same store state: no state change, no extra write.
        dimension.resolve(&store);
        assert_eq!(dimension.selected.get_untracked(), Some(1));
        assert_eq!(store.write_count(), 1);
    }

    #[test]
    fn stale_selection_recovers_to_first_candidate() {
        let owner = Owner::new();
        owner.set();
        let store = MemoryStore::new();
        let dimension = FilterDimension::<contracts::domain::common::NoExtra>::new("branch");
        let generation = dimension.begin_load();
        dimension.apply_candidates(generation, candidates(), &store);
        dimension.select(2, &store);

        // The previously selected branch disappears from the next load.
        let generation = dimension.begin_load();
        dimension.apply_candidates(generation, vec![Entity::new(1, "Main")], &store);
        assert_eq!(dimension.selected.get_untracked(), Some(1));
        assert_eq!(store.read("branch"), Some(1));
    }

    #[test]
    fn superseded_load_is_dropped() {
        let owner = Owner::new();
        owner.set();
        let store = MemoryStore::new();
        let dimension = FilterDimension::<contracts::domain::common::NoExtra>::new("branch");
        let stale = dimension.begin_load();
        let fresh = dimension.begin_load();
        dimension.apply_candidates(fresh, candidates(), &store);
        // The older request resolves late with different data.
        dimension.apply_candidates(stale, vec![Entity::new(9, "Old")], &store);
        assert_eq!(dimension.candidates.get_untracked(), candidates());
        assert_eq!(dimension.selected.get_untracked(), Some(1));
    }

    #[test]
    fn select_survives_write_failure() {
        let owner = Owner::new();
        owner.set();
        let store = MemoryStore::new();
        let dimension = FilterDimension::<contracts::domain::common::NoExtra>::new("branch");
        let generation = dimension.begin_load();
        dimension.apply_candidates(generation, candidates(), &store);

        store.fail_writes();
        dimension.select(2, &store);
        assert_eq!(dimension.selected.get_untracked(), Some(2));
        // The store still holds the old default; memory wins.
        assert_eq!(store.read("branch"), Some(1));
    }

    #[test]
    fn empty_candidate_list_leaves_selection_unresolved() {
        let owner = Owner::new();
        owner.set();
        let store = MemoryStore::new();
        let dimension = FilterDimension::<contracts::domain::common::NoExtra>::new("branch");
        let generation = dimension.begin_load();
        dimension.apply_candidates(generation, Vec::new(), &store);
        assert_eq!(dimension.selected.get_untracked(), None);
        assert_eq!(store.write_count(), 0);
        assert!(!dimension.loading.get_untracked());
    }
}
