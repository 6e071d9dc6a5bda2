//! Global cascading filter manager.
//!
//! Owns the globally scoped filter dimensions (branch, academic year) that
//! most pages share: resolves each selection against the persisted store and
//! the freshly loaded candidate list, writes every change through to storage,
//! and exposes a read/write contract to consumers. Screen-local dependent
//! filters (standard → section and the like) build on [`DependentFilter`].

pub mod dependent;
pub mod dimension;
pub mod query;
pub mod store;

pub use dependent::DependentFilter;
pub use dimension::{reconcile, FilterDimension, Reconciliation};
pub use query::QueryState;
pub use store::{LocalStorageStore, SelectionStore, StoreError};

use contracts::domain::{AcademicYearInfo, Branch, BranchInfo};
use leptos::prelude::*;

use crate::domain::{academic_year, branch};

/// Persistence key suffix for the branch dimension.
pub const BRANCH_DIMENSION: &str = "branch";
/// Persistence key suffix for the academic-year dimension.
pub const ACADEMIC_YEAR_DIMENSION: &str = "academic_year";

/// Shared filter coordinator, provided once at the app root.
///
/// Constructor-injected rather than a global singleton: tests build a fresh
/// coordinator over an in-memory store, the app uses [`GlobalFilters::new`]
/// with localStorage.
pub struct GlobalFilters<S: 'static = LocalStorageStore> {
    store: S,
    pub branch: FilterDimension<BranchInfo>,
    pub academic_year: FilterDimension<AcademicYearInfo>,
}

impl<S: Clone + 'static> Clone for GlobalFilters<S> {
    fn clone(&self) -> Self {
        Self {
            store: self.store.clone(),
            branch: self.branch,
            academic_year: self.academic_year,
        }
    }
}

impl<S: Copy + 'static> Copy for GlobalFilters<S> {}

impl GlobalFilters {
    pub fn new() -> Self {
        Self::with_store(LocalStorageStore)
    }
}

impl Default for GlobalFilters {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: SelectionStore + Clone + 'static> GlobalFilters<S> {
    pub fn with_store(store: S) -> Self {
        Self {
            store,
            branch: FilterDimension::new(BRANCH_DIMENSION),
            academic_year: FilterDimension::new(ACADEMIC_YEAR_DIMENSION),
        }
    }

    // Consumer-facing surface. All getters are reactive pass-throughs so
    // pages don't need their own subscriptions to the providers.

    pub fn selected_branch(&self) -> Option<i64> {
        self.branch.selected_id()
    }

    pub fn selected_academic_year(&self) -> Option<i64> {
        self.academic_year.selected_id()
    }

    pub fn set_selected_branch(&self, id: i64) {
        self.branch.select(id, &self.store);
    }

    pub fn set_selected_academic_year(&self, id: i64) {
        self.academic_year.select(id, &self.store);
    }

    pub fn branches(&self) -> Vec<Branch> {
        self.branch.candidates()
    }

    pub fn academic_years(&self) -> Vec<contracts::domain::AcademicYear> {
        self.academic_year.candidates()
    }

    pub fn branches_loading(&self) -> bool {
        self.branch.is_loading()
    }

    pub fn academic_years_loading(&self) -> bool {
        self.academic_year.is_loading()
    }
}

impl GlobalFilters {
    /// Load (or reload) the branch candidates. Each dimension loads
    /// independently; a slow branch fetch never blocks the academic year.
    pub fn load_branches(&self) {
        let this = *self;
        let generation = this.branch.begin_load();
        wasm_bindgen_futures::spawn_local(async move {
            let items = match branch::api::fetch_branches().await {
                Ok(items) => items,
                Err(err) => {
                    // Provider failure is not the coordinator's error to
                    // surface: it becomes the empty-candidate-list state.
                    log::error!("loading branches failed: {}", err);
                    Vec::new()
                }
            };
            this.branch.apply_candidates(generation, items, &this.store);
        });
    }

    /// Load (or reload) the academic-year candidates.
    pub fn load_academic_years(&self) {
        let this = *self;
        let generation = this.academic_year.begin_load();
        wasm_bindgen_futures::spawn_local(async move {
            let items = match academic_year::api::fetch_academic_years().await {
                Ok(items) => items,
                Err(err) => {
                    log::error!("loading academic years failed: {}", err);
                    Vec::new()
                }
            };
            this.academic_year
                .apply_candidates(generation, items, &this.store);
        });
    }
}

/// Provides the filter coordinator to children and starts both candidate
/// loads.
#[component]
pub fn GlobalFiltersProvider(children: Children) -> impl IntoView {
    let filters = GlobalFilters::new();
    filters.load_branches();
    filters.load_academic_years();
    provide_context(filters);

    children()
}

/// Hook to use the global filter coordinator.
pub fn use_global_filters() -> GlobalFilters {
    use_context::<GlobalFilters>()
        .expect("GlobalFilters not found. Wrap your app with GlobalFiltersProvider.")
}

#[cfg(test)]
mod tests {
    use super::store::MemoryStore;
    use super::*;
    use contracts::domain::Entity;
    use chrono::NaiveDate;

    fn branches() -> Vec<Branch> {
        vec![
            Entity::with_extra(
                1,
                "Main",
                BranchInfo { code: "BR-01".into(), city: "Moscow".into() },
            ),
            Entity::with_extra(
                2,
                "North",
                BranchInfo { code: "BR-02".into(), city: "Tver".into() },
            ),
        ]
    }

    fn academic_years() -> Vec<contracts::domain::AcademicYear> {
        vec![
            Entity::with_extra(
                10,
                "2025/2026",
                AcademicYearInfo {
                    start_date: NaiveDate::from_ymd_opt(2025, 9, 1).unwrap(),
                    end_date: NaiveDate::from_ymd_opt(2026, 5, 31).unwrap(),
                    is_current: true,
                },
            ),
            Entity::with_extra(
                11,
                "2024/2025",
                AcademicYearInfo {
                    start_date: NaiveDate::from_ymd_opt(2024, 9, 1).unwrap(),
                    end_date: NaiveDate::from_ymd_opt(2025, 5, 31).unwrap(),
                    is_current: false,
                },
            ),
        ]
    }

    fn deliver_branches(filters: &GlobalFilters<MemoryStore>, store: &MemoryStore, items: Vec<Branch>) {
        let generation = filters.branch.begin_load();
        filters.branch.apply_candidates(generation, items, store);
    }

    #[test]
    fn cold_start_with_empty_storage_defaults_and_persists() {
        let owner = Owner::new();
        owner.set();
        let store = MemoryStore::new();
        let filters = GlobalFilters::with_store(store.clone());

        deliver_branches(&filters, &store, branches());

        assert_eq!(filters.branch.selected.get_untracked(), Some(1));
        assert_eq!(store.raw("global_selected_branch").as_deref(), Some("1"));
    }

    #[test]
    fn warm_start_with_valid_storage_honors_saved_selection() {
        let owner = Owner::new();
        owner.set();
        let store = MemoryStore::with_value(BRANCH_DIMENSION, 2);
        let filters = GlobalFilters::with_store(store.clone());

        deliver_branches(&filters, &store, branches());

        assert_eq!(filters.branch.selected.get_untracked(), Some(2));
        // Valid saved value: nothing to write back.
        assert_eq!(store.write_count(), 0);
    }

    #[test]
    fn warm_start_with_invalid_storage_falls_back_and_repairs() {
        let owner = Owner::new();
        owner.set();
        let store = MemoryStore::with_value(BRANCH_DIMENSION, 99);
        let filters = GlobalFilters::with_store(store.clone());

        deliver_branches(&filters, &store, branches());

        assert_eq!(filters.branch.selected.get_untracked(), Some(1));
        assert_eq!(store.raw("global_selected_branch").as_deref(), Some("1"));
    }

    #[test]
    fn dimensions_resolve_independently() {
        let owner = Owner::new();
        owner.set();
        let store = MemoryStore::with_value(ACADEMIC_YEAR_DIMENSION, 11);
        let filters = GlobalFilters::with_store(store.clone());

        // Academic years arrive first; branches are still loading.
        let generation = filters.academic_year.begin_load();
        filters
            .academic_year
            .apply_candidates(generation, academic_years(), &store);

        assert_eq!(filters.academic_year.selected.get_untracked(), Some(11));
        assert_eq!(filters.branch.selected.get_untracked(), None);

        // The late branch load must not disturb the resolved year.
        deliver_branches(&filters, &store, branches());
        assert_eq!(filters.academic_year.selected.get_untracked(), Some(11));
        assert_eq!(filters.branch.selected.get_untracked(), Some(1));
    }

    #[test]
    fn explicit_selection_updates_memory_despite_write_failure() {
        let owner = Owner::new();
        owner.set();
        let store = MemoryStore::new();
        let filters = GlobalFilters::with_store(store.clone());
        deliver_branches(&filters, &store, branches());

        store.fail_writes();
        filters.set_selected_branch(2);

        assert_eq!(filters.selected_branch(), Some(2));
        assert_eq!(store.raw("global_selected_branch").as_deref(), Some("1"));
    }

    #[test]
    fn selection_keys_do_not_collide_across_dimensions() {
        let owner = Owner::new();
        owner.set();
        let store = MemoryStore::new();
        let filters = GlobalFilters::with_store(store.clone());

        deliver_branches(&filters, &store, branches());
        let generation = filters.academic_year.begin_load();
        filters
            .academic_year
            .apply_candidates(generation, academic_years(), &store);

        filters.set_selected_branch(2);
        filters.set_selected_academic_year(11);

        assert_eq!(store.raw("global_selected_branch").as_deref(), Some("2"));
        assert_eq!(store.raw("global_selected_academic_year").as_deref(), Some("11"));
    }
}
