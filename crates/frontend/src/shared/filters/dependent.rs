//! Screen-local filters whose candidate list depends on an upstream
//! dimension's selection (e.g. sections for the selected standard).
//!
//! Unlike global dimensions these are not persisted. The contract every
//! screen must follow is enforced here: when the upstream selection changes
//! the dependent selection is cleared *before* the new list is fetched, so a
//! stale value never survives into a list it may not belong to.

use contracts::domain::Entity;
use leptos::prelude::*;

use super::dimension::{reconcile, Reconciliation};

/// Reactive state of one dependent filter.
pub struct DependentFilter<X: Send + Sync + 'static> {
    pub candidates: RwSignal<Vec<Entity<X>>>,
    pub loading: RwSignal<bool>,
    pub selected: RwSignal<Option<i64>>,
    generation: RwSignal<u64>,
}

impl<X: Send + Sync + 'static> Clone for DependentFilter<X> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<X: Send + Sync + 'static> Copy for DependentFilter<X> {}

impl<X: Clone + Send + Sync + 'static> DependentFilter<X> {
    pub fn new() -> Self {
        Self {
            candidates: RwSignal::new(Vec::new()),
            loading: RwSignal::new(false),
            selected: RwSignal::new(None),
            generation: RwSignal::new(0),
        }
    }

    /// Upstream selection changed: drop the current selection and list and
    /// open a new load generation for the parameterized refetch.
    pub fn invalidate(&self) -> u64 {
        self.selected.set(None);
        self.candidates.set(Vec::new());
        self.loading.set(true);
        let generation = self.generation.get_untracked() + 1;
        self.generation.set(generation);
        generation
    }

    /// No upstream selection: show nothing, load nothing. In-flight loads
    /// from an older upstream value are superseded.
    pub fn clear(&self) {
        self.selected.set(None);
        self.candidates.set(Vec::new());
        self.loading.set(false);
        self.generation.update(|generation| *generation += 1);
    }

    /// Deliver the refetched list and apply the default-to-first rule. An
    /// empty list leaves the selection unset; the consumer shows an explicit
    /// "no options" state.
    pub fn apply_candidates(&self, generation: u64, items: Vec<Entity<X>>) {
        if self.generation.get_untracked() != generation {
            log::debug!("dependent filter: dropping result of superseded load");
            return;
        }
        match reconcile(&items, None) {
            Reconciliation::Resolved { selected, .. } => self.selected.set(Some(selected)),
            Reconciliation::Pending => self.selected.set(None),
        }
        self.candidates.set(items);
        self.loading.set(false);
    }

    pub fn select(&self, id: i64) {
        self.selected.set(Some(id));
    }

    /// True when loading finished with no options for the current upstream
    /// selection.
    pub fn is_empty(&self) -> bool {
        !self.loading.get() && self.candidates.with(|candidates| candidates.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sections_for_standard_5() -> Vec<Entity> {
        vec![Entity::new(51, "А"), Entity::new(52, "Б")]
    }

    fn sections_for_standard_6() -> Vec<Entity> {
        vec![Entity::new(61, "А")]
    }

    #[test]
    fn upstream_change_clears_selection_before_new_list_arrives() {
        let owner = Owner::new();
        owner.set();
        let section = DependentFilter::<contracts::domain::NoExtra>::new();
        let generation = section.invalidate();
        section.apply_candidates(generation, sections_for_standard_5());
        section.select(52);

        // Standard changes from 5 to 6: the stale section must be gone
        // before the new list is applied.
        let generation = section.invalidate();
        assert_eq!(section.selected.get_untracked(), None);
        assert!(section.loading.get_untracked());

        section.apply_candidates(generation, sections_for_standard_6());
        assert_eq!(section.selected.get_untracked(), Some(61));
    }

    #[test]
    fn defaults_to_first_candidate_without_persistence() {
        let owner = Owner::new();
        owner.set();
        let section = DependentFilter::<contracts::domain::NoExtra>::new();
        let generation = section.invalidate();
        section.apply_candidates(generation, sections_for_standard_5());
        assert_eq!(section.selected.get_untracked(), Some(51));
    }

    #[test]
    fn empty_list_is_an_explicit_no_options_state() {
        let owner = Owner::new();
        owner.set();
        let section = DependentFilter::<contracts::domain::NoExtra>::new();
        let generation = section.invalidate();
        section.apply_candidates(generation, Vec::new());
        assert_eq!(section.selected.get_untracked(), None);
        assert!(section.is_empty());
    }

    #[test]
    fn superseded_fetch_cannot_resurrect_old_sections() {
        let owner = Owner::new();
        owner.set();
        let section = DependentFilter::<contracts::domain::NoExtra>::new();
        let stale = section.invalidate();
        let fresh = section.invalidate();
        section.apply_candidates(fresh, sections_for_standard_6());
        section.apply_candidates(stale, sections_for_standard_5());
        assert_eq!(section.candidates.get_untracked(), sections_for_standard_6());
        assert_eq!(section.selected.get_untracked(), Some(61));
    }

    #[test]
    fn clear_resets_without_entering_loading() {
        let owner = Owner::new();
        owner.set();
        let section = DependentFilter::<contracts::domain::NoExtra>::new();
        let generation = section.invalidate();
        section.apply_candidates(generation, sections_for_standard_5());
        section.clear();
        assert_eq!(section.selected.get_untracked(), None);
        assert!(!section.loading.get_untracked());
        assert!(section.is_empty());
    }
}
