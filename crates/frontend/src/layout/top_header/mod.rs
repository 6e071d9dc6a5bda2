//! Top bar with the globally scoped filter selectors.
//!
//! A thin consumer of the filter coordinator: it renders the current branch
//! and academic-year names and opens a dropdown per dimension; every change
//! is delegated to the coordinator's setters.

use leptos::prelude::*;

use crate::shared::components::FilterDropdown;
use crate::shared::filters::use_global_filters;
use crate::shared::theme::{FontSizeControl, ThemeToggle};

#[derive(Clone, Copy, PartialEq, Eq)]
enum OpenDropdown {
    Branch,
    AcademicYear,
}

#[component]
pub fn TopHeader() -> impl IntoView {
    let filters = use_global_filters();
    let (open, set_open) = signal::<Option<OpenDropdown>>(None);

    let branch_label = move || {
        if filters.branches_loading() {
            return "Загрузка...".to_string();
        }
        filters
            .selected_branch()
            .and_then(|id| filters.branches().into_iter().find(|branch| branch.id == id))
            .map(|branch| branch.name)
            .unwrap_or_else(|| "Филиал".to_string())
    };

    let year_label = move || {
        if filters.academic_years_loading() {
            return "Загрузка...".to_string();
        }
        filters
            .selected_academic_year()
            .and_then(|id| filters.academic_years().into_iter().find(|year| year.id == id))
            .map(|year| year.name)
            .unwrap_or_else(|| "Учебный год".to_string())
    };

    view! {
        <header class="top-header">
            <span class="top-header__logo">"Школа"</span>

            <div class="top-header__filters">
                <button
                    class="top-header__filter-btn"
                    on:click=move |_| set_open.set(Some(OpenDropdown::Branch))
                >
                    {branch_label}
                </button>
                <button
                    class="top-header__filter-btn"
                    on:click=move |_| set_open.set(Some(OpenDropdown::AcademicYear))
                >
                    {year_label}
                </button>
            </div>

            <FontSizeControl />
            <ThemeToggle />

            <Show when=move || open.get() == Some(OpenDropdown::Branch)>
                <FilterDropdown
                    title="Выбор филиала"
                    candidates=Signal::derive(move || filters.branches())
                    loading=Signal::derive(move || filters.branches_loading())
                    selected=Signal::derive(move || filters.selected_branch())
                    on_select=Callback::new(move |id| {
                        filters.set_selected_branch(id);
                        set_open.set(None);
                    })
                    on_close=Callback::new(move |_| set_open.set(None))
                />
            </Show>

            <Show when=move || open.get() == Some(OpenDropdown::AcademicYear)>
                <FilterDropdown
                    title="Выбор учебного года"
                    candidates=Signal::derive(move || filters.academic_years())
                    loading=Signal::derive(move || filters.academic_years_loading())
                    selected=Signal::derive(move || filters.selected_academic_year())
                    on_select=Callback::new(move |id| {
                        filters.set_selected_academic_year(id);
                        set_open.set(None);
                    })
                    on_close=Callback::new(move |_| set_open.set(None))
                />
            </Show>
        </header>
    }
}
