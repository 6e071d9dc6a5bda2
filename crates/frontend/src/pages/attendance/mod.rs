//! Журнал посещаемости.
//!
//! Demonstrates the dependent-filter contract on top of the global
//! coordinator: standards follow the selected branch, sections follow the
//! selected standard, and the register query is parameterized by all of
//! branch, academic year and section. Each upstream change resets its
//! children before the new candidate list is fetched.

pub mod api;

use contracts::domain::{AttendanceRow, NoExtra};
use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

use crate::domain::academics;
use crate::shared::components::FilterDropdown;
use crate::shared::filters::{use_global_filters, DependentFilter, QueryState};

#[derive(Clone, Copy, PartialEq, Eq)]
enum OpenDropdown {
    Standard,
    Section,
}

#[component]
pub fn AttendancePage() -> impl IntoView {
    let filters = use_global_filters();
    let standard = DependentFilter::<NoExtra>::new();
    let section = DependentFilter::<NoExtra>::new();

    let (open, set_open) = signal::<Option<OpenDropdown>>(None);
    let register = QueryState::<AttendanceRow>::new();

    // Standards follow the selected branch. The section list is a child of
    // the standard list, so it resets here as well, before anything loads.
    Effect::new(move |_| match filters.selected_branch() {
        Some(branch_id) => {
            section.clear();
            let generation = standard.invalidate();
            spawn_local(async move {
                let items = academics::api::fetch_standards(branch_id)
                    .await
                    .unwrap_or_else(|err| {
                        log::error!("loading standards failed: {}", err);
                        Vec::new()
                    });
                standard.apply_candidates(generation, items);
            });
        }
        None => {
            standard.clear();
            section.clear();
        }
    });

    // Sections follow the selected standard.
    Effect::new(move |_| match standard.selected.get() {
        Some(standard_id) => {
            let generation = section.invalidate();
            spawn_local(async move {
                let items = academics::api::fetch_sections(standard_id)
                    .await
                    .unwrap_or_else(|err| {
                        log::error!("loading sections failed: {}", err);
                        Vec::new()
                    });
                section.apply_candidates(generation, items);
            });
        }
        None => section.clear(),
    });

    // The register query waits until the whole chain is resolved.
    Effect::new(move |_| {
        let branch_id = filters.selected_branch();
        let academic_year_id = filters.selected_academic_year();
        let section_id = section.selected.get();
        let (Some(branch_id), Some(academic_year_id), Some(section_id)) =
            (branch_id, academic_year_id, section_id)
        else {
            // Supersedes any fetch still in flight for the previous chain.
            register.reset();
            return;
        };

        let generation = register.begin();
        spawn_local(async move {
            let rows = api::fetch_register(branch_id, academic_year_id, section_id)
                .await
                .unwrap_or_else(|err| {
                    log::error!("loading attendance register failed: {}", err);
                    Vec::new()
                });
            register.apply(generation, rows);
        });
    });

    let standard_label = move || {
        standard
            .selected
            .get()
            .and_then(|id| {
                standard
                    .candidates
                    .with(|items| items.iter().find(|item| item.id == id).cloned())
            })
            .map(|item| format!("{} класс", item.name))
            .unwrap_or_else(|| "Параллель".to_string())
    };

    let section_label = move || {
        section
            .selected
            .get()
            .and_then(|id| {
                section
                    .candidates
                    .with(|items| items.iter().find(|item| item.id == id).cloned())
            })
            .map(|item| item.name)
            .unwrap_or_else(|| "Литера".to_string())
    };

    view! {
        <div class="page page--attendance">
            <h2>"Посещаемость"</h2>

            <div class="page__filters">
                <button
                    class="page__filter-btn"
                    on:click=move |_| set_open.set(Some(OpenDropdown::Standard))
                >
                    {standard_label}
                </button>
                <button
                    class="page__filter-btn"
                    disabled=move || standard.selected.get().is_none()
                    on:click=move |_| set_open.set(Some(OpenDropdown::Section))
                >
                    {section_label}
                </button>
            </div>

            <Show when=move || open.get() == Some(OpenDropdown::Standard)>
                <FilterDropdown
                    title="Выбор параллели"
                    candidates=standard.candidates
                    loading=standard.loading
                    selected=standard.selected
                    on_select=Callback::new(move |id| {
                        standard.select(id);
                        set_open.set(None);
                    })
                    on_close=Callback::new(move |_| set_open.set(None))
                />
            </Show>

            <Show when=move || open.get() == Some(OpenDropdown::Section)>
                <FilterDropdown
                    title="Выбор литеры"
                    candidates=section.candidates
                    loading=section.loading
                    selected=section.selected
                    on_select=Callback::new(move |id| {
                        section.select(id);
                        set_open.set(None);
                    })
                    on_close=Callback::new(move |_| set_open.set(None))
                />
            </Show>

            <Show when=move || section.is_empty() && standard.selected.get().is_some()>
                <p class="page__empty">"Для выбранной параллели нет литер"</p>
            </Show>

            {move || {
                if register.loading.get() {
                    view! { <p class="page__loading">"Загрузка журнала..."</p> }.into_any()
                } else if register.is_empty() {
                    view! { <p class="page__empty">"Нет данных"</p> }.into_any()
                } else {
                    view! {
                        <table class="data-table">
                            <thead>
                                <tr>
                                    <th>"Ученик"</th>
                                    <th>"Присутствовал"</th>
                                    <th>"Всего дней"</th>
                                </tr>
                            </thead>
                            <tbody>
                                {move || {
                                    register
                                        .rows
                                        .get()
                                        .into_iter()
                                        .map(|row| {
                                            view! {
                                                <tr>
                                                    <td>{row.student_name}</td>
                                                    <td>{row.present_days}</td>
                                                    <td>{row.total_days}</td>
                                                </tr>
                                            }
                                        })
                                        .collect_view()
                                }}
                            </tbody>
                        </table>
                    }
                        .into_any()
                }
            }}
        </div>
    }
}
