//! Расписание экзаменов.
//!
//! The exam-type filter is screen-local and keyed on the global academic
//! year: changing the year invalidates the exam types (and with them the
//! schedule) before the new list arrives.

pub mod api;

use contracts::domain::{ExamScheduleRow, NoExtra};
use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

use crate::domain::academics;
use crate::shared::components::FilterDropdown;
use crate::shared::date_utils::format_date;
use crate::shared::filters::{use_global_filters, DependentFilter, QueryState};

#[component]
pub fn ExamsPage() -> impl IntoView {
    let filters = use_global_filters();
    let exam_type = DependentFilter::<NoExtra>::new();

    let (dropdown_open, set_dropdown_open) = signal(false);
    let schedule = QueryState::<ExamScheduleRow>::new();

    // Exam types follow the selected academic year.
    Effect::new(move |_| match filters.selected_academic_year() {
        Some(academic_year_id) => {
            let generation = exam_type.invalidate();
            spawn_local(async move {
                let items = academics::api::fetch_exam_types(academic_year_id)
                    .await
                    .unwrap_or_else(|err| {
                        log::error!("loading exam types failed: {}", err);
                        Vec::new()
                    });
                exam_type.apply_candidates(generation, items);
            });
        }
        None => exam_type.clear(),
    });

    // Schedule follows year + exam type.
    Effect::new(move |_| {
        let academic_year_id = filters.selected_academic_year();
        let exam_type_id = exam_type.selected.get();
        let (Some(academic_year_id), Some(exam_type_id)) = (academic_year_id, exam_type_id)
        else {
            // Supersedes any fetch still in flight for the previous chain.
            schedule.reset();
            return;
        };

        let generation = schedule.begin();
        spawn_local(async move {
            let rows = api::fetch_schedule(academic_year_id, exam_type_id)
                .await
                .unwrap_or_else(|err| {
                    log::error!("loading exam schedule failed: {}", err);
                    Vec::new()
                });
            schedule.apply(generation, rows);
        });
    });

    let exam_type_label = move || {
        exam_type
            .selected
            .get()
            .and_then(|id| {
                exam_type
                    .candidates
                    .with(|items| items.iter().find(|item| item.id == id).cloned())
            })
            .map(|item| item.name)
            .unwrap_or_else(|| "Тип экзамена".to_string())
    };

    view! {
        <div class="page page--exams">
            <h2>"Экзамены"</h2>

            <div class="page__filters">
                <button class="page__filter-btn" on:click=move |_| set_dropdown_open.set(true)>
                    {exam_type_label}
                </button>
            </div>

            <Show when=move || dropdown_open.get()>
                <FilterDropdown
                    title="Выбор типа экзамена"
                    candidates=exam_type.candidates
                    loading=exam_type.loading
                    selected=exam_type.selected
                    on_select=Callback::new(move |id| {
                        exam_type.select(id);
                        set_dropdown_open.set(false);
                    })
                    on_close=Callback::new(move |_| set_dropdown_open.set(false))
                />
            </Show>

            <Show when=move || {
                exam_type.is_empty() && filters.selected_academic_year().is_some()
            }>
                <p class="page__empty">"Для выбранного учебного года нет экзаменов"</p>
            </Show>

            {move || {
                if schedule.loading.get() {
                    view! { <p class="page__loading">"Загрузка расписания..."</p> }.into_any()
                } else if schedule.is_empty() {
                    view! { <p class="page__empty">"Нет данных"</p> }.into_any()
                } else {
                    view! {
                        <table class="data-table">
                            <thead>
                                <tr>
                                    <th>"Предмет"</th>
                                    <th>"Дата"</th>
                                    <th>"Макс. балл"</th>
                                </tr>
                            </thead>
                            <tbody>
                                {move || {
                                    schedule
                                        .rows
                                        .get()
                                        .into_iter()
                                        .map(|row| {
                                            view! {
                                                <tr>
                                                    <td>{row.subject}</td>
                                                    <td>{format_date(row.date)}</td>
                                                    <td>{row.max_marks}</td>
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
