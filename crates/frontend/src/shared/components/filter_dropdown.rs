use contracts::domain::Entity;
use leptos::prelude::*;

/// Модальный список кандидатов одного измерения фильтра.
///
/// Renders the loading / empty / populated states, highlights the current
/// selection and delegates all mutation to the caller; it never assumes the
/// candidate list is non-empty.
#[component]
pub fn FilterDropdown<X>(
    /// Заголовок модального окна
    #[prop(into)]
    title: String,
    /// Кандидаты измерения
    #[prop(into)]
    candidates: Signal<Vec<Entity<X>>>,
    /// Индикатор загрузки
    #[prop(into)]
    loading: Signal<bool>,
    /// Текущий выбор
    #[prop(into)]
    selected: Signal<Option<i64>>,
    /// Callback при выборе кандидата
    on_select: Callback<i64>,
    /// Callback при закрытии без выбора
    on_close: Callback<()>,
) -> impl IntoView
where
    X: Clone + PartialEq + Send + Sync + 'static,
{
    view! {
        <div class="modal-overlay" on:click=move |_| on_close.run(())>
            <div class="filter-dropdown" on:click=move |ev| ev.stop_propagation()>
                <div class="filter-dropdown__header">
                    <h3>{title}</h3>
                </div>
                <div class="filter-dropdown__content">
                    {move || {
                        if loading.get() {
                            view! { <div class="filter-dropdown__loading">"Загрузка..."</div> }
                                .into_any()
                        } else if candidates.with(|items| items.is_empty()) {
                            view! {
                                <div class="filter-dropdown__empty">"Нет доступных значений"</div>
                            }
                                .into_any()
                        } else {
                            view! {
                                <For
                                    each=move || candidates.get()
                                    key=|entity| entity.id
                                    children=move |entity| {
                                        let id = entity.id;
                                        view! {
                                            <button
                                                class="filter-dropdown__item"
                                                class:selected=move || selected.get() == Some(id)
                                                on:click=move |_| on_select.run(id)
                                            >
                                                {entity.name.clone()}
                                            </button>
                                        }
                                    }
                                />
                            }
                                .into_any()
                        }
                    }}
                </div>
            </div>
        </div>
    }
}
