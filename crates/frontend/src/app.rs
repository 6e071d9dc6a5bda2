use leptos::prelude::*;

use crate::layout::top_header::TopHeader;
use crate::pages::attendance::AttendancePage;
use crate::pages::exams::ExamsPage;
use crate::shared::filters::GlobalFiltersProvider;
use crate::shared::theme::ThemeProvider;

#[derive(Clone, Copy, PartialEq, Eq)]
enum Page {
    Attendance,
    Exams,
}

#[component]
pub fn App() -> impl IntoView {
    view! {
        <ThemeProvider>
            <GlobalFiltersProvider>
                <AppShell />
            </GlobalFiltersProvider>
        </ThemeProvider>
    }
}

#[component]
fn AppShell() -> impl IntoView {
    let (page, set_page) = signal(Page::Attendance);

    view! {
        <TopHeader />
        <nav class="app-nav">
            <button
                class="app-nav__item"
                class:active=move || page.get() == Page::Attendance
                on:click=move |_| set_page.set(Page::Attendance)
            >
                "Посещаемость"
            </button>
            <button
                class="app-nav__item"
                class:active=move || page.get() == Page::Exams
                on:click=move |_| set_page.set(Page::Exams)
            >
                "Экзамены"
            </button>
        </nav>
        <main class="app-content">
            {move || match page.get() {
                Page::Attendance => view! { <AttendancePage /> }.into_any(),
                Page::Exams => view! { <ExamsPage /> }.into_any(),
            }}
        </main>
    }
}
