//! Theme and font-size preferences.
//!
//! A plain preference store with no cascading logic: values persist in
//! localStorage under their own keys (`theme_mode`, `font_size`), separate
//! from the `global_selected_*` filter namespace.

use leptos::prelude::*;
use web_sys::window;

const THEME_STORAGE_KEY: &str = "theme_mode";
const FONT_SIZE_STORAGE_KEY: &str = "font_size";
const DEFAULT_FONT_SIZE: u32 = 14;
const MIN_FONT_SIZE: u32 = 10;
const MAX_FONT_SIZE: u32 = 22;
const FONT_SIZE_STEP: u32 = 2;

/// Keeps the body font inside the range the layout is designed for, both
/// for stepper clicks and for whatever was left in localStorage.
fn clamp_font_size(size: u32) -> u32 {
    size.clamp(MIN_FONT_SIZE, MAX_FONT_SIZE)
}

#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum ThemeMode {
    #[default]
    Light,
    Dark,
}

impl ThemeMode {
    /// Name used for the CSS hook and localStorage.
    pub fn as_str(&self) -> &'static str {
        match self {
            ThemeMode::Light => "light",
            ThemeMode::Dark => "dark",
        }
    }

    pub fn from_str(s: &str) -> Self {
        match s {
            "dark" => ThemeMode::Dark,
            _ => ThemeMode::Light,
        }
    }
}

fn local_storage() -> Option<web_sys::Storage> {
    window()?.local_storage().ok()?
}

fn load_theme_from_storage() -> ThemeMode {
    local_storage()
        .and_then(|storage| storage.get_item(THEME_STORAGE_KEY).ok().flatten())
        .map(|s| ThemeMode::from_str(&s))
        .unwrap_or_default()
}

fn load_font_size_from_storage() -> u32 {
    local_storage()
        .and_then(|storage| storage.get_item(FONT_SIZE_STORAGE_KEY).ok().flatten())
        .and_then(|s| s.parse().ok())
        .map(clamp_font_size)
        .unwrap_or(DEFAULT_FONT_SIZE)
}

fn apply_theme(mode: ThemeMode, font_size: u32) {
    let Some(body) = window().and_then(|w| w.document()).and_then(|d| d.body()) else {
        return;
    };
    let _ = body.set_attribute("data-theme", mode.as_str());
    let _ = body
        .style()
        .set_property("font-size", &format!("{}px", font_size));
}

#[derive(Clone, Copy)]
pub struct ThemeContext {
    pub mode: RwSignal<ThemeMode>,
    pub font_size: RwSignal<u32>,
}

impl ThemeContext {
    pub fn set_mode(&self, mode: ThemeMode) {
        self.mode.set(mode);
        if let Some(storage) = local_storage() {
            let _ = storage.set_item(THEME_STORAGE_KEY, mode.as_str());
        }
        apply_theme(mode, self.font_size.get_untracked());
    }

    pub fn toggle_mode(&self) {
        let next = match self.mode.get_untracked() {
            ThemeMode::Light => ThemeMode::Dark,
            ThemeMode::Dark => ThemeMode::Light,
        };
        self.set_mode(next);
    }

    pub fn set_font_size(&self, size: u32) {
        let size = clamp_font_size(size);
        self.font_size.set(size);
        if let Some(storage) = local_storage() {
            let _ = storage.set_item(FONT_SIZE_STORAGE_KEY, &size.to_string());
        }
        apply_theme(self.mode.get_untracked(), size);
    }
}

/// Provides theme context to children components.
#[component]
pub fn ThemeProvider(children: Children) -> impl IntoView {
    let mode = load_theme_from_storage();
    let font_size = load_font_size_from_storage();
    apply_theme(mode, font_size);

    provide_context(ThemeContext {
        mode: RwSignal::new(mode),
        font_size: RwSignal::new(font_size),
    });

    children()
}

/// Hook to use the theme context.
pub fn use_theme() -> ThemeContext {
    use_context::<ThemeContext>().expect("ThemeContext not found. Wrap your app with ThemeProvider.")
}

/// Light/dark toggle button for the header.
#[component]
pub fn ThemeToggle() -> impl IntoView {
    let ctx = use_theme();

    view! {
        <button
            class="top-header-icon-btn"
            on:click=move |_| ctx.toggle_mode()
            title="Сменить тему"
        >
            {move || match ctx.mode.get() {
                ThemeMode::Light => "🌙",
                ThemeMode::Dark => "☀",
            }}
        </button>
    }
}

/// Font-size stepper for the header.
#[component]
pub fn FontSizeControl() -> impl IntoView {
    let ctx = use_theme();

    view! {
        <div class="top-header-font-size">
            <button
                class="top-header-icon-btn"
                title="Мельче"
                disabled=move || ctx.font_size.get() <= MIN_FONT_SIZE
                on:click=move |_| {
                    let current = ctx.font_size.get_untracked();
                    ctx.set_font_size(current.saturating_sub(FONT_SIZE_STEP));
                }
            >
                "A-"
            </button>
            <button
                class="top-header-icon-btn"
                title="Крупнее"
                disabled=move || ctx.font_size.get() >= MAX_FONT_SIZE
                on:click=move |_| {
                    let current = ctx.font_size.get_untracked();
                    ctx.set_font_size(current + FONT_SIZE_STEP);
                }
            >
                "A+"
            </button>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn font_size_stays_within_layout_bounds() {
        assert_eq!(clamp_font_size(4), MIN_FONT_SIZE);
        assert_eq!(clamp_font_size(100), MAX_FONT_SIZE);
        assert_eq!(clamp_font_size(DEFAULT_FONT_SIZE), DEFAULT_FONT_SIZE);
    }

    #[test]
    fn theme_mode_round_trips_through_its_storage_name() {
        assert_eq!(ThemeMode::from_str(ThemeMode::Dark.as_str()), ThemeMode::Dark);
        assert_eq!(ThemeMode::from_str(ThemeMode::Light.as_str()), ThemeMode::Light);
        // Unknown values fall back to the default.
        assert_eq!(ThemeMode::from_str("sepia"), ThemeMode::Light);
    }
}
