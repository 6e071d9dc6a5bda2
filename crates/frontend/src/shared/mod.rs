pub mod api_utils;
pub mod components;
pub mod date_utils;
pub mod filters;
pub mod theme;
