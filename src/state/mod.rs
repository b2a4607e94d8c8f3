/// State management module
///
/// This module handles all application state, including:
/// - Static portfolio content (catalog.rs, data.rs)
/// - View navigation and its reducer (navigator.rs)
/// - The home carousel clock (carousel.rs)
/// - User settings read at startup (settings.rs)

pub mod carousel;
pub mod catalog;
pub mod data;
pub mod navigator;
pub mod settings;
