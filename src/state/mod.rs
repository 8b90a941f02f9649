/// State management module
///
/// This module handles all application state, including:
/// - Shared data structures (data.rs)
/// - The catalog screen's per-activation state and load guard (screen.rs)

pub mod data;
pub mod screen;
