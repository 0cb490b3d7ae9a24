pub mod app;
pub mod context_menu;
pub mod event_log;
pub mod settings_panel;
