pub mod app;
pub mod settings;
pub mod settings_io;

mod center_panel;
mod left_panel;
mod right_panel;
