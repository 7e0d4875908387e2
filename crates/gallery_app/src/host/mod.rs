mod app;
mod effects;
mod history;
mod render;

pub use app::run_app;
