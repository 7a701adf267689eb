//! Presentation layers: a ratatui terminal UI and a line-oriented console
//! front end, both driven through [`GameObserver`](crate::game::GameObserver).

mod app;
pub mod console;
mod game_view;
pub mod status;

pub use app::App;
