//! Terminal dashboard for the ranking engine.
//!
//! One chart, one leaderboard, one status line. View modes map to the
//! engine's pure pipelines; every transition recomputes from the loaded
//! snapshot.

pub mod app;
pub mod input;
pub mod panels;
pub mod theme;
pub mod ui;

pub use app::App;
pub use input::handle_key;
pub use theme::Theme;
