//! recipe-ui library - terminal front end for recipe search
//!
//! One text input and one recipe list, driven by a
//! [`recipe_common::Controller`]. Also offers a non-interactive mode that
//! prints the rendered list as HTML.

pub mod app;
pub mod cli;
pub mod logging;
pub mod oneshot;

pub use app::App;
pub use cli::Args;
