//! # Recipe Search Common Library
//!
//! Shared code for the recipe search front ends:
//! - Recipe model and wire mapping
//! - Loader (MealDB HTTP client)
//! - Filter over the held record set
//! - Renderer (recipe list container)
//! - Controller wiring the three together for one session
//! - Configuration loading

pub mod config;
pub mod controller;
pub mod error;
pub mod filter;
pub mod loader;
pub mod model;
pub mod render;

pub use controller::{Controller, Phase};
pub use error::{Error, Result};
pub use filter::filter_recipes;
pub use loader::{FetchError, MealDbClient, RecipeSource};
pub use model::Recipe;
pub use render::{Notice, RecipeList};
