//! Recipe record and the MealDB response envelope
//!
//! Field names on the wire are fixed by the MealDB API (`strMeal`,
//! `strCategory`, `strMealThumb`). Missing or null text fields are
//! defaulted to the empty string here so nothing downstream has to
//! deal with absent values.

use serde::{Deserialize, Deserializer};

/// A single meal as shown in the recipe list
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Recipe {
    /// Meal name
    #[serde(rename = "strMeal", default, deserialize_with = "null_as_empty")]
    pub name: String,

    /// Meal category (e.g., "Vegetarian", "Seafood")
    #[serde(rename = "strCategory", default, deserialize_with = "null_as_empty")]
    pub category: String,

    /// Thumbnail image URI
    #[serde(rename = "strMealThumb", default, deserialize_with = "null_as_empty")]
    pub image: String,
}

impl Recipe {
    pub fn new(
        name: impl Into<String>,
        category: impl Into<String>,
        image: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            category: category.into(),
            image: image.into(),
        }
    }
}

/// Top-level body of `search.php`
///
/// `meals` is `null` when nothing matched the search term.
#[derive(Debug, Deserialize)]
pub struct MealsResponse {
    #[serde(default)]
    pub meals: Option<Vec<Recipe>>,
}

impl MealsResponse {
    pub fn into_recipes(self) -> Vec<Recipe> {
        self.meals.unwrap_or_default()
    }
}

fn null_as_empty<'de, D>(deserializer: D) -> std::result::Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_recipe_reads_api_field_names() {
        let json = r#"{
            "idMeal": "52771",
            "strMeal": "Spicy Arrabiata Penne",
            "strCategory": "Vegetarian",
            "strArea": "Italian",
            "strMealThumb": "https://www.themealdb.com/images/media/meals/ustsqw1468250014.jpg"
        }"#;

        let recipe: Recipe = serde_json::from_str(json).unwrap();

        assert_eq!(recipe.name, "Spicy Arrabiata Penne");
        assert_eq!(recipe.category, "Vegetarian");
        assert!(recipe.image.ends_with("ustsqw1468250014.jpg"));
    }

    #[test]
    fn test_null_and_missing_fields_default_to_empty() {
        let json = r#"{"strMeal": "Mystery Stew", "strCategory": null}"#;

        let recipe: Recipe = serde_json::from_str(json).unwrap();

        assert_eq!(recipe, Recipe::new("Mystery Stew", "", ""));
    }

    #[test]
    fn test_null_meals_is_empty() {
        let response: MealsResponse = serde_json::from_str(r#"{"meals": null}"#).unwrap();
        assert!(response.into_recipes().is_empty());

        let response: MealsResponse = serde_json::from_str("{}").unwrap();
        assert!(response.into_recipes().is_empty());
    }
}
