//! # Domain Models
//!
//! These structs represent the core entities of CookWithUs. All of them are
//! created once and never mutated afterwards; the store owns the records and
//! hands out clones.
//!
//! Optional fields are `Option`s that serde skips when absent, so the JSON
//! shape only carries `picture`, `note` or `shoppingList` when they were sent.

use serde::{Deserialize, Deserializer, Serialize};

/// A registered actor who can share recipes and submit ratings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Cook {
    pub id: String,
    /// Family name
    pub name: String,
    pub given_name: String,
    pub email: String,
}

/// Which meal of the day a recipe is meant for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MealKind {
    Breakfast,
    Lunch,
    Dinner,
    Dessert,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Diet {
    Normal,
    Vegetarian,
    Vegan,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ingredient {
    pub name: String,
    /// Free-form amount ("500", "1/2"). Clients send it as a string or a number.
    #[serde(rename = "number", alias = "quantity", deserialize_with = "string_or_number")]
    pub quantity: String,
    pub unit: String,
}

/// One how-to step. `order` is always contiguous from 1 within a recipe.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Step {
    #[serde(rename = "orderNo", alias = "order")]
    pub order: u32,
    pub title: String,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShoppingItem {
    pub product: String,
    #[serde(rename = "number", alias = "quantity")]
    pub quantity: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,
}

/// A shared dish, owned by exactly one Cook.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Recipe {
    pub id: String,
    pub owner_id: String,
    pub title: String,
    pub ingredients: Vec<Ingredient>,
    #[serde(rename = "howTo", alias = "steps")]
    pub steps: Vec<Step>,
    pub servings: u32,
    pub meal: MealKind,
    pub diet: Diet,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub shopping_list: Option<Vec<ShoppingItem>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub picture: Option<String>,
}

/// A 1-5 star review of a Recipe by a Cook other than its owner.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Rating {
    pub id: String,
    pub rater_id: String,
    pub recipe_id: String,
    pub stars: u8,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub picture: Option<String>,
}

/// Photos of a dish a Cook actually cooked.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Meal {
    pub id: String,
    pub cook_id: String,
    pub pictures: Vec<String>,
}

fn string_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Text(String),
        Number(serde_json::Number),
    }

    Ok(match Raw::deserialize(deserializer)? {
        Raw::Text(s) => s,
        Raw::Number(n) => n.to_string(),
    })
}
