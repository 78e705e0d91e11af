//! # Request Payloads
//!
//! Typed request bodies plus the shape checks a schema document would
//! express. Decoding catches missing fields and wrong types; `validate`
//! catches everything serde can't (blank strings, ranges, lengths).

use serde::Deserialize;

use crate::error::{AppError, Result};
use crate::models::{Diet, Ingredient, MealKind, Rating, Recipe, ShoppingItem, Step};

/// Longest note a rating may carry, in characters.
pub const MAX_NOTE_CHARS: usize = 1024;

pub const MIN_STARS: i64 = 1;
pub const MAX_STARS: i64 = 5;

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewCook {
    pub name: String,
    pub given_name: String,
    pub email: String,
}

impl NewCook {
    pub fn validate(&self) -> Result<()> {
        require_text("name", &self.name)?;
        require_text("givenName", &self.given_name)?;
        require_text("email", &self.email)?;
        if !is_reasonable_email(self.email.trim()) {
            return Err(AppError::validation(format!(
                "'{}' is not a valid email address.",
                self.email
            )));
        }
        Ok(())
    }
}

/// A how-to step as sent by clients. Any `orderNo` sent is ignored;
/// steps are numbered by their position in the list.
#[derive(Debug, Clone, Deserialize)]
pub struct NewStep {
    #[serde(default, rename = "orderNo", alias = "order")]
    pub order: Option<u32>,
    pub title: String,
    pub description: String,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewRecipe {
    pub title: String,
    #[serde(default)]
    pub ingredients: Vec<Ingredient>,
    #[serde(default, rename = "howTo", alias = "steps")]
    pub steps: Vec<NewStep>,
    pub servings: i64,
    pub meal: MealKind,
    pub diet: Diet,
    #[serde(default)]
    pub shopping_list: Option<Vec<ShoppingItem>>,
    #[serde(default)]
    pub picture: Option<String>,
}

impl NewRecipe {
    pub fn validate(&self) -> Result<()> {
        require_text("title", &self.title)?;

        if self.servings < 1 {
            return Err(AppError::validation("Servings must be a positive integer."));
        }
        if u32::try_from(self.servings).is_err() {
            return Err(AppError::validation("Servings is too large."));
        }

        if self.ingredients.is_empty() {
            return Err(AppError::validation("At least one ingredient is required."));
        }
        for (idx, ing) in self.ingredients.iter().enumerate() {
            if ing.name.trim().is_empty() || ing.quantity.trim().is_empty() || ing.unit.trim().is_empty() {
                return Err(AppError::validation(format!(
                    "Ingredient {} needs a name, quantity and unit.",
                    idx + 1
                )));
            }
        }

        if self.steps.is_empty() {
            return Err(AppError::validation("At least one how-to step is required."));
        }
        for (idx, step) in self.steps.iter().enumerate() {
            if step.title.trim().is_empty() || step.description.trim().is_empty() {
                return Err(AppError::validation(format!(
                    "Step {} needs a title and a description.",
                    idx + 1
                )));
            }
        }

        for item in self.shopping_list.iter().flatten() {
            require_text("shoppingList.product", &item.product)?;
            if item.quantity < 1 {
                return Err(AppError::validation(format!(
                    "Shopping item '{}' needs a quantity of at least 1.",
                    item.product
                )));
            }
            if let Some(link) = &item.link {
                require_url("shoppingList.link", link)?;
            }
        }

        if let Some(picture) = &self.picture {
            require_url("picture", picture)?;
        }
        Ok(())
    }

    /// Builds the stored record. Call after `validate`.
    pub fn into_recipe(self, id: String, owner_id: String) -> Recipe {
        let steps = self
            .steps
            .into_iter()
            .zip(1u32..)
            .map(|(step, order)| Step {
                order,
                title: step.title,
                description: step.description,
            })
            .collect();

        Recipe {
            id,
            owner_id,
            title: self.title.trim().to_string(),
            ingredients: self.ingredients,
            steps,
            servings: u32::try_from(self.servings).unwrap_or(u32::MAX),
            meal: self.meal,
            diet: self.diet,
            shopping_list: self.shopping_list,
            picture: self.picture,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct NewRating {
    pub stars: i64,
    #[serde(default)]
    pub note: Option<String>,
    #[serde(default)]
    pub picture: Option<String>,
}

impl NewRating {
    pub fn validate(&self) -> Result<()> {
        if !(MIN_STARS..=MAX_STARS).contains(&self.stars) {
            return Err(AppError::validation(format!(
                "Stars must be between {MIN_STARS} and {MAX_STARS}."
            )));
        }
        if let Some(note) = &self.note {
            if note.chars().count() > MAX_NOTE_CHARS {
                return Err(AppError::validation(format!(
                    "Note must be at most {MAX_NOTE_CHARS} characters."
                )));
            }
        }
        if let Some(picture) = &self.picture {
            require_url("picture", picture)?;
        }
        Ok(())
    }

    pub fn into_rating(self, id: String, rater_id: String, recipe_id: String) -> Rating {
        Rating {
            id,
            rater_id,
            recipe_id,
            // range checked in validate
            stars: self.stars.clamp(MIN_STARS, MAX_STARS) as u8,
            note: self.note,
            picture: self.picture,
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct NewMeal {
    #[serde(default)]
    pub pictures: Vec<String>,
}

impl NewMeal {
    pub fn validate(&self) -> Result<()> {
        self.pictures
            .iter()
            .try_for_each(|p| require_url("pictures", p))
    }
}

fn require_text(field: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(AppError::validation(format!("{field} is required.")));
    }
    Ok(())
}

fn require_url(field: &str, value: &str) -> Result<()> {
    let rest = value
        .strip_prefix("https://")
        .or_else(|| value.strip_prefix("http://"));
    match rest {
        Some(rest) if !rest.is_empty() && !rest.chars().any(char::is_whitespace) => Ok(()),
        _ => Err(AppError::validation(format!(
            "{field} must be an http(s) URL."
        ))),
    }
}

fn is_reasonable_email(email: &str) -> bool {
    if email.len() < 3 || email.len() > 254 {
        return false;
    }
    let mut parts = email.split('@');
    let local = parts.next().unwrap_or_default();
    let domain = parts.next().unwrap_or_default();
    parts.next().is_none()
        && !local.is_empty()
        && domain.contains('.')
        && !domain.starts_with('.')
        && !domain.ends_with('.')
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn recipe_body() -> serde_json::Value {
        json!({
            "title": "  Pancakes ",
            "servings": 2,
            "meal": "Breakfast",
            "diet": "Vegetarian",
            "ingredients": [{ "name": "Flour", "number": "200", "unit": "g" }],
            "howTo": [
                { "orderNo": 7, "title": "Mix", "description": "Mix it" },
                { "orderNo": 3, "title": "Fry", "description": "Fry it" }
            ]
        })
    }

    fn cook(email: &str) -> NewCook {
        NewCook {
            name: "Doe".into(),
            given_name: "Jane".into(),
            email: email.into(),
        }
    }

    #[test]
    fn cook_with_blank_email_is_rejected() {
        let err = cook("   ").validate().unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));
        assert!(cook("jane@example.com").validate().is_ok());
        assert!(cook("jane.example.com").validate().is_err());
    }

    #[test]
    fn recipe_steps_are_renumbered_in_input_order() {
        let new: NewRecipe = serde_json::from_value(recipe_body()).unwrap();
        new.validate().unwrap();
        let recipe = new.into_recipe("r1".into(), "a1".into());

        assert_eq!(recipe.title, "Pancakes");
        let orders: Vec<_> = recipe.steps.iter().map(|s| (s.order, s.title.as_str())).collect();
        assert_eq!(orders, vec![(1, "Mix"), (2, "Fry")]);
    }

    #[test]
    fn recipe_shape_checks() {
        let mut body = recipe_body();
        body["servings"] = json!(0);
        let new: NewRecipe = serde_json::from_value(body).unwrap();
        assert!(new.validate().is_err());

        let mut body = recipe_body();
        body["ingredients"] = json!([]);
        let new: NewRecipe = serde_json::from_value(body).unwrap();
        assert_eq!(
            new.validate().unwrap_err(),
            AppError::validation("At least one ingredient is required.")
        );

        let mut body = recipe_body();
        body.as_object_mut().unwrap().remove("howTo");
        let new: NewRecipe = serde_json::from_value(body).unwrap();
        assert!(new.validate().is_err());

        let mut body = recipe_body();
        body["picture"] = json!("not a url");
        let new: NewRecipe = serde_json::from_value(body).unwrap();
        assert!(new.validate().is_err());
    }

    #[test]
    fn shopping_list_items_are_checked() {
        let mut body = recipe_body();
        body["shoppingList"] = json!([{ "product": "Flour", "number": 0 }]);
        let new: NewRecipe = serde_json::from_value(body).unwrap();
        assert!(new.validate().is_err());

        let mut body = recipe_body();
        body["shoppingList"] = json!([{ "product": "Flour", "number": 1, "link": "https://shop.example/flour" }]);
        let new: NewRecipe = serde_json::from_value(body).unwrap();
        assert!(new.validate().is_ok());
    }

    #[test]
    fn stars_must_be_one_to_five() {
        for stars in [0, 6, -1] {
            let r = NewRating { stars, note: None, picture: None };
            assert!(matches!(r.validate(), Err(AppError::Validation(_))), "stars={stars}");
        }
        for stars in 1..=5 {
            let r = NewRating { stars, note: None, picture: None };
            assert!(r.validate().is_ok(), "stars={stars}");
        }
    }

    #[test]
    fn note_limit_counts_characters_not_bytes() {
        let ok = NewRating { stars: 3, note: Some("é".repeat(MAX_NOTE_CHARS)), picture: None };
        assert!(ok.validate().is_ok());

        let too_long = NewRating { stars: 3, note: Some("a".repeat(MAX_NOTE_CHARS + 1)), picture: None };
        assert!(too_long.validate().is_err());
    }

    #[test]
    fn meal_pictures_must_be_urls() {
        assert!(NewMeal::default().validate().is_ok());
        let bad = NewMeal { pictures: vec!["https://img.example/a.jpg".into(), "ftp://x".into()] };
        assert!(bad.validate().is_err());
    }
}
