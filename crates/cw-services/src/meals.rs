//! Cooked-meal photo posts.

use cw_core::error::{AppError, Result};
use cw_core::models::{Cook, Meal};
use cw_core::payloads::NewMeal;
use tracing::info;

use crate::Kitchen;

impl Kitchen {
    pub async fn post_meal(&self, cook: &Cook, new: NewMeal) -> Result<Meal> {
        new.validate()?;

        let meal = Meal {
            id: self.ids.next_id(),
            cook_id: cook.id.clone(),
            pictures: new.pictures,
        };
        self.repo.insert_meal(meal.clone()).await?;

        info!(meal_id = %meal.id, cook_id = %cook.id, pictures = meal.pictures.len(), "meal posted");
        Ok(meal)
    }

    pub async fn get_meal(&self, id: &str) -> Result<Meal> {
        self.repo
            .get_meal(id)
            .await?
            .ok_or_else(|| AppError::not_found("Meal", id))
    }

    pub async fn list_meals(&self) -> Result<Vec<Meal>> {
        self.repo.list_meals().await
    }
}
