//! Recipe sharing and retrieval.

use cw_core::error::{AppError, Result};
use cw_core::models::{Cook, Recipe};
use cw_core::payloads::NewRecipe;
use tracing::{info, warn};

use crate::Kitchen;

impl Kitchen {
    /// Shares a recipe owned by `owner`. Titles are unique ignoring case.
    pub async fn share_recipe(&self, owner: &Cook, new: NewRecipe) -> Result<Recipe> {
        new.validate()?;

        let recipe = new.into_recipe(self.ids.next_id(), owner.id.clone());
        if let Err(err) = self.repo.insert_recipe(recipe.clone()).await {
            if matches!(err, AppError::Conflict(_)) {
                warn!(owner_id = %owner.id, title = %recipe.title, "duplicate recipe title");
            }
            return Err(err);
        }

        info!(recipe_id = %recipe.id, owner_id = %owner.id, "recipe shared");
        Ok(recipe)
    }

    pub async fn get_recipe(&self, id: &str) -> Result<Recipe> {
        self.repo
            .get_recipe(id)
            .await?
            .ok_or_else(|| AppError::not_found("Recipe", id))
    }

    pub async fn list_recipes(&self) -> Result<Vec<Recipe>> {
        self.repo.list_recipes().await
    }
}
