//! Rating submission and retrieval.

use cw_core::error::{AppError, Result};
use cw_core::models::{Cook, Rating};
use cw_core::payloads::NewRating;
use tracing::{debug, info};

use crate::Kitchen;

impl Kitchen {
    /// Rates `recipe_id` on behalf of `rater`.
    ///
    /// Owners can never rate their own recipe; that check runs before the
    /// payload's shape is looked at.
    pub async fn rate_recipe(&self, rater: &Cook, recipe_id: &str, new: NewRating) -> Result<Rating> {
        let recipe = self.get_recipe(recipe_id).await?;

        if recipe.owner_id == rater.id {
            debug!(recipe_id, rater_id = %rater.id, "self-rating refused");
            return Err(AppError::Forbidden("You cannot rate your own recipe.".into()));
        }

        new.validate()?;

        let rating = new.into_rating(self.ids.next_id(), rater.id.clone(), recipe.id);
        self.repo.insert_rating(rating.clone()).await?;

        info!(rating_id = %rating.id, recipe_id, stars = rating.stars, "recipe rated");
        Ok(rating)
    }

    pub async fn list_ratings(&self, recipe_id: &str) -> Result<Vec<Rating>> {
        self.ensure_recipe(recipe_id).await?;
        self.repo.list_ratings_for_recipe(recipe_id).await
    }

    /// A rating is only visible under the recipe it belongs to.
    pub async fn get_rating(&self, recipe_id: &str, rating_id: &str) -> Result<Rating> {
        self.ensure_recipe(recipe_id).await?;

        match self.repo.get_rating(rating_id).await? {
            Some(rating) if rating.recipe_id == recipe_id => Ok(rating),
            _ => Err(AppError::not_found("Rating", rating_id)),
        }
    }

    async fn ensure_recipe(&self, recipe_id: &str) -> Result<()> {
        if self.repo.recipe_exists(recipe_id).await? {
            Ok(())
        } else {
            Err(AppError::not_found("Recipe", recipe_id))
        }
    }
}
