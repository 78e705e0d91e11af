//! # Core Traits (Ports)
//!
//! Any storage plugin must implement these traits to be used by the binary.

use async_trait::async_trait;

use crate::error::Result;
use crate::models::{Cook, Meal, Rating, Recipe};

/// Persistence contract for cooks, recipes, ratings and meals.
///
/// Lists come back in insertion order. Uniqueness rules are checked by the
/// repo itself so that the check and the insert cannot interleave with
/// another writer.
#[cfg_attr(any(test, feature = "testing"), mockall::automock)]
#[async_trait]
pub trait KitchenRepo: Send + Sync {
    // Cook Operations
    /// Fails with `Conflict` if a cook with the same email is registered.
    async fn insert_cook(&self, cook: Cook) -> Result<()>;
    async fn get_cook(&self, id: &str) -> Result<Option<Cook>>;
    async fn list_cooks(&self) -> Result<Vec<Cook>>;

    // Recipe Operations
    /// Fails with `Conflict` if a recipe with the same title (ignoring case) exists.
    async fn insert_recipe(&self, recipe: Recipe) -> Result<()>;
    async fn get_recipe(&self, id: &str) -> Result<Option<Recipe>>;
    async fn list_recipes(&self) -> Result<Vec<Recipe>>;
    async fn recipe_exists(&self, id: &str) -> Result<bool>;

    // Rating Operations
    async fn insert_rating(&self, rating: Rating) -> Result<()>;
    async fn get_rating(&self, id: &str) -> Result<Option<Rating>>;
    async fn list_ratings_for_recipe(&self, recipe_id: &str) -> Result<Vec<Rating>>;

    // Meal Operations
    async fn insert_meal(&self, meal: Meal) -> Result<()>;
    async fn get_meal(&self, id: &str) -> Result<Option<Meal>>;
    async fn list_meals(&self) -> Result<Vec<Meal>>;
}

/// Produces identifiers that are unique for the lifetime of the process.
#[cfg_attr(any(test, feature = "testing"), mockall::automock)]
pub trait IdGenerator: Send + Sync {
    fn next_id(&self) -> String;
}
