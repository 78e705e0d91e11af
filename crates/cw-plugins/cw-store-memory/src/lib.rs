//! cookwithus/crates/cw-plugins/cw-store-memory/src/lib.rs
//! Process-lifetime, in-memory implementation of `KitchenRepo`.
//! Nothing is persisted; restarting the process starts from an empty kitchen.

mod collection;
mod ids;

use async_trait::async_trait;
use cw_core::error::{AppError, Result};
use cw_core::models::{Cook, Meal, Rating, Recipe};
use cw_core::traits::KitchenRepo;
use tokio::sync::RwLock;
use tracing::{debug, warn};

pub use collection::Collection;
pub use ids::{SequentialIds, UuidIds};

#[derive(Debug, Default)]
struct Tables {
    cooks: Collection<Cook>,
    recipes: Collection<Recipe>,
    ratings: Collection<Rating>,
    meals: Collection<Meal>,
}

/// All collections live behind one lock. Uniqueness checks run under the
/// same write guard as the insert they protect.
#[derive(Debug, Default)]
pub struct MemoryKitchenRepo {
    tables: RwLock<Tables>,
}

impl MemoryKitchenRepo {
    pub fn new() -> Self {
        Self::default()
    }
}

fn email_key(email: &str) -> String {
    email.trim().to_ascii_lowercase()
}

fn title_key(title: &str) -> String {
    title.trim().to_lowercase()
}

#[async_trait]
impl KitchenRepo for MemoryKitchenRepo {
    async fn insert_cook(&self, cook: Cook) -> Result<()> {
        let mut tables = self.tables.write().await;

        let key = email_key(&cook.email);
        if tables.cooks.list().any(|c| email_key(&c.email) == key) {
            warn!(cook_id = %cook.id, "email already registered");
            return Err(AppError::Conflict(format!(
                "A cook with email '{}' is already registered.",
                cook.email.trim()
            )));
        }

        tables.cooks.put(cook.id.clone(), cook);
        debug!(cooks = tables.cooks.len(), "cook stored");
        Ok(())
    }

    async fn get_cook(&self, id: &str) -> Result<Option<Cook>> {
        Ok(self.tables.read().await.cooks.get(id).cloned())
    }

    async fn list_cooks(&self) -> Result<Vec<Cook>> {
        Ok(self.tables.read().await.cooks.list().cloned().collect())
    }

    async fn insert_recipe(&self, recipe: Recipe) -> Result<()> {
        let mut tables = self.tables.write().await;

        let key = title_key(&recipe.title);
        if tables.recipes.list().any(|r| title_key(&r.title) == key) {
            warn!(recipe_id = %recipe.id, title = %recipe.title, "recipe title taken");
            return Err(AppError::Conflict(format!(
                "A recipe titled '{}' already exists.",
                recipe.title
            )));
        }

        tables.recipes.put(recipe.id.clone(), recipe);
        debug!(recipes = tables.recipes.len(), "recipe stored");
        Ok(())
    }

    async fn get_recipe(&self, id: &str) -> Result<Option<Recipe>> {
        Ok(self.tables.read().await.recipes.get(id).cloned())
    }

    async fn list_recipes(&self) -> Result<Vec<Recipe>> {
        Ok(self.tables.read().await.recipes.list().cloned().collect())
    }

    async fn recipe_exists(&self, id: &str) -> Result<bool> {
        Ok(self.tables.read().await.recipes.exists(id))
    }

    async fn insert_rating(&self, rating: Rating) -> Result<()> {
        let mut tables = self.tables.write().await;
        tables.ratings.put(rating.id.clone(), rating);
        debug!(ratings = tables.ratings.len(), "rating stored");
        Ok(())
    }

    async fn get_rating(&self, id: &str) -> Result<Option<Rating>> {
        Ok(self.tables.read().await.ratings.get(id).cloned())
    }

    async fn list_ratings_for_recipe(&self, recipe_id: &str) -> Result<Vec<Rating>> {
        let tables = self.tables.read().await;
        Ok(tables
            .ratings
            .list()
            .filter(|r| r.recipe_id == recipe_id)
            .cloned()
            .collect())
    }

    async fn insert_meal(&self, meal: Meal) -> Result<()> {
        let mut tables = self.tables.write().await;
        tables.meals.put(meal.id.clone(), meal);
        debug!(meals = tables.meals.len(), "meal stored");
        Ok(())
    }

    async fn get_meal(&self, id: &str) -> Result<Option<Meal>> {
        Ok(self.tables.read().await.meals.get(id).cloned())
    }

    async fn list_meals(&self) -> Result<Vec<Meal>> {
        Ok(self.tables.read().await.meals.list().cloned().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cw_core::models::{Diet, Ingredient, MealKind, Step};
    use std::sync::Arc;

    fn cook(id: &str, email: &str) -> Cook {
        Cook {
            id: id.into(),
            name: "Doe".into(),
            given_name: "Jo".into(),
            email: email.into(),
        }
    }

    fn recipe(id: &str, title: &str) -> Recipe {
        Recipe {
            id: id.into(),
            owner_id: "a1".into(),
            title: title.into(),
            ingredients: vec![Ingredient {
                name: "Flour".into(),
                quantity: "1".into(),
                unit: "cup".into(),
            }],
            steps: vec![Step {
                order: 1,
                title: "Mix".into(),
                description: "Mix".into(),
            }],
            servings: 1,
            meal: MealKind::Lunch,
            diet: Diet::Normal,
            shopping_list: None,
            picture: None,
        }
    }

    fn rating(id: &str, recipe_id: &str) -> Rating {
        Rating {
            id: id.into(),
            rater_id: "b1".into(),
            recipe_id: recipe_id.into(),
            stars: 4,
            note: None,
            picture: None,
        }
    }

    #[tokio::test]
    async fn duplicate_email_is_a_conflict() {
        let repo = MemoryKitchenRepo::new();
        repo.insert_cook(cook("1", "jo@example.com")).await.unwrap();

        let err = repo.insert_cook(cook("2", " JO@example.com")).await.unwrap_err();
        assert!(matches!(err, AppError::Conflict(_)));
        assert_eq!(repo.list_cooks().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn duplicate_title_ignores_case() {
        let repo = MemoryKitchenRepo::new();
        repo.insert_recipe(recipe("r1", "Pancakes")).await.unwrap();

        let err = repo.insert_recipe(recipe("r2", "pANCAKES")).await.unwrap_err();
        assert!(matches!(err, AppError::Conflict(_)));
        assert!(!repo.recipe_exists("r2").await.unwrap());
    }

    #[tokio::test]
    async fn concurrent_same_title_admits_exactly_one() {
        let repo = Arc::new(MemoryKitchenRepo::new());
        let tasks: Vec<_> = (0..16)
            .map(|i| {
                let repo = Arc::clone(&repo);
                tokio::spawn(async move { repo.insert_recipe(recipe(&format!("r{i}"), "Soup")).await })
            })
            .collect();

        let mut ok = 0;
        for t in tasks {
            if t.await.unwrap().is_ok() {
                ok += 1;
            }
        }
        assert_eq!(ok, 1);
        assert_eq!(repo.list_recipes().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn ratings_filter_by_recipe_in_order() {
        let repo = MemoryKitchenRepo::new();
        repo.insert_rating(rating("x1", "r1")).await.unwrap();
        repo.insert_rating(rating("y1", "r2")).await.unwrap();
        repo.insert_rating(rating("x2", "r1")).await.unwrap();

        let ids: Vec<_> = repo
            .list_ratings_for_recipe("r1")
            .await
            .unwrap()
            .into_iter()
            .map(|r| r.id)
            .collect();
        assert_eq!(ids, vec!["x1", "x2"]);
        assert!(repo.list_ratings_for_recipe("nope").await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn meals_round_trip() {
        let repo = MemoryKitchenRepo::new();
        let meal = Meal {
            id: "m1".into(),
            cook_id: "a1".into(),
            pictures: vec![],
        };
        repo.insert_meal(meal.clone()).await.unwrap();
        assert_eq!(repo.get_meal("m1").await.unwrap(), Some(meal));
        assert_eq!(repo.list_meals().await.unwrap().len(), 1);
    }
}
