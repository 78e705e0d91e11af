//! # cw-services
//!
//! The operations behind every endpoint: registration, recipe sharing,
//! rating and meal posting. Everything goes through [`Kitchen`], which owns
//! the storage port and the id generator and is cheap to clone into
//! request handlers.

mod cooks;
mod meals;
mod ratings;
mod recipes;

use std::fmt;
use std::sync::Arc;

use cw_core::traits::{IdGenerator, KitchenRepo};

#[derive(Clone)]
pub struct Kitchen {
    repo: Arc<dyn KitchenRepo>,
    ids: Arc<dyn IdGenerator>,
}

impl Kitchen {
    pub fn new(repo: Arc<dyn KitchenRepo>, ids: Arc<dyn IdGenerator>) -> Self {
        Self { repo, ids }
    }
}

impl fmt::Debug for Kitchen {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Kitchen").finish_non_exhaustive()
    }
}

#[cfg(test)]
pub(crate) mod testing {
    use super::*;
    use cw_core::models::Cook;
    use cw_core::payloads::{NewCook, NewRecipe};
    use cw_store_memory::{MemoryKitchenRepo, SequentialIds};
    use serde_json::json;

    pub fn kitchen() -> Kitchen {
        Kitchen::new(
            Arc::new(MemoryKitchenRepo::new()),
            Arc::new(SequentialIds::default()),
        )
    }

    pub async fn cook(kitchen: &Kitchen, email: &str) -> Cook {
        kitchen
            .register(NewCook {
                name: "Cook".into(),
                given_name: email.split('@').next().unwrap_or_default().into(),
                email: email.into(),
            })
            .await
            .unwrap()
    }

    pub fn recipe(title: &str) -> NewRecipe {
        serde_json::from_value(json!({
            "title": title,
            "servings": 2,
            "meal": "Breakfast",
            "diet": "Normal",
            "ingredients": [{ "name": "Flour", "number": "200", "unit": "g" }],
            "howTo": [{ "title": "Mix", "description": "Mix everything" }]
        }))
        .unwrap()
    }
}
