//! Cook registration and identity resolution.

use cw_core::error::{AppError, Result};
use cw_core::models::Cook;
use cw_core::payloads::NewCook;
use tracing::{debug, info};

use crate::Kitchen;

impl Kitchen {
    /// Registers a new cook under a freshly generated id.
    pub async fn register(&self, new: NewCook) -> Result<Cook> {
        new.validate()?;

        let cook = Cook {
            id: self.ids.next_id(),
            name: new.name.trim().to_string(),
            given_name: new.given_name.trim().to_string(),
            email: new.email.trim().to_string(),
        };
        self.repo.insert_cook(cook.clone()).await?;

        info!(cook_id = %cook.id, "cook registered");
        Ok(cook)
    }

    /// Maps a caller-supplied `X-Cook-Id` to a registered cook.
    ///
    /// Both a missing header and an unknown id are `Unauthenticated`.
    pub async fn resolve_cook(&self, cook_id: Option<&str>) -> Result<Cook> {
        let cook_id = match cook_id.map(str::trim) {
            Some(id) if !id.is_empty() => id,
            _ => {
                return Err(AppError::Unauthenticated(
                    "X-Cook-Id header is required.".into(),
                ))
            }
        };

        match self.repo.get_cook(cook_id).await? {
            Some(cook) => Ok(cook),
            None => {
                debug!(cook_id, "unknown cook id presented");
                Err(AppError::Unauthenticated(format!(
                    "Cook '{cook_id}' not found. Register first."
                )))
            }
        }
    }

    pub async fn get_cook(&self, id: &str) -> Result<Cook> {
        self.repo
            .get_cook(id)
            .await?
            .ok_or_else(|| AppError::not_found("Cook", id))
    }

    pub async fn list_cooks(&self) -> Result<Vec<Cook>> {
        self.repo.list_cooks().await
    }
}
