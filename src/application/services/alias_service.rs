//! Alias creation, lookup and ownership-scoped management.

use std::sync::Arc;

use serde_json::json;
use tracing::{debug, error, info};
use validator::Validate;

use crate::application::dto::CreateAlias;
use crate::domain::entities::{Alias, NewAlias};
use crate::domain::repositories::{AliasRepository, StoreError};
use crate::error::AppError;
use crate::utils::id_generator::IdGenerator;
use crate::utils::link::validate_link;

/// Service for creating, resolving and deleting aliases.
///
/// Owns an injected [`IdGenerator`] for autogenerated ids; collisions with
/// existing rows are retried transparently, so callers never observe a
/// duplicate-key failure for an id they did not choose themselves.
pub struct AliasService<R: AliasRepository> {
    repository: Arc<R>,
    ids: IdGenerator,
}

impl<R: AliasRepository> AliasService<R> {
    /// Creates a new alias service.
    pub fn new(repository: Arc<R>, ids: IdGenerator) -> Self {
        Self { repository, ids }
    }

    /// Creates an alias for `owner_id`.
    ///
    /// # Id Selection
    ///
    /// - A supplied alias is used verbatim; if it already exists the call
    ///   fails with [`AppError::AliasTaken`].
    /// - Without a supplied alias, a random 8-character id is generated and
    ///   the insert retried for as long as it collides. The id space is
    ///   large enough that more than a handful of iterations is not a
    ///   realistic outcome, so the loop is unbounded.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if the link is not an absolute
    /// http(s) URL or the alias violates the ASCII/length rules,
    /// [`AppError::RelatedResourceNotFound`] if the owner does not exist,
    /// and [`AppError::Internal`] on storage failures.
    pub async fn create(&self, input: CreateAlias, owner_id: &str) -> Result<Alias, AppError> {
        input.validate()?;
        validate_link(&input.link).map_err(|e| {
            AppError::bad_request("Invalid link", json!({ "reason": e.to_string() }))
        })?;

        let autogenerated = input.alias.is_none();

        loop {
            let id = match &input.alias {
                Some(alias) => alias.clone(),
                None => self.ids.generate(),
            };

            let new_alias = NewAlias {
                id,
                link: input.link.clone(),
                owner_id: owner_id.to_string(),
            };

            match self.repository.create(new_alias).await {
                Ok(alias) => {
                    info!(alias = %alias.id, owner = %owner_id, "alias created");
                    return Ok(alias);
                }
                Err(StoreError::DuplicateKey) if autogenerated => {
                    debug!("generated alias id collided, retrying");
                }
                Err(StoreError::DuplicateKey) => {
                    return Err(AppError::alias_taken(
                        "Alias is already taken",
                        json!({ "alias": input.alias.as_deref() }),
                    ));
                }
                Err(StoreError::ForeignKeyViolation) => {
                    return Err(AppError::related_resource_not_found(
                        "Owner does not exist",
                        json!({ "ownerId": owner_id }),
                    ));
                }
                Err(e) => {
                    error!(error = %e, "failed to create alias");
                    return Err(AppError::internal("Failed to create alias", json!({})));
                }
            }
        }
    }

    /// Retrieves an alias by id.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] for an empty id and
    /// [`AppError::AliasNotFound`] when no alias matches.
    pub async fn by_id(&self, id: &str) -> Result<Alias, AppError> {
        if id.is_empty() {
            return Err(AppError::bad_request("id is required", json!({})));
        }

        match self.repository.by_id(id).await {
            Ok(Some(alias)) => Ok(alias),
            Ok(None) => Err(AppError::alias_not_found(
                "Alias not found",
                json!({ "id": id }),
            )),
            Err(e) => {
                error!(error = %e, "failed to get alias");
                Err(AppError::internal("Failed to get alias", json!({})))
            }
        }
    }

    /// Resolves an alias to its target link, counting the visit.
    ///
    /// The hit counter increment and the link fetch happen in one atomic
    /// store operation, so N concurrent calls add exactly N.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] for an empty id and
    /// [`AppError::AliasNotFound`] when no alias matches.
    pub async fn redirect_link(&self, id: &str) -> Result<String, AppError> {
        if id.is_empty() {
            return Err(AppError::bad_request("id is required", json!({})));
        }

        match self.repository.redirect_link(id).await {
            Ok(Some(link)) => Ok(link),
            Ok(None) => Err(AppError::alias_not_found(
                "Alias not found",
                json!({ "id": id }),
            )),
            Err(e) => {
                error!(error = %e, "failed to resolve alias");
                Err(AppError::internal("Failed to resolve alias", json!({})))
            }
        }
    }

    /// Lists aliases owned by `owner_id` with limit/offset pagination.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] for an empty owner id.
    pub async fn by_owner(
        &self,
        owner_id: &str,
        limit: i64,
        offset: i64,
    ) -> Result<Vec<Alias>, AppError> {
        if owner_id.is_empty() {
            return Err(AppError::bad_request("owner id is required", json!({})));
        }

        self.repository
            .by_owner(owner_id, limit, offset)
            .await
            .map_err(|e| {
                error!(error = %e, "failed to list aliases");
                AppError::internal("Failed to list aliases", json!({}))
            })
    }

    /// Deletes an alias owned by `owner_id`.
    ///
    /// Idempotent: a missing alias, or one owned by someone else, is left
    /// untouched and the call still succeeds.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if either id is empty.
    pub async fn delete(&self, id: &str, owner_id: &str) -> Result<(), AppError> {
        if id.is_empty() || owner_id.is_empty() {
            return Err(AppError::bad_request(
                "id and owner id are required",
                json!({}),
            ));
        }

        match self.repository.delete(id, owner_id).await {
            Ok(()) => {
                info!(alias = %id, owner = %owner_id, "alias deleted");
                Ok(())
            }
            Err(e) => {
                error!(error = %e, "failed to delete alias");
                Err(AppError::internal("Failed to delete alias", json!({})))
            }
        }
    }
}
