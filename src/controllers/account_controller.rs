//! Account controller
//!
//! Admin-only account management. The main admin account (id 1) cannot be
//! deleted.

use bcrypt::{hash, DEFAULT_COST};
use sqlx::SqlitePool;
use validator::Validate;

use crate::models::account::{
    AccountResponse, AccountStatus, CreateAccountRequest, Role, UpdateAccountRequest,
};
use crate::repositories::account_repository::AccountRepository;
use crate::utils::errors::{conflict_error, not_found_error, AppError, AppResult};

/// Id of the protected main admin account
const MAIN_ADMIN_ID: i64 = 1;

pub struct AccountController {
    repository: AccountRepository,
}

impl AccountController {
    pub fn new(pool: SqlitePool) -> Self {
        Self {
            repository: AccountRepository::new(pool),
        }
    }

    pub async fn list(&self) -> AppResult<Vec<AccountResponse>> {
        let accounts = self.repository.list().await?;
        Ok(accounts.into_iter().map(Into::into).collect())
    }

    pub async fn create(&self, request: CreateAccountRequest) -> AppResult<AccountResponse> {
        request.validate()?;

        let role = Role::parse(&request.role).ok_or_else(|| {
            AppError::BadRequest(format!(
                "Unknown role '{}', expected admin or staff",
                request.role
            ))
        })?;

        let username = request.username.trim().to_string();
        if self.repository.username_exists(&username).await? {
            return Err(conflict_error("Account", "username", &username));
        }

        let password_hash =
            hash(&request.password, DEFAULT_COST).map_err(|e| AppError::Hash(e.to_string()))?;

        let account = self
            .repository
            .create(
                request.display_name.trim(),
                &username,
                &password_hash,
                role.as_str(),
            )
            .await?;
        Ok(account.into())
    }

    pub async fn update(
        &self,
        id: i64,
        request: UpdateAccountRequest,
    ) -> AppResult<AccountResponse> {
        request.validate()?;

        let role = match &request.role {
            Some(value) => Some(
                Role::parse(value)
                    .ok_or_else(|| {
                        AppError::BadRequest(format!(
                            "Unknown role '{}', expected admin or staff",
                            value
                        ))
                    })?
                    .as_str()
                    .to_string(),
            ),
            None => None,
        };

        let status = match &request.status {
            Some(value) => Some(
                AccountStatus::parse(value)
                    .ok_or_else(|| {
                        AppError::BadRequest(format!(
                            "Unknown status '{}', expected active or locked",
                            value
                        ))
                    })?
                    .as_str()
                    .to_string(),
            ),
            None => None,
        };

        let password_hash = match &request.password {
            Some(password) => {
                Some(hash(password, DEFAULT_COST).map_err(|e| AppError::Hash(e.to_string()))?)
            }
            None => None,
        };

        let account = self
            .repository
            .update(id, request.display_name, password_hash, role, status)
            .await?;
        Ok(account.into())
    }

    pub async fn delete(&self, id: i64) -> AppResult<()> {
        if id == MAIN_ADMIN_ID {
            return Err(AppError::Forbidden(
                "The main admin account cannot be deleted".to_string(),
            ));
        }
        if self.repository.find_by_id(id).await?.is_none() {
            return Err(not_found_error("Account", id));
        }
        self.repository.delete(id).await
    }
}
