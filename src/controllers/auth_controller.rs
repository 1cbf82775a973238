//! Authentication controller

use sqlx::SqlitePool;
use validator::Validate;

use crate::config::environment::EnvironmentConfig;
use crate::middleware::auth::generate_token;
use crate::models::account::{AccountStatus, LoginRequest, LoginResponse};
use crate::repositories::account_repository::AccountRepository;
use crate::utils::errors::{AppError, AppResult};

pub struct AuthController {
    repository: AccountRepository,
    config: EnvironmentConfig,
}

impl AuthController {
    pub fn new(pool: SqlitePool, config: EnvironmentConfig) -> Self {
        Self {
            repository: AccountRepository::new(pool),
            config,
        }
    }

    pub async fn login(&self, request: LoginRequest) -> AppResult<LoginResponse> {
        request.validate()?;

        let account = self
            .repository
            .find_by_username(request.username.trim())
            .await?
            .ok_or_else(|| AppError::Unauthorized("Invalid username or password".to_string()))?;

        let password_ok = bcrypt::verify(&request.password, &account.password_hash)
            .map_err(|e| AppError::Hash(e.to_string()))?;
        if !password_ok {
            return Err(AppError::Unauthorized(
                "Invalid username or password".to_string(),
            ));
        }

        if AccountStatus::parse(&account.status) != Some(AccountStatus::Active) {
            return Err(AppError::Forbidden("Account is locked".to_string()));
        }

        let token = generate_token(&account, &self.config)?;
        Ok(LoginResponse {
            token,
            account: account.into(),
        })
    }
}
