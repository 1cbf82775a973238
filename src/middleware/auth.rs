//! JWT authentication middleware
//!
//! Extracts and validates the bearer token, loads the account behind it and
//! injects it into the request extensions for downstream handlers.

use axum::{
    extract::{Request, State},
    http::header,
    middleware::Next,
    response::Response,
    Extension,
};
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};

use crate::config::environment::EnvironmentConfig;
use crate::models::account::{Account, AccountStatus, Role};
use crate::repositories::account_repository::AccountRepository;
use crate::state::AppState;
use crate::utils::errors::AppError;

/// JWT claims
#[derive(Debug, Serialize, Deserialize)]
pub struct Claims {
    /// Account id
    pub sub: String,
    pub username: String,
    pub role: String,
    pub exp: usize,
    pub iat: usize,
}

/// Authenticated account injected into requests
#[derive(Debug, Clone)]
pub struct AuthenticatedAccount {
    pub id: i64,
    pub username: String,
    pub role: Role,
}

/// JWT authentication middleware
pub async fn auth_middleware(
    State(state): State<AppState>,
    mut request: Request,
    next: Next,
) -> Result<Response, AppError> {
    let token = request
        .headers()
        .get(header::AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.strip_prefix("Bearer "))
        .ok_or_else(|| AppError::Unauthorized("Authorization token required".to_string()))?;

    let token_data = decode::<Claims>(
        token,
        &DecodingKey::from_secret(state.config.jwt_secret.as_ref()),
        &Validation::default(),
    )
    .map_err(|_| AppError::Unauthorized("Invalid or expired token".to_string()))?;

    let claims = token_data.claims;
    let account_id: i64 = claims
        .sub
        .parse()
        .map_err(|_| AppError::Unauthorized("Invalid account id in token".to_string()))?;

    let account = AccountRepository::new(state.pool.clone())
        .find_by_id(account_id)
        .await?
        .ok_or_else(|| AppError::Unauthorized("Account no longer exists".to_string()))?;

    if AccountStatus::parse(&account.status) != Some(AccountStatus::Active) {
        return Err(AppError::Unauthorized("Account is locked".to_string()));
    }

    let role = Role::parse(&account.role)
        .ok_or_else(|| AppError::Unauthorized("Account has an unknown role".to_string()))?;

    let authenticated = AuthenticatedAccount {
        id: account.id,
        username: account.username,
        role,
    };
    request.extensions_mut().insert(authenticated);

    Ok(next.run(request).await)
}

/// Middleware requiring admin privileges
pub async fn admin_only_middleware(
    Extension(account): Extension<AuthenticatedAccount>,
    request: Request,
    next: Next,
) -> Result<Response, AppError> {
    if account.role != Role::Admin {
        return Err(AppError::Forbidden(
            "Administrator privileges required".to_string(),
        ));
    }

    Ok(next.run(request).await)
}

/// Sign a JWT for an account
pub fn generate_token(account: &Account, config: &EnvironmentConfig) -> Result<String, AppError> {
    let now = chrono::Utc::now();
    let expires_at = now + chrono::Duration::seconds(config.jwt_expiration as i64);

    let claims = Claims {
        sub: account.id.to_string(),
        username: account.username.clone(),
        role: account.role.clone(),
        exp: expires_at.timestamp() as usize,
        iat: now.timestamp() as usize,
    };

    encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(config.jwt_secret.as_ref()),
    )
    .map_err(|e| AppError::Internal(format!("Error signing token: {}", e)))
}
