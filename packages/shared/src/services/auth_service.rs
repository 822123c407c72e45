use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use std::sync::Arc;

use crate::models::auth::responses::{LoginResponse, TokenClaims, UserSummary};
use crate::models::user::User;
use crate::services::errors::auth_service_errors::AuthServiceError;
use crate::services::errors::user_service_errors::UserServiceError;
use crate::services::password;
use crate::services::user_service::UserService;

/// Session tokens are stateless: an HS256 signature over the claims and the
/// server secret is the whole session, nothing is persisted. A token stays
/// valid for its full lifetime even if the password changes afterwards.
const TOKEN_LIFETIME_DAYS: i64 = 7;

pub struct AuthService {
    user_service: Arc<UserService>,
    jwt_secret: String,
}

impl AuthService {
    pub fn new(user_service: Arc<UserService>) -> Self {
        let jwt_secret =
            std::env::var("JWT_SECRET").expect("JWT_SECRET environment variable must be set");
        AuthService {
            user_service,
            jwt_secret,
        }
    }

    pub fn with_jwt_secret(user_service: Arc<UserService>, jwt_secret: String) -> Self {
        AuthService {
            user_service,
            jwt_secret,
        }
    }

    pub async fn authenticate_user(
        &self,
        email: &str,
        password: &str,
    ) -> Result<LoginResponse, AuthServiceError> {
        if email.is_empty() || password.is_empty() {
            return Err(AuthServiceError::ValidationError(
                "Email and password are required".to_string(),
            ));
        }

        match self.user_service.get_user_by_email(email).await {
            Ok(user) => {
                if password::verify_password(password, &user.password) {
                    self.generate_token(&user)
                } else {
                    Err(AuthServiceError::InvalidCredentials)
                }
            }
            // An unknown email reads exactly like a wrong password.
            Err(UserServiceError::UserNotFound) => Err(AuthServiceError::InvalidCredentials),
            Err(err) => Err(AuthServiceError::UserServiceError(err)),
        }
    }

    pub fn generate_token(&self, user: &User) -> Result<LoginResponse, AuthServiceError> {
        let now = Utc::now();
        let exp = (now + Duration::days(TOKEN_LIFETIME_DAYS)).timestamp() as usize;
        let iat = now.timestamp() as usize;

        let claims = TokenClaims {
            sub: user.email.clone(),
            name: user.name.clone(),
            exp,
            iat,
        };

        let token = encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret(self.jwt_secret.as_ref()),
        )
        .map_err(|e| AuthServiceError::JwtError(e.to_string()))?;

        Ok(LoginResponse {
            message: "Login successful".to_string(),
            token,
            user: UserSummary {
                email: user.email.clone(),
                name: user.name.clone(),
            },
        })
    }

    /// Signature, structure and expiry checks only; storage is not consulted.
    pub fn verify_token(&self, token: &str) -> Result<TokenClaims, AuthServiceError> {
        let decoding_key = DecodingKey::from_secret(self.jwt_secret.as_ref());
        let validation = Validation::default();

        match decode::<TokenClaims>(token, &decoding_key, &validation) {
            Ok(token_data) => {
                let now = Utc::now().timestamp() as usize;
                if token_data.claims.exp < now {
                    Err(AuthServiceError::ExpiredToken)
                } else {
                    Ok(token_data.claims)
                }
            }
            Err(err) => match err.kind() {
                jsonwebtoken::errors::ErrorKind::ExpiredSignature => {
                    Err(AuthServiceError::ExpiredToken)
                }
                _ => Err(AuthServiceError::InvalidToken),
            },
        }
    }

    /// The gate half of authentication: verify the token, then resolve its
    /// subject to the current account. A valid token whose account is gone
    /// fails as invalid rather than producing a fabricated identity.
    pub async fn resolve_token(&self, token: &str) -> Result<User, AuthServiceError> {
        let claims = self.verify_token(token)?;
        match self.user_service.get_user_by_email(&claims.sub).await {
            Ok(user) => Ok(user),
            Err(UserServiceError::UserNotFound) => Err(AuthServiceError::InvalidToken),
            Err(err) => Err(AuthServiceError::UserServiceError(err)),
        }
    }
}
