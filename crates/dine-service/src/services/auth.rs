//! Authentication service
//!
//! Handles registration, login, the current user and first-run admin seeding.

use dine_common::AppError;
use dine_core::{normalize_email, AuditAction, DomainError, Role, User};
use serde_json::json;
use tracing::{info, instrument, warn};
use validator::ValidateEmail;

use crate::dto::{LoginRequest, LoginResponse, LoginUserResponse, MeResponse, OkResponse, RegisterRequest, UserResponse};

use super::actor::Actor;
use super::audit::AuditTrail;
use super::context::ServiceContext;
use super::error::ServiceResult;

/// Authentication service
pub struct AuthService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> AuthService<'a> {
    /// Create a new AuthService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Register a new `user`-role account
    #[instrument(skip(self, request), fields(email = %request.email))]
    pub async fn register(&self, request: RegisterRequest) -> ServiceResult<OkResponse> {
        let email = require_credentials(&request.email, &request.password)?;
        if !email.validate_email() {
            return Err(DomainError::InvalidEmail.into());
        }

        if self.ctx.user_repo().email_exists(&email).await? {
            warn!("Registration rejected: email already in use");
            return Err(DomainError::EmailAlreadyExists.into());
        }

        let user = self.create_user(&email, &request.password, Role::User).await?;

        AuditTrail::new(self.ctx)
            .record(
                Some(user.id),
                AuditAction::Register,
                None,
                Some(json!({ "email": user.email })),
            )
            .await;

        info!(user_id = %user.id, "User registered successfully");
        Ok(OkResponse::ok())
    }

    /// Login with email and password
    #[instrument(skip(self, request), fields(email = %request.email))]
    pub async fn login(&self, request: LoginRequest) -> ServiceResult<LoginResponse> {
        let email = require_credentials(&request.email, &request.password)?;

        let user = self
            .ctx
            .user_repo()
            .find_by_email(&email)
            .await?
            .ok_or_else(|| {
                warn!("Login failed: user not found");
                AppError::InvalidCredentials
            })?;

        let password_hash = self
            .ctx
            .user_repo()
            .get_password_hash(user.id)
            .await?
            .ok_or_else(|| {
                warn!(user_id = %user.id, "Login failed: no password hash");
                AppError::InvalidCredentials
            })?;

        if let Err(e) = self
            .ctx
            .password_service()
            .verify_or_error(&request.password, &password_hash)
        {
            warn!(user_id = %user.id, "Login failed: invalid password");
            return Err(e.into());
        }

        let token = self.ctx.jwt_service().issue(&user)?;

        AuditTrail::new(self.ctx)
            .record(Some(user.id), AuditAction::Login, None, None)
            .await;

        info!(user_id = %user.id, "User logged in successfully");
        Ok(LoginResponse {
            token,
            user: LoginUserResponse::from(&user),
        })
    }

    /// The account behind a verified token
    #[instrument(skip(self), fields(user_id = %actor.id))]
    pub async fn current_user(&self, actor: &Actor) -> ServiceResult<MeResponse> {
        let user = self
            .ctx
            .user_repo()
            .find_by_id(actor.id)
            .await?
            .ok_or(DomainError::UserNotFound(actor.id))?;

        Ok(MeResponse {
            user: UserResponse::from(&user),
        })
    }

    /// Create the configured admin account if it does not exist yet.
    /// Returns whether an account was created.
    #[instrument(skip(self, password))]
    pub async fn ensure_admin(&self, email: &str, password: &str) -> ServiceResult<bool> {
        let email = require_credentials(email, password)?;
        if self.ctx.user_repo().email_exists(&email).await? {
            return Ok(false);
        }

        let user = match self.create_user(&email, password, Role::Admin).await {
            Ok(user) => user,
            // Another instance seeded it first
            Err(e) if e.status_code() == 409 => return Ok(false),
            Err(e) => return Err(e),
        };

        info!(user_id = %user.id, email = %user.email, "Admin seeded");
        Ok(true)
    }

    async fn create_user(&self, email: &str, password: &str, role: Role) -> ServiceResult<User> {
        let password_hash = self.ctx.password_service().hash(password)?;
        let user = User::new(self.ctx.generate_id(), email, role);
        self.ctx.user_repo().create(&user, &password_hash).await?;
        Ok(user)
    }
}

/// Both fields present; returns the normalized email
fn require_credentials(email: &str, password: &str) -> Result<String, DomainError> {
    let email = normalize_email(email);
    if email.is_empty() {
        return Err(DomainError::MissingField("email"));
    }
    if password.is_empty() {
        return Err(DomainError::MissingField("password"));
    }
    Ok(email)
}
