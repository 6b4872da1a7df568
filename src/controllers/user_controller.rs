use sqlx::PgPool;
use uuid::Uuid;
use validator::Validate;

use crate::dto::user_dto::{LoginRequest, LoginResponse, RegisterUserRequest, UserResponse};
use crate::dto::ApiResponse;
use crate::repositories::user_repository::UserRepository;
use crate::utils::errors::AppError;
use crate::utils::jwt::{self, JwtConfig};

pub struct UserController {
    repository: UserRepository,
}

impl UserController {
    pub fn new(pool: PgPool) -> Self {
        Self {
            repository: UserRepository::new(pool),
        }
    }

    pub async fn register(
        &self,
        request: RegisterUserRequest,
    ) -> Result<ApiResponse<UserResponse>, AppError> {
        request.validate()?;

        if self.repository.find_by_email(&request.email).await?.is_some() {
            return Err(AppError::Conflict(
                "El email ya está registrado".to_string(),
            ));
        }

        let password_hash = bcrypt::hash(&request.password, bcrypt::DEFAULT_COST)
            .map_err(|e| AppError::Hash(e.to_string()))?;

        let user = self
            .repository
            .create(request.email, request.full_name, password_hash)
            .await?;

        Ok(ApiResponse::success_with_message(
            UserResponse::from(user),
            "Usuario registrado exitosamente".to_string(),
        ))
    }

    pub async fn login(
        &self,
        request: LoginRequest,
        jwt_config: &JwtConfig,
    ) -> Result<LoginResponse, AppError> {
        let user = self
            .repository
            .find_by_email(&request.email)
            .await?
            .ok_or_else(|| {
                log::warn!("Login fallido: email '{}' no registrado", request.email);
                AppError::Unauthorized("Credenciales inválidas".to_string())
            })?;

        let password_matches = bcrypt::verify(&request.password, &user.password_hash)
            .map_err(|e| AppError::Hash(e.to_string()))?;

        if !password_matches {
            log::warn!("Login fallido: password incorrecto para '{}'", request.email);
            return Err(AppError::Unauthorized("Credenciales inválidas".to_string()));
        }

        let token = jwt::generate_token(user.id, jwt_config)?;

        Ok(LoginResponse {
            token,
            user: UserResponse::from(user),
        })
    }

    pub async fn me(&self, user_id: Uuid) -> Result<UserResponse, AppError> {
        let user = self
            .repository
            .find_by_id(user_id)
            .await?
            .ok_or_else(|| AppError::Unauthorized("Usuario no encontrado".to_string()))?;

        Ok(UserResponse::from(user))
    }
}
