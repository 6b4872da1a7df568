//! Middleware de autenticación JWT
//!
//! Resuelve el principal de cada request: anónimo si no hay header,
//! usuario autenticado si el token es válido y el usuario existe.
//! Un token malformado o caducado corta la request con 401; decidir si
//! un principal puede hacer algo es trabajo de la política de permisos.

use axum::{
    extract::{Request, State},
    http::header,
    middleware::Next,
    response::Response,
};
use uuid::Uuid;

use crate::repositories::user_repository::UserRepository;
use crate::state::AppState;
use crate::utils::errors::AppError;
use crate::utils::jwt::{self, JwtConfig};

/// Usuario autenticado que se inyecta en las requests
#[derive(Debug, Clone)]
pub struct AuthenticatedUser {
    pub user_id: Uuid,
    pub email: String,
    pub is_staff: bool,
}

/// Principal de una request: quién está llamando
#[derive(Debug, Clone)]
pub enum Principal {
    Anonymous,
    User(AuthenticatedUser),
}

/// Middleware que resuelve el principal de la request
pub async fn principal_middleware(
    State(state): State<AppState>,
    mut request: Request,
    next: Next,
) -> Result<Response, AppError> {
    let auth_header = request
        .headers()
        .get(header::AUTHORIZATION)
        .and_then(|value| value.to_str().ok());

    let principal = match auth_header {
        None => Principal::Anonymous,
        Some(header_value) => {
            let token = jwt::extract_token_from_header(header_value)?;
            let claims = jwt::verify_token(token, &JwtConfig::from(&state.config))?;

            let user_id = Uuid::parse_str(&claims.sub)
                .map_err(|_| AppError::Unauthorized("ID de usuario inválido".to_string()))?;

            // El flag is_staff se lee de la base en cada request para que
            // los cambios de rol apliquen sin esperar a que caduque el token
            let user = UserRepository::new(state.pool.clone())
                .find_by_id(user_id)
                .await?
                .ok_or_else(|| AppError::Unauthorized("Usuario no encontrado".to_string()))?;

            Principal::User(AuthenticatedUser {
                user_id: user.id,
                email: user.email,
                is_staff: user.is_staff,
            })
        }
    };

    request.extensions_mut().insert(principal);

    Ok(next.run(request).await)
}
