//! Política de permisos
//!
//! Predicados puros sobre el principal de la request, sin estado propio:
//! - Anónimo: sin acceso a ningún recurso.
//! - Autenticado no staff: lectura de datos de referencia, lectura y
//!   creación de sus propias órdenes.
//! - Staff: lectura y escritura sin restricciones.

use crate::middleware::auth::{AuthenticatedUser, Principal};
use crate::utils::errors::AppError;

/// Exigir un usuario autenticado
pub fn require_authenticated(principal: &Principal) -> Result<&AuthenticatedUser, AppError> {
    match principal {
        Principal::User(user) => Ok(user),
        Principal::Anonymous => Err(AppError::Forbidden(
            "Authentication required for this resource".to_string(),
        )),
    }
}

/// Exigir un usuario staff
pub fn require_staff(principal: &Principal) -> Result<&AuthenticatedUser, AppError> {
    let user = require_authenticated(principal)?;

    if !user.is_staff {
        return Err(AppError::Forbidden(
            "Staff permissions required for this operation".to_string(),
        ));
    }

    Ok(user)
}

#[cfg(test)]
mod tests {
    use super::*;
    use uuid::Uuid;

    fn user(is_staff: bool) -> Principal {
        Principal::User(AuthenticatedUser {
            user_id: Uuid::new_v4(),
            email: "test@test.com".to_string(),
            is_staff,
        })
    }

    #[test]
    fn test_anonymous_is_forbidden() {
        assert!(matches!(
            require_authenticated(&Principal::Anonymous),
            Err(AppError::Forbidden(_))
        ));
        assert!(matches!(
            require_staff(&Principal::Anonymous),
            Err(AppError::Forbidden(_))
        ));
    }

    #[test]
    fn test_authenticated_user_passes_but_is_not_staff() {
        let principal = user(false);
        assert!(require_authenticated(&principal).is_ok());
        assert!(matches!(
            require_staff(&principal),
            Err(AppError::Forbidden(_))
        ));
    }

    #[test]
    fn test_staff_passes_both_checks() {
        let principal = user(true);
        assert!(require_authenticated(&principal).is_ok());
        assert!(require_staff(&principal).is_ok());
    }
}
