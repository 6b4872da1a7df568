use sqlx::PgPool;
use uuid::Uuid;

use crate::models::airplane_type::AirplaneType;
use crate::utils::errors::AppError;

pub struct AirplaneTypeRepository {
    pool: PgPool,
}

impl AirplaneTypeRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn create(&self, name: String) -> Result<AirplaneType, AppError> {
        let airplane_type = sqlx::query_as::<_, AirplaneType>(
            "INSERT INTO airplane_types (id, name) VALUES ($1, $2) RETURNING *",
        )
        .bind(Uuid::new_v4())
        .bind(name)
        .fetch_one(&self.pool)
        .await?;

        Ok(airplane_type)
    }

    pub async fn find_all(&self) -> Result<Vec<AirplaneType>, AppError> {
        let airplane_types =
            sqlx::query_as::<_, AirplaneType>("SELECT * FROM airplane_types ORDER BY name")
                .fetch_all(&self.pool)
                .await?;

        Ok(airplane_types)
    }

    pub async fn find_by_id(&self, id: Uuid) -> Result<Option<AirplaneType>, AppError> {
        let airplane_type =
            sqlx::query_as::<_, AirplaneType>("SELECT * FROM airplane_types WHERE id = $1")
                .bind(id)
                .fetch_optional(&self.pool)
                .await?;

        Ok(airplane_type)
    }

    pub async fn update(&self, id: Uuid, name: String) -> Result<Option<AirplaneType>, AppError> {
        let airplane_type = sqlx::query_as::<_, AirplaneType>(
            "UPDATE airplane_types SET name = $2 WHERE id = $1 RETURNING *",
        )
        .bind(id)
        .bind(name)
        .fetch_optional(&self.pool)
        .await?;

        Ok(airplane_type)
    }

    /// Borrar un tipo de avión. Los aviones que lo referencian quedan
    /// con airplane_type_id en NULL (ON DELETE SET NULL).
    pub async fn delete(&self, id: Uuid) -> Result<bool, AppError> {
        let result = sqlx::query("DELETE FROM airplane_types WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
