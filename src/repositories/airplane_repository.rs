use sqlx::PgPool;
use uuid::Uuid;

use crate::dto::airplane_dto::AirplaneDetailResponse;
use crate::models::airplane::Airplane;
use crate::utils::errors::AppError;

pub struct AirplaneRepository {
    pool: PgPool,
}

impl AirplaneRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn create(
        &self,
        name: String,
        rows: i32,
        seats_in_row: i32,
        airplane_type_id: Option<Uuid>,
    ) -> Result<Airplane, AppError> {
        let airplane = sqlx::query_as::<_, Airplane>(
            r#"
            INSERT INTO airplanes (id, name, "rows", seats_in_row, airplane_type_id)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING *
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(name)
        .bind(rows)
        .bind(seats_in_row)
        .bind(airplane_type_id)
        .fetch_one(&self.pool)
        .await?;

        Ok(airplane)
    }

    pub async fn find_all(&self) -> Result<Vec<Airplane>, AppError> {
        let airplanes = sqlx::query_as::<_, Airplane>("SELECT * FROM airplanes ORDER BY name")
            .fetch_all(&self.pool)
            .await?;

        Ok(airplanes)
    }

    pub async fn find_by_id(&self, id: Uuid) -> Result<Option<Airplane>, AppError> {
        let airplane = sqlx::query_as::<_, Airplane>("SELECT * FROM airplanes WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(airplane)
    }

    /// Proyección de retrieve con el nombre del tipo de avión resuelto
    pub async fn find_detail(&self, id: Uuid) -> Result<Option<AirplaneDetailResponse>, AppError> {
        let detail = sqlx::query_as::<_, AirplaneDetailResponse>(
            r#"
            SELECT
                a.id,
                a.name,
                a."rows",
                a.seats_in_row,
                t.name AS airplane_type,
                a."rows" * a.seats_in_row AS capacity
            FROM airplanes a
            LEFT JOIN airplane_types t ON t.id = a.airplane_type_id
            WHERE a.id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(detail)
    }

    pub async fn update(
        &self,
        id: Uuid,
        name: Option<String>,
        rows: Option<i32>,
        seats_in_row: Option<i32>,
        airplane_type_id: Option<Uuid>,
    ) -> Result<Option<Airplane>, AppError> {
        let Some(current) = self.find_by_id(id).await? else {
            return Ok(None);
        };

        let airplane = sqlx::query_as::<_, Airplane>(
            r#"
            UPDATE airplanes
            SET name = $2, "rows" = $3, seats_in_row = $4, airplane_type_id = $5
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(name.unwrap_or(current.name))
        .bind(rows.unwrap_or(current.rows))
        .bind(seats_in_row.unwrap_or(current.seats_in_row))
        .bind(airplane_type_id.or(current.airplane_type_id))
        .fetch_one(&self.pool)
        .await?;

        Ok(Some(airplane))
    }

    pub async fn delete(&self, id: Uuid) -> Result<bool, AppError> {
        let result = sqlx::query("DELETE FROM airplanes WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
