use sqlx::PgPool;
use uuid::Uuid;

use crate::models::crew::Crew;
use crate::utils::errors::AppError;

pub struct CrewRepository {
    pool: PgPool,
}

impl CrewRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn create(&self, first_name: String, last_name: String) -> Result<Crew, AppError> {
        let crew = sqlx::query_as::<_, Crew>(
            "INSERT INTO crew (id, first_name, last_name) VALUES ($1, $2, $3) RETURNING *",
        )
        .bind(Uuid::new_v4())
        .bind(first_name)
        .bind(last_name)
        .fetch_one(&self.pool)
        .await?;

        Ok(crew)
    }

    pub async fn find_all(&self) -> Result<Vec<Crew>, AppError> {
        let crew = sqlx::query_as::<_, Crew>("SELECT * FROM crew ORDER BY last_name, first_name")
            .fetch_all(&self.pool)
            .await?;

        Ok(crew)
    }

    pub async fn find_by_id(&self, id: Uuid) -> Result<Option<Crew>, AppError> {
        let crew = sqlx::query_as::<_, Crew>("SELECT * FROM crew WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(crew)
    }

    pub async fn update(
        &self,
        id: Uuid,
        first_name: Option<String>,
        last_name: Option<String>,
    ) -> Result<Option<Crew>, AppError> {
        let Some(current) = self.find_by_id(id).await? else {
            return Ok(None);
        };

        let crew = sqlx::query_as::<_, Crew>(
            "UPDATE crew SET first_name = $2, last_name = $3 WHERE id = $1 RETURNING *",
        )
        .bind(id)
        .bind(first_name.unwrap_or(current.first_name))
        .bind(last_name.unwrap_or(current.last_name))
        .fetch_one(&self.pool)
        .await?;

        Ok(Some(crew))
    }

    pub async fn delete(&self, id: Uuid) -> Result<bool, AppError> {
        let result = sqlx::query("DELETE FROM crew WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }

    /// Verificar que todos los ids existen en la tabla crew
    pub async fn all_exist(&self, ids: &[Uuid]) -> Result<bool, AppError> {
        if ids.is_empty() {
            return Ok(true);
        }

        let count: (i64,) =
            sqlx::query_as("SELECT COUNT(*) FROM crew WHERE id = ANY($1)")
                .bind(ids)
                .fetch_one(&self.pool)
                .await?;

        Ok(count.0 == ids.len() as i64)
    }
}
