use sqlx::PgPool;
use uuid::Uuid;

use crate::models::airport::Airport;
use crate::utils::errors::AppError;

pub struct AirportRepository {
    pool: PgPool,
}

impl AirportRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn create(&self, name: String, closest_big_city: String) -> Result<Airport, AppError> {
        let airport = sqlx::query_as::<_, Airport>(
            "INSERT INTO airports (id, name, closest_big_city) VALUES ($1, $2, $3) RETURNING *",
        )
        .bind(Uuid::new_v4())
        .bind(name)
        .bind(closest_big_city)
        .fetch_one(&self.pool)
        .await?;

        Ok(airport)
    }

    pub async fn find_all(&self) -> Result<Vec<Airport>, AppError> {
        let airports = sqlx::query_as::<_, Airport>("SELECT * FROM airports ORDER BY name")
            .fetch_all(&self.pool)
            .await?;

        Ok(airports)
    }

    pub async fn find_by_id(&self, id: Uuid) -> Result<Option<Airport>, AppError> {
        let airport = sqlx::query_as::<_, Airport>("SELECT * FROM airports WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(airport)
    }

    pub async fn update(
        &self,
        id: Uuid,
        name: Option<String>,
        closest_big_city: Option<String>,
    ) -> Result<Option<Airport>, AppError> {
        let Some(current) = self.find_by_id(id).await? else {
            return Ok(None);
        };

        let airport = sqlx::query_as::<_, Airport>(
            "UPDATE airports SET name = $2, closest_big_city = $3 WHERE id = $1 RETURNING *",
        )
        .bind(id)
        .bind(name.unwrap_or(current.name))
        .bind(closest_big_city.unwrap_or(current.closest_big_city))
        .fetch_one(&self.pool)
        .await?;

        Ok(Some(airport))
    }

    /// Borrar un aeropuerto arrastra en cascada sus rutas y los vuelos
    /// de esas rutas.
    pub async fn delete(&self, id: Uuid) -> Result<bool, AppError> {
        let result = sqlx::query("DELETE FROM airports WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
