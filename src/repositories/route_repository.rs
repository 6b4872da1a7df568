use sqlx::{FromRow, PgPool};
use uuid::Uuid;

use crate::dto::route_dto::RouteListResponse;
use crate::models::route::{MeasurementUnit, Route};
use crate::utils::errors::AppError;

// Fila plana del retrieve, con ambos aeropuertos resueltos
#[derive(Debug, FromRow)]
pub struct RouteDetailRow {
    pub id: Uuid,
    pub distance: i32,
    pub measurement_unit: MeasurementUnit,
    pub source_id: Uuid,
    pub source_name: String,
    pub source_city: String,
    pub destination_id: Uuid,
    pub destination_name: String,
    pub destination_city: String,
}

pub struct RouteRepository {
    pool: PgPool,
}

impl RouteRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn create(
        &self,
        source_id: Uuid,
        destination_id: Uuid,
        distance: i32,
        measurement_unit: MeasurementUnit,
    ) -> Result<Route, AppError> {
        let route = sqlx::query_as::<_, Route>(
            r#"
            INSERT INTO routes (id, source_id, destination_id, distance, measurement_unit)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING *
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(source_id)
        .bind(destination_id)
        .bind(distance)
        .bind(measurement_unit)
        .fetch_one(&self.pool)
        .await?;

        Ok(route)
    }

    /// Listado con filtros por substring sobre el nombre de aeropuerto
    pub async fn list(
        &self,
        source: Option<String>,
        destination: Option<String>,
    ) -> Result<Vec<RouteListResponse>, AppError> {
        let routes = sqlx::query_as::<_, RouteListResponse>(
            r#"
            SELECT
                r.id,
                src.name AS source,
                dst.name AS destination,
                r.distance,
                r.measurement_unit
            FROM routes r
            JOIN airports src ON src.id = r.source_id
            JOIN airports dst ON dst.id = r.destination_id
            WHERE ($1::text IS NULL OR src.name ILIKE '%' || $1 || '%')
              AND ($2::text IS NULL OR dst.name ILIKE '%' || $2 || '%')
            ORDER BY src.name, dst.name
            "#,
        )
        .bind(source)
        .bind(destination)
        .fetch_all(&self.pool)
        .await?;

        Ok(routes)
    }

    pub async fn find_by_id(&self, id: Uuid) -> Result<Option<Route>, AppError> {
        let route = sqlx::query_as::<_, Route>("SELECT * FROM routes WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(route)
    }

    pub async fn find_detail(&self, id: Uuid) -> Result<Option<RouteDetailRow>, AppError> {
        let detail = sqlx::query_as::<_, RouteDetailRow>(
            r#"
            SELECT
                r.id,
                r.distance,
                r.measurement_unit,
                src.id AS source_id,
                src.name AS source_name,
                src.closest_big_city AS source_city,
                dst.id AS destination_id,
                dst.name AS destination_name,
                dst.closest_big_city AS destination_city
            FROM routes r
            JOIN airports src ON src.id = r.source_id
            JOIN airports dst ON dst.id = r.destination_id
            WHERE r.id = $1
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
        source_id: Option<Uuid>,
        destination_id: Option<Uuid>,
        distance: Option<i32>,
        measurement_unit: Option<MeasurementUnit>,
    ) -> Result<Option<Route>, AppError> {
        let Some(current) = self.find_by_id(id).await? else {
            return Ok(None);
        };

        let route = sqlx::query_as::<_, Route>(
            r#"
            UPDATE routes
            SET source_id = $2, destination_id = $3, distance = $4, measurement_unit = $5
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(source_id.unwrap_or(current.source_id))
        .bind(destination_id.unwrap_or(current.destination_id))
        .bind(distance.unwrap_or(current.distance))
        .bind(measurement_unit.unwrap_or(current.measurement_unit))
        .fetch_one(&self.pool)
        .await?;

        Ok(Some(route))
    }

    pub async fn delete(&self, id: Uuid) -> Result<bool, AppError> {
        let result = sqlx::query("DELETE FROM routes WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
