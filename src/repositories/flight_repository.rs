use chrono::{DateTime, NaiveDate, Utc};
use sqlx::{FromRow, PgPool};
use uuid::Uuid;

use crate::dto::flight_dto::{FlightListResponse, SeatResponse};
use crate::models::flight::Flight;
use crate::utils::errors::AppError;

// Cabecera del retrieve: ruta resuelta a "origen-destino"
#[derive(Debug, FromRow)]
pub struct FlightHeaderRow {
    pub id: Uuid,
    pub route: String,
    pub airplane_id: Uuid,
    pub departure_time: DateTime<Utc>,
    pub arrival_time: DateTime<Utc>,
}

pub struct FlightRepository {
    pool: PgPool,
}

impl FlightRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn create(
        &self,
        route_id: Uuid,
        airplane_id: Uuid,
        departure_time: DateTime<Utc>,
        arrival_time: DateTime<Utc>,
        crew: &[Uuid],
    ) -> Result<Flight, AppError> {
        let mut tx = self.pool.begin().await?;

        let flight = sqlx::query_as::<_, Flight>(
            r#"
            INSERT INTO flights (id, route_id, airplane_id, departure_time, arrival_time)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING *
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(route_id)
        .bind(airplane_id)
        .bind(departure_time)
        .bind(arrival_time)
        .fetch_one(&mut *tx)
        .await?;

        for crew_id in crew {
            sqlx::query("INSERT INTO flight_crew (flight_id, crew_id) VALUES ($1, $2)")
                .bind(flight.id)
                .bind(crew_id)
                .execute(&mut *tx)
                .await?;
        }

        tx.commit().await?;

        Ok(flight)
    }

    /// Listado con disponibilidad calculada a nivel de query:
    /// capacity - tickets reservados, en la misma lectura.
    pub async fn list(
        &self,
        departure_date: Option<NaiveDate>,
        arrival_date: Option<NaiveDate>,
        flight_id: Option<Uuid>,
    ) -> Result<Vec<FlightListResponse>, AppError> {
        let flights = sqlx::query_as::<_, FlightListResponse>(
            r#"
            SELECT
                f.id,
                src.name || '-' || dst.name AS route,
                a.name AS airplane,
                f.departure_time,
                f.arrival_time,
                COALESCE(
                    array_agg(DISTINCT c.first_name || ' ' || c.last_name)
                        FILTER (WHERE c.id IS NOT NULL),
                    '{}'
                ) AS crew,
                (a."rows" * a.seats_in_row)::bigint - COUNT(DISTINCT t.id) AS tickets_available
            FROM flights f
            JOIN routes r ON r.id = f.route_id
            JOIN airports src ON src.id = r.source_id
            JOIN airports dst ON dst.id = r.destination_id
            JOIN airplanes a ON a.id = f.airplane_id
            LEFT JOIN flight_crew fc ON fc.flight_id = f.id
            LEFT JOIN crew c ON c.id = fc.crew_id
            LEFT JOIN tickets t ON t.flight_id = f.id
            WHERE ($1::date IS NULL OR f.departure_time::date = $1)
              AND ($2::date IS NULL OR f.arrival_time::date = $2)
              AND ($3::uuid IS NULL OR f.id = $3)
            GROUP BY f.id, src.name, dst.name, a.name, a."rows", a.seats_in_row
            ORDER BY f.departure_time DESC
            "#,
        )
        .bind(departure_date)
        .bind(arrival_date)
        .bind(flight_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(flights)
    }

    pub async fn find_by_id(&self, id: Uuid) -> Result<Option<Flight>, AppError> {
        let flight = sqlx::query_as::<_, Flight>("SELECT * FROM flights WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(flight)
    }

    pub async fn find_header(&self, id: Uuid) -> Result<Option<FlightHeaderRow>, AppError> {
        let header = sqlx::query_as::<_, FlightHeaderRow>(
            r#"
            SELECT
                f.id,
                src.name || '-' || dst.name AS route,
                f.airplane_id,
                f.departure_time,
                f.arrival_time
            FROM flights f
            JOIN routes r ON r.id = f.route_id
            JOIN airports src ON src.id = r.source_id
            JOIN airports dst ON dst.id = r.destination_id
            WHERE f.id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(header)
    }

    pub async fn crew_ids(&self, flight_id: Uuid) -> Result<Vec<Uuid>, AppError> {
        let rows: Vec<(Uuid,)> =
            sqlx::query_as("SELECT crew_id FROM flight_crew WHERE flight_id = $1")
                .bind(flight_id)
                .fetch_all(&self.pool)
                .await?;

        Ok(rows.into_iter().map(|(id,)| id).collect())
    }

    pub async fn crew_names(&self, flight_id: Uuid) -> Result<Vec<String>, AppError> {
        let rows: Vec<(String,)> = sqlx::query_as(
            r#"
            SELECT c.first_name || ' ' || c.last_name
            FROM flight_crew fc
            JOIN crew c ON c.id = fc.crew_id
            WHERE fc.flight_id = $1
            ORDER BY c.last_name, c.first_name
            "#,
        )
        .bind(flight_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(|(name,)| name).collect())
    }

    /// Mapa de asientos ya reservados del vuelo
    pub async fn taken_seats(&self, flight_id: Uuid) -> Result<Vec<SeatResponse>, AppError> {
        let seats = sqlx::query_as::<_, SeatResponse>(
            r#"SELECT "row", seat FROM tickets WHERE flight_id = $1 ORDER BY "row", seat"#,
        )
        .bind(flight_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(seats)
    }

    /// Asientos disponibles: capacidad menos tickets reservados, calculado
    /// en una sola lectura para que el resultado sea un snapshot consistente.
    pub async fn available_seats(&self, flight_id: Uuid) -> Result<Option<i64>, AppError> {
        let available: Option<(i64,)> = sqlx::query_as(
            r#"
            SELECT (a."rows" * a.seats_in_row)::bigint - COUNT(t.id)
            FROM flights f
            JOIN airplanes a ON a.id = f.airplane_id
            LEFT JOIN tickets t ON t.flight_id = f.id
            WHERE f.id = $1
            GROUP BY a."rows", a.seats_in_row
            "#,
        )
        .bind(flight_id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(available.map(|(n,)| n))
    }

    pub async fn update(
        &self,
        id: Uuid,
        route_id: Option<Uuid>,
        airplane_id: Option<Uuid>,
        departure_time: Option<DateTime<Utc>>,
        arrival_time: Option<DateTime<Utc>>,
        crew: Option<Vec<Uuid>>,
    ) -> Result<Option<Flight>, AppError> {
        let Some(current) = self.find_by_id(id).await? else {
            return Ok(None);
        };

        let mut tx = self.pool.begin().await?;

        let flight = sqlx::query_as::<_, Flight>(
            r#"
            UPDATE flights
            SET route_id = $2, airplane_id = $3, departure_time = $4, arrival_time = $5
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(route_id.unwrap_or(current.route_id))
        .bind(airplane_id.unwrap_or(current.airplane_id))
        .bind(departure_time.unwrap_or(current.departure_time))
        .bind(arrival_time.unwrap_or(current.arrival_time))
        .fetch_one(&mut *tx)
        .await?;

        if let Some(crew) = crew {
            sqlx::query("DELETE FROM flight_crew WHERE flight_id = $1")
                .bind(id)
                .execute(&mut *tx)
                .await?;

            for crew_id in crew {
                sqlx::query("INSERT INTO flight_crew (flight_id, crew_id) VALUES ($1, $2)")
                    .bind(id)
                    .bind(crew_id)
                    .execute(&mut *tx)
                    .await?;
            }
        }

        tx.commit().await?;

        Ok(Some(flight))
    }

    /// Borrar un vuelo arrastra en cascada sus tickets.
    pub async fn delete(&self, id: Uuid) -> Result<bool, AppError> {
        let result = sqlx::query("DELETE FROM flights WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
