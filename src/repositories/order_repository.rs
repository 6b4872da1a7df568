use chrono::Utc;
use sqlx::PgPool;
use uuid::Uuid;

use crate::dto::order_dto::{TicketDetailRow, TicketRequest};
use crate::models::airplane::Airplane;
use crate::models::order::Order;
use crate::models::ticket::Ticket;
use crate::utils::errors::{not_found_error, AppError};

pub struct OrderRepository {
    pool: PgPool,
}

impl OrderRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Crear una orden con todos sus tickets en una única transacción.
    ///
    /// Valida la geometría de cada asiento contra el avión del vuelo y
    /// persiste todo o nada. La unicidad de (flight, row, seat) la decide
    /// el índice único de la tabla: si otra transacción concurrente ya
    /// reservó el asiento, el INSERT falla, la transacción entera se
    /// revierte y se reporta el asiento en conflicto.
    pub async fn create_with_tickets(
        &self,
        user_id: Uuid,
        requests: &[TicketRequest],
    ) -> Result<(Order, Vec<Ticket>), AppError> {
        let mut tx = self.pool.begin().await?;

        for (index, request) in requests.iter().enumerate() {
            let airplane = sqlx::query_as::<_, Airplane>(
                r#"
                SELECT a.*
                FROM airplanes a
                JOIN flights f ON f.airplane_id = a.id
                WHERE f.id = $1
                "#,
            )
            .bind(request.flight_id)
            .fetch_optional(&mut *tx)
            .await?
            .ok_or_else(|| not_found_error("Flight", &request.flight_id))?;

            Ticket::validate_seat(request.row, request.seat, &airplane).map_err(|e| match e {
                AppError::OutOfRange {
                    max_rows, max_seats, ..
                } => AppError::OutOfRange {
                    ticket_index: Some(index),
                    max_rows,
                    max_seats,
                },
                other => other,
            })?;
        }

        let order = sqlx::query_as::<_, Order>(
            "INSERT INTO orders (id, user_id, created_at) VALUES ($1, $2, $3) RETURNING *",
        )
        .bind(Uuid::new_v4())
        .bind(user_id)
        .bind(Utc::now())
        .fetch_one(&mut *tx)
        .await?;

        let mut tickets = Vec::with_capacity(requests.len());
        for request in requests {
            let ticket = sqlx::query_as::<_, Ticket>(
                r#"
                INSERT INTO tickets (id, flight_id, order_id, "row", seat)
                VALUES ($1, $2, $3, $4, $5)
                RETURNING *
                "#,
            )
            .bind(Uuid::new_v4())
            .bind(request.flight_id)
            .bind(order.id)
            .bind(request.row)
            .bind(request.seat)
            .fetch_one(&mut *tx)
            .await
            .map_err(|e| match &e {
                sqlx::Error::Database(db) if db.is_unique_violation() => AppError::SeatTaken {
                    flight_id: request.flight_id,
                    row: request.row,
                    seat: request.seat,
                },
                _ => AppError::Database(e),
            })?;

            tickets.push(ticket);
        }

        tx.commit().await?;

        Ok((order, tickets))
    }

    pub async fn list_for_user(
        &self,
        user_id: Uuid,
        limit: i64,
        offset: i64,
    ) -> Result<Vec<Order>, AppError> {
        let orders = sqlx::query_as::<_, Order>(
            r#"
            SELECT * FROM orders
            WHERE user_id = $1
            ORDER BY created_at DESC
            LIMIT $2 OFFSET $3
            "#,
        )
        .bind(user_id)
        .bind(limit)
        .bind(offset)
        .fetch_all(&self.pool)
        .await?;

        Ok(orders)
    }

    pub async fn list_all(&self, limit: i64, offset: i64) -> Result<Vec<Order>, AppError> {
        let orders = sqlx::query_as::<_, Order>(
            "SELECT * FROM orders ORDER BY created_at DESC LIMIT $1 OFFSET $2",
        )
        .bind(limit)
        .bind(offset)
        .fetch_all(&self.pool)
        .await?;

        Ok(orders)
    }

    pub async fn find_by_id(&self, id: Uuid) -> Result<Option<Order>, AppError> {
        let order = sqlx::query_as::<_, Order>("SELECT * FROM orders WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(order)
    }

    pub async fn tickets_for_order(&self, order_id: Uuid) -> Result<Vec<Ticket>, AppError> {
        let tickets = sqlx::query_as::<_, Ticket>(
            r#"SELECT * FROM tickets WHERE order_id = $1 ORDER BY "row", seat"#,
        )
        .bind(order_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(tickets)
    }

    /// Tickets de la orden con el resumen de su vuelo, para el retrieve
    pub async fn ticket_details_for_order(
        &self,
        order_id: Uuid,
    ) -> Result<Vec<TicketDetailRow>, AppError> {
        let rows = sqlx::query_as::<_, TicketDetailRow>(
            r#"
            SELECT
                t.id AS ticket_id,
                t."row",
                t.seat,
                f.id AS flight_id,
                src.name || '-' || dst.name AS route,
                a.name AS airplane,
                f.departure_time,
                f.arrival_time,
                (a."rows" * a.seats_in_row)::bigint
                    - (SELECT COUNT(*) FROM tickets tt WHERE tt.flight_id = f.id)
                    AS tickets_available
            FROM tickets t
            JOIN flights f ON f.id = t.flight_id
            JOIN routes r ON r.id = f.route_id
            JOIN airports src ON src.id = r.source_id
            JOIN airports dst ON dst.id = r.destination_id
            JOIN airplanes a ON a.id = f.airplane_id
            WHERE t.order_id = $1
            ORDER BY t."row", t.seat
            "#,
        )
        .bind(order_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(rows)
    }
}
