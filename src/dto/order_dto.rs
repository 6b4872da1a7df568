use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

use crate::models::order::Order;
use crate::models::ticket::Ticket;

// Petición de un asiento dentro de una orden.
//
// Los límites de row/seat dependen del avión del vuelo, así que se validan
// en el dominio y no con atributos estáticos.
#[derive(Debug, Clone, Deserialize)]
pub struct TicketRequest {
    pub flight_id: Uuid,
    pub row: i32,
    pub seat: i32,
}

// Request para crear una orden con sus tickets
#[derive(Debug, Deserialize)]
pub struct CreateOrderRequest {
    pub tickets: Vec<TicketRequest>,
}

// Paginación del listado de órdenes
#[derive(Debug, Deserialize)]
pub struct OrderFilters {
    pub limit: Option<i64>,
    pub offset: Option<i64>,
}

// Response de ticket
#[derive(Debug, Serialize)]
pub struct TicketResponse {
    pub id: Uuid,
    pub row: i32,
    pub seat: i32,
    pub flight_id: Uuid,
}

impl From<Ticket> for TicketResponse {
    fn from(ticket: Ticket) -> Self {
        Self {
            id: ticket.id,
            row: ticket.row,
            seat: ticket.seat,
            flight_id: ticket.flight_id,
        }
    }
}

// Response de orden para list y create
#[derive(Debug, Serialize)]
pub struct OrderResponse {
    pub id: Uuid,
    pub created_at: DateTime<Utc>,
    pub tickets: Vec<TicketResponse>,
}

impl OrderResponse {
    pub fn from_order(order: Order, tickets: Vec<Ticket>) -> Self {
        Self {
            id: order.id,
            created_at: order.created_at,
            tickets: tickets.into_iter().map(TicketResponse::from).collect(),
        }
    }
}

// Resumen de vuelo anidado en el detalle de una orden
#[derive(Debug, Serialize)]
pub struct TicketFlightResponse {
    pub id: Uuid,
    pub route: String,
    pub airplane: String,
    pub departure_time: DateTime<Utc>,
    pub arrival_time: DateTime<Utc>,
    pub tickets_available: i64,
}

// Ticket con su vuelo resuelto, para el retrieve de una orden
#[derive(Debug, Serialize)]
pub struct TicketDetailResponse {
    pub id: Uuid,
    pub row: i32,
    pub seat: i32,
    pub flight: TicketFlightResponse,
}

// Fila plana que devuelve la query del detalle
#[derive(Debug, FromRow)]
pub struct TicketDetailRow {
    pub ticket_id: Uuid,
    pub seat: i32,
    pub flight_id: Uuid,
    pub route: String,
    pub airplane: String,
    pub departure_time: DateTime<Utc>,
    pub arrival_time: DateTime<Utc>,
    pub tickets_available: i64,
    // Declared last so the sqlx FromRow derive's per-field binding for `row`
    // does not shadow the `&Row` argument used by the preceding fields.
    pub row: i32,
}

impl From<TicketDetailRow> for TicketDetailResponse {
    fn from(row: TicketDetailRow) -> Self {
        Self {
            id: row.ticket_id,
            row: row.row,
            seat: row.seat,
            flight: TicketFlightResponse {
                id: row.flight_id,
                route: row.route,
                airplane: row.airplane,
                departure_time: row.departure_time,
                arrival_time: row.arrival_time,
                tickets_available: row.tickets_available,
            },
        }
    }
}

// Proyección de retrieve: tickets con su vuelo anidado
#[derive(Debug, Serialize)]
pub struct OrderDetailResponse {
    pub id: Uuid,
    pub created_at: DateTime<Utc>,
    pub tickets: Vec<TicketDetailResponse>,
}
