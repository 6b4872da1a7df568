use anyhow::Result;
use dotenvy::dotenv;
use std::net::SocketAddr;
use tokio::signal;
use tracing::{error, info};

use airport_booking::config::environment::EnvironmentConfig;
use airport_booking::database::DatabaseConnection;
use airport_booking::routes::build_app;
use airport_booking::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Cargar variables de entorno
    dotenv().ok();

    // Configurar logging
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .init();

    info!("✈️  Airport Booking - API de reserva de vuelos");
    info!("================================================");

    let config = EnvironmentConfig::from_env();

    // Inicializar base de datos
    let db_connection = match DatabaseConnection::new_default().await {
        Ok(conn) => conn,
        Err(e) => {
            error!("❌ Error conectando a la base de datos: {}", e);
            return Err(anyhow::anyhow!("Error de base de datos: {}", e));
        }
    };

    if let Err(e) = db_connection.run_migrations().await {
        error!("❌ Error aplicando migraciones: {}", e);
        return Err(anyhow::anyhow!("Error de migraciones: {}", e));
    }

    let pool = db_connection.pool().clone();

    // Crear router de la API
    let addr: SocketAddr = config.server_url().parse()?;
    let app_state = AppState::new(pool, config);
    let app = build_app(app_state);

    info!("🌐 Servidor iniciando en http://{}", addr);
    info!("🔍 Endpoints disponibles:");
    info!("👤 Usuarios:");
    info!("   POST /api/user/register - Registrar usuario");
    info!("   POST /api/user/login - Login");
    info!("   GET  /api/user/me - Usuario actual");
    info!("🛫 Datos de referencia (lectura autenticada, escritura staff):");
    info!("   /api/airplane-types - Tipos de avión");
    info!("   /api/airplanes - Aviones");
    info!("   /api/crew - Tripulación");
    info!("   /api/airports - Aeropuertos");
    info!("   /api/routes - Rutas (?source= ?destination=)");
    info!("   /api/flights - Vuelos (?departure_date= ?arrival_date= ?flight=)");
    info!("🎫 Reservas:");
    info!("   POST /api/orders - Crear orden con tickets");
    info!("   GET  /api/orders - Listar órdenes propias (?limit= ?offset=)");
    info!("   GET  /api/orders/:id - Detalle de orden");

    // Iniciar servidor con apagado graceful
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| {
            error!("❌ Error del servidor: {}", e);
            e
        })?;

    info!("👋 Servidor terminado");
    Ok(())
}

/// Señal de apagado graceful
async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            info!("🛑 Señal Ctrl+C recibida, apagando servidor...");
        },
        _ = terminate => {
            info!("🛑 Señal de terminación recibida, apagando servidor...");
        },
    }
}
