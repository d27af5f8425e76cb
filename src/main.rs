use actix_cors::Cors;
use actix_web::{middleware::Logger, App, HttpServer};
use anyhow::Context;
use diesel::{r2d2::ConnectionManager, MysqlConnection};
use hms_server::config::Config;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    dotenv::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "hms_server=debug,actix_web=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::from_env()?;
    let manager = ConnectionManager::<MysqlConnection>::new(config.database_url());
    let pool = r2d2::Pool::builder()
        .max_size(config.pool_size)
        .connection_timeout(config.connect_timeout)
        .build(manager)
        .context("Failed to create pool")?;
    tracing::info!(
        host = %config.database_host,
        database = %config.database,
        "connected to MySQL database"
    );

    let bind = config.bind_addr();
    tracing::info!("listening on {}:{}", bind.0, bind.1);

    HttpServer::new(move || {
        App::new()
            .data(pool.clone())
            .app_data(hms_server::json_config())
            .wrap(Cors::permissive())
            .wrap(Logger::default())
            .configure(hms_server::configure)
    })
    .bind(bind)?
    .run()
    .await?;

    Ok(())
}
