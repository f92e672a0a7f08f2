use actix_web::{App, HttpServer, middleware::Logger, web};
use anyhow::Context;
use sqlx::postgres::PgPoolOptions;
use std::sync::Arc;
use std::time::Duration;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use hueareyou::{
  adapters::http::{configure_auth_routes, configure_hue_routes, cors_middleware, health_handler},
  application::auth::{LoginAdminUseCase, SignInUserUseCase},
  application::hue::{GetRecordsUseCase, SaveResultUseCase},
  domain::auth::services::{AuthService, AuthServiceConfig},
  domain::hue::services::HueService,
  infrastructure::{
    clock::SystemClock,
    config::Config,
    generation::OpenAiResultGenerator,
    persistence::postgres::{
      PostgresHueRecordRepository, PostgresSessionRepository, PostgresUserRepository,
    },
    security::{Argon2Hasher, SecureTokenGenerator},
  },
};

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
  dotenvy::dotenv().ok();

  tracing_subscriber::registry()
    .with(
      tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "hueareyou=debug,actix_web=info".into()),
    )
    .with(tracing_subscriber::fmt::layer())
    .init();

  tracing::info!("Starting Hue Are You backend");

  let config = Config::load().context("Failed to load configuration")?;
  tracing::info!("Configuration loaded successfully");

  tracing::info!("Connecting to database: {}", config.database.url);

  let db_pool = tokio::time::timeout(
    Duration::from_secs(config.database.connect_timeout_seconds),
    PgPoolOptions::new()
      .max_connections(config.database.max_connections)
      .acquire_timeout(Duration::from_secs(config.database.acquire_timeout_seconds))
      .connect(&config.database.url),
  )
  .await
  .with_context(|| {
    format!(
      "Database connection timed out after {} seconds. Is PostgreSQL running?",
      config.database.connect_timeout_seconds
    )
  })?
  .with_context(|| format!("Could not connect to database at {}", config.database.url))?;

  tracing::info!("Database connection pool created");

  tracing::info!("Running database migrations");
  sqlx::migrate!("./migrations")
    .run(&db_pool)
    .await
    .context("Failed to run database migrations")?;
  tracing::info!("Database migrations completed");

  // Repositories
  let user_repo = Arc::new(PostgresUserRepository::new(db_pool.clone()));
  let session_repo = Arc::new(PostgresSessionRepository::new(db_pool.clone()));
  let hue_record_repo = Arc::new(PostgresHueRecordRepository::new(db_pool.clone()));

  // Security services; one Argon2 instance serves both hasher ports
  let hasher = Arc::new(Argon2Hasher::new().context("Failed to create Argon2 hasher")?);
  let token_generator = Arc::new(SecureTokenGenerator::new());

  // Domain services
  let auth_config = AuthServiceConfig {
    session_ttl: chrono::Duration::seconds(config.security.session_ttl_seconds as i64),
  };

  let auth_service = Arc::new(AuthService::new(
    user_repo,
    session_repo,
    hasher.clone(),
    hasher,
    token_generator,
    Arc::new(SystemClock),
    auth_config,
  ));

  let result_generator = Arc::new(
    OpenAiResultGenerator::new(&config.hue).context("Failed to create result generator")?,
  );

  let hue_service = Arc::new(HueService::new(
    hue_record_repo,
    result_generator,
    auth_service.clone(),
  ));

  // Use cases
  let sign_in_use_case = Arc::new(SignInUserUseCase::new(auth_service.clone()));
  let login_use_case = Arc::new(LoginAdminUseCase::new(auth_service.clone()));
  let save_result_use_case = Arc::new(SaveResultUseCase::new(hue_service.clone()));
  let get_records_use_case = Arc::new(GetRecordsUseCase::new(hue_service.clone()));

  let server_host = config.server.host.clone();
  let server_port = config.server.port;
  let cors_origins = config.server.cors_origins.clone();

  tracing::info!("Starting HTTP server on {}:{}", server_host, server_port);

  HttpServer::new(move || {
    App::new()
      .wrap(cors_middleware(&cors_origins))
      .wrap(Logger::default())
      .configure(|cfg| {
        configure_auth_routes(cfg, sign_in_use_case.clone(), login_use_case.clone())
      })
      .configure(|cfg| {
        configure_hue_routes(
          cfg,
          save_result_use_case.clone(),
          get_records_use_case.clone(),
        )
      })
      .route("/health", web::get().to(health_handler))
  })
  .bind((server_host.as_str(), server_port))?
  .run()
  .await?;

  Ok(())
}
