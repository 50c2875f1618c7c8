#![forbid(unsafe_code)]

use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;
use axum::http::HeaderValue;
use axum::routing::{get, post};
use axum::Router;
use clap::Parser;
use env_logger::Env;
use log::info;
use tokio::net::TcpListener;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use navlun::store::{PostgresJobStore, PostgresRawMessageStore};
use navlun::{sweep_retention, InMemoryConversationStore};

use navlun_service::adapters::{run_consumer_loop, FilesystemArchive, InProcessQueue, LoggingOutboundDelivery};
use navlun_service::state::AppState;
use navlun_service::{chat, webhook};

#[derive(Debug, Parser)]
struct Args {
    /// Shared secret the webhook `x-api-key` header must match.
    #[arg(long, env = "WEBHOOK_SECRET")]
    webhook_secret: String,

    /// Opaque bucket label recorded on queued messages (spec.md §6.1).
    #[arg(long, env = "ARCHIVE_BUCKET", default_value = "local-archive")]
    archive_bucket: String,

    /// Local directory the filesystem archive stand-in writes under.
    #[arg(long, env = "ARCHIVE_ROOT", default_value = "./data/archive")]
    archive_root: String,

    /// Postgres connection string for the job/raw-message stores.
    #[arg(long, env = "DATABASE_URL")]
    database_url: String,

    /// Optional external intent-classifier endpoint (spec.md §4.7).
    #[arg(long, env = "LLM_ENDPOINT")]
    llm_endpoint: Option<String>,

    /// Address to bind the HTTP server to.
    #[arg(long, env = "NAVLUN_BIND", default_value = "127.0.0.1:3000")]
    bind: String,

    /// CORS origins to allow.
    #[arg(long, env = "NAVLUN_CORS")]
    cors: Option<Vec<String>>,

    /// How many days of inactive jobs the retention sweep deactivates.
    #[arg(long, env = "RETENTION_DAYS", default_value_t = 30)]
    retention_days: i64,
}

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();
    let args = Args::parse();

    info!("connecting to database");
    let pool = sqlx::postgres::PgPoolOptions::new()
        .max_connections(10)
        .connect(&args.database_url)
        .await?;

    let jobs = Arc::new(PostgresJobStore::new(pool.clone()));
    let raw_messages = Arc::new(PostgresRawMessageStore::new(pool));
    let conversations = Arc::new(InMemoryConversationStore::new());
    let archive = Arc::new(FilesystemArchive::new(args.archive_root));
    let (queue, receiver) = InProcessQueue::new();
    let queue = Arc::new(queue);
    let outbound = Arc::new(LoggingOutboundDelivery);

    info!("geographic reference data loaded: provinces, districts, and regions for all 81 provinces");

    let state = Arc::new(AppState {
        webhook_secret: args.webhook_secret,
        archive_bucket: args.archive_bucket,
        archive,
        queue,
        jobs: jobs.clone(),
        raw_messages,
        conversations,
        outbound,
        llm_endpoint: args.llm_endpoint,
        http_client: reqwest::Client::new(),
    });

    tokio::spawn(run_consumer_loop(receiver, state.clone()));

    let retention_jobs = jobs;
    let retention_days = args.retention_days;
    tokio::spawn(async move {
        let mut ticker = tokio::time::interval(Duration::from_secs(3600));
        loop {
            ticker.tick().await;
            let now = chrono::Utc::now();
            if let Err(e) = sweep_retention(retention_jobs.as_ref(), now, chrono::Duration::days(retention_days)).await {
                log::warn!("retention sweep failed: {e:#}");
            }
        }
    });

    let mut cors = CorsLayer::new();
    for origin in args.cors.unwrap_or_default() {
        cors = cors.allow_origin(origin.parse::<HeaderValue>()?);
    }

    let app = Router::new()
        .route("/webhook", post(webhook::handle_webhook))
        .route("/chat", post(chat::handle_chat))
        .route("/healthz", get(webhook::healthz))
        .with_state(state)
        .layer(cors)
        .layer(TraceLayer::new_for_http());

    info!("listening at {}", args.bind);
    let listener = TcpListener::bind(&args.bind).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
