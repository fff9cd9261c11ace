mod app;
mod core;
mod features;
mod modules;
mod shared;

use std::sync::Arc;

use crate::app::AppServices;
use crate::core::config::Config;
use crate::core::database;
use crate::features::auth::SharedSecretVerifier;
use crate::features::avatars::AvatarUploadService;
use crate::features::chat::{ChatService, PgChatStore};
use crate::features::friends::{FriendRequestService, PgFriendRequestStore};
use crate::features::messages::{ContactMessageService, PgContactMessageStore};
use crate::modules::storage::S3ObjectStore;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> anyhow::Result<()> {
    // Build Tokio runtime with configurable worker threads
    let worker_threads = std::env::var("TOKIO_WORKER_THREADS")
        .ok()
        .and_then(|s| s.parse().ok())
        .unwrap_or_else(|| {
            std::thread::available_parallelism()
                .map(|p| p.get())
                .unwrap_or(4)
        });

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .worker_threads(worker_threads)
        .enable_all()
        .build()?;

    runtime.block_on(async_main(worker_threads))
}

async fn async_main(worker_threads: usize) -> anyhow::Result<()> {
    // Load .env file BEFORE initializing logger so RUST_LOG is available
    let _ = dotenvy::dotenv();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::from_env().map_err(|e| anyhow::anyhow!(e))?;
    tracing::info!(
        "Configuration loaded: tokio_worker_threads={}, pid={}",
        worker_threads,
        std::process::id()
    );

    let pool = database::create_pool(&config.database).await?;
    tracing::info!("Database connection pool created");

    if config.database.run_migrations {
        tracing::info!("Running database migrations...");
        database::run_migrations(&pool)
            .await
            .map_err(|e| anyhow::anyhow!("Migration failed: {}", e))?;
        tracing::info!("Database migrations completed successfully");
    }

    let verifier = Arc::new(SharedSecretVerifier::from_config(&config.admin));

    let object_store = Arc::new(S3ObjectStore::new(config.storage.clone()));
    tracing::info!(
        "Object storage configured: endpoint={}, bucket={}",
        config.storage.endpoint,
        object_store.bucket_name()
    );

    let services = AppServices {
        chat: Arc::new(ChatService::new(Arc::new(PgChatStore::new(pool.clone())))),
        friends: Arc::new(FriendRequestService::new(
            Arc::new(PgFriendRequestStore::new(pool.clone())),
            verifier.clone(),
        )),
        messages: Arc::new(ContactMessageService::new(
            Arc::new(PgContactMessageStore::new(pool.clone())),
            verifier,
        )),
        avatars: Arc::new(AvatarUploadService::new(object_store)),
    };

    let app = app::router(services, config.app.max_request_body_size);

    // Start server
    let addr = config.app.server_address();
    let socket_addr: std::net::SocketAddr = addr
        .parse()
        .map_err(|e| anyhow::anyhow!("Invalid address: {}", e))?;

    // Use socket2 for TCP listener configuration
    let socket = socket2::Socket::new(
        socket2::Domain::for_address(socket_addr),
        socket2::Type::STREAM,
        Some(socket2::Protocol::TCP),
    )?;

    socket.set_reuse_address(true)?;
    #[cfg(unix)]
    socket.set_reuse_port(true)?;
    socket.set_nodelay(true)?;

    let keepalive = socket2::TcpKeepalive::new().with_time(std::time::Duration::from_secs(60));
    socket.set_tcp_keepalive(&keepalive)?;

    socket.set_nonblocking(true)?;
    socket.bind(&socket_addr.into())?;
    socket.listen(1024)?;

    let listener = tokio::net::TcpListener::from_std(socket.into())?;
    tracing::info!("Server listening on http://{}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
