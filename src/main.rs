use anyhow::Result;
use scribe_core::application::{
    ports::{
        security::{PasswordHasher, TokenManager},
        storage::ImageStorage,
        time::Clock,
        util::SlugGenerator,
    },
    services::{Adapters, ApplicationServices, Repositories},
};
use scribe_core::config::AppConfig;
use scribe_core::infrastructure::{
    database,
    repositories::{
        PostgresArticleReadRepository, PostgresArticleWriteRepository, PostgresCommentRepository,
        PostgresFollowRepository, PostgresUserRepository,
    },
    security::{password::Argon2PasswordHasher, token::BiscuitTokenManager},
    storage::LocalImageStorage,
    time::SystemClock,
    util::DefaultSlugGenerator,
};
use scribe_core::presentation::http::{
    routes::{RouterOptions, build_router_with_options},
    state::HttpState,
};
use std::{net::SocketAddr, sync::Arc};
use tokio::signal;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() {
    if let Err(err) = bootstrap().await {
        tracing::error!(error = %err, "fatal error");
        eprintln!("fatal error: {err}");
        std::process::exit(1);
    }
}

async fn bootstrap() -> Result<()> {
    dotenvy::dotenv().ok();
    init_tracing();

    let config = AppConfig::from_env()?;

    let pool = database::init_pool(config.database_url()).await?;
    database::run_migrations(&pool).await?;

    let repositories = Repositories {
        users: Arc::new(PostgresUserRepository::new(pool.clone())),
        article_writes: Arc::new(PostgresArticleWriteRepository::new(pool.clone())),
        article_reads: Arc::new(PostgresArticleReadRepository::new(pool.clone())),
        comments: Arc::new(PostgresCommentRepository::new(pool.clone())),
        follows: Arc::new(PostgresFollowRepository::new(pool)),
    };

    let clock: Arc<dyn Clock> = Arc::new(SystemClock);
    let password_hasher: Arc<dyn PasswordHasher> = Arc::new(Argon2PasswordHasher);
    let token_manager: Arc<dyn TokenManager> = Arc::new(BiscuitTokenManager::new(
        config.biscuit_private_key(),
        config.token_ttl(),
    )?);
    let image_storage: Arc<dyn ImageStorage> = Arc::new(LocalImageStorage::new(
        config.upload_dir().clone(),
        config.base_url(),
        Arc::clone(&clock),
    ));
    let slugger: Arc<dyn SlugGenerator> = Arc::new(DefaultSlugGenerator);

    let services = Arc::new(ApplicationServices::new(
        repositories,
        Adapters {
            password_hasher,
            token_manager,
            image_storage,
            clock,
            slugger,
        },
    ));

    let state = HttpState {
        services,
        default_locale: config.default_locale(),
    };
    let app = build_router_with_options(
        state,
        RouterOptions {
            allowed_origins: config.allowed_origins().to_vec(),
            rate_limit: config.rate_limit(),
            upload_dir: Some(config.upload_dir().clone()),
        },
    );

    let listener = tokio::net::TcpListener::bind(config.listen_addr()).await?;
    let address: SocketAddr = listener.local_addr()?;
    tracing::info!(%address, rate_limit = ?config.rate_limit(), "listening");

    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .with_graceful_shutdown(shutdown_signal())
    .await?;

    Ok(())
}

fn init_tracing() {
    let env_filter = std::env::var("RUST_LOG")
        .ok()
        .unwrap_or_else(|| "info,tower_http=info,sqlx=warn".to_string());

    let subscriber = tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(env_filter))
        .with(tracing_subscriber::fmt::layer());

    if subscriber.try_init().is_err() {
        tracing::warn!("tracing subscriber already initialised");
    }
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(err) = signal::ctrl_c().await {
            tracing::error!(error = %err, "failed to listen for CTRL+C");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
            }
            Err(err) => {
                tracing::error!(error = %err, "failed to install terminate handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {}
        () = terminate => {}
    }
    tracing::info!("shutdown signal received");
}
