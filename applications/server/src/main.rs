/// Jukebox Server - multi-user playlist service
use clap::{Parser, Subcommand};
use jukebox_core::{types::CreateUser, Storage};
use jukebox_server::{create_router, seed, AppState, AuthService, ServerConfig};
use jukebox_storage::SqliteStorage;
use std::{net::SocketAddr, path::PathBuf, sync::Arc};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "jukebox-server")]
#[command(about = "Jukebox multi-user playlist server", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the HTTP server
    Serve {
        /// Configuration file path
        #[arg(short, long)]
        config: Option<PathBuf>,
    },
    /// Populate the database with sample data
    Seed {
        /// Configuration file path
        #[arg(short, long)]
        config: Option<PathBuf>,
    },
    /// Create a new user
    AddUser {
        /// Username
        #[arg(short, long)]
        username: String,
        /// Password
        #[arg(short, long)]
        password: String,
        /// Configuration file path
        #[arg(short, long)]
        config: Option<PathBuf>,
    },
    /// List all users
    ListUsers {
        /// Configuration file path
        #[arg(short, long)]
        config: Option<PathBuf>,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "jukebox_server=info,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Serve { config } => {
            serve(config).await?;
        }
        Commands::Seed { config } => {
            seed_database(config).await?;
        }
        Commands::AddUser {
            username,
            password,
            config,
        } => {
            add_user(config, &username, &password).await?;
        }
        Commands::ListUsers { config } => {
            list_users(config).await?;
        }
    }

    Ok(())
}

/// Load and validate configuration, then open the database
async fn bootstrap(
    config_path: Option<PathBuf>,
) -> anyhow::Result<(ServerConfig, SqliteStorage, AuthService)> {
    let config = ServerConfig::load(config_path.as_deref())?;
    config.validate()?;

    let db = SqliteStorage::connect(&config.storage.database_url).await?;
    tracing::info!("Database connected");

    let auth_service = AuthService::new(&config.auth.jwt_secret, config.auth.token_ttl_secs)
        .with_hash_cost(config.auth.hash_cost);

    Ok((config, db, auth_service))
}

async fn serve(config_path: Option<PathBuf>) -> anyhow::Result<()> {
    let (config, db, auth_service) = bootstrap(config_path).await?;

    tracing::info!("Starting Jukebox Server");
    tracing::info!("Host: {}", config.server.host);
    tracing::info!("Port: {}", config.server.port);

    let db = Arc::new(db);
    let app_state = AppState::new(Arc::clone(&db), Arc::new(auth_service));
    let app = create_router(app_state);

    let addr = SocketAddr::from((
        config.server.host.parse::<std::net::IpAddr>()?,
        config.server.port,
    ));

    tracing::info!("Server listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    db.close().await;
    tracing::info!("Database closed");

    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to listen for Ctrl-C: {}", e);
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to listen for SIGTERM: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {},
        () = terminate => {},
    }

    tracing::info!("Shutdown signal received");
}

async fn seed_database(config_path: Option<PathBuf>) -> anyhow::Result<()> {
    let (_, db, auth_service) = bootstrap(config_path).await?;

    let result = seed::run(&db, &auth_service).await;
    db.close().await;
    let summary = result?;

    println!("Seeded database:");
    println!("  user: {} (password: {})", summary.user.username, seed::SEED_PASSWORD);
    println!("  tracks: {}", summary.track_count);
    println!(
        "  playlist: {} ({} tracks)",
        summary.playlist.name, summary.playlist_track_count
    );

    Ok(())
}

async fn add_user(
    config_path: Option<PathBuf>,
    username: &str,
    password: &str,
) -> anyhow::Result<()> {
    let (_, db, auth_service) = bootstrap(config_path).await?;

    let password_hash = auth_service.hash_password(password).await?;
    let user = db
        .create_user(CreateUser {
            username: username.to_string(),
            password_hash,
        })
        .await?;
    db.close().await;

    println!("Created user {} (id {})", user.username, user.id);

    Ok(())
}

async fn list_users(config_path: Option<PathBuf>) -> anyhow::Result<()> {
    let (_, db, _) = bootstrap(config_path).await?;

    let users = db.get_all_users().await?;
    db.close().await;

    println!("Users:");
    for user in users {
        println!("  {} - {}", user.id, user.username);
    }

    Ok(())
}
