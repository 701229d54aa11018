/// userd Server - User management service over REST or gRPC
use clap::{Parser, Subcommand};
use std::{net::SocketAddr, sync::Arc};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use userd_server::{
    api,
    config::ServerConfig,
    grpc::UserGrpc,
    services::{AuthService, UserService},
    state::AppState,
};
use userd_storage::SqliteUserStore;

#[derive(Parser)]
#[command(name = "userd-server")]
#[command(about = "User management service", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the server
    Serve {
        /// Configuration file path
        #[arg(short, long)]
        config: Option<String>,

        /// Serve the gRPC API instead of the REST API
        #[arg(long)]
        grpc: bool,
    },
    /// Create a new user
    AddUser {
        /// Username
        #[arg(short, long)]
        username: String,
        /// Password
        #[arg(short, long)]
        password: String,
        /// Grant administrator rights
        #[arg(long)]
        admin: bool,
    },
    /// List all users
    ListUsers,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "userd_server=info,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Serve { config, grpc } => {
            serve(config.as_deref(), grpc).await?;
        }
        Commands::AddUser {
            username,
            password,
            admin,
        } => {
            add_user(&username, &password, admin).await?;
        }
        Commands::ListUsers => {
            list_users().await?;
        }
    }

    Ok(())
}

async fn serve(config_path: Option<&str>, grpc: bool) -> anyhow::Result<()> {
    // Load configuration
    let config = ServerConfig::load_from(config_path)?;
    config.validate()?;

    tracing::info!("Starting userd");
    tracing::info!("Host: {}", config.server.host);
    tracing::info!("Port: {}", config.server.port);

    // Initialize database
    let pool = userd_storage::create_pool(&config.storage.database_url).await?;
    userd_storage::run_migrations(&pool).await?;
    tracing::info!("Database connected");

    // Initialize services
    let auth_service = Arc::new(AuthService::new(
        config.auth.jwt_secret.clone(),
        config.auth.jwt_expiration_hours,
        config.auth.jwt_refresh_expiration_days,
    ));
    let store = Arc::new(SqliteUserStore::new(pool));
    let users = Arc::new(UserService::new(store, Arc::clone(&auth_service)));

    let addr = SocketAddr::from((
        config.server.host.parse::<std::net::IpAddr>()?,
        config.server.port,
    ));

    if grpc {
        serve_grpc(addr, users).await
    } else {
        serve_http(addr, users, auth_service).await
    }
}

async fn serve_http(
    addr: SocketAddr,
    users: Arc<UserService>,
    auth_service: Arc<AuthService>,
) -> anyhow::Result<()> {
    let app_state = AppState::new(users, auth_service);
    let app = api::create_router(app_state);

    tracing::info!("REST API listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn serve_grpc(addr: SocketAddr, users: Arc<UserService>) -> anyhow::Result<()> {
    let service = UserGrpc::new(users).into_server();

    tracing::info!("gRPC API listening on {}", addr);

    tonic::transport::Server::builder()
        .add_service(service)
        .serve_with_shutdown(addr, shutdown_signal())
        .await?;

    Ok(())
}

async fn shutdown_signal() {
    wait_for_shutdown(tokio::signal::ctrl_c()).await;
}

/// Resolves once a shutdown signal arrives. If the signal handler cannot be
/// installed the server keeps running, without graceful shutdown.
async fn wait_for_shutdown(signal: impl std::future::Future<Output = std::io::Result<()>>) {
    match signal.await {
        Ok(()) => tracing::info!("Shutdown signal received"),
        Err(e) => {
            tracing::error!("Failed to listen for shutdown signal: {}", e);
            std::future::pending::<()>().await;
        }
    }
}

async fn add_user(username: &str, password: &str, admin: bool) -> anyhow::Result<()> {
    let config = ServerConfig::load()?;
    let pool = userd_storage::create_pool(&config.storage.database_url).await?;
    userd_storage::run_migrations(&pool).await?;

    let auth_service = Arc::new(AuthService::new(
        config.auth.jwt_secret.clone(),
        config.auth.jwt_expiration_hours,
        config.auth.jwt_refresh_expiration_days,
    ));
    let store = Arc::new(SqliteUserStore::new(pool));
    let users = UserService::new(store, auth_service);

    let user = users.create(username, password, admin).await?;
    println!("Created user {} (id {})", user.username, user.id);

    Ok(())
}

async fn list_users() -> anyhow::Result<()> {
    let config = ServerConfig::load()?;
    let pool = userd_storage::create_pool(&config.storage.database_url).await?;
    userd_storage::run_migrations(&pool).await?;

    let users = userd_storage::users::get_all(&pool).await?;

    println!("Users:");
    for user in users {
        let role = if user.admin { "admin" } else { "user" };
        println!("  {} - {} ({})", user.id, user.username, role);
    }

    Ok(())
}
