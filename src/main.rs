use clap::Parser;
use kaios_terminal_backend::config::cli::load_env_file;
use kaios_terminal_backend::utils::{logger, validation::Validate};
use kaios_terminal_backend::{build_router, AppState, ServerArgs};
use tokio::net::TcpListener;

async fn wait_for_shutdown_signal() {
    #[cfg(unix)]
    {
        use tokio::signal::unix::{signal, SignalKind};
        match (
            signal(SignalKind::terminate()),
            signal(SignalKind::interrupt()),
        ) {
            (Ok(mut sigterm), Ok(mut sigint)) => {
                tokio::select! {
                    _ = sigterm.recv() => {}
                    _ = sigint.recv() => {}
                }
            }
            _ => {
                let _ = tokio::signal::ctrl_c().await;
            }
        }
    }
    #[cfg(not(unix))]
    {
        let _ = tokio::signal::ctrl_c().await;
    }
    tracing::info!("Shutdown signal received, draining connections");
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // .env 必須在解析參數前載入，clap 的 env 後備值才讀得到
    let env_file = load_env_file(None);
    let args = ServerArgs::parse();

    // 初始化日誌
    logger::init_server_logger(args.verbose, args.log_format);

    tracing::info!("Starting kaios-terminal-backend");
    if let Some(path) = &env_file {
        tracing::info!("Loaded environment from {}", path.display());
    }

    let config = match args.load_config() {
        Ok(config) => config,
        Err(e) => {
            tracing::error!("❌ Failed to load configuration: {}", e);
            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 {}", e.recovery_suggestion());
            std::process::exit(1);
        }
    };

    // 驗證配置
    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());
        eprintln!("❌ {}", e.user_friendly_message());
        std::process::exit(1);
    }

    if !config.auth_enabled() {
        tracing::warn!("API_TOKEN is not set: every /api request will be answered with 401");
    }
    tracing::debug!("Backend config: {:?}", config);

    let port = config.port;
    let listener = TcpListener::bind(config.bind_address()).await?;
    let app = build_router(AppState::new(config));

    tracing::info!("Backend listening on :{}", port);
    axum::serve(listener, app)
        .with_graceful_shutdown(wait_for_shutdown_signal())
        .await?;

    Ok(())
}
