/// BIN lookup bot - Telegram bot and HTTP API for card BIN metadata
use bin_lookup_bot::{
    config::{BotConfig, DEFAULT_LOG_FILTER},
    context::AppContext,
    error::{BotError, BotResult},
    jobs::JobScheduler,
    server,
    telegram::TelegramPoller,
};
use std::path::PathBuf;
use std::sync::Arc;
use tokio::sync::watch;
use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Parsed command line
#[derive(Debug, Default, PartialEq)]
struct Args {
    env_file: Option<PathBuf>,
    /// `lookup <text...>`: resolve once and exit
    lookup: Option<String>,
}

fn parse_args(args: impl IntoIterator<Item = String>) -> BotResult<Args> {
    let mut parsed = Args::default();
    let mut args = args.into_iter();

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--env-file" => {
                let path = args
                    .next()
                    .ok_or_else(|| BotError::Config("--env-file needs a path".to_string()))?;
                parsed.env_file = Some(PathBuf::from(path));
            }
            "lookup" => {
                let text: Vec<String> = args.by_ref().collect();
                if text.is_empty() {
                    return Err(BotError::Config("lookup needs a card number".to_string()));
                }
                parsed.lookup = Some(text.join(" "));
            }
            other => return Err(BotError::Config(format!("Unknown argument: {}", other))),
        }
    }

    Ok(parsed)
}

fn init_tracing() {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| DEFAULT_LOG_FILTER.into());
    let json = std::env::var("LOG_FORMAT")
        .map(|f| f.eq_ignore_ascii_case("json"))
        .unwrap_or(false);

    let registry = tracing_subscriber::registry().with(filter);
    if json {
        registry.with(tracing_subscriber::fmt::layer().json()).init();
    } else {
        registry.with(tracing_subscriber::fmt::layer()).init();
    }
}

#[tokio::main]
async fn main() {
    dotenv::dotenv().ok();
    init_tracing();

    if let Err(e) = run().await {
        error!("{}", e);
        std::process::exit(1);
    }
}

async fn run() -> BotResult<()> {
    let args = parse_args(std::env::args().skip(1))?;

    // Load configuration
    let mut config = match &args.env_file {
        Some(path) => BotConfig::from_env_file(path)?,
        None => BotConfig::from_env()?,
    };

    if let Some(text) = args.lookup {
        // One-shot lookups never talk to Telegram
        config.telegram.enabled = false;
        let ctx = AppContext::new(config)?;
        let reply = match ctx.lookup.resolve(&text).await {
            Ok(formatted) => formatted,
            Err(e) => e.user_message().to_string(),
        };
        println!("{}", reply);
        return Ok(());
    }

    print_banner();

    // Create application context
    let ctx = Arc::new(AppContext::new(config)?);
    info!(
        log_filter = %ctx.config.logging.level,
        log_format = %ctx.config.logging.format,
        telegram = ctx.config.telegram.enabled,
        "configuration loaded"
    );

    let (shutdown_tx, shutdown_rx) = watch::channel(false);

    // Start background jobs
    let scheduler = Arc::new(JobScheduler::new(Arc::clone(&ctx)));
    let jobs = scheduler.start(shutdown_rx.clone());

    let poller = match ctx.telegram_client() {
        Some(client) => {
            let poller = TelegramPoller::new(
                Arc::new(client),
                ctx.lookup.clone(),
                ctx.config.telegram.poll_timeout,
            );
            Some(tokio::spawn(poller.run(shutdown_rx.clone())))
        }
        None => {
            info!("Telegram transport disabled");
            None
        }
    };

    let mut server = tokio::spawn(server::serve((*ctx).clone(), shutdown_rx));

    let finished = tokio::select! {
        _ = shutdown_signal() => {
            info!("Shutdown signal received");
            let _ = shutdown_tx.send(true);
            (&mut server).await
        }
        // The server only returns early when it failed to start
        finished = &mut server => {
            let _ = shutdown_tx.send(true);
            finished
        }
    };
    let served = finished.map_err(|e| BotError::Internal(format!("Server task failed: {}", e)))?;

    if let Some(poller) = poller {
        if let Err(e) = poller.await {
            error!("Telegram poller task failed: {}", e);
        }
    }
    for job in jobs {
        let _ = job.await;
    }

    info!("Bye");
    served
}

/// Wait for SIGINT or SIGTERM
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            error!("Failed to listen for Ctrl-C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                error!("Failed to listen for SIGTERM: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}

fn print_banner() {
    println!(
        r#"
    ____  _____   __   __                __
   / __ )/  _/ | / /  / /   ____  ____  / /____  ______
  / __  |/ //  |/ /  / /   / __ \/ __ \/ //_/ / / / __ \
 / /_/ // // /|  /  / /___/ /_/ / /_/ / ,< / /_/ / /_/ /
/_____/___/_/ |_/  /_____/\____/\____/_/|_|\__,_/ .___/
                                               /_/
        BIN Lookup Bot v{}
        "#,
        env!("CARGO_PKG_VERSION")
    );
}
