//! Climate webserver entry point

use clap::Parser;
use shared::logging;

use climate_webserver::{Args, ServerConfig, SqliteClimateStore, WebServer, WebServerResult};

#[tokio::main]
async fn main() -> WebServerResult<()> {
    let args = Args::parse();
    logging::init_tracing(Some(&args.log_level));

    let config = ServerConfig::from_args(args)?;
    logging::log_startup(
        "webserver",
        &format!(
            "climate API on {} (database {})",
            config.bind_address(),
            config.database_url
        ),
    );

    let connected = SqliteClimateStore::connect(&config.database_url, config.max_connections).await;
    let store = match connected {
        Ok(store) => store,
        Err(e) => {
            logging::log_error("webserver", "Opening climate database", &e);
            return Err(e);
        }
    };

    let webserver = WebServer::new(config.bind_address(), store.clone());
    let result = webserver.run().await;

    store.close().await;
    match &result {
        Ok(()) => logging::log_success("webserver", "WebServer stopped gracefully"),
        Err(e) => logging::log_error("webserver", "Serving", e),
    }
    result
}
