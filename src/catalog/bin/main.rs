use std::{env, io};
use tokio::net::lookup_host;
use tracing::info;
use booklist::books::factory::create_book_repository;
use booklist::catalog::controller::build_router;
use booklist::core::controller::AppState;
use booklist::core::domain::Configuration;
use booklist::utils::logs::{log_level, setup_tracing, LOG_LEVEL_VAR};

type Error = Box<dyn std::error::Error + Send + Sync + 'static>;

#[tokio::main]
async fn main() -> Result<(), Error> {
    setup_tracing(log_level(env::var(LOG_LEVEL_VAR).ok()))?;

    let config = Configuration::from_env();
    let repository = create_book_repository(&config);
    let app = build_router(AppState::new(config.clone(), repository));

    let addr = lookup_host(config.bind_address()).await?
        .next()
        .ok_or_else(|| io::Error::new(io::ErrorKind::AddrNotAvailable,
                                      format!("cannot resolve {}", config.bind_address())))?;

    let server = axum::Server::try_bind(&addr)?.serve(app.into_make_service());
    info!(store = %config.store, "{}", config.listening_message());
    server.await?;
    Ok(())
}
