mod cli;
mod evaluate;
mod infra;
mod routes;
mod server;

use nexus_risk::error::AppError;

pub async fn run() -> Result<(), AppError> {
    cli::run().await
}
