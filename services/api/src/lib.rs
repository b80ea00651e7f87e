mod cli;
mod diagnose;
mod infra;
mod routes;
mod server;

use kosen_match::error::AppError;

pub async fn run() -> Result<(), AppError> {
    cli::run().await
}
