mod cli;
mod demo;
mod infra;
mod routes;
mod server;

use onboard_iq::error::AppError;

pub async fn run() -> Result<(), AppError> {
    cli::run().await
}
