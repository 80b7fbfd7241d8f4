mod cli;
mod demo;
mod infra;
mod routes;
mod server;

use employee_roster::error::AppError;

pub async fn run() -> Result<(), AppError> {
    cli::run().await
}
