mod cli;
mod fill;
mod infra;
mod routes;
mod server;

use va_form_filler::error::AppError;

pub async fn run() -> Result<(), AppError> {
    cli::run().await
}
