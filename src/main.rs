use lambda_http::Error;

use samples_api::{config::Config, logging, run_app};

#[tokio::main]
async fn main() -> Result<(), Error> {
    let config = Config::from_env()?;
    logging::init_logger(config.log_level);
    run_app(config).await
}
