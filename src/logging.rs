use tracing::Level;

pub fn init_logger(level: Level) {
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_target(false)
        // CloudWatch stamps every line already
        .without_time()
        .init();
}
