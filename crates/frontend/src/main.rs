use dotenvy::dotenv;
use std::sync::Arc;
use tracing::{debug, info};

use classifier::Pipeline;
use common::logger;

use crate::config::{AppConfig, FrontendConfig};
use crate::services::Frontend;
use crate::services::console_service::ConsoleService;
use crate::services::headline_service::HeadlineService;
use crate::services::telegram_service::TelegramService;

mod config;
mod presenter;
mod services;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();
    logger::setup_logger();
    debug!("System starting up...");

    let config = AppConfig::from_env()?;
    debug!("Configured for the {} frontend", config.frontend.kind());

    // Fitted exactly once; every request reads this instance
    let pipeline = Arc::new(Pipeline::fit_default()?);
    info!(
        "Model ready: {} terms, labels {:?}",
        pipeline.vocabulary_size(),
        pipeline.classes()
    );

    let service = Arc::new(HeadlineService::new(pipeline));

    let mut frontend: Box<dyn Frontend> = match config.frontend {
        FrontendConfig::Console => Box::new(ConsoleService::stdio(service)),
        FrontendConfig::Telegram { token } => Box::new(TelegramService::new(token, service)),
    };

    info!("Serving headlines through the {} frontend", frontend.kind());
    frontend.run().await
}
