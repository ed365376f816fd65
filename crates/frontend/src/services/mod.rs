pub mod console_service;
pub mod headline_service;
pub mod telegram_service;

use async_trait::async_trait;

use crate::config::FrontendKind;

/// A user-facing surface that feeds headlines to the classifier.
#[async_trait]
pub trait Frontend: Send {
    fn kind(&self) -> FrontendKind;

    /// Serves submissions until the user or the platform ends the session.
    async fn run(&mut self) -> anyhow::Result<()>;
}
