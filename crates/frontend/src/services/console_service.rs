use async_trait::async_trait;
use std::borrow::Cow;
use std::sync::Arc;
use tokio::io::{
    self, AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt, BufReader, Stdin, Stdout,
};
use tracing::{error, info, warn};

use crate::config::FrontendKind;
use crate::presenter;
use crate::services::Frontend;
use crate::services::headline_service::HeadlineService;

/// Terminal form: one headline per line, end of input closes the session.
pub struct ConsoleService<R, W> {
    service: Arc<HeadlineService>,
    reader: R,
    writer: W,
}

impl ConsoleService<BufReader<Stdin>, Stdout> {
    pub fn stdio(service: Arc<HeadlineService>) -> Self {
        Self::new(service, BufReader::new(io::stdin()), io::stdout())
    }
}

impl<R, W> ConsoleService<R, W>
where
    R: AsyncBufRead + Unpin + Send,
    W: AsyncWrite + Unpin + Send,
{
    pub fn new(service: Arc<HeadlineService>, reader: R, writer: W) -> Self {
        Self {
            service,
            reader,
            writer,
        }
    }

    async fn write_block(&mut self, text: &str) -> io::Result<()> {
        self.writer.write_all(text.as_bytes()).await?;
        self.writer.write_all(b"\n").await?;
        self.writer.flush().await
    }

    async fn write_prompt(&mut self) -> io::Result<()> {
        let prompt = format!("\n{}\n> ", presenter::prompt());
        self.writer.write_all(prompt.as_bytes()).await?;
        self.writer.flush().await
    }

    async fn serve(&mut self) -> io::Result<usize> {
        self.write_block(&presenter::header()).await?;

        let mut submissions = 0usize;
        let mut buf = Vec::new();
        loop {
            self.write_prompt().await?;

            buf.clear();
            match self.reader.read_until(b'\n', &mut buf).await {
                Ok(0) => break,
                Ok(_) => {}
                Err(e) => {
                    error!("Failed to read headline: {}", e);
                    break;
                }
            }

            let line = String::from_utf8_lossy(&buf);
            if let Cow::Owned(_) = line {
                warn!("Headline was not valid UTF-8, invalid bytes replaced");
            }

            let headline = line.trim_end_matches(['\n', '\r']);
            let outcome = self.service.classify(headline);
            self.write_block(&presenter::render(&outcome)).await?;
            submissions += 1;
        }

        self.write_block(&format!("\n{}", presenter::footer())).await?;
        Ok(submissions)
    }
}

#[async_trait]
impl<R, W> Frontend for ConsoleService<R, W>
where
    R: AsyncBufRead + Unpin + Send,
    W: AsyncWrite + Unpin + Send,
{
    fn kind(&self) -> FrontendKind {
        FrontendKind::Console
    }

    async fn run(&mut self) -> anyhow::Result<()> {
        match self.serve().await {
            Ok(submissions) => info!("Console session closed after {} submissions", submissions),
            Err(e) => error!("Console session ended on I/O error: {}", e),
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::headline_service::MockHeadlineClassifier;
    use common::models::Label;
    use mockall::predicate::eq;

    async fn run_session(mock: MockHeadlineClassifier, input: &str) -> String {
        run_session_bytes(mock, input.as_bytes()).await
    }

    async fn run_session_bytes(mock: MockHeadlineClassifier, input: &[u8]) -> String {
        let service = Arc::new(HeadlineService::new(Arc::new(mock)));
        let mut output = Vec::new();

        {
            let reader = BufReader::new(input);
            let mut console = ConsoleService::new(service, reader, &mut output);
            console.run().await.unwrap();
        }

        String::from_utf8(output).unwrap()
    }

    #[tokio::test]
    async fn test_session_classifies_each_line() {
        let mut mock = MockHeadlineClassifier::new();
        mock.expect_predict()
            .with(eq("Markets rally"))
            .times(1)
            .return_const(Label::Bullish);
        mock.expect_predict()
            .with(eq("Sensex crashes"))
            .times(1)
            .return_const(Label::Bearish);
        mock.expect_probabilities().returning(|_| Vec::new());

        let output = run_session(mock, "Markets rally\nSensex crashes\r\n").await;

        assert!(output.starts_with(presenter::TITLE));
        let bullish = output.find("Prediction: BULLISH").unwrap();
        let bearish = output.find("Prediction: BEARISH").unwrap();
        assert!(bullish < bearish);
        assert!(output.trim_end().ends_with(presenter::FOOTER));
    }

    #[tokio::test]
    async fn test_blank_lines_warn_without_classifying() {
        let mut mock = MockHeadlineClassifier::new();
        mock.expect_predict().times(0);
        mock.expect_probabilities().times(0);

        let output = run_session(mock, "\n   \n").await;

        assert_eq!(output.matches(presenter::EMPTY_INPUT_WARNING).count(), 2);
        assert!(!output.contains("Prediction:"));
    }

    #[tokio::test]
    async fn test_last_line_without_newline_is_submitted() {
        let mut mock = MockHeadlineClassifier::new();
        mock.expect_predict()
            .with(eq("RBI holds"))
            .times(1)
            .return_const(Label::Neutral);
        mock.expect_probabilities().returning(|_| Vec::new());

        let output = run_session(mock, "RBI holds").await;
        assert!(output.contains("Prediction: NEUTRAL"));
    }

    #[tokio::test]
    async fn test_empty_input_closes_immediately() {
        let mut mock = MockHeadlineClassifier::new();
        mock.expect_predict().times(0);

        let output = run_session(mock, "").await;

        assert!(output.contains(presenter::PLACEHOLDER));
        assert!(output.contains(presenter::FOOTER));
    }

    #[tokio::test]
    async fn test_invalid_utf8_line_does_not_end_session() {
        let mut mock = MockHeadlineClassifier::new();
        mock.expect_predict()
            .with(eq("Caf\u{FFFD} prices rise"))
            .times(1)
            .return_const(Label::Bullish);
        mock.expect_predict()
            .with(eq("RBI holds"))
            .times(1)
            .return_const(Label::Neutral);
        mock.expect_probabilities().returning(|_| Vec::new());

        let output = run_session_bytes(mock, b"Caf\xe9 prices rise\nRBI holds\n").await;

        assert!(output.contains("Prediction: BULLISH"));
        assert!(output.contains("Prediction: NEUTRAL"));
        assert!(output.contains(presenter::FOOTER));
    }
}
