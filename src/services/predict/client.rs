use reqwest::Client;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tracing::{debug, info, warn};

use super::types::PredictionResult;
use crate::claim::ClaimInput;
use crate::config::Config;
use crate::error::PredictionError;
use crate::kernel::event::{Event, PredictionOutcome, SubmissionId};

#[derive(Clone)]
pub struct PredictionService {
    client: Client,
    endpoint: String,
}

impl PredictionService {
    pub fn new(config: &Config) -> Self {
        let mut builder = Client::builder();
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }

        let client = builder.build().unwrap_or_else(|e| {
            warn!("Falling back to a default HTTP client (configured timeout dropped): {}", e);
            Client::new()
        });

        Self {
            client,
            endpoint: config.endpoint.clone(),
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// One POST, no retry.
    pub async fn predict(&self, claim: &ClaimInput) -> Result<PredictionResult, PredictionError> {
        let response = self.client.post(&self.endpoint)
            .json(claim)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(PredictionError::Status(status));
        }

        let body = response.text().await?;
        let result: PredictionResult = serde_json::from_str(&body)?;
        Ok(result)
    }

    /// Runs `predict` in the background and reports back to the shell
    /// as `Event::PredictionCompleted`.
    pub fn dispatch(&self, submission: SubmissionId, claim: ClaimInput, tx: mpsc::Sender<Event>) -> JoinHandle<()> {
        let service = self.clone();

        tokio::spawn(async move {
            let outcome = match service.predict(&claim).await {
                Ok(result) => {
                    info!(
                        "Prediction {} received: risk {:.3}, {} reason(s)",
                        submission,
                        result.denial_risk,
                        result.reasons.len()
                    );
                    PredictionOutcome::Succeeded(result)
                }
                Err(e) => {
                    warn!("Prediction {} failed: {}", submission, e);
                    PredictionOutcome::Failed(e.to_string())
                }
            };

            if tx.send(Event::PredictionCompleted { submission, outcome }).await.is_err() {
                debug!("Shell closed before prediction {} completed", submission);
            }
        })
    }
}
