//! # Submission Gateway
//!
//! The boundary a finished submission crosses on its way out of the wizard.
//! The shipped [`SimulatedGateway`] only waits a fixed delay and accepts;
//! anything that actually transmits records plugs in behind the same trait.
//!
//! [`drive_submission`] runs the second half of the wizard state machine:
//! once the gateway answers it moves the session to `Submitted`, or back to
//! editing at the review step if the gateway refused.

use crate::sessions::{SharedRegistry, WizardId};
use async_trait::async_trait;
use fashionos_core::{FashionError, SubmittedRecord};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use std::time::Duration;

/// Acknowledgement returned by a gateway.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubmissionReceipt {
    pub collection_name: String,
    pub designer_name: String,
    pub image_count: usize,
}

impl SubmissionReceipt {
    #[must_use]
    pub fn for_record(record: &SubmittedRecord) -> Self {
        Self {
            collection_name: record.collection_name.clone(),
            designer_name: record.designer_name.clone(),
            image_count: record.image_count(),
        }
    }
}

/// Destination for frozen submissions.
#[async_trait]
pub trait SubmissionGateway: Send + Sync {
    async fn submit(&self, record: &SubmittedRecord) -> Result<SubmissionReceipt, FashionError>;
}

/// Gateway that waits `delay` and then accepts everything.
#[derive(Debug, Clone, Copy)]
pub struct SimulatedGateway {
    delay: Duration,
}

impl SimulatedGateway {
    #[must_use]
    pub fn new(delay: Duration) -> Self {
        Self { delay }
    }
}

impl Default for SimulatedGateway {
    fn default() -> Self {
        Self::new(Duration::from_millis(
            fashionos_core::primitives::DEFAULT_SUBMIT_DELAY_MS,
        ))
    }
}

#[async_trait]
impl SubmissionGateway for SimulatedGateway {
    async fn submit(&self, record: &SubmittedRecord) -> Result<SubmissionReceipt, FashionError> {
        if !self.delay.is_zero() {
            tokio::time::sleep(self.delay).await;
        }
        Ok(SubmissionReceipt::for_record(record))
    }
}

/// Hand `record` to the gateway and settle the session with the outcome.
///
/// The registry lock is not held while the gateway runs. A session deleted
/// in the meantime is left alone.
pub async fn drive_submission(
    registry: SharedRegistry,
    gateway: Arc<dyn SubmissionGateway>,
    id: WizardId,
    record: SubmittedRecord,
) {
    let outcome = gateway.submit(&record).await;

    let mut wizards = registry.write().await;
    let Ok(wizard) = wizards.get_mut(id) else {
        tracing::warn!(wizard_id = id, "Session discarded before submission settled");
        return;
    };

    match outcome {
        Ok(receipt) => {
            if wizard.complete_submission().is_some() {
                tracing::info!(
                    wizard_id = id,
                    collection = %receipt.collection_name,
                    images = receipt.image_count,
                    "Submission accepted"
                );
            }
        }
        Err(e) => {
            tracing::warn!(wizard_id = id, error = %e, "Submission failed, returning to review");
            wizard.abort_submission();
        }
    }
}

// =============================================================================
// TESTS
// =============================================================================
