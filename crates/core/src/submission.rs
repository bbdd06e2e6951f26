//! Single-record submission pipeline.
//!
//! Orchestrates one create attempt: batch validation against a schema,
//! then exactly one call to the create endpoint. The pipeline state is
//! an explicit enum (not ad hoc flags) so illegal combinations such as
//! "submitting while invalid" are unrepresentable, and re-entry while a
//! submission is in flight is refused instead of issuing a duplicate
//! network call.

use std::sync::Mutex;

use async_trait::async_trait;
use serde_json::{Map, Value};

use crate::validation::{validate_record, FieldErrors, FieldRule};

/// Where the pipeline currently is.
///
/// `Idle -> Validating -> (Submitting | back to Idle)`; both terminal
/// outcomes return the pipeline to `Idle` so the user can retry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmissionState {
    Idle,
    Validating,
    Submitting,
}

/// The create endpoint collaborator. Takes a validated record, returns
/// the stored record (with its generated identifier) or a submission
/// error. May suspend indefinitely until the network responds.
#[async_trait]
pub trait CreateEndpoint: Send + Sync {
    async fn create(&self, record: &Map<String, Value>) -> Result<Value, SubmissionError>;
}

/// Why a create call failed. Presented to the user as a single global
/// error; no distinction is made between transient and permanent
/// failures, and retry is always a manual re-submit.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SubmissionError {
    /// The request never produced a server response (network, DNS, TLS).
    #[error("Transport error: {0}")]
    Transport(String),

    /// The server answered with a non-success status.
    #[error("Create rejected ({status}): {message}")]
    Rejected { status: u16, message: String },
}

/// Result of one submit attempt.
#[derive(Debug)]
pub enum SubmitOutcome {
    /// A prior submission is still pending; nothing was validated or
    /// sent. The submit control should be inert in this window.
    AlreadyInFlight,
    /// Validation failed; errors are keyed by field and the caller's
    /// input is untouched. No network call was made.
    Invalid(FieldErrors),
    /// The endpoint acknowledged creation; payload is the stored record.
    Created(Value),
    /// The endpoint call failed; caller input must be preserved so the
    /// user can retry without re-entering data.
    Failed(SubmissionError),
}

/// The pipeline itself. Shareable (`&self` API, internal state behind a
/// mutex) so a UI can hold it alongside the draft it submits.
pub struct SubmissionPipeline {
    state: Mutex<SubmissionState>,
}

impl SubmissionPipeline {
    pub fn new() -> Self {
        Self {
            state: Mutex::new(SubmissionState::Idle),
        }
    }

    pub fn state(&self) -> SubmissionState {
        *self.state.lock().expect("submission state lock poisoned")
    }

    pub fn is_in_flight(&self) -> bool {
        self.state() != SubmissionState::Idle
    }

    /// Claim the pipeline for a new attempt. Fails if an attempt is
    /// already validating or submitting.
    fn try_begin(&self) -> bool {
        let mut state = self.state.lock().expect("submission state lock poisoned");
        if *state == SubmissionState::Idle {
            *state = SubmissionState::Validating;
            true
        } else {
            false
        }
    }

    fn transition(&self, to: SubmissionState) {
        *self.state.lock().expect("submission state lock poisoned") = to;
    }

    /// Run one create attempt: validate `record` against `schema`, and
    /// on success send the coerced record to `endpoint`.
    ///
    /// Exactly one endpoint call happens per successful validation
    /// pass; zero otherwise. Cancellation is not supported -- once the
    /// endpoint call starts it resolves to `Created` or `Failed`.
    pub async fn submit<E>(
        &self,
        schema: &[FieldRule],
        record: &Map<String, Value>,
        endpoint: &E,
    ) -> SubmitOutcome
    where
        E: CreateEndpoint + ?Sized,
    {
        if !self.try_begin() {
            return SubmitOutcome::AlreadyInFlight;
        }

        let coerced = match validate_record(schema, record) {
            Ok(coerced) => coerced,
            Err(errors) => {
                self.transition(SubmissionState::Idle);
                return SubmitOutcome::Invalid(errors);
            }
        };

        self.transition(SubmissionState::Submitting);
        let result = endpoint.create(&coerced).await;
        self.transition(SubmissionState::Idle);

        match result {
            Ok(stored) => SubmitOutcome::Created(stored),
            Err(error) => SubmitOutcome::Failed(error),
        }
    }
}

impl Default for SubmissionPipeline {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    use serde_json::json;
    use tokio::sync::Notify;

    use super::*;
    use crate::validation::dashboard_schema;

    /// Endpoint that counts calls and optionally parks until released.
    struct MockEndpoint {
        calls: AtomicUsize,
        fail: bool,
        entered: Notify,
        release: Notify,
        park: bool,
    }

    impl MockEndpoint {
        fn new() -> Self {
            Self {
                calls: AtomicUsize::new(0),
                fail: false,
                entered: Notify::new(),
                release: Notify::new(),
                park: false,
            }
        }

        fn failing() -> Self {
            Self {
                fail: true,
                ..Self::new()
            }
        }

        fn parked() -> Self {
            Self {
                park: true,
                ..Self::new()
            }
        }

        fn calls(&self) -> usize {
            self.calls.load(Ordering::SeqCst)
        }
    }

    #[async_trait]
    impl CreateEndpoint for MockEndpoint {
        async fn create(&self, record: &Map<String, Value>) -> Result<Value, SubmissionError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            if self.park {
                self.entered.notify_one();
                self.release.notified().await;
            }
            if self.fail {
                return Err(SubmissionError::Rejected {
                    status: 500,
                    message: "boom".into(),
                });
            }
            let mut stored = record.clone();
            stored.insert("id".into(), json!("0190b3a5-0000-4000-8000-000000000001"));
            Ok(Value::Object(stored))
        }
    }

    fn valid_record() -> Map<String, Value> {
        let mut m = Map::new();
        m.insert("active_status".into(), json!(true));
        m.insert("user_id".into(), json!("7b4b2b1e-1111-4222-8333-444455556666"));
        m.insert(
            "company_id".into(),
            json!("7b4b2b1e-aaaa-4bbb-8ccc-ddddeeeeffff"),
        );
        m
    }

    #[tokio::test]
    async fn valid_record_is_created_with_one_call() {
        let pipeline = SubmissionPipeline::new();
        let endpoint = MockEndpoint::new();

        let outcome = pipeline
            .submit(dashboard_schema(), &valid_record(), &endpoint)
            .await;

        let stored = match outcome {
            SubmitOutcome::Created(Value::Object(map)) => map,
            other => panic!("expected Created object, got {other:?}"),
        };
        assert!(stored.contains_key("id"));
        assert_eq!(endpoint.calls(), 1);
        assert_eq!(pipeline.state(), SubmissionState::Idle);
    }

    #[tokio::test]
    async fn invalid_record_makes_no_network_call() {
        let pipeline = SubmissionPipeline::new();
        let endpoint = MockEndpoint::new();
        let mut record = valid_record();
        record.remove("active_status");

        let outcome = pipeline
            .submit(dashboard_schema(), &record, &endpoint)
            .await;

        match outcome {
            SubmitOutcome::Invalid(errors) => assert!(errors.contains("active_status")),
            other => panic!("expected Invalid, got {other:?}"),
        }
        assert_eq!(endpoint.calls(), 0);
        assert_eq!(pipeline.state(), SubmissionState::Idle);
    }

    #[tokio::test]
    async fn endpoint_failure_returns_failed_and_pipeline_recovers() {
        let pipeline = SubmissionPipeline::new();
        let endpoint = MockEndpoint::failing();

        let outcome = pipeline
            .submit(dashboard_schema(), &valid_record(), &endpoint)
            .await;
        match outcome {
            SubmitOutcome::Failed(SubmissionError::Rejected { status, .. }) => {
                assert_eq!(status, 500)
            }
            other => panic!("expected Failed, got {other:?}"),
        }

        // Manual retry works: the pipeline is back in Idle.
        assert_eq!(pipeline.state(), SubmissionState::Idle);
        let outcome = pipeline
            .submit(dashboard_schema(), &valid_record(), &endpoint)
            .await;
        assert!(matches!(outcome, SubmitOutcome::Failed(_)));
        assert_eq!(endpoint.calls(), 2);
    }

    #[tokio::test]
    async fn resubmit_while_pending_is_a_noop() {
        let pipeline = Arc::new(SubmissionPipeline::new());
        let endpoint = Arc::new(MockEndpoint::parked());

        let task = {
            let pipeline = Arc::clone(&pipeline);
            let endpoint = Arc::clone(&endpoint);
            tokio::spawn(async move {
                pipeline
                    .submit(dashboard_schema(), &valid_record(), &*endpoint)
                    .await
            })
        };

        // Wait until the first attempt is inside the endpoint call.
        endpoint.entered.notified().await;
        assert_eq!(pipeline.state(), SubmissionState::Submitting);

        let second = pipeline
            .submit(dashboard_schema(), &valid_record(), &*endpoint)
            .await;
        assert!(matches!(second, SubmitOutcome::AlreadyInFlight));

        endpoint.release.notify_one();
        let first = task.await.expect("submit task panicked");
        assert!(matches!(first, SubmitOutcome::Created(_)));

        // The refused re-entry never reached the endpoint.
        assert_eq!(endpoint.calls(), 1);
    }
}
