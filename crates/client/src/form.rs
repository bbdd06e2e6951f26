//! Dashboard create form model.
//!
//! Holds the draft being edited, the per-field errors from the last
//! failed validation, and the submission pipeline. One form instance
//! backs one create page; reference fields arrive pre-selected when
//! the page is opened from a user or company detail view.

use serde_json::{Map, Value};

use fleetdesk_core::submission::{CreateEndpoint, SubmissionPipeline, SubmitOutcome};
use fleetdesk_core::types::{EntityId, Timestamp};
use fleetdesk_core::validation::{dashboard_schema, FieldErrors};

/// Editable dashboard fields, mirroring the create schema.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DashboardDraft {
    pub last_login: Option<Timestamp>,
    pub active_status: bool,
    pub assigned_cars: i64,
    pub total_bookings: i64,
    pub user_id: Option<EntityId>,
    pub company_id: Option<EntityId>,
}

impl Default for DashboardDraft {
    fn default() -> Self {
        Self {
            last_login: None,
            active_status: false,
            assigned_cars: 0,
            total_bookings: 0,
            user_id: None,
            company_id: None,
        }
    }
}

impl DashboardDraft {
    /// Render the draft as a raw record for validation and submission.
    ///
    /// Unset references become explicit nulls so the schema reports
    /// them as missing required fields rather than silently dropping
    /// them.
    pub fn to_record(&self) -> Map<String, Value> {
        let mut record = Map::new();
        record.insert(
            "last_login".into(),
            match &self.last_login {
                Some(ts) => Value::String(ts.to_rfc3339()),
                None => Value::Null,
            },
        );
        record.insert("active_status".into(), Value::Bool(self.active_status));
        record.insert("assigned_cars".into(), Value::from(self.assigned_cars));
        record.insert("total_bookings".into(), Value::from(self.total_bookings));
        record.insert("user_id".into(), id_value(self.user_id));
        record.insert("company_id".into(), id_value(self.company_id));
        record
    }
}

fn id_value(id: Option<EntityId>) -> Value {
    match id {
        Some(id) => Value::String(id.to_string()),
        None => Value::Null,
    }
}

/// What the caller should do after a submit attempt.
#[derive(Debug, PartialEq, Eq)]
pub enum FormOutcome {
    /// Creation succeeded; navigate to the listing page.
    Navigate { to: &'static str },
    /// Validation failed; field errors are set on the form.
    Invalid,
    /// The endpoint call failed; the global error is set and the draft
    /// is preserved for retry.
    Failed,
    /// A prior submission is still in flight; nothing happened.
    Pending,
}

/// The create form: draft, error state, and submission pipeline.
pub struct DashboardForm {
    pub draft: DashboardDraft,
    field_errors: FieldErrors,
    error: Option<String>,
    pipeline: SubmissionPipeline,
}

impl DashboardForm {
    pub fn new() -> Self {
        Self {
            draft: DashboardDraft::default(),
            field_errors: FieldErrors::default(),
            error: None,
            pipeline: SubmissionPipeline::new(),
        }
    }

    /// Open the form with references pre-selected, as when navigating
    /// from a user or company detail view.
    pub fn with_references(user_id: Option<EntityId>, company_id: Option<EntityId>) -> Self {
        let mut form = Self::new();
        form.draft.user_id = user_id;
        form.draft.company_id = company_id;
        form
    }

    /// Per-field errors from the last failed validation.
    pub fn field_errors(&self) -> &FieldErrors {
        &self.field_errors
    }

    /// Global error from the last failed endpoint call.
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Whether the submit control should be disabled.
    pub fn is_submitting(&self) -> bool {
        self.pipeline.is_in_flight()
    }

    /// Run one submit attempt against the endpoint.
    ///
    /// On success the draft resets to defaults and the caller is told
    /// to navigate; on any failure the draft is untouched so the user
    /// can correct and retry.
    pub async fn submit<E>(&mut self, endpoint: &E) -> FormOutcome
    where
        E: CreateEndpoint + ?Sized,
    {
        self.error = None;
        self.field_errors.clear();

        let record = self.draft.to_record();
        match self
            .pipeline
            .submit(dashboard_schema(), &record, endpoint)
            .await
        {
            SubmitOutcome::AlreadyInFlight => FormOutcome::Pending,
            SubmitOutcome::Invalid(errors) => {
                self.field_errors = errors;
                FormOutcome::Invalid
            }
            SubmitOutcome::Created(_) => {
                self.draft = DashboardDraft::default();
                FormOutcome::Navigate { to: "/dashboards" }
            }
            SubmitOutcome::Failed(err) => {
                self.error = Some(err.to_string());
                FormOutcome::Failed
            }
        }
    }
}

impl Default for DashboardForm {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use async_trait::async_trait;
    use fleetdesk_core::submission::SubmissionError;
    use serde_json::json;
    use uuid::Uuid;

    use super::*;

    struct StubEndpoint {
        fail: bool,
    }

    #[async_trait]
    impl CreateEndpoint for StubEndpoint {
        async fn create(&self, record: &Map<String, Value>) -> Result<Value, SubmissionError> {
            if self.fail {
                return Err(SubmissionError::Rejected {
                    status: 409,
                    message: "duplicate".into(),
                });
            }
            let mut stored = record.clone();
            stored.insert("id".into(), json!(Uuid::from_u128(99).to_string()));
            Ok(Value::Object(stored))
        }
    }

    fn filled_form() -> DashboardForm {
        DashboardForm::with_references(Some(Uuid::from_u128(1)), Some(Uuid::from_u128(2)))
    }

    #[tokio::test]
    async fn successful_submit_resets_and_navigates() {
        let mut form = filled_form();
        form.draft.assigned_cars = 7;

        let outcome = form.submit(&StubEndpoint { fail: false }).await;

        assert_eq!(outcome, FormOutcome::Navigate { to: "/dashboards" });
        assert_eq!(form.draft, DashboardDraft::default());
        assert!(form.field_errors().is_empty());
        assert!(form.error().is_none());
    }

    #[tokio::test]
    async fn missing_references_fail_validation_and_keep_the_draft() {
        let mut form = DashboardForm::new();
        form.draft.assigned_cars = 7;

        let outcome = form.submit(&StubEndpoint { fail: false }).await;

        assert_eq!(outcome, FormOutcome::Invalid);
        assert!(form.field_errors().contains("user_id"));
        assert!(form.field_errors().contains("company_id"));
        assert_eq!(form.draft.assigned_cars, 7);
    }

    #[tokio::test]
    async fn endpoint_failure_sets_global_error_and_keeps_the_draft() {
        let mut form = filled_form();
        form.draft.total_bookings = 3;

        let outcome = form.submit(&StubEndpoint { fail: true }).await;

        assert_eq!(outcome, FormOutcome::Failed);
        assert_eq!(form.draft.total_bookings, 3);
        let error = form.error().expect("global error must be set");
        assert!(error.contains("409"));
        assert!(error.contains("duplicate"));
    }

    #[tokio::test]
    async fn retry_after_failure_clears_the_stale_error() {
        let mut form = filled_form();

        let outcome = form.submit(&StubEndpoint { fail: true }).await;
        assert_eq!(outcome, FormOutcome::Failed);
        assert!(form.error().is_some());

        let outcome = form.submit(&StubEndpoint { fail: false }).await;
        assert_eq!(outcome, FormOutcome::Navigate { to: "/dashboards" });
        assert!(form.error().is_none());
    }
}
