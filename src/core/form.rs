use crate::domain::content::Service;
use crate::domain::model::{FormInputs, FormStatus, LeadSubmission};
use crate::domain::ports::LeadSink;
use crate::utils::error::SubmissionError;

/// One `<option>` of the service field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServiceOption {
    pub value: String,
    pub label: String,
}

/// A single contact form instance: its field values, its status, and the
/// sink its leads go to.
///
/// The status tag doubles as the in-flight guard. While it is
/// [`FormStatus::Loading`] a new submission is refused, so at most one
/// request is outstanding per form.
pub struct ContactForm<S: LeadSink> {
    sink: S,
    inputs: FormInputs,
    status: FormStatus,
    service_options: Vec<ServiceOption>,
}

impl<S: LeadSink> ContactForm<S> {
    pub fn new(sink: S, services: &[Service]) -> Self {
        let mut service_options = Vec::with_capacity(services.len() + 1);
        service_options.push(ServiceOption {
            value: String::new(),
            label: "Select a service".to_string(),
        });
        service_options.extend(services.iter().map(|s| ServiceOption {
            value: s.slug.clone(),
            label: s.title.clone(),
        }));

        Self {
            sink,
            inputs: FormInputs::default(),
            status: FormStatus::Idle,
            service_options,
        }
    }

    pub fn status(&self) -> &FormStatus {
        &self.status
    }

    pub fn inputs(&self) -> &FormInputs {
        &self.inputs
    }

    pub fn inputs_mut(&mut self) -> &mut FormInputs {
        &mut self.inputs
    }

    pub fn set_inputs(&mut self, inputs: FormInputs) {
        self.inputs = inputs;
    }

    pub fn service_options(&self) -> &[ServiceOption] {
        &self.service_options
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    /// Whether the submit control is enabled.
    pub fn can_submit(&self) -> bool {
        !self.status.is_loading()
    }

    /// Enters `Loading` and builds the lead from the current fields.
    /// Returns `None` without touching anything if a submission is already
    /// pending.
    pub fn begin_submit(&mut self, hostname: &str) -> Option<LeadSubmission> {
        if self.status.is_loading() {
            tracing::debug!("Submit ignored: a submission is already pending");
            return None;
        }

        tracing::debug!("Form status {:?} -> Loading", self.status);
        self.status = FormStatus::Loading;

        let lead = LeadSubmission::from_inputs(&self.inputs, hostname);
        tracing::info!(
            "Submitting lead from subdomain '{}' (service: '{}')",
            lead.subdomain,
            lead.service
        );
        Some(lead)
    }

    /// Applies the outcome of the pending submission. Fields are cleared on
    /// success and kept on failure so the user can resubmit as-is.
    pub fn finish_submit(&mut self, outcome: Result<(), SubmissionError>) {
        if !self.status.is_loading() {
            tracing::warn!("Submission outcome arrived with no submission pending; ignored");
            return;
        }

        match outcome {
            Ok(()) => {
                tracing::info!("Lead submitted");
                self.status = FormStatus::Success;
                self.inputs = FormInputs::default();
            }
            Err(e) => {
                tracing::error!("Form submission error: {}", e);
                self.status = FormStatus::Error {
                    message: e.message().to_string(),
                };
            }
        }
    }

    /// Runs one submission end to end and returns its outcome, which has
    /// already been applied to the status. Returns `None` when the call was
    /// suppressed because another one is pending.
    pub async fn submit(&mut self, hostname: &str) -> Option<Result<(), SubmissionError>> {
        let lead = self.begin_submit(hostname)?;
        let outcome = self.sink.send(&lead).await;
        self.finish_submit(outcome.clone());
        Some(outcome)
    }

    /// "Send another message": back to `Idle` with an empty form.
    pub fn reset(&mut self) {
        if self.status.is_loading() {
            tracing::debug!("Reset ignored while a submission is pending");
            return;
        }
        self.status = FormStatus::Idle;
        self.inputs = FormInputs::default();
    }
}
