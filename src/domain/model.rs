use serde::{Deserialize, Serialize};

use crate::utils::error::GENERIC_FAILURE_MESSAGE;

/// Field values of one contact form instance.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormInputs {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub service: String,
    pub message: String,
}

impl FormInputs {
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

/// Body of `POST /api/leads`. Built once per submission and dropped when
/// the call resolves.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeadSubmission {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub service: String,
    pub message: String,
    pub subdomain: String,
}

impl LeadSubmission {
    pub fn from_inputs(inputs: &FormInputs, hostname: &str) -> Self {
        Self {
            name: inputs.name.clone(),
            email: inputs.email.clone(),
            phone: inputs.phone.clone(),
            service: inputs.service.clone(),
            message: inputs.message.clone(),
            subdomain: origin_label(hostname).to_string(),
        }
    }
}

/// First dot-delimited label of `hostname`; attributes a lead to the site
/// that produced it.
pub fn origin_label(hostname: &str) -> &str {
    hostname.split('.').next().unwrap_or(hostname)
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum FormStatus {
    #[default]
    Idle,
    Loading,
    Success,
    Error {
        message: String,
    },
}

impl FormStatus {
    pub fn is_loading(&self) -> bool {
        matches!(self, FormStatus::Loading)
    }

    pub fn error_message(&self) -> Option<&str> {
        match self {
            FormStatus::Error { message } => Some(message),
            _ => None,
        }
    }

    /// Text for the error box; `None` outside the error state.
    pub fn display_error(&self) -> Option<&str> {
        self.error_message().map(|m| {
            if m.is_empty() {
                GENERIC_FAILURE_MESSAGE
            } else {
                m
            }
        })
    }

    pub fn submit_label(&self) -> &'static str {
        if self.is_loading() {
            "Sending..."
        } else {
            "Send Message"
        }
    }
}
