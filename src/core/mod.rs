pub mod about;
pub mod form;

pub use crate::domain::content::SiteContent;
pub use crate::domain::model::{FormInputs, FormStatus, LeadSubmission};
pub use crate::domain::ports::{ConfigProvider, ContentProvider, LeadSink};
pub use crate::utils::error::Result;
