pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use adapters::content::StaticContent;
pub use adapters::http::DashboardClient;
pub use config::SiteConfig;
pub use self::core::{about::AboutPage, form::ContactForm};
pub use utils::error::{Result, SiteError, SubmissionError};
