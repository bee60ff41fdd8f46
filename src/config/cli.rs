use super::SiteConfig;
use crate::domain::model::FormInputs;
use crate::utils::error::Result;
use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;
use std::time::Duration;

#[derive(Debug, Clone, Parser)]
#[command(name = "site-leads")]
#[command(about = "Contact form and About page tooling for a local-service business site")]
pub struct CliConfig {
    /// Dashboard base URL; overrides DASHBOARD_URL
    #[arg(long, global = true)]
    pub dashboard_url: Option<String>,

    /// Request timeout in seconds; overrides LEAD_REQUEST_TIMEOUT_SECS
    #[arg(long, global = true)]
    pub timeout_secs: Option<u64>,

    /// Content file (.toml or .json); the built-in demo content is used when omitted
    #[arg(long, global = true)]
    pub content: Option<PathBuf>,

    #[arg(long, global = true, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, global = true, value_enum, default_value_t = LogFormat::Compact)]
    pub log_format: LogFormat,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LogFormat {
    Compact,
    Json,
}

#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Print the About page
    About,
    /// List the services offered in the contact form
    Services,
    /// Send a lead to the dashboard
    Submit(SubmitArgs),
}

#[derive(Debug, Clone, Args)]
pub struct SubmitArgs {
    #[arg(long)]
    pub name: String,

    #[arg(long)]
    pub email: String,

    #[arg(long, default_value = "")]
    pub phone: String,

    /// Service slug, see `site-leads services`
    #[arg(long, default_value = "")]
    pub service: String,

    #[arg(long, default_value = "")]
    pub message: String,

    /// Hostname the lead is attributed to
    #[arg(long, env = "SITE_HOSTNAME", default_value = "localhost")]
    pub hostname: String,
}

impl SubmitArgs {
    pub fn form_inputs(&self) -> FormInputs {
        FormInputs {
            name: self.name.clone(),
            email: self.email.clone(),
            phone: self.phone.clone(),
            service: self.service.clone(),
            message: self.message.clone(),
        }
    }
}

impl CliConfig {
    /// Environment config with command-line flags applied on top.
    pub fn site_config(&self) -> Result<SiteConfig> {
        let mut config = SiteConfig::from_env()?;
        if let Some(url) = &self.dashboard_url {
            config = config.with_dashboard_url(url.clone());
        }
        if let Some(secs) = self.timeout_secs {
            config = config.with_timeout(Duration::from_secs(secs));
        }
        Ok(config)
    }
}
