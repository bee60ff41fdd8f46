use crate::domain::content::SiteContent;
use crate::domain::ports::ContentProvider;
use crate::utils::error::{Result, SiteError};
use crate::utils::validation::Validate;
use regex::Regex;
use std::path::Path;

const DEMO_CONTENT: &str = include_str!("../../content/demo.toml");

/// Content held in memory for the life of the process.
#[derive(Debug, Clone)]
pub struct StaticContent {
    content: SiteContent,
}

impl StaticContent {
    pub fn new(content: SiteContent) -> Self {
        Self { content }
    }

    pub fn demo() -> Result<Self> {
        parse_toml_content(DEMO_CONTENT).map(Self::new)
    }

    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        load_content(path).map(Self::new)
    }
}

impl ContentProvider for StaticContent {
    fn content(&self) -> &SiteContent {
        &self.content
    }
}

/// Loads a content file, choosing the parser by extension (`.json` or TOML).
pub fn load_content<P: AsRef<Path>>(path: P) -> Result<SiteContent> {
    let path = path.as_ref();
    tracing::debug!("Loading site content from {}", path.display());

    let raw = std::fs::read_to_string(path)?;
    let is_json = path
        .extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));

    let content = if is_json {
        parse_json_content(&raw)?
    } else {
        parse_toml_content(&raw)?
    };

    tracing::info!(
        "Loaded content for '{}' ({} services, {} team members)",
        content.business.name,
        content.services.len(),
        content.team.len()
    );
    Ok(content)
}

pub fn parse_toml_content(raw: &str) -> Result<SiteContent> {
    let processed = substitute_env_vars(raw)?;
    let content: SiteContent = toml::from_str(&processed)?;
    content.validate()?;
    Ok(content)
}

pub fn parse_json_content(raw: &str) -> Result<SiteContent> {
    let processed = substitute_env_vars(raw)?;
    let content: SiteContent = serde_json::from_str(&processed)?;
    content.validate()?;
    Ok(content)
}

/// Replaces `${VAR}` with the environment value; unset variables are left
/// as written.
fn substitute_env_vars(content: &str) -> Result<String> {
    let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| SiteError::ConfigError {
        message: format!("env substitution pattern failed to compile: {}", e),
    })?;

    let result = re.replace_all(content, |caps: &regex::Captures| {
        let var_name = &caps[1];
        std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
    });

    Ok(result.to_string())
}
