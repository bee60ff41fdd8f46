use serde::{Deserialize, Serialize};

use crate::utils::error::{Result, SiteError};
use crate::utils::validation::{validate_non_empty_string, Validate};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SiteContent {
    pub business: BusinessInfo,
    pub about: AboutContent,
    #[serde(default)]
    pub team: Vec<TeamMember>,
    #[serde(default)]
    pub services: Vec<Service>,
    pub images: Option<Images>,
    pub copy: Option<CopyOverrides>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BusinessInfo {
    pub name: String,
    pub established: i32,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub address: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AboutContent {
    pub title: String,
    pub mission: String,
    pub story: String,
    #[serde(default)]
    pub values: Vec<ValueItem>,
    #[serde(default)]
    pub features: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ValueItem {
    pub title: String,
    pub description: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TeamMember {
    pub name: String,
    pub role: String,
    pub bio: String,
    pub image: String,
    #[serde(default)]
    pub specialties: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Service {
    pub slug: String,
    pub title: String,
    pub description: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Images {
    pub about: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CopyOverrides {
    #[serde(alias = "team_title")]
    pub team_title: Option<String>,
    #[serde(alias = "team_subtitle")]
    pub team_subtitle: Option<String>,
}

impl SiteContent {
    pub fn service_slugs(&self) -> Vec<&str> {
        self.services.iter().map(|s| s.slug.as_str()).collect()
    }

    pub fn service(&self, slug: &str) -> Option<&Service> {
        self.services.iter().find(|s| s.slug == slug)
    }
}

impl Validate for SiteContent {
    fn validate(&self) -> Result<()> {
        validate_non_empty_string("business.name", &self.business.name)?;

        let mut seen = std::collections::HashSet::new();
        for service in &self.services {
            validate_non_empty_string("services.slug", &service.slug)?;
            if !seen.insert(service.slug.as_str()) {
                return Err(SiteError::InvalidConfigValueError {
                    field: "services.slug".to_string(),
                    value: service.slug.clone(),
                    reason: "Service slugs must be unique".to_string(),
                });
            }
        }

        Ok(())
    }
}
