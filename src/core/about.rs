use crate::domain::content::{SiteContent, TeamMember, ValueItem};
use chrono::Datelike;
use std::fmt;

pub const DEFAULT_HERO_IMAGE: &str =
    "https://images.unsplash.com/photo-1521737711867-e3b97375f902?w=1920&h=1080&fit=crop";
pub const DEFAULT_TEAM_TITLE: &str = "Meet Our Team";
pub const DEFAULT_TEAM_SUBTITLE: &str = "Our talented team brings together diverse skills and experiences to deliver exceptional results for every client.";

pub fn current_year() -> i32 {
    chrono::Local::now().year()
}

/// Everything the About page shows, resolved from content with fallbacks
/// applied.
#[derive(Debug, Clone)]
pub struct AboutPage<'a> {
    pub meta_title: String,
    pub meta_description: &'a str,
    pub title: &'a str,
    pub mission: &'a str,
    pub hero_image: &'a str,
    pub story_paragraphs: Vec<&'a str>,
    pub years_in_business: u32,
    pub values: &'a [ValueItem],
    pub team_title: &'a str,
    pub team_subtitle: &'a str,
    pub team: &'a [TeamMember],
    pub difference_heading: String,
    pub features: &'a [String],
}

impl<'a> AboutPage<'a> {
    pub fn build(content: &'a SiteContent, current_year: i32) -> Self {
        let business = &content.business;
        let about = &content.about;
        let copy = content.copy.as_ref();

        let hero_image = content
            .images
            .as_ref()
            .and_then(|i| i.about.as_deref())
            .filter(|url| !url.is_empty())
            .unwrap_or(DEFAULT_HERO_IMAGE);

        let story_paragraphs = about
            .story
            .split("\n\n")
            .map(str::trim)
            .filter(|p| !p.is_empty())
            .collect();

        let years_in_business =
            u32::try_from(current_year.saturating_sub(business.established)).unwrap_or(0);

        Self {
            meta_title: format!("About Us | {}", business.name),
            meta_description: &about.mission,
            title: &about.title,
            mission: &about.mission,
            hero_image,
            story_paragraphs,
            years_in_business,
            values: &about.values,
            team_title: copy
                .and_then(|c| c.team_title.as_deref())
                .filter(|t| !t.is_empty())
                .unwrap_or(DEFAULT_TEAM_TITLE),
            team_subtitle: copy
                .and_then(|c| c.team_subtitle.as_deref())
                .filter(|t| !t.is_empty())
                .unwrap_or(DEFAULT_TEAM_SUBTITLE),
            team: &content.team,
            difference_heading: format!("The {} Difference", business.name),
            features: &about.features,
        }
    }

    pub fn years_label(&self) -> String {
        format!("{}+", self.years_in_business)
    }

    /// Plain-text rendering for terminals.
    pub fn render_text(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for AboutPage<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.meta_title)?;
        writeln!(f, "{}", "=".repeat(self.meta_title.chars().count()))?;
        writeln!(f)?;
        writeln!(f, "{}", self.title)?;
        writeln!(f, "{}", self.mission)?;
        writeln!(f)?;

        writeln!(f, "OUR STORY - How It All Started")?;
        for paragraph in &self.story_paragraphs {
            writeln!(f, "{}", paragraph)?;
            writeln!(f)?;
        }
        writeln!(f, "{} Years of Excellence", self.years_label())?;
        writeln!(f)?;

        if !self.values.is_empty() {
            writeln!(f, "OUR VALUES - What We Believe In")?;
            for value in self.values {
                writeln!(f, "  * {}: {}", value.title, value.description)?;
            }
            writeln!(f)?;
        }

        if !self.team.is_empty() {
            writeln!(f, "OUR TEAM - {}", self.team_title)?;
            writeln!(f, "{}", self.team_subtitle)?;
            for member in self.team {
                writeln!(f, "  {} ({})", member.name, member.role)?;
                writeln!(f, "    {}", member.bio)?;
                if !member.specialties.is_empty() {
                    writeln!(f, "    [{}]", member.specialties.join("] ["))?;
                }
            }
            writeln!(f)?;
        }

        if !self.features.is_empty() {
            writeln!(f, "WHY CHOOSE US - {}", self.difference_heading)?;
            for feature in self.features {
                writeln!(f, "  + {}", feature)?;
            }
            writeln!(f)?;
        }

        writeln!(f, "Ready to Get Started? Contact us today for a free quote.")
    }
}
