use anyhow::Result;
use site_leads::adapters::content::load_content;
use site_leads::core::about::DEFAULT_HERO_IMAGE;
use site_leads::core::ContentProvider;
use site_leads::{AboutPage, SiteError, StaticContent};
use std::io::Write;
use tempfile::NamedTempFile;

#[test]
fn test_load_toml_content_file() -> Result<()> {
    let mut file = NamedTempFile::with_suffix(".toml")?;
    file.write_all(
        br#"
[business]
name = "Bright Spark Electric"
established = 2001

[about]
title = "About Bright Spark"
mission = "Safe wiring, on time."
story = "Founded by two electricians.\n\nStill family run."
features = ["Licensed", "24/7 emergency service"]

[[services]]
slug = "panel-upgrade"
title = "Panel Upgrades"

[[services]]
slug = "ev-charger"
title = "EV Charger Installation"
"#,
    )?;

    let provider = StaticContent::from_file(file.path())?;
    let content = provider.content();

    assert_eq!(content.business.name, "Bright Spark Electric");
    assert_eq!(content.service_slugs(), vec!["panel-upgrade", "ev-charger"]);

    let page = AboutPage::build(content, 2026);
    assert_eq!(page.meta_title, "About Us | Bright Spark Electric");
    assert_eq!(page.story_paragraphs.len(), 2);
    assert_eq!(page.years_label(), "25+");
    assert_eq!(page.hero_image, DEFAULT_HERO_IMAGE);
    Ok(())
}

#[test]
fn test_load_json_content_file() -> Result<()> {
    let mut file = NamedTempFile::with_suffix(".json")?;
    file.write_all(
        br#"{
            "business": {"name": "Clear View Windows", "established": 2015},
            "about": {"title": "About", "mission": "Streak free.", "story": "Since 2015."},
            "team": [{
                "name": "Ana",
                "role": "Owner",
                "bio": "Climbs ladders.",
                "image": "https://img.example/ana.jpg",
                "specialties": ["High-rise"]
            }],
            "images": {"about": "https://img.example/hero.jpg"},
            "copy": {"teamSubtitle": "Small crew, big windows."}
        }"#,
    )?;

    let content = load_content(file.path())?;
    let page = AboutPage::build(&content, 2026);

    assert_eq!(page.hero_image, "https://img.example/hero.jpg");
    assert_eq!(page.team_subtitle, "Small crew, big windows.");
    assert_eq!(page.team.len(), 1);
    assert!(content.services.is_empty());
    Ok(())
}

#[test]
fn test_missing_file_is_io_error() {
    let err = load_content("/nonexistent/site-content.toml").unwrap_err();
    assert!(matches!(err, SiteError::IoError(_)));
}

#[test]
fn test_duplicate_service_slug_rejected_on_load() -> Result<()> {
    let mut file = NamedTempFile::with_suffix(".toml")?;
    file.write_all(
        br#"
[business]
name = "Dup Co"
established = 2020

[about]
title = "About"
mission = "M"
story = "S"

[[services]]
slug = "cleaning"
title = "Cleaning"

[[services]]
slug = "cleaning"
title = "Deep Cleaning"
"#,
    )?;

    let err = load_content(file.path()).unwrap_err();
    assert!(matches!(err, SiteError::InvalidConfigValueError { .. }));
    Ok(())
}
