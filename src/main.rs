use clap::Parser;
use site_leads::config::{Command, LogFormat, SubmitArgs};
use site_leads::core::about::current_year;
use site_leads::core::ContentProvider;
use site_leads::domain::model::FormStatus;
use site_leads::utils::{logger, validation};
use site_leads::utils::validation::Validate;
use site_leads::{AboutPage, CliConfig, ContactForm, DashboardClient, SiteError, StaticContent};

#[tokio::main(flavor = "current_thread")]
async fn main() {
    let config = CliConfig::parse();

    match config.log_format {
        LogFormat::Compact => logger::init_cli_logger(config.verbose),
        LogFormat::Json => logger::init_json_logger(config.verbose),
    }

    tracing::debug!("CLI config: {:?}", config);

    if let Err(e) = run(&config).await {
        tracing::error!("❌ {} (exit code {})", e, e.exit_code());
        tracing::debug!("💡 Recovery suggestion: {}", e.recovery_suggestion());

        eprintln!("❌ {}", e.user_friendly_message());
        eprintln!("💡 {}", e.recovery_suggestion());
        std::process::exit(e.exit_code());
    }
}

async fn run(config: &CliConfig) -> site_leads::Result<()> {
    let content = match &config.content {
        Some(path) => StaticContent::from_file(path)?,
        None => StaticContent::demo()?,
    };

    match &config.command {
        Command::About => {
            let page = AboutPage::build(content.content(), current_year());
            print!("{}", page.render_text());
            Ok(())
        }
        Command::Services => {
            for service in &content.content().services {
                println!("{}\t{}", service.slug, service.title);
            }
            Ok(())
        }
        Command::Submit(args) => submit(config, &content, args).await,
    }
}

async fn submit(config: &CliConfig, content: &StaticContent, args: &SubmitArgs) -> site_leads::Result<()> {
    let inputs = args.form_inputs();
    validation::validate_form_inputs(&inputs, &content.content().service_slugs())?;

    let site_config = config.site_config()?;
    site_config.validate()?;

    let client = DashboardClient::new(&site_config)?;
    tracing::info!("Dashboard endpoint: {}", client.leads_url());

    let mut form = ContactForm::new(client, &content.content().services);
    form.set_inputs(inputs);

    let Some(outcome) = form.submit(&args.hostname).await else {
        return Err(SiteError::ConfigError {
            message: "a submission is already pending".to_string(),
        });
    };

    // Failures surface through the returned error and its exit code.
    if *form.status() == FormStatus::Success {
        println!("✅ Message Sent!");
        println!("Thank you for reaching out. We'll be in touch soon.");
    }

    outcome.map_err(SiteError::from)
}
