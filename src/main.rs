use clap::Parser;
use spreaks::app::export::{render_contact, render_show, render_user};
use spreaks::core::user::fetch_profile;
use spreaks::utils::{logger, validation::Validate};
use spreaks::{CliConfig, Command, Resource, Settings, Show, SpreakerClient, SpreaksError, Target, User};

async fn run(config: &CliConfig, settings: &Settings) -> Result<String, SpreaksError> {
    settings.validate()?;

    let client = SpreakerClient::from_config(settings)?;
    let target: Target = config.target().parse()?;

    match &config.command {
        Command::User { .. } => {
            let user = User::fetch(&client, &target).await?;
            render_user(&user, settings.format)
        }
        Command::Show { .. } => {
            let show = Show::fetch(&client, &target).await?;
            render_show(&show, settings.format)
        }
        Command::Contact { .. } => {
            // 聯絡資訊只在基本資料中，不需要抓列表
            let user = fetch_profile(&client, &target).await?;
            render_contact(&user.contact(), settings.format)
        }
    }
}

fn report_failure(e: &SpreaksError) -> ! {
    tracing::error!("❌ Request failed: {}", e);
    tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());

    eprintln!("❌ {}", e.user_friendly_message());
    eprintln!("💡 {}", e.recovery_suggestion());
    std::process::exit(e.exit_code());
}

#[tokio::main]
async fn main() {
    let config = CliConfig::parse();

    if config.json_logs {
        logger::init_json_logger(config.verbose);
    } else {
        logger::init_cli_logger(config.verbose);
    }

    let settings = match config.resolve_settings() {
        Ok(settings) => settings,
        Err(e) => report_failure(&e),
    };

    if config.verbose {
        tracing::debug!("Resolved settings: {:?}", settings);
    }

    match run(&config, &settings).await {
        Ok(output) => println!("{}", output),
        Err(e) => report_failure(&e),
    }
}
