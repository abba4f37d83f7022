use clap::Parser;
use setcard::utils::logger;
use setcard::CliConfig;

fn main() -> anyhow::Result<()> {
    let config = CliConfig::parse();

    let settings = match config.settings() {
        Ok(settings) => settings,
        Err(e) => {
            eprintln!("error: {}", e.user_friendly_message());
            eprintln!("hint: {}", e.recovery_suggestion());
            std::process::exit(1);
        }
    };

    logger::init_from_settings(config.verbose, &settings, "warn");
    tracing::debug!("CLI config: {:?}", config);

    match settings.encoder().encode(&config.spec) {
        Ok(filename) => {
            println!("{}", filename);
            Ok(())
        }
        Err(e) => {
            tracing::debug!("Cannot encode {:?}: {} ({:?})", config.spec, e, e.category());
            eprintln!("error: {}", e.user_friendly_message());
            eprintln!("hint: {}", e.recovery_suggestion());
            std::process::exit(1);
        }
    }
}
