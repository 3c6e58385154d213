//! QuickTranslate CLI entry point

use std::process::ExitCode;

use clap::Parser;

use quick_translate::cli::{
    app::{load_merged_config, run_oneshot, EXIT_ERROR, EXIT_USAGE_ERROR},
    args::{Cli, Commands},
    config_cmd::handle_config_command,
    logging::init_logging,
    presenter::Presenter,
    TranslateOptions,
};
use quick_translate::domain::config::AppConfig;
use quick_translate::infrastructure::XdgConfigStore;

#[tokio::main(flavor = "multi_thread", worker_threads = 2)]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);
    let presenter = Presenter::new();
    let store = XdgConfigStore::new();

    // Handle subcommands
    if let Some(Commands::Config { action }) = cli.command {
        if let Err(e) = handle_config_command(action, &store, &presenter).await {
            presenter.error(&e.to_string());
            return ExitCode::from(EXIT_ERROR);
        }
        return ExitCode::SUCCESS;
    }

    // Build CLI config from args
    let cli_config = AppConfig {
        api_key: None, // API key comes from env/file only
        endpoint: cli.endpoint.clone(),
        target: cli.target.clone(),
        report_empty: if cli.report_empty { Some(true) } else { None },
        languages: None,
    };

    let config = load_merged_config(&store, cli_config).await;

    let target = match config.target_code() {
        Ok(code) => code,
        Err(e) => {
            presenter.error(&e.to_string());
            return ExitCode::from(EXIT_USAGE_ERROR);
        }
    };

    let languages = match config.language_table() {
        Ok(table) => table,
        Err(e) => {
            presenter.error(&e.to_string());
            return ExitCode::from(EXIT_ERROR);
        }
    };

    let options = TranslateOptions {
        texts: cli.text,
        files: cli.files,
        api_key: config.api_key.clone(),
        endpoint: config.endpoint_or_default().to_string(),
        target,
        languages,
        report_empty: config.report_empty_or_default(),
    };

    run_oneshot(options).await
}
