use clap::Parser;
use color_eyre::eyre::Result;
use secrecy::ExposeSecret;
use std::process::ExitCode;

use slack_release_notify::{
    ActionsReporter, Args, Inputs, RunOutcome, forge::github::Github, run,
    slack::client::SlackClient,
};

fn initialize_logger(debug: bool) -> Result<()> {
    let filter = if debug {
        simplelog::LevelFilter::Debug
    } else {
        simplelog::LevelFilter::Info
    };

    let config = simplelog::ConfigBuilder::new()
        .add_filter_allow_str("slack_release_notify")
        .build();

    simplelog::TermLogger::init(
        filter,
        config,
        simplelog::TerminalMode::Mixed,
        simplelog::ColorChoice::Auto,
    )?;

    Ok(())
}

async fn notify(
    args: &Args,
    inputs: &Inputs,
) -> slack_release_notify::Result<()> {
    let source = Github::new(args.remote_config())?;
    let notifier = SlackClient::new(&args.slack_api_url)?;

    run(inputs, &source, &notifier).await
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<ExitCode> {
    color_eyre::install()?;

    let args = Args::parse();

    initialize_logger(args.debug)?;

    let inputs = args.inputs();
    let mut reporter = ActionsReporter::from_env();

    reporter.add_mask(inputs.slack_token.expose_secret())?;
    reporter.add_mask(inputs.github_token.expose_secret())?;

    let outcome = RunOutcome::from(notify(&args, &inputs).await);

    Ok(reporter.report(outcome))
}
