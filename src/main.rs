use clap::Parser;
use std::io::Write;
use token_pusher::domain::ports::ConfigProvider;
use token_pusher::utils::logger;
use token_pusher::{
    curl_command, CliConfig, HttpTokenSink, PushError, Result, TokenPusher, TokenRequest,
};

#[tokio::main]
async fn main() {
    let config = CliConfig::parse();

    if config.json_logs {
        logger::init_json_logger();
    } else {
        logger::init_cli_logger(config.verbose);
    }

    tracing::debug!("Starting token-pusher");

    if let Err(e) = run(&config).await {
        report(&e);
        std::process::exit(e.exit_code());
    }
}

async fn run(config: &CliConfig) -> Result<()> {
    // token check comes first: a usage error must never touch the network
    let request = TokenRequest::new(config.access_token.clone().unwrap_or_default())?;
    let settings = config.resolve_settings()?;
    tracing::debug!("Resolved settings: {:?}", settings);

    if config.dry_run {
        tracing::info!("Dry run, request not sent");
        let mut stdout = std::io::stdout().lock();
        writeln!(stdout, "{}", curl_command(&settings, &request))?;
        return Ok(());
    }

    let sink = HttpTokenSink::new(&settings)?;
    tracing::debug!("Target endpoint: {}", sink.endpoint());

    let pusher = TokenPusher::new(sink).with_fail_on_http_error(settings.fail_on_http_error());
    let response = pusher.send(request).await?;

    // body is forwarded untouched: no decoding, no trailing newline
    let mut stdout = std::io::stdout().lock();
    stdout.write_all(&response.body)?;
    stdout.flush()?;
    Ok(())
}

fn report(e: &PushError) {
    if let PushError::UsageError { .. } = e {
        eprintln!("{}", e);
        return;
    }

    tracing::error!(
        "❌ Token push failed: {} (Severity: {:?})",
        e,
        e.severity()
    );
    tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());

    eprintln!("❌ {}", e.user_friendly_message());
    eprintln!("💡 {}", e.recovery_suggestion());
}
