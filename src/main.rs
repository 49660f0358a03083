use besttime_core::{AppConfig, ConfigOverrides, CoreError, ErrorExt, ErrorReporter};
use clap::error::ErrorKind;
use clap::Parser;
use post_stats::{LocalClock, Recommendation};
use reddit_client::RedditApiClient;
use std::io::Write;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

const USAGE: &str = "Please enter 1 argument: Subreddits (eg: askreddit, askscience, technology)";

#[derive(Parser, Debug)]
#[command(name = "besttime")]
#[command(version)]
#[command(about = "When were a subreddit's top posts of the month submitted?")]
struct Cli {
    /// Subreddit to look at (exactly one), e.g. askscience. Names that clash
    /// with an option go after `--`.
    #[arg(value_name = "SUBREDDIT", allow_hyphen_values = true)]
    subreddits: Vec<String>,

    /// TOML configuration file
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Timezone for weekdays and hours: "local" or an IANA name
    #[arg(long, value_name = "ZONE")]
    timezone: Option<String>,

    /// Scheme and host to request the listing from
    #[arg(long, value_name = "URL")]
    api_base: Option<String>,

    /// Request timeout in seconds (default: none)
    #[arg(long, value_name = "SECONDS")]
    timeout: Option<u64>,

    /// Debug logging on stderr
    #[arg(short, long)]
    verbose: bool,
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            let _ = e.print();
            return ExitCode::SUCCESS;
        }
        Err(_) => {
            println!("{USAGE}");
            return ExitCode::from(exit_status(&usage_error()));
        }
    };

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(CoreError::Usage { message }) => {
            println!("{message}");
            ExitCode::from(exit_status(&usage_error()))
        }
        Err(e) => {
            ErrorReporter::new().report_error(&e);
            eprintln!("error: {}", e.user_friendly_message());
            ExitCode::from(exit_status(&e))
        }
    }
}

async fn run(cli: Cli) -> Result<(), CoreError> {
    let subreddit = single_subreddit(&cli.subreddits)?;

    let mut config = AppConfig::load(cli.config.as_deref())?;
    config.apply_overrides(ConfigOverrides {
        api_base: cli.api_base,
        timezone: cli.timezone,
        request_timeout_secs: cli.timeout,
    })?;
    config.validate()?;

    init_logging(&config, cli.verbose);
    tracing::info!(
        subreddit,
        api_base = %config.api_base,
        timezone = %config.timezone,
        "Looking up the best time to post"
    );

    let client = RedditApiClient::new(&config)?;
    let posts = client.get_top_posts(subreddit).await?;

    let clock = LocalClock::new(config.timezone);
    let recommendation = Recommendation::from_posts(subreddit, &posts, &clock);

    let mut stdout = std::io::stdout().lock();
    write!(stdout, "{recommendation}")?;
    stdout.flush()?;
    Ok(())
}

fn single_subreddit(args: &[String]) -> Result<&str, CoreError> {
    match args {
        [subreddit] => Ok(subreddit.as_str()),
        _ => Err(usage_error()),
    }
}

fn usage_error() -> CoreError {
    CoreError::Usage {
        message: USAGE.to_string(),
    }
}

fn exit_status(error: &CoreError) -> u8 {
    u8::try_from(error.exit_code()).unwrap_or(1)
}

fn init_logging(config: &AppConfig, verbose: bool) {
    let level = if verbose {
        "debug"
    } else {
        config.log_level.as_str()
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(format!(
            "besttime={level},besttime_core={level},reddit_client={level},post_stats={level}"
        ))
    });

    // A subscriber may already be installed when `run` is driven more than once.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}
