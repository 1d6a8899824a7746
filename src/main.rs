use anyhow::{Result, bail};
use clap::Parser;
use tracing::info;

use url_shortener_client::{
    ClientConfig, Field, FormSession, Page, Phase, RequestCoordinator, logging, page,
    suggest::suggest_short_code,
};

#[derive(Parser)]
#[command(name = "url-shortener-client")]
#[command(about = "Link a destination URL to a short code")]
struct Args {
    /// URL the short code should redirect to
    destination: String,

    /// Short code to assign; a random one is suggested when omitted
    short_code: Option<String>,

    /// Path the session was opened on
    #[arg(long, default_value = "/")]
    path: String,

    /// Overrides API_BASE_URL / APP_ENV
    #[arg(long)]
    api_base: Option<String>,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    logging::init();

    let args = Args::parse();

    let page = page::resolve(&args.path);
    if page == Page::NotFound {
        bail!("nothing to see at {}", args.path);
    }

    let mut config = ClientConfig::from_env()?;
    if let Some(base) = args.api_base.as_deref() {
        config = config.with_api_base(base)?;
    }
    let coordinator = RequestCoordinator::new(&config)?;
    info!(endpoint = coordinator.endpoint(), "client ready");

    let short_code = args.short_code.unwrap_or_else(suggest_short_code);

    let mut session = FormSession::new(page, coordinator);
    session.edit(Field::DestinationUrl, args.destination);
    session.edit(Field::ShortCode, short_code);

    match session.submit().await {
        Phase::Completed => {
            if let Some(short_url) = session.state().short_url() {
                println!("{short_url}");
            }
            Ok(())
        }
        _ => {
            let state = session.state();
            if let Some(err) = &state.destination_error {
                eprintln!("destination: {err}");
            }
            if let Some(err) = &state.short_code_error {
                eprintln!("short code: {err}");
            }
            let rejected_locally = [&state.destination_error, &state.short_code_error]
                .into_iter()
                .flatten()
                .any(|err| err.is_local());
            if rejected_locally {
                bail!("link was not created, fix the input and try again")
            }
            bail!("link was not created, the backend refused it")
        }
    }
}
