//! Login smoke runner.
//!
//! Drives the valid-credentials login flow once against the selected
//! environment and exits non-zero if the dashboard does not appear. Useful
//! as a deployment check without pulling in the whole test suite.

use anyhow::ensure;
use clap::Parser;
use log::info;
use orangehrm_e2e::{
    BrowserSession, DashboardPage, EnvConfig, Environment, LaunchOptions, LoginPage, SecretStore,
};
use secrecy::ExposeSecret;

#[derive(Parser)]
#[command(name = "smoke")]
#[command(version)]
#[command(about = "Run the OrangeHRM login smoke scenario", long_about = None)]
struct Cli {
    /// Environment to run against
    #[arg(long, value_enum, default_value_t = Environment::Dev)]
    env: Environment,

    /// Launch the browser in headed mode (default: headless)
    #[arg(long)]
    headed: bool,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let cli = Cli::parse();

    let config = EnvConfig::load(cli.env)?;
    let store = SecretStore::new();
    let credentials = store.get()?;

    info!("running login smoke against {} ({})", cli.env, config.base_url());

    let session = BrowserSession::launch(LaunchOptions::new().headless(!cli.headed))?;

    let login = LoginPage::new(&session, &config);
    login.navigate()?;
    login.login(
        credentials.username().expose_secret(),
        credentials.password().expose_secret(),
    )?;

    let dashboard = DashboardPage::new(&session, &config);
    ensure!(
        dashboard.is_dashboard_title_shown()?,
        "dashboard title is not shown after login"
    );

    info!("login smoke passed");
    Ok(())
}
