mod checkout;
mod config;
mod earnings;
mod models;
mod run;
mod source;
mod ui;

use anyhow::Result;

fn main() -> Result<()> {
    env_logger::init();

    let args: Vec<String> = std::env::args().collect();
    let (settings, rest) = config::Settings::from_env(args.get(1..).unwrap_or_default())?;
    let source = source::CsvSource::new(
        settings.transactions_path.clone(),
        settings.donations_path.clone(),
    );

    if rest.is_empty() {
        run::as_tui(settings, &source)
    } else {
        run::as_cli(&rest, &settings, &source)
    }
}
