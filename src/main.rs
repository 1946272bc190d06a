// SPDX-License-Identifier: MPL-2.0
use nutrition_analyzer::app::{self, paths, Flags};
use tracing_subscriber::EnvFilter;

const DEFAULT_LOG_FILTER: &str = "nutrition_analyzer=info";

const HELP: &str = "\
Usage: nutrition_analyzer [OPTIONS] [FOOD]

Arguments:
  [FOOD]               Food to analyze on startup

Options:
  --lang <LOCALE>      UI language (e.g. en-US, fr)
  --config-dir <DIR>   Directory containing settings.toml
  --api-url <URL>      Base URL of the analysis service
  -h, --help           Print help
";

fn main() -> iced::Result {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let mut args = pico_args::Arguments::from_env();

    if args.contains(["-h", "--help"]) {
        print!("{HELP}");
        return Ok(());
    }

    let flags = Flags {
        lang: optional_value(&mut args, "--lang"),
        config_dir: optional_value(&mut args, "--config-dir"),
        api_url: optional_value(&mut args, "--api-url"),
        food: args
            .finish()
            .into_iter()
            .next()
            .and_then(|s| s.into_string().ok()),
    };

    paths::init_cli_overrides(flags.config_dir.clone());

    tracing::debug!(?flags, "starting");
    app::run(flags)
}

/// Reads `--key <value>`, ignoring a malformed value instead of aborting.
fn optional_value(args: &mut pico_args::Arguments, key: &'static str) -> Option<String> {
    match args.opt_value_from_str(key) {
        Ok(value) => value,
        Err(err) => {
            tracing::warn!(option = key, error = %err, "ignoring invalid option");
            None
        }
    }
}
