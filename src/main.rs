// SPDX-License-Identifier: MPL-2.0
use reports_gallery::app::{self, Flags};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

const HELP: &str = "\
Reports Gallery

USAGE:
  reports_gallery [OPTIONS]

OPTIONS:
  --lang <id>          Interface language (e.g. en-US, ar)
  --config-dir <dir>   Directory holding settings.toml
  --store-url <url>    Base URL of the content store
  -h, --help           Print this help

ENVIRONMENT:
  REPORTS_GALLERY_CONFIG_DIR   Settings directory
  REPORTS_GALLERY_STORE_URL    Content store base URL
  REPORTS_GALLERY_STORE_KEY    Content store API key
  RUST_LOG                     Log filter (default: info)
";

fn parse_args() -> Result<Option<Flags>, pico_args::Error> {
    let mut args = pico_args::Arguments::from_env();

    if args.contains(["-h", "--help"]) {
        return Ok(None);
    }

    let flags = Flags {
        lang: args.opt_value_from_str("--lang")?,
        config_dir: args.opt_value_from_str("--config-dir")?,
        store_url: args.opt_value_from_str("--store-url")?,
    };

    let rest = args.finish();
    if !rest.is_empty() {
        tracing::warn!(?rest, "ignoring unrecognized arguments");
    }

    Ok(Some(flags))
}

fn main() -> iced::Result {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(tracing_subscriber::fmt::layer().with_target(false))
        .init();

    let flags = match parse_args() {
        Ok(Some(flags)) => flags,
        Ok(None) => {
            print!("{HELP}");
            return Ok(());
        }
        Err(err) => {
            eprintln!("error: {err}\n\n{HELP}");
            std::process::exit(2);
        }
    };

    app::run(flags)
}
