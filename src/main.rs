// SPDX-License-Identifier: MPL-2.0
use iced_magnifier::app::{self, paths, Flags};
use tracing_subscriber::EnvFilter;

const HELP: &str = "\
Draggable magnifier lens over an image

USAGE:
  iced_magnifier [OPTIONS] [IMAGE]

OPTIONS:
  --lang <LOCALE>      Interface language (en-US, fr)
  --config-dir <DIR>   Directory holding settings.toml
  --i18n-dir <DIR>     Directory of .ftl files overriding the built-in ones
  -h, --help           Print this help

Without IMAGE a built-in placeholder picture is shown.
";

fn parse_flags() -> Result<Flags, pico_args::Error> {
    let mut args = pico_args::Arguments::from_env();

    if args.contains(["-h", "--help"]) {
        print!("{HELP}");
        std::process::exit(0);
    }

    Ok(Flags {
        lang: args.opt_value_from_str("--lang")?,
        config_dir: args.opt_value_from_str("--config-dir")?,
        i18n_dir: args.opt_value_from_str("--i18n-dir")?,
        file_path: args
            .finish()
            .into_iter()
            .next()
            .and_then(|s| s.into_string().ok()),
    })
}

fn main() -> iced::Result {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let flags = match parse_flags() {
        Ok(flags) => flags,
        Err(err) => {
            eprintln!("error: {err}\n\n{HELP}");
            std::process::exit(2);
        }
    };

    paths::init_cli_overrides(flags.config_dir.clone());
    tracing::info!(
        version = env!("CARGO_PKG_VERSION"),
        image = flags.file_path.as_deref().unwrap_or("<placeholder>"),
        "starting iced_magnifier"
    );

    app::run(flags)
}
