// SPDX-License-Identifier: MPL-2.0
use iced_toast::app::{self, Flags};
use iced_toast::domain::toast::{MaxToasts, Position};
use iced_toast::error::Result;
use tracing::warn;
use tracing_subscriber::EnvFilter;

fn parse_args() -> Result<Flags> {
    let mut args = pico_args::Arguments::from_env();

    let flags = Flags {
        config_path: args.opt_value_from_str("--config")?,
        position: args.opt_value_from_fn("--position", |value| {
            Ok::<_, std::convert::Infallible>(Position::parse(value))
        })?,
        max_toasts: args
            .opt_value_from_str::<_, i64>("--max-toasts")?
            .map(MaxToasts::from_count),
        newest_on_top: args.contains("--newest-on-top"),
    };

    let rest = args.finish();
    if !rest.is_empty() {
        warn!(?rest, "unused command line arguments");
    }
    Ok(flags)
}

fn main() -> iced::Result {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let flags = parse_args().unwrap_or_else(|err| {
        warn!(%err, "falling back to default flags");
        Flags::default()
    });
    app::run(flags)
}
