//! Converts UTM coordinates to latitude/longitude.
//!
//! Each argument, or each stdin line when there are none, is a UTM string such
//! as `10n 552000 4180000`. Output is one `latitude longitude` line per input.

use std::io::{self, Cursor};

use eyre::{bail, Result};
use tracing_subscriber::EnvFilter;
use utmconv::batch::convert_lines;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_target(false)
        .with_writer(io::stderr)
        .compact()
        .init();

    let args: Vec<String> = std::env::args().skip(1).collect();

    let stdout = io::stdout().lock();
    let failed = if args.is_empty() {
        convert_lines(io::stdin().lock(), stdout)?
    } else {
        convert_lines(Cursor::new(args.join("\n")), stdout)?
    };

    if failed > 0 {
        bail!("{failed} input(s) could not be converted");
    }

    Ok(())
}
