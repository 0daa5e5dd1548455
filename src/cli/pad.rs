//! `pad-icon` command.

use anyhow::Result;
use clap::{CommandFactory, error::ErrorKind};

use super::PadCli;
use crate::config::ToolsConfig;
use crate::image::{Background, pad_file};
use crate::{debug, log};

/// Whether a parse error means positional arguments were left out.
///
/// This is the one case answered with the plain usage line and exit code 1
/// rather than clap's own error report.
pub fn is_missing_args(err: &clap::Error) -> bool {
    err.kind() == ErrorKind::MissingRequiredArgument
}

/// One-line usage text.
pub fn usage() -> String {
    PadCli::command().render_usage().to_string()
}

/// Run the pad command
pub fn run(cli: &PadCli) -> Result<()> {
    cli.common.apply();
    let config = ToolsConfig::load(&cli.common.config)?;
    let (ratio, background) = resolve_options(cli, &config);
    debug!("pad"; "ratio {}, background {}", ratio, background);
    if !cli.extra.is_empty() {
        debug!("pad"; "ignoring {} extra argument(s)", cli.extra.len());
    }

    let padding = pad_file(&cli.input, &cli.output, ratio, background)?;

    let (w, h) = padding.source;
    let (new_w, new_h) = padding.canvas();
    log!(
        "pad";
        "{} ({}x{}) -> {} ({}x{})",
        cli.input.display(),
        w,
        h,
        cli.output.display(),
        new_w,
        new_h
    );
    Ok(())
}

/// CLI values win over `[pad]` config.
fn resolve_options(cli: &PadCli, config: &ToolsConfig) -> (f64, Background) {
    (
        cli.ratio.unwrap_or(config.pad.ratio),
        cli.background.unwrap_or(config.pad.background),
    )
}
