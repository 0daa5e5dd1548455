//! `filter-svg` command.

use std::path::PathBuf;

use anyhow::Result;

use super::FilterCli;
use crate::config::ToolsConfig;
use crate::image::filter_svg_file;
use crate::log;

/// Run the filter command
pub fn run(cli: &FilterCli) -> Result<()> {
    cli.common.apply();
    let config = ToolsConfig::load(&cli.common.config)?;
    let path = resolve_input(cli, &config);

    let report = filter_svg_file(&path, cli.dry_run)?;

    let verb = if cli.dry_run { "would keep" } else { "kept" };
    log!(
        "filter";
        "{} {} green and {} blue paths, dropped {} lines: {}",
        verb,
        report.green,
        report.blue,
        report.dropped,
        path.display()
    );
    Ok(())
}

/// CLI path wins over `filter.input`.
fn resolve_input(cli: &FilterCli, config: &ToolsConfig) -> PathBuf {
    cli.svg
        .clone()
        .unwrap_or_else(|| config.filter.input.clone())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use std::fs;
    use std::ffi::OsStr;
    use tempfile::TempDir;

    #[test]
    fn test_resolve_input_prefers_cli() {
        let config = ToolsConfig::default();
        let cli = FilterCli::try_parse_from(["filter-svg", "other.svg"]).unwrap();
        assert_eq!(resolve_input(&cli, &config), PathBuf::from("other.svg"));

        let cli = FilterCli::try_parse_from(["filter-svg"]).unwrap();
        assert_eq!(
            resolve_input(&cli, &config),
            PathBuf::from(crate::config::DEFAULT_SVG)
        );
    }

    #[test]
    fn test_run_rewrites_file() {
        let dir = TempDir::new().unwrap();
        let svg = dir.path().join("icon.svg");
        fs::write(
            &svg,
            "<svg>\n<path fill=\"#07C692\"/>\n<path fill=\"#FFFFFF\"/>\n</svg>\n",
        )
        .unwrap();

        let config = dir.path().join("iconprep.toml");
        let cli = FilterCli::try_parse_from([
            OsStr::new("filter-svg"),
            OsStr::new("-C"),
            config.as_os_str(),
            svg.as_os_str(),
        ])
        .unwrap();
        run(&cli).unwrap();

        assert_eq!(
            fs::read_to_string(&svg).unwrap(),
            "<svg>\n<path fill=\"#07C692\"/>\n</svg>"
        );
    }

    #[test]
    fn test_run_missing_file_fails() {
        let dir = TempDir::new().unwrap();
        let missing = dir.path().join("missing.svg");
        let config = dir.path().join("iconprep.toml");
        let cli = FilterCli::try_parse_from([
            OsStr::new("filter-svg"),
            OsStr::new("-C"),
            config.as_os_str(),
            missing.as_os_str(),
        ])
        .unwrap();
        assert!(run(&cli).is_err());
    }
}
