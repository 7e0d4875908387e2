//! Command-line options for the terminal gallery host.

use std::path::Path;

use anyhow::Context;
use clap::{Parser, ValueEnum};
use gallery_logging::{LevelFilter, LogDestination};
use url::Url;

#[derive(Debug, Parser)]
#[command(name = "gallery", version, about = "Browse a plot gallery manifest from the terminal")]
pub struct Cli {
    /// URL of the page hosting the gallery; relative manifest paths and the
    /// `data`/`category` query parameters are read from it.
    #[arg(long)]
    pub page_url: Option<Url>,

    /// Manifest path, overriding every other source.
    #[arg(long)]
    pub manifest: Option<String>,

    /// Process-wide manifest override.
    #[arg(long, env = "GALLERY_DATA_PATH", hide_env_values = true)]
    pub data_path: Option<String>,

    /// Where log output goes.
    #[arg(long, value_enum, default_value_t = LogTarget::Terminal)]
    pub log: LogTarget,

    /// Log at debug level.
    #[arg(short, long)]
    pub verbose: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LogTarget {
    Terminal,
    File,
    Both,
}

impl From<LogTarget> for LogDestination {
    fn from(target: LogTarget) -> Self {
        match target {
            LogTarget::Terminal => LogDestination::Terminal,
            LogTarget::File => LogDestination::File,
            LogTarget::Both => LogDestination::Both,
        }
    }
}

impl Cli {
    pub fn level(&self) -> LevelFilter {
        if self.verbose {
            LevelFilter::Debug
        } else {
            LevelFilter::Info
        }
    }

    /// `--page-url`, or `index.html` in `cwd` as a `file:` URL.
    pub fn resolve_page_url(&self, cwd: &Path) -> anyhow::Result<Url> {
        if let Some(url) = &self.page_url {
            return Ok(url.clone());
        }
        let index = cwd.join("index.html");
        Url::from_file_path(&index)
            .map_err(|()| anyhow::anyhow!("{} is not an absolute path", index.display()))
            .context("building default page URL")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;
    use gallery_engine::MANIFEST_ENV_VAR;

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn data_path_reads_manifest_env_var() {
        let command = Cli::command();
        let arg = command
            .get_arguments()
            .find(|arg| arg.get_id() == "data_path")
            .expect("data_path arg");
        assert_eq!(
            arg.get_env().and_then(|env| env.to_str()),
            Some(MANIFEST_ENV_VAR)
        );
    }

    #[test]
    fn parses_flags() {
        let cli = Cli::try_parse_from([
            "gallery",
            "--page-url",
            "https://x.test/gallery.html?category=umap",
            "--manifest",
            "run.json",
            "--log",
            "both",
            "-v",
        ])
        .unwrap();
        assert_eq!(cli.manifest.as_deref(), Some("run.json"));
        assert_eq!(cli.log, LogTarget::Both);
        assert_eq!(cli.level(), LevelFilter::Debug);
        assert_eq!(
            cli.resolve_page_url(Path::new("/ignored")).unwrap().as_str(),
            "https://x.test/gallery.html?category=umap"
        );
    }

    #[cfg(unix)]
    #[test]
    fn default_page_is_local_index() {
        let cli = Cli::try_parse_from(["gallery"]).unwrap();
        assert_eq!(cli.log, LogTarget::Terminal);
        assert_eq!(
            cli.resolve_page_url(Path::new("/srv/gallery")).unwrap().as_str(),
            "file:///srv/gallery/index.html"
        );
    }
}
