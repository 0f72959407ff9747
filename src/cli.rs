//! CLI definitions for JobLocator.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

use joblocator_config::OutputFormat;

/// JobLocator CLI.
#[derive(Parser)]
#[command(name = "joblocator")]
#[command(about = "Infer XPath locators for job-posting fields from a selected element")]
#[command(version)]
pub(crate) struct Cli {
    /// Configuration file path (default: ~/.joblocator/config.toml when present)
    #[arg(short, long, global = true, env = "JOBLOCATOR_CONFIG")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub(crate) enum Commands {
    /// Locate one field starting from a selected element
    Locate {
        /// Page to read: HTML, or a JSON snapshot when the file ends in .json
        #[arg(short, long)]
        page: PathBuf,

        /// CSS selector of the selected element (HTML pages)
        #[arg(short, long)]
        anchor: Option<String>,

        /// Field name, e.g. job-link, "Company Logo", job_title
        #[arg(short, long)]
        field: String,

        /// Output format, overrides the configured format
        #[arg(long, value_enum)]
        format: Option<FormatArg>,
    },

    /// Select elements one after another and print the collected locators as JSON
    Collect {
        /// HTML page to read
        #[arg(short, long)]
        page: PathBuf,

        /// FIELD=CSS pair, applied in order like successive right-clicks
        #[arg(long = "pick", value_name = "FIELD=CSS", required = true)]
        picks: Vec<String>,
    },

    /// List the fields offered in the context menu
    Fields,
}

/// Output format accepted on the command line.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub(crate) enum FormatArg {
    Text,
    Json,
}

impl From<FormatArg> for OutputFormat {
    fn from(format: FormatArg) -> Self {
        match format {
            FormatArg::Text => OutputFormat::Text,
            FormatArg::Json => OutputFormat::Json,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn locate_format(args: &[&str]) -> Result<Option<FormatArg>, clap::Error> {
        let base = ["joblocator", "locate", "--page", "page.html", "--field", "job-title"];
        let cli = Cli::try_parse_from(base.iter().chain(args))?;
        match cli.command {
            Commands::Locate { format, .. } => Ok(format),
            _ => unreachable!(),
        }
    }

    #[test]
    fn test_format_value_enum() {
        assert_eq!(locate_format(&[]).unwrap(), None);
        assert_eq!(locate_format(&["--format", "json"]).unwrap(), Some(FormatArg::Json));
        assert_eq!(locate_format(&["--format", "text"]).unwrap(), Some(FormatArg::Text));
        assert!(locate_format(&["--format", "yaml"]).is_err());
    }

    #[test]
    fn test_format_maps_to_output_format() {
        assert_eq!(OutputFormat::from(FormatArg::Json), OutputFormat::Json);
        assert_eq!(OutputFormat::from(FormatArg::Text), OutputFormat::Text);
    }
}
