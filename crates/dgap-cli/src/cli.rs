//! Command-line argument definitions.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use dgap::{Format, SearchParams, Wide};

use crate::config::FileConfig;

#[derive(Parser)]
#[command(name = "dgap")]
#[command(version, about = "Search integer solutions of x = d(d-1) / 2(N-d), N = b^m")]
pub struct Cli {
    /// TOML configuration file (defaults to ./dgap.toml when present)
    #[arg(short, long, global = true, env = "DGAP_CONFIG")]
    pub config: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Find every (x, y, d) for the given base and digit lengths
    Search {
        #[command(flatten)]
        params: ParamArgs,

        /// Output format: table, tsv or json
        #[arg(short, long, env = "DGAP_FORMAT")]
        format: Option<Format>,

        /// Write results to a file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Evaluate the formula for a single offset d
    Eval {
        /// Numeral base (2-36)
        #[arg(short, long, env = "DGAP_BASE")]
        base: Option<u32>,

        /// Digit length defining the modulus N = base^m
        #[arg(short = 'm', long = "modulus-digits")]
        modulus_digits: u32,

        /// Offset d (decimal)
        #[arg(short, long)]
        offset: Wide,
    },

    /// Show the derived x bounds and the pruned offset range
    Bounds {
        #[command(flatten)]
        params: ParamArgs,
    },

    /// Cross-check the bounded search against a full scan of [1, N-1]
    Verify {
        #[command(flatten)]
        params: ParamArgs,
    },

    /// Enter the search parameters interactively
    Interactive,
}

/// Parameters shared by the search-like subcommands
#[derive(Args, Debug, Clone)]
pub struct ParamArgs {
    /// Numeral base (2-36)
    #[arg(short, long, env = "DGAP_BASE")]
    pub base: Option<u32>,

    /// Digit length of x
    #[arg(short = 'n', long = "digits")]
    pub digits: u32,

    /// Digit length defining the modulus N = base^m
    #[arg(short = 'm', long = "modulus-digits")]
    pub modulus_digits: u32,

    /// Smallest x to report (decimal)
    #[arg(long)]
    pub min_x: Option<Wide>,

    /// Largest x to report (decimal)
    #[arg(long)]
    pub max_x: Option<Wide>,

    /// Maximum number of results
    #[arg(short, long)]
    pub limit: Option<usize>,
}

impl ParamArgs {
    /// Merge with the configuration file; flags win over file values.
    pub fn to_params(&self, config: &FileConfig) -> SearchParams {
        let mut builder = SearchParams::builder()
            .base(config.base(self.base))
            .digits(self.digits)
            .modulus_digits(self.modulus_digits);
        if let Some(min_x) = self.min_x {
            builder = builder.min_x(min_x);
        }
        if let Some(max_x) = self.max_x {
            builder = builder.max_x(max_x);
        }
        if let Some(limit) = self.limit.or(config.search.max_results) {
            builder = builder.max_results(limit);
        }
        builder.build()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_search() {
        let cli = Cli::try_parse_from([
            "dgap", "search", "-b", "16", "-n", "2", "-m", "4", "--min-x", "20", "-l", "3", "-f",
            "json",
        ])
        .unwrap();
        let Command::Search {
            params,
            format,
            output,
        } = cli.command
        else {
            panic!("expected search command");
        };
        assert_eq!(params.base, Some(16));
        assert_eq!(params.min_x, Some(Wide::new(20)));
        assert_eq!(params.max_x, None);
        assert_eq!(format, Some(Format::Json));
        assert_eq!(output, None);

        let search = params.to_params(&FileConfig::default());
        assert_eq!(search.base, 16);
        assert_eq!(search.n, 2);
        assert_eq!(search.m, 4);
        assert_eq!(search.max_results, Some(3));
    }

    #[test]
    fn test_parse_rejects_negative_bound() {
        let result = Cli::try_parse_from(["dgap", "bounds", "-n", "1", "-m", "2", "--max-x", "-1"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_flags_override_config() {
        let config = FileConfig::parse("[search]\nbase = 8\nmax_results = 5\n").unwrap();
        let args = ParamArgs {
            base: None,
            digits: 1,
            modulus_digits: 2,
            min_x: None,
            max_x: None,
            limit: None,
        };
        let params = args.to_params(&config);
        assert_eq!(params.base, 8);
        assert_eq!(params.max_results, Some(5));

        let args = ParamArgs {
            base: Some(12),
            limit: Some(1),
            ..args
        };
        let params = args.to_params(&config);
        assert_eq!(params.base, 12);
        assert_eq!(params.max_results, Some(1));
    }
}
