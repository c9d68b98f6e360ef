use clap::{Parser, Subcommand};

#[derive(Debug, Clone, Parser)]
#[command(name = "small-kit")]
#[command(about = "Small typed utilities: case formatting, filtering, reductions and more")]
pub struct CliConfig {
    #[arg(short, long, global = true, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, global = true, help = "Emit logs as JSON")]
    pub json_logs: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Uppercase text (default) or lowercase it with --lower
    Format {
        text: String,
        #[arg(long, conflicts_with = "upper")]
        lower: bool,
        #[arg(long)]
        upper: bool,
    },

    /// Keep items rated at or above the threshold, e.g. '[{"title":"A","rating":4.5}]'
    Filter {
        items: String,
        #[arg(long, default_value_t = crate::core::collections::DEFAULT_MIN_RATING)]
        min_rating: f64,
    },

    /// Concatenate JSON arrays in order, e.g. '[1,2]' '[3,4]' '[5]'
    Concat {
        #[arg(required = true)]
        arrays: Vec<String>,
    },

    /// Text length for text, double for numbers
    Process {
        value: String,
        #[arg(long, help = "Treat the value as text even if it parses as a number")]
        text: bool,
    },

    /// Most expensive product, e.g. '[{"name":"Pen","price":0}]'
    MaxPrice { products: String },

    /// Classify a day given by name or index (0 = Monday)
    Day { day: String },

    /// Print the formatted vehicle or car lines
    Vehicle {
        #[arg(long)]
        make: String,
        #[arg(long)]
        year: i32,
        #[arg(long)]
        model: Option<String>,
    },

    /// Square a non-negative number after a delay
    Square {
        #[arg(allow_negative_numbers = true)]
        n: f64,
        #[arg(long, default_value_t = 1000)]
        delay_ms: u64,
    },

    /// Run every showcase with samples from a TOML file or the built-in set
    Demo {
        #[arg(short, long)]
        config: Option<String>,
    },
}

impl Command {
    pub fn to_upper(&self) -> Option<bool> {
        match self {
            Command::Format { lower: true, .. } => Some(false),
            Command::Format { upper: true, .. } => Some(true),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_format_flags() {
        let config = CliConfig::parse_from(["small-kit", "format", "Hi", "--lower"]);
        assert_eq!(config.command.to_upper(), Some(false));

        let config = CliConfig::parse_from(["small-kit", "format", "Hi"]);
        assert_eq!(config.command.to_upper(), None);

        assert!(CliConfig::try_parse_from(["small-kit", "format", "Hi", "--lower", "--upper"])
            .is_err());
    }

    #[test]
    fn test_parse_negative_square() {
        let config = CliConfig::parse_from(["small-kit", "square", "-1", "--delay-ms", "0"]);
        match config.command {
            Command::Square { n, delay_ms } => {
                assert_eq!(n, -1.0);
                assert_eq!(delay_ms, 0);
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_global_verbose_flag() {
        let config = CliConfig::parse_from(["small-kit", "day", "sunday", "-v"]);
        assert!(config.verbose);
    }
}
