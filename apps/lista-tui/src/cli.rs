//! Command-line flags.
//!
//! Flags win over `LISTA_*` environment variables, which win over defaults.

use clap::Parser;
use lista_core::ListConfig;

/// Terminal shopping list editor.
#[derive(Debug, Clone, Default, Parser)]
#[command(name = "lista", version, about = "Terminal shopping list editor")]
pub struct Args {
    /// Start with an empty list instead of the sample items
    #[arg(long)]
    pub empty: bool,

    /// Currency label shown before every amount
    #[arg(long, value_name = "LABEL")]
    pub currency: Option<String>,

    /// Header title
    #[arg(long)]
    pub title: Option<String>,

    /// Print the initial list as JSON and exit
    #[arg(long)]
    pub snapshot: bool,
}

impl Args {
    /// Applies flag overrides on top of an environment-derived config.
    pub fn apply(&self, mut config: ListConfig) -> ListConfig {
        if self.empty {
            config.seed = false;
        }
        if let Some(label) = self.currency.as_deref().map(str::trim).filter(|l| !l.is_empty()) {
            config.currency_label = label.to_string();
        }
        if let Some(title) = self.title.as_deref().map(str::trim).filter(|t| !t.is_empty()) {
            config.title = title.to_string();
        }
        config
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_flags_keep_config() {
        let args = Args::try_parse_from(["lista"]).unwrap();
        assert_eq!(args.apply(ListConfig::default()), ListConfig::default());
        assert!(!args.snapshot);
    }

    #[test]
    fn test_flags_override() {
        let args =
            Args::try_parse_from(["lista", "--empty", "--currency", "US$", "--title", "Feira"])
                .unwrap();
        let config = args.apply(ListConfig::default());

        assert!(!config.seed);
        assert_eq!(config.currency_label, "US$");
        assert_eq!(config.title, "Feira");
    }

    #[test]
    fn test_snapshot_flag() {
        let args = Args::try_parse_from(["lista", "--snapshot"]).unwrap();
        assert!(args.snapshot);
    }

    #[test]
    fn test_unknown_flag_rejected() {
        assert!(Args::try_parse_from(["lista", "--persist"]).is_err());
    }
}
