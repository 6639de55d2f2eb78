use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "trendz-cli",
    version,
    about = "Browse Nxt Trendz product details from the command line"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Base URL of the products API (default: https://apis.ccbp.in)
    #[arg(long, global = true)]
    pub api_url: Option<String>,

    /// JWT used as the bearer token for API requests
    #[arg(long, global = true)]
    pub token: Option<String>,

    /// Request timeout in seconds (default: 30)
    #[arg(long, global = true)]
    pub timeout: Option<u64>,

    /// Enable debug logging
    #[arg(long, global = true)]
    pub debug: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Show the detail screen for one product
    Product {
        /// Product ID or a route such as /products/12
        id_or_path: String,

        /// Print the screen state as JSON instead of markdown
        #[arg(long)]
        json: bool,

        /// Adjust the quantity interactively (+, -, a, q)
        #[arg(long, short, conflicts_with = "json")]
        interactive: bool,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_product_command_with_global_flags() {
        let cli = Cli::try_parse_from([
            "trendz-cli",
            "product",
            "/products/12",
            "--token",
            "jwt",
            "-i",
        ])
        .unwrap();

        assert_eq!(cli.token.as_deref(), Some("jwt"));
        let Commands::Product {
            id_or_path,
            json,
            interactive,
        } = cli.command;
        assert_eq!(id_or_path, "/products/12");
        assert!(!json);
        assert!(interactive);
    }

    #[test]
    fn json_and_interactive_conflict() {
        let result =
            Cli::try_parse_from(["trendz-cli", "product", "1", "--json", "--interactive"]);
        assert!(result.is_err());
    }
}
