use clap::Parser;
use coinchange::{driver, DriverConfig};

/// Compare greedy and dynamic-programming coin change
#[derive(Parser, Debug)]
#[command(name = "coinchange", version)]
struct Args {
    /// Coin denominations, largest first (comma-separated)
    #[arg(short, long, value_delimiter = ',')]
    coins: Vec<usize>,

    /// Amounts to make change for
    amounts: Vec<usize>,
}

impl Args {
    fn into_config(self) -> DriverConfig {
        let defaults = DriverConfig::default();
        DriverConfig {
            denominations: if self.coins.is_empty() {
                defaults.denominations
            } else {
                self.coins
            },
            amounts: if self.amounts.is_empty() {
                defaults.amounts
            } else {
                self.amounts
            },
        }
    }
}

fn main() {
    // install global collector configured based on RUST_LOG env var.
    tracing_subscriber::fmt::init();

    let config = Args::parse().into_config();
    let stdout = std::io::stdout();
    if let Err(e) = driver::run(&config, &mut stdout.lock()) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
