use crate::core::network::NetworkKind;
use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "homedash")]
#[command(version = concat!("Ver:", env!("CARGO_PKG_VERSION")))]
#[command(about = "Terminal homelab service dashboard with network reachability probing")]
pub struct Cli {
    /// Path to the services JSON file
    #[arg(short, long)]
    pub services: Option<PathBuf>,

    /// Path to the settings TOML file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Force a network context instead of picking the first reachable one
    #[arg(short, long, value_enum)]
    pub network: Option<NetworkKind>,

    /// Override probe timeout in milliseconds
    #[arg(long)]
    pub timeout_ms: Option<u32>,

    /// Override the number of immediate probe retries
    #[arg(long)]
    pub retries: Option<u32>,

    /// Probe the network candidates and print which ones are reachable
    #[arg(short, long)]
    pub list_networks: bool,
}

impl Cli {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}
