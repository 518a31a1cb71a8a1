use clap::Parser;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct VaultboardCli {
    /// Base URL of the upstream vaults API
    #[arg(
        long,
        env = "VAULTS_API_BASE_URL",
        default_value = "https://api.krystal.app/all/v1"
    )]
    pub vaults_api_base_url: String,

    /// API bind host
    #[arg(long, env = "API_HOST", default_value = "0.0.0.0")]
    pub api_host: String,

    /// API port
    #[arg(long, env = "API_PORT", default_value = "8080")]
    pub api_port: u16,
}
