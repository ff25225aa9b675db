#[derive(Debug, clap::Parser)]
#[command(name = "serve")]
#[command(about = "Start the HTTP API")]
pub struct App {
    /// Port to listen on
    #[arg(short, long, env = "SPIO_PORT", default_value = "8000")]
    pub port: u16,

    /// Host to bind to
    #[arg(long, env = "SPIO_HOST", default_value = "0.0.0.0")]
    pub host: String,

    /// Browser origins allowed to call the API (comma separated)
    #[arg(
        long = "allowed-origin",
        env = "SPIO_ALLOWED_ORIGINS",
        value_delimiter = ',',
        default_values_t = [
            "http://localhost:3000".to_string(),
            "http://127.0.0.1:3000".to_string(),
        ]
    )]
    pub allowed_origins: Vec<String>,
}
