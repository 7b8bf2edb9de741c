use std::env;
use std::path::PathBuf;
use std::time::Duration;

/// Runtime configuration, resolved once at startup.
///
/// Secrets are required from the environment — there are no baked-in
/// fallback credentials, and a missing secret fails startup instead of
/// limping along with a placeholder.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub port: u16,
    pub data_dir: PathBuf,
    pub gemini_api_key: String,
    pub gemini_model: String,
    pub gemini_timeout: Duration,
    pub jwt_secret: String,
}

impl ServerConfig {
    pub fn from_env() -> eyre::Result<Self> {
        let gemini_api_key =
            env::var("GEMINI_API_KEY").map_err(|_| eyre::eyre!("GEMINI_API_KEY must be set"))?;
        let jwt_secret =
            env::var("JWT_SECRET").map_err(|_| eyre::eyre!("JWT_SECRET must be set"))?;

        let port = match env::var("PORT") {
            Ok(value) => value
                .parse::<u16>()
                .map_err(|_| eyre::eyre!("PORT is not a valid port number: {value}"))?,
            Err(_) => 5000,
        };

        let data_dir =
            PathBuf::from(env::var("SERENITY_DATA_DIR").unwrap_or_else(|_| "data".to_string()));

        let gemini_model =
            env::var("GEMINI_MODEL").unwrap_or_else(|_| "gemini-1.5-flash".to_string());

        let timeout_secs = match env::var("GEMINI_TIMEOUT_SECS") {
            Ok(value) => value
                .parse::<u64>()
                .map_err(|_| eyre::eyre!("GEMINI_TIMEOUT_SECS is not a number: {value}"))?,
            Err(_) => 60,
        };

        Ok(Self {
            port,
            data_dir,
            gemini_api_key,
            gemini_model,
            gemini_timeout: Duration::from_secs(timeout_secs),
            jwt_secret,
        })
    }
}
