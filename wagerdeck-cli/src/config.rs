use std::path::PathBuf;

const DEFAULT_ENDPOINT: &str = "http://localhost:8787";

#[derive(Debug, Clone)]
pub struct CliConfig {
    pub data_dir: PathBuf,
    pub endpoint: String,
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            data_dir: dirs::data_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join("wagerdeck"),
            endpoint: DEFAULT_ENDPOINT.to_string(),
        }
    }
}

impl CliConfig {
    pub fn resolve(data_dir: Option<PathBuf>, endpoint: Option<String>) -> Self {
        let mut config = Self::default();
        if let Some(data_dir) = data_dir {
            config.data_dir = data_dir;
        }
        if let Some(endpoint) = endpoint {
            config.endpoint = endpoint;
        }
        config
    }
}
