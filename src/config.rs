use serde::Deserialize;

#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub input: InputConfig,
    #[serde(default)]
    pub output: OutputConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct InputConfig {
    /// JSON array of health checks.
    #[serde(default = "default_input_path")]
    pub path: String,
    /// Log and drop malformed records instead of failing the whole load.
    #[serde(default)]
    pub skip_invalid: bool,
}

impl Default for InputConfig {
    fn default() -> Self {
        Self {
            path: default_input_path(),
            skip_invalid: false,
        }
    }
}

fn default_input_path() -> String {
    "events.json".into()
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct OutputConfig {
    #[serde(default)]
    pub format: OutputFormat,
    /// Time zone used to render release history start times.
    #[serde(default)]
    pub timezone: TimeZoneMode,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TimeZoneMode {
    #[default]
    Utc,
    Local,
}

impl AppConfig {
    /// Reads `CONFIG_FILE` (default `config.toml`). A missing file means defaults.
    pub fn load() -> anyhow::Result<Self> {
        let path = std::env::var("CONFIG_FILE").unwrap_or_else(|_| "config.toml".into());
        match std::fs::read_to_string(&path) {
            Ok(s) => Self::load_from_str(&s),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                tracing::debug!(path = %path, "config file not found, using defaults");
                Ok(Self::default())
            }
            Err(e) => Err(anyhow::Error::new(e).context(format!("reading config {}", path))),
        }
    }

    /// Parse and validate config from a string (e.g. for tests).
    pub fn load_from_str(s: &str) -> anyhow::Result<Self> {
        let config: AppConfig = toml::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> anyhow::Result<()> {
        anyhow::ensure!(
            !self.input.path.trim().is_empty(),
            "input.path must be non-empty"
        );
        Ok(())
    }
}
