//! Settings for the desktop site, read from `site.toml` and the environment.

use std::{collections::HashMap, fs, path::Path};

use relay_client::{RelayConfig, DEFAULT_ACCESS_KEY, DEFAULT_ENDPOINT, DEFAULT_SUBJECT};
use tracing::warn;
use url::Url;

#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    pub relay_endpoint: String,
    pub relay_access_key: String,
    pub relay_subject: String,
    pub text_scale: f32,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            relay_endpoint: DEFAULT_ENDPOINT.into(),
            relay_access_key: DEFAULT_ACCESS_KEY.into(),
            relay_subject: DEFAULT_SUBJECT.into(),
            text_scale: 1.0,
        }
    }
}

impl Settings {
    /// Builds the relay configuration, falling back to the stock endpoint
    /// when the configured one does not parse as a URL.
    pub fn relay_config(&self) -> RelayConfig {
        let endpoint = match Url::parse(&self.relay_endpoint) {
            Ok(url) => url,
            Err(err) => {
                warn!(
                    endpoint = %self.relay_endpoint,
                    error = %err,
                    "configured relay endpoint is not a valid url, using the stock one"
                );
                Url::parse(DEFAULT_ENDPOINT).expect("stock endpoint parses")
            }
        };
        RelayConfig {
            endpoint,
            access_key: self.relay_access_key.clone(),
            subject: self.relay_subject.clone(),
        }
    }
}

pub fn load_settings(config_path: Option<&Path>) -> Settings {
    let mut settings = Settings::default();
    let path = config_path.unwrap_or_else(|| Path::new("site.toml"));

    if let Ok(raw) = fs::read_to_string(path) {
        if let Ok(file_cfg) = toml::from_str::<HashMap<String, String>>(&raw) {
            if let Some(v) = file_cfg.get("relay_endpoint") {
                settings.relay_endpoint = v.clone();
            }
            if let Some(v) = file_cfg.get("relay_access_key") {
                settings.relay_access_key = v.clone();
            }
            if let Some(v) = file_cfg.get("relay_subject") {
                settings.relay_subject = v.clone();
            }
            if let Some(v) = file_cfg.get("text_scale") {
                if let Ok(parsed) = v.parse::<f32>() {
                    settings.text_scale = parsed;
                }
            }
        }
    }

    if let Ok(v) = std::env::var("CSM_RELAY_ENDPOINT") {
        settings.relay_endpoint = v;
    }
    if let Ok(v) = std::env::var("CSM_RELAY_ACCESS_KEY") {
        settings.relay_access_key = v;
    }
    if let Ok(v) = std::env::var("CSM_RELAY_SUBJECT") {
        settings.relay_subject = v;
    }
    if let Ok(v) = std::env::var("CSM_TEXT_SCALE") {
        if let Ok(parsed) = v.parse::<f32>() {
            settings.text_scale = parsed;
        }
    }

    settings
}

#[cfg(test)]
mod tests {
    use std::{
        env,
        sync::Mutex,
        time::{SystemTime, UNIX_EPOCH},
    };

    use super::*;

    // Env overrides are process-global, so tests that read or set them
    // take turns.
    static ENV_GUARD: Mutex<()> = Mutex::new(());

    #[test]
    fn defaults_point_at_the_stock_relay() {
        let settings = Settings::default();
        let config = settings.relay_config();
        assert_eq!(config.endpoint.as_str(), DEFAULT_ENDPOINT);
        assert_eq!(config.access_key, DEFAULT_ACCESS_KEY);
        assert_eq!(settings.text_scale, 1.0);
    }

    #[test]
    fn invalid_endpoint_falls_back_to_the_stock_one() {
        let settings = Settings {
            relay_endpoint: "not a url".into(),
            ..Settings::default()
        };
        assert_eq!(settings.relay_config().endpoint.as_str(), DEFAULT_ENDPOINT);
    }

    #[test]
    fn file_values_override_defaults() {
        let _guard = ENV_GUARD.lock().unwrap_or_else(|e| e.into_inner());
        let suffix = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .expect("clock")
            .as_nanos();
        let path = env::temp_dir().join(format!("site_gui_config_test_{suffix}.toml"));
        fs::write(
            &path,
            "relay_endpoint = \"https://relay.example/submit\"\n\
             relay_subject = \"Test Subject\"\n\
             text_scale = \"1.25\"\n",
        )
        .expect("write config");

        let settings = load_settings(Some(&path));
        assert_eq!(settings.relay_endpoint, "https://relay.example/submit");
        assert_eq!(settings.relay_subject, "Test Subject");
        assert_eq!(settings.text_scale, 1.25);
        // Keys the file does not mention keep their defaults.
        assert_eq!(settings.relay_access_key, DEFAULT_ACCESS_KEY);

        fs::remove_file(path).expect("cleanup");
    }

    #[test]
    fn unreadable_numbers_keep_the_default() {
        let _guard = ENV_GUARD.lock().unwrap_or_else(|e| e.into_inner());
        let suffix = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .expect("clock")
            .as_nanos();
        let path = env::temp_dir().join(format!("site_gui_config_scale_test_{suffix}.toml"));
        fs::write(&path, "text_scale = \"huge\"\n").expect("write config");

        let settings = load_settings(Some(&path));
        assert_eq!(settings.text_scale, 1.0);

        fs::remove_file(path).expect("cleanup");
    }

    #[test]
    fn environment_overrides_beat_file_values() {
        let _guard = ENV_GUARD.lock().unwrap_or_else(|e| e.into_inner());
        let suffix = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .expect("clock")
            .as_nanos();
        let path = env::temp_dir().join(format!("site_gui_config_env_test_{suffix}.toml"));
        fs::write(&path, "relay_subject = \"From File\"\n").expect("write config");

        env::set_var("CSM_RELAY_SUBJECT", "From Environment");
        env::set_var("CSM_TEXT_SCALE", "1.5");
        let settings = load_settings(Some(&path));
        env::remove_var("CSM_RELAY_SUBJECT");
        env::remove_var("CSM_TEXT_SCALE");

        assert_eq!(settings.relay_subject, "From Environment");
        assert_eq!(settings.text_scale, 1.5);
        // Untouched keys still come from the defaults.
        assert_eq!(settings.relay_endpoint, DEFAULT_ENDPOINT);

        fs::remove_file(path).expect("cleanup");
    }
}
