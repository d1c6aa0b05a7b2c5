use std::env;

use crate::prompts;

#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub environment: String,
    pub llm_provider: String,
    pub llm_model: String,
    pub gemini_api_key: Option<String>,
    pub openai_api_key: Option<String>,
    pub openai_base_url: Option<String>,
    pub default_temperature: f64,
    pub default_max_tokens: u32,
    pub wizard_prompt: String,
    pub disclaimer_html: String,
    pub otel_service_name: String,
    pub otel_exporter_endpoint: String,
}

impl Config {
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        Self {
            port: env::var("APP_PORT")
                .unwrap_or_else(|_| "5005".to_string())
                .parse()
                .expect("APP_PORT must be a number"),
            environment: env::var("APP_ENVIRONMENT")
                .unwrap_or_else(|_| "development".to_string()),
            llm_provider: env::var("LLM_PROVIDER").unwrap_or_else(|_| "gemini".to_string()),
            llm_model: env::var("LLM_MODEL").unwrap_or_else(|_| "gemini-2.5-flash".to_string()),
            gemini_api_key: env::var("GEMINI_API_KEY").ok(),
            openai_api_key: env::var("OPENAI_API_KEY").ok(),
            openai_base_url: env::var("OPENAI_BASE_URL").ok(),
            default_temperature: env::var("DEFAULT_TEMPERATURE")
                .unwrap_or_else(|_| "0.3".to_string())
                .parse()
                .expect("DEFAULT_TEMPERATURE must be a number"),
            default_max_tokens: env::var("DEFAULT_MAX_TOKENS")
                .unwrap_or_else(|_| "4096".to_string())
                .parse()
                .expect("DEFAULT_MAX_TOKENS must be a number"),
            wizard_prompt: load_text_override("WIZARD_PROMPT_PATH", prompts::WIZARD_PROMPT),
            disclaimer_html: load_text_override("DISCLAIMER_HTML_PATH", prompts::DISCLAIMER_HTML),
            otel_service_name: env::var("OTEL_SERVICE_NAME")
                .unwrap_or_else(|_| "scroll-alchemist".to_string()),
            otel_exporter_endpoint: env::var("OTEL_EXPORTER_OTLP_ENDPOINT")
                .unwrap_or_else(|_| "http://localhost:4317".to_string()),
        }
    }

    pub fn is_production(&self) -> bool {
        self.environment == "production"
    }
}

/// Reads a text override from the file named by `env_key`, falling back to
/// the embedded default when the variable is unset or the file is unreadable.
fn load_text_override(env_key: &str, default: &str) -> String {
    match env::var(env_key) {
        Ok(path) => match std::fs::read_to_string(&path) {
            Ok(text) => text,
            Err(err) => {
                tracing::warn!(%path, error = %err, "override file unreadable, using embedded default");
                default.to_string()
            }
        },
        Err(_) => default.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_text_override_unset_uses_default() {
        let text = load_text_override("SCROLL_TEST_UNSET_VAR", "fallback");
        assert_eq!(text, "fallback");
    }

    #[test]
    fn test_embedded_defaults_are_nonempty() {
        assert!(prompts::WIZARD_PROMPT.contains("Simplification of Medical Text"));
        assert!(prompts::DISCLAIMER_HTML.contains("IMPORTANT SCROLL WARNING"));
    }
}
