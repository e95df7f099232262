//! Build-time chat provider configuration.
//!
//! Providers are selected when the WASM bundle is compiled, via
//! `NIGHTOWL_AI_PROVIDER`, `NIGHTOWL_AI_API_KEY` and `NIGHTOWL_AI_MODEL`.
//! There is no runtime configuration surface; a bundle either ships with a
//! remote provider baked in or falls back to the offline responder.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ProviderKind {
    #[default]
    Offline,
    Gemini,
    OpenAi,
}

const DEFAULT_GEMINI_MODEL: &str = "gemini-2.5-flash";
const DEFAULT_OPENAI_MODEL: &str = "gpt-4o-mini";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ChatConfig {
    pub provider: ProviderKind,
    pub api_key: String,
    pub model: String,
}

impl Default for ChatConfig {
    fn default() -> Self {
        Self { provider: ProviderKind::Offline, api_key: String::new(), model: String::new() }
    }
}

impl ChatConfig {
    /// Read the configuration baked in at compile time.
    pub fn from_build_env() -> Self {
        Self::parse(
            option_env!("NIGHTOWL_AI_PROVIDER"),
            option_env!("NIGHTOWL_AI_API_KEY"),
            option_env!("NIGHTOWL_AI_MODEL"),
        )
    }

    /// Resolve raw settings into a provider choice. A remote provider
    /// without an API key degrades to offline; the chat widget must keep
    /// working on a bare checkout.
    pub fn parse(provider: Option<&str>, api_key: Option<&str>, model: Option<&str>) -> Self {
        let api_key = api_key.unwrap_or("").trim();
        let kind = match provider.map(str::trim) {
            Some(p) if p.eq_ignore_ascii_case("gemini") => ProviderKind::Gemini,
            Some(p) if p.eq_ignore_ascii_case("openai") => ProviderKind::OpenAi,
            Some(p) if !p.is_empty() => {
                log::warn!("chat: unknown provider '{p}', using offline responder");
                ProviderKind::Offline
            }
            _ => ProviderKind::Offline,
        };
        if kind != ProviderKind::Offline && api_key.is_empty() {
            log::warn!("chat: provider configured without an API key, using offline responder");
            return Self::default();
        }
        let model = match (kind, model.map(str::trim).filter(|m| !m.is_empty())) {
            (ProviderKind::Offline, _) => String::new(),
            (_, Some(m)) => m.to_owned(),
            (ProviderKind::Gemini, None) => DEFAULT_GEMINI_MODEL.to_owned(),
            (ProviderKind::OpenAi, None) => DEFAULT_OPENAI_MODEL.to_owned(),
        };
        Self { provider: kind, api_key: api_key.to_owned(), model }
    }
}
