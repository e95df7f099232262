use super::*;

// =============================================================
// Provider selection
// =============================================================

#[test]
fn no_configuration_means_offline() {
    let config = ChatConfig::parse(None, None, None);
    assert_eq!(config.provider, ProviderKind::Offline);
}

#[test]
fn gemini_with_key_selects_gemini_and_default_model() {
    let config = ChatConfig::parse(Some("gemini"), Some("key-123"), None);
    assert_eq!(config.provider, ProviderKind::Gemini);
    assert_eq!(config.api_key, "key-123");
    assert_eq!(config.model, DEFAULT_GEMINI_MODEL);
}

#[test]
fn provider_name_is_case_insensitive() {
    let config = ChatConfig::parse(Some("OpenAI"), Some("sk-1"), Some("gpt-4o"));
    assert_eq!(config.provider, ProviderKind::OpenAi);
    assert_eq!(config.model, "gpt-4o");
}

// =============================================================
// Degraded configurations
// =============================================================

#[test]
fn remote_provider_without_key_degrades_to_offline() {
    let config = ChatConfig::parse(Some("gemini"), None, None);
    assert_eq!(config.provider, ProviderKind::Offline);

    let config = ChatConfig::parse(Some("openai"), Some("   "), None);
    assert_eq!(config.provider, ProviderKind::Offline);
}

#[test]
fn unknown_provider_degrades_to_offline() {
    let config = ChatConfig::parse(Some("mistral"), Some("key"), None);
    assert_eq!(config.provider, ProviderKind::Offline);
}
