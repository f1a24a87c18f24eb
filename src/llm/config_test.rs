use super::*;

/// # Safety
/// Tests must run with `--test-threads=1` to avoid env races.
unsafe fn clear_gemini_env() {
    unsafe {
        std::env::remove_var("GEMINI_API_KEY");
        std::env::remove_var("GEMINI_BASE_URL");
        std::env::remove_var("GEMINI_CHAT_MODEL");
        std::env::remove_var("GEMINI_CODE_MODEL");
        std::env::remove_var("GEMINI_IMAGE_MODEL");
        std::env::remove_var("GEMINI_REQUEST_TIMEOUT_SECS");
        std::env::remove_var("GEMINI_CONNECT_TIMEOUT_SECS");
    }
}

#[test]
fn from_env_uses_defaults() {
    unsafe {
        clear_gemini_env();
        std::env::set_var("GEMINI_API_KEY", "secret");
    }

    let cfg = GeminiConfig::from_env().unwrap();
    assert_eq!(cfg.api_key, "secret");
    assert_eq!(cfg.base_url, DEFAULT_BASE_URL);
    assert_eq!(cfg.models, ModelProfiles::default());
    assert_eq!(
        cfg.timeouts,
        GeminiTimeouts { request_secs: DEFAULT_REQUEST_TIMEOUT_SECS, connect_secs: DEFAULT_CONNECT_TIMEOUT_SECS }
    );

    unsafe { clear_gemini_env() };
}

#[test]
fn from_env_missing_key_errors() {
    unsafe { clear_gemini_env() };

    let err = GeminiConfig::from_env().unwrap_err();
    assert!(matches!(err, LlmError::MissingApiKey { var } if var == "GEMINI_API_KEY"));
}

#[test]
fn from_env_parses_overrides() {
    unsafe {
        clear_gemini_env();
        std::env::set_var("GEMINI_API_KEY", "secret");
        std::env::set_var("GEMINI_BASE_URL", "https://example.test/v1beta/");
        std::env::set_var("GEMINI_CHAT_MODEL", "gemini-alt-chat");
        std::env::set_var("GEMINI_CODE_MODEL", "gemini-alt-code");
        std::env::set_var("GEMINI_IMAGE_MODEL", "gemini-alt-image");
        std::env::set_var("GEMINI_REQUEST_TIMEOUT_SECS", "42");
        std::env::set_var("GEMINI_CONNECT_TIMEOUT_SECS", "7");
    }

    let cfg = GeminiConfig::from_env().unwrap();
    assert_eq!(cfg.base_url, "https://example.test/v1beta");
    assert_eq!(cfg.models.chat, "gemini-alt-chat");
    assert_eq!(cfg.models.code, "gemini-alt-code");
    assert_eq!(cfg.models.image, "gemini-alt-image");
    assert_eq!(cfg.timeouts, GeminiTimeouts { request_secs: 42, connect_secs: 7 });

    unsafe { clear_gemini_env() };
}

#[test]
fn from_env_unparsable_timeout_falls_back() {
    unsafe {
        clear_gemini_env();
        std::env::set_var("GEMINI_API_KEY", "secret");
        std::env::set_var("GEMINI_REQUEST_TIMEOUT_SECS", "not-a-number");
    }

    let cfg = GeminiConfig::from_env().unwrap();
    assert_eq!(cfg.timeouts.request_secs, DEFAULT_REQUEST_TIMEOUT_SECS);

    unsafe { clear_gemini_env() };
}
