//! Startup configuration. Kept in one test because it mutates the process
//! environment.

use horoscope_oracle::{Container, ContainerConfig, DomainError};

#[test]
fn api_key_is_required_unless_mocked() {
    std::env::remove_var("OPENROUTER_API_KEY");

    let err = Container::new(ContainerConfig::default())
        .err()
        .expect("missing key must be fatal");
    assert!(matches!(err, DomainError::Configuration(_)), "got {err:?}");
    assert!(err.to_string().contains("OPENROUTER_API_KEY"));

    std::env::set_var("OPENROUTER_API_KEY", "   ");
    assert!(Container::new(ContainerConfig::default()).is_err());

    let mocked = Container::new(ContainerConfig {
        mock_llm: true,
        ..ContainerConfig::default()
    })
    .expect("mock mode needs no key");
    assert!(mocked.mock_llm());

    std::env::set_var("OPENROUTER_API_KEY", "sk-or-test");
    std::env::set_var("OPENROUTER_BASE_URL", "http://127.0.0.1:1");
    let real = Container::new(ContainerConfig::default()).expect("key present");
    assert!(!real.mock_llm());
}
