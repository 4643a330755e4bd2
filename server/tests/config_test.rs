//! Configuration loading tests. Serialized because they mutate process
//! environment variables.

use serial_test::serial;

use hnp_bridge::config::{Config, Locale};

fn clear_env() {
    for var in [
        "TOKEN",
        "DISCORD_WEBHOOK_URL",
        "BIND_ADDRESS",
        "HNP_URL_TEMPLATE",
        "NOTIF_LOCALE",
    ] {
        std::env::remove_var(var);
    }
}

#[test]
#[serial]
fn from_env_requires_token() {
    clear_env();
    std::env::set_var("DISCORD_WEBHOOK_URL", "https://discord.example/webhook");

    let err = Config::from_env().unwrap_err();
    assert!(err.to_string().contains("TOKEN"));
}

#[test]
#[serial]
fn from_env_requires_webhook_url() {
    clear_env();
    std::env::set_var("TOKEN", "s3cret");

    let err = Config::from_env().unwrap_err();
    assert!(err.to_string().contains("DISCORD_WEBHOOK_URL"));
}

#[test]
#[serial]
fn from_env_applies_defaults() {
    clear_env();
    std::env::set_var("TOKEN", "s3cret");
    std::env::set_var("DISCORD_WEBHOOK_URL", "https://discord.example/webhook");

    let config = Config::from_env().unwrap();
    assert_eq!(config.bind_address, "0.0.0.0:8080");
    assert_eq!(config.locale, Locale::Es);
    assert!(config.hnp_url_template.is_none());
}

#[test]
#[serial]
fn from_env_reads_full_configuration() {
    clear_env();
    std::env::set_var("TOKEN", "s3cret");
    std::env::set_var("DISCORD_WEBHOOK_URL", "https://discord.example/webhook");
    std::env::set_var("BIND_ADDRESS", "127.0.0.1:9999");
    std::env::set_var("NOTIF_LOCALE", "en");
    std::env::set_var(
        "HNP_URL_TEMPLATE",
        "https://app.hacknplan.com/p/{ProjectId}/gamemodel?nodeId={DesignElementId}",
    );

    let config = Config::from_env().unwrap();
    assert_eq!(config.token, "s3cret");
    assert_eq!(config.bind_address, "127.0.0.1:9999");
    assert_eq!(config.locale, Locale::En);
    assert_eq!(
        config.hnp_url_template.as_deref(),
        Some("https://app.hacknplan.com/p/{ProjectId}/gamemodel?nodeId={DesignElementId}")
    );

    clear_env();
}

#[test]
#[serial]
fn unknown_locale_falls_back_to_spanish() {
    clear_env();
    std::env::set_var("TOKEN", "s3cret");
    std::env::set_var("DISCORD_WEBHOOK_URL", "https://discord.example/webhook");
    std::env::set_var("NOTIF_LOCALE", "fr");

    let config = Config::from_env().unwrap();
    assert_eq!(config.locale, Locale::Es);

    clear_env();
}
