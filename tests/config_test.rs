//! Configuration loading from the environment

use serial_test::serial;
use Stepup::config::Settings;

const VARS: [&str; 4] = ["BOT_TOKEN", "ADMIN_CHAT_ID", "CAREER_BOT_DB", "STEPUP__QUIZ__SESSION_TTL_SECONDS"];

fn clear_env() {
    for var in VARS {
        std::env::remove_var(var);
    }
}

#[test]
#[serial]
fn test_legacy_variables_override_defaults() {
    clear_env();
    std::env::set_var("BOT_TOKEN", "123:abc");
    std::env::set_var("ADMIN_CHAT_ID", "-100500");
    std::env::set_var("CAREER_BOT_DB", "/tmp/career.db");
    std::env::set_var("STEPUP__QUIZ__SESSION_TTL_SECONDS", "600");

    let settings = Settings::new().expect("settings load");
    clear_env();

    assert_eq!(settings.bot.token, "123:abc");
    assert_eq!(settings.bot.admin_chat_id, Some(-100500));
    assert_eq!(settings.database.url, "sqlite:///tmp/career.db");
    assert_eq!(settings.quiz.session_ttl_seconds, 600);
    assert_eq!(settings.i18n.default_language, "ru");
    assert!(settings.validate().is_ok());
}

#[test]
#[serial]
fn test_zero_admin_chat_id_disables_forwarding() {
    clear_env();
    std::env::set_var("ADMIN_CHAT_ID", "0");

    let settings = Settings::new().expect("settings load");
    clear_env();

    assert_eq!(settings.bot.admin_chat_id, None);
}

#[test]
#[serial]
fn test_invalid_admin_chat_id_is_rejected() {
    clear_env();
    std::env::set_var("ADMIN_CHAT_ID", "not-a-number");

    let result = Settings::new();
    clear_env();

    assert!(result.is_err());
}

#[test]
#[serial]
fn test_missing_token_fails_validation() {
    clear_env();
    let settings = Settings::new().expect("settings load");
    assert!(settings.validate().is_err());
}
