//! Test context
//!
//! Wires a mock Telegram API, an in-memory database and the real services
//! together so handlers can be called directly.

use teloxide::Bot;
use Stepup::config::Settings;
use Stepup::database::{DatabaseService, SessionRepository};
use Stepup::i18n::I18n;
use Stepup::services::ServiceFactory;
use Stepup::state::StateStorage;

use super::{TelegramMockServer, TestDatabase, TEST_BOT_TOKEN};

pub struct TestContext {
    pub telegram_mock: TelegramMockServer,
    pub database: TestDatabase,
    pub settings: Settings,
    pub bot: Bot,
    pub services: ServiceFactory,
    pub i18n: I18n,
}

/// Configuration for test context setup
#[derive(Debug, Clone, Default)]
pub struct TestConfig {
    pub seed: bool,
    pub admin_chat_id: Option<i64>,
}

impl TestContext {
    /// Seeded database, no admin chat
    pub async fn new() -> Self {
        Self::new_with_config(TestConfig { seed: true, admin_chat_id: None }).await
    }

    pub async fn new_with_config(config: TestConfig) -> Self {
        let telegram_mock = TelegramMockServer::new().await;
        let database = if config.seed {
            TestDatabase::seeded().await
        } else {
            TestDatabase::new().await
        };

        let mut settings = Settings::default();
        settings.bot.token = TEST_BOT_TOKEN.to_string();
        settings.bot.admin_chat_id = config.admin_chat_id;
        settings.database.url = "sqlite::memory:".to_string();
        settings.i18n.translations_dir = concat!(env!("CARGO_MANIFEST_DIR"), "/translations").to_string();

        let bot = Bot::new(TEST_BOT_TOKEN)
            .set_api_url(telegram_mock.api_url().parse().expect("valid mock url"));

        let storage = StateStorage::new(
            SessionRepository::new(database.pool.clone()),
            settings.quiz.session_ttl_seconds,
        );
        let services = ServiceFactory::new(
            bot.clone(),
            settings.clone(),
            DatabaseService::new(database.pool.clone()),
            storage,
        );

        let mut i18n = I18n::new(&settings.i18n);
        i18n.load_translations().await.expect("Failed to load translations");

        Self {
            telegram_mock,
            database,
            settings,
            bot,
            services,
            i18n,
        }
    }

    /// Verify that the Telegram API was called a specific number of times
    pub async fn verify_telegram_calls(&self, method_name: &str, expected_calls: usize) {
        self.telegram_mock.verify_endpoint_called(method_name, expected_calls).await;
    }
}
