//! Stepup Telegram Bot
//!
//! Main application entry point

use std::sync::Arc;
use std::time::Duration;
use anyhow::Context;
use teloxide::{prelude::*, types::Update};
use teloxide::dispatching::UpdateHandler;
use teloxide::utils::command::BotCommands;
use tracing::{info, warn};

use Stepup::{
    config::Settings,
    utils::logging,
    database::{create_pool, health_check, run_migrations, seed_reference_data, DatabaseService, SeedData, SessionRepository},
    services::ServiceFactory,
    state::{StateStorage, StateStorageManager},
    i18n::I18n,
    middleware::LoggingMiddleware,
    handlers::{self, Command, handle_callback_query, handle_command, handle_message},
};

type HandlerResult = Result<(), Box<dyn std::error::Error + Send + Sync>>;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv::dotenv().ok();

    // Load configuration
    let settings = Settings::new().context("failed to load configuration")?;
    settings.validate().context("invalid configuration")?;

    // Initialize logging; the guard flushes the log file on exit
    let _log_guard = logging::init_logging(&settings.logging)?;

    info!("Starting {}...", Stepup::info());

    // Initialize database connection
    info!("Connecting to database...");
    let db_pool = create_pool(&settings.database).await?;
    health_check(&db_pool).await?;

    info!("Running database migrations...");
    run_migrations(&db_pool).await?;

    if settings.database.seed_on_startup {
        let report = seed_reference_data(&db_pool, &SeedData::bundled()?).await?;
        info!(?report, "Reference data seeded");
    }

    let database_service = DatabaseService::new(db_pool.clone());
    info!(stats = %database_service.get_system_stats().await?, "Database ready");

    // Initialize i18n system
    info!("Loading translations...");
    let mut i18n = I18n::new(&settings.i18n);
    i18n.load_translations().await?;
    let stats = i18n.get_stats();
    info!(catalogs = stats.languages.len(), builtin_keys = stats.builtin_keys, "Translations ready");
    for lang in i18n.supported_languages() {
        let missing = i18n.missing_keys(lang);
        if !missing.is_empty() {
            warn!(lang = %lang, missing = ?missing, "Translation keys without any text");
        }
    }

    // Initialize state management
    let state_storage = StateStorage::new(
        SessionRepository::new(db_pool),
        settings.quiz.session_ttl_seconds,
    );
    let mut storage_manager = StateStorageManager::new(
        state_storage.clone(),
        Duration::from_secs(settings.quiz.cleanup_interval_seconds),
    );
    storage_manager.start_cleanup();

    // Initialize bot
    let bot = Bot::new(&settings.bot.token);
    if let Err(e) = bot.set_my_commands(Command::bot_commands()).await {
        warn!(error = %e, "Failed to register bot commands");
    }

    info!("Initializing services...");
    let services = ServiceFactory::new(bot.clone(), settings.clone(), database_service, state_storage);

    let services_arc = Arc::new(services);
    let i18n_arc = Arc::new(i18n);

    let mut dispatcher = Dispatcher::builder(bot, create_handler())
        .dependencies(dptree::deps![services_arc, i18n_arc, LoggingMiddleware::default()])
        .default_handler(|upd| async move {
            warn!("Unhandled update: {:?}", upd.id);
        })
        .enable_ctrlc_handler()
        .build();

    info!("Starting bot with polling mode...");
    dispatcher.dispatch().await;

    storage_manager.stop_cleanup();
    info!("Stepup bot has been shut down.");

    Ok(())
}

/// Create the main update handler
fn create_handler() -> UpdateHandler<Box<dyn std::error::Error + Send + Sync + 'static>> {
    dptree::entry()
        .inspect(|update: Update, logger: LoggingMiddleware| logger.log_update(&update))
        .branch(
            Update::filter_message()
                .branch(
                    dptree::entry()
                        .filter_command::<Command>()
                        .endpoint(handle_commands),
                )
                .branch(dptree::endpoint(handle_messages)),
        )
        .branch(Update::filter_callback_query().endpoint(handle_callbacks))
}

/// Handle bot commands
async fn handle_commands(
    bot: Bot,
    msg: Message,
    cmd: Command,
    services: Arc<ServiceFactory>,
    i18n: Arc<I18n>,
) -> HandlerResult {
    let chat_id = msg.chat.id;
    let user_id = msg.from.as_ref().map(|user| user.id.0 as i64);

    if let Err(e) = handle_command(bot.clone(), msg, cmd, (*services).clone(), (*i18n).clone()).await {
        handlers::report_error(&bot, Some(chat_id), user_id, &services, &i18n, "command", &e).await;
    }

    Ok(())
}

/// Handle regular messages
async fn handle_messages(
    bot: Bot,
    msg: Message,
    services: Arc<ServiceFactory>,
    i18n: Arc<I18n>,
) -> HandlerResult {
    let chat_id = msg.chat.id;
    let user_id = msg.from.as_ref().map(|user| user.id.0 as i64);

    if let Err(e) = handle_message(bot.clone(), msg, (*services).clone(), (*i18n).clone()).await {
        handlers::report_error(&bot, Some(chat_id), user_id, &services, &i18n, "message", &e).await;
    }

    Ok(())
}

/// Handle callback queries
async fn handle_callbacks(
    bot: Bot,
    query: CallbackQuery,
    services: Arc<ServiceFactory>,
    i18n: Arc<I18n>,
) -> HandlerResult {
    let user_id = query.from.id.0 as i64;
    let chat_id = query.message.as_ref().map(|m| m.chat().id);

    if let Err(e) = handle_callback_query(bot.clone(), query, (*services).clone(), (*i18n).clone()).await {
        handlers::report_error(&bot, chat_id, Some(user_id), &services, &i18n, "callback", &e).await;
    }

    Ok(())
}
