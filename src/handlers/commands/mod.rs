//! Command handlers module
//!
//! This module contains handlers for all bot commands like /start, /help, etc.

pub mod start;
pub mod help;
pub mod quiz;
pub mod catalog;
pub mod courses;
pub mod favorites;
pub mod profile;
pub mod feedback;

use teloxide::{Bot, types::Message, utils::command::BotCommands};
use crate::utils::errors::Result;
use crate::services::ServiceFactory;
use crate::i18n::I18n;

/// All available bot commands
#[derive(BotCommands, Clone, Debug, PartialEq, Eq)]
#[command(rename_rule = "lowercase", description = "Stepup commands:")]
pub enum Command {
    #[command(description = "Start the bot")]
    Start,
    #[command(description = "Show help information")]
    Help,
    #[command(description = "About the bot")]
    About,
    #[command(description = "Show your Telegram ID")]
    Id,
    #[command(description = "Clear your profile")]
    Reset,
    #[command(description = "Change language")]
    Lang,
    #[command(description = "Take the career test")]
    Test,
    #[command(description = "Open the track catalog")]
    Catalog,
    #[command(description = "Free courses for your track")]
    Courses,
    #[command(description = "Show favorites")]
    Favorites,
    #[command(rename = "fav_courses", description = "Only favorite courses")]
    FavCourses,
    #[command(description = "List of tracks")]
    Roles,
    #[command(description = "Show your profile")]
    Profile,
    #[command(description = "Daily tip")]
    Tip,
    #[command(description = "Send feedback")]
    Feedback,
}

/// Main command dispatcher
pub async fn handle_command(
    bot: Bot,
    msg: Message,
    cmd: Command,
    services: ServiceFactory,
    i18n: I18n,
) -> Result<()> {
    match cmd {
        Command::Start => start::handle_start(bot, msg, services, i18n).await,
        Command::Help => help::handle_help(bot, msg, services, i18n).await,
        Command::About => help::handle_about(bot, msg, services, i18n).await,
        Command::Id => help::handle_id(bot, msg, services, i18n).await,
        Command::Reset => start::handle_reset(bot, msg, services, i18n).await,
        Command::Lang => start::handle_language_command(bot, msg, services, i18n).await,
        Command::Test => quiz::handle_test(bot, msg, services, i18n).await,
        Command::Catalog => catalog::handle_catalog(bot, msg, services, i18n).await,
        Command::Courses => courses::handle_courses(bot, msg, services, i18n).await,
        Command::Favorites => favorites::handle_favorites(bot, msg, services, i18n).await,
        Command::FavCourses => favorites::handle_favorite_courses(bot, msg, services, i18n).await,
        Command::Roles => catalog::handle_roles(bot, msg, services, i18n).await,
        Command::Profile => profile::handle_profile(bot, msg, services, i18n).await,
        Command::Tip => catalog::handle_tip(bot, msg, services, i18n).await,
        Command::Feedback => feedback::handle_feedback(bot, msg, services, i18n).await,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_commands() {
        assert_eq!(Command::parse("/start", "stepup_bot").unwrap(), Command::Start);
        assert_eq!(Command::parse("/fav_courses", "stepup_bot").unwrap(), Command::FavCourses);
        assert_eq!(Command::parse("/lang@stepup_bot", "stepup_bot").unwrap(), Command::Lang);
        assert!(Command::parse("/events", "stepup_bot").is_err());
    }
}
