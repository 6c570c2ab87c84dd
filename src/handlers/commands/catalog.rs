//! Catalog, roles and tip handlers

use teloxide::{Bot, types::{ChatId, Message, ParseMode}, prelude::*};
use crate::utils::errors::Result;
use crate::utils::helpers::escape_html;
use crate::utils::logging::log_user_action;
use crate::services::ServiceFactory;
use crate::i18n::{params, I18n};
use crate::models::{Category, FavoriteKind, Profession};
use crate::handlers::{keyboards, sender};

/// Handle /catalog and the catalog menu button
pub async fn handle_catalog(bot: Bot, msg: Message, services: ServiceFactory, i18n: I18n) -> Result<()> {
    let lang = services.user_service.language_of(sender(&msg)?.id.0 as i64).await?;

    bot.send_message(msg.chat.id, i18n.t("catalog.choose_direction", &lang, None))
        .reply_markup(keyboards::categories(&lang, &i18n))
        .await?;
    Ok(())
}

/// Handle /roles: every track as a bullet plus the category keyboard
pub async fn handle_roles(bot: Bot, msg: Message, services: ServiceFactory, i18n: I18n) -> Result<()> {
    let lang = services.user_service.language_of(sender(&msg)?.id.0 as i64).await?;

    let mut lines = vec![i18n.t("catalog.choose_direction", &lang, None)];
    lines.extend(
        Category::ALL
            .iter()
            .map(|category| format!("• {}", i18n.category_title(*category, &lang))),
    );

    bot.send_message(msg.chat.id, lines.join("\n"))
        .reply_markup(keyboards::categories(&lang, &i18n))
        .await?;
    Ok(())
}

/// Handle a `cat:<category>` button
pub async fn handle_category_selected(
    bot: &Bot,
    chat_id: ChatId,
    user_id: i64,
    name: String,
    category: Category,
    services: &ServiceFactory,
    i18n: &I18n,
) -> Result<()> {
    services.user_service.register(user_id, name).await?;
    let lang = services.user_service.language_of(user_id).await?;

    let professions = services.catalog_service.professions_for(user_id, category).await?;
    log_user_action(user_id, "category_selected", Some(category.as_str()));

    if professions.is_empty() {
        bot.send_message(chat_id, i18n.t("common.no_data", &lang, None)).await?;
        return Ok(());
    }

    let title = i18n.category_title(category, &lang);
    let header = i18n.t("catalog.professions_for", &lang, Some(&params(&[("category", &title)])));
    bot.send_message(chat_id, format!("<b>{}</b>", escape_html(&header)))
        .parse_mode(ParseMode::Html)
        .await?;

    for profession in &professions {
        bot.send_message(chat_id, format_profession(profession, &lang, i18n))
            .parse_mode(ParseMode::Html)
            .reply_markup(keyboards::favorite_toggle(FavoriteKind::Profession, profession.id, &lang, i18n))
            .await?;
    }

    Ok(())
}

fn format_profession(profession: &Profession, lang: &str, i18n: &I18n) -> String {
    let mut lines = vec![format!("• <b>{}</b>", escape_html(profession.name_for(lang)))];

    let description = profession.description_for(lang);
    if !description.is_empty() {
        lines.push(escape_html(description));
    }
    let skills = profession.skills_for(lang);
    if !skills.is_empty() {
        lines.push(format!("{} {}", i18n.t("catalog.skills", lang, None), escape_html(skills)));
    }
    if !profession.link.is_empty() {
        lines.push(escape_html(&profession.link));
    }

    lines.join("\n")
}

/// Handle /tip and the tip menu button
pub async fn handle_tip(bot: Bot, msg: Message, services: ServiceFactory, i18n: I18n) -> Result<()> {
    let lang = services.user_service.language_of(sender(&msg)?.id.0 as i64).await?;

    let tip = match services.catalog_service.random_tip().await? {
        Some(tip) => tip.text_for(&lang).to_string(),
        None => i18n.t("tip.default", &lang, None),
    };

    bot.send_message(msg.chat.id, format!("{}\n{}", i18n.t("tip.today", &lang, None), tip))
        .await?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::I18nConfig;

    #[test]
    fn test_format_profession_escapes_and_localizes() {
        let i18n = I18n::new(&I18nConfig {
            default_language: "ru".to_string(),
            supported_languages: vec!["ru".to_string(), "en".to_string(), "az".to_string()],
            translations_dir: "does-not-exist".to_string(),
        });
        let profession = Profession {
            id: 1,
            category: "tech".to_string(),
            name: "Аналитик".to_string(),
            description: "Данные".to_string(),
            skills: "SQL".to_string(),
            link: String::new(),
            domain: "it".to_string(),
            name_en: Some("Data <Analyst>".to_string()),
            description_en: None,
            skills_en: Some("SQL & Python".to_string()),
            name_az: None,
            description_az: None,
            skills_az: None,
        };

        assert_eq!(
            format_profession(&profession, "en", &i18n),
            "• <b>Data &lt;Analyst&gt;</b>\nДанные\nSkills: SQL &amp; Python"
        );
    }
}
