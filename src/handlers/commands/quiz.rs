//! Career test handlers

use teloxide::{Bot, types::{ChatId, Message, ParseMode}, prelude::*};
use crate::utils::errors::Result;
use crate::utils::helpers::escape_html;
use crate::services::{format_results, question_header, QuizStep, ServiceFactory};
use crate::i18n::I18n;
use crate::handlers::{keyboards, sender};

/// Handle /test and the test menu button
pub async fn handle_test(bot: Bot, msg: Message, services: ServiceFactory, i18n: I18n) -> Result<()> {
    let user = sender(&msg)?;
    let user_id = user.id.0 as i64;

    services.user_service.register(user_id, user.full_name()).await?;
    let lang = services.user_service.language_of(user_id).await?;

    let step = services.quiz_service.start(user_id).await?;
    send_step(&bot, msg.chat.id, step, &lang, &i18n).await?;
    Ok(())
}

/// Handle an `ans:<id>` button; returns the callback notice, if any
pub async fn handle_answer(
    bot: &Bot,
    chat_id: ChatId,
    user_id: i64,
    answer_id: i64,
    services: &ServiceFactory,
    i18n: &I18n,
) -> Result<Option<String>> {
    let lang = services.user_service.language_of(user_id).await?;
    let step = services.quiz_service.answer(user_id, answer_id).await?;
    send_step(bot, chat_id, step, &lang, i18n).await
}

async fn send_step(bot: &Bot, chat_id: ChatId, step: QuizStep, lang: &str, i18n: &I18n) -> Result<Option<String>> {
    match step {
        QuizStep::Unavailable => {
            bot.send_message(chat_id, i18n.t("quiz.unavailable", lang, None)).await?;
        }
        QuizStep::Question(view) => {
            let text = format!(
                "{}\n\n{}",
                question_header(&view, lang, i18n),
                escape_html(view.question.text_for(lang))
            );
            bot.send_message(chat_id, text)
                .parse_mode(ParseMode::Html)
                .reply_markup(keyboards::answers(&view.answers, lang, i18n))
                .await?;
        }
        QuizStep::Finished(scores) => {
            bot.send_message(chat_id, format_results(&scores, lang, i18n))
                .parse_mode(ParseMode::Html)
                .await?;
        }
        QuizStep::Expired => {
            bot.send_message(chat_id, i18n.t("quiz.expired", lang, None)).await?;
        }
        QuizStep::Ignored => {}
        QuizStep::UnknownAnswer => return Ok(Some(i18n.t("common.ok", lang, None))),
    }

    Ok(None)
}
