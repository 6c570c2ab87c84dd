//! Feedback flow: prompt, forward to the admin chat, failure reporting

mod helpers;

use helpers::*;
use Stepup::handlers::commands::{feedback, start};
use Stepup::handlers::{handle_callback_query, handle_message};

const USER_ID: i64 = 5150;
const ADMIN_CHAT_ID: i64 = -100777;

async fn english_user(ctx: &TestContext) {
    start::handle_start(ctx.bot.clone(), create_text_message(USER_ID, "/start"), ctx.services.clone(), ctx.i18n.clone())
        .await
        .unwrap();
    handle_callback_query(ctx.bot.clone(), create_callback_query(USER_ID, "lang:en"), ctx.services.clone(), ctx.i18n.clone())
        .await
        .unwrap();
    ctx.telegram_mock.reset_requests().await;
}

async fn begin_feedback(ctx: &TestContext) {
    feedback::handle_feedback(ctx.bot.clone(), create_text_message(USER_ID, "/feedback"), ctx.services.clone(), ctx.i18n.clone())
        .await
        .unwrap();
}

async fn send_text(ctx: &TestContext, text: &str) {
    handle_message(ctx.bot.clone(), create_text_message(USER_ID, text), ctx.services.clone(), ctx.i18n.clone())
        .await
        .unwrap();
}

#[tokio::test]
async fn test_feedback_is_forwarded_to_admin() {
    let ctx = TestContext::new_with_config(TestConfig { seed: true, admin_chat_id: Some(ADMIN_CHAT_ID) }).await;
    english_user(&ctx).await;

    begin_feedback(&ctx).await;
    assert!(ctx.services.feedback_service.is_pending(USER_ID).await.unwrap());

    // Menu labels are feedback too while the prompt is pending
    send_text(&ctx, "🧭 Test").await;

    let requests = ctx.telegram_mock.requests("sendMessage").await;
    assert_eq!(requests.len(), 3);
    assert_eq!(requests[0]["text"], "Send your feedback in one message — I’ll forward it to admins.");
    assert_eq!(requests[1]["chat_id"], ADMIN_CHAT_ID);
    assert_eq!(
        requests[1]["text"],
        format!("[Feedback] From: {} ({})\n\n🧭 Test", test_full_name(), USER_ID)
    );
    assert_eq!(requests[2]["chat_id"], USER_ID);
    assert_eq!(requests[2]["text"], "Thanks! Message forwarded to admins.");

    assert!(!ctx.services.feedback_service.is_pending(USER_ID).await.unwrap());
}

#[tokio::test]
async fn test_forward_failure_is_reported() {
    let ctx = TestContext::new_with_config(TestConfig { seed: true, admin_chat_id: Some(ADMIN_CHAT_ID) }).await;
    english_user(&ctx).await;
    ctx.telegram_mock.fail_send_message_to(ADMIN_CHAT_ID).await;

    begin_feedback(&ctx).await;
    send_text(&ctx, "The bot is great").await;

    let texts = ctx.telegram_mock.sent_texts().await;
    assert_eq!(texts.last().unwrap(), "Could not forward your message. Please try again later.");
    assert!(!ctx.services.feedback_service.is_pending(USER_ID).await.unwrap());
}

#[tokio::test]
async fn test_starting_quiz_replaces_feedback_prompt() {
    let ctx = TestContext::new().await;
    english_user(&ctx).await;

    begin_feedback(&ctx).await;
    send_text(&ctx, "/test").await;

    // "/test" typed as text is forwarded as feedback, not treated as a command
    assert!(!ctx.services.feedback_service.is_pending(USER_ID).await.unwrap());

    begin_feedback(&ctx).await;
    Stepup::handlers::commands::quiz::handle_test(
        ctx.bot.clone(),
        create_text_message(USER_ID, "/test"),
        ctx.services.clone(),
        ctx.i18n.clone(),
    )
    .await
    .unwrap();

    assert!(!ctx.services.feedback_service.is_pending(USER_ID).await.unwrap());
    let context = ctx.services.storage.load_context(USER_ID).await.unwrap().unwrap();
    assert!(context.quiz_progress().is_some());
}
