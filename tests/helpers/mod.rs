//! Test helpers module
//!
//! This module provides utilities and helpers for testing the Stepup bot:
//! a mock Telegram API, an in-memory database and builders for updates.

#![allow(dead_code)]

pub mod telegram_mock;
pub mod database_helper;
pub mod test_context;
pub mod test_data;

pub use telegram_mock::*;
pub use database_helper::*;
pub use test_context::*;
pub use test_data::*;
