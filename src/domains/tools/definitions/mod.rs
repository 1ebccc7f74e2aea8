//! Tool definitions module.
//!
//! This module exports all available tool definitions.
//! Each tool is defined in its own file for better maintainability.

pub mod base_url;
pub mod cashback;
pub mod common;
pub mod gift_cards;
pub mod servers;

pub use base_url::{SetBaseUrlParams, SetBaseUrlTool};
pub use cashback::{CashbackParams, CashbackTool};
pub use common::{ValidationIssue, json_result, require_string, validation_error_result};
pub use gift_cards::{GiftCardsParams, GiftCardsTool};
pub use servers::{GetServersParams, GetServersTool, KNOWN_SERVERS, ServerRecord};
