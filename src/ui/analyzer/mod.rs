// SPDX-License-Identifier: MPL-2.0
//! Analyzer screen.
//!
//! The only screen of the application: a query field with quick
//! suggestions on top, and either the last result, an error, or an empty
//! state below.

mod component;
pub mod empty_state;
pub mod result_card;
pub mod search_bar;

pub use component::{error_message, Effect, Message, State, ViewContext};
