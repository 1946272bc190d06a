// SPDX-License-Identifier: MPL-2.0
pub mod score_gauge;

pub use score_gauge::ScoreGauge;
