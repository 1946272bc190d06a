// SPDX-License-Identifier: MPL-2.0
//! Result card: score gauge, nutrient breakdown, benefits and suggestions.

use super::component::Message;
use crate::domain::nutrition::{
    AnalysisResult, HealthScore, Nutrient, NutrientBreakdown, ResultMetadata,
};
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::styles;
use crate::ui::theming::ColorScheme;
use crate::ui::widgets::ScoreGauge;
use iced::widget::{text, Column, Container, Row, Text};
use iced::{alignment, Element, Length, Theme};

/// Renders the whole result.
pub fn view<'a>(result: &'a AnalysisResult, i18n: &'a I18n) -> Element<'a, Message> {
    let mut column = Column::new()
        .spacing(spacing::LG)
        .push(Text::new(result.food_name.as_str()).size(typography::TITLE_LG))
        .push(score_section(result, i18n));

    if !result.nutrition_info.trim().is_empty() {
        column = column.push(section(
            i18n.tr("nutrition-info-title"),
            Text::new(result.nutrition_info.as_str())
                .size(typography::BODY)
                .into(),
        ));
    }

    column = column.push(section(
        i18n.tr("breakdown-title"),
        breakdown_grid(&result.breakdown, i18n),
    ));

    if !result.benefits.is_empty() {
        column = column.push(section(
            i18n.tr("benefits-title"),
            bullet_list(&result.benefits, "✓"),
        ));
    }

    if !result.suggestions.is_empty() {
        column = column.push(section(
            i18n.tr("suggestions-title"),
            bullet_list(&result.suggestions, "•"),
        ));
    }

    if !result.metadata.is_empty() {
        column = column.push(metadata_section(&result.metadata, i18n));
    }

    Container::new(column)
        .width(Length::Fill)
        .padding(spacing::LG)
        .style(styles::container::card)
        .into()
}

/// Formats an amount with its unit, dropping the decimal for whole numbers.
#[must_use]
pub fn format_amount(value: f64, unit: &str) -> String {
    if value.fract() == 0.0 {
        format!("{value:.0} {unit}")
    } else {
        format!("{value:.1} {unit}")
    }
}

fn score_section<'a>(result: &'a AnalysisResult, i18n: &'a I18n) -> Element<'a, Message> {
    let score = result.health_score;
    let tier = score.tier();

    let gauge = ScoreGauge::new(score).into_element();

    let tier_label = format!("{} {}", tier.emoji(), i18n.tr(tier.i18n_key()));
    let tier_badge = Container::new(Text::new(tier_label).size(typography::BODY_SM))
        .padding([spacing::XXS, spacing::SM])
        .style(move |theme: &Theme| {
            styles::container::badge(ColorScheme::for_theme(theme).tier_color(tier))(theme)
        });

    let details = Column::new()
        .spacing(spacing::XS)
        .push(Text::new(i18n.tr("score-title")).size(typography::BODY_SM))
        .push(
            Text::new(format!("{score}/{}", HealthScore::MAX))
                .size(typography::DISPLAY),
        )
        .push(tier_badge);

    Row::new()
        .spacing(spacing::LG)
        .align_y(alignment::Vertical::Center)
        .push(gauge)
        .push(details)
        .into()
}

fn breakdown_grid<'a>(breakdown: &NutrientBreakdown, i18n: &'a I18n) -> Element<'a, Message> {
    let tiles = breakdown
        .iter()
        .map(|(nutrient, amount)| nutrient_tile(nutrient, amount, breakdown, i18n));

    Row::with_children(tiles)
        .spacing(spacing::SM)
        .wrap()
        .vertical_spacing(spacing::SM)
        .into()
}

fn nutrient_tile<'a>(
    nutrient: Nutrient,
    amount: f64,
    breakdown: &NutrientBreakdown,
    i18n: &'a I18n,
) -> Element<'a, Message> {
    let status = breakdown.status(nutrient);

    let status_label = Text::new(i18n.tr(status.i18n_key())).size(typography::CAPTION);
    let status_badge = Container::new(status_label)
        .padding([spacing::XXS / 2.0, spacing::XS])
        .style(move |theme: &Theme| {
            styles::container::badge(ColorScheme::for_theme(theme).status_color(status))(theme)
        });

    let content = Column::new()
        .spacing(spacing::XXS)
        .push(
            Text::new(i18n.tr(nutrient.i18n_key()))
                .size(typography::CAPTION)
                .style(|theme: &Theme| text::Style {
                    color: Some(ColorScheme::for_theme(theme).text_secondary),
                }),
        )
        .push(Text::new(format_amount(amount, nutrient.unit())).size(typography::TITLE_SM))
        .push(status_badge);

    Container::new(content)
        .width(Length::Fixed(sizing::NUTRIENT_TILE_WIDTH))
        .padding(spacing::SM)
        .style(styles::container::card)
        .into()
}

fn bullet_list<'a>(items: &'a [String], marker: &'static str) -> Element<'a, Message> {
    let rows = items.iter().map(|item| {
        Row::new()
            .spacing(spacing::XS)
            .push(Text::new(marker).size(typography::BODY))
            .push(Text::new(item.as_str()).size(typography::BODY))
            .into()
    });

    Column::with_children(rows).spacing(spacing::XS).into()
}

fn metadata_section<'a>(metadata: &'a ResultMetadata, i18n: &'a I18n) -> Element<'a, Message> {
    let mut column = Column::new().spacing(spacing::XS);

    if let Some(serving) = &metadata.serving_size {
        column = column.push(labeled(i18n.tr("serving-size-label"), serving.clone()));
    }
    if let Some(calories) = metadata.calories_per_serving {
        column = column.push(labeled(
            i18n.tr("calories-per-serving-label"),
            format_amount(calories, Nutrient::Calories.unit()),
        ));
    }
    if !metadata.dietary_tags.is_empty() {
        let tags = metadata.dietary_tags.iter().map(|tag| {
            Container::new(Text::new(tag.as_str()).size(typography::CAPTION))
                .padding([spacing::XXS / 2.0, spacing::XS])
                .style(|theme: &Theme| {
                    styles::container::badge(ColorScheme::for_theme(theme).info)(theme)
                })
                .into()
        });
        column = column
            .push(Text::new(i18n.tr("dietary-tags-title")).size(typography::BODY_SM))
            .push(
            Row::with_children(tags)
                .spacing(spacing::XS)
                .wrap()
                .vertical_spacing(spacing::XS),
        );
    }

    column.into()
}

fn labeled<'a>(label: String, value: String) -> Element<'a, Message> {
    Row::new()
        .spacing(spacing::XS)
        .push(Text::new(label).size(typography::BODY_SM))
        .push(Text::new(value).size(typography::BODY))
        .into()
}

fn section<'a>(title: String, body: Element<'a, Message>) -> Element<'a, Message> {
    Column::new()
        .spacing(spacing::SM)
        .push(Text::new(title).size(typography::TITLE_SM))
        .push(body)
        .into()
}
