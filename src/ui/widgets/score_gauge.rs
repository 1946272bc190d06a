// SPDX-License-Identifier: MPL-2.0
//! Circular health score gauge drawn on a Canvas.

use crate::domain::nutrition::HealthScore;
use crate::ui::design_tokens::{opacity, sizing};
use crate::ui::theming::ColorScheme;
use iced::widget::canvas::{self, Canvas, Frame, Geometry, Path, Stroke};
use iced::{mouse, Color, Length, Point, Rectangle, Renderer, Theme};
use std::f32::consts::PI;

/// Line segments used for a full ring.
const FULL_RING_SEGMENTS: u16 = 72;

/// Ring whose filled arc is proportional to the score, colored by tier.
///
/// Built fresh on every `view`, so each draw goes straight to a new frame.
#[derive(Debug, Clone, Copy)]
pub struct ScoreGauge {
    score: HealthScore,
    fraction: f32,
    size: f32,
}

impl ScoreGauge {
    #[must_use]
    pub fn new(score: HealthScore) -> Self {
        Self {
            score,
            fraction: score.fraction().clamp(0.0, 1.0),
            size: sizing::GAUGE_DIAMETER,
        }
    }

    /// Filled portion of the ring (0.0 to 1.0).
    #[must_use]
    pub fn fraction(&self) -> f32 {
        self.fraction
    }

    /// Sweep angle of the filled arc, in radians.
    #[must_use]
    pub fn sweep(&self) -> f32 {
        2.0 * PI * self.fraction
    }

    /// Creates a Canvas widget from this gauge.
    pub fn into_element<Message: 'static>(self) -> iced::Element<'static, Message> {
        let size = self.size;
        Canvas::new(self)
            .width(Length::Fixed(size))
            .height(Length::Fixed(size))
            .into()
    }
}

impl<Message> canvas::Program<Message> for ScoreGauge {
    type State = ();

    fn draw(
        &self,
        _state: &Self::State,
        renderer: &Renderer,
        theme: &Theme,
        bounds: Rectangle,
        _cursor: mouse::Cursor,
    ) -> Vec<Geometry> {
        let color = ColorScheme::for_theme(theme).tier_color(self.score.tier());
        let mut frame = Frame::new(renderer, bounds.size());
        let center = frame.center();
        let radius = frame.width().min(frame.height()) / 2.0 - sizing::GAUGE_STROKE / 2.0;

        let track = Path::circle(center, radius);
        frame.stroke(
            &track,
            Stroke::default()
                .with_width(sizing::GAUGE_STROKE)
                .with_color(Color {
                    a: opacity::OVERLAY_SUBTLE,
                    ..color
                }),
        );

        if self.fraction > 0.0 {
            // Clockwise from 12 o'clock.
            let start_angle = -PI / 2.0;
            let sweep = self.sweep();

            #[allow(
                clippy::cast_possible_truncation,
                clippy::cast_sign_loss,
                clippy::cast_precision_loss
            )]
            let segments = ((f32::from(FULL_RING_SEGMENTS) * self.fraction).ceil() as u16).max(2);

            let mut arc_path = canvas::path::Builder::new();
            arc_path.move_to(Point::new(
                center.x + radius * start_angle.cos(),
                center.y + radius * start_angle.sin(),
            ));
            for i in 1..=segments {
                let t = f32::from(i) / f32::from(segments);
                let angle = start_angle + sweep * t;
                arc_path.line_to(Point::new(
                    center.x + radius * angle.cos(),
                    center.y + radius * angle.sin(),
                ));
            }

            frame.stroke(
                &arc_path.build(),
                Stroke::default()
                    .with_width(sizing::GAUGE_STROKE)
                    .with_color(color)
                    .with_line_cap(canvas::LineCap::Round),
            );
        }

        vec![frame.into_geometry()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sweep_is_proportional_to_score() {
        let half = ScoreGauge::new(HealthScore::new(50.0));
        assert!((half.sweep() - PI).abs() < 1e-5);

        let full = ScoreGauge::new(HealthScore::new(100.0));
        assert!((full.sweep() - 2.0 * PI).abs() < 1e-5);
    }

    #[test]
    fn zero_score_has_empty_arc() {
        let gauge = ScoreGauge::new(HealthScore::new(0.0));
        assert_eq!(gauge.fraction(), 0.0);
        assert_eq!(gauge.sweep(), 0.0);
    }

    #[test]
    fn gauge_is_a_plain_value() {
        let gauge = ScoreGauge::new(HealthScore::new(40.0));
        let copy = gauge;
        assert_eq!(copy.fraction(), gauge.fraction());
    }

    #[test]
    fn gauge_builds_element() {
        let gauge = ScoreGauge::new(HealthScore::new(75.0));
        let _element: iced::Element<'_, ()> = gauge.into_element();
    }
}
