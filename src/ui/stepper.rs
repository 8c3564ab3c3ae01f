// SPDX-License-Identifier: MPL-2.0
//! Three-step wizard indicator.
//!
//! Shows where the user is in the upload → generate → customize flow.
//! Completed steps render a checkmark, the active step is highlighted, and
//! future steps are dimmed.

use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{palette, radius, sizing, spacing, typography};
use iced::widget::{container, Column, Container, Row, Space, Text};
use iced::{alignment, Background, Border, Color, Element, Length, Theme};

/// The wizard steps, in order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Step {
    Upload,
    Generate,
    Review,
}

impl Step {
    /// All steps in display order.
    pub const ALL: [Step; 3] = [Step::Upload, Step::Generate, Step::Review];

    /// One-based display number.
    #[must_use]
    pub fn number(self) -> usize {
        match self {
            Step::Upload => 1,
            Step::Generate => 2,
            Step::Review => 3,
        }
    }

    /// I18n key for the step label.
    #[must_use]
    pub fn label_key(self) -> &'static str {
        match self {
            Step::Upload => "stepper-upload",
            Step::Generate => "stepper-generate",
            Step::Review => "stepper-review",
        }
    }
}

/// Renders the step indicator row for the given active step.
pub fn view<'a, M: 'a>(active: Step, i18n: &I18n) -> Element<'a, M> {
    let mut row = Row::new()
        .spacing(spacing::XS)
        .align_y(alignment::Vertical::Center);

    for (index, step) in Step::ALL.into_iter().enumerate() {
        if index > 0 {
            row = row.push(connector(step <= active));
        }
        row = row.push(step_badge(step, active, i18n));
    }

    Container::new(row)
        .width(Length::Fill)
        .align_x(alignment::Horizontal::Center)
        .padding([spacing::MD, spacing::LG])
        .into()
}

fn step_badge<'a, M: 'a>(step: Step, active: Step, i18n: &I18n) -> Element<'a, M> {
    let completed = step < active;
    let current = step == active;

    let circle_text = if completed {
        "✓".to_string()
    } else {
        step.number().to_string()
    };

    let (background, text_color) = if completed || current {
        (palette::PRIMARY_500, palette::WHITE)
    } else {
        (palette::GRAY_200, palette::GRAY_700)
    };

    let circle = Container::new(
        Text::new(circle_text)
            .size(typography::BODY_LG)
            .color(text_color),
    )
    .width(Length::Fixed(sizing::STEP_CIRCLE))
    .height(Length::Fixed(sizing::STEP_CIRCLE))
    .align_x(alignment::Horizontal::Center)
    .align_y(alignment::Vertical::Center)
    .style(move |_theme: &Theme| container::Style {
        background: Some(Background::Color(background)),
        border: Border {
            radius: radius::FULL.into(),
            ..Default::default()
        },
        ..Default::default()
    });

    let label = Text::new(i18n.tr(step.label_key()))
        .size(typography::BODY_SM)
        .style(move |theme: &Theme| iced::widget::text::Style {
            color: Some(if current {
                palette::PRIMARY_500
            } else if completed {
                theme.palette().text
            } else {
                Color {
                    a: 0.6,
                    ..theme.palette().text
                }
            }),
        });

    Column::new()
        .spacing(spacing::XXS)
        .align_x(alignment::Horizontal::Center)
        .push(circle)
        .push(label)
        .into()
}

fn connector<'a, M: 'a>(reached: bool) -> Element<'a, M> {
    let color = if reached {
        palette::PRIMARY_400
    } else {
        palette::GRAY_200
    };

    Container::new(
        Space::new()
            .width(Length::Fixed(64.0))
            .height(Length::Fixed(2.0)),
    )
        .style(move |_theme: &Theme| container::Style {
            background: Some(Background::Color(color)),
            border: Border {
                radius: radius::FULL.into(),
                ..Default::default()
            },
            ..Default::default()
        })
        .into()
}
