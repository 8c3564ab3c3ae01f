// SPDX-License-Identifier: MPL-2.0
//! Application header bar with the product mark and tagline.

use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{palette, radius, spacing, typography};
use crate::ui::styles;
use iced::widget::{container, text, Column, Container, Row, Text};
use iced::{alignment, Border, Element, Length, Theme};

/// Renders the top header: brand mark, product name, and tagline.
pub fn view<'a, M: 'a>(i18n: &I18n) -> Element<'a, M> {
    let mark = Container::new(
        Text::new("▶")
            .size(typography::TITLE_MD)
            .color(palette::WHITE),
    )
    .padding(spacing::XS)
    .style(|_theme: &Theme| container::Style {
        background: Some(styles::container::brand_gradient(
            std::f32::consts::FRAC_PI_4,
            palette::PRIMARY_500,
            palette::ACCENT_600,
        )),
        border: Border {
            radius: radius::MD.into(),
            ..Default::default()
        },
        ..Default::default()
    });

    let titles = Column::new()
        .push(Text::new(i18n.tr("header-title")).size(typography::TITLE_MD))
        .push(
            Text::new(i18n.tr("header-tagline"))
                .size(typography::BODY_SM)
                .style(|theme: &Theme| text::Style {
                    color: Some(theme.extended_palette().background.weak.text),
                }),
        );

    Container::new(
        Row::new()
            .spacing(spacing::SM)
            .align_y(alignment::Vertical::Center)
            .push(mark)
            .push(titles),
    )
    .width(Length::Fill)
    .padding([spacing::SM, spacing::LG])
    .into()
}
