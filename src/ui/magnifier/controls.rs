// SPDX-License-Identifier: MPL-2.0
//! Customization panel: scale, rotation and size sliders plus lens actions.

use super::Message;
use crate::config::{FRACTION_SLIDER_STEP, SIZE_SLIDER_STEP};
use crate::domain::lens::{rotation_bounds, scale_bounds, size_bounds, LensParams};
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::styles;
use iced::alignment::Vertical;
use iced::widget::{button, container, slider, Column, Row, Space, Text};
use iced::{Element, Length};

#[derive(Clone)]
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
}

pub fn view<'a>(ctx: ViewContext<'a>, params: &LensParams) -> Element<'a, Message> {
    let title = Text::new(ctx.i18n.tr("controls-title")).size(typography::TITLE_SM);

    let scale = labeled_slider(
        ctx.i18n.tr("controls-scale-label"),
        format!("{:.2}", params.scale.value()),
        slider(
            scale_bounds::SLIDER_MIN..=scale_bounds::SLIDER_MAX,
            params
                .scale
                .value()
                .clamp(scale_bounds::SLIDER_MIN, scale_bounds::SLIDER_MAX),
            Message::ScaleChanged,
        )
        .step(FRACTION_SLIDER_STEP)
        .into(),
    );

    let rotation = labeled_slider(
        ctx.i18n.tr("controls-rotation-label"),
        format!("{:.0}°", params.rotation_degrees()),
        slider(
            rotation_bounds::MIN..=rotation_bounds::MAX,
            params.rotation.value(),
            Message::RotationChanged,
        )
        .step(FRACTION_SLIDER_STEP)
        .into(),
    );

    let size = labeled_slider(
        ctx.i18n.tr("controls-size-label"),
        format!("{:.0} px", params.diameter().value()),
        slider(
            size_bounds::MIN..=size_bounds::MAX,
            params.size.value(),
            Message::SizeChanged,
        )
        .step(SIZE_SLIDER_STEP)
        .into(),
    );

    let actions = Row::new()
        .spacing(spacing::XS)
        .push(
            button(Text::new(ctx.i18n.tr("controls-reset-lens")))
                .on_press(Message::ResetLens)
                .padding([spacing::XXS, spacing::SM]),
        )
        .push(
            button(Text::new(ctx.i18n.tr("controls-open-image")))
                .on_press(Message::OpenImage)
                .padding([spacing::XXS, spacing::SM]),
        );

    let content = Column::new()
        .spacing(spacing::MD)
        .push(title)
        .push(scale)
        .push(rotation)
        .push(size)
        .push(actions);

    container(content)
        .padding(spacing::MD)
        .width(Length::Fixed(sizing::CONTROLS_WIDTH))
        .height(Length::Fill)
        .style(styles::container::panel)
        .into()
}

fn labeled_slider<'a>(
    label: String,
    value: String,
    slider: Element<'a, Message>,
) -> Element<'a, Message> {
    let caption = Row::new()
        .align_y(Vertical::Center)
        .push(Text::new(label).size(typography::BODY))
        .push(Space::new().width(Length::Fill))
        .push(Text::new(value).size(typography::CAPTION));

    Column::new()
        .spacing(spacing::XXS)
        .push(caption)
        .push(slider)
        .into()
}
