// SPDX-License-Identifier: MPL-2.0
//! Toast card widget.
//!
//! A card is a row `[icon] [body] [close]` (reversed for right-to-left
//! toasts) above an optional progress bar, wrapped in a `mouse_area` that
//! reports hover, press and click. While a toast is dragged its card is
//! shifted by padding and faded through color alpha.

use super::Message;
use crate::container::content::{Body, ComponentContext};
use crate::container::DisplayedToast;
use crate::ui::design_tokens::{
    border, opacity, palette, radius, shadow, sizing, spacing, typography,
};
use crate::ui::theming::{toast_colors, ToastColors};
use iced::widget::{button, container, mouse_area, tooltip, Column, Container, Row, Text};
use iced::{alignment, Background, Border, Color, Element, Length, Padding, Theme};

/// Renders a single toast card.
pub fn view(toast: &DisplayedToast, dark: bool) -> Element<'static, Message> {
    let id = toast.record.id().clone();
    let settings = &toast.settings;
    let toast_type = toast.record.toast_type();
    let colors = toast_colors(toast_type, dark);
    let alpha = toast.drag.display_opacity();

    let mut parts: Vec<Element<'static, Message>> = Vec::with_capacity(3);

    if let Some(glyph) = settings.icon.glyph(toast_type) {
        parts.push(
            Text::new(glyph)
                .size(typography::ICON)
                .color(faded(colors.accent, alpha))
                .into(),
        );
    }

    let body: Element<'static, Message> = match &toast.record.content.body {
        Body::Text(message) => Text::new(message.clone()).size(typography::BODY).into(),
        Body::Component(component) => component.render(&ComponentContext {
            id: &id,
            props: &toast.record.content.props,
        }),
    };
    parts.push(
        Container::new(body)
            .width(Length::Fill)
            .align_x(alignment::Horizontal::Left)
            .into(),
    );

    let close_visible = !settings.show_close_button_on_hover || toast.hovered;
    if let Some(glyph) = settings.close_button.glyph().filter(|_| close_visible) {
        let close = button(Text::new(glyph.to_string()).size(typography::BODY))
            .on_press(Message::CloseRequested(id.clone()))
            .padding(spacing::XXS)
            .style(move |theme: &Theme, status| dismiss_button_style(theme, status, colors, alpha));
        let label = settings.accessibility.close_button_label.clone();
        parts.push(labelled(close, label));
    }

    if settings.rtl {
        parts.reverse();
    }

    let row = Row::with_children(parts)
        .spacing(spacing::SM)
        .align_y(alignment::Vertical::Center);

    let mut card = Column::new().spacing(spacing::XS).push(row);
    if !settings.hide_progress_bar && !settings.timeout.is_disabled() {
        card = card.push(progress_bar(toast.progress, colors.accent, alpha, settings.rtl));
    }

    let card = Container::new(card)
        .width(Length::Fixed(sizing::TOAST_WIDTH))
        .padding(spacing::SM)
        .style(move |_theme: &Theme| toast_container_style(colors, alpha));

    let interactive = mouse_area(card)
        .on_enter(Message::PointerEntered(id.clone()))
        .on_exit(Message::PointerExited(id.clone()))
        .on_press(Message::Pressed(id.clone()))
        .on_release(Message::Clicked(id));

    Container::new(interactive)
        .padding(drag_padding(toast.drag.offset_x))
        .into()
}

/// Horizontal padding that shifts a card by `offset_x`.
fn drag_padding(offset_x: f32) -> Padding {
    if offset_x.is_finite() {
        Padding {
            left: offset_x.max(0.0),
            right: (-offset_x).max(0.0),
            ..Padding::ZERO
        }
    } else {
        Padding::ZERO
    }
}

/// Bar whose filled part shrinks as the countdown runs out.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn progress_bar(
    fraction: f32,
    accent: Color,
    alpha: f32,
    rtl: bool,
) -> Element<'static, Message> {
    const STEPS: u16 = 1000;

    let filled = (fraction.clamp(0.0, 1.0) * f32::from(STEPS)).round() as u16;
    let remaining = STEPS - filled;

    let segment = |portion: u16, color: Color| {
        Container::new(Column::new())
            .width(Length::FillPortion(portion))
            .height(Length::Fixed(sizing::PROGRESS_HEIGHT))
            .style(move |_theme: &Theme| container::Style {
                background: Some(Background::Color(color)),
                border: Border {
                    radius: radius::SM.into(),
                    ..Border::default()
                },
                ..container::Style::default()
            })
    };

    let track = Color {
        a: opacity::PROGRESS_TRACK * alpha,
        ..accent
    };
    let mut segments = Vec::with_capacity(2);
    if filled > 0 {
        segments.push(segment(filled, faded(accent, alpha)));
    }
    if remaining > 0 {
        segments.push(segment(remaining, track));
    }
    if rtl {
        segments.reverse();
    }

    Row::with_children(segments.into_iter().map(Element::from))
        .width(Length::Fill)
        .into()
}

/// Attaches the accessible label of the close button as a tooltip.
fn labelled(
    close: impl Into<Element<'static, Message>>,
    label: String,
) -> Element<'static, Message> {
    let tip = Container::new(Text::new(label).size(typography::BODY))
        .padding(spacing::XXS)
        .style(tooltip_style);
    tooltip(close, tip, tooltip::Position::Bottom)
        .gap(spacing::XXS)
        .into()
}

fn faded(color: Color, alpha: f32) -> Color {
    Color {
        a: color.a * alpha,
        ..color
    }
}

/// Style function for the toast card.
fn toast_container_style(colors: ToastColors, alpha: f32) -> container::Style {
    container::Style {
        background: Some(Background::Color(faded(colors.surface, alpha))),
        border: Border {
            color: faded(colors.accent, alpha),
            width: border::WIDTH_MD,
            radius: radius::MD.into(),
        },
        shadow: if alpha < opacity::OPAQUE {
            shadow::NONE
        } else {
            shadow::MD
        },
        text_color: Some(faded(colors.text, alpha)),
        ..Default::default()
    }
}

/// Style function for the close button.
fn dismiss_button_style(
    _theme: &Theme,
    status: button::Status,
    colors: ToastColors,
    alpha: f32,
) -> button::Style {
    let text_color = faded(colors.text, alpha);
    let highlight = |a: f32| {
        Some(Background::Color(Color {
            a: a * alpha,
            ..palette::GRAY_400
        }))
    };

    match status {
        button::Status::Active => button::Style {
            background: None,
            text_color,
            border: Border::default(),
            shadow: shadow::NONE,
            snap: true,
        },
        button::Status::Hovered => button::Style {
            background: highlight(opacity::OVERLAY_SUBTLE),
            text_color,
            border: Border {
                radius: radius::SM.into(),
                ..Default::default()
            },
            shadow: shadow::NONE,
            snap: true,
        },
        button::Status::Pressed => button::Style {
            background: highlight(opacity::OVERLAY_MEDIUM),
            text_color,
            border: Border {
                radius: radius::SM.into(),
                ..Default::default()
            },
            shadow: shadow::NONE,
            snap: true,
        },
        button::Status::Disabled => button::Style {
            background: None,
            text_color: Color {
                a: opacity::OVERLAY_MEDIUM * alpha,
                ..colors.text
            },
            border: Border::default(),
            shadow: shadow::NONE,
            snap: true,
        },
    }
}

fn tooltip_style(theme: &Theme) -> container::Style {
    let palette = theme.extended_palette();
    container::Style {
        background: Some(Background::Color(palette.background.strong.color)),
        border: Border {
            radius: radius::SM.into(),
            width: border::WIDTH_SM,
            color: palette.background.weak.color,
        },
        text_color: Some(palette.background.strong.text),
        ..Default::default()
    }
}
