// SPDX-License-Identifier: MPL-2.0
//! Overlay stacking the six toast columns above application content.

use super::{toast, Message};
use crate::container::Container;
use crate::domain::toast::Position;
use crate::ui::design_tokens::spacing;
use iced::widget::{Column, Container as Frame, Stack};
use iced::{alignment, window, Element, Length};

/// Renders every displayed toast of `container` for `window`.
///
/// `window` is `None` in single-window applications. A container not
/// mounted in `window` renders an empty overlay.
pub fn view(
    container: &Container,
    window: Option<window::Id>,
    dark: bool,
) -> Element<'static, Message> {
    if !container.renders_in(window) {
        return Column::new().into();
    }

    let mut stack = Stack::new().width(Length::Fill).height(Length::Fill);
    for (position, toasts) in container.snapshot() {
        let (horizontal, vertical) = anchor(position);
        let cards = toasts.iter().map(|displayed| toast::view(displayed, dark));
        let column = Column::with_children(cards)
            .spacing(spacing::XS)
            .align_x(horizontal);

        stack = stack.push(
            Frame::new(column)
                .width(Length::Fill)
                .height(Length::Fill)
                .align_x(horizontal)
                .align_y(vertical)
                .padding(spacing::MD),
        );
    }
    stack.into()
}

/// Screen alignment of a position's column.
fn anchor(position: Position) -> (alignment::Horizontal, alignment::Vertical) {
    let horizontal = match position {
        Position::TopLeft | Position::BottomLeft => alignment::Horizontal::Left,
        Position::TopCenter | Position::BottomCenter => alignment::Horizontal::Center,
        Position::TopRight | Position::BottomRight => alignment::Horizontal::Right,
    };
    let vertical = if position.is_top() {
        alignment::Vertical::Top
    } else {
        alignment::Vertical::Bottom
    };
    (horizontal, vertical)
}
