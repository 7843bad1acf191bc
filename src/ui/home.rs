// SPDX-License-Identifier: MPL-2.0
//! Home screen: the picked image panel and the two pick buttons.

use crate::app::state::AppState;
use crate::error::{Error, Result};
use crate::i18n::fluent::I18n;
use crate::media::{ImageData, MediaReference};
use crate::ui::design_tokens::{radius, sizing, spacing, typography};
use iced::{
    alignment::Horizontal,
    widget::{button, container, text, Column, Container, Image, Text},
    Border, ContentFit, Element, Length, Theme,
};

/// Asynchronous load state of the picked image.
#[derive(Debug, Clone, Default)]
pub enum ImageSlot {
    #[default]
    Empty,
    Loading(MediaReference),
    Loaded {
        reference: MediaReference,
        image: ImageData,
    },
    Failed(MediaReference),
}

impl ImageSlot {
    pub fn start_loading(&mut self, reference: MediaReference) {
        *self = ImageSlot::Loading(reference);
    }

    /// Stores a finished load.
    ///
    /// Results for anything but the reference currently loading are dropped.
    /// Returns the load error so the caller can record it.
    pub fn finish(&mut self, reference: MediaReference, result: Result<ImageData>) -> Option<Error> {
        let ImageSlot::Loading(loading) = self else {
            return None;
        };
        if *loading != reference {
            return None;
        }

        match result {
            Ok(image) => {
                *self = ImageSlot::Loaded { reference, image };
                None
            }
            Err(err) => {
                *self = ImageSlot::Failed(reference);
                Some(err)
            }
        }
    }

    /// The decoded image, if it is the one `current` points to.
    #[must_use]
    pub fn image_for(&self, current: Option<&MediaReference>) -> Option<&ImageData> {
        match self {
            ImageSlot::Loaded { reference, image } if Some(reference) == current => Some(image),
            _ => None,
        }
    }

    #[must_use]
    pub fn is_loading(&self) -> bool {
        matches!(self, ImageSlot::Loading(_))
    }
}

pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub state: &'a AppState,
    pub slot: &'a ImageSlot,
    /// Localized warning shown under the buttons (config load problems).
    pub warning: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Message {
    PickImage,
    PickVideo,
}

#[must_use]
#[allow(clippy::needless_pass_by_value)] // ViewContext is small and consumed
pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let panel = image_panel(ctx.slot.image_for(ctx.state.picked_image()));

    // The picker is modal, a second request is refused anyway
    let enabled = !ctx.state.is_pick_pending();
    let buttons = pick_buttons(ctx.i18n, enabled);

    let mut content = Column::new()
        .width(Length::Fill)
        .spacing(spacing::LG)
        .padding(spacing::XL)
        .align_x(Horizontal::Center)
        .push(panel)
        .push(buttons);

    if !enabled {
        content = content.push(caption(ctx.i18n.tr("home-picker-open")));
    }
    if let Some(warning) = ctx.warning {
        content = content.push(caption(warning));
    }

    Container::new(content)
        .width(Length::Fill)
        .height(Length::Fill)
        .center_y(Length::Fill)
        .into()
}

/// The two pick buttons, stacked with the image button on top.
fn pick_buttons<'a>(i18n: &I18n, enabled: bool) -> Column<'a, Message> {
    let pick_image = button(text(i18n.tr("home-pick-image")).size(typography::BODY))
        .width(Length::Fixed(sizing::BUTTON_MIN_WIDTH))
        .style(button::primary)
        .on_press_maybe(enabled.then_some(Message::PickImage));
    let pick_video = button(text(i18n.tr("home-pick-video")).size(typography::BODY))
        .width(Length::Fixed(sizing::BUTTON_MIN_WIDTH))
        .style(button::primary)
        .on_press_maybe(enabled.then_some(Message::PickVideo));

    Column::new()
        .spacing(spacing::MD)
        .align_x(Horizontal::Center)
        .push(pick_image)
        .push(pick_video)
}

/// Rounded panel, empty unless an image is loaded.
fn image_panel<'a>(image: Option<&ImageData>) -> Element<'a, Message> {
    let body: Element<'a, Message> = match image {
        Some(image) => Image::new(image.handle.clone())
            .content_fit(ContentFit::Cover)
            .width(Length::Fill)
            .height(Length::Fill)
            .into(),
        None => iced::widget::Space::new().into(),
    };

    container(body)
        .width(Length::Fill)
        .height(Length::Fixed(sizing::IMAGE_PANEL_HEIGHT))
        .clip(true)
        .style(panel_style)
        .into()
}

pub(crate) fn panel_style(theme: &Theme) -> container::Style {
    let palette = theme.extended_palette();
    container::Style {
        background: Some(palette.primary.weak.color.into()),
        border: Border {
            radius: radius::LG.into(),
            ..Border::default()
        },
        ..container::Style::default()
    }
}

pub(crate) fn caption<'a, M: 'a>(content: String) -> Element<'a, M> {
    Text::new(content).size(typography::CAPTION).into()
}
