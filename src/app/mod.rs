// SPDX-License-Identifier: MPL-2.0
//! Demo application exercising the toast interface.
//!
//! The `App` owns a [`ToastInterface`] and the container created with it,
//! forwards overlay messages to [`ui::update`] and stacks the overlay above
//! a small control panel.

mod message;

pub use message::{Flags, Message};

use crate::config::{self, Config};
use crate::container::content::{Component, ComponentContext, ToastContent};
use crate::container::options::{ContainerOptions, ToastOptions};
use crate::container::Container;
use crate::domain::toast::{ToastId, ToastType};
use crate::environment::Environment;
use crate::interface::{create_instance, create_instance_in, ToastInterface, ToastPatch};
use crate::ui::design_tokens::{spacing, typography};
use crate::ui::{self, overlay, subscription};
use iced::widget::{button, column, container, row, text, Stack};
use iced::{window, Element, Length, Subscription, Task, Theme};
use std::fmt;
use std::rc::Rc;
use tracing::{info, warn};

pub const WINDOW_DEFAULT_WIDTH: f32 = 960.0;
pub const WINDOW_DEFAULT_HEIGHT: f32 = 640.0;

/// Root iced state of the demo.
pub struct App {
    toasts: ToastInterface,
    container: Option<Rc<Container>>,
    theme: Theme,
    dark: bool,
    newest_on_top: bool,
    last: Option<ToastId>,
    shown: usize,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("toasts", &self.toasts)
            .field("shown", &self.shown)
            .finish_non_exhaustive()
    }
}

/// Builds the window settings
pub fn window_settings() -> window::Settings {
    window::Settings {
        size: iced::Size::new(WINDOW_DEFAULT_WIDTH, WINDOW_DEFAULT_HEIGHT),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    // iced 0.14 requires Fn for boot; flags are consumed once
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state.borrow_mut().take().unwrap_or_default();
        App::new(flags)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

fn load_config(flags: &Flags) -> Config {
    let loaded = match &flags.config_path {
        Some(path) => config::load_from_path(path),
        None => config::load(),
    };
    loaded.unwrap_or_else(|err| {
        warn!(%err, "configuration unavailable, using defaults");
        Config::default()
    })
}

impl App {
    fn new(flags: Flags) -> (Self, Task<Message>) {
        let config = load_config(&flags);
        let mut options = config.to_options();
        if let Some(position) = flags.position {
            options.toast = options.toast.position(position);
        }
        if let Some(max_toasts) = flags.max_toasts {
            options = options.max_toasts(max_toasts);
        }
        if flags.newest_on_top {
            options = options.newest_on_top(true);
        }
        let newest_on_top = options.is_newest_on_top();
        let options = options.on_mounted(|container| {
            info!(host = ?container.host(), "toast container ready");
        });

        let toasts = create_instance(options);
        let container = toasts.container().cloned();
        let theme = config.general.theme_mode.theme();
        let app = Self {
            toasts,
            container,
            dark: theme == Theme::Dark,
            theme,
            newest_on_top,
            last: None,
            shown: 0,
        };
        (app, Task::done(Message::Toast(ui::Message::Flush)))
    }

    fn title(&self) -> String {
        String::from("iced_toast demo")
    }

    fn theme(&self) -> Theme {
        self.theme.clone()
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::Show(toast_type) => {
                self.shown += 1;
                let content = format!("{} toast #{}", toast_type, self.shown);
                let options = ToastOptions::new();
                let id = match toast_type {
                    ToastType::Success => self.toasts.success(content, options),
                    ToastType::Error => self.toasts.error(content, options),
                    ToastType::Warning => self.toasts.warning(content, options),
                    ToastType::Info => self.toasts.info(content, options),
                    ToastType::Default => self.toasts.show(content, options),
                };
                self.last = Some(id);
            }
            Message::ShowComponent => {
                self.shown += 1;
                let id = self.toasts.show(
                    self.undo_content(),
                    ToastOptions::new().timeout(false).close_on_click(false),
                );
                self.last = Some(id);
            }
            Message::RestartLast => {
                if let Some(id) = self.last.clone() {
                    let timeout = self
                        .container
                        .as_ref()
                        .and_then(|container| container.get(&id))
                        .map(|record| record.timeout())
                        .unwrap_or_default();
                    self.toasts.update(
                        id,
                        ToastPatch::new()
                            .content("Countdown restarted")
                            .options(ToastOptions::new().timeout(timeout)),
                        false,
                    );
                }
            }
            Message::DismissLast => {
                if let Some(id) = self.last.take() {
                    self.toasts.dismiss(id);
                }
            }
            Message::Clear => self.toasts.clear(),
            Message::ToggleNewestOnTop => {
                self.newest_on_top = !self.newest_on_top;
                self.toasts
                    .update_defaults(ContainerOptions::new().newest_on_top(self.newest_on_top));
            }
            Message::Toast(message) => {
                if let Some(container) = &self.container {
                    return ui::update(container, message).map(Message::Toast);
                }
            }
        }
        Task::none()
    }

    /// Component toast whose "Undo" button posts a follow-up toast.
    fn undo_content(&self) -> ToastContent {
        let component = Component::new("undo", |ctx: &ComponentContext<'_>| {
            row![
                text(ctx.prop("label").unwrap_or_default().to_string())
                    .size(typography::BODY)
                    .width(Length::Fill),
                button(text("Undo").size(typography::BODY)).on_press(ctx.emit("undo")),
                button(text("Hide").size(typography::BODY)).on_press(ctx.close()),
            ]
            .spacing(spacing::XS)
            .into()
        });

        let mut wrapped = ToastContent::from(component)
            .wrapped()
            .prop("label", format!("Item #{} deleted", self.shown));
        if let Some(channel) = self.toasts.channel() {
            let follow_up = create_instance_in(Environment::Windowed, Rc::clone(channel));
            wrapped = wrapped.listener("undo", move || {
                follow_up.success("Item restored", ToastOptions::new());
            });
        }
        wrapped.into()
    }

    fn view(&self) -> Element<'_, Message> {
        let show = |label: &'static str, toast_type: ToastType| {
            button(text(label)).on_press(Message::Show(toast_type))
        };

        let controls = column![
            text("iced_toast").size(typography::TITLE),
            row![
                show("Default", ToastType::Default),
                show("Info", ToastType::Info),
                show("Success", ToastType::Success),
                show("Warning", ToastType::Warning),
                show("Error", ToastType::Error),
            ]
            .spacing(spacing::XS),
            row![
                button(text("Undo toast")).on_press(Message::ShowComponent),
                button(text("Restart last")).on_press(Message::RestartLast),
                button(text("Dismiss last")).on_press(Message::DismissLast),
                button(text("Clear")).on_press(Message::Clear),
            ]
            .spacing(spacing::XS),
            button(text(if self.newest_on_top {
                "Newest on top: on"
            } else {
                "Newest on top: off"
            }))
            .on_press(Message::ToggleNewestOnTop),
        ]
        .spacing(spacing::MD);

        let mut layers = Stack::new()
            .width(Length::Fill)
            .height(Length::Fill)
            .push(container(controls).center(Length::Fill));
        if let Some(toasts) = &self.container {
            layers = layers.push(overlay::view(toasts, None, self.dark).map(Message::Toast));
        }
        layers.into()
    }

    fn subscription(&self) -> Subscription<Message> {
        match &self.container {
            Some(container) => subscription::subscription(container).map(Message::Toast),
            None => Subscription::none(),
        }
    }
}
