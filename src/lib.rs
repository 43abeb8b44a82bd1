// SPDX-License-Identifier: MPL-2.0
//! `iced_toast` is a toast notification engine for the Iced GUI framework.
//!
//! A [`ToastInterface`] posts show/dismiss/update/clear events on an event
//! channel. A [`Container`](container::Container) subscribed to that channel
//! owns the toasts, their countdowns and their placement in six screen
//! positions, and the [`ui`] module renders and drives it inside an iced
//! application.
//!
//! ```no_run
//! use iced_toast::container::options::{ContainerOptions, ToastOptions};
//!
//! let toasts = iced_toast::create_instance(ContainerOptions::new().max_toasts(5_usize));
//! toasts.success("Saved", ToastOptions::new());
//! ```

#![doc(html_root_url = "https://docs.rs/iced_toast/0.1.0")]

pub mod app;
pub mod config;
pub mod container;
pub mod domain;
pub mod environment;
pub mod error;
pub mod event_bus;
pub mod interface;
pub mod timing;
pub mod ui;

#[cfg(test)]
pub mod test_utils;

pub use interface::{create_instance, create_instance_in, ToastInterface};
