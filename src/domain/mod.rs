// SPDX-License-Identifier: MPL-2.0
//! Domain layer - Core toast value objects.
//!
//! This module contains pure domain types and their normalization rules.
//! It depends on nothing but `std` and `serde`, so every type here can be
//! built and tested without a running GUI.
//!
//! # Modules
//!
//! - [`toast`]: Toast identifiers and options ([`ToastId`](toast::ToastId),
//!   [`Position`](toast::Position), [`Timeout`](toast::Timeout),
//!   [`DraggablePercent`](toast::DraggablePercent), [`MaxToasts`](toast::MaxToasts))

pub mod toast;
