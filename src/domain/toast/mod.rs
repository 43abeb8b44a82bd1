// SPDX-License-Identifier: MPL-2.0
//! Toast domain types.
//!
//! Identifiers, enumerations and validated option values that are
//! independent of any presentation framework.

pub mod newtypes;
pub mod types;

// Re-export commonly used types
pub use newtypes::{
    Accessibility, ClassNames, CloseButton, DraggablePercent, Icon, MaxToasts, Timeout,
    Transition,
};
pub use types::{Position, ToastId, ToastType};
