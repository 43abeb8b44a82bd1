// SPDX-License-Identifier: MPL-2.0
//! Per-toast and container-wide options.
//!
//! Every field is optional so options can be layered: container defaults,
//! then per-type defaults, then the options given at creation. Resolving
//! the layered result against the built-in defaults yields
//! [`ToastSettings`], the concrete values the runtime works with.

use crate::config::defaults;
use crate::container::hooks::{
    CloseToast, FilterBeforeCreate, FilterToasts, OnClick, OnClose, OnMounted, SharedChannel,
};
use crate::container::mount::MountTarget;
use crate::container::record::ToastRecord;
use crate::container::Container;
use crate::domain::toast::{
    Accessibility, ClassNames, CloseButton, DraggablePercent, Icon, MaxToasts, Position, Timeout,
    ToastId, ToastType, Transition,
};
use crate::event_bus::EventChannel;
use std::collections::HashMap;
use std::rc::Rc;

/// Options of a single toast. Unset fields inherit from the layer below.
#[derive(Debug, Clone, Default)]
pub struct ToastOptions {
    pub id: Option<ToastId>,
    pub toast_type: Option<ToastType>,
    pub position: Option<Position>,
    pub timeout: Option<Timeout>,
    pub draggable: Option<bool>,
    pub draggable_percent: Option<DraggablePercent>,
    pub pause_on_hover: Option<bool>,
    pub pause_on_focus_loss: Option<bool>,
    pub close_on_click: Option<bool>,
    pub hide_progress_bar: Option<bool>,
    pub show_close_button_on_hover: Option<bool>,
    pub close_button: Option<CloseButton>,
    pub icon: Option<Icon>,
    pub toast_class_name: Option<ClassNames>,
    pub body_class_name: Option<ClassNames>,
    pub close_button_class_name: Option<ClassNames>,
    pub accessibility: Option<Accessibility>,
    pub rtl: Option<bool>,
    pub on_click: Option<OnClick>,
    pub on_close: Option<OnClose>,
}

impl ToastOptions {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns `self` overlaid with every field set in `over`.
    #[must_use]
    pub fn merged_with(&self, over: &ToastOptions) -> ToastOptions {
        fn pick<T: Clone>(over: &Option<T>, base: &Option<T>) -> Option<T> {
            over.clone().or_else(|| base.clone())
        }

        ToastOptions {
            id: pick(&over.id, &self.id),
            toast_type: pick(&over.toast_type, &self.toast_type),
            position: pick(&over.position, &self.position),
            timeout: pick(&over.timeout, &self.timeout),
            draggable: pick(&over.draggable, &self.draggable),
            draggable_percent: pick(&over.draggable_percent, &self.draggable_percent),
            pause_on_hover: pick(&over.pause_on_hover, &self.pause_on_hover),
            pause_on_focus_loss: pick(&over.pause_on_focus_loss, &self.pause_on_focus_loss),
            close_on_click: pick(&over.close_on_click, &self.close_on_click),
            hide_progress_bar: pick(&over.hide_progress_bar, &self.hide_progress_bar),
            show_close_button_on_hover: pick(
                &over.show_close_button_on_hover,
                &self.show_close_button_on_hover,
            ),
            close_button: pick(&over.close_button, &self.close_button),
            icon: pick(&over.icon, &self.icon),
            toast_class_name: pick(&over.toast_class_name, &self.toast_class_name),
            body_class_name: pick(&over.body_class_name, &self.body_class_name),
            close_button_class_name: pick(
                &over.close_button_class_name,
                &self.close_button_class_name,
            ),
            accessibility: pick(&over.accessibility, &self.accessibility),
            rtl: pick(&over.rtl, &self.rtl),
            on_click: pick(&over.on_click, &self.on_click),
            on_close: pick(&over.on_close, &self.on_close),
        }
    }

    /// Resolves unset fields against the built-in defaults.
    #[must_use]
    pub fn settings(&self) -> ToastSettings {
        ToastSettings {
            position: self.position.unwrap_or_default(),
            timeout: self.timeout.unwrap_or_default(),
            draggable: self.draggable.unwrap_or(defaults::DEFAULT_DRAGGABLE),
            draggable_percent: self.draggable_percent.unwrap_or_default(),
            pause_on_hover: self.pause_on_hover.unwrap_or(defaults::DEFAULT_PAUSE_ON_HOVER),
            pause_on_focus_loss: self
                .pause_on_focus_loss
                .unwrap_or(defaults::DEFAULT_PAUSE_ON_FOCUS_LOSS),
            close_on_click: self.close_on_click.unwrap_or(defaults::DEFAULT_CLOSE_ON_CLICK),
            hide_progress_bar: self
                .hide_progress_bar
                .unwrap_or(defaults::DEFAULT_HIDE_PROGRESS_BAR),
            show_close_button_on_hover: self
                .show_close_button_on_hover
                .unwrap_or(defaults::DEFAULT_SHOW_CLOSE_BUTTON_ON_HOVER),
            close_button: self.close_button.clone().unwrap_or_default(),
            icon: self.icon.clone().unwrap_or_default(),
            toast_class_name: self.toast_class_name.clone().unwrap_or_default(),
            body_class_name: self.body_class_name.clone().unwrap_or_default(),
            close_button_class_name: self.close_button_class_name.clone().unwrap_or_default(),
            accessibility: self.accessibility.clone().unwrap_or_default(),
            rtl: self.rtl.unwrap_or(defaults::DEFAULT_RTL),
        }
    }

    #[must_use]
    pub fn id(mut self, id: impl Into<ToastId>) -> Self {
        self.id = Some(id.into());
        self
    }

    #[must_use]
    pub fn toast_type(mut self, toast_type: ToastType) -> Self {
        self.toast_type = Some(toast_type);
        self
    }

    #[must_use]
    pub fn position(mut self, position: Position) -> Self {
        self.position = Some(position);
        self
    }

    #[must_use]
    pub fn timeout(mut self, timeout: impl Into<Timeout>) -> Self {
        self.timeout = Some(timeout.into());
        self
    }

    #[must_use]
    pub fn draggable(mut self, draggable: bool) -> Self {
        self.draggable = Some(draggable);
        self
    }

    #[must_use]
    pub fn draggable_percent(mut self, percent: impl Into<DraggablePercent>) -> Self {
        self.draggable_percent = Some(percent.into());
        self
    }

    #[must_use]
    pub fn pause_on_hover(mut self, pause: bool) -> Self {
        self.pause_on_hover = Some(pause);
        self
    }

    #[must_use]
    pub fn pause_on_focus_loss(mut self, pause: bool) -> Self {
        self.pause_on_focus_loss = Some(pause);
        self
    }

    #[must_use]
    pub fn close_on_click(mut self, close: bool) -> Self {
        self.close_on_click = Some(close);
        self
    }

    #[must_use]
    pub fn hide_progress_bar(mut self, hide: bool) -> Self {
        self.hide_progress_bar = Some(hide);
        self
    }

    #[must_use]
    pub fn show_close_button_on_hover(mut self, only_on_hover: bool) -> Self {
        self.show_close_button_on_hover = Some(only_on_hover);
        self
    }

    #[must_use]
    pub fn close_button(mut self, close_button: impl Into<CloseButton>) -> Self {
        self.close_button = Some(close_button.into());
        self
    }

    /// Removes the close button.
    #[must_use]
    pub fn hide_close_button(self) -> Self {
        self.close_button(CloseButton::Hidden)
    }

    #[must_use]
    pub fn icon(mut self, icon: impl Into<Icon>) -> Self {
        self.icon = Some(icon.into());
        self
    }

    #[must_use]
    pub fn toast_class_name(mut self, classes: impl Into<ClassNames>) -> Self {
        self.toast_class_name = Some(classes.into());
        self
    }

    #[must_use]
    pub fn body_class_name(mut self, classes: impl Into<ClassNames>) -> Self {
        self.body_class_name = Some(classes.into());
        self
    }

    #[must_use]
    pub fn close_button_class_name(mut self, classes: impl Into<ClassNames>) -> Self {
        self.close_button_class_name = Some(classes.into());
        self
    }

    #[must_use]
    pub fn accessibility(mut self, accessibility: Accessibility) -> Self {
        self.accessibility = Some(accessibility);
        self
    }

    #[must_use]
    pub fn rtl(mut self, rtl: bool) -> Self {
        self.rtl = Some(rtl);
        self
    }

    #[must_use]
    pub fn on_click(mut self, callback: impl Fn(&CloseToast) + 'static) -> Self {
        self.on_click = Some(OnClick::new(callback));
        self
    }

    #[must_use]
    pub fn on_close(mut self, callback: impl Fn() + 'static) -> Self {
        self.on_close = Some(OnClose::new(callback));
        self
    }
}

/// Fully resolved per-toast settings.
#[derive(Debug, Clone, PartialEq)]
pub struct ToastSettings {
    pub position: Position,
    pub timeout: Timeout,
    pub draggable: bool,
    pub draggable_percent: DraggablePercent,
    pub pause_on_hover: bool,
    pub pause_on_focus_loss: bool,
    pub close_on_click: bool,
    pub hide_progress_bar: bool,
    pub show_close_button_on_hover: bool,
    pub close_button: CloseButton,
    pub icon: Icon,
    pub toast_class_name: ClassNames,
    pub body_class_name: ClassNames,
    pub close_button_class_name: ClassNames,
    pub accessibility: Accessibility,
    pub rtl: bool,
}

impl Default for ToastSettings {
    fn default() -> Self {
        ToastOptions::default().settings()
    }
}

/// Options of a toast container.
///
/// Patches sent through `update_defaults` use the same type: only the
/// fields that are set replace the current ones.
#[derive(Debug, Clone, Default)]
pub struct ContainerOptions {
    /// Defaults applied to every toast.
    pub toast: ToastOptions,
    /// Host the container renders into. Unset means any window.
    pub container: Option<MountTarget>,
    pub newest_on_top: Option<bool>,
    pub max_toasts: Option<MaxToasts>,
    /// Per-type defaults layered over [`ContainerOptions::toast`].
    pub toast_defaults: Option<HashMap<ToastType, ToastOptions>>,
    pub transition: Option<Transition>,
    pub container_class_name: Option<ClassNames>,
    pub filter_before_create: Option<FilterBeforeCreate>,
    pub filter_toasts: Option<FilterToasts>,
    /// Channel to reuse instead of creating a fresh one.
    pub event_bus: Option<SharedChannel>,
    pub on_mounted: Option<OnMounted>,
}

impl ContainerOptions {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Applies a shallow patch: every field set in `patch` replaces the
    /// current value. Toast defaults are overlaid field by field.
    pub fn merge(&mut self, patch: ContainerOptions) {
        self.toast = self.toast.merged_with(&patch.toast);
        if patch.container.is_some() {
            self.container = patch.container;
        }
        if patch.newest_on_top.is_some() {
            self.newest_on_top = patch.newest_on_top;
        }
        if patch.max_toasts.is_some() {
            self.max_toasts = patch.max_toasts;
        }
        if patch.toast_defaults.is_some() {
            self.toast_defaults = patch.toast_defaults;
        }
        if patch.transition.is_some() {
            self.transition = patch.transition;
        }
        if patch.container_class_name.is_some() {
            self.container_class_name = patch.container_class_name;
        }
        if patch.filter_before_create.is_some() {
            self.filter_before_create = patch.filter_before_create;
        }
        if patch.filter_toasts.is_some() {
            self.filter_toasts = patch.filter_toasts;
        }
        if patch.event_bus.is_some() {
            self.event_bus = patch.event_bus;
        }
        if patch.on_mounted.is_some() {
            self.on_mounted = patch.on_mounted;
        }
    }

    #[must_use]
    pub fn is_newest_on_top(&self) -> bool {
        self.newest_on_top
            .unwrap_or(defaults::DEFAULT_NEWEST_ON_TOP)
    }

    #[must_use]
    pub fn max_toasts_per_position(&self) -> MaxToasts {
        self.max_toasts.unwrap_or_default()
    }

    #[must_use]
    pub fn resolved_transition(&self) -> Transition {
        self.transition.clone().unwrap_or_default()
    }

    /// Class names of the container, base class first.
    #[must_use]
    pub fn container_classes(&self) -> ClassNames {
        let base = ClassNames::from(defaults::CONTAINER_CLASS_PREFIX);
        match &self.container_class_name {
            Some(extra) => base.with(extra),
            None => base,
        }
    }

    /// Options a new toast of `toast_type` starts from, before its own
    /// options are applied.
    #[must_use]
    pub fn defaults_for(&self, toast_type: ToastType) -> ToastOptions {
        match self
            .toast_defaults
            .as_ref()
            .and_then(|per_type| per_type.get(&toast_type))
        {
            Some(type_defaults) => self.toast.merged_with(type_defaults),
            None => self.toast.clone(),
        }
    }

    #[must_use]
    pub fn with_toast(mut self, toast: ToastOptions) -> Self {
        self.toast = toast;
        self
    }

    #[must_use]
    pub fn container(mut self, target: MountTarget) -> Self {
        self.container = Some(target);
        self
    }

    #[must_use]
    pub fn newest_on_top(mut self, newest_on_top: bool) -> Self {
        self.newest_on_top = Some(newest_on_top);
        self
    }

    #[must_use]
    pub fn max_toasts(mut self, max_toasts: impl Into<MaxToasts>) -> Self {
        self.max_toasts = Some(max_toasts.into());
        self
    }

    /// Sets the defaults of one toast type, keeping the other types.
    #[must_use]
    pub fn type_defaults(mut self, toast_type: ToastType, options: ToastOptions) -> Self {
        self.toast_defaults
            .get_or_insert_with(HashMap::new)
            .insert(toast_type, options);
        self
    }

    #[must_use]
    pub fn transition(mut self, transition: impl Into<Transition>) -> Self {
        self.transition = Some(transition.into());
        self
    }

    #[must_use]
    pub fn container_class_name(mut self, classes: impl Into<ClassNames>) -> Self {
        self.container_class_name = Some(classes.into());
        self
    }

    #[must_use]
    pub fn filter_before_create(
        mut self,
        filter: impl Fn(ToastRecord, &[ToastRecord]) -> Option<ToastRecord> + 'static,
    ) -> Self {
        self.filter_before_create = Some(FilterBeforeCreate::new(filter));
        self
    }

    #[must_use]
    pub fn filter_toasts(
        mut self,
        filter: impl Fn(Vec<ToastRecord>) -> Vec<ToastRecord> + 'static,
    ) -> Self {
        self.filter_toasts = Some(FilterToasts::new(filter));
        self
    }

    #[must_use]
    pub fn event_bus(mut self, channel: Rc<dyn EventChannel>) -> Self {
        self.event_bus = Some(SharedChannel::new(channel));
        self
    }

    #[must_use]
    pub fn on_mounted(mut self, callback: impl Fn(&Container) + 'static) -> Self {
        self.on_mounted = Some(OnMounted::new(callback));
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unset_options_resolve_to_builtin_defaults() {
        let settings = ToastOptions::new().settings();

        assert_eq!(settings.position, Position::TopRight);
        assert_eq!(settings.timeout.as_millis(), Some(5000));
        assert!(settings.draggable);
        assert!(settings.pause_on_hover);
        assert!(settings.pause_on_focus_loss);
        assert!(settings.close_on_click);
        assert!(!settings.hide_progress_bar);
        assert!(!settings.rtl);
        assert_eq!(settings.accessibility.toast_role, "alert");
        assert_eq!(settings.accessibility.close_button_label, "close");
    }

    #[test]
    fn merge_prefers_overlay_fields() {
        let base = ToastOptions::new()
            .timeout(1000)
            .position(Position::BottomLeft);
        let over = ToastOptions::new().timeout(false);

        let merged = base.merged_with(&over);

        assert!(merged.timeout.is_some_and(Timeout::is_disabled));
        assert_eq!(merged.position, Some(Position::BottomLeft));
    }

    #[test]
    fn type_defaults_layer_over_container_defaults() {
        let options = ContainerOptions::new()
            .with_toast(ToastOptions::new().timeout(3000).rtl(true))
            .type_defaults(ToastType::Error, ToastOptions::new().timeout(false));

        let error = options.defaults_for(ToastType::Error).settings();
        let info = options.defaults_for(ToastType::Info).settings();

        assert!(error.timeout.is_disabled());
        assert!(error.rtl);
        assert_eq!(info.timeout.as_millis(), Some(3000));
    }

    #[test]
    fn container_patch_only_replaces_set_fields() {
        let mut options = ContainerOptions::new().max_toasts(3).newest_on_top(false);

        options.merge(ContainerOptions::new().newest_on_top(true));

        assert_eq!(options.max_toasts_per_position().value(), 3);
        assert!(options.is_newest_on_top());
    }

    #[test]
    fn container_classes_start_with_base_class() {
        let options = ContainerOptions::new().container_class_name("mine");
        let classes: Vec<_> = options.container_classes().iter().map(str::to_string).collect();
        assert_eq!(classes, vec!["iced-toast__container", "mine"]);
    }

    #[test]
    fn hide_close_button_sets_hidden() {
        let settings = ToastOptions::new().hide_close_button().settings();
        assert_eq!(settings.close_button, CloseButton::Hidden);
    }
}
