// SPDX-License-Identifier: MPL-2.0
//! Toast content and its normalized form.
//!
//! Content arrives in one of three shapes: plain text, a render component,
//! or either of those wrapped with extra props and listeners. Wrappers may
//! nest; normalization flattens them once, at admission, into a single
//! body plus merged props and listeners. Outer wrappers win on key clashes.

use crate::container::hooks::{Hook, Listener};
use crate::domain::toast::ToastId;
use crate::ui::Message;
use iced::Element;
use std::collections::BTreeMap;
use std::fmt;
use std::rc::Rc;

/// Props forwarded to a render component.
pub type Props = BTreeMap<String, String>;

/// Named listeners a render component can trigger.
pub type Listeners = BTreeMap<String, Listener>;

type RenderFn = dyn Fn(&ComponentContext<'_>) -> Element<'static, Message>;

/// Custom renderer for the body of a toast.
#[derive(Clone)]
pub struct Component {
    name: String,
    render: Rc<RenderFn>,
}

impl Component {
    pub fn new(
        name: impl Into<String>,
        render: impl Fn(&ComponentContext<'_>) -> Element<'static, Message> + 'static,
    ) -> Self {
        Self {
            name: name.into(),
            render: Rc::new(render),
        }
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn render(&self, context: &ComponentContext<'_>) -> Element<'static, Message> {
        (self.render)(context)
    }
}

impl fmt::Debug for Component {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Component")
            .field("name", &self.name)
            .finish_non_exhaustive()
    }
}

/// What a render component sees while building its element.
#[derive(Debug)]
pub struct ComponentContext<'a> {
    pub id: &'a ToastId,
    pub props: &'a Props,
}

impl ComponentContext<'_> {
    #[must_use]
    pub fn prop(&self, key: &str) -> Option<&str> {
        self.props.get(key).map(String::as_str)
    }

    /// Message that triggers the listener registered under `name`.
    #[must_use]
    pub fn emit(&self, name: &str) -> Message {
        Message::ListenerTriggered {
            id: self.id.clone(),
            name: name.to_string(),
        }
    }

    /// Message that closes the toast hosting this component.
    #[must_use]
    pub fn close(&self) -> Message {
        Message::CloseRequested(self.id.clone())
    }
}

/// Content as supplied by callers.
#[derive(Debug, Clone)]
pub enum ToastContent {
    Text(String),
    Component(Component),
    Wrapped(Box<WrappedContent>),
}

/// Content decorated with props and listeners.
#[derive(Debug, Clone, Default)]
pub struct WrappedContent {
    pub content: ToastContent,
    pub props: Props,
    pub listeners: Listeners,
}

impl Default for ToastContent {
    fn default() -> Self {
        ToastContent::Text(String::new())
    }
}

impl ToastContent {
    /// Wraps this content so props and listeners can be attached.
    #[must_use]
    pub fn wrapped(self) -> WrappedContent {
        WrappedContent {
            content: self,
            ..WrappedContent::default()
        }
    }

    /// Flattens any wrappers into a single body with merged props and
    /// listeners.
    #[must_use]
    pub fn normalize(&self) -> NormalizedContent {
        match self {
            ToastContent::Text(text) => NormalizedContent::from_body(Body::Text(text.clone())),
            ToastContent::Component(component) => {
                NormalizedContent::from_body(Body::Component(component.clone()))
            }
            ToastContent::Wrapped(wrapped) => {
                let mut normalized = wrapped.content.normalize();
                normalized.props.extend(
                    wrapped
                        .props
                        .iter()
                        .map(|(k, v)| (k.clone(), v.clone())),
                );
                normalized.listeners.extend(
                    wrapped
                        .listeners
                        .iter()
                        .map(|(k, v)| (k.clone(), v.clone())),
                );
                normalized
            }
        }
    }
}

impl WrappedContent {
    #[must_use]
    pub fn prop(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.props.insert(key.into(), value.into());
        self
    }

    #[must_use]
    pub fn listener(mut self, name: impl Into<String>, callback: impl Fn() + 'static) -> Self {
        let hook: Listener = Hook::from_rc(Rc::new(callback) as Rc<dyn Fn()>);
        self.listeners.insert(name.into(), hook);
        self
    }
}

impl From<&str> for ToastContent {
    fn from(text: &str) -> Self {
        ToastContent::Text(text.to_string())
    }
}

impl From<String> for ToastContent {
    fn from(text: String) -> Self {
        ToastContent::Text(text)
    }
}

impl From<Component> for ToastContent {
    fn from(component: Component) -> Self {
        ToastContent::Component(component)
    }
}

impl From<WrappedContent> for ToastContent {
    fn from(wrapped: WrappedContent) -> Self {
        ToastContent::Wrapped(Box::new(wrapped))
    }
}

/// Renderable body of a normalized toast.
#[derive(Debug, Clone)]
pub enum Body {
    Text(String),
    Component(Component),
}

/// Content after wrappers have been flattened.
#[derive(Debug, Clone)]
pub struct NormalizedContent {
    pub body: Body,
    pub props: Props,
    pub listeners: Listeners,
}

impl NormalizedContent {
    fn from_body(body: Body) -> Self {
        Self {
            body,
            props: Props::new(),
            listeners: Listeners::new(),
        }
    }

    /// Text of a plain-text body.
    #[must_use]
    pub fn text(&self) -> Option<&str> {
        match &self.body {
            Body::Text(text) => Some(text),
            Body::Component(_) => None,
        }
    }

    #[must_use]
    pub fn listener(&self, name: &str) -> Option<&Listener> {
        self.listeners.get(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use iced::widget::text;
    use std::cell::Cell;

    fn badge() -> Component {
        Component::new("badge", |ctx: &ComponentContext<'_>| {
            text(ctx.prop("label").unwrap_or_default().to_string()).into()
        })
    }

    #[test]
    fn text_normalizes_to_plain_body() {
        let normalized = ToastContent::from("saved").normalize();
        assert_eq!(normalized.text(), Some("saved"));
        assert!(normalized.props.is_empty());
    }

    #[test]
    fn component_keeps_its_name() {
        let normalized = ToastContent::from(badge()).normalize();
        match normalized.body {
            Body::Component(component) => assert_eq!(component.name(), "badge"),
            Body::Text(_) => panic!("expected component body"),
        }
    }

    #[test]
    fn outer_wrapper_props_override_inner() {
        let inner = ToastContent::from(badge())
            .wrapped()
            .prop("label", "inner")
            .prop("tone", "calm");
        let outer = ToastContent::from(inner).wrapped().prop("label", "outer");

        let normalized = ToastContent::from(outer).normalize();

        assert_eq!(normalized.props.get("label").map(String::as_str), Some("outer"));
        assert_eq!(normalized.props.get("tone").map(String::as_str), Some("calm"));
        assert!(matches!(normalized.body, Body::Component(_)));
    }

    #[test]
    fn outer_wrapper_listeners_override_inner() {
        let hits = Rc::new(Cell::new(0));
        let inner_hits = Rc::clone(&hits);
        let outer_hits = Rc::clone(&hits);
        let inner = ToastContent::from("body")
            .wrapped()
            .listener("retry", move || inner_hits.set(inner_hits.get() + 1));
        let outer = ToastContent::from(inner)
            .wrapped()
            .listener("retry", move || outer_hits.set(outer_hits.get() + 10));

        let normalized = ToastContent::from(outer).normalize();
        normalized.listener("retry").expect("listener kept").get()();

        assert_eq!(hits.get(), 10);
        assert_eq!(normalized.listeners.len(), 1);
    }

    #[test]
    fn context_builds_listener_and_close_messages() {
        let id = ToastId::from(4);
        let props = Props::new();
        let ctx = ComponentContext {
            id: &id,
            props: &props,
        };

        assert!(matches!(
            ctx.emit("retry"),
            Message::ListenerTriggered { ref name, .. } if name == "retry"
        ));
        assert!(matches!(ctx.close(), Message::CloseRequested(ref closed) if closed == &id));
    }
}
