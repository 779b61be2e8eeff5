//! Page layout wrappers.
//!
//! Every page is built from [`base`], which places the navigation bar, the main
//! region and the notification tray. [`container`] and [`detail`] are the two
//! recurring page shapes: centered content and edge-to-edge detail views. Both
//! assume navigation is provided by an outer shell and hide the navbar unless
//! asked otherwise.

use leptos::{
    html::{div, main},
    prelude::*,
};

use crate::{
    components::{navbar, notifications},
    types::Notification,
};

/// Options shared by all layout variants.
///
/// `show_navbar` is optional so each variant can apply its own default.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LayoutConfig {
    pub class: Option<String>,
    pub show_navbar: Option<bool>,
    pub notifications: Vec<Notification>,
}

impl LayoutConfig {
    #[must_use]
    pub fn with_class(mut self, class: impl Into<String>) -> Self {
        self.class = Some(class.into());
        self
    }

    #[must_use]
    pub const fn with_navbar(mut self, show_navbar: bool) -> Self {
        self.show_navbar = Some(show_navbar);
        self
    }

    #[must_use]
    pub fn with_notifications(mut self, notifications: Vec<Notification>) -> Self {
        self.notifications = notifications;
        self
    }

    fn main_class(&self) -> String {
        match &self.class {
            Some(class) if !class.trim().is_empty() => format!("flex-1 {}", class.trim()),
            _ => "flex-1".to_owned(),
        }
    }
}

fn compose(config: LayoutConfig, default_navbar: bool, content: AnyView) -> impl IntoView {
    let show_navbar = config.show_navbar.unwrap_or(default_navbar);
    let main_class = config.main_class();

    div().class("flex flex-col min-h-screen").child((
        show_navbar.then(navbar::component),
        main().class(main_class).child(content),
        notifications::tray(config.notifications),
    ))
}

/// Navbar (on by default), main region and notification tray.
pub fn base(config: LayoutConfig, children: Children) -> impl IntoView {
    compose(config, true, children())
}

/// Children inside a centered, padded container.
pub fn container(config: LayoutConfig, children: Children) -> impl IntoView {
    let content = div()
        .class("container py-8 px-4 mx-auto max-w-6xl")
        .attr("data-layout", "container")
        .child(children())
        .into_any();
    compose(config, false, content)
}

/// Children placed directly in the main region.
pub fn detail(config: LayoutConfig, children: Children) -> impl IntoView {
    compose(config, false, children())
}
