//! Creational Pattern: Abstract Factory
//! Example: Cross-platform widget families
//!
//! Run with: cargo run --bin abstract_factory
//!
//! ## Problem
//! An application needs several related products (button, checkbox) that
//! must match each other: a Windows button next to a macOS checkbox looks
//! wrong. Client code should not name concrete widget types.
//!
//! ## Solution
//! - One interface per product kind ([`Button`], [`Checkbox`]).
//! - One factory interface ([`GuiFactory`]) with a creation method per kind.
//! - One concrete factory per family ([`WindowsFactory`], [`MacFactory`]).
//! - The factory is chosen once, from configuration ([`Platform`]).
//!
//! ## Trade-offs
//! Products from one factory are guaranteed compatible and creation code is
//! isolated from business logic. Adding a new *kind* of product means
//! touching every factory.

use serde::Deserialize;
use tracing::debug;

pub trait Button {
    fn paint(&self) -> String;
}

pub trait Checkbox {
    fn paint(&self) -> String;
}

pub trait GuiFactory {
    fn create_button(&self) -> Box<dyn Button>;
    fn create_checkbox(&self) -> Box<dyn Checkbox>;
}

// ============================================================================
// Windows family
// ============================================================================

pub struct WindowsButton;

impl Button for WindowsButton {
    fn paint(&self) -> String {
        "WindowsButton".to_string()
    }
}

pub struct WindowsCheckbox;

impl Checkbox for WindowsCheckbox {
    fn paint(&self) -> String {
        "WindowsCheckbox".to_string()
    }
}

#[derive(Debug, Default)]
pub struct WindowsFactory;

impl GuiFactory for WindowsFactory {
    fn create_button(&self) -> Box<dyn Button> {
        Box::new(WindowsButton)
    }

    fn create_checkbox(&self) -> Box<dyn Checkbox> {
        Box::new(WindowsCheckbox)
    }
}

// ============================================================================
// macOS family
// ============================================================================

pub struct MacButton;

impl Button for MacButton {
    fn paint(&self) -> String {
        "MacButton".to_string()
    }
}

pub struct MacCheckbox;

impl Checkbox for MacCheckbox {
    fn paint(&self) -> String {
        "MacCheckbox".to_string()
    }
}

#[derive(Debug, Default)]
pub struct MacFactory;

impl GuiFactory for MacFactory {
    fn create_button(&self) -> Box<dyn Button> {
        Box::new(MacButton)
    }

    fn create_checkbox(&self) -> Box<dyn Checkbox> {
        Box::new(MacCheckbox)
    }
}

/// Which widget family to use; read from the `[gui]` config section.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Platform {
    #[default]
    Windows,
    Mac,
}

impl Platform {
    pub fn factory(self) -> Box<dyn GuiFactory> {
        debug!(platform = ?self, "selecting widget factory");
        match self {
            Platform::Windows => Box::new(WindowsFactory),
            Platform::Mac => Box::new(MacFactory),
        }
    }
}

/// Client: only ever sees the abstract interfaces.
pub struct Application {
    button: Box<dyn Button>,
    checkbox: Box<dyn Checkbox>,
}

impl Application {
    pub fn new(factory: &dyn GuiFactory) -> Self {
        Application {
            button: factory.create_button(),
            checkbox: factory.create_checkbox(),
        }
    }

    pub fn paint(&self) -> Vec<String> {
        vec![self.button.paint(), self.checkbox.paint()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_windows_family() {
        let app = Application::new(&WindowsFactory);
        assert_eq!(app.paint(), vec!["WindowsButton", "WindowsCheckbox"]);
    }

    #[test]
    fn test_mac_family() {
        let app = Application::new(&MacFactory);
        assert_eq!(app.paint(), vec!["MacButton", "MacCheckbox"]);
    }

    #[test]
    fn test_platform_selects_matching_family() {
        for platform in [Platform::Windows, Platform::Mac] {
            let factory = platform.factory();
            let painted = Application::new(factory.as_ref()).paint();
            let prefix = if platform == Platform::Mac { "Mac" } else { "Windows" };
            assert!(painted.iter().all(|p| p.starts_with(prefix)));
        }
    }
}
