//! Creational Pattern: Factory Method
//! Example: A dialog that renders whichever button its factory produces
//!
//! Run with: cargo run --bin factory
//!
//! The dialog's rendering logic is written once against the [`Button`]
//! interface. Which button actually appears is decided by the factory the
//! dialog was created with, so a new platform means a new factory and no
//! change to [`Dialog`].

use tracing::trace;

pub trait Button {
    fn render(&self) -> String;
    fn on_click(&self, action: &str) -> String;
}

pub trait ButtonFactory {
    fn create_button(&self) -> Box<dyn Button>;
}

pub struct WindowsButton;

impl Button for WindowsButton {
    fn render(&self) -> String {
        "WinButton".to_string()
    }

    fn on_click(&self, action: &str) -> String {
        format!("WinButton clicked: {}", action)
    }
}

pub struct MacButton;

impl Button for MacButton {
    fn render(&self) -> String {
        "MacButton".to_string()
    }

    fn on_click(&self, action: &str) -> String {
        format!("MacButton clicked: {}", action)
    }
}

pub struct HtmlButton;

impl Button for HtmlButton {
    fn render(&self) -> String {
        "<button>Ok</button>".to_string()
    }

    fn on_click(&self, action: &str) -> String {
        format!("onclick=\"{}\"", action)
    }
}

#[derive(Debug, Default)]
pub struct WindowsButtonFactory;

impl ButtonFactory for WindowsButtonFactory {
    fn create_button(&self) -> Box<dyn Button> {
        Box::new(WindowsButton)
    }
}

#[derive(Debug, Default)]
pub struct MacButtonFactory;

impl ButtonFactory for MacButtonFactory {
    fn create_button(&self) -> Box<dyn Button> {
        Box::new(MacButton)
    }
}

#[derive(Debug, Default)]
pub struct HtmlButtonFactory;

impl ButtonFactory for HtmlButtonFactory {
    fn create_button(&self) -> Box<dyn Button> {
        Box::new(HtmlButton)
    }
}

pub struct Dialog<F: ButtonFactory> {
    factory: F,
}

impl<F: ButtonFactory> Dialog<F> {
    pub fn new(factory: F) -> Self {
        Dialog { factory }
    }

    /// Creates a fresh button through the factory method on every call.
    pub fn render(&self) -> Vec<String> {
        let ok = self.factory.create_button();
        trace!("dialog created its button");
        vec![ok.render(), ok.on_click("close dialog")]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dialog_uses_its_factory() {
        assert_eq!(
            Dialog::new(WindowsButtonFactory).render(),
            vec!["WinButton", "WinButton clicked: close dialog"]
        );
        assert_eq!(Dialog::new(MacButtonFactory).render()[0], "MacButton");
    }

    #[test]
    fn test_html_button() {
        let rendered = Dialog::new(HtmlButtonFactory).render();
        assert_eq!(rendered[0], "<button>Ok</button>");
        assert_eq!(rendered[1], "onclick=\"close dialog\"");
    }

    #[test]
    fn test_factories_as_trait_objects() {
        let factories: Vec<Box<dyn ButtonFactory>> = vec![
            Box::new(WindowsButtonFactory),
            Box::new(MacButtonFactory),
            Box::new(HtmlButtonFactory),
        ];
        let rendered: Vec<String> = factories
            .iter()
            .map(|f| f.create_button().render())
            .collect();
        assert_eq!(rendered.len(), 3);
        assert_ne!(rendered[0], rendered[1]);
    }
}
