//! Behavioral Pattern: Chain of Responsibility
//! Example: Contextual help in a widget tree
//!
//! Run with: cargo run --bin chain_of_responsibility
//!
//! A request travels along a chain of handlers. Each handler either answers
//! it or passes it to the next one. Here the chain is the path from a widget
//! up to the root of the UI tree: a button without a tooltip defers to its
//! panel, a panel without modal help defers to its dialog, and so on.
//!
//! Real-life analogue: first-line support escalating a call to second line.
//!
//! - Handlers share one interface and only know their successor.
//! - A handler may stop the request; nothing guarantees anyone handles it.
//!
//! Widgets live in an arena ([`HelpTree`]) and refer to their parent by
//! [`ComponentId`], so walking the chain needs no back-pointers.

use thiserror::Error;
use tracing::trace;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ChainError {
    #[error("unknown component #{0}")]
    UnknownComponent(usize),
    #[error("component #{0} is not a container")]
    NotAContainer(usize),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ComponentId(usize);

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Component {
    Button { tooltip: Option<String> },
    Panel { modal_help: Option<String> },
    Dialog { wiki_url: Option<String> },
}

impl Component {
    pub fn button() -> Self {
        Component::Button { tooltip: None }
    }

    pub fn button_with_tooltip(tooltip: impl Into<String>) -> Self {
        Component::Button {
            tooltip: Some(tooltip.into()),
        }
    }

    pub fn panel(modal_help: Option<&str>) -> Self {
        Component::Panel {
            modal_help: modal_help.map(str::to_string),
        }
    }

    pub fn dialog(wiki_url: Option<&str>) -> Self {
        Component::Dialog {
            wiki_url: wiki_url.map(str::to_string),
        }
    }

    fn is_container(&self) -> bool {
        matches!(self, Component::Panel { .. } | Component::Dialog { .. })
    }

    /// This handler's answer, if it has one.
    fn handle_help(&self) -> Option<Help> {
        match self {
            Component::Button { tooltip } => tooltip.clone().map(Help::Tooltip),
            Component::Panel { modal_help } => modal_help.clone().map(Help::Modal),
            Component::Dialog { wiki_url } => wiki_url.clone().map(Help::WikiPage),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Help {
    Tooltip(String),
    Modal(String),
    WikiPage(String),
}

impl Help {
    pub fn render(&self) -> String {
        match self {
            Help::Tooltip(text) => format!("Show tooltip: {}", text),
            Help::Modal(text) => format!("Show modal help: {}", text),
            Help::WikiPage(url) => format!("Open wiki page: {}", url),
        }
    }
}

struct Node {
    component: Component,
    parent: Option<ComponentId>,
}

#[derive(Default)]
pub struct HelpTree {
    nodes: Vec<Node>,
}

impl HelpTree {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_root(&mut self, component: Component) -> ComponentId {
        self.push(component, None)
    }

    pub fn add_child(
        &mut self,
        parent: ComponentId,
        component: Component,
    ) -> Result<ComponentId, ChainError> {
        let node = self.node(parent)?;
        if !node.component.is_container() {
            return Err(ChainError::NotAContainer(parent.0));
        }
        Ok(self.push(component, Some(parent)))
    }

    pub fn component(&self, id: ComponentId) -> Result<&Component, ChainError> {
        self.node(id).map(|n| &n.component)
    }

    /// Passes the help request up the chain starting at `id`.
    pub fn show_help(&self, id: ComponentId) -> Result<Option<Help>, ChainError> {
        let mut current = Some(id);
        while let Some(id) = current {
            let node = self.node(id)?;
            if let Some(help) = node.component.handle_help() {
                trace!(component = id.0, "help handled");
                return Ok(Some(help));
            }
            current = node.parent;
        }
        Ok(None)
    }

    fn push(&mut self, component: Component, parent: Option<ComponentId>) -> ComponentId {
        self.nodes.push(Node { component, parent });
        ComponentId(self.nodes.len() - 1)
    }

    fn node(&self, id: ComponentId) -> Result<&Node, ChainError> {
        self.nodes.get(id.0).ok_or(ChainError::UnknownComponent(id.0))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const WIKI: &str = "https://en.wikipedia.org/wiki/Chain-of-responsibility_pattern";

    #[test]
    fn test_button_without_tooltip_defers_to_panel() {
        let mut tree = HelpTree::new();
        let dialog = tree.add_root(Component::dialog(Some(WIKI)));
        let panel = tree.add_child(dialog, Component::panel(Some("This is modal window"))).unwrap();
        let button = tree.add_child(panel, Component::button()).unwrap();

        assert_eq!(
            tree.show_help(button).unwrap(),
            Some(Help::Modal("This is modal window".into()))
        );
    }

    #[test]
    fn test_request_reaches_the_root() {
        let mut tree = HelpTree::new();
        let dialog = tree.add_root(Component::dialog(Some(WIKI)));
        let panel = tree.add_child(dialog, Component::panel(None)).unwrap();
        let button = tree.add_child(panel, Component::button()).unwrap();

        let help = tree.show_help(button).unwrap().unwrap();
        assert_eq!(help.render(), format!("Open wiki page: {}", WIKI));
    }

    #[test]
    fn test_first_handler_wins() {
        let mut tree = HelpTree::new();
        let dialog = tree.add_root(Component::dialog(Some(WIKI)));
        let ok = tree.add_child(dialog, Component::button_with_tooltip("Confirm")).unwrap();

        assert_eq!(tree.show_help(ok).unwrap(), Some(Help::Tooltip("Confirm".into())));
    }

    #[test]
    fn test_nobody_handles() {
        let mut tree = HelpTree::new();
        let panel = tree.add_root(Component::panel(None));
        let button = tree.add_child(panel, Component::button()).unwrap();
        assert_eq!(tree.show_help(button).unwrap(), None);
    }

    #[test]
    fn test_buttons_cannot_have_children() {
        let mut tree = HelpTree::new();
        let button = tree.add_root(Component::button());
        assert_eq!(
            tree.add_child(button, Component::button()),
            Err(ChainError::NotAContainer(0))
        );
    }

    #[test]
    fn test_unknown_component() {
        let tree = HelpTree::new();
        assert_eq!(
            tree.show_help(ComponentId(3)),
            Err(ChainError::UnknownComponent(3))
        );
    }
}
