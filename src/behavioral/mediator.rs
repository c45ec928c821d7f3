//! Behavioral Pattern: Mediator
//! Example: An authentication dialog coordinating its own widgets
//!
//! Run with: cargo run --bin mediator
//!
//! ## Problem
//! Form widgets that talk to each other directly (the checkbox hiding fields,
//! the OK button validating them) end up tightly coupled and impossible to
//! reuse in another form.
//!
//! ## Solution
//! Widgets only ever notify a mediator: "I was clicked", "my text changed".
//! The mediator knows every widget and owns all interaction rules. Like an
//! air traffic control tower: pilots never talk to each other, only to the
//! tower.
//!
//! ## Structure
//! - [`Mediator`]: one `notify(sender, event)` method.
//! - [`AuthenticationDialog`]: the concrete mediator holding the form state.
//! - [`Button`], [`Checkbox`], [`TextField`]: components that know nothing
//!   but their [`Sender`] id and the mediator they report to.
//!
//! ## Trade-offs
//! Components become reusable and the interaction logic lives in one place.
//! Left unchecked, a mediator grows into a god object.

use std::fmt;

use rustc_hash::FxHashMap;
use tracing::debug;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sender {
    ModeCheckbox,
    UsernameField,
    PasswordField,
    ConfirmField,
    OkButton,
    CancelButton,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    Click,
    Toggled(bool),
    Edited(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Login,
    Register,
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Mode::Login => write!(f, "Log in"),
            Mode::Register => write!(f, "Register"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    ModeSwitched(Mode),
    FieldUpdated,
    LoggedIn(String),
    Registered(String),
    Rejected(String),
    Closed,
    Ignored,
}

pub trait Mediator {
    fn notify(&mut self, sender: Sender, event: Event) -> Outcome;
}

// ============================================================================
// Components
// ============================================================================

#[derive(Debug, Clone, Copy)]
pub struct Button {
    sender: Sender,
}

impl Button {
    pub fn ok() -> Self {
        Button {
            sender: Sender::OkButton,
        }
    }

    pub fn cancel() -> Self {
        Button {
            sender: Sender::CancelButton,
        }
    }

    pub fn click(&self, mediator: &mut dyn Mediator) -> Outcome {
        mediator.notify(self.sender, Event::Click)
    }
}

#[derive(Debug, Clone, Copy)]
pub struct Checkbox {
    sender: Sender,
}

impl Checkbox {
    pub fn login_or_register() -> Self {
        Checkbox {
            sender: Sender::ModeCheckbox,
        }
    }

    pub fn set_checked(&self, mediator: &mut dyn Mediator, checked: bool) -> Outcome {
        mediator.notify(self.sender, Event::Toggled(checked))
    }
}

#[derive(Debug, Clone, Copy)]
pub struct TextField {
    sender: Sender,
}

impl TextField {
    pub fn username() -> Self {
        TextField {
            sender: Sender::UsernameField,
        }
    }

    pub fn password() -> Self {
        TextField {
            sender: Sender::PasswordField,
        }
    }

    pub fn confirm_password() -> Self {
        TextField {
            sender: Sender::ConfirmField,
        }
    }

    pub fn type_text(&self, mediator: &mut dyn Mediator, text: &str) -> Outcome {
        mediator.notify(self.sender, Event::Edited(text.to_string()))
    }
}

// ============================================================================
// Concrete mediator
// ============================================================================

pub trait CredentialStore {
    fn verify(&self, username: &str, password: &str) -> bool;
    fn exists(&self, username: &str) -> bool;
    fn register(&mut self, username: &str, password: &str);
}

#[derive(Debug, Default)]
pub struct InMemoryCredentials {
    users: FxHashMap<String, String>,
}

impl InMemoryCredentials {
    pub fn with_user(mut self, username: &str, password: &str) -> Self {
        self.register(username, password);
        self
    }
}

impl CredentialStore for InMemoryCredentials {
    fn verify(&self, username: &str, password: &str) -> bool {
        self.users.get(username).is_some_and(|p| p == password)
    }

    fn exists(&self, username: &str) -> bool {
        self.users.contains_key(username)
    }

    fn register(&mut self, username: &str, password: &str) {
        self.users.insert(username.to_string(), password.to_string());
    }
}

pub struct AuthenticationDialog<S: CredentialStore> {
    mode: Mode,
    visible: bool,
    username: String,
    password: String,
    confirm: String,
    store: S,
}

impl<S: CredentialStore> AuthenticationDialog<S> {
    pub fn new(store: S) -> Self {
        AuthenticationDialog {
            mode: Mode::Login,
            visible: true,
            username: String::new(),
            password: String::new(),
            confirm: String::new(),
            store,
        }
    }

    pub fn title(&self) -> String {
        self.mode.to_string()
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn show(&mut self) {
        self.visible = true;
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    fn clear_fields(&mut self) {
        self.username.clear();
        self.password.clear();
        self.confirm.clear();
    }

    fn submit(&mut self) -> Outcome {
        match self.mode {
            Mode::Login => {
                if self.store.verify(&self.username, &self.password) {
                    self.visible = false;
                    Outcome::LoggedIn(self.username.clone())
                } else {
                    Outcome::Rejected("invalid username or password".into())
                }
            }
            Mode::Register => {
                if let Err(reason) = self.validate_registration() {
                    return Outcome::Rejected(reason.into());
                }
                self.store.register(&self.username, &self.password);
                let user = self.username.clone();
                self.mode = Mode::Login;
                self.clear_fields();
                Outcome::Registered(user)
            }
        }
    }

    fn validate_registration(&self) -> Result<(), &'static str> {
        if self.username.trim().is_empty() {
            return Err("username is required");
        }
        if self.password.is_empty() {
            return Err("password is required");
        }
        if self.password != self.confirm {
            return Err("passwords do not match");
        }
        if self.store.exists(&self.username) {
            return Err("username already taken");
        }
        Ok(())
    }
}

impl<S: CredentialStore> Mediator for AuthenticationDialog<S> {
    fn notify(&mut self, sender: Sender, event: Event) -> Outcome {
        if !self.visible {
            return Outcome::Ignored;
        }
        debug!(?sender, ?event, "dialog notified");

        match (sender, event) {
            (Sender::ModeCheckbox, Event::Toggled(register)) => {
                self.mode = if register { Mode::Register } else { Mode::Login };
                self.clear_fields();
                Outcome::ModeSwitched(self.mode)
            }
            (Sender::UsernameField, Event::Edited(text)) => {
                self.username = text;
                Outcome::FieldUpdated
            }
            (Sender::PasswordField, Event::Edited(text)) => {
                self.password = text;
                Outcome::FieldUpdated
            }
            (Sender::ConfirmField, Event::Edited(text)) if self.mode == Mode::Register => {
                self.confirm = text;
                Outcome::FieldUpdated
            }
            (Sender::OkButton, Event::Click) => self.submit(),
            (Sender::CancelButton, Event::Click) => {
                self.visible = false;
                self.clear_fields();
                Outcome::Closed
            }
            _ => Outcome::Ignored,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dialog() -> AuthenticationDialog<InMemoryCredentials> {
        AuthenticationDialog::new(InMemoryCredentials::default().with_user("john", "secret"))
    }

    #[test]
    fn test_login_success_closes_dialog() {
        let mut d = dialog();
        TextField::username().type_text(&mut d, "john");
        TextField::password().type_text(&mut d, "secret");

        assert_eq!(Button::ok().click(&mut d), Outcome::LoggedIn("john".into()));
        assert!(!d.is_visible());
    }

    #[test]
    fn test_login_with_wrong_password() {
        let mut d = dialog();
        TextField::username().type_text(&mut d, "john");
        TextField::password().type_text(&mut d, "nope");

        assert!(matches!(Button::ok().click(&mut d), Outcome::Rejected(_)));
        assert!(d.is_visible());
    }

    #[test]
    fn test_checkbox_switches_mode_and_title() {
        let mut d = dialog();
        assert_eq!(d.title(), "Log in");

        let outcome = Checkbox::login_or_register().set_checked(&mut d, true);
        assert_eq!(outcome, Outcome::ModeSwitched(Mode::Register));
        assert_eq!(d.title(), "Register");
    }

    #[test]
    fn test_confirm_field_only_matters_when_registering() {
        let mut d = dialog();
        assert_eq!(
            TextField::confirm_password().type_text(&mut d, "x"),
            Outcome::Ignored
        );
    }

    #[test]
    fn test_registration_rules() {
        let mut d = dialog();
        Checkbox::login_or_register().set_checked(&mut d, true);

        assert_eq!(
            Button::ok().click(&mut d),
            Outcome::Rejected("username is required".into())
        );

        TextField::username().type_text(&mut d, "jane");
        TextField::password().type_text(&mut d, "pw1");
        TextField::confirm_password().type_text(&mut d, "pw2");
        assert_eq!(
            Button::ok().click(&mut d),
            Outcome::Rejected("passwords do not match".into())
        );

        TextField::confirm_password().type_text(&mut d, "pw1");
        assert_eq!(Button::ok().click(&mut d), Outcome::Registered("jane".into()));
        assert_eq!(d.mode(), Mode::Login);
        assert!(d.store().verify("jane", "pw1"));
    }

    #[test]
    fn test_duplicate_username_rejected() {
        let mut d = dialog();
        Checkbox::login_or_register().set_checked(&mut d, true);
        TextField::username().type_text(&mut d, "john");
        TextField::password().type_text(&mut d, "a");
        TextField::confirm_password().type_text(&mut d, "a");

        assert_eq!(
            Button::ok().click(&mut d),
            Outcome::Rejected("username already taken".into())
        );
    }

    #[test]
    fn test_closed_dialog_ignores_everything() {
        let mut d = dialog();
        assert_eq!(Button::cancel().click(&mut d), Outcome::Closed);
        assert_eq!(Button::ok().click(&mut d), Outcome::Ignored);

        d.show();
        assert_eq!(
            TextField::username().type_text(&mut d, "john"),
            Outcome::FieldUpdated
        );
    }
}
