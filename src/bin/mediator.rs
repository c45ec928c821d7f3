//! Demo: an authentication dialog coordinating its own widgets
//!
//! Run with: cargo run --bin mediator

use design_patterns::behavioral::mediator::{
    AuthenticationDialog, Button, Checkbox, InMemoryCredentials, Outcome, TextField,
};
use design_patterns::console;

fn report(outcome: Outcome) {
    match outcome {
        Outcome::LoggedIn(user) => console::success(&format!("logged in as {}", user)),
        Outcome::Registered(user) => console::success(&format!("registered {}", user)),
        Outcome::Rejected(reason) => console::failure(&reason),
        other => console::lines([format!("{:?}", other)]),
    }
}

fn main() -> design_patterns::Result<()> {
    console::bootstrap()?;
    console::heading("Mediator");

    let store = InMemoryCredentials::default().with_user("john", "secret");
    let mut dialog = AuthenticationDialog::new(store);

    console::section(&dialog.title());
    TextField::username().type_text(&mut dialog, "john");
    TextField::password().type_text(&mut dialog, "wrong");
    report(Button::ok().click(&mut dialog));
    TextField::password().type_text(&mut dialog, "secret");
    report(Button::ok().click(&mut dialog));

    dialog.show();
    report(Checkbox::login_or_register().set_checked(&mut dialog, true));
    console::section(&dialog.title());
    TextField::username().type_text(&mut dialog, "anna");
    TextField::password().type_text(&mut dialog, "hunter2");
    TextField::confirm_password().type_text(&mut dialog, "hunter2");
    report(Button::ok().click(&mut dialog));

    dialog.show();
    report(Button::cancel().click(&mut dialog));
    console::lines([format!("dialog visible: {}", dialog.is_visible())]);

    Ok(())
}
