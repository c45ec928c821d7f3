//! Demo: painting a widget family picked from configuration
//!
//! Run with: cargo run --bin abstract_factory
//! Set `[gui] platform = "mac"` in patterns.toml to switch families.

use design_patterns::console;
use design_patterns::creational::abstract_factory::{Application, Platform};

fn main() -> design_patterns::Result<()> {
    let config = console::bootstrap()?;
    console::heading("Abstract Factory");

    console::section(&format!("Configured platform: {:?}", config.gui.platform));
    let factory = config.gui.platform.factory();
    console::lines(Application::new(factory.as_ref()).paint());

    for platform in [Platform::Windows, Platform::Mac] {
        console::section(&format!("{:?}", platform));
        console::lines(Application::new(platform.factory().as_ref()).paint());
    }

    Ok(())
}
