//! Demo: basic and advanced remotes driving a TV and a radio
//!
//! Run with: cargo run --bin bridge

use design_patterns::console;
use design_patterns::structural::bridge::{AdvancedRemoteControl, Radio, Remote, RemoteControl, Tv};

fn main() -> design_patterns::Result<()> {
    console::bootstrap()?;
    console::heading("Bridge");

    console::section("Basic remote + TV");
    let mut remote = RemoteControl::new(Tv::default());
    remote.toggle_power();
    remote.volume_up();
    remote.volume_up();
    remote.channel_up();
    console::lines([remote.device().status()]);

    console::section("Advanced remote + radio");
    let mut advanced = AdvancedRemoteControl::new(Radio::default());
    advanced.toggle_power();
    advanced.volume_up();
    console::lines([advanced.device().status()]);
    advanced.mute();
    console::lines([advanced.device().status()]);

    Ok(())
}
