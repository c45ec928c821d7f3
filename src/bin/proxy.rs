//! Demo: a caching proxy in front of a remote video service
//!
//! Run with: cargo run --bin proxy

use design_patterns::console;
use design_patterns::structural::proxy::{CachedYouTube, ThirdPartyYouTube, YouTubeManager};

fn main() -> design_patterns::Result<()> {
    console::bootstrap()?;
    console::heading("Proxy");

    console::section("Direct service");
    let direct = ThirdPartyYouTube::new();
    let manager = YouTubeManager::new(&direct);
    for _ in 0..3 {
        manager.react_on_user_input();
    }
    console::lines([format!("remote calls: {}", direct.remote_calls())]);

    console::section("Through the caching proxy");
    let cached = CachedYouTube::new(ThirdPartyYouTube::new());
    let manager = YouTubeManager::new(&cached);
    for _ in 0..3 {
        console::lines(manager.react_on_user_input());
    }
    console::lines([format!("remote calls: {}", cached.service().remote_calls())]);

    Ok(())
}
