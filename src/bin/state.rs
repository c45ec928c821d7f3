//! Demo: an audio player whose buttons depend on its state
//!
//! Run with: cargo run --bin state

use design_patterns::behavioral::state::AudioPlayer;
use design_patterns::console;

fn main() -> design_patterns::Result<()> {
    console::bootstrap()?;
    console::heading("State");

    let playlist = ["Intro", "Overture", "Finale"].map(String::from).to_vec();
    let mut player = AudioPlayer::new(playlist);

    let mut log = vec![player.next_track()];
    log.push(player.play().to_string());
    log.push(player.next_track());
    log.push(player.next_track());
    log.push(player.pause().to_string());
    log.push(player.play().to_string());
    log.push(player.previous_track());
    log.push(player.stop().to_string());

    console::lines(log);
    console::lines([format!(
        "state: {}, track: {}",
        player.state(),
        player.current_track().unwrap_or("-")
    )]);

    Ok(())
}
