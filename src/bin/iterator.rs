//! Demo: sending messages to a profile's friends and coworkers
//!
//! Run with: cargo run --bin iterator

use design_patterns::behavioral::iterator::{
    Facebook, Profile, Relation, SocialNetwork, SocialSpammer,
};
use design_patterns::console;

fn network() -> Facebook {
    let mut network = Facebook::new();
    for (id, name) in [(1, "John"), (2, "Anna"), (3, "Mike"), (4, "Sara"), (5, "Tom")] {
        network.add_profile(Profile::new(id, name, format!("{}@example.com", name.to_lowercase())));
    }
    for friend in 2..=5 {
        network.connect(1, Relation::Friends, friend);
    }
    network.connect(1, Relation::Coworkers, 3);
    network.connect(1, Relation::Coworkers, 5);
    network
}

fn main() -> design_patterns::Result<()> {
    let config = console::bootstrap()?;
    console::heading("Iterator");

    let network = network();
    let spammer = SocialSpammer;

    console::section("Friends of John");
    let mut friends = network.create_friends_iterator(1);
    console::lines(spammer.send(friends.as_mut(), &config.social.greeting)?);

    console::section("Coworkers of John");
    let mut coworkers = network.create_coworkers_iterator(1);
    console::lines([spammer.recipients(coworkers.as_mut())?]);

    console::section("Unknown profile");
    let mut missing = network.create_friends_iterator(42);
    if let Err(err) = missing.has_more() {
        console::failure(&err.to_string());
    }

    Ok(())
}
