//! Behavioral Pattern: Template Method
//! Example: Turn logic for strategy-game AIs
//!
//! Run with: cargo run --bin template_method
//!
//! The skeleton of an algorithm lives in one provided trait method
//! ([`GameAi::turn`]); the individual steps are trait methods that
//! implementors may override. Some steps have a default (here: do nothing),
//! some are required (`build_units`). Steps can also act as hooks: points
//! where an implementor may extend the algorithm without owning it.
//!
//! Related: Factory Method is a specialisation of Template Method, and
//! Strategy varies a whole algorithm by delegation where Template Method
//! varies parts of one through overriding.
//!
//! Caveat: a rigid skeleton can box clients in, and suppressing a default
//! step in an implementor can surprise callers.

/// Record of what happened during one turn.
pub type TurnLog = Vec<String>;

pub trait GameAi {
    fn race(&self) -> &str;

    /// The template method. Implementors should not override it.
    fn turn(&mut self) -> TurnLog {
        let mut log = TurnLog::new();
        self.collect_resources(&mut log);
        self.build_structures(&mut log);
        self.build_units(&mut log);
        self.attack(&mut log);
        log
    }

    fn collect_resources(&mut self, _log: &mut TurnLog) {}

    fn build_structures(&mut self, _log: &mut TurnLog) {}

    fn build_units(&mut self, log: &mut TurnLog);

    fn attack(&mut self, log: &mut TurnLog) {
        log.push(format!("{} attack", self.race()));
    }
}

/// Orcs never collect resources; they raid for them.
#[derive(Debug, Default)]
pub struct OrcsAi {
    structures: u32,
    units: u32,
}

impl OrcsAi {
    pub fn army_size(&self) -> u32 {
        self.units
    }
}

impl GameAi for OrcsAi {
    fn race(&self) -> &str {
        "Orcs"
    }

    fn build_structures(&mut self, log: &mut TurnLog) {
        self.structures += 1;
        log.push(format!("Orcs build structures ({} total)", self.structures));
    }

    fn build_units(&mut self, log: &mut TurnLog) {
        // One grunt per structure.
        self.units += self.structures;
        log.push(format!("Orcs build units ({} total)", self.units));
    }
}

/// Monsters never build structures.
#[derive(Debug, Default)]
pub struct MonstersAi {
    resources: u32,
    units: u32,
}

impl MonstersAi {
    pub fn army_size(&self) -> u32 {
        self.units
    }
}

impl GameAi for MonstersAi {
    fn race(&self) -> &str {
        "Monsters"
    }

    fn collect_resources(&mut self, log: &mut TurnLog) {
        self.resources += 10;
        log.push(format!("Monsters collect resources ({} stored)", self.resources));
    }

    fn build_units(&mut self, log: &mut TurnLog) {
        let spawned = self.resources / 5;
        self.resources -= spawned * 5;
        self.units += spawned;
        log.push(format!("Monsters build units ({} total)", self.units));
    }
}
