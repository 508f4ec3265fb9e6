//! Active fleet
//!
//! Flights keyed by designator. The map is ordered so a seeded run iterates, updates
//! and delivers in the same order every time.

use chrono::{DateTime, Utc};
use rand::Rng;
use std::collections::{btree_map, BTreeMap, BTreeSet};
use tracing::debug;

use crate::events::EventSynthesizer;
use crate::flight::{Flight, FlightGenerator, FlightUpdate};
use crate::types::FlightDesignator;

/// Outcome of a replenish pass
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReplenishReport {
    /// Designators of the flights added, in insertion order
    pub spawned: Vec<FlightDesignator>,
    /// Candidates discarded because their designator was taken or just vacated
    pub collisions: usize,
}

/// The set of in-progress flights
#[derive(Debug, Clone)]
pub struct Fleet {
    flights: BTreeMap<FlightDesignator, Flight>,
    target: usize,
}

impl Fleet {
    /// Create an empty fleet that replenishes up to `target`
    pub fn new(target: usize) -> Self {
        Self { flights: BTreeMap::new(), target }
    }

    /// Active count
    pub fn len(&self) -> usize {
        self.flights.len()
    }

    /// Whether no flight is active
    pub fn is_empty(&self) -> bool {
        self.flights.is_empty()
    }

    /// Whether `designator` is active
    pub fn contains(&self, designator: &FlightDesignator) -> bool {
        self.flights.contains_key(designator)
    }

    /// Flights in designator order
    pub fn iter(&self) -> btree_map::Values<'_, FlightDesignator, Flight> {
        self.flights.values()
    }

    /// Add a flight unless its designator is already active
    ///
    /// Returns the flight back when the slot is taken.
    pub fn insert(&mut self, flight: Flight) -> Result<(), Flight> {
        match self.flights.entry(flight.designator().clone()) {
            btree_map::Entry::Occupied(_) => Err(flight),
            btree_map::Entry::Vacant(slot) => {
                slot.insert(flight);
                Ok(())
            }
        }
    }

    /// Remove every landed flight
    pub fn reap(&mut self) -> Vec<Flight> {
        let landed: Vec<FlightDesignator> = self
            .flights
            .iter()
            .filter(|(_, flight)| flight.is_landed())
            .map(|(designator, _)| designator.clone())
            .collect();

        landed.iter().filter_map(|designator| self.flights.remove(designator)).collect()
    }

    /// Generate flights at `now` until the fleet is back at its target
    ///
    /// A candidate whose designator is active, or is listed in `vacated`, is discarded
    /// and drawn again, so a slot freed this tick is never reused within the same tick.
    pub fn replenish<R: Rng + ?Sized>(
        &mut self,
        generator: &FlightGenerator,
        now: DateTime<Utc>,
        vacated: &BTreeSet<FlightDesignator>,
        rng: &mut R,
    ) -> ReplenishReport {
        let mut report = ReplenishReport::default();

        while self.flights.len() < self.target {
            let candidate = generator.generate(now, rng);
            if vacated.contains(candidate.designator()) {
                debug!("Designator {} was vacated this tick, regenerating", candidate.designator());
                report.collisions += 1;
                continue;
            }

            let designator = candidate.designator().clone();
            match self.insert(candidate) {
                Ok(()) => report.spawned.push(designator),
                Err(_) => {
                    debug!("Designator {} already active, regenerating", designator);
                    report.collisions += 1;
                }
            }
        }

        report
    }

    /// Update every active flight against `now`, in designator order
    ///
    /// The set of flights is not changed here; only each flight's own state moves.
    pub fn update_all<R: Rng + ?Sized>(
        &mut self,
        now: DateTime<Utc>,
        synthesizer: &EventSynthesizer,
        rng: &mut R,
    ) -> Vec<FlightUpdate> {
        self.flights.values_mut().map(|flight| flight.update(now, synthesizer, rng)).collect()
    }
}
