//! Main simulation orchestrator
//!
//! Owns the whole simulation context (clock, fleet, random source and statistics) and
//! drives the tick loop: advance, reap, replenish, update, deliver, idle.

use chrono::{DateTime, Utc};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::collections::BTreeSet;
use std::time::Instant;
use tracing::{debug, error, info, instrument, warn};

use super::{
    Fleet, ShutdownSignal, SimulationClock, SimulationError, SimulationResult,
    SimulationStatistics,
};
use crate::events::EventSynthesizer;
use crate::flight::{FlightGenerator, FlightUpdate};
use crate::sink::{Sink, SinkError};
use crate::types::{DeliveryPolicy, FlightDesignator, SimulationConfig};
use crate::{perf_span, sim_event};

/// What happened during one tick
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TickReport {
    /// Tick number, starting at 1
    pub tick: u64,
    /// Flights removed after landing
    pub retired: Vec<FlightDesignator>,
    /// Flights added to restore the target
    pub spawned: Vec<FlightDesignator>,
    /// Active count right after replenish
    pub active_flights: usize,
    /// Records synthesized
    pub emitted: usize,
    /// Records accepted by the sink
    pub delivered: usize,
    /// Records that failed
    pub failed: usize,
    /// Records never offered to the sink because delivery stopped early
    pub skipped: usize,
}

/// Why a run ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StopReason {
    /// The configured tick limit was reached
    TickLimit,
    /// The shutdown signal was raised
    Shutdown,
}

/// Main simulation orchestrator that coordinates all components
#[derive(Debug)]
pub struct SimulationOrchestrator {
    config: SimulationConfig,
    clock: SimulationClock,
    fleet: Fleet,
    generator: FlightGenerator,
    synthesizer: EventSynthesizer,
    rng: StdRng,
    statistics: SimulationStatistics,
}

impl SimulationOrchestrator {
    /// Create a new simulation orchestrator
    ///
    /// The fleet starts empty and is filled by the first tick's replenish phase.
    #[instrument(skip(config), fields(hub = %config.hub_airport, target = config.max_active_flights))]
    pub fn new(config: SimulationConfig) -> SimulationResult<Self> {
        config.validate()?;

        let rng: StdRng = if let Some(seed) = config.seed {
            info!("Using deterministic seed: {}", seed);
            StdRng::seed_from_u64(seed)
        } else {
            debug!("Using entropy-based random seed");
            StdRng::from_entropy()
        };

        let start = config.start_time.unwrap_or_else(Utc::now);
        let clock = SimulationClock::new(start, config.time_step()?)?;
        let generator = FlightGenerator::new(&config)?;
        let synthesizer = EventSynthesizer::new(&config);
        let fleet = Fleet::new(config.max_active_flights);

        info!(
            "Simulation ready: hub {} with {} spokes, {} active flights, {} min per tick, clock starts at {}",
            config.hub_airport,
            config.spoke_airports.len(),
            config.max_active_flights,
            config.time_step_minutes,
            start
        );

        Ok(Self {
            config,
            clock,
            fleet,
            generator,
            synthesizer,
            rng,
            statistics: SimulationStatistics::new(),
        })
    }

    /// Configuration in use
    pub fn config(&self) -> &SimulationConfig {
        &self.config
    }

    /// Current simulation clock
    pub fn now(&self) -> DateTime<Utc> {
        self.clock.now()
    }

    /// Clock driver
    pub fn clock(&self) -> &SimulationClock {
        &self.clock
    }

    /// Active fleet
    pub fn fleet(&self) -> &Fleet {
        &self.fleet
    }

    /// Statistics so far
    pub fn statistics(&self) -> &SimulationStatistics {
        &self.statistics
    }

    /// Run one full tick against `sink`
    ///
    /// Fleet state is fully committed before delivery starts, so a delivery failure
    /// never corrupts it. Under [`DeliveryPolicy::Halt`] the first failure is returned
    /// as [`SimulationError::DeliveryError`] after the tick has been counted.
    pub fn tick(&mut self, sink: &mut dyn Sink) -> SimulationResult<TickReport> {
        let now = self.clock.advance()?;
        let span = perf_span!("tick", tick = self.clock.ticks());
        let _entered = span.enter();

        let retired: Vec<FlightDesignator> =
            self.fleet.reap().iter().map(|flight| flight.designator().clone()).collect();
        let vacated: BTreeSet<FlightDesignator> = retired.iter().cloned().collect();

        let replenish = self.fleet.replenish(&self.generator, now, &vacated, &mut self.rng);
        let active_flights = self.fleet.len();

        let updates = self.fleet.update_all(now, &self.synthesizer, &mut self.rng);

        let mut report = TickReport {
            tick: self.clock.ticks(),
            retired,
            spawned: replenish.spawned,
            active_flights,
            emitted: updates.len(),
            ..Default::default()
        };

        self.statistics.ticks += 1;
        self.statistics.flights_retired += report.retired.len() as u64;
        self.statistics.flights_spawned += report.spawned.len() as u64;
        self.statistics.designator_collisions += replenish.collisions as u64;
        self.statistics.records_emitted += updates.len() as u64;
        self.statistics.final_clock = Some(now);
        for transition in updates.iter().filter_map(|update| update.transition) {
            self.statistics.record_transition(transition);
        }

        info!("Simulation clock: {}", now.format("%Y-%m-%d %H:%M:%S"));
        for designator in &report.retired {
            info!("Flight {} landed and retired", designator);
        }
        for designator in &report.spawned {
            info!("New flight {} created", designator);
        }

        let outcome = self.deliver(&updates, sink, &mut report);

        if let Err(e) = sink.flush() {
            error!("Sink flush failed after tick {}: {}", report.tick, e);
        }

        sim_event!(
            debug,
            "tick finished",
            tick = report.tick,
            active = report.active_flights,
            delivered = report.delivered,
            failed = report.failed,
        );

        outcome.map(|()| report)
    }

    /// Hand every record to the sink in fleet order, applying the delivery policy
    fn deliver(
        &mut self,
        updates: &[FlightUpdate],
        sink: &mut dyn Sink,
        report: &mut TickReport,
    ) -> SimulationResult<()> {
        for (index, update) in updates.iter().enumerate() {
            let partition_key = update.event.partition_key();
            let result = update
                .event
                .to_json_bytes()
                .map_err(SinkError::from)
                .and_then(|payload| sink.send(&payload, partition_key));

            let error = match result {
                Ok(()) => {
                    report.delivered += 1;
                    self.statistics.records_delivered += 1;
                    continue;
                }
                Err(error) => error,
            };

            report.failed += 1;
            self.statistics.records_failed += 1;

            match self.config.delivery_policy {
                DeliveryPolicy::SkipAndContinue => {
                    warn!("Failed to deliver record for {}: {}", partition_key, error);
                }
                DeliveryPolicy::FailFastTick => {
                    let remaining = updates.len() - index - 1;
                    error!(
                        "Failed to deliver record for {}: {}; dropping {} remaining records this tick",
                        partition_key, error, remaining
                    );
                    report.skipped = remaining;
                    self.statistics.records_skipped += remaining as u64;
                    self.statistics.ticks_cut_short += 1;
                    return Ok(());
                }
                DeliveryPolicy::Halt => {
                    let remaining = updates.len() - index - 1;
                    error!("Failed to deliver record for {}: {}; halting", partition_key, error);
                    report.skipped = remaining;
                    self.statistics.records_skipped += remaining as u64;
                    self.statistics.ticks_cut_short += 1;
                    return Err(SimulationError::delivery_error(format!(
                        "record for {}: {}",
                        partition_key, error
                    )));
                }
            }
        }
        Ok(())
    }

    /// Tick until `shutdown` is raised or the tick limit is reached
    ///
    /// Cancellation is observed only between ticks and during the idle wait.
    #[instrument(skip_all, fields(sink = sink.name()))]
    pub fn run(
        &mut self,
        sink: &mut dyn Sink,
        shutdown: &ShutdownSignal,
    ) -> SimulationResult<StopReason> {
        let started = Instant::now();
        let interval = self.config.tick_interval()?;
        info!("Starting simulation loop (tick interval {:?})", interval);

        let reason = loop {
            if shutdown.is_triggered() {
                break StopReason::Shutdown;
            }
            if self.config.max_ticks.is_some_and(|limit| self.clock.ticks() >= limit) {
                break StopReason::TickLimit;
            }

            if let Err(e) = self.tick(sink) {
                self.statistics.wall_clock_duration = started.elapsed();
                return Err(e);
            }

            let at_limit = self.config.max_ticks.is_some_and(|limit| self.clock.ticks() >= limit);
            if !at_limit && !shutdown.sleep(interval) {
                break StopReason::Shutdown;
            }
        };

        self.statistics.wall_clock_duration = started.elapsed();
        sim_event!(
            info,
            "simulation stopped",
            ticks = self.statistics.ticks,
            records = self.statistics.records_emitted,
        );
        info!(
            "Simulation stopped ({:?}) after {} simulated minutes: {}",
            reason,
            self.clock.elapsed().num_minutes(),
            self.statistics.summary()
        );
        Ok(reason)
    }
}
