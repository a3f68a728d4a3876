use std::sync::atomic::{AtomicBool, Ordering};
use nvekin_core::{Diagnostics, Observer, ParticleSystem, SimulationError, Snapshot};
use rand::rngs::StdRng;
use rand::SeedableRng;
use crate::config::SimulationConfig;
use crate::initializer::initialize_system;
use crate::macro_parameters::get_pressure;
use crate::solver::{ForceShiftedLennardJones, Integrator, Potential, VelocityVerlet};

/// How a [Simulation::run] ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RunSummary {
    /// Index of the last finished step
    pub last_step: usize,
    /// True if the stop flag ended the run before `step_count`
    pub stopped: bool,
}

/// Owns the particle system and advances it step by step.
pub struct Simulation<P: Potential = ForceShiftedLennardJones> {
    config: SimulationConfig,
    system: ParticleSystem,
    integrator: VelocityVerlet,
    potential: P,
    current_step: usize,
    initial_reported: bool,
}

impl Simulation<ForceShiftedLennardJones> {
    /// Validates `config` and builds a random initial configuration.
    pub fn new(config: SimulationConfig) -> Result<Self, SimulationError> {
        config.validate()?;
        let mut rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        let system = initialize_system(&config, &mut rng)?;
        log::info!("created {} particles in a box of edge {:.6}, T = {}, dt = {}",
                   system.len(), system.boundary_box().x, config.temperature, config.delta_time);
        let potential = ForceShiftedLennardJones::new(system.particles());
        Self::from_system(config, system, potential)
    }
}

impl<P: Potential> Simulation<P> {
    /// Starts from an existing particle system. Its box is used as is.
    pub fn from_system(config: SimulationConfig, system: ParticleSystem,
                       potential: P) -> Result<Self, SimulationError> {
        config.validate()?;
        let integrator = VelocityVerlet::new(config.thermostat, config.temperature);
        Ok(Self {
            config,
            system,
            integrator,
            potential,
            current_step: 0,
            initial_reported: false,
        })
    }

    pub fn config(&self) -> &SimulationConfig {
        &self.config
    }

    pub fn system(&self) -> &ParticleSystem {
        &self.system
    }

    pub fn current_step(&self) -> usize {
        self.current_step
    }

    /// One integrator step followed by a finite-value check of every particle.
    pub fn step(&mut self) -> Result<(), SimulationError> {
        self.integrator.calculate(&mut self.system, self.config.delta_time, &self.potential)?;
        self.current_step += 1;
        if let Some(particle) = self.system.first_non_finite() {
            return Err(SimulationError::NumericInstability {
                step: self.current_step,
                particle,
            });
        }
        Ok(())
    }

    pub fn diagnostics(&self) -> Diagnostics {
        let temperature = self.system.temperature();
        Diagnostics {
            step: self.current_step,
            temperature,
            pressure: get_pressure(&self.system, temperature, &self.potential),
        }
    }

    pub fn snapshot(&self) -> Snapshot {
        self.system.snapshot(self.current_step)
    }

    fn report(&self, observer: &mut impl Observer) -> Result<(), SimulationError> {
        observer.diagnostics(&self.diagnostics());
        observer.snapshot(&self.snapshot())?;
        Ok(())
    }

    /// Runs until `step_count` steps are done or `stop` is set.
    ///
    /// The initial state is reported once, before the first step of the first run,
    /// then every `report_interval` steps. `stop` is checked only between steps, and
    /// a stopped simulation continues from where it was on the next call.
    pub fn run(&mut self, observer: &mut impl Observer,
               stop: &AtomicBool) -> Result<RunSummary, SimulationError> {
        self.run_steps(observer, Some(stop))
    }

    /// Same as [Simulation::run] without a stop flag.
    pub fn run_to_completion(&mut self, observer: &mut impl Observer) -> Result<RunSummary, SimulationError> {
        self.run_steps(observer, None)
    }

    fn run_steps(&mut self, observer: &mut impl Observer,
                 stop: Option<&AtomicBool>) -> Result<RunSummary, SimulationError> {
        if !self.initial_reported {
            if self.current_step == 0 {
                self.report(observer)?;
            }
            self.initial_reported = true;
        }
        while self.current_step < self.config.step_count {
            if stop.map_or(false, |stop| stop.load(Ordering::Relaxed)) {
                log::info!("stopped after step {}", self.current_step);
                return Ok(RunSummary {
                    last_step: self.current_step,
                    stopped: true,
                });
            }
            self.step()?;
            if self.current_step % self.config.report_interval == 0 {
                self.report(observer)?;
            }
        }
        Ok(RunSummary {
            last_step: self.current_step,
            stopped: false,
        })
    }

    pub fn get_final_state(self) -> ParticleSystem {
        self.system
    }
}
