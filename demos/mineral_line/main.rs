use log::info;
use msim::{Simulation, SimulationConfig, SimulationObserver, TickReport};

/// Logs queue progress after every tick
struct ProgressLogger;

impl SimulationObserver for ProgressLogger {
    fn on_tick_complete(&mut self, report: &TickReport) {
        let promoted = report.manager.records.iter().filter(|r| r.is_ok()).count();
        let errors = report.factory.errors().count();
        info!(
            "Tick {}: manager promoted {}, factory {:?} with {} error(s)",
            report.tick, promoted, report.factory.outcome, errors
        );
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::Builder::new()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();

    // Optional first argument: stop after this many ticks
    let mut config = SimulationConfig::default();
    if let Some(arg) = std::env::args().nth(1) {
        config = config.with_max_ticks(arg.parse()?);
    }

    println!("Starting mineral line simulation");
    println!(
        "  jobs={}, tick interval={:?}, max ticks={:?}",
        config.job_count, config.tick_interval, config.max_ticks
    );

    let mut sim = Simulation::new(config);
    sim.registry().log_all_types();
    sim.seed_jobs()?;

    let mut engine = sim.build()?;
    engine.add_observer(Box::new(ProgressLogger));
    let ticks = engine.run()?;

    println!("Simulation stopped after {} ticks", ticks);
    for (status, count) in engine.queue().status_counts() {
        println!("  {}: {}", status, count);
    }
    Ok(())
}
