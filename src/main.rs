use pendsim::{Scenario, ScenarioConfig, SimulationResult};
use pendsim::{bench_eom, bench_rk4};

use clap::Parser;
use anyhow::{Context, Result};

use std::fs::File;
use std::io::{BufReader, BufWriter, Write};
use std::path::PathBuf;

#[derive(Parser, Debug)]
struct Args {
    /// Scenario YAML file, looked up under scenarios/
    #[arg(short, default_value = "triple.yaml")]
    file_name: String,

    /// Directory the CSV series are written to
    #[arg(short, default_value = "output")]
    out_dir: PathBuf,

    /// Run the micro benchmarks instead of a simulation
    #[arg(short, long)]
    bench: bool,
}

// load here to keep main clean
fn load_scenario_from_yaml(file_name: &str) -> Result<ScenarioConfig> {
    let config_path = PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("scenarios")
        .join(file_name);
    let file = File::open(&config_path)
        .with_context(|| format!("opening scenario {}", config_path.display()))?;
    let reader = BufReader::new(file);
    let scenario_cfg: ScenarioConfig = serde_yaml::from_reader(reader)?;

    Ok(scenario_cfg)
}

/// Dump the three output series as plain CSV, one row per time node.
fn write_series(result: &SimulationResult, out_dir: &PathBuf, segments: usize) -> Result<()> {
    std::fs::create_dir_all(out_dir)?;

    // trajectory.csv: t, theta0, omega0, ...
    let mut w = BufWriter::new(File::create(out_dir.join("trajectory.csv"))?);
    write!(w, "t")?;
    for k in 0..segments {
        write!(w, ",theta{k},omega{k}")?;
    }
    writeln!(w)?;
    for (t, q) in result.times.iter().zip(&result.states) {
        write!(w, "{t}")?;
        for x in q {
            write!(w, ",{x}")?;
        }
        writeln!(w)?;
    }

    // positions.csv: t, x0, y0, ...
    let mut w = BufWriter::new(File::create(out_dir.join("positions.csv"))?);
    write!(w, "t")?;
    for k in 0..segments {
        write!(w, ",x{k},y{k}")?;
    }
    writeln!(w)?;
    for (t, node) in result.times.iter().zip(&result.positions) {
        write!(w, "{t}")?;
        for p in node {
            write!(w, ",{},{}", p.x, p.y)?;
        }
        writeln!(w)?;
    }

    // energy.csv: t, kinetic, potential, total
    let mut w = BufWriter::new(File::create(out_dir.join("energy.csv"))?);
    writeln!(w, "t,kinetic,potential,total")?;
    for (i, t) in result.times.iter().enumerate() {
        writeln!(
            w,
            "{t},{},{},{}",
            result.energy.kinetic[i], result.energy.potential[i], result.energy.total[i],
        )?;
    }

    Ok(())
}

fn main() -> Result<()> {
    let args = Args::parse();

    if args.bench {
        bench_eom();
        bench_rk4();
        return Ok(());
    }

    let scenario_cfg = load_scenario_from_yaml(&args.file_name)?;
    let scenario = Scenario::build_scenario(scenario_cfg)?;
    let segments = scenario.system.segments();

    println!(
        "running {segments}-segment pendulum: t in [{}, {}], {} steps (h = {:.6})",
        scenario.parameters.t_start,
        scenario.parameters.t_end,
        scenario.parameters.n_steps,
        scenario.parameters.step_size(),
    );

    let result = scenario.run()?;

    println!(
        "done: {} nodes, total energy drift = {:.3e} J",
        result.times.len(),
        result.energy.max_drift(),
    );

    write_series(&result, &args.out_dir, segments)?;
    println!("series written to {}", args.out_dir.display());

    Ok(())
}
