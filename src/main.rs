use trajsim::{bench_advance, detect, Scenario, ScenarioConfig};

use clap::Parser;
use anyhow::Result;

use std::fs::File;
use std::io::BufReader;
use std::path::PathBuf;

#[derive(Parser, Debug)]
struct Args {
    #[arg(short, default_value = "ascent.yaml")]
    file_name: String,

    /// Time the stepping loop instead of running a scenario
    #[arg(long)]
    bench: bool,
}

// load here to keep main clean
fn load_scenario_from_yaml(file_name: &str) -> Result<ScenarioConfig> {
    let config_path = PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("scenarios")
        .join(file_name);
    let file = File::open(&config_path)?;
    let reader = BufReader::new(file);
    let scenario_cfg: ScenarioConfig = serde_yaml::from_reader(reader)?;

    Ok(scenario_cfg)
}

fn main() -> Result<()> {
    let args = Args::parse();

    if args.bench {
        bench_advance();
        return Ok(());
    }

    let scenario_cfg = load_scenario_from_yaml(&args.file_name)?;
    let mut scenario = Scenario::build_scenario(scenario_cfg)?;

    println!("Initial trajectory data");
    println!("{}\n", scenario.rocket.current());

    for iteration in 0..scenario.steps {
        println!("Calculating for iteration {iteration}");
        let departure = scenario.rocket.current().position;
        scenario.rocket.advance(&scenario.planets);

        let state = scenario.rocket.current();
        println!("{state}\n");

        // Probe each planet with this step's displacement; stop on the
        // first surface crossing.
        for planet in &scenario.planets {
            if let Some(impact) = detect(
                departure,
                state.velocity,
                planet.current().position,
                planet.radius(),
            ) {
                println!(
                    "Impact at [{}, {}] on iteration {iteration}",
                    impact.x, impact.y
                );
                return Ok(());
            }
        }
    }

    Ok(())
}
