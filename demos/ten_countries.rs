// demos/ten_countries.rs
// Run with:
//   RUST_LOG=climate_game=debug cargo run --example ten_countries

use climate_game::systems::income_floor::IncomeFloor;
use climate_game::systems::recorder::Recorder;
use climate_game::{CountryBaseline, Population, SimConfig, Simulation};
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    // (id, income, influence, vulnerability, adoption cost)
    let countries = [
        ("Aurelia", 48_000.0, 0.22, 0.20, 320.0),
        ("Borealis", 41_000.0, 0.18, 0.15, 280.0),
        ("Cascadia", 23_000.0, 0.12, 0.35, 190.0),
        ("Dunmark", 15_000.0, 0.10, 0.45, 160.0),
        ("Estvia", 12_000.0, 0.09, 0.50, 150.0),
        ("Fernlund", 8_500.0, 0.08, 0.60, 120.0),
        ("Galdor", 6_000.0, 0.07, 0.70, 95.0),
        ("Hollis", 4_200.0, 0.06, 0.80, 80.0),
        ("Ishara", 2_100.0, 0.05, 0.90, 60.0),
        ("Jorvik", 900.0, 0.03, 0.95, 45.0),
    ];
    let population = Population::new(
        countries
            .iter()
            .map(|&(id, y, infl, v, c)| (id, CountryBaseline::new(y, infl, v, c))),
    )?;

    let cfg = SimConfig::from_json(r#"{ "rounds": 30, "threshold": 0.6, "learning_rate": 0.15 }"#)?;
    let (recorder, trajectory) = Recorder::new(cfg.adoption_cutoff);

    let history = Simulation::new(&population, cfg)?
        .with_hook(IncomeFloor::new(1_000.0))
        .with_hook(recorder)
        .run();

    println!("== Adoption trajectory ==");
    for p in trajectory.borrow().iter() {
        println!(
            "round {:>2}  weighted {:.2}  share {:.2}  adopters {}",
            p.round, p.weighted_adoption, p.adoption_fraction, p.adopters
        );
    }

    println!("== Payoffs: Galdor ==");
    for (round, state, decision) in history.country_series("Galdor") {
        if let Some(d) = decision {
            println!(
                "round {:>2}  adopt {:+.4}  free-ride {:+.4}  cost {:.1}",
                round, d.payoffs.adopt, d.payoffs.free_ride, state.adoption_cost()
            );
        }
    }
    Ok(())
}
