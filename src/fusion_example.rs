use fusion_stab::{ NPauli, Outcomes, Sign, Step, parse_string, update_traced };
use itertools::Itertools;
use tracing::{ error, info };
use tracing_subscriber::{ fmt, prelude::*, EnvFilter };

fn init_logging(level: &str) {
    let filter
        = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_target(true))
        .init();
}

fn run() -> fusion_stab::FusionResult<()> {
    // three-qubit GHZ state
    let resource: Vec<NPauli>
        = ["+XXX", "+ZZI", "+IZZ"].iter()
        .map(|s| s.parse())
        .collect::<Result<_, _>>()?;
    let fusions = vec![parse_string("XII")?, parse_string("IZI")?];
    let mut outcomes = Outcomes::new();
    outcomes.insert(fusions[0].clone(), Sign::Plus);
    outcomes.insert(fusions[1].clone(), Sign::Minus);

    println!("Initial resource generators:");
    resource.iter().for_each(|g| { println!("  {}", g); });

    let (updated, steps) = update_traced(&resource, &fusions, &outcomes)?;
    for (m, step) in fusions.iter().zip(steps) {
        let m = m.iter().join("");
        match step {
            Step::Appended { index } =>
                info!(measurement = %m, index, "appended"),
            Step::Pivoted { pivot, corrected } =>
                info!(measurement = %m, pivot, ?corrected, "pivoted"),
        }
    }

    println!("\nAfter fusion measurements:");
    updated.iter().for_each(|g| { println!("  {}", g); });
    Ok(())
}

fn main() {
    init_logging("info");
    if let Err(e) = run() {
        error!("{}", e);
        std::process::exit(1);
    }
}
