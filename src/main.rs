use clap::Parser;
use funnelkpi::cli::commands::{Cli, Commands};
use funnelkpi::FunnelKpi;
use serde::Serialize;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "funnelkpi=warn".into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let fk = match FunnelKpi::new(cli.data.as_deref()) {
        Ok(fk) => fk,
        Err(e) => {
            eprintln!("Error loading funnels: {e}");
            std::process::exit(1);
        }
    };

    if let Err(e) = run_command(&fk, cli.command) {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

fn run_command(fk: &FunnelKpi, cmd: Commands) -> Result<(), Box<dyn std::error::Error>> {
    match cmd {
        Commands::Funnels => print_json(&fk.funnels())?,
        Commands::Kpis { funnel } => print_json(&fk.report(&funnel)?)?,
        Commands::Compare => print_json(&fk.compare())?,
        Commands::Costs { funnel } => print_json(&fk.costs(&funnel)?)?,
        Commands::Alerts => print_json(&fk.scan_alerts()?)?,
        Commands::Dashboard { funnel } => print_json(&fk.dashboard(funnel.as_deref())?)?,
        Commands::Export => println!("{}", fk.export()?),
    }
    Ok(())
}

fn print_json<T: Serialize>(value: &T) -> Result<(), serde_json::Error> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
