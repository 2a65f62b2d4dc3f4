use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "funnelkpi", about = "Sales funnel KPIs and performance alerts")]
pub struct Cli {
    /// JSON funnel dataset (overrides FUNNELKPI_DATA)
    #[arg(long, global = true)]
    pub data: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// List funnel names in display order
    Funnels,
    /// Show metrics, KPIs and statuses for one funnel
    Kpis {
        /// Funnel name
        funnel: String,
    },
    /// Compare headline KPIs across all funnels
    Compare,
    /// Show the cost breakdown of one funnel
    Costs {
        /// Funnel name
        funnel: String,
    },
    /// Evaluate alert rules across all funnels
    Alerts,
    /// Full dashboard snapshot
    Dashboard {
        /// Selected funnel (defaults to the first one)
        #[arg(long)]
        funnel: Option<String>,
    },
    /// Export the loaded dataset as JSON
    Export,
}
