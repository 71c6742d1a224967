use clap::{Parser, Subcommand};

mod commands;

#[derive(Parser)]
#[command(
    name = "netsweep",
    about = "Reclaim VPC network interfaces and the public addresses bound to them",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List the network interfaces in a VPC without touching them
    List {
        /// VPC to inventory
        #[arg(long, env = "NETSWEEP_VPC")]
        vpc: String,
        /// AWS region override
        #[arg(long)]
        region: Option<String>,
        /// Print the inventory as JSON
        #[arg(long)]
        json: bool,
    },
    /// Release addresses, then detach and delete every interface in a VPC
    Sweep {
        /// VPC to sweep
        #[arg(long, env = "NETSWEEP_VPC")]
        vpc: String,
        /// AWS region override
        #[arg(long)]
        region: Option<String>,
        /// Poll until each interface is detached before deleting it
        #[arg(long)]
        wait_detach: bool,
        /// Skip the confirmation prompt
        #[arg(short, long)]
        yes: bool,
    },
    /// Print version information
    Version,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    match cli.command {
        Commands::List { vpc, region, json } => {
            commands::list::handle(&vpc, region.as_deref(), json).await
        }
        Commands::Sweep {
            vpc,
            region,
            wait_detach,
            yes,
        } => commands::sweep::handle(&vpc, region.as_deref(), wait_detach, yes).await,
        Commands::Version => {
            println!("netsweep {}", env!("CARGO_PKG_VERSION"));
            Ok(())
        }
    }
}
