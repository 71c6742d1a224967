use std::io::{self, Write};

use colored::Colorize;
use netsweep_cloud::{DetachWait, Reclaimer, TraceObserver};

pub async fn handle(
    vpc: &str,
    region: Option<&str>,
    wait_detach: bool,
    yes: bool,
) -> anyhow::Result<()> {
    if !yes && !confirm(vpc)? {
        println!("{}", "Aborted".yellow());
        return Ok(());
    }

    println!(
        "{}",
        format!("Sweeping network interfaces in {}...", vpc).yellow()
    );

    let provider = super::connect(region).await;
    let observer = TraceObserver;
    let mut reclaimer = Reclaimer::new(&provider).with_observer(&observer);
    if wait_detach {
        reclaimer = reclaimer.with_detach_wait(DetachWait::default());
    }

    match reclaimer.reclaim(vpc).await {
        Ok(count) => {
            println!(
                "{}",
                format!("✓ {} interface(s) reclaimed", count).green().bold()
            );
            Ok(())
        }
        Err(failures) => {
            eprintln!(
                "{}",
                format!("⚠ {} step(s) failed:", failures.len()).red().bold()
            );
            for failure in failures.failures() {
                eprintln!("  • {}", failure);
            }
            anyhow::bail!("sweep of {} left resources behind", vpc)
        }
    }
}

fn confirm(vpc: &str) -> anyhow::Result<bool> {
    print!(
        "Release addresses, detach and delete every interface in {}? [y/N] ",
        vpc
    );
    io::stdout().flush()?;

    let mut answer = String::new();
    io::stdin().read_line(&mut answer)?;
    Ok(matches!(answer.trim(), "y" | "Y" | "yes"))
}
