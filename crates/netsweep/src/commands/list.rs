use colored::Colorize;
use netsweep_cloud::{interface_ids, Reclaimer, TraceObserver};

pub async fn handle(vpc: &str, region: Option<&str>, json: bool) -> anyhow::Result<()> {
    let provider = super::connect(region).await;
    let observer = TraceObserver;
    let reclaimer = Reclaimer::new(&provider).with_observer(&observer);

    let interfaces = reclaimer
        .list_interfaces(vpc)
        .await
        .map_err(|e| anyhow::anyhow!("listing interfaces in {}: {}", vpc, e))?;

    if json {
        println!("{}", serde_json::to_string_pretty(&interfaces)?);
        return Ok(());
    }

    if interfaces.is_empty() {
        println!("{}", format!("No network interfaces in {}", vpc).dimmed());
        return Ok(());
    }

    println!(
        "{}",
        format!("Network interfaces in {} ({}):", vpc, interfaces.len()).bold()
    );
    for id in interface_ids(&interfaces) {
        println!("  • {}", id.cyan());
    }

    Ok(())
}
