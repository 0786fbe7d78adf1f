//! ROC Analysis Example
//!
//! Builds a three-condition experiment, prints per-condition d' and
//! criterion, the sorted ROC points, the AUC, and the JSON plot request a
//! renderer would consume.
//!
//! Run with: RUST_LOG=debug cargo run --example roc_analysis

use sdt_roc::experiment::Experiment;
use sdt_roc::Measurement;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .init();

    println!("=== Signal Detection ROC Analysis ===\n");

    let mut experiment = Experiment::builder().name("Contrast sweep").build();
    experiment.add_condition(Measurement::new(40, 10, 20, 30), Some("Condition A"));
    experiment.add_condition(Measurement::new(60, 20, 10, 40), Some("Condition B"));
    experiment.add_condition(Measurement::new(50, 15, 25, 35), Some("Condition C"));

    // -------------------------------------------------------------------------
    // 1. Per-condition statistics
    // -------------------------------------------------------------------------
    println!("1. Conditions ({}):", experiment.len());
    for summary in experiment.summaries() {
        println!(
            "   {:<12} H={:.3} F={:.3} d'={:.3} c={:.3}",
            summary.label.as_deref().unwrap_or("-"),
            summary.metrics.hit_rate,
            summary.metrics.false_alarm_rate,
            summary.metrics.d_prime,
            summary.metrics.criterion,
        );
    }

    // -------------------------------------------------------------------------
    // 2. Sorted ROC points
    // -------------------------------------------------------------------------
    let (false_alarm_rates, hit_rates) = experiment.sorted_roc_points()?;
    println!("\n2. Sorted ROC points:");
    for (f, h) in false_alarm_rates.iter().zip(&hit_rates) {
        println!("   ({f:.3}, {h:.3})");
    }

    // -------------------------------------------------------------------------
    // 3. AUC
    // -------------------------------------------------------------------------
    let auc = experiment.compute_auc()?;
    println!("\n3. AUC: {auc:.4}");

    // -------------------------------------------------------------------------
    // 4. Plot handoff
    // -------------------------------------------------------------------------
    let request = experiment.plot_request(false)?;
    println!("\n4. Plot request:\n   {}", request.to_json()?);

    Ok(())
}
