use anyhow::Result;
use chrono::NaiveDate;
use farmsecure::models::profile::ActivitySummary;
use farmsecure::models::{LivestockType, RiskActivity};
use farmsecure::registry;
use farmsecure::{FarmData, assess};
use log::info;

fn main() -> Result<()> {
    // Setup logging
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    // Run a sample assessment over a mid-size pig operation
    let farm = FarmData {
        farm_name: "Smith Family Farm".to_string(),
        livestock_type: LivestockType::Pigs,
        animal_count: "1500".to_string(),
        previous_diseases: "occasional respiratory issues".to_string(),
        vaccination_program: "standard".to_string(),
        biosecurity_measures: "basic disinfection at entry points".to_string(),
        visitor_protocol: "moderate".to_string(),
        feed_source: "certified".to_string(),
        ..FarmData::default()
    };

    info!("Assessing farm: {}", farm.farm_name);
    let assessment = assess(&farm);

    println!(
        "Overall score: {}/100 ({} risk)",
        assessment.overall_score, assessment.risk_level
    );
    for category in &assessment.categories {
        println!("  {}: {}/100", category.category, category.score);
    }
    println!("\nPriority actions:");
    for (i, action) in assessment.priority_actions.iter().enumerate() {
        println!("  {}. {action}", i + 1);
    }
    println!("\n{}", serde_json::to_string_pretty(&assessment)?);

    // Seed the registries and print the dashboard numbers
    let animals = registry::sample_animals()?;
    let alerts = registry::sample_alerts()?;
    let compliance = registry::sample_compliance_log()?;
    let training = registry::sample_training_catalog();

    let animal_stats = animals.stats();
    info!(
        "Animal registry: {} animals ({} pigs, {} poultry, {} healthy)",
        animal_stats.total, animal_stats.pigs, animal_stats.poultry, animal_stats.healthy
    );

    let alert_stats = alerts.stats();
    info!(
        "Alert board: {} active, {} critical, {} cases across {} farms",
        alert_stats.active, alert_stats.critical, alert_stats.total_cases,
        alert_stats.farms_affected
    );

    let compliance_stats = compliance.stats();
    info!(
        "Compliance: {} completed, {} pending, {} overdue ({:.0}% rate)",
        compliance_stats.completed,
        compliance_stats.pending,
        compliance_stats.overdue,
        compliance_stats.compliance_rate
    );

    let as_of: NaiveDate = "2024-12-10".parse()?;
    let summary = ActivitySummary::collect(
        Some(RiskActivity {
            completed_on: as_of,
            score: assessment.overall_score,
            level: assessment.risk_level,
        }),
        &training,
        &compliance,
        &alerts,
        as_of,
    );
    println!("\n{}", serde_json::to_string_pretty(&summary)?);

    Ok(())
}
