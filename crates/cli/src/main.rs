use analysis::{evaluate, Recommendation, SensorReading};
use anyhow::Result;
use clap::Parser;

#[derive(Parser, Debug)]
#[command(
    name = "machine-health-advisor",
    version,
    about = "Maintenance recommendation from a single machine sensor snapshot"
)]
struct Args {
    /// Machine temperature (°C)
    #[arg(long, default_value_t = 75.0)]
    temperature: f64,

    /// Vibration magnitude (mm/s)
    #[arg(long, default_value_t = 1.0)]
    vibration: f64,

    /// Hydraulic pressure (PSI)
    #[arg(long, default_value_t = 60.0)]
    pressure: f64,

    /// Operating hours since last service
    #[arg(long, default_value_t = 1800.0)]
    hours: f64,

    /// Emit the report as a single JSON object instead of plain text
    #[arg(long)]
    json: bool,
}

#[derive(serde::Serialize)]
struct Report<'a> {
    maintenance_needed: bool,
    urgency: &'a str,
    confidence: u8,
    reasoning: &'a str,
    recommended_action: &'a str,
    estimated_time_to_failure: &'a str,
    affected_components: &'a [String],
}

impl<'a> Report<'a> {
    fn new(rec: &'a Recommendation) -> Self {
        Self {
            maintenance_needed: rec.maintenance_needed,
            urgency: rec.urgency.as_str(),
            confidence: rec.confidence,
            reasoning: &rec.reasoning,
            recommended_action: &rec.recommended_action,
            estimated_time_to_failure: &rec.estimated_time_to_failure,
            affected_components: &rec.affected_components,
        }
    }
}

fn main() -> Result<()> {
    let args = Args::parse();

    let reading = SensorReading {
        temperature_c: args.temperature,
        vibration_mm_s: args.vibration,
        pressure_psi: args.pressure,
        hours: args.hours,
    };

    let rec = evaluate(reading);

    if args.json {
        println!("{}", serde_json::to_string(&Report::new(&rec))?);
    } else {
        render(&rec);
    }

    Ok(())
}

fn render(rec: &Recommendation) {
    let headline = if rec.maintenance_needed {
        "Maintenance Required"
    } else {
        "System Healthy"
    };
    println!(
        "{headline} ({} urgency, {}% confidence)",
        rec.urgency.as_str(),
        rec.confidence
    );
    println!("Analysis: {}", rec.reasoning);
    println!("Recommended action: {}", rec.recommended_action);
    println!("Est. time to failure: {}", rec.estimated_time_to_failure);
    if !rec.affected_components.is_empty() {
        println!("Affected components: {}", rec.affected_components.join(", "));
    }
}
