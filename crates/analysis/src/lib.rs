use std::fmt;

/// Fixed alarm thresholds. The tests derive their expectations from this
/// table, so changes here must be reflected there.
pub mod thresholds {
    pub const TEMP_CRITICAL_C: f64 = 95.0;
    pub const TEMP_WARN_HIGH_C: f64 = 90.0;
    pub const TEMP_WARN_LOW_C: f64 = 65.0;
    pub const TEMP_MILD_HIGH_C: f64 = 85.0;
    pub const TEMP_MILD_LOW_C: f64 = 70.0;

    pub const VIBRATION_CRITICAL_MM_S: f64 = 3.5;
    pub const VIBRATION_WARN_MM_S: f64 = 2.5;
    pub const VIBRATION_MILD_MM_S: f64 = 2.0;

    pub const PRESSURE_CRITICAL_HIGH_PSI: f64 = 75.0;
    pub const PRESSURE_CRITICAL_LOW_PSI: f64 = 45.0;
    pub const PRESSURE_WARN_HIGH_PSI: f64 = 70.0;
    pub const PRESSURE_WARN_LOW_PSI: f64 = 50.0;

    /// Nominal pressure band used for component attribution, tighter than
    /// the warning band.
    pub const PRESSURE_NOMINAL_HIGH_PSI: f64 = 65.0;
    pub const PRESSURE_NOMINAL_LOW_PSI: f64 = 55.0;

    pub const SERVICE_INTERVAL_HOURS: f64 = 2000.0;
    pub const SERVICE_SOON_HOURS: f64 = 500.0;

    pub const BASE_CONFIDENCE: i32 = 80;
    pub const MIN_CONFIDENCE: i32 = 70;
    pub const MAX_CONFIDENCE: i32 = 98;
}

/// One snapshot of machine sensor values. No range is enforced; values
/// outside the operating envelope are exactly what produces findings.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SensorReading {
    pub temperature_c: f64,
    pub vibration_mm_s: f64,
    pub pressure_psi: f64,
    /// Cumulative operating hours since the last service reset.
    pub hours: f64,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Urgency {
    Low,
    Medium,
    High,
}

impl Urgency {
    pub fn as_str(self) -> &'static str {
        match self {
            Urgency::Low => "low",
            Urgency::Medium => "medium",
            Urgency::High => "high",
        }
    }

    fn recommended_action(self) -> &'static str {
        match self {
            Urgency::High => {
                "IMMEDIATE ACTION REQUIRED: Stop machine and inspect affected components."
            }
            Urgency::Medium => "Schedule maintenance within 3 days. Monitor closely.",
            Urgency::Low => "Plan maintenance for next scheduled downtime.",
        }
    }

    fn time_to_failure(self) -> &'static str {
        match self {
            Urgency::High => "12-24 hours",
            Urgency::Medium => "3-5 days",
            Urgency::Low => "1-2 weeks",
        }
    }
}

/// Maintenance recommendation for a single reading. Always fully populated;
/// `affected_components` is empty whenever `maintenance_needed` is false.
#[derive(Clone, Debug, PartialEq)]
pub struct Recommendation {
    pub maintenance_needed: bool,
    pub urgency: Urgency,
    /// Integer confidence score in 70..=98.
    pub confidence: u8,
    pub reasoning: String,
    pub recommended_action: String,
    /// Time band such as "12-24 hours", or "N/A" when no action is needed.
    pub estimated_time_to_failure: String,
    pub affected_components: Vec<String>,
}

/// One anomaly note, carrying the measurement it reports. Rendering lives
/// here so the decision logic stays free of string formatting.
#[derive(Clone, Copy, Debug, PartialEq)]
enum Finding {
    TemperatureCritical(f64),
    TemperatureOutOfRange(f64),
    VibrationCritical(f64),
    VibrationWarning(f64),
    PressureCritical(f64),
    PressureWarning(f64),
    MaintenanceOverdue(f64),
    MaintenanceApproaching(f64),
}

impl fmt::Display for Finding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Finding::TemperatureCritical(v) => write!(f, "Temperature critical ({v}°C)"),
            Finding::TemperatureOutOfRange(v) => write!(f, "Temperature out of range ({v}°C)"),
            Finding::VibrationCritical(v) => write!(f, "Vibration critical ({v} mm/s)"),
            Finding::VibrationWarning(v) => write!(f, "Vibration warning ({v} mm/s)"),
            Finding::PressureCritical(v) => write!(f, "Pressure critical ({v} PSI)"),
            Finding::PressureWarning(v) => write!(f, "Pressure warning ({v} PSI)"),
            Finding::MaintenanceOverdue(v) => write!(f, "Scheduled maintenance overdue (Hours: {v})"),
            Finding::MaintenanceApproaching(v) => {
                write!(f, "Approaching scheduled maintenance ({v}h remaining)")
            }
        }
    }
}

/// Hours left until the 2000 h service interval elapses. Zero exactly at a
/// positive multiple of the interval, so a machine at 2000 h is due rather
/// than credited with a fresh interval.
///
/// `%` on floats truncates toward zero, so negative `hours` yields a
/// negative remainder and a value above the full interval. That matches the
/// reference behavior for negative inputs and is kept as-is.
fn hours_remaining(hours: f64) -> f64 {
    let rem = hours % thresholds::SERVICE_INTERVAL_HOURS;
    if hours > 0.0 && rem == 0.0 {
        0.0
    } else {
        thresholds::SERVICE_INTERVAL_HOURS - rem
    }
}

/// Evaluate one sensor snapshot and produce a maintenance recommendation.
///
/// Total over all `f64` inputs: nonsensical values (negative pressure,
/// negative hours) still yield a well-formed answer. Pure and stateless, so
/// identical readings always produce identical recommendations.
pub fn evaluate(reading: SensorReading) -> Recommendation {
    use thresholds::*;

    let SensorReading {
        temperature_c,
        vibration_mm_s,
        pressure_psi,
        hours,
    } = reading;

    let mut findings: Vec<Finding> = Vec::new();
    let mut critical_count = 0u32;
    let mut warning_count = 0u32;
    let mut confidence = BASE_CONFIDENCE;

    // Each signal contributes at most one finding. Critical and warning
    // tiers count toward the decision; a mild deviation only nudges the
    // confidence score.
    if temperature_c > TEMP_CRITICAL_C {
        findings.push(Finding::TemperatureCritical(temperature_c));
        critical_count += 1;
        confidence += 10;
    } else if temperature_c > TEMP_WARN_HIGH_C || temperature_c < TEMP_WARN_LOW_C {
        findings.push(Finding::TemperatureOutOfRange(temperature_c));
        warning_count += 1;
        confidence += 5;
    } else if temperature_c > TEMP_MILD_HIGH_C || temperature_c < TEMP_MILD_LOW_C {
        confidence += 2;
    }

    if vibration_mm_s > VIBRATION_CRITICAL_MM_S {
        findings.push(Finding::VibrationCritical(vibration_mm_s));
        critical_count += 1;
        confidence += 10;
    } else if vibration_mm_s > VIBRATION_WARN_MM_S {
        findings.push(Finding::VibrationWarning(vibration_mm_s));
        warning_count += 1;
        confidence += 5;
    } else if vibration_mm_s > VIBRATION_MILD_MM_S {
        confidence += 2;
    }

    // Pressure has no mild tier.
    if pressure_psi > PRESSURE_CRITICAL_HIGH_PSI || pressure_psi < PRESSURE_CRITICAL_LOW_PSI {
        findings.push(Finding::PressureCritical(pressure_psi));
        critical_count += 1;
        confidence += 10;
    } else if pressure_psi > PRESSURE_WARN_HIGH_PSI || pressure_psi < PRESSURE_WARN_LOW_PSI {
        findings.push(Finding::PressureWarning(pressure_psi));
        warning_count += 1;
        confidence += 5;
    }

    let remaining = hours_remaining(hours);
    let maintenance_due = remaining <= 0.0;
    let maintenance_soon = remaining < SERVICE_SOON_HOURS;

    if maintenance_due {
        findings.push(Finding::MaintenanceOverdue(hours));
        warning_count += 1;
        confidence += 10;
    } else if maintenance_soon {
        findings.push(Finding::MaintenanceApproaching(remaining));
        confidence += 5;
    }

    let maintenance_needed = critical_count > 0
        || warning_count >= 2
        || maintenance_due
        || (warning_count >= 1 && maintenance_soon);

    let computed_urgency = if critical_count > 0 || (warning_count > 0 && maintenance_soon) {
        Urgency::High
    } else if warning_count >= 2 || maintenance_soon {
        Urgency::Medium
    } else {
        Urgency::Low
    };
    // A computed urgency without an actionable recommendation is discarded.
    let urgency = if maintenance_needed {
        computed_urgency
    } else {
        Urgency::Low
    };

    let confidence = confidence.clamp(MIN_CONFIDENCE, MAX_CONFIDENCE) as u8;

    let reasoning = if findings.is_empty() {
        "All systems operating within normal parameters.".to_string()
    } else {
        let joined = findings
            .iter()
            .map(Finding::to_string)
            .collect::<Vec<_>>()
            .join(". ");
        format!("Detected anomalies: {joined}.")
    };

    let mut affected_components: Vec<String> = Vec::new();
    let (recommended_action, estimated_time_to_failure) = if maintenance_needed {
        // Attribution rules are independent of the finding tiers and of each
        // other; order is fixed.
        if temperature_c > TEMP_MILD_HIGH_C {
            affected_components.push("Cooling System".to_string());
        }
        if vibration_mm_s > VIBRATION_MILD_MM_S {
            affected_components.push("Bearing Assembly".to_string());
            affected_components.push("Motor Mounts".to_string());
        }
        if pressure_psi < PRESSURE_NOMINAL_LOW_PSI || pressure_psi > PRESSURE_NOMINAL_HIGH_PSI {
            affected_components.push("Hydraulic System".to_string());
            affected_components.push("Valves".to_string());
        }
        if maintenance_due || maintenance_soon {
            affected_components.push("General Service Kit".to_string());
        }

        (urgency.recommended_action(), urgency.time_to_failure())
    } else {
        ("Continue monitoring.", "N/A")
    };

    Recommendation {
        maintenance_needed,
        urgency,
        confidence,
        reasoning,
        recommended_action: recommended_action.to_string(),
        estimated_time_to_failure: estimated_time_to_failure.to_string(),
        affected_components,
    }
}
