use crate::infra::load_reference_table;
use crate::routes::{ClassificationStatus, ClassifyResponse};
use crate::views::ResolutionView;
use chrono::{Local, NaiveDate};
use clap::Args;
use fleet_compliance::config::{AppConfig, TelemetryConfig};
use fleet_compliance::error::AppError;
use fleet_compliance::feed::ViolationFeedImporter;
use fleet_compliance::telemetry::{self, TelemetryError};
use fleet_compliance::violations::report::{DataQReport, RiskAssessment};
use fleet_compliance::violations::{ClassifiedViolation, ComplianceEngine, ComplianceSummary};
use serde::Serialize;
use std::path::PathBuf;

#[derive(Args, Debug)]
pub(crate) struct ClassifyArgs {
    /// Violation feed export (.json or .csv)
    #[arg(long)]
    pub(crate) input: PathBuf,
    /// Evaluation date (YYYY-MM-DD). Defaults to today.
    #[arg(long, value_parser = crate::infra::parse_date)]
    pub(crate) as_of: Option<NaiveDate>,
    /// Include DataQ challenge opportunities
    #[arg(long)]
    pub(crate) dataq: bool,
    /// Minimum DataQ challenge score to list (0-100)
    #[arg(long, value_parser = clap::value_parser!(u8).range(0..=100))]
    pub(crate) min_score: Option<u8>,
    /// Emit JSON instead of the terminal report
    #[arg(long)]
    pub(crate) json: bool,
    /// Reference table CSV replacing the built-in FMCSA code set
    #[arg(long)]
    pub(crate) reference_table: Option<PathBuf>,
}

#[derive(Args, Debug)]
pub(crate) struct ResolveArgs {
    /// One or more violation codes as printed on an inspection report
    #[arg(required = true)]
    pub(crate) codes: Vec<String>,
    /// Emit JSON instead of a table
    #[arg(long)]
    pub(crate) json: bool,
    /// Reference table CSV replacing the built-in FMCSA code set
    #[arg(long)]
    pub(crate) reference_table: Option<PathBuf>,
}

pub(crate) fn run_classify(args: ClassifyArgs) -> Result<(), AppError> {
    let ClassifyArgs {
        input,
        as_of,
        dataq,
        min_score,
        json,
        reference_table,
    } = args;

    let config = AppConfig::load()?;
    init_telemetry(&config.telemetry)?;
    let reference_path = reference_table.or(config.compliance.reference_table);
    let table = load_reference_table(reference_path.as_deref())?;
    let records = ViolationFeedImporter::from_path(&input)?;

    let as_of = as_of.unwrap_or_else(|| Local::now().date_naive());
    let engine = ComplianceEngine::new(&table);
    let summary = engine.classify(Some(&records), as_of);
    let min_score = min_score.unwrap_or(config.compliance.dataq_min_score);

    if json {
        let response = match summary {
            Some(summary) => ClassifyResponse {
                as_of,
                status: ClassificationStatus::Classified,
                risk: Some(summary.risk_assessment()),
                dataq: dataq.then(|| summary.dataq_opportunities(min_score)),
                summary: Some(summary),
            },
            None => ClassifyResponse {
                as_of,
                status: ClassificationStatus::NoData,
                summary: None,
                risk: None,
                dataq: None,
            },
        };
        return print_json(&response);
    }

    println!("Violation compliance report");
    println!(
        "Source: {} ({} records) | evaluated {}",
        input.display(),
        records.len(),
        as_of
    );
    match &reference_path {
        Some(path) => println!("Reference table: {} ({} codes)", path.display(), table.len()),
        None => println!("Reference table: built-in FMCSA set ({} codes)", table.len()),
    }

    let Some(summary) = summary else {
        println!("\nNo violation data available.");
        return Ok(());
    };

    render_summary(&summary);
    render_risk(&summary.risk_assessment());
    if dataq {
        render_dataq(&summary.dataq_opportunities(min_score));
    }

    Ok(())
}

pub(crate) fn run_resolve(args: ResolveArgs) -> Result<(), AppError> {
    let ResolveArgs {
        codes,
        json,
        reference_table,
    } = args;

    let table = load_reference_table(reference_table.as_deref())?;
    let engine = ComplianceEngine::new(&table);
    let views: Vec<ResolutionView> = codes
        .iter()
        .map(|code| ResolutionView::new(code, &engine.resolve(code)))
        .collect();

    if json {
        return print_json(&views);
    }

    for view in &views {
        let matched = match (&view.matched_code, &view.sub_code) {
            (Some(code), Some(sub)) => format!("{code} (sub-code {sub})"),
            (Some(code), None) => code.clone(),
            (None, _) => "-".to_string(),
        };
        println!(
            "{} -> {} | {} | {} | severity {} | {}{}{}",
            view.code,
            view.normalized_code,
            view.tier_label,
            view.basic_label,
            view.severity,
            matched,
            if view.oos_eligible { " | OOS eligible" } else { "" },
            if view.is_moving { " | moving" } else { "" },
        );
        if let Some(description) = &view.description {
            println!("    {description}");
        }
    }

    Ok(())
}

/// A subscriber installed earlier in the process keeps receiving events.
fn init_telemetry(config: &TelemetryConfig) -> Result<(), AppError> {
    match telemetry::init(config) {
        Ok(()) | Err(TelemetryError::Subscriber(_)) => Ok(()),
        Err(err) => Err(err.into()),
    }
}

fn print_json<T: Serialize>(value: &T) -> Result<(), AppError> {
    let rendered = serde_json::to_string_pretty(value).map_err(std::io::Error::from)?;
    println!("{rendered}");
    Ok(())
}

fn render_summary(summary: &ComplianceSummary) {
    println!(
        "\nRetained violations: {} ({} moving, {} non-moving, {} out-of-service)",
        summary.total, summary.moving_count, summary.non_moving_count, summary.oos_count
    );
    println!(
        "Aged off (24+ months): {} | Unrecognized codes: {}",
        summary.expired_count, summary.unknown_count
    );

    if summary.moving_violations.is_empty() {
        println!("\nMoving violations: none");
    } else {
        println!("\nMoving violations");
        for violation in &summary.moving_violations {
            println!("- {}", describe_violation(violation));
        }
    }

    for (basic, violations) in &summary.by_basic {
        println!("\n{} ({})", basic.label(), violations.len());
        for violation in violations {
            println!("- {}", describe_violation(violation));
        }
    }
}

fn describe_violation(violation: &ClassifiedViolation) -> String {
    let description = violation
        .reference_description
        .as_deref()
        .unwrap_or(violation.record.description.as_str());
    let mut line = format!(
        "{} {} [severity {}]",
        violation.normalized_code, description, violation.severity_weight
    );

    if violation.unknown {
        line.push_str(" (best guess)");
    }
    if violation.record.oos {
        line.push_str(" OOS");
    }
    match (
        violation.record.inspection_date,
        violation.decay_label,
        &violation.drop_off_label,
    ) {
        (Some(date), Some(decay), Some(drop_off)) => {
            line.push_str(&format!(", {date}, {decay}, drops off {drop_off}"));
        }
        _ => line.push_str(", inspection date unknown"),
    }

    line
}

fn render_risk(risk: &RiskAssessment) {
    println!("\nEstimated BASIC percentiles");
    for score in &risk.basics {
        println!(
            "- {}: {} pts, ~{}th percentile (alert {}, critical {}) -> {}",
            score.basic_label,
            score.raw_points,
            score.estimated_percentile,
            score.threshold,
            score.critical_threshold,
            score.status_label
        );
    }
    println!(
        "Overall risk: {} ({} alert, {} critical)",
        risk.level_label, risk.alert_count, risk.critical_count
    );
    if let Some(basic) = risk.worst_basic {
        println!("Highest exposure: {}", basic.label());
    }
}

fn render_dataq(report: &DataQReport) {
    if report.opportunities.is_empty() {
        println!(
            "\nDataQ opportunities (score >= {}): none of {} evaluated",
            report.min_score, report.evaluated
        );
        return;
    }

    println!(
        "\nDataQ opportunities (score >= {}): {} high, {} medium, {} low \
         | est. {} points recoverable",
        report.min_score,
        report.high_count,
        report.medium_count,
        report.low_count,
        report.total_estimated_point_reduction
    );
    for opportunity in &report.opportunities {
        println!(
            "- {} {} | score {} ({}) | {} | est. -{} pts",
            opportunity.normalized_code,
            opportunity.description,
            opportunity.score,
            opportunity.category_label,
            opportunity.challenge_description,
            opportunity.estimated_point_reduction
        );
        for factor in &opportunity.factors {
            println!("    + {factor}");
        }
        for deduction in &opportunity.deductions {
            println!("    - {deduction}");
        }
        let required: Vec<&str> = opportunity
            .evidence_checklist
            .iter()
            .filter(|item| item.required)
            .map(|item| item.item)
            .collect();
        if !required.is_empty() {
            println!("    Evidence required: {}", required.join(", "));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use fleet_compliance::violations::RawViolationRecord;

    #[test]
    fn describe_violation_marks_best_guess_and_decay() {
        let engine = ComplianceEngine::builtin();
        let as_of = NaiveDate::from_ymd_opt(2026, 6, 15).expect("valid date");

        let known = engine.classify_record(
            &RawViolationRecord::new("392.2S", "")
                .inspected_on(NaiveDate::from_ymd_opt(2026, 3, 1).expect("valid date")),
            as_of,
        );
        let line = describe_violation(&known);
        assert!(line.starts_with("392.2S Speeding [severity 5]"));
        assert!(line.contains("full weight"));
        assert!(line.contains("drops off March 2028"));

        let unknown =
            engine.classify_record(&RawViolationRecord::new("ZZ-1", "Local ordinance"), as_of);
        let line = describe_violation(&unknown);
        assert!(line.contains("Local ordinance"));
        assert!(line.contains("(best guess)"));
        assert!(line.ends_with("inspection date unknown"));
    }

    #[test]
    fn classify_logging_tolerates_installed_subscriber() {
        let config = TelemetryConfig {
            log_level: "info".to_string(),
        };
        init_telemetry(&config).expect("first init");
        init_telemetry(&config).expect("second init keeps the existing subscriber");

        if std::env::var_os("RUST_LOG").is_some() {
            return;
        }
        let config = TelemetryConfig {
            log_level: "fleet_compliance=notalevel".to_string(),
        };
        assert!(matches!(
            init_telemetry(&config),
            Err(AppError::Telemetry(TelemetryError::EnvFilter { .. }))
        ));
    }
}
