use colored::Colorize;

use crate::domain::{AppError, BuildEvent, BuildReport, StepOutcome};

pub(super) const SUCCESS_TEXT: &str = "Setup package was created.";
pub(super) const FAILURE_TEXT: &str = "Error!";

pub(super) fn render_event(event: BuildEvent) {
    match event {
        BuildEvent::StepStarted(step) => println!("▶ {}...", step),
        BuildEvent::StepFinished(record) => match record.outcome {
            StepOutcome::Succeeded => println!("✅ {}", record.step),
            StepOutcome::Skipped => println!("⏭️  {} (skipped)", record.step),
            StepOutcome::Tolerated { reason } => {
                println!("⚠️  {} failed, continuing: {}", record.step, reason)
            }
        },
    }
}

/// Print the green success line or the red error line.
pub(super) fn render_result(result: &Result<BuildReport, AppError>) {
    match result {
        Ok(report) => {
            let warnings = report.warnings();
            if !warnings.is_empty() {
                println!("⚠️  Completed with warnings:");
                for (step, reason) in warnings {
                    println!("  • {}: {}", step, reason);
                }
            }
            println!("{}", SUCCESS_TEXT.green());
        }
        Err(err) => {
            println!("{}", FAILURE_TEXT.red());
            eprintln!("Error: {}", err);
        }
    }
}
