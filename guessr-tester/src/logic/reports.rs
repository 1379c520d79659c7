use anyhow::Result;
use chrono::{DateTime, Utc};
use colored::Colorize;
use std::io::Write;
use std::time::Duration;

use super::ScenarioResult;

fn success_rate(results: &[ScenarioResult]) -> f64 {
    let passed = results.iter().filter(|r| r.passed).count();
    if results.is_empty() {
        return 0.0;
    }
    guessr_game::numbers::usize_to_f64(passed) / guessr_game::numbers::usize_to_f64(results.len())
        * 100.0
}

pub fn generate_console_report<W: Write + ?Sized>(
    writer: &mut W,
    results: &[ScenarioResult],
    total_duration: Duration,
) -> Result<()> {
    writeln!(writer)?;
    writeln!(writer, "{}", "📊 Logic Test Results Summary".bright_cyan().bold())?;
    writeln!(writer, "{}", "==============================".cyan())?;

    let total_tests = results.len();
    let passed_tests = results.iter().filter(|r| r.passed).count();
    let failed_tests = total_tests - passed_tests;

    writeln!(writer, "Total runs: {total_tests}")?;
    writeln!(writer, "Passed: {}", passed_tests.to_string().green())?;
    writeln!(writer, "Failed: {}", failed_tests.to_string().red())?;
    writeln!(writer, "Success rate: {:.1}%", success_rate(results))?;
    writeln!(writer, "Total time: {total_duration:?}")?;
    writeln!(writer)?;

    for result in results {
        let status = if result.passed {
            "✅ PASS".green()
        } else {
            "❌ FAIL".red()
        };

        writeln!(
            writer,
            "{} {} (seed {})",
            status,
            result.scenario_name.bold(),
            result.seed
        )?;
        writeln!(
            writer,
            "   Iterations: {}/{} successful",
            result.successful_iterations, result.iterations_run
        )?;
        writeln!(writer, "   Mean attempts: {:.2}", result.mean_attempts)?;
        writeln!(writer, "   Average time: {:?}", result.average_duration)?;

        if !result.failures.is_empty() {
            writeln!(writer, "   Failures:")?;
            for failure in &result.failures {
                writeln!(writer, "     • {}", failure.red())?;
            }
        }
        writeln!(writer)?;
    }

    if let (Some(fastest), Some(slowest)) = (
        results.iter().min_by_key(|r| r.average_duration),
        results.iter().max_by_key(|r| r.average_duration),
    ) {
        writeln!(writer, "{}", "⚡ Performance Summary".bright_yellow().bold())?;
        writeln!(writer, "{}", "=====================".yellow())?;
        writeln!(
            writer,
            "Fastest: {} ({:?})",
            fastest.scenario_name.green(),
            fastest.average_duration
        )?;
        writeln!(
            writer,
            "Slowest: {} ({:?})",
            slowest.scenario_name.yellow(),
            slowest.average_duration
        )?;
    }

    Ok(())
}

pub fn generate_json_report<W: Write + ?Sized>(
    writer: &mut W,
    results: &[ScenarioResult],
) -> Result<()> {
    let json_output = serde_json::to_string_pretty(results)?;
    writeln!(writer, "{json_output}")?;
    Ok(())
}

pub fn generate_markdown_report<W: Write + ?Sized>(
    writer: &mut W,
    results: &[ScenarioResult],
    generated_at: DateTime<Utc>,
) -> Result<()> {
    writeln!(writer, "# Guessr Logic Test Results\n")?;
    writeln!(writer, "_Generated {}_\n", generated_at.format("%Y-%m-%d %H:%M:%S UTC"))?;

    let total_tests = results.len();
    let passed_tests = results.iter().filter(|r| r.passed).count();

    writeln!(writer, "## Summary\n")?;
    writeln!(writer, "- **Total runs**: {total_tests}")?;
    writeln!(writer, "- **Passed**: {passed_tests}")?;
    writeln!(writer, "- **Failed**: {}", total_tests - passed_tests)?;
    writeln!(writer, "- **Success rate**: {:.1}%\n", success_rate(results))?;

    writeln!(writer, "## Detailed Results\n")?;
    writeln!(writer, "| Scenario | Seed | Status | Iterations | Mean attempts |")?;
    writeln!(writer, "|---|---|---|---|---|")?;
    for result in results {
        let status = if result.passed { "✅" } else { "❌" };
        writeln!(
            writer,
            "| {} | {} | {} | {}/{} | {:.2} |",
            result.scenario_name,
            result.seed,
            status,
            result.successful_iterations,
            result.iterations_run,
            result.mean_attempts
        )?;
    }

    let failing: Vec<&ScenarioResult> = results.iter().filter(|r| !r.passed).collect();
    if !failing.is_empty() {
        writeln!(writer, "\n## Failures\n")?;
        for result in failing {
            writeln!(writer, "### {} (seed {})\n", result.scenario_name, result.seed)?;
            for failure in &result.failures {
                writeln!(writer, "- {failure}")?;
            }
            writeln!(writer)?;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample(passed: bool) -> ScenarioResult {
        ScenarioResult {
            scenario_name: "Smoke Test".to_string(),
            seed: 42,
            passed,
            iterations_run: 2,
            successful_iterations: if passed { 2 } else { 1 },
            failures: if passed {
                Vec::new()
            } else {
                vec!["Iteration 2: lost".to_string()]
            },
            mean_attempts: 6.5,
            average_duration: Duration::from_micros(120),
        }
    }

    #[test]
    fn console_report_lists_each_run() {
        let mut out = Vec::new();
        generate_console_report(&mut out, &[sample(true), sample(false)], Duration::ZERO)
            .expect("write report");
        let text = String::from_utf8(out).expect("utf8");
        assert!(text.contains("Success rate: 50.0%"));
        assert!(text.contains("Iteration 2: lost"));
        assert!(text.contains("Performance Summary"));
    }

    #[test]
    fn markdown_report_has_table_and_failures() {
        let mut out = Vec::new();
        generate_markdown_report(&mut out, &[sample(false)], Utc::now()).expect("write report");
        let text = String::from_utf8(out).expect("utf8");
        assert!(text.contains("# Guessr Logic Test Results"));
        assert!(text.contains("| Smoke Test | 42 | ❌ | 1/2 | 6.50 |"));
        assert!(text.contains("## Failures"));
    }

    #[test]
    fn json_report_is_an_array() {
        let mut out = Vec::new();
        generate_json_report(&mut out, &[sample(true)]).expect("write report");
        let value: serde_json::Value = serde_json::from_slice(&out).expect("json");
        assert_eq!(value.as_array().map(Vec::len), Some(1));
        assert_eq!(value[0]["scenario_name"], "Smoke Test");
    }
}
