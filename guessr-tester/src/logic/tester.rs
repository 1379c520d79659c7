use colored::Colorize;
use serde::{Deserialize, Serialize};
use std::time::{Duration, Instant};

use crate::common::scenario::TestScenario;
use crate::logic::game_tester::{GameTester, SimulationPlan, SimulationSummary};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScenarioResult {
    pub scenario_name: String,
    pub seed: u64,
    pub passed: bool,
    pub iterations_run: usize,
    pub successful_iterations: usize,
    pub failures: Vec<String>,
    pub mean_attempts: f64,
    #[serde(with = "duration_serde")]
    pub average_duration: Duration,
}

pub struct LogicTester {
    tester: GameTester,
}

impl LogicTester {
    pub const fn new(tester: GameTester) -> Self {
        Self { tester }
    }

    pub fn run_scenario(
        &self,
        scenario: &TestScenario,
        seeds: &[u64],
        iterations: usize,
    ) -> Vec<ScenarioResult> {
        let mut results = Vec::new();

        for &seed in seeds {
            if self.tester.verbose() {
                println!(
                    "🧪 Testing scenario: {} (strategy: {} seed: {})",
                    scenario.name.bright_white(),
                    scenario.plan.strategy,
                    seed
                );
            }

            results.push(self.run_single_scenario(scenario, seed, iterations));
        }

        results
    }

    fn run_single_scenario(
        &self,
        scenario: &TestScenario,
        seed: u64,
        iterations: usize,
    ) -> ScenarioResult {
        let mut successes = 0;
        let mut failures = Vec::new();
        let mut durations = Vec::new();
        let mut attempts = Vec::new();

        for i in 0..iterations {
            let start_time = Instant::now();
            let iteration_seed = seed.wrapping_add(u64::try_from(i).unwrap_or(u64::MAX));
            let summary = self.tester.run_plan(&scenario.plan, iteration_seed);

            if let Some(err) = evaluate_expectations(&scenario.plan, &summary) {
                failures.push(format!(
                    "Iteration {} (strategy {}, seed {}, secret {}, status {}, attempts {}): \
                     {} | guesses {}",
                    i + 1,
                    summary.strategy,
                    summary.seed,
                    summary.secret,
                    summary.status_label(),
                    summary.final_attempts,
                    err,
                    summarize_guesses(&summary)
                ));

                if self.tester.verbose() {
                    println!(
                        "  ❌ Iteration {}/{} failed: {}",
                        i + 1,
                        iterations,
                        err.red()
                    );
                }
            } else {
                successes += 1;
                let duration = start_time.elapsed();
                durations.push(duration);
                attempts.push(summary.final_attempts);

                if self.tester.verbose() {
                    println!(
                        "  ✅ Iteration {}/{} passed ({duration:?}) attempts:{}",
                        i + 1,
                        iterations,
                        summary.final_attempts
                    );
                }
            }
        }

        let average_duration = if durations.is_empty() {
            Duration::ZERO
        } else {
            durations.iter().sum::<Duration>() / u32::try_from(durations.len()).unwrap_or(1)
        };

        ScenarioResult {
            scenario_name: scenario.name.clone(),
            seed,
            passed: failures.is_empty(),
            iterations_run: iterations,
            successful_iterations: successes,
            failures,
            mean_attempts: guessr_game::numbers::mean_u32(&attempts),
            average_duration,
        }
    }
}

fn evaluate_expectations(plan: &SimulationPlan, summary: &SimulationSummary) -> Option<String> {
    plan.expectations
        .iter()
        .find_map(|expectation| expectation.evaluate(summary).err())
        .map(|err| format!("{err:#}"))
}

/// Last few guesses, newest first.
fn summarize_guesses(summary: &SimulationSummary) -> String {
    if summary.turns.is_empty() {
        return "no guesses recorded".to_string();
    }
    summary
        .turns
        .iter()
        .rev()
        .take(3)
        .map(|turn| format!("{} -> {:?}", turn.guess, turn.outcome))
        .collect::<Vec<_>>()
        .join(" | ")
}

mod duration_serde {
    use serde::{Deserialize, Deserializer, Serialize, Serializer};
    use std::time::Duration;

    pub fn serialize<S>(duration: &Duration, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        duration.as_micros().serialize(serializer)
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Duration, D::Error>
    where
        D: Deserializer<'de>,
    {
        let micros = u128::deserialize(deserializer)?;
        Ok(Duration::from_micros(u64::try_from(micros).unwrap_or(0)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::logic::GuessStrategy;

    #[test]
    fn passing_scenario_counts_every_iteration() {
        let scenario = TestScenario::new("Bisect", SimulationPlan::new(GuessStrategy::Bisect));
        let tester = LogicTester::new(GameTester::new(false));
        let results = tester.run_scenario(&scenario, &[1, 2], 3);
        assert_eq!(results.len(), 2);
        for result in results {
            assert!(result.passed);
            assert_eq!(result.successful_iterations, 3);
            assert!(result.mean_attempts >= 1.0);
        }
    }

    #[test]
    fn failing_expectation_is_reported() {
        let plan = SimulationPlan::new(GuessStrategy::Linear).with_expectation(
            |_: &SimulationSummary| -> anyhow::Result<()> { anyhow::bail!("always fails") },
        );
        let scenario = TestScenario::new("Broken", plan);
        let tester = LogicTester::new(GameTester::new(false));
        let result = &tester.run_scenario(&scenario, &[5], 2)[0];
        assert!(!result.passed);
        assert_eq!(result.failures.len(), 2);
        assert!(result.failures[0].contains("always fails"));
    }

    #[test]
    fn result_serializes_duration_as_number() {
        let result = ScenarioResult {
            scenario_name: "Smoke".to_string(),
            seed: 1,
            passed: true,
            iterations_run: 1,
            successful_iterations: 1,
            failures: Vec::new(),
            mean_attempts: 6.0,
            average_duration: Duration::from_micros(250),
        };
        let json = serde_json::to_value(&result).expect("serialize");
        assert_eq!(json["average_duration"], 250);
        let back: ScenarioResult = serde_json::from_value(json).expect("deserialize");
        assert_eq!(back.average_duration, Duration::from_micros(250));
    }
}
