pub mod catalog;

use crate::logic::{GuessStrategy, SimulationPlan};

/// A named plan plus the checks run against every game it plays.
#[derive(Debug, Clone)]
pub struct TestScenario {
    pub name: String,
    pub plan: SimulationPlan,
}

impl TestScenario {
    #[must_use]
    pub fn new(name: impl Into<String>, plan: SimulationPlan) -> Self {
        Self {
            name: name.into(),
            plan,
        }
    }
}

fn bisect_scenario(
    name: &str,
    expectation: fn(&crate::logic::SimulationSummary) -> anyhow::Result<()>,
) -> TestScenario {
    TestScenario::new(
        name,
        SimulationPlan::new(GuessStrategy::Bisect).with_expectation(expectation),
    )
}

fn policy_scenario(name: &str, strategy: GuessStrategy) -> TestScenario {
    TestScenario::new(
        name,
        SimulationPlan::new(strategy).with_expectation(catalog::policy_expectation),
    )
}

pub fn get_scenario(name: &str) -> Option<TestScenario> {
    match name.to_lowercase().as_str() {
        "smoke" => Some(bisect_scenario("Smoke Test", catalog::smoke_expectation)),
        "tier-ladder" | "ladder" => Some(bisect_scenario(
            "Tier Ladder Sweep",
            catalog::tier_ladder_expectation,
        )),
        "invalid-input" | "invalid" => Some(bisect_scenario(
            "Invalid Input Leaves Stats",
            catalog::invalid_input_expectation,
        )),
        "restart-spread" | "restart" => Some(bisect_scenario(
            "Restart Secret Spread",
            catalog::restart_spread_expectation,
        )),
        "won-guard" => Some(bisect_scenario(
            "Won Session Guard",
            catalog::won_guard_expectation,
        )),
        "policy-linear" | "linear" => Some(policy_scenario(
            "Linear Policy Playthrough",
            GuessStrategy::Linear,
        )),
        "policy-random" | "random" => Some(policy_scenario(
            "Random Policy Playthrough",
            GuessStrategy::Random,
        )),
        "policy-tiered" | "tiered" => Some(policy_scenario(
            "Tiered Policy Playthrough",
            GuessStrategy::Tiered,
        )),
        _ => None,
    }
}

pub fn list_scenarios() -> Vec<(&'static str, &'static str)> {
    vec![
        ("smoke", "Smoke Test"),
        ("tier-ladder", "Tier Ladder Sweep"),
        ("invalid-input", "Invalid Input Leaves Stats"),
        ("restart-spread", "Restart Secret Spread"),
        ("won-guard", "Won Session Guard"),
        ("policy-linear", "Linear Policy Playthrough"),
        ("policy-random", "Random Policy Playthrough"),
        ("policy-tiered", "Tiered Policy Playthrough"),
    ]
}
