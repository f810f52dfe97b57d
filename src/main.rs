use clap::{Parser, Subcommand};
use dotenv::dotenv;
use envgate_rs::envgate::condition;
use envgate_rs::envgate::environment;
use envgate_rs::harness::gate::{EnvConditionGate, GateOutcome, ScenarioHook};
use envgate_rs::harness::ignore::{self, IgnoreReason};
use envgate_rs::harness::loader::FeatureLoader;
use serde::Serialize;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Evaluate a condition payload against the current environment
    Eval {
        /// The condition payload, e.g. "STAGE=prod&&V>1.2.0"
        #[arg(short, long)]
        expr: String,
    },
    /// Gate every scenario in a feature definition file
    Check {
        /// Path to the feature YAML file
        #[arg(short, long)]
        file: String,

        /// Emit the decisions as JSON
        #[arg(long)]
        json: bool,
    },
}

#[derive(Debug, Serialize)]
struct Decision {
    scenario: String,
    #[serde(flatten)]
    outcome: GateOutcome,
    #[serde(skip_serializing_if = "Option::is_none")]
    ignore_reason: Option<IgnoreReason>,
    tags: Vec<String>,
}

fn main() -> anyhow::Result<()> {
    dotenv().ok();
    env_logger::init();

    let args = Args::parse();

    match args.command {
        Commands::Eval { expr } => {
            let result = condition::evaluate_payload(&expr, environment::process_env())?;
            println!("{result}");
        }
        Commands::Check { file, json } => {
            let feature = FeatureLoader::new().load_feature(&file)?;
            log::info!(
                "Checking feature '{}' ({} scenarios)",
                feature.name,
                feature.scenarios.len()
            );

            let gate = EnvConditionGate::new(environment::process_env());
            let mut decisions = Vec::with_capacity(feature.scenarios.len());
            for mut scenario in feature.scenarios {
                let outcome = gate.before_scenario(&mut scenario);
                let ignore_reason = match ignore::classify(&scenario.tags, &scenario.name) {
                    IgnoreReason::NotIgnored => None,
                    reason => Some(reason),
                };
                decisions.push(Decision {
                    scenario: scenario.name,
                    outcome,
                    ignore_reason,
                    tags: scenario.tags,
                });
            }

            if json {
                println!("{}", serde_json::to_string_pretty(&decisions)?);
            } else {
                for decision in &decisions {
                    match &decision.outcome {
                        GateOutcome::Run => println!("RUN   {}", decision.scenario),
                        GateOutcome::Skip { reason } => {
                            println!("SKIP  {} ({reason})", decision.scenario)
                        }
                        GateOutcome::Error { message } => {
                            println!("ERROR {} ({message})", decision.scenario)
                        }
                    }
                }
            }
        }
    }

    Ok(())
}
