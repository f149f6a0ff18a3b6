//! MetaTags CLI - Bridge interface for the host renderer
//!
//! Commands: render, hooks, check-rules
//! Outputs JSON to stdout, logs to stderr
//! Returns non-zero on rule failures

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use metatags_core::{
    hooks::KNOWN_HOOKS,
    FilterRegistry, HeadRenderer, Presentation, RuleSet,
};

#[derive(Parser)]
#[command(name = "metatags-cli")]
#[command(about = "MetaTags CLI - Social Sharing Head Renderer")]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Path to filter rules directory
    #[arg(short, long, default_value = "rules")]
    rules_dir: PathBuf,
}

#[derive(Subcommand)]
enum Commands {
    /// Render the head tags for a presentation
    Render {
        /// JSON payload (Presentation)
        #[arg(short, long)]
        presentation: String,

        /// Only install these rule ids (default: all)
        #[arg(long = "rule")]
        rules: Vec<String>,
    },

    /// List hook names and installed rules
    Hooks,

    /// Validate every rule file
    CheckRules,
}

fn print_json(value: &serde_json::Value) {
    match serde_json::to_string_pretty(value) {
        Ok(s) => println!("{}", s),
        Err(e) => eprintln!("failed to serialize output: {}", e),
    }
}

fn main() -> ExitCode {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "metatags_core=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    // Load rules
    let rule_set = match RuleSet::load_from_dir(&cli.rules_dir) {
        Ok(r) => r,
        Err(e) => {
            print_json(&serde_json::json!({ "error": format!("Failed to load rules: {}", e) }));
            return ExitCode::FAILURE;
        }
    };

    match cli.command {
        Commands::Render { presentation, rules } => {
            let presentation: Presentation = match serde_json::from_str(&presentation) {
                Ok(p) => p,
                Err(e) => {
                    print_json(&serde_json::json!({
                        "success": false,
                        "error": format!("Invalid presentation: {}", e),
                    }));
                    return ExitCode::FAILURE;
                }
            };

            let selected = if rules.is_empty() {
                Ok(rule_set)
            } else {
                rule_set.select(&rules)
            };
            let selected = match selected {
                Ok(s) => s,
                Err(e) => {
                    print_json(&serde_json::json!({ "success": false, "error": e.to_string() }));
                    return ExitCode::from(2);
                }
            };

            let mut filters = FilterRegistry::new();
            selected.install(&mut filters);
            let renderer = HeadRenderer::new(filters);

            match renderer.render_report(&presentation) {
                Ok(report) => {
                    print_json(&serde_json::json!({ "success": true, "report": report }));
                    ExitCode::SUCCESS
                }
                Err(e) => {
                    print_json(&serde_json::json!({ "success": false, "error": e.to_string() }));
                    ExitCode::FAILURE
                }
            }
        }

        Commands::Hooks => {
            let rules: Vec<_> = rule_set
                .list()
                .iter()
                .map(|r| serde_json::json!({
                    "id": r.id,
                    "hook": r.hook,
                    "engineMinVersion": r.engine_min_version,
                }))
                .collect();

            print_json(&serde_json::json!({
                "hooks": KNOWN_HOOKS,
                "rules": rules,
            }));
            ExitCode::SUCCESS
        }

        Commands::CheckRules => {
            let checked = match RuleSet::check_dir(&cli.rules_dir) {
                Ok(c) => c,
                Err(e) => {
                    print_json(&serde_json::json!({ "valid": false, "error": e.to_string() }));
                    return ExitCode::FAILURE;
                }
            };

            let valid = checked.iter().all(|(_, r)| r.is_ok());
            let files: Vec<_> = checked
                .iter()
                .map(|(path, result)| match result {
                    Ok(rule) => serde_json::json!({
                        "file": path.display().to_string(),
                        "valid": true,
                        "id": rule.id,
                    }),
                    Err(e) => serde_json::json!({
                        "file": path.display().to_string(),
                        "valid": false,
                        "error": e.to_string(),
                    }),
                })
                .collect();

            print_json(&serde_json::json!({ "valid": valid, "files": files }));
            if valid {
                ExitCode::SUCCESS
            } else {
                ExitCode::from(2)  // Rule validation failure
            }
        }
    }
}
