use clap::{Args, ValueEnum};
use serde::Deserialize;

use super::error::DemoError;
use super::showcase::{Script, ScriptBuilder};

// ═══════════════════════════════════════════════════════════════
//  Config file (TOML)
// ═══════════════════════════════════════════════════════════════

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Scenario {
    /// Fresh builder, then a seeded builder overriding the id.
    Builder,
    /// Chained `with_*` / bulk `with` copies (P1..P7).
    With,
    /// Mutable data class: setters, all-args constructor, builder.
    Data,
    #[default]
    All,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// `Label: value` lines.
    #[default]
    Text,
    /// One JSON object per line.
    Json,
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    pub scenario: Option<Scenario>,
    pub format: Option<OutputFormat>,
    #[serde(default)]
    pub seed: SeedConfig,
    #[serde(default)]
    pub scenarios: ScenariosConfig,
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SeedConfig {
    pub id: Option<u32>,
    pub name: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ScenariosConfig {
    #[serde(default)]
    pub builder: BuilderScenarioConfig,
    #[serde(default)]
    pub with: WithScenarioConfig,
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct BuilderScenarioConfig {
    pub new_id: Option<u32>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct WithScenarioConfig {
    pub renamed: Option<String>,
    pub bumped_id: Option<u32>,
    pub bulk_id: Option<u32>,
    pub bulk_name: Option<String>,
    pub staged_id: Option<u32>,
    pub staged_name: Option<String>,
    pub conditional_suffix: Option<String>,
    pub final_id: Option<u32>,
}

pub fn parse_config(content: &str) -> Result<Config, DemoError> {
    toml::from_str(content).map_err(|e| DemoError::Config(e.to_string()))
}

pub fn load_config(path: &str) -> Result<Config, DemoError> {
    let content = std::fs::read_to_string(path)
        .map_err(|e| DemoError::Config(format!("cannot read config {path}: {e}")))?;
    parse_config(&content).map_err(|e| e.with_context(format!("bad config {path}")))
}

// ═══════════════════════════════════════════════════════════════
//  CLI args
// ═══════════════════════════════════════════════════════════════

#[derive(Args, Clone, Debug)]
pub struct DemoArgs {
    /// Path to demo.toml
    #[arg(long, default_value = "demo.toml", env = "RECORDKIT_DEMO_CONFIG")]
    pub config: String,

    /// Which scenario to run
    #[arg(long, value_enum)]
    pub scenario: Option<Scenario>,

    /// Output format
    #[arg(long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Seed person id
    #[arg(long)]
    pub id: Option<u32>,

    /// Seed person name
    #[arg(long)]
    pub name: Option<String>,
}

// ═══════════════════════════════════════════════════════════════
//  Effective — merged config
// ═══════════════════════════════════════════════════════════════

/// Final configuration after merging: demo.toml < env/CLI.
/// Anything still unset falls back to the `Script` defaults.
#[derive(Debug)]
pub struct Effective {
    pub scenario: Scenario,
    pub format: OutputFormat,
    pub script: Script,
}

impl Effective {
    pub fn new(args: &DemoArgs) -> Result<Self, DemoError> {
        let cfg = match load_config(&args.config) {
            Ok(c) => c,
            Err(e) => {
                if std::path::Path::new(&args.config).exists() {
                    return Err(e);
                }
                tracing::debug!(config = %args.config, "config file not found, using defaults");
                Config::default()
            }
        };

        Self::merge(args, cfg)
    }

    pub fn merge(args: &DemoArgs, cfg: Config) -> Result<Self, DemoError> {
        let mut script = ScriptBuilder::new();

        if let Some(id) = args.id.or(cfg.seed.id) {
            script.set_seed_id(id);
        }
        if let Some(name) = args.name.clone().or(cfg.seed.name) {
            if name.is_empty() {
                return Err(DemoError::Config("seed name must not be empty".into()));
            }
            script.set_seed_name(name);
        }
        if let Some(id) = cfg.scenarios.builder.new_id {
            script.set_new_id(id);
        }

        let with = cfg.scenarios.with;
        if let Some(name) = with.renamed {
            script.set_renamed(name);
        }
        if let Some(id) = with.bumped_id {
            script.set_bumped_id(id);
        }
        if let Some(id) = with.bulk_id {
            script.set_bulk_id(id);
        }
        if let Some(name) = with.bulk_name {
            script.set_bulk_name(name);
        }
        if let Some(id) = with.staged_id {
            script.set_staged_id(id);
        }
        if let Some(name) = with.staged_name {
            script.set_staged_name(name);
        }
        if let Some(suffix) = with.conditional_suffix {
            script.set_conditional_suffix(suffix);
        }
        if let Some(id) = with.final_id {
            script.set_final_id(id);
        }

        Ok(Self {
            scenario: args.scenario.or(cfg.scenario).unwrap_or_default(),
            format: args.format.or(cfg.format).unwrap_or_default(),
            script: script.build()?,
        })
    }
}
