//! hoverintent - Pointer dwell intent engine
//!
//! Replays recorded pointer traces through the intent-detection state
//! machine and reports the enter/leave decisions.

use hoverintent::app::cli::{Cli, Commands, ConfigAction};
use hoverintent::app::config::Config;
use hoverintent::replay::TraceReplayer;
use hoverintent::signal::SignalTrace;
use hoverintent::time::MonoClock;
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<()> {
    // Parse CLI arguments first so we can use --verbose to set log level
    let cli = Cli::parse_args();

    // Initialize tracing (--verbose enables debug-level output)
    let default_level = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .init();

    // Anchor the monotonic clock
    MonoClock::init();

    // Load config
    let config = if let Some(path) = &cli.config {
        Config::load(path)?
    } else {
        Config::load_default()?
    };

    // Execute command
    match cli.command {
        Commands::Replay { input, json } => {
            run_replay(&input, json, &config)?;
        }
        Commands::Validate { trace } => {
            run_validate(&trace)?;
        }
        Commands::List { detailed } => {
            run_list(detailed, &config)?;
        }
        Commands::Init { force } => {
            run_init(force)?;
        }
        Commands::Config { action } => {
            run_config(action, &config)?;
        }
    }

    Ok(())
}

fn run_replay(input: &std::path::Path, json: bool, config: &Config) -> anyhow::Result<()> {
    info!("Replaying trace {:?}", input);

    if !input.exists() {
        anyhow::bail!("Trace file not found: {:?}", input);
    }

    let trace = SignalTrace::load(input)?;
    info!(
        "Loaded trace '{}' with {} signals",
        trace.metadata.name,
        trace.len()
    );

    let replayer = TraceReplayer::new(config.engine.clone());
    let report = replayer.replay(&trace)?;

    if json || config.replay.json_output {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print!("{}", report.summary());
    }

    Ok(())
}

fn run_validate(path: &std::path::Path) -> anyhow::Result<()> {
    if !path.exists() {
        anyhow::bail!("Trace file not found: {:?}", path);
    }

    let trace = SignalTrace::load(path)?;
    trace.validate()?;

    println!(
        "Trace '{}' OK: {} signals covering {}ms",
        trace.metadata.name,
        trace.len(),
        trace.metadata.duration_ms
    );
    Ok(())
}

fn run_list(detailed: bool, config: &Config) -> anyhow::Result<()> {
    let traces_dir = config
        .replay
        .traces_dir
        .clone()
        .unwrap_or_else(Cli::traces_dir);

    if !traces_dir.exists() {
        println!("No traces found ({:?} does not exist)", traces_dir);
        return Ok(());
    }

    let mut entries: Vec<_> = std::fs::read_dir(&traces_dir)?
        .filter_map(|e| e.ok())
        .map(|e| e.path())
        .filter(|p| p.extension().map(|ext| ext == "json").unwrap_or(false))
        .collect();
    entries.sort();

    if entries.is_empty() {
        println!("No traces found in {:?}", traces_dir);
        return Ok(());
    }

    for path in entries {
        match SignalTrace::load(&path) {
            Ok(trace) => {
                println!(
                    "{}: {} signals, {}ms",
                    trace.metadata.name,
                    trace.len(),
                    trace.metadata.duration_ms
                );
                if detailed {
                    println!("  id: {}", trace.metadata.id);
                    println!("  recorded: {}", trace.metadata.recorded_at);
                    if let Some(description) = &trace.metadata.description {
                        println!("  description: {}", description);
                    }
                    println!("  file: {:?}", path);
                }
            }
            Err(e) => {
                println!("{:?}: unreadable ({})", path, e);
            }
        }
    }

    Ok(())
}

fn run_init(force: bool) -> anyhow::Result<()> {
    let path = Config::default_path();
    if path.exists() && !force {
        anyhow::bail!(
            "Config already exists at {:?}; use --force to overwrite",
            path
        );
    }

    let config = Config::default();
    config.save(&path)?;
    println!("Wrote default config to {:?}", path);
    Ok(())
}

fn run_config(action: ConfigAction, config: &Config) -> anyhow::Result<()> {
    match action {
        ConfigAction::Show => {
            println!("{}", config.to_toml()?);
        }
        ConfigAction::Get { key } => match get_config_value(config, &key) {
            Some(value) => println!("{}", value),
            None => anyhow::bail!("Unknown configuration key: {}", key),
        },
        ConfigAction::Set { key, value } => {
            let mut updated = config.clone();
            set_config_value(&mut updated, &key, &value)?;
            updated.validate()?;
            updated.save_default()?;
            println!("Set {} = {}", key, value);
        }
        ConfigAction::Reset { force } => {
            if !force {
                anyhow::bail!("Refusing to reset configuration without --force");
            }
            Config::default().save_default()?;
            println!("Configuration reset to defaults");
        }
    }
    Ok(())
}

fn get_config_value(config: &Config, key: &str) -> Option<String> {
    match key {
        "engine.poll_interval_ms" => Some(config.engine.poll_interval_ms.to_string()),
        "engine.sensitivity_px" => Some(config.engine.sensitivity_px.to_string()),
        "engine.exit_delay_ms" => Some(config.engine.exit_delay_ms.to_string()),
        "engine.ignore_scroll" => Some(config.engine.ignore_scroll.to_string()),
        "engine.per_element_tracking" => Some(config.engine.per_element_tracking.to_string()),
        "engine.target_selector" => Some(
            config
                .engine
                .target_selector
                .clone()
                .unwrap_or_else(|| "(none)".to_string()),
        ),
        "replay.json_output" => Some(config.replay.json_output.to_string()),
        _ => None,
    }
}

fn set_config_value(config: &mut Config, key: &str, value: &str) -> anyhow::Result<()> {
    match key {
        "engine.poll_interval_ms" => config.engine.poll_interval_ms = value.parse()?,
        "engine.sensitivity_px" => config.engine.sensitivity_px = value.parse()?,
        "engine.exit_delay_ms" => config.engine.exit_delay_ms = value.parse()?,
        "engine.ignore_scroll" => config.engine.ignore_scroll = value.parse()?,
        "engine.per_element_tracking" => config.engine.per_element_tracking = value.parse()?,
        "engine.target_selector" => {
            config.engine.target_selector = if value.is_empty() {
                None
            } else {
                Some(value.to_string())
            };
        }
        "replay.json_output" => config.replay.json_output = value.parse()?,
        _ => anyhow::bail!("Unknown configuration key: {}", key),
    }
    Ok(())
}
