#![warn(clippy::all, clippy::pedantic)]
#![allow(
    clippy::doc_markdown,
    clippy::missing_errors_doc,
    clippy::module_name_repetitions,
    clippy::too_many_lines,
    clippy::uninlined_format_args
)]

use anyhow::{bail, Result};
use clap::{Parser, Subcommand};
use console::style;
use dialoguer::FuzzySelect;
use std::sync::Arc;
use tracing::warn;
use tracing_subscriber::{fmt, EnvFilter};

use sectoolbox::capability::HttpCapability;
use sectoolbox::catalog::{create_catalog, ToolCatalog, ToolDescriptor};
use sectoolbox::category::{forms, FieldKind};
use sectoolbox::config::Config;
use sectoolbox::engine::{Dispatcher, ExecutionInput};
use sectoolbox::gateway::{self, AppState};
use sectoolbox::strategies::default_registry;
use sectoolbox::util::SharedRng;

/// `sectoolbox` - catalog-driven security tool simulations.
#[derive(Parser, Debug)]
#[command(name = "sectoolbox")]
#[command(version)]
#[command(about = "Educational security toolbox with simulated and delegated tools.", long_about = None)]
struct Cli {
    #[arg(long, global = true)]
    config_dir: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// List the available tools
    List,

    /// Show a tool's descriptor and input form
    Describe {
        /// Tool id (see `sectoolbox list`)
        id: String,
    },

    /// Run a tool and render its result
    #[command(long_about = "\
Run a tool and render its result.

Inputs are passed as FIELD=VALUE pairs; declared form defaults fill the \
rest. Without an id, an interactive picker lists the catalog.

Examples:
  sectoolbox run
  sectoolbox run demo-risk -i network=8 -i users=4 -i data=6 -i compliance=2
  sectoolbox run demo-leak -i email=user@example.com
  sectoolbox run demo-pentest --seed 42")]
    Run {
        /// Tool id; omit to pick interactively
        id: Option<String>,

        /// Form input as FIELD=VALUE (repeatable)
        #[arg(short, long = "input", value_name = "FIELD=VALUE")]
        input: Vec<String>,

        /// Fixed RNG seed for reproducible simulated runs
        #[arg(long)]
        seed: Option<u64>,
    },

    /// Start the HTTP gateway
    Gateway {
        /// Port to listen on; defaults to config gateway.port
        #[arg(short, long)]
        port: Option<u16>,

        /// Host to bind to; defaults to config gateway.host
        #[arg(long)]
        host: Option<String>,
    },
}

fn parse_input_pairs(pairs: &[String]) -> Result<ExecutionInput> {
    let mut input = ExecutionInput::new();
    for pair in pairs {
        match pair.split_once('=') {
            Some((field, value)) if !field.trim().is_empty() => {
                input.set(field.trim(), value.trim());
            }
            _ => bail!("invalid input \"{pair}\", expected FIELD=VALUE"),
        }
    }
    Ok(input)
}

fn build_dispatcher(config: &Config, seed: Option<u64>) -> Dispatcher {
    let capability = Arc::new(HttpCapability::with_timeouts(
        &config.capability.base_url,
        config.capability.api_key.as_deref(),
        config.capability.request_timeout_secs,
        config.capability.connect_timeout_secs,
    ));
    let rng = match seed.or(config.simulation.seed) {
        Some(seed) => SharedRng::seeded(seed),
        None => SharedRng::from_entropy(),
    };
    Dispatcher::new(default_registry(capability, rng))
}

/// Fetch the catalog; a failure reads as an empty catalog, never a crash.
async fn fetch_tools(catalog: &dyn ToolCatalog) -> Vec<ToolDescriptor> {
    match catalog.fetch_active().await {
        Ok(descriptors) => descriptors,
        Err(err) => {
            warn!(error = %err, "catalog fetch failed");
            Vec::new()
        }
    }
}

fn field_summary(kind: FieldKind) -> String {
    match kind {
        FieldKind::Int { min, max, default } => {
            format!("entier {min}-{max} (défaut {default})")
        }
        FieldKind::Text {
            placeholder,
            required,
        } => {
            let requirement = if required { "requis" } else { "optionnel" };
            format!("texte {requirement} (ex. {placeholder})")
        }
        FieldKind::Email => "email requis".to_string(),
        FieldKind::Url => "URL http(s) requise".to_string(),
        FieldKind::Select { options, default } => {
            format!("choix [{}] (défaut {default})", options.join(", "))
        }
    }
}

fn print_tool_line(tool: &ToolDescriptor) {
    println!(
        "{}  {} {}",
        style(&tool.id).cyan(),
        style(&tool.name).bold(),
        style(format!("[{}]", tool.category)).dim()
    );
    if !tool.description.is_empty() {
        println!("    {}", tool.description);
    }
}

async fn handle_list(catalog: &dyn ToolCatalog) {
    let tools = fetch_tools(catalog).await;
    if tools.is_empty() {
        println!("Aucun outil disponible.");
        return;
    }
    for tool in &tools {
        print_tool_line(tool);
    }
}

async fn handle_describe(catalog: &dyn ToolCatalog, dispatcher: &Dispatcher, id: &str) -> Result<()> {
    let tools = fetch_tools(catalog).await;
    let Some(tool) = tools.iter().find(|tool| tool.id == id) else {
        bail!("outil inconnu : {id}");
    };

    print_tool_line(tool);
    let contract = dispatcher.registry().form_contract(&tool.category);
    if contract.is_empty() {
        println!("    (aucun champ de saisie)");
    } else {
        for field in contract {
            println!(
                "    {} — {} : {}",
                style(field.name).bold(),
                field.label,
                field_summary(field.kind)
            );
        }
    }
    Ok(())
}

async fn handle_run(
    catalog: &dyn ToolCatalog,
    dispatcher: &Dispatcher,
    id: Option<String>,
    pairs: &[String],
) -> Result<()> {
    let tools = fetch_tools(catalog).await;
    if tools.is_empty() {
        println!("Aucun outil disponible.");
        return Ok(());
    }

    let tool = match id {
        Some(id) => tools
            .iter()
            .find(|tool| tool.id == id)
            .ok_or_else(|| anyhow::anyhow!("outil inconnu : {id}"))?,
        None => {
            let labels: Vec<String> = tools
                .iter()
                .map(|tool| format!("{} [{}]", tool.name, tool.category))
                .collect();
            let picked = FuzzySelect::new()
                .with_prompt("Choisissez un outil")
                .items(&labels)
                .default(0)
                .interact()?;
            &tools[picked]
        }
    };

    let mut input = parse_input_pairs(pairs)?;
    let contract = dispatcher.registry().form_contract(&tool.category);
    forms::apply_defaults(contract, &mut input);
    forms::validate(contract, &input)?;

    let envelope = dispatcher.execute(tool, &input).await;
    let layout = dispatcher.registry().layout(&tool.category);

    println!(
        "{} {}",
        style(&tool.name).bold(),
        style(format!("[{}]", tool.category)).dim()
    );
    println!("{}", layout(&envelope));
    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = Config::load(cli.config_dir.as_deref()).await?;
    let catalog = create_catalog(&config);

    match cli.command {
        Commands::List => {
            handle_list(catalog.as_ref()).await;
        }
        Commands::Describe { id } => {
            let dispatcher = build_dispatcher(&config, None);
            handle_describe(catalog.as_ref(), &dispatcher, &id).await?;
        }
        Commands::Run { id, input, seed } => {
            let dispatcher = build_dispatcher(&config, seed);
            handle_run(catalog.as_ref(), &dispatcher, id, &input).await?;
        }
        Commands::Gateway { port, host } => {
            let dispatcher = Arc::new(build_dispatcher(&config, None));
            let state = AppState::new(catalog, dispatcher);
            let host = host.unwrap_or_else(|| config.gateway.host.clone());
            let port = port.unwrap_or(config.gateway.port);
            gateway::serve(state, &host, port).await?;
        }
    }

    Ok(())
}
