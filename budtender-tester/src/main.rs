mod http;
mod reports;
mod scenario;

use anyhow::{Context, Result};
use budtender_core::Credentials;
use budtender_core::constants::DEFAULT_API_URL;
use clap::Parser;
use colored::Colorize;
use std::fs::File;
use std::io::{BufWriter, Write, stdout};
use std::path::PathBuf;
use std::rc::Rc;
use std::time::Instant;

use http::ReqwestTransport;
use reports::ScenarioResult;
use scenario::{ALL_SCENARIOS, ScenarioCtx, get_scenario, list_scenarios, run_scenario};

#[derive(Debug, Parser)]
#[command(name = "budtender-tester", version = "0.1.0")]
#[command(about = "Smoke tests for the Budtender client core against a live backend")]
struct Args {
    /// Backend base URL
    #[arg(long, env = "BUDTENDER_API_URL", default_value = DEFAULT_API_URL)]
    base_url: String,

    /// Scenarios to run (comma-separated, or "all")
    #[arg(long, default_value = "guard")]
    scenarios: String,

    /// List all available scenarios and exit
    #[arg(long)]
    list_scenarios: bool,

    /// Output report format
    #[arg(long, default_value = "console")]
    #[arg(value_parser = ["json", "markdown", "console"])]
    report: String,

    /// Verbose output
    #[arg(short, long)]
    verbose: bool,

    /// Optional path to write the report output instead of stdout
    #[arg(long)]
    output: Option<PathBuf>,

    /// Email of an existing account (login scenario)
    #[arg(long, env = "BUDTENDER_EMAIL")]
    email: Option<String>,

    /// Password of an existing account (login scenario)
    #[arg(long, env = "BUDTENDER_PASSWORD", hide_env_values = true)]
    password: Option<String>,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    if maybe_list_scenarios(&args)? {
        return Ok(());
    }

    announce_banner(&args);

    let start_time = Instant::now();
    let scenarios = expand_scenarios(&args.scenarios);
    let ctx = build_context(&args)?;
    let results = run_scenarios(&ctx, &scenarios).await;

    write_reports(&args, &results, start_time)?;

    if results.iter().any(|r| !r.passed) {
        std::process::exit(1);
    }

    Ok(())
}

fn maybe_list_scenarios(args: &Args) -> Result<bool> {
    if !args.list_scenarios {
        return Ok(false);
    }
    let mut output_target = OutputTarget::new(args.output.clone())?;
    writeln!(output_target.writer(), "Available scenarios:")?;
    for (key, description) in list_scenarios() {
        writeln!(output_target.writer(), "  {key:25} - {description}")?;
    }
    output_target.flush_inner()?;
    Ok(true)
}

fn announce_banner(args: &Args) {
    println!("{}", "🌿 Budtender Smoke Tester".bright_green().bold());
    println!("{}", "================================".green());
    println!("Backend: {}", args.base_url.cyan());
}

fn split_csv(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(ToString::to_string)
        .collect()
}

fn expand_scenarios(scenarios_arg: &str) -> Vec<String> {
    let mut scenarios = split_csv(scenarios_arg);
    if scenarios.iter().any(|s| s == "all") {
        scenarios.retain(|s| s != "all");
        for key in ALL_SCENARIOS {
            if !scenarios.iter().any(|s| s == key) {
                scenarios.push(key.to_string());
            }
        }
    }
    scenarios
}

fn credentials(args: &Args) -> Option<Credentials> {
    match (args.email.as_ref(), args.password.as_ref()) {
        (Some(email), Some(password)) => Some(Credentials {
            email: email.clone(),
            password: password.clone(),
        }),
        _ => None,
    }
}

fn build_context(args: &Args) -> Result<ScenarioCtx> {
    let transport = ReqwestTransport::new(&args.base_url)
        .with_context(|| format!("preparing client for {}", args.base_url))?;
    log::info!("targeting backend {}", transport.base_url());
    Ok(ScenarioCtx {
        transport: Rc::new(transport),
        credentials: credentials(args),
        verbose: args.verbose,
    })
}

async fn run_scenarios(ctx: &ScenarioCtx, scenarios: &[String]) -> Vec<ScenarioResult> {
    let mut results = Vec::new();
    for name in scenarios {
        let Some(scenario) = get_scenario(name) else {
            eprintln!("⚠️  Unknown scenario: {}", name.yellow());
            continue;
        };
        if scenario.needs_backend() {
            println!("{} {}", "🔌".bold(), scenario.description());
        } else {
            println!("{} {}", "🧠".bold(), scenario.description());
        }
        let result = run_scenario(scenario.as_ref(), ctx).await;
        if result.passed {
            println!("✅ {} - {:?}", name.green(), result.duration);
        } else {
            eprintln!("❌ {} - {:?}", name.red(), result.duration);
        }
        results.push(result);
    }
    results
}

fn write_reports(args: &Args, results: &[ScenarioResult], start_time: Instant) -> Result<()> {
    let mut output_target = OutputTarget::new(args.output.clone())?;

    match args.report.as_str() {
        "json" => {
            reports::generate_json_report(output_target.writer(), results)?;
        }
        "markdown" => {
            if results.is_empty() {
                writeln!(
                    &mut output_target,
                    "# Budtender Smoke Test Results\n\n_No scenarios executed._"
                )?;
            } else {
                reports::generate_markdown_report(output_target.writer(), results)?;
            }
        }
        _ => {
            if results.is_empty() {
                writeln!(&mut output_target, "No scenarios executed.")?;
            } else {
                reports::generate_console_report(
                    output_target.writer(),
                    results,
                    start_time.elapsed(),
                )?;
            }
            let duration = start_time.elapsed();
            writeln!(&mut output_target, "🏁 Total time: {duration:?}")?;
        }
    }

    output_target.flush_inner()?;
    Ok(())
}

enum OutputTarget {
    Stdout(BufWriter<std::io::Stdout>),
    File(BufWriter<File>),
}

impl OutputTarget {
    fn new(path: Option<PathBuf>) -> Result<Self> {
        if let Some(path) = path {
            let file = File::create(&path)
                .with_context(|| format!("failed to create {}", path.display()))?;
            Ok(Self::File(BufWriter::new(file)))
        } else {
            Ok(Self::Stdout(BufWriter::new(stdout())))
        }
    }

    fn writer(&mut self) -> &mut dyn Write {
        match self {
            Self::Stdout(w) => w,
            Self::File(w) => w,
        }
    }

    fn flush_inner(&mut self) -> std::io::Result<()> {
        match self {
            Self::Stdout(w) => w.flush(),
            Self::File(w) => w.flush(),
        }
    }
}

impl Write for OutputTarget {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        self.writer().write(buf)
    }

    fn flush(&mut self) -> std::io::Result<()> {
        self.flush_inner()
    }
}
