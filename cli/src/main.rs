//! CLI entrypoint for verisolve
//!
//! This is the main binary that wires together all layers using
//! dependency injection.

use anyhow::{Context, Result, bail};
use clap::Parser;
use std::io::IsTerminal;
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::EnvFilter;
use verisolve_application::{
    RunSuiteInput, RunSuiteUseCase, SolveInput, SolveProgress, SolveUseCase,
};
use verisolve_domain::{AgentResponse, Question};
use verisolve_infrastructure::{ConfigLoader, GeminiConfig, GeminiGateway};
use verisolve_presentation::{
    Cli, ConsoleFormatter, OutputFormat, OutputFormatter, ProgressReporter, SimpleProgress,
    SolveRepl, SuiteReporter,
};

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging based on verbosity level
    let filter = match cli.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"), // -vvv or more
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();

    if cli.show_config {
        ConfigLoader::print_config_sources();
        return Ok(());
    }

    // Load configuration
    let config = if cli.no_config {
        ConfigLoader::load_defaults()
    } else {
        ConfigLoader::load(cli.config.as_ref())?
    };

    // The API key is the only fatal startup requirement.
    let api_key = ConfigLoader::resolve_api_key(&config)?;

    let model = cli.model.unwrap_or(config.gemini.model);
    let max_retries = cli.max_retries.unwrap_or(config.solver.max_retries);

    info!("Starting verisolve (model: {})", model);

    // === Dependency Injection ===
    let mut gemini_config = GeminiConfig::new(api_key, model);
    if let Some(base_url) = config.gemini.base_url {
        gemini_config = gemini_config.with_base_url(base_url);
    }
    let gateway = Arc::new(GeminiGateway::new(gemini_config));

    // Chat mode
    if cli.chat {
        let repl = SolveRepl::new(gateway, max_retries).with_progress(!cli.quiet);
        repl.run().await?;
        return Ok(());
    }

    // Suite mode
    if cli.suite {
        let suite = RunSuiteUseCase::new(gateway);
        let input = RunSuiteInput::new(max_retries);

        let report = if cli.quiet {
            suite.execute(input).await
        } else {
            suite.execute_with_progress(input, &SuiteReporter).await
        };

        println!("{}", ConsoleFormatter::format_suite_summary(&report));

        if let Some(path) = cli.suite_output {
            let json = serde_json::to_string_pretty(&report.records)?;
            std::fs::write(&path, json)
                .with_context(|| format!("failed to write {}", path.display()))?;
            println!("Detailed results saved to: {}", path.display());
        }
        return Ok(());
    }

    // Single question mode - question is required
    let Some(question) = cli.question else {
        bail!("Question is required. Use --chat for interactive mode.");
    };
    let Some(question) = Question::try_new(question) else {
        bail!("Question cannot be empty.");
    };

    let use_case = SolveUseCase::new(gateway);
    let input = SolveInput::new(question).with_max_retries(max_retries);

    // Execute with or without progress reporting; progress bars only
    // make sense on a real terminal, so piped output gets plain lines.
    let response = if cli.quiet {
        use_case.execute(input).await
    } else {
        let progress: Box<dyn SolveProgress> = if std::io::stdout().is_terminal() {
            Box::new(ProgressReporter::new())
        } else {
            Box::new(SimpleProgress)
        };
        use_case.execute_with_progress(input, progress.as_ref()).await
    };

    // Output results
    println!("{}", render(&ConsoleFormatter, cli.output, &response));

    Ok(())
}

/// Render a response through the formatter trait in the requested format.
fn render(
    formatter: &dyn OutputFormatter,
    format: OutputFormat,
    response: &AgentResponse,
) -> String {
    match format {
        OutputFormat::Full => formatter.format(response),
        OutputFormat::Answer => formatter.format_answer_only(response),
        OutputFormat::Json => formatter.format_json(response),
    }
}
