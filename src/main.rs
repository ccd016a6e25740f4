//! PolicyPilot - Main CLI Entry Point

use anyhow::Result;
use clap::Parser;
use colored::Colorize;
use std::sync::Arc;
use std::time::Duration;

use policypilot::backend::OpenAiBackend;
use policypilot::cli::{Args, Commands, Verbosity};
use policypilot::config::Config;
use policypilot::corpus::CorpusStore;
use policypilot::moderation::{ContentModerator, InMemoryTermStore};
use policypilot::pipeline::ChatPipeline;
use policypilot::prompt::{PromptBuilder, SamplingOverrides, ToneProfile};
use policypilot::retrieval::{RetrievalParams, Retriever};
use policypilot::GenerationOutcome;

/// Queries with known expected rankings, used by the selftest subcommand
const SELFTEST_QUERIES: &[&str] = &[
    "How many semesters are there in an academic year?",
    "When are tuition fees due?",
    "How many absences are allowed in a module?",
    "Can I bring my calculator to an exam?",
    "What is the normal study period for a BA degree?",
];

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    if let Err(msg) = args.validate() {
        eprintln!("{}: {}", "Error".red(), msg);
        std::process::exit(2);
    }

    let config = Config::load()?;

    match &args.command {
        Some(Commands::Check { text }) => {
            run_check(&config, text).await?;
        }
        Some(Commands::Corpus) => {
            list_corpus();
        }
        Some(Commands::Selftest) => {
            run_selftest(&config);
        }
        Some(Commands::Config) => {
            show_config(&config)?;
        }
        None => {
            // Validated above: no subcommand means a question is present
            if let Some(question) = &args.question {
                ask(&args, &config, question).await?;
            }
        }
    }

    Ok(())
}

fn build_term_store(config: &Config) -> Result<InMemoryTermStore> {
    let store = InMemoryTermStore::new();
    for term in &config.moderation.banned_terms {
        store.add_term(term, "config")?;
    }
    Ok(store)
}

fn build_retriever(config: &Config) -> Retriever {
    Retriever::with_params(
        CorpusStore::builtin(),
        RetrievalParams {
            top_k: config.retrieval.top_k,
        },
    )
}

async fn ask(args: &Args, config: &Config, question: &str) -> Result<()> {
    let api_key = std::env::var(&config.backend.api_key_env).map_err(|_| {
        anyhow::anyhow!(
            "{} environment variable is not set",
            config.backend.api_key_env
        )
    })?;

    let backend = OpenAiBackend::with_config(
        &config.backend.base_url,
        &config.backend.model,
        api_key,
        Duration::from_secs(config.backend.timeout_secs),
    )?;

    let tone = match &args.tone {
        Some(name) => ToneProfile::parse(name)
            .ok_or_else(|| anyhow::anyhow!("Unknown tone '{name}' (helpful, formal, concise)"))?,
        None => config.prompt.tone,
    };

    let pipeline = ChatPipeline::new(
        ContentModerator::new(Arc::new(build_term_store(config)?)),
        build_retriever(config),
        PromptBuilder::with_defaults(config.sampling_defaults()),
        Arc::new(backend),
    )
    .with_tone(tone);

    let overrides = SamplingOverrides {
        temperature: args.temperature,
        max_output_tokens: args.max_tokens,
        top_p: args.top_p,
        tone: None,
    };

    let verbosity = args.verbosity();
    let outcome = pipeline
        .generate_grounded_response(question, &overrides)
        .await?;

    match &outcome {
        GenerationOutcome::Success {
            text,
            source_titles,
            token_usage,
            sampling,
        } => {
            println!("{text}");
            if verbosity.show_sources() && !source_titles.is_empty() {
                println!();
                println!("{}", "Sources:".cyan());
                for (idx, title) in source_titles.iter().enumerate() {
                    println!("  {}. {}", idx + 1, title);
                }
            }
            if verbosity.show_usage() {
                println!();
                println!(
                    "{} {} prompt / {} completion / {} total tokens",
                    "Usage:".cyan(),
                    token_usage.prompt_tokens,
                    token_usage.completion_tokens,
                    token_usage.total_tokens
                );
                println!(
                    "{} temperature={} max_tokens={} top_p={}",
                    "Sampling:".cyan(),
                    sampling.temperature,
                    sampling.max_output_tokens,
                    sampling.top_p
                );
            }
        }
        GenerationOutcome::Violation { message, .. } => {
            eprintln!("{}: {}", "Blocked".red(), message);
            std::process::exit(1);
        }
        GenerationOutcome::Failure {
            error_detail,
            fallback_text,
        } => {
            if verbosity != Verbosity::Quiet {
                eprintln!("{}: {}", "Warning".yellow(), error_detail);
                eprintln!();
            }
            println!("{fallback_text}");
        }
    }

    Ok(())
}

async fn run_check(config: &Config, text: &str) -> Result<()> {
    let moderator = ContentModerator::new(Arc::new(build_term_store(config)?));
    let check = moderator.check_content(text).await?;

    if check.violated {
        println!("{}: {}", "Violation".red(), check.message);
        std::process::exit(1);
    }

    println!("{}: {}", "OK".green(), check.message);
    Ok(())
}

fn list_corpus() {
    let corpus = CorpusStore::builtin();
    println!("{} policy documents:\n", corpus.len());
    for doc in corpus.iter() {
        println!("  {} {}", doc.key.cyan(), doc.title);
    }
}

fn run_selftest(config: &Config) {
    let retriever = build_retriever(config);

    for query in SELFTEST_QUERIES {
        println!("{} {}", "Query:".cyan(), query);
        let results = retriever.retrieve(query);
        if results.is_empty() {
            println!("  {}", "(no matching documents)".yellow());
        } else {
            for scored in &results {
                println!(
                    "  {:>4}  {} ({})",
                    scored.score,
                    scored.document.title,
                    scored.document.key
                );
            }
        }
        println!();
    }
}

fn show_config(config: &Config) -> Result<()> {
    println!("{}", "PolicyPilot Configuration".cyan().bold());
    println!("  File: {:?}", Config::config_path()?);
    println!();

    println!("Backend:");
    println!("  Base URL:     {}", config.backend.base_url);
    println!("  Model:        {}", config.backend.model);
    println!("  API key env:  {}", config.backend.api_key_env);
    println!("  Timeout:      {}s", config.backend.timeout_secs);
    println!();

    println!("Retrieval:");
    println!("  Top K:        {}", config.retrieval.top_k);
    println!();

    println!("Prompt:");
    println!("  Tone:         {:?}", config.prompt.tone);
    println!("  Temperature:  {}", config.prompt.temperature);
    println!("  Max tokens:   {}", config.prompt.max_output_tokens);
    println!("  Top P:        {}", config.prompt.top_p);
    println!();

    println!("Moderation:");
    println!(
        "  Banned terms: {}",
        config.moderation.banned_terms.len()
    );

    Ok(())
}
