// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use std::env;
use std::io::{self, Read};
use std::path::Path;

use anyhow::{bail, Context, Result};
use the_normalizer::config::{load_settings, Settings};
use the_normalizer::pipeline::{PipelineBuilder, Section};
use the_normalizer::registry::NormalizerRegistry;
use the_normalizer::traits::Normalizer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

const USAGE: &str = "\
Usage: the-normalizer [--settings FILE] [--section NAME] CONFIG [TEXT]
       the-normalizer --list

Normalizes TEXT (or standard input) with the rules in CONFIG.
  --settings FILE   engine settings (YAML)
  --section NAME    section of CONFIG to use; '*' uses every row
  --list            print the available rules as JSON";

/// Parsed command line.
#[derive(Debug, Default)]
struct Args {
    settings: Option<String>,
    section: Option<String>,
    list: bool,
    help: bool,
    config: Option<String>,
    text: Option<String>,
}

fn parse_args(raw: &[String]) -> Result<Args> {
    let mut args = Args::default();
    let mut positional = Vec::new();
    let mut iter = raw.iter();

    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "--settings" => {
                args.settings = Some(iter.next().context("--settings needs a file")?.clone());
            }
            "--section" => {
                args.section = Some(iter.next().context("--section needs a name")?.clone());
            }
            "--list" => args.list = true,
            "-h" | "--help" => args.help = true,
            _ => positional.push(arg.clone()),
        }
    }

    let mut positional = positional.into_iter();
    args.config = positional.next();
    args.text = positional.next();
    if positional.next().is_some() {
        bail!("too many arguments\n\n{}", USAGE);
    }

    Ok(args)
}

fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    let raw: Vec<String> = env::args().skip(1).collect();
    let args = parse_args(&raw)?;
    if args.help {
        println!("{}", USAGE);
        return Ok(());
    }

    let settings = match &args.settings {
        Some(path) => load_settings(path)?,
        None => Settings::default(),
    };
    let registry = NormalizerRegistry::global()?;

    if args.list {
        println!("{}", serde_json::to_string_pretty(&registry.listing())?);
        return Ok(());
    }

    let Some(config) = args.config else {
        bail!("missing CONFIG\n\n{}", USAGE);
    };

    let section = match args.section.as_deref() {
        None => Section::Default,
        Some("*") => Section::Whole,
        Some(name) => Section::named(name),
    };

    let pipeline = PipelineBuilder::new(registry, &settings)
        .build_from_file(Path::new(&config), &section, None)
        .with_context(|| format!("failed to load '{}'", config))?;

    let text = match args.text {
        Some(text) => text,
        None => {
            let mut buffer = String::new();
            io::stdin().read_to_string(&mut buffer)?;
            buffer
        }
    };

    println!("{}", pipeline.normalize(&text));
    Ok(())
}
