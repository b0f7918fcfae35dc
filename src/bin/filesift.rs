use clap::{Args, Parser, Subcommand};
use serde::Serialize;

use filesift::core::constants::output_formats;
use filesift::logging::{
    init_logger, log_config_info, log_processing_complete, log_root_info,
};
use filesift::{
    CliConfig, Config, ExcludeGlobFilterer, ExtensionFilterer, Extractor, FileProcessor,
    FileSearcher, Filterer, ImageUrlExtractor, IncludeGlobFilterer, Sha1Extractor,
};

use std::collections::{BTreeMap, HashMap};
use std::path::PathBuf;
use std::process;
use std::time::Instant;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate a SHA-1 checksum for every file
    Checksum(ProcessArgs),
    /// Extract image URLs from web page sources
    Urls(ProcessArgs),
}

#[derive(Args)]
struct ProcessArgs {
    /// Root directories to process
    #[arg(required = true, value_name = "DIRECTORY")]
    root_dirs: Vec<PathBuf>,

    // Core Options
    /// Recursively search sub-directories
    #[arg(short = 'r', long, help_heading = "Core Options")]
    recursive: bool,

    // Filtering
    /// File extensions to process (e.g. html,css,js)
    #[arg(long, value_name = "EXTENSIONS", help_heading = "Filtering")]
    file_types: Option<String>,

    /// Glob pattern a file must match to be processed (repeatable)
    #[arg(long, value_name = "GLOB", help_heading = "Filtering")]
    include: Vec<String>,

    /// Glob pattern that removes files from processing (repeatable)
    #[arg(long, value_name = "GLOB", help_heading = "Filtering")]
    exclude: Vec<String>,

    // Output & Verbosity
    /// Output format
    #[arg(long, value_name = "FORMAT", value_parser = output_formats::ALL, help_heading = "Output & Verbosity")]
    format: Option<String>,

    /// Enable verbose logging
    #[arg(short = 'v', long, help_heading = "Output & Verbosity")]
    verbose: bool,

    /// Suppress diagnostics
    #[arg(short = 'q', long, help_heading = "Output & Verbosity")]
    quiet: bool,

    // Configuration
    /// Use specific config file
    #[arg(long, value_name = "FILE", help_heading = "Configuration")]
    config: Option<String>,

    /// Ignore config files
    #[arg(long, help_heading = "Configuration")]
    no_config: bool,
}

fn main() {
    let cli = Cli::parse();

    let exit_code = match cli.command {
        Commands::Checksum(args) => run(&args, Sha1Extractor::new()),
        Commands::Urls(args) => run(&args, ImageUrlExtractor::default()),
    };
    process::exit(exit_code);
}

fn run<E>(args: &ProcessArgs, extractor: E) -> i32
where
    E: Extractor,
    E::Output: Serialize,
{
    init_logger(args.verbose, args.quiet);

    let config = match resolve_config(args) {
        Ok(config) => config,
        Err(err) => {
            eprintln!("Error: {err}");
            return 1;
        }
    };
    log_config_info(&config);
    log_root_info(args.root_dirs.len(), &args.root_dirs);

    let filterers = match build_filterers(&config) {
        Ok(filterers) => filterers,
        Err(err) => {
            eprintln!("Error: {err}");
            return 1;
        }
    };
    let searcher = if config.recursive.unwrap_or(false) {
        FileSearcher::recursive()
    } else {
        FileSearcher::new()
    };
    let processor = FileProcessor::new(searcher, filterers, extractor);

    let started = Instant::now();
    let results = match processor.process(&args.root_dirs) {
        Ok(results) => results,
        Err(err) => {
            eprintln!("Error: {err}");
            return 1;
        }
    };
    log_processing_complete(results.len(), started.elapsed().as_millis());

    let format = config
        .output_format
        .as_deref()
        .unwrap_or(output_formats::DEFAULT);
    print_results(&results, format)
}

fn resolve_config(args: &ProcessArgs) -> filesift::Result<Config> {
    let mut config = if args.no_config {
        Config::default()
    } else if let Some(ref path) = args.config {
        Config::load_from_file(path)?
    } else {
        Config::load_from_standard_locations()
    };

    config.merge_with_cli(&cli_config(args));
    config.validate()?;
    Ok(config)
}

fn cli_config(args: &ProcessArgs) -> CliConfig {
    CliConfig {
        recursive: args.recursive,
        file_types: args.file_types.as_ref().map(|types| {
            types
                .split(',')
                .map(|file_type| file_type.trim().to_string())
                .filter(|file_type| !file_type.is_empty())
                .collect()
        }),
        include_patterns: (!args.include.is_empty()).then(|| args.include.clone()),
        exclude_patterns: (!args.exclude.is_empty()).then(|| args.exclude.clone()),
        output_format: args.format.clone(),
        verbose: args.verbose,
    }
}

fn build_filterers(config: &Config) -> filesift::Result<Vec<Box<dyn Filterer>>> {
    let mut filterers: Vec<Box<dyn Filterer>> = Vec::new();

    if let Some(ref include_patterns) = config.include_patterns {
        filterers.push(Box::new(IncludeGlobFilterer::new(include_patterns)?));
    }
    if let Some(ref exclude_patterns) = config.exclude_patterns {
        filterers.push(Box::new(ExcludeGlobFilterer::new(exclude_patterns)?));
    }
    if let Some(ref file_types) = config.file_types {
        filterers.push(Box::new(ExtensionFilterer::new(file_types.iter().cloned())));
    }

    Ok(filterers)
}

fn print_results<T: Serialize>(results: &HashMap<PathBuf, T>, format: &str) -> i32 {
    // BTreeMap for stable, sorted output regardless of hash order
    let ordered: BTreeMap<String, serde_json::Value> = results
        .iter()
        .map(|(path, value)| {
            (
                path.display().to_string(),
                serde_json::to_value(value).unwrap_or(serde_json::Value::Null),
            )
        })
        .collect();

    match format {
        output_formats::JSON => match serde_json::to_string_pretty(&ordered) {
            Ok(json) => println!("{json}"),
            Err(err) => {
                eprintln!("Error: could not serialize results: {err}");
                return 1;
            }
        },
        output_formats::MINIMAL => {
            for value in ordered.values() {
                print_value(value, "");
            }
        }
        _ => {
            for (path, value) in &ordered {
                println!("{path}");
                print_value(value, "\t");
            }
        }
    }

    0
}

fn print_value(value: &serde_json::Value, indent: &str) {
    match value {
        serde_json::Value::Array(items) => {
            for item in items {
                print_value(item, indent);
            }
        }
        serde_json::Value::String(text) => println!("{indent}{text}"),
        other => println!("{indent}{other}"),
    }
}
