use clap::Parser;
use colored::Colorize;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;
use thompson_core::{
    Config, ConvertError, EmptyRegexPolicy, NfaTuple, RegexSource, UnreachablePolicy,
    convert_debug, convert_with, dot,
};

#[derive(Parser, Debug)]
#[command(name = "thompson")]
#[command(about = "Thompson - convert a regex read from JSON into an NFA tuple")]
#[command(version)]
struct Cli {
    /// JSON file holding the regex under `regex` (or `RE`)
    input: PathBuf,
    /// Where to write the NFA tuple as JSON
    output: PathBuf,
    /// Make the empty regex accept the empty string
    #[arg(long)]
    empty_accepts: bool,
    /// Drop states unreachable from the start state
    #[arg(long)]
    prune_unreachable: bool,
    /// Also write a Graphviz DOT rendering next to the output
    #[arg(long)]
    dot: bool,
    /// Print every conversion stage and enable debug logging
    #[arg(short, long)]
    verbose: bool,
}

impl Cli {
    fn config(&self) -> Config {
        let empty_regex = if self.empty_accepts {
            EmptyRegexPolicy::AcceptsEmptyString
        } else {
            EmptyRegexPolicy::AcceptsNothing
        };
        let unreachable = if self.prune_unreachable {
            UnreachablePolicy::Prune
        } else {
            UnreachablePolicy::Retain
        };
        Config::new().empty_regex(empty_regex).unreachable(unreachable)
    }
}

#[derive(Error, Debug)]
enum CliError {
    #[error("cannot read {}: {source}", path.display())]
    Read { path: PathBuf, source: io::Error },

    #[error("cannot write {}: {source}", path.display())]
    Write { path: PathBuf, source: io::Error },

    #[error("invalid input file {}: {source}", path.display())]
    Input {
        path: PathBuf,
        source: serde_json::Error,
    },

    #[error("cannot serialize automaton: {0}")]
    Serialize(serde_json::Error),

    #[error(transparent)]
    Convert(#[from] ConvertError),
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match run(&cli) {
        Ok(written) => {
            for path in written {
                println!("{} {}", "Wrote".green().bold(), path.display());
            }
        }
        Err(e) => {
            eprintln!("{} {}", "Error:".red().bold(), e);
            std::process::exit(1);
        }
    }
}

fn init_logging(verbose: bool) {
    let default_filter = if verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .init();
}

/// Path of the DOT file written alongside `output`
fn dot_path(output: &Path) -> PathBuf {
    output.with_extension("dot")
}

fn write_file(path: &Path, contents: &str) -> Result<(), CliError> {
    fs::write(path, contents).map_err(|source| CliError::Write {
        path: path.to_path_buf(),
        source,
    })
}

fn read_source(path: &Path) -> Result<RegexSource, CliError> {
    let text = fs::read_to_string(path).map_err(|source| CliError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    RegexSource::from_json(&text).map_err(|source| CliError::Input {
        path: path.to_path_buf(),
        source,
    })
}

/// Convert the input file and return the paths written
fn run(cli: &Cli) -> Result<Vec<PathBuf>, CliError> {
    let source = read_source(&cli.input)?;
    let pattern = source.pattern();
    let config = cli.config();
    log::info!("converting {:?} with {:?}", pattern, config);

    let tuple: NfaTuple = if cli.verbose {
        let report = convert_debug(pattern, &config)?;
        report.report();
        report.tuple
    } else {
        convert_with(pattern, &config)?
    };

    let json = tuple.to_json_pretty().map_err(CliError::Serialize)?;
    write_file(&cli.output, &json)?;
    let mut written = vec![cli.output.clone()];

    if cli.dot {
        let path = dot_path(&cli.output);
        write_file(&path, &dot::render(&tuple))?;
        written.push(path);
    }

    Ok(written)
}
