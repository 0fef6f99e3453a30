//! Virtual CPU command-line runner.
//!
//! This binary loads a program image and runs it against the process standard
//! streams. It performs:
//! 1. **Loading:** Reads the image file and packs it into machine memory with
//!    the requested stack region.
//! 2. **Running:** Executes up to the step budget, then reports the signed
//!    step count and the final machine status.
//! 3. **Diagnosis:** Exit code 0 when the program halted or exhausted the
//!    budget, 1 on a fault or a load failure.

use clap::{Parser, Subcommand};
use std::fs::File;
use std::io::BufReader;
use std::process::ExitCode;

use tinycpu_core::{Config, Machine, Status, load_program};

#[derive(Parser, Debug)]
#[command(
    name = "tinycpu",
    version,
    about = "Word-addressed register virtual CPU",
    long_about = "Run a binary program image on the virtual CPU.\n\n\
        The image is packed four bytes per word (first byte least significant) \
        and executed against stdin/stdout.\n\nExamples:\n  \
        tinycpu run -f prog.bin\n  \
        tinycpu run -f prog.bin --stack-capacity 64 --steps 1000"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Run a program image to halt, fault, or budget exhaustion.
    Run {
        /// Program image to execute.
        #[arg(short, long)]
        file: String,

        /// Stack window capacity in words (overrides config).
        #[arg(long)]
        stack_capacity: Option<usize>,

        /// Step budget (overrides config).
        #[arg(long)]
        steps: Option<u64>,

        /// JSON configuration file.
        #[arg(long)]
        config: Option<String>,
    },
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match cli.command {
        Commands::Run {
            file,
            stack_capacity,
            steps,
            config,
        } => cmd_run(&file, stack_capacity, steps, config.as_deref()),
    }
}

/// Loads the image, runs it, and prints the outcome diagnosis to stderr.
fn cmd_run(
    file: &str,
    stack_capacity: Option<usize>,
    steps: Option<u64>,
    config_path: Option<&str>,
) -> ExitCode {
    let mut config = match config_path {
        Some(path) => match load_config(path) {
            Ok(config) => config,
            Err(message) => {
                eprintln!("[!] {message}");
                return ExitCode::FAILURE;
            }
        },
        None => Config::default(),
    };
    if let Some(capacity) = stack_capacity {
        config.stack_capacity = capacity;
    }
    if let Some(budget) = steps {
        config.step_budget = budget;
    }

    let image = match File::open(file) {
        Ok(handle) => BufReader::new(handle),
        Err(e) => {
            eprintln!("[!] cannot open '{file}': {e}");
            return ExitCode::FAILURE;
        }
    };

    let program = match load_program(image, config.stack_capacity) {
        Ok(program) => program,
        Err(e) => {
            eprintln!("[!] cannot load '{file}': {e}");
            return ExitCode::FAILURE;
        }
    };

    let mut machine = Machine::new(program.memory, program.stack_bottom, config.stack_capacity);
    let executed = machine.run(config.step_budget);
    let status = machine.status();

    eprintln!("[*] executed {} instruction(s), status: {status}", executed.unsigned_abs());
    match status {
        Status::Ok | Status::Halted => ExitCode::SUCCESS,
        _ => {
            machine.dump_registers();
            ExitCode::FAILURE
        }
    }
}

/// Reads and parses a JSON configuration file.
fn load_config(path: &str) -> Result<Config, String> {
    let text =
        std::fs::read_to_string(path).map_err(|e| format!("cannot read config '{path}': {e}"))?;
    Config::from_json(&text).map_err(|e| format!("bad config '{path}': {e}"))
}
