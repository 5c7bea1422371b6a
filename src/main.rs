use std::{fs, path::PathBuf, process::ExitCode};

use calcboard::{
    config::Config,
    interpreter::MathEvaluator,
    visibility::{self, Section, Visibility},
    widget::{WidgetOutput, run_expression, run_linear, run_quadratic},
};
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

/// calcboard evaluates expressions and solves linear and quadratic equations.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Cli {
    /// Reads settings from this file instead of the default location.
    #[arg(long, global = true, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Raises the log level; repeat for more detail.
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Evaluates an expression.
    Expr {
        /// Treats the argument as a path to read the expression from.
        #[arg(short, long)]
        file: bool,

        /// The expression text, or a path with `--file`.
        #[arg(allow_hyphen_values = true)]
        contents: String,
    },
    /// Solves `a·x + b = c`.
    Linear {
        #[command(flatten)]
        coefficients: CoefficientArgs,
    },
    /// Solves `a·x² + b·x + c = 0`.
    Quadratic {
        #[command(flatten)]
        coefficients: CoefficientArgs,
    },
    /// Prints every visible section of the board.
    Board {
        /// Input for the expression section.
        #[arg(long, value_name = "EXPRESSION", allow_hyphen_values = true)]
        expr: Option<String>,

        /// Coefficients for the linear section.
        #[arg(long, value_name = "A,B,C", allow_hyphen_values = true)]
        linear: Option<String>,

        /// Coefficients for the quadratic section.
        #[arg(long, value_name = "A,B,C", allow_hyphen_values = true)]
        quadratic: Option<String>,

        /// Shows a section.
        #[arg(long, value_enum, value_name = "SECTION")]
        show: Vec<Section>,

        /// Hides a section.
        #[arg(long, value_enum, value_name = "SECTION")]
        hide: Vec<Section>,

        /// Shows every section.
        #[arg(long, conflicts_with = "clear_all")]
        select_all: bool,

        /// Hides every section.
        #[arg(long)]
        clear_all: bool,
    },
}

/// Coefficient fields as typed; validation happens in the widget.
#[derive(clap::Args, Debug)]
struct CoefficientArgs {
    #[arg(allow_hyphen_values = true)]
    a: String,
    #[arg(allow_hyphen_values = true)]
    b: String,
    #[arg(allow_hyphen_values = true)]
    c: String,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let config = match Config::load(cli.config.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("{e}");
            return ExitCode::FAILURE;
        },
    };
    init_logging(cli.verbose, &config.logging.level);

    let outputs = match cli.command {
        Command::Expr { file, contents } => {
            let expression = if file {
                match fs::read_to_string(&contents) {
                    Ok(text) => text,
                    Err(_) => {
                        eprintln!("Failed to read the input file '{contents}'. Perhaps this file does not exist?");
                        return ExitCode::FAILURE;
                    },
                }
            } else {
                contents
            };
            vec![(None, run_expression(&mut MathEvaluator, &expression))]
        },
        Command::Linear { coefficients: CoefficientArgs { a, b, c } } => vec![(None, run_linear(&a, &b, &c))],
        Command::Quadratic { coefficients: CoefficientArgs { a, b, c } } => {
            vec![(None, run_quadratic(&a, &b, &c))]
        },
        Command::Board { expr,
                         linear,
                         quadratic,
                         show,
                         hide,
                         select_all,
                         clear_all, } => {
            let board = board_visibility(config.sections, &show, &hide, select_all, clear_all);
            board.visible_sections()
                 .map(|section| {
                     let output = match section {
                         Section::Expression => {
                             run_expression(&mut MathEvaluator, expr.as_deref().unwrap_or_default())
                         },
                         Section::Linear => {
                             let [a, b, c] = split_coefficients(linear.as_deref());
                             run_linear(a, b, c)
                         },
                         Section::Quadratic => {
                             let [a, b, c] = split_coefficients(quadratic.as_deref());
                             run_quadratic(a, b, c)
                         },
                     };
                     (Some(section), output)
                 })
                 .collect()
        },
    };

    report(&outputs)
}

/// Installs the stderr subscriber. `RUST_LOG` wins, then `-v`, then the
/// configured level.
fn init_logging(verbose: u8, configured: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        let level = match verbose {
            0 => configured,
            1 => "info",
            2 => "debug",
            _ => "trace",
        };
        EnvFilter::try_new(level).unwrap_or_else(|_| EnvFilter::new("warn"))
    });

    tracing_subscriber::fmt().with_env_filter(filter)
                             .with_writer(std::io::stderr)
                             .init();
}

fn board_visibility(initial: visibility::SectionStates,
                    show: &[Section],
                    hide: &[Section],
                    select_all: bool,
                    clear_all: bool)
                    -> Visibility {
    let mut board = visibility::compute_visibility(initial);
    if select_all {
        board = visibility::select_all(true);
    }
    if clear_all {
        board = visibility::clear_all();
    }
    for section in show {
        board = visibility::toggle(board, *section, true);
    }
    for section in hide {
        board = visibility::toggle(board, *section, false);
    }
    board
}

/// Splits `A,B,C`; missing fields read as blank, which the widget treats as
/// zero.
fn split_coefficients(text: Option<&str>) -> [&str; 3] {
    let mut fields = text.unwrap_or_default().splitn(3, ',');
    [fields.next().unwrap_or_default(),
     fields.next().unwrap_or_default(),
     fields.next().unwrap_or_default()]
}

fn report(outputs: &[(Option<Section>, WidgetOutput)]) -> ExitCode {
    let mut failed = false;
    for (section, output) in outputs {
        if let Some(section) = section {
            println!("== {} ==", section.title());
        }
        if output.is_error {
            failed = true;
            eprintln!("{output}");
        } else {
            println!("{output}");
        }
    }

    if failed { ExitCode::FAILURE } else { ExitCode::SUCCESS }
}
