use clap::{Parser, Subcommand};
use console::style;
use suite_scripts::suites::Suite;

#[derive(Parser)]
#[command(about = "Generated-suite maintenance scripts")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Regenerate generated suite files from fixtures
    Generate {
        /// Suite: naming (n), coverage (c); all suites when omitted
        suite: Option<Suite>,
    },
    /// Verify generated suite files are up to date
    Check {
        /// Suite: naming (n), coverage (c); all suites when omitted
        suite: Option<Suite>,
    },
    /// Create a test-data file from the suite template
    New { suite: Suite, name: String },
    /// Delete test-data files matching a name
    Rm {
        suite: Suite,
        name: String,
        /// Actually delete instead of listing matches
        #[arg(long)]
        force: bool,
    },
}

fn main() {
    let cli = Cli::parse();

    let outcome = match cli.command {
        Command::Generate { suite } => suite_scripts::generate(suite),
        Command::Check { suite } => suite_scripts::check_up_to_date(suite),
        Command::New { suite, name } => {
            suite_scripts::fixture::create_fixture(suite, &name).map(|_| ())
        }
        Command::Rm { suite, name, force } => {
            suite_scripts::fixture::delete_fixture(suite, &name, force).map(|_| ())
        }
    };

    if let Err(message) = outcome {
        eprintln!("{} {message}", style("ERROR").red().bold());
        std::process::exit(1);
    }
}
