use clap::Parser;

/// Command-line front end for the sliding-tile solver, matching the option
/// surface and defaults of `original_source/main.cpp`.
#[derive(Parser, Debug)]
#[command(
    name = "tilepuzzle-solver",
    about = "IDA* solver for sliding-tile puzzles",
    disable_help_flag = true
)]
pub struct Args {
    /// Show this help.
    #[arg(long = "help", action = clap::ArgAction::Help)]
    pub help: Option<bool>,

    /// Generate/print the board and skip solving.
    #[arg(short = 'n', long = "no-solution")]
    pub no_solution: bool,

    /// Also emit the input board in bracketed form.
    #[arg(short = 'j', long = "json")]
    pub json: bool,

    /// Board width, ignored when `--set-puzzle` is given.
    #[arg(short = 'w', long = "width", default_value_t = 4)]
    pub width: u32,

    /// Board height, ignored when `--set-puzzle` is given.
    #[arg(short = 'h', long = "height", default_value_t = 4)]
    pub height: u32,

    /// A board in bracketed row-major form, e.g. `[[1,2,3],[4,5,6],[7,8,0]]`.
    #[arg(short = 'c', long = "set-puzzle")]
    pub set_puzzle: Option<String>,

    /// Enable the parallel search variant.
    #[arg(
        short = 'm',
        long = "multi",
        action = clap::ArgAction::Set,
        num_args = 1,
        default_value_t = true
    )]
    pub multi: bool,

    /// Worker budget for the parallel variant; defaults to hardware
    /// concurrency.
    #[arg(short = 'u', long = "cpu-units")]
    pub cpu_units: Option<u32>,
}

impl Args {
    #[must_use]
    pub fn resolved_cpu_units(&self) -> u32 {
        self.cpu_units.unwrap_or_else(|| {
            std::thread::available_parallelism()
                .map(|n| n.get() as u32)
                .unwrap_or(1)
        })
    }
}
