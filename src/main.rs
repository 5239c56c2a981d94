use clap::Parser;
use duration_human::DurationHuman;

use tilepuzzle_solver::cli::Args;
use tilepuzzle_solver::solving::{parallel, sequential};
use tilepuzzle_solver::{parity, Board, GoalIndex};

fn main() {
    let args = match Args::try_parse() {
        Ok(args) => args,
        Err(err) => {
            err.print().expect("failed to print clap error to stderr");
            std::process::exit(1);
        }
    };

    simple_logger::SimpleLogger::new()
        .with_level(log::LevelFilter::Info)
        .init()
        .expect("logger already initialized");

    let mut board = match &args.set_puzzle {
        Some(raw) => raw.parse::<Board>(),
        None => Board::random(args.width, args.height),
    }
    .unwrap_or_else(|err| {
        log::error!("{err}");
        std::process::exit(1);
    });

    parity::fix(&mut board);

    if args.json {
        println!("{}", board.to_bracketed_string());
    }
    print!("{board}");

    if args.no_solution {
        return;
    }

    let goal = GoalIndex::new(board.width(), board.height());
    let started_at = time::OffsetDateTime::now_utc();
    let started = std::time::Instant::now();
    log::info!("search started at {started_at:?}");

    let (steps, record) = if args.multi {
        let cpu_units = args.resolved_cpu_units();
        log::info!("solving in parallel with {cpu_units} worker units");
        parallel::solve(&mut board, &goal, cpu_units)
    } else {
        log::info!("solving single-threaded");
        sequential::solve(&mut board, &goal)
    };

    let elapsed = DurationHuman::from(&started.elapsed());
    println!("solved in {steps} steps");
    println!("{}", record.dump_solution_shuffles());
    log::info!("search took {elapsed}");
}
