mod gen_points;
mod points_io;
mod results;
mod svg;
mod tour_io;

use std::{error::Error, path::PathBuf, str::FromStr};

use clap::{Args, Parser, Subcommand};
use euclid_tsp::{
    christofides,
    heuristics::{brute_force, nearest_neighbor},
    mst::prims_tree,
    ChristofidesOptions, DistanceMatrix, MatchingAlgorithm, Point, Tour,
};

use gen_points::RandomPointGenerator;
use points_io::{load_points, write_points};
use results::{export, AlgResult};
use tour_io::{export_tour, format_tour, import_tour};

#[derive(Parser)]
#[clap(name = "tsp", about = "Approximate Euclidean TSP tours")]
struct Cli {
    /// Log more (-v debug, -vv trace)
    #[clap(short, long, global = true, parse(from_occurrences))]
    verbose: u64,

    #[clap(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    Solve(Solve),
    Eval(Eval),
    Gen(Gen),
}

/// Compute a tour through the points of a file
#[derive(Parser)]
struct Solve {
    /// File with one `x y` pair per line
    #[clap(parse(from_os_str))]
    input: PathBuf,

    #[clap(short, long, default_value = "christofides")]
    algorithm: Algorithm,

    #[clap(long, default_value = "greedy")]
    matching: MatchingAlgorithm,

    /// Improve the Christofides tour by at most this many 2-opt moves
    #[clap(long)]
    two_opt: Option<usize>,

    #[clap(flatten)]
    render: RenderOptions,

    /// Write the tour, one index per line
    #[clap(short, long, parse(from_os_str))]
    write_tour: Option<PathBuf>,

    /// Append a result row to this CSV file
    #[clap(short, long, parse(from_os_str))]
    output: Option<PathBuf>,
}

/// Report the length of a tour written by `solve --write-tour`
#[derive(Parser)]
struct Eval {
    #[clap(parse(from_os_str))]
    input: PathBuf,

    #[clap(parse(from_os_str))]
    tour: PathBuf,

    #[clap(flatten)]
    render: RenderOptions,
}

/// Generate random points in a square grid
#[derive(Parser)]
struct Gen {
    num: usize,

    #[clap(parse(from_os_str))]
    output: PathBuf,

    #[clap(short, long, default_value = "1.0", parse(try_from_str = parse_grid_size))]
    grid_size: f64,

    #[clap(short, long, default_value = "0")]
    seed: u64,

    /// Also draw the complete graph over the points
    #[clap(long, parse(from_os_str))]
    svg: Option<PathBuf>,
}

#[derive(Args)]
struct RenderOptions {
    /// Draw the tour as SVG
    #[clap(long, parse(from_os_str))]
    svg: Option<PathBuf>,

    /// Side length of the grid the points were generated in; defaults to the largest coordinate
    #[clap(short, long, parse(try_from_str = parse_grid_size))]
    grid_size: Option<f64>,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
enum Algorithm {
    Christofides,
    Greedy,
    BruteForce,
}

impl FromStr for Algorithm {
    type Err = String;
    fn from_str(name: &str) -> Result<Self, Self::Err> {
        match name {
            "christofides" => Ok(Algorithm::Christofides),
            "greedy" => Ok(Algorithm::Greedy),
            "brute-force" => Ok(Algorithm::BruteForce),
            other => Err(format!("unknown algorithm '{}'", other)),
        }
    }
}

impl Algorithm {
    fn name(&self) -> &'static str {
        match self {
            Algorithm::Christofides => "christofides",
            Algorithm::Greedy => "greedy",
            Algorithm::BruteForce => "brute-force",
        }
    }
}

fn parse_grid_size(value: &str) -> Result<f64, String> {
    let grid_size: f64 = value
        .parse()
        .map_err(|_| format!("'{}' is not a number", value))?;
    if grid_size.is_finite() && grid_size > 0.0 {
        Ok(grid_size)
    } else {
        Err(format!("grid size must be positive, got {}", value))
    }
}

fn set_up_logging(verbose: u64) -> Result<(), fern::InitError> {
    let level = match verbose {
        0 => log::LevelFilter::Info,
        1 => log::LevelFilter::Debug,
        _ => log::LevelFilter::Trace,
    };
    std::fs::create_dir_all("logs")?;
    fern::Dispatch::new()
        .format(move |out, message, record| {
            out.finish(format_args!(
                "[{date}][{level}] {message}",
                date = chrono::Local::now().format("%H:%M:%S"),
                level = record.level(),
                message = message
            ));
        })
        .level(level)
        .chain(fern::log_file(format!(
            "logs/{}.log",
            chrono::Local::now().format("%d%m%Y-%H%M")
        ))?)
        .apply()?;

    log::info!("Logger set up!");

    Ok(())
}

fn grid_size_for(points: &[Point], grid_size: Option<f64>) -> f64 {
    grid_size.unwrap_or_else(|| {
        let max = points.iter().fold(0.0f64, |m, p| m.max(p.x).max(p.y));
        if max > 0.0 {
            max
        } else {
            1.0
        }
    })
}

fn render(points: &[Point], tour: &Tour, options: &RenderOptions) -> Result<(), Box<dyn Error>> {
    if let Some(path) = &options.svg {
        let grid_size = grid_size_for(points, options.grid_size);
        svg::export_tour_svg(path, points, tour, grid_size)?;
        println!("Solution SVG written to {:?}", path);
    }
    Ok(())
}

fn solve(args: Solve) -> Result<(), Box<dyn Error>> {
    let points = load_points(&args.input)?;
    let dist = DistanceMatrix::new(&points)?;

    let tour = if points.len() == 1 {
        Tour::singleton()
    } else {
        match args.algorithm {
            Algorithm::Christofides => {
                let options = ChristofidesOptions {
                    matching: args.matching,
                    two_opt: args.two_opt,
                };
                christofides(&dist, &options)?
            }
            Algorithm::Greedy => nearest_neighbor(&dist),
            Algorithm::BruteForce => brute_force(&dist)?,
        }
    };

    println!("{} tour length: {}", args.algorithm.name(), tour.cost());
    println!("Tour order: {}", format_tour(&tour));

    if let Some(path) = &args.write_tour {
        export_tour(path, &tour)?;
    }
    render(&points, &tour, &args.render)?;

    if let Some(output) = &args.output {
        let (_, mst_cost) = prims_tree(&dist);
        log::info!("MST lower bound: {}", mst_cost);
        let result = AlgResult::new(
            args.input.display().to_string(),
            args.algorithm.name().to_string(),
            points.len(),
            tour.cost(),
            mst_cost,
        );
        println!("{}", result);
        export(&[result], output)?;
    }
    Ok(())
}

fn eval(args: Eval) -> Result<(), Box<dyn Error>> {
    let points = load_points(&args.input)?;
    let dist = DistanceMatrix::new(&points)?;
    let tour = import_tour(&args.tour, &dist)?;

    println!("Tour length: {}", tour.cost());
    render(&points, &tour, &args.render)
}

fn gen(args: Gen) -> Result<(), Box<dyn Error>> {
    let points: Vec<Point> = RandomPointGenerator::new(args.grid_size, args.seed)
        .take(args.num)
        .collect();
    write_points(&args.output, &points)?;
    println!("Generated {} random points into {:?}", points.len(), args.output);

    if let Some(path) = &args.svg {
        svg::export_points_svg(path, &points, args.grid_size)?;
        println!("SVG visual saved to {:?}", path);
    }
    Ok(())
}

fn main() -> Result<(), Box<dyn Error>> {
    let cli = Cli::parse();
    set_up_logging(cli.verbose)?;

    match cli.command {
        Command::Solve(args) => solve(args)?,
        Command::Eval(args) => eval(args)?,
        Command::Gen(args) => gen(args)?,
    }
    Ok(())
}

#[cfg(test)]
mod test_main {
    use super::*;

    #[test]
    fn test_parse_solve() {
        let cli = Cli::try_parse_from(&[
            "tsp",
            "solve",
            "points.txt",
            "--algorithm",
            "brute-force",
            "--matching",
            "optimal",
            "--two-opt",
            "50",
            "--svg",
            "out.svg",
            "-g",
            "10",
        ])
        .unwrap();

        match cli.command {
            Command::Solve(args) => {
                assert_eq!(args.input, PathBuf::from("points.txt"));
                assert_eq!(args.algorithm, Algorithm::BruteForce);
                assert_eq!(args.matching, MatchingAlgorithm::Optimal);
                assert_eq!(args.two_opt, Some(50));
                assert_eq!(args.render.svg, Some(PathBuf::from("out.svg")));
                assert_eq!(args.render.grid_size, Some(10.0));
            }
            _ => panic!("expected solve"),
        }
    }

    #[test]
    fn test_parse_gen_defaults() {
        let cli = Cli::try_parse_from(&["tsp", "-vv", "gen", "25", "cities.txt"]).unwrap();
        assert_eq!(cli.verbose, 2);
        match cli.command {
            Command::Gen(args) => {
                assert_eq!(args.num, 25);
                assert_eq!(args.grid_size, 1.0);
                assert_eq!(args.seed, 0);
                assert!(args.svg.is_none());
            }
            _ => panic!("expected gen"),
        }
    }

    #[test]
    fn test_unknown_algorithm() {
        assert!(Cli::try_parse_from(&["tsp", "solve", "p.txt", "-a", "genetic"]).is_err());
    }

    #[test]
    fn test_non_positive_grid_size() {
        assert!(Cli::try_parse_from(&["tsp", "gen", "5", "out.txt", "-g", "0"]).is_err());
        assert!(Cli::try_parse_from(&["tsp", "gen", "5", "out.txt", "--grid-size=-3"]).is_err());
        assert!(Cli::try_parse_from(&["tsp", "solve", "p.txt", "--grid-size", "0"]).is_err());
        assert!(Cli::try_parse_from(&["tsp", "eval", "p.txt", "t.txt", "-g", "inf"]).is_err());
        assert_eq!(parse_grid_size("2.5"), Ok(2.5));
        assert!(parse_grid_size("wide").is_err());
    }

    #[test]
    fn test_grid_size_for() {
        let points = vec![Point::new(0.5, 3.0), Point::new(2.0, 1.0)];
        assert_eq!(grid_size_for(&points, None), 3.0);
        assert_eq!(grid_size_for(&points, Some(5.0)), 5.0);
        assert_eq!(grid_size_for(&[Point::new(0.0, 0.0)], None), 1.0);
    }
}
