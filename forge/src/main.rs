use anyhow::Context;
use clap::{Parser, Subcommand};
use forge_cauchy::CauchyMatrix;
use forge_gf256::{GaloisField, WeightTable};
use tracing_subscriber::Layer;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

#[derive(Parser)]
#[command(name = "forge")]
#[command(about = "Search for low-XOR-weight Cauchy erasure-code matrices over GF(256)")]
struct Args {
    /// Primitive polynomial index, 0..16
    #[arg(short, long, default_value_t = forge_gf256::FAVORITE_POLY)]
    poly: usize,

    #[arg(short, long, default_value_t = tracing_subscriber::filter::LevelFilter::INFO)]
    verbosity: tracing_subscriber::filter::LevelFilter,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Build one matrix column by column with the greedy solver
    Greedy {
        /// Data elements per codeword
        #[arg(short)]
        k: usize,
        /// Parity elements per codeword
        #[arg(short)]
        m: usize,
    },
    /// Randomized best-of-N search over generator vectors
    Explore {
        #[arg(short)]
        k: usize,
        #[arg(short)]
        m: usize,
        #[arg(short, long, default_value_t = 1_000_000)]
        iterations: u64,
        #[arg(short, long, default_value_t = 1)]
        seed: u64,
    },
    /// Print all 256 field elements ranked by weight
    Rank,
    /// Compare the 16 candidate polynomials by ranked-element weight
    Survey,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let stdout_layer = tracing_subscriber::fmt::layer().with_filter(args.verbosity);
    tracing_subscriber::registry().with(stdout_layer).init();

    match args.command {
        Command::Greedy { k, m } => greedy(args.poly, k, m),
        Command::Explore { k, m, iterations, seed } => explore(args.poly, k, m, iterations, seed),
        Command::Rank => rank(args.poly),
        Command::Survey => survey(),
    }
}

fn build_tables(poly: usize) -> anyhow::Result<(GaloisField, WeightTable)> {
    let field = GaloisField::new(poly)?;
    let weights = WeightTable::new(&field);
    Ok((field, weights))
}

fn greedy(poly: usize, k: usize, m: usize) -> anyhow::Result<()> {
    let (field, weights) = build_tables(poly)?;

    let start = std::time::Instant::now();
    let matrix = forge_cauchy::solve_greedy(&field, &weights, k, m)?;
    tracing::info!(
        weight = matrix.weight(),
        elapsed_us = start.elapsed().as_micros() as u64,
        "greedy solve finished"
    );

    print_matrix(&matrix);
    Ok(())
}

fn explore(poly: usize, k: usize, m: usize, iterations: u64, seed: u64) -> anyhow::Result<()> {
    let (field, weights) = build_tables(poly)?;
    let mut explorer = forge_cauchy::Explorer::new(k, m, iterations, seed)?;

    let start = std::time::Instant::now();
    explorer.run(&field, &weights);
    let mut best = explorer.into_best().context("the iteration budget was zero")?;
    forge_cauchy::reorder::sort_columns_by_weight(&weights, &mut best);

    tracing::info!(
        weight = best.weight(),
        iterations,
        elapsed_us = start.elapsed().as_micros() as u64,
        "exploration finished"
    );

    print_matrix(&best);
    Ok(())
}

fn rank(poly: usize) -> anyhow::Result<()> {
    let (_, weights) = build_tables(poly)?;
    println!("Symbols in weight order:");
    print_elements(weights.ranked());
    Ok(())
}

fn survey() -> anyhow::Result<()> {
    for index in 0..forge_gf256::POLYNOMIALS.len() {
        let (_, weights) = build_tables(index)?;

        println!("*** For generator {index} (0x{:02x}):", forge_gf256::POLYNOMIALS[index]);
        println!("Symbols in weight order:");
        print_elements(weights.ranked());

        // Cumulative cost of the cheapest nonzero elements, the figure that
        // picked the favorite polynomial.
        for count in 1..=32 {
            let ones: u32 = weights.ranked()[1..=count].iter().map(|&x| weights.weight(x)).sum();
            println!("{count} columns = {ones} ones");
        }
    }
    Ok(())
}

fn print_matrix(matrix: &CauchyMatrix) {
    println!("[");
    for row in 0..matrix.m() {
        println!("{}", hex_line(matrix.row(row)));
    }
    println!("]");
}

fn print_elements(elements: &[u8]) {
    println!("[");
    println!("{}", hex_line(elements));
    println!("]");
}

fn hex_line(values: &[u8]) -> String {
    values.iter().map(|v| format!("{v:02x}")).collect::<Vec<_>>().join(" ")
}
