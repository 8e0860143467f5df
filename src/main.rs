//! streamcsv - streaming CSV parser CLI
//!
//! Parses a CSV file through the streaming reader and reports what it found;
//! optionally re-parses in a loop to measure throughput.

use std::fs::File;
use std::io::BufReader;
use std::time::Instant;

use clap::Parser;
use streamcsv::{ReadOptions, Reader};

#[derive(Parser, Debug)]
#[command(name = "streamcsv")]
#[command(about = "A streaming character-at-a-time CSV parser", long_about = None)]
struct Args {
    /// CSV file to parse
    #[arg(value_name = "FILE")]
    file: String,

    /// Field delimiter
    #[arg(short, long, default_value = ",")]
    delimiter: char,

    /// Quote character
    #[arg(short, long, default_value = "\"")]
    quote: char,

    /// Error out on an unterminated quoted field instead of keeping its content
    #[arg(long)]
    strict: bool,

    /// Verbose output
    #[arg(short, long)]
    verbose: bool,

    /// Number of timed re-parse iterations (0 disables timing)
    #[arg(short, long, default_value = "0")]
    iterations: usize,
}

fn options(args: &Args) -> ReadOptions {
    ReadOptions {
        delimiter: args.delimiter,
        quote: args.quote,
        strict: args.strict,
    }
}

/// Parse the whole file once, returning (rows, fields)
fn parse_file(args: &Args) -> streamcsv::Result<(usize, usize)> {
    let file = File::open(&args.file)?;
    let reader = Reader::with_options(BufReader::new(file), options(args));

    let mut rows = 0usize;
    let mut fields = 0usize;
    for row in reader {
        fields += row?.len();
        rows += 1;
    }
    Ok((rows, fields))
}

fn main() {
    env_logger::init();
    let args = Args::parse();

    if args.verbose {
        println!("[verbose] parsing {}", args.file);
    }

    let (rows, fields) = match parse_file(&args) {
        Ok(counts) => counts,
        Err(e) => {
            eprintln!("Could not parse the file {}: {}", args.file, e);
            std::process::exit(1);
        }
    };

    println!("rows   : {}", rows);
    println!("fields : {}", fields);
    if rows > 0 {
        println!("fields per row : {:.2}", fields as f64 / rows as f64);
    }

    if args.iterations > 0 {
        let bytes = match std::fs::metadata(&args.file) {
            Ok(m) => m.len(),
            Err(e) => {
                eprintln!("Could not stat the file {}: {}", args.file, e);
                std::process::exit(1);
            }
        };

        let mut total_time = 0.0;
        for _ in 0..args.iterations {
            let start = Instant::now();
            if let Err(e) = parse_file(&args) {
                eprintln!("Could not parse the file {}: {}", args.file, e);
                std::process::exit(1);
            }
            total_time += start.elapsed().as_secs_f64();
        }

        let volume = args.iterations as f64 * bytes as f64;
        let gb_per_s = volume / total_time / (1024.0 * 1024.0 * 1024.0);

        if args.verbose {
            println!("Total time in (s)          = {:.6}", total_time);
            println!("Number of iterations       = {}", args.iterations);
        }
        println!(" GB/s: {:.5}", gb_per_s);
    }

    if args.verbose {
        println!("[verbose] done");
    }
}
