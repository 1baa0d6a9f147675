use clap::Parser;
use log::info;
use runsum::collector::{push_all, RunningCollector};

/// Push values into a running collector and print their average
#[derive(Parser, Debug)]
struct Args {
    /// Values to push, in order
    #[arg(allow_negative_numbers = true, default_values_t = [1.0, 2.0, 3.0, 4.0, 5.0])]
    values: Vec<f64>,

    /// Also print the running sum
    #[arg(short, long)]
    sum: bool,
}

/// Lines to print: the average, then the sum if requested
fn report(values: &[f64], with_sum: bool) -> Vec<String> {
    let mut collector = RunningCollector::with_capacity(values.len());
    let pushed = push_all(&mut collector, values.iter().copied());
    info!("Collected {} values", pushed);

    let mut lines = vec![collector.avg().to_string()];
    if with_sum {
        lines.push(collector.sum().to_string());
    }
    lines
}

fn main() {
    env_logger::init();

    let args = Args::parse();

    for line in report(&args.values, args.sum) {
        println!("{}", line);
    }
}
