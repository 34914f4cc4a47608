use anyhow::Result;
use clap::Parser;
use pytdgen::errors::print_error;
use pytdgen::requests::RequestFile;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "pytdgen")]
#[command(about = "Build pytd type nodes from generic-type requests", long_about = None)]
struct Args {
    #[arg(value_name = "FILE")]
    input: PathBuf,

    /// Print nodes as JSON instead of pytd syntax
    #[arg(long)]
    json: bool,
}

fn run(args: &Args) -> Result<()> {
    let file = RequestFile::load(&args.input)?;
    let outcomes = file.evaluate_all()?;

    for outcome in &outcomes {
        if args.json {
            println!("{}", serde_json::to_string(outcome)?);
        } else {
            println!("{}", outcome);
        }
    }

    log::info!("Built {} node(s) from {}", outcomes.len(), args.input.display());
    Ok(())
}

fn main() {
    let args = Args::parse();
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    if let Err(err) = run(&args) {
        print_error(&args.input, &err);
        std::process::exit(1);
    }
}
