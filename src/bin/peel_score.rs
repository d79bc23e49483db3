use anyhow::Result;
use clap::Parser;
use peel_score::CLIArgs;

fn main() -> Result<()> {
    env_logger::init();
    let args = CLIArgs::parse();
    let tree = match &args.input_path {
        Some(path) => peel_score::read_tree_from(path)?,
        None => peel_score::read_tree_from_stdin()?,
    };

    println!("{}", peel_score::max_score(&tree));

    Ok(())
}
