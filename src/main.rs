use clap::Parser;
use log::error;
use opcode_tablegen::args::Args;
use std::process::exit;

fn main() {
    let args = Args::parse();

    if let Err(e) = opcode_tablegen::setup_logging(&args.log_path) {
        eprintln!("Failed to set up logging: {}", e);
        exit(1);
    }

    match opcode_tablegen::run(&args) {
        Ok(_) if args.check => println!("Generated files are up to date."),
        Ok(_) => println!("Done generating mapping files."),
        Err(e) => {
            error!("{}", e);
            exit(1);
        }
    }
}
