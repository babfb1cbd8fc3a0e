use std::fs;

use clap::Parser;
use sigfig::{expression_stack, quantity::core::SigFigNumber};

/// sigfig is an easy to use calculator core for quantities that carry
/// significant-figure precision.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Tells sigfig to look at a file instead of an inline expression.
    #[arg(short, long)]
    file: bool,

    /// Treats the input as a single quantity literal and prints its
    /// canonical rendering instead of tokenizing it.
    #[arg(short, long)]
    quantity: bool,

    /// Renders scientific-notation exponents as HTML superscripts.
    #[arg(long)]
    html: bool,

    contents: String,
}

fn main() {
    let args = Args::parse();

    let source = if args.file {
        fs::read_to_string(&args.contents).unwrap_or_else(|_| {
            eprintln!("Failed to read the input file '{}'. Perhaps this file does not exist?",
                      &args.contents);
            std::process::exit(1);
        })
    } else {
        args.contents
    };

    if args.quantity {
        match SigFigNumber::parse(&source) {
            Some(number) => println!("{}", number.display(args.html)),
            None => eprintln!("'{}' is not a quantity literal.", source.trim()),
        }
        return;
    }

    match expression_stack(&source) {
        Ok(stack) => {
            for spanned in stack {
                println!("{:>4}  {}", spanned.index, spanned.token);
            }
        },
        Err(e) => eprintln!("{e}"),
    }
}
