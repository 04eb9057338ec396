use std::fs::File;
use std::io::{Read, stdin};
use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, ValueEnum};

#[derive(Debug, Clone, Copy, ValueEnum)]
enum ArraysArg {
    Brackets,
    NoBrackets,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum BoolsArg {
    Numeric,
    Literal,
}

#[derive(Parser, Debug)]
#[command(
    name = "urlform",
    about = "Convert JSON to application/x-www-form-urlencoded text",
    version
)]
struct Args {
    /// Parse form text and print its pairs as JSON instead of encoding
    #[arg(short, long)]
    decode: bool,

    /// How sequence element keys are written
    #[arg(long, value_enum, default_value_t = ArraysArg::Brackets)]
    arrays: ArraysArg,

    /// How booleans are written
    #[arg(long, value_enum, default_value_t = BoolsArg::Numeric)]
    bools: BoolsArg,

    /// Input file (defaults to stdin)
    input: Option<PathBuf>,
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    let mut buf = String::new();
    match &args.input {
        Some(path) => {
            let mut f = File::open(path)?;
            f.read_to_string(&mut buf)?;
        }
        None => {
            stdin().read_to_string(&mut buf)?;
        }
    }

    let array_encoding = match args.arrays {
        ArraysArg::Brackets => urlform::ArrayEncoding::Brackets,
        ArraysArg::NoBrackets => urlform::ArrayEncoding::NoBrackets,
    };
    let bool_encoding = match args.bools {
        BoolsArg::Numeric => urlform::BoolEncoding::Numeric,
        BoolsArg::Literal => urlform::BoolEncoding::Literal,
    };
    let options = urlform::Options { array_encoding, bool_encoding };
    log::debug!("options: {:?}", options);

    if args.decode {
        let pairs = urlform::decode::parse_pairs(buf.trim_end())?;
        println!("{}", serde_json::to_string(&pairs)?);
    } else {
        let value: serde_json::Value = serde_json::from_str(&buf)?;
        let out = urlform::FormEncoder::new(options).encode(&value)?;
        println!("{}", out);
    }

    Ok(())
}
