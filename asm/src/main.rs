use std::fs::File;
use std::io::{Read, Write};
use std::path::Path;
use std::time::Instant;

use color_print::{cformat, cprintln};
use hackasm::{dump, error::Error};

const HELP_TEMPLATE: &str = "\
{before-help}{bin} {version}
  {about}

{usage-heading}
{tab}{usage}

{all-args}{after-help}";

#[derive(Debug, clap::Parser)]
#[clap(version, about, help_template = HELP_TEMPLATE)]
struct Args {
    /// Input file (Hack assembly)
    input: String,

    /// Output file [default: input with the extension replaced by .hack]
    #[clap(short, long)]
    output: Option<String>,

    /// Dump the listing and the symbol table
    #[clap(short, long)]
    debug: bool,
}

fn main() {
    use clap::Parser;

    let args: Args = Args::parse();
    let start = Instant::now();
    println!("Hack Assembler");

    let output = args.output.clone().unwrap_or_else(|| {
        Path::new(&args.input)
            .with_extension("hack")
            .to_string_lossy()
            .into_owned()
    });

    println!("1. Read File");
    println!("  < {}", args.input);
    let source = read_source(&args.input).unwrap_or_else(|err| fail(err));
    let raw: Vec<&str> = source.lines().collect();

    println!("2. Resolve Labels & Encode");
    let program = match hackasm::assemble(&raw) {
        Ok(program) => program,
        Err(diag) => {
            diag.print(&args.input, &raw);
            std::process::exit(1);
        }
    };
    for warning in &program.warnings {
        warning.print(&args.input, &raw);
    }

    if args.debug {
        dump::print_dump(&program);
        dump::print_symbols(&program);
    }

    println!("3. Write Binary");
    println!("  > {}", output);
    write_binary(&output, &program.to_text()).unwrap_or_else(|err| fail(err));

    cprintln!("<g,s>Finished</> {} -> {}", args.input, output);
    println!("  LOC: {}", program.len());
    println!("  runtime: {:.2?}", start.elapsed());
}

fn read_source(path: &str) -> Result<String, Error> {
    let mut file = File::open(path).map_err(|e| Error::FileOpen(path.to_string(), e))?;
    let mut source = String::new();
    file.read_to_string(&mut source)
        .map_err(|e| Error::FileRead(path.to_string(), e))?;
    Ok(source)
}

fn write_binary(path: &str, text: &str) -> Result<(), Error> {
    let mut file = File::create(path).map_err(|e| Error::FileCreate(path.to_string(), e))?;
    file.write_all(text.as_bytes())
        .map_err(|e| Error::FileWrite(path.to_string(), e))
}

fn fail(err: Error) -> ! {
    eprintln!("{}", cformat!("<r,s>{}</>", err));
    if let Some(source) = std::error::Error::source(&err) {
        eprintln!("  {}", source);
    }
    std::process::exit(1);
}
