//! tex2mml - translate TeX math fragments into Presentation MathML.
//!
//! A command-line filter: reads TeX math from the named files (or standard
//! input) and writes one MathML document per input to standard output or to
//! the file given with `-o`.

use std::fs::File;
use std::io::{self, BufWriter, Read, Write};
use std::process;

use tex2mml::{write_mathml, DisplayMode, RenderConfig};

const USAGE: &str = "usage: tex2mml [-b] [-d MODE] [-o FILE] [FILE ...]

  -b       render in block (display) mode
  -d MODE  set the display mode explicitly: inline or block
  -o FILE  write output to FILE instead of standard output
  -h       show this help";

fn main() {
    let args: Vec<String> = std::env::args().skip(1).collect();

    let mut config = RenderConfig::default();
    let mut output: Option<String> = None;
    let mut files: Vec<String> = Vec::new();

    let mut i = 0;
    while i < args.len() {
        let arg = &args[i];
        if arg.starts_with('-') && arg.len() > 1 {
            for flag in arg[1..].chars() {
                match flag {
                    'b' => config.display_mode = DisplayMode::Block,
                    'd' => {
                        i += 1;
                        let mode = args.get(i).map(|arg| arg.parse::<DisplayMode>());
                        match mode {
                            Some(Ok(mode)) => config.display_mode = mode,
                            Some(Err(err)) => usage_error(&err.to_string()),
                            None => usage_error("-d requires a display mode"),
                        }
                    }
                    'o' => {
                        i += 1;
                        match args.get(i) {
                            Some(path) => output = Some(path.clone()),
                            None => usage_error("-o requires a file name"),
                        }
                    }
                    'h' => {
                        println!("{}", USAGE);
                        return;
                    }
                    other => usage_error(&format!("unknown option -{}", other)),
                }
            }
        } else {
            files.push(arg.clone());
        }
        i += 1;
    }

    let status = match output {
        Some(path) => match File::create(&path) {
            Ok(file) => run(&files, BufWriter::new(file), config),
            Err(err) => {
                eprintln!("tex2mml: {}: {}", path, err);
                1
            }
        },
        None => run(&files, BufWriter::new(io::stdout().lock()), config),
    };
    process::exit(status);
}

/// Translate every input in order. Unreadable files are reported and
/// skipped; the exit status reflects whether anything failed.
fn run<W: Write>(files: &[String], mut writer: W, config: RenderConfig) -> i32 {
    let mut status = 0;

    if files.is_empty() {
        match read_stdin() {
            Ok(input) => {
                if let Err(err) = write_mathml(&mut writer, &input, config) {
                    eprintln!("tex2mml: stdout: {}", err);
                    status = 1;
                }
            }
            Err(err) => {
                eprintln!("tex2mml: stdin: {}", err);
                status = 1;
            }
        }
    }

    for path in files {
        let input = match std::fs::read(path) {
            Ok(bytes) => String::from_utf8_lossy(&bytes).into_owned(),
            Err(err) => {
                eprintln!("tex2mml: {}: {}", path, err);
                status = 1;
                continue;
            }
        };
        if let Err(err) = write_mathml(&mut writer, &input, config) {
            eprintln!("tex2mml: stdout: {}", err);
            status = 1;
        }
    }

    if let Err(err) = writer.flush() {
        eprintln!("tex2mml: {}", err);
        status = 1;
    }
    status
}

fn read_stdin() -> io::Result<String> {
    let mut bytes = Vec::new();
    io::stdin().lock().read_to_end(&mut bytes)?;
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}

fn usage_error(message: &str) -> ! {
    eprintln!("tex2mml: {}\n{}", message, USAGE);
    process::exit(2);
}
