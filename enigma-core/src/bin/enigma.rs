//! Enigma CLI - Command-line interface for the rotor cipher machine.
//!
//! # Usage
//!
//! ```bash
//! # Encipher text with the default machine (I-II-III, AAA, rings AAA)
//! enigma text "attack at dawn"
//!
//! # Full key
//! enigma text "HELLO" --rotors II,IV,V --positions BLA --rings 2,21,12 --plugs "AV BS CG"
//!
//! # Encipher a file with a JSON key
//! enigma file orders.txt --config key.json -o orders.enc
//!
//! # Generate a random key
//! enigma keygen > key.json
//! ```

use std::fs;
use std::io::{self, Read};
use std::process::ExitCode;

use enigma_core::config::{parse_plugboard, parse_rotors, parse_settings};
use enigma_core::{EnigmaError, MachineConfig, Reflector, RotorKind};
use tracing::debug;
use tracing_subscriber::EnvFilter;

fn main() -> ExitCode {
    let mut args: Vec<String> = std::env::args().skip(1).collect();

    let verbose = take_flag(&mut args, &["-v", "--verbose"]);
    init_logging(verbose);

    if args.is_empty() {
        print_help();
        return ExitCode::SUCCESS;
    }

    match args[0].as_str() {
        "text" => cmd_text(&args[1..]),
        "file" => cmd_file(&args[1..]),
        "keygen" => cmd_keygen(),
        "catalogue" | "catalog" => cmd_catalogue(),
        "info" => cmd_info(),
        "--help" | "-h" | "help" => {
            print_help();
            ExitCode::SUCCESS
        }
        "--version" | "-V" => {
            println!("enigma {}", env!("CARGO_PKG_VERSION"));
            ExitCode::SUCCESS
        }
        cmd => {
            eprintln!("Unknown command: {cmd}");
            eprintln!("Run 'enigma --help' for usage");
            ExitCode::FAILURE
        }
    }
}

fn print_help() {
    println!(
        r#"Enigma - Rotor Cipher Machine

USAGE:
    enigma <COMMAND> [OPTIONS]

COMMANDS:
    text <data>        Encipher/decipher text ("-" reads stdin)
    file <file>        Encipher/decipher a text file
    keygen             Print a random key as JSON
    catalogue          List rotor wirings and notches
    info               Show machine information

OPTIONS:
    -r, --rotors <list>      Rotor order, left to right (default: I,II,III)
    -p, --positions <set>    Start positions, letters or numbers (default: AAA)
    -g, --rings <set>        Ring settings, letters or numbers (default: AAA)
    -s, --plugs <pairs>      Plugboard pairs, e.g. "AB CD EF"
    -c, --config <file>      JSON key file (options above override it)
    -o, --output <file>      Output file (file command)
    -v, --verbose            Debug logging on stderr (RUST_LOG overrides)
    -h, --help               Show help
    -V, --version            Show version

EXAMPLES:
    enigma text "HELLO WORLD"
    enigma text HELLO --rotors II,IV,V --positions BLA --rings 2,21,12 --plugs "AV BS CG"
    enigma keygen > key.json
    enigma file orders.txt -c key.json -o orders.enc"#
    );
}

fn init_logging(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .compact()
        .init();
}

fn cmd_text(args: &[String]) -> ExitCode {
    let (data, options) = match parse_args(args) {
        Ok(v) => v,
        Err(e) => {
            eprintln!("Error: {e}");
            return ExitCode::FAILURE;
        }
    };

    let data = match data {
        Some(d) if d == "-" => {
            let mut buf = String::new();
            if let Err(e) = io::stdin().read_to_string(&mut buf) {
                eprintln!("Error: {e}");
                return ExitCode::FAILURE;
            }
            buf
        }
        Some(d) => d,
        None => {
            eprintln!("Usage: enigma text <data> [OPTIONS]");
            return ExitCode::FAILURE;
        }
    };

    match options.machine_config().and_then(|c| enigma_core::encipher(&c, &data)) {
        Ok(output) => {
            println!("{}", output.trim_end_matches('\n'));
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn cmd_file(args: &[String]) -> ExitCode {
    let (file, options) = match parse_args(args) {
        Ok((Some(f), o)) => (f, o),
        Ok((None, _)) => {
            eprintln!("Error: File path required");
            return ExitCode::FAILURE;
        }
        Err(e) => {
            eprintln!("Error: {e}");
            return ExitCode::FAILURE;
        }
    };

    let output = options
        .output
        .clone()
        .unwrap_or_else(|| format!("{file}.enigma"));

    match process_file(&options, &file, &output) {
        Ok(()) => {
            println!("Processed: {file} -> {output}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn cmd_keygen() -> ExitCode {
    match MachineConfig::random().and_then(|c| c.to_json()) {
        Ok(json) => {
            println!("{json}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn cmd_catalogue() -> ExitCode {
    println!("Rotor  Wiring                      Notch");
    for kind in RotorKind::ALL {
        let def = kind.definition();
        let wiring: String = def.forward.iter().map(|&i| char::from(b'A' + i)).collect();
        println!(
            "{:<6} {wiring}  {}",
            def.name,
            char::from(b'A' + def.notch)
        );
    }
    println!();
    println!("UKW-B  {}", Reflector::ukw_b().wiring());
    ExitCode::SUCCESS
}

fn cmd_info() -> ExitCode {
    println!("Enigma - Rotor Cipher Machine");
    println!("=============================");
    println!("Version:     {}", env!("CARGO_PKG_VERSION"));
    println!("Rotors:      I-V (any order, any count)");
    println!("Reflector:   UKW-B");
    println!("Plugboard:   up to 13 pairs");
    println!("Stepping:    odometer with double step");
    println!();
    println!("Enciphering is self-inverse: run ciphertext through an");
    println!("identically configured machine to recover the plaintext.");
    ExitCode::SUCCESS
}

// Helper functions

#[derive(Debug, Default)]
struct Options {
    rotors: Option<String>,
    positions: Option<String>,
    rings: Option<String>,
    plugs: Option<String>,
    config: Option<String>,
    output: Option<String>,
}

impl Options {
    /// Start from the key file (or defaults), then apply explicit options.
    fn machine_config(&self) -> Result<MachineConfig, EnigmaError> {
        let mut config = match &self.config {
            Some(path) => {
                let json = fs::read_to_string(path).map_err(|e| {
                    EnigmaError::InvalidConfig(format!("cannot read {path}: {e}"))
                })?;
                MachineConfig::from_json(&json)?
            }
            None => MachineConfig::default(),
        };

        if let Some(rotors) = &self.rotors {
            config.rotors = parse_rotors(rotors)?;
            let count = config.rotors.len();
            // Defaults follow the rotor count unless given explicitly.
            if self.positions.is_none() {
                config.positions = vec![0; count];
            }
            if self.rings.is_none() {
                config.rings = vec![0; count];
            }
        }
        if let Some(positions) = &self.positions {
            config.positions = parse_settings(positions)?;
        }
        if let Some(rings) = &self.rings {
            config.rings = parse_settings(rings)?;
        }
        if let Some(plugs) = &self.plugs {
            config.plugboard = parse_plugboard(plugs)?;
        }

        config.validate()?;
        debug!(rotors = config.rotors.len(), "resolved machine configuration");
        Ok(config)
    }
}

fn parse_args(args: &[String]) -> Result<(Option<String>, Options), String> {
    let mut positional: Option<String> = None;
    let mut options = Options::default();

    let mut i = 0;
    while i < args.len() {
        let slot = match args[i].as_str() {
            "-r" | "--rotors" => Some(&mut options.rotors),
            "-p" | "--positions" => Some(&mut options.positions),
            "-g" | "--rings" => Some(&mut options.rings),
            "-s" | "--plugs" => Some(&mut options.plugs),
            "-c" | "--config" => Some(&mut options.config),
            "-o" | "--output" => Some(&mut options.output),
            _ => None,
        };
        match slot {
            Some(slot) => {
                i += 1;
                match args.get(i) {
                    Some(value) => *slot = Some(value.clone()),
                    None => return Err(format!("{} requires a value", args[i - 1])),
                }
            }
            None if positional.is_none() => positional = Some(args[i].clone()),
            None => return Err(format!("unexpected argument: {}", args[i])),
        }
        i += 1;
    }

    Ok((positional, options))
}

fn take_flag(args: &mut Vec<String>, names: &[&str]) -> bool {
    let before = args.len();
    args.retain(|a| !names.contains(&a.as_str()));
    args.len() != before
}

fn process_file(options: &Options, input: &str, output: &str) -> Result<(), Box<dyn std::error::Error>> {
    let config = options.machine_config()?;
    let text = fs::read_to_string(input)?;
    let processed = enigma_core::encipher(&config, &text)?;
    fs::write(output, processed)?;
    Ok(())
}
