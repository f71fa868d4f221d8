use anyhow::{bail, Result};
use i8080_disasm::{
    Disassembler, DisasmConfig, InstructionTable, LoggingConfig, Rom, DEFAULT_CONFIG_PATH, VERSION,
};
use log::{error, info};
use std::env;
use std::fs;
use std::io::{self, BufWriter};
use std::path::Path;

const USAGE: &str = "\
Usage: i8080-disasm [-h] FILE

Désassemble un binaire Intel 8080 vers la sortie standard.

Arguments:
  FILE        Fichier à désassembler

Options:
  -h, --help  Affiche cette aide";

/// Action demandée sur la ligne de commande
#[derive(Debug, PartialEq, Eq)]
enum Command {
    Help,
    Disassemble(String),
}

fn parse_args<I>(args: I) -> Result<Command>
where
    I: IntoIterator<Item = String>,
{
    let mut filename: Option<String> = None;

    for arg in args {
        if arg == "-h" || arg == "--help" {
            return Ok(Command::Help);
        } else if arg.starts_with('-') && arg.len() > 1 {
            bail!("Option inconnue: {}", arg);
        } else if filename.is_some() {
            bail!("Argument en trop: {}", arg);
        }
        filename = Some(arg);
    }

    match filename {
        Some(filename) => Ok(Command::Disassemble(filename)),
        None => bail!("Fichier à désassembler manquant"),
    }
}

fn init_logging(config: &LoggingConfig) -> Result<()> {
    let env = env_logger::Env::default().default_filter_or(config.level.as_str());
    let mut builder = env_logger::Builder::from_env(env);

    if let Some(file) = &config.file {
        let path = Path::new(file);
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)?;
        }
        builder.target(env_logger::Target::Pipe(Box::new(fs::File::create(path)?)));
    }

    builder.try_init()?;
    Ok(())
}

fn main() -> Result<()> {
    let filename = match parse_args(env::args().skip(1)) {
        Ok(Command::Help) => {
            println!("{}", USAGE);
            return Ok(());
        }
        Ok(Command::Disassemble(filename)) => filename,
        Err(e) => {
            eprintln!("{}", USAGE);
            return Err(e);
        }
    };

    let config = DisasmConfig::load_or_default(DEFAULT_CONFIG_PATH);
    init_logging(&config.logging)?;
    info!("Démarrage de i8080-disasm v{}", VERSION);

    // Table et ROM sont chargées avant toute sortie
    let table = InstructionTable::load(&config.table.path).inspect_err(|e| error!("{}", e))?;
    let rom = Rom::from_file(&filename).inspect_err(|e| error!("{}", e))?;

    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    let stats = Disassembler::new(&table, rom.into_bytes()).run(&mut out)?;

    info!(
        "{} instructions désassemblées ({} octets)",
        stats.instructions, stats.bytes
    );
    Ok(())
}
