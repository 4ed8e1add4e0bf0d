//! RV64I Decode-Stage CLI.
//!
//! Front end for inspecting the decode stage from the command line.
//!
//! # Usage
//!
//! 1. **decode**: decodes one or more hex instruction words and prints the
//!    format tag, control signals and immediate of each.
//! 2. **hazard**: evaluates the load-use hazard check for one set of inputs.
//! 3. **table**: lists the instruction table in decode priority order.

use std::fs;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};

use rv_decode_core::config::Config;
use rv_decode_core::core::pipeline::hazards::HazardUnit;
use rv_decode_core::core::pipeline::latches::{IfIdEntry, RegWrite};
use rv_decode_core::core::pipeline::stages::DecodeStage;

/// Command-line arguments for the decode-stage inspector.
#[derive(Parser, Debug)]
#[command(author, version, about = "RV64I decode stage: control signals, immediates, load-use hazards")]
struct Args {
    /// TOML configuration file; built-in defaults are used when omitted.
    #[arg(short, long)]
    config: Option<String>,

    /// Emit JSON instead of text.
    #[arg(long)]
    json: bool,

    /// Log level spec passed to the logger (e.g. "info", "debug", "trace").
    #[arg(long, default_value = "warn")]
    log_level: String,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Decode instruction words given in hex (with or without 0x).
    Decode {
        #[arg(required = true)]
        words: Vec<String>,

        /// Print decode statistics after the listing.
        #[arg(long)]
        stats: bool,
    },
    /// Evaluate the load-use hazard check.
    Hazard {
        #[arg(long)]
        ex_mem_read: bool,
        #[arg(long)]
        ex_rd: usize,
        #[arg(long)]
        rs1: usize,
        #[arg(long)]
        rs2: usize,
    },
    /// List the instruction table.
    Table,
}

fn parse_word(s: &str) -> Result<u32> {
    let digits = s.trim_start_matches("0x").trim_start_matches("0X").replace('_', "");
    u32::from_str_radix(&digits, 16).with_context(|| format!("invalid instruction word '{}'", s))
}

fn load_config(path: Option<&str>) -> Result<Config> {
    match path {
        Some(path) => {
            let content = fs::read_to_string(path)
                .with_context(|| format!("Failed to read config '{}'", path))?;
            Ok(Config::from_toml(&content)?)
        }
        None => Ok(Config::default()),
    }
}

fn run_decode(config: &Config, words: &[String], json: bool, show_stats: bool) -> Result<()> {
    let mut regs = config.build_register_file()?;
    let mut stage = DecodeStage::from_config(config);

    let mut rows = Vec::with_capacity(words.len());
    for (i, word) in words.iter().enumerate() {
        let entry = IfIdEntry {
            pc: (i as u64) * 4,
            inst: parse_word(word)?,
        };
        rows.push(stage.decode_one(&mut regs, RegWrite::default(), &entry));
    }

    if json {
        println!("{}", serde_json::to_string_pretty(&rows)?);
    } else {
        for row in &rows {
            println!(
                "{:#010x}  {:<6} fmt={:?}({}) alu_src={:?} alu_op={:#04b} branch={} mem_write={} mem_read={} mem_to_reg={} imm={} ({:#x})",
                row.inst,
                row.mnemonic.unwrap_or("<nop>"),
                row.ctrl.format,
                row.ctrl.format.encoding(),
                row.ctrl.ex.alu_src,
                row.ctrl.ex.alu_op,
                row.ctrl.mem.branch,
                row.ctrl.mem.mem_write,
                row.ctrl.mem.mem_read,
                row.ctrl.wb.mem_to_reg,
                row.imm,
                row.imm
            );
        }
    }

    if show_stats {
        if json {
            println!("{}", serde_json::to_string_pretty(&stage.stats)?);
        } else {
            stage.stats.print();
        }
    }

    Ok(())
}

fn run_table(json: bool) -> Result<()> {
    let stage = DecodeStage::default();
    let table = stage.table();

    if json {
        let rows: Vec<_> = table
            .entries()
            .iter()
            .map(|(name, spec)| {
                serde_json::json!({
                    "mnemonic": name,
                    "opcode": spec.opcode,
                    "funct3": spec.funct3,
                    "funct7": spec.funct7,
                    "control": spec.control(),
                })
            })
            .collect();
        println!("{}", serde_json::to_string_pretty(&rows)?);
        return Ok(());
    }

    let wildcard = |f: Option<u32>, width: usize| match f {
        Some(v) => format!("{:0width$b}", v, width = width),
        None => "-".repeat(width),
    };
    for (name, spec) in table.entries() {
        println!(
            "{:<6} opcode={:07b} funct3={} funct7={} fmt={:?} alu_src={:?} alu_op={:02b} branch={} mem_write={} mem_read={} mem_to_reg={}",
            name,
            spec.opcode,
            wildcard(spec.funct3, 3),
            wildcard(spec.funct7, 7),
            spec.format,
            spec.alu_src,
            spec.alu_op,
            spec.branch,
            spec.mem_write,
            spec.mem_read,
            spec.mem_to_reg
        );
    }
    Ok(())
}

fn main() -> Result<()> {
    let args = Args::parse();
    let _logger = flexi_logger::Logger::try_with_str(&args.log_level)?.start()?;

    let config = load_config(args.config.as_deref())?;

    match &args.command {
        Command::Decode { words, stats } => run_decode(&config, words, args.json, *stats),
        Command::Hazard {
            ex_mem_read,
            ex_rd,
            rs1,
            rs2,
        } => {
            let unit = HazardUnit::new(config.pipeline.hazard_ignores_x0);
            let stall = unit.data_hazard(*ex_mem_read, *ex_rd, *rs1, *rs2);
            if args.json {
                println!("{}", serde_json::json!({ "data_hazard": stall }));
            } else {
                println!("data_hazard={}", stall);
            }
            Ok(())
        }
        Command::Table => run_table(args.json),
    }
}
