//! Integration tests for the decode stage and register file.

use rv_decode_core::core::arch::{Gpr, RegisterFile};
use rv_decode_core::core::pipeline::latches::*;
use rv_decode_core::core::pipeline::signals::AluSrc;
use rv_decode_core::core::pipeline::stages::{DecodeOutcome, DecodeStage};
use rv_decode_core::core::pipeline::traits::PipelineLatch;
use rv_decode_core::common::ConfigError;
use rv_decode_core::isa::InstFormat;

const ADD_X5_X1_X2: u32 = 0x002082B3;
const LW_X6_8_X2: u32 = 0x00812303;
const ADD_X7_X6_X1: u32 = 0x001303B3;
const ADDI_X8_X0_5: u32 = 0x00500413;

fn fetched(pc: u64, inst: u32) -> IfId {
    IfId {
        entries: vec![IfIdEntry { pc, inst }],
    }
}

/// Tests register file x0 hardwiring and write/read.
#[test]
fn test_gpr_read_write() {
    let mut regs = Gpr::default();
    assert_eq!(regs.len(), 32);
    assert_eq!(regs.index_width(), 5);

    for i in 0..32 {
        regs.write(i, (i as u64) * 0x0101_0101_0101_0101);
    }
    assert_eq!(regs.read(0), 0);
    for i in 1..32 {
        assert_eq!(regs.read(i), (i as u64) * 0x0101_0101_0101_0101);
    }
}

/// Tests register file sizing rules.
#[test]
fn test_gpr_sizing() {
    assert_eq!(Gpr::new(0).unwrap_err(), ConfigError::EmptyRegisterFile);
    assert_eq!(
        Gpr::new(64).unwrap_err(),
        ConfigError::RegisterCountTooLarge(64)
    );

    let mut small = Gpr::new(16).unwrap();
    assert_eq!(small.index_width(), 4);
    small.write(20, 7);
    assert_eq!(small.read(20), 0);
    small.write(15, 7);
    assert_eq!(small.read(15), 7);

    let mut odd = Gpr::new(24).unwrap();
    assert_eq!(odd.len(), 24);
    assert_eq!(odd.index_width(), 5);
    odd.write(23, 3);
    assert_eq!(odd.read(23), 3);
    odd.write(24, 3);
    assert_eq!(odd.read(24), 0);
}

/// Tests that a single decode reads operands and fills the ID/EX entry.
#[test]
fn test_decode_one_reads_operands() {
    let mut regs = Gpr::default();
    regs.write(1, 10);
    regs.write(2, 32);

    let mut stage = DecodeStage::default();
    let out = stage.decode_one(
        &mut regs,
        RegWrite::default(),
        &IfIdEntry {
            pc: 0x80,
            inst: ADD_X5_X1_X2,
        },
    );

    assert_eq!(out.pc, 0x80);
    assert_eq!(out.inst, ADD_X5_X1_X2);
    assert_eq!((out.rd, out.rs1, out.rs2), (5, 1, 2));
    assert_eq!((out.rs1_data, out.rs2_data), (10, 32));
    assert_eq!(out.ctrl.format, InstFormat::R);
    assert_eq!(out.ctrl.ex.alu_src, AluSrc::Reg2);
    assert_eq!(out.imm, 0);
    assert_eq!(out.mnemonic, Some("add"));
}

/// Tests that a same-cycle write-back is visible to the operand read.
#[test]
fn test_decode_one_write_through() {
    let mut regs = Gpr::default();
    let mut stage = DecodeStage::default();

    let out = stage.decode_one(
        &mut regs,
        RegWrite::new(1, 0xDEAD),
        &IfIdEntry {
            pc: 0,
            inst: ADD_X5_X1_X2,
        },
    );
    assert_eq!(out.rs1_data, 0xDEAD);

    // Disabled port writes nothing.
    let out = stage.decode_one(
        &mut regs,
        RegWrite {
            addr: 2,
            en: false,
            data: 1,
        },
        &IfIdEntry {
            pc: 4,
            inst: ADD_X5_X1_X2,
        },
    );
    assert_eq!(out.rs2_data, 0);
}

/// Tests a load followed by a dependent use: one stall, then advance.
#[test]
fn test_tick_load_use_stall() {
    let mut regs = Gpr::default();
    let mut stage = DecodeStage::default();
    let mut id_ex = IdEx::default();

    let mut if_id = fetched(0, LW_X6_8_X2);
    assert_eq!(
        stage.tick(&mut regs, RegWrite::default(), &mut if_id, &mut id_ex),
        DecodeOutcome::Advanced(1)
    );
    assert!(if_id.is_empty());
    assert!(id_ex.entries[0].ctrl.mem.mem_read);
    assert_eq!(id_ex.entries[0].rd, 6);
    assert_eq!(id_ex.entries[0].imm, 8);

    let mut if_id = fetched(4, ADD_X7_X6_X1);
    assert_eq!(
        stage.tick(&mut regs, RegWrite::default(), &mut if_id, &mut id_ex),
        DecodeOutcome::Stalled
    );
    assert!(id_ex.is_empty());
    assert_eq!(if_id.entries.len(), 1);

    assert_eq!(
        stage.tick(&mut regs, RegWrite::default(), &mut if_id, &mut id_ex),
        DecodeOutcome::Advanced(1)
    );
    assert_eq!(id_ex.entries[0].mnemonic, Some("add"));
    assert_eq!(stage.stats.stalls_load_use, 1);
    assert_eq!(stage.stats.decoded, 2);
    assert_eq!(stage.stats.inst_load, 1);
}

/// Tests that an independent instruction after a load does not stall.
#[test]
fn test_tick_independent_after_load() {
    let mut regs = Gpr::default();
    let mut stage = DecodeStage::default();
    let mut id_ex = IdEx::default();

    let mut if_id = fetched(0, LW_X6_8_X2);
    stage.tick(&mut regs, RegWrite::default(), &mut if_id, &mut id_ex);

    let mut if_id = fetched(4, ADDI_X8_X0_5);
    assert_eq!(
        stage.tick(&mut regs, RegWrite::default(), &mut if_id, &mut id_ex),
        DecodeOutcome::Advanced(1)
    );
    assert_eq!(id_ex.entries[0].imm, 5);
    assert_eq!(stage.stats.stalls_load_use, 0);
}

/// Tests that an empty IF/ID latch sends a bubble.
#[test]
fn test_tick_idle() {
    let mut regs = Gpr::default();
    let mut stage = DecodeStage::default();
    let mut id_ex = IdEx {
        entries: vec![IdExEntry::default()],
    };
    let mut if_id = IfId::default();

    assert_eq!(
        stage.tick(&mut regs, RegWrite::new(3, 9), &mut if_id, &mut id_ex),
        DecodeOutcome::Idle
    );
    assert!(id_ex.is_empty());
    // Write-back still lands while idle.
    assert_eq!(regs.read(3), 9);
}

/// Tests that unmatched words flow through the stage as nops and are counted.
#[test]
fn test_tick_unmatched_word() {
    let mut regs = Gpr::default();
    let mut stage = DecodeStage::default();
    let mut id_ex = IdEx::default();
    let mut if_id = IfId {
        entries: vec![
            IfIdEntry {
                pc: 0,
                inst: 0xFFFF_FFFF,
            },
            IfIdEntry {
                pc: 4,
                inst: ADD_X5_X1_X2,
            },
        ],
    };

    assert_eq!(
        stage.tick(&mut regs, RegWrite::default(), &mut if_id, &mut id_ex),
        DecodeOutcome::Advanced(2)
    );
    assert!(id_ex.entries[0].ctrl.is_nop());
    assert_eq!(id_ex.entries[0].imm, 0);
    assert_eq!(id_ex.entries[0].mnemonic, None);
    assert_eq!(stage.stats.unmatched, 1);
    assert_eq!(stage.stats.format_r, 1);
}
