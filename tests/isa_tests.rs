//! Integration tests for instruction field extraction, format tags and the instruction table.

use rv_decode_core::common::log2_ceil;
use rv_decode_core::core::pipeline::signals::AluSrc;
use rv_decode_core::isa::*;

/// Tests instruction opcode extraction.
#[test]
fn test_instruction_bits_opcode() {
    let inst = 0x00008067u32;
    assert_eq!(inst.opcode(), 0x67);
}

/// Tests destination and source register extraction.
#[test]
fn test_instruction_bits_registers() {
    // add x5, x1, x2
    let inst = 0x002082B3u32;
    assert_eq!(inst.rd(), 5);
    assert_eq!(inst.rs1(), 1);
    assert_eq!(inst.rs2(), 2);
}

/// Tests funct3 and funct7 extraction.
#[test]
fn test_instruction_bits_funct() {
    // sub x3, x4, x5
    let inst = 0x405201B3u32;
    assert_eq!(inst.funct3(), 0);
    assert_eq!(inst.funct7(), 0b0100000);

    // srai x1, x1, 3
    let inst = 0x4030D093u32;
    assert_eq!(inst.funct3(), 0b101);
    assert_eq!(inst.funct7(), 0b0100000);
}

/// Tests single-bit and inclusive-range extraction.
#[test]
fn test_instruction_bits_ranges() {
    let inst = 0x8000_0001u32;
    assert_eq!(inst.bit(31), 1);
    assert_eq!(inst.bit(0), 1);
    assert_eq!(inst.bit(30), 0);
    assert_eq!(inst.bits(31, 0), inst);
    assert_eq!(0xABCD_1234u32.bits(15, 8), 0x12);
    assert_eq!(0xABCD_1234u32.bits(31, 28), 0xA);
}

/// Tests format tag encodings and width.
#[test]
fn test_format_encoding() {
    for (i, fmt) in InstFormat::ALL.iter().enumerate() {
        assert_eq!(fmt.encoding() as usize, i);
        assert_eq!(InstFormat::from_encoding(i as u8), Some(*fmt));
    }
    assert_eq!(InstFormat::from_encoding(6), None);
    assert_eq!(InstFormat::from_encoding(7), None);
    assert_eq!(InstFormat::tag_width(), 3);
    assert_eq!(InstFormat::default(), InstFormat::R);
}

/// Tests the ceil(log2) helper used for bundle widths.
#[test]
fn test_log2_ceil() {
    assert_eq!(log2_ceil(0), 0);
    assert_eq!(log2_ceil(1), 0);
    assert_eq!(log2_ceil(2), 1);
    assert_eq!(log2_ceil(6), 3);
    assert_eq!(log2_ceil(8), 3);
    assert_eq!(log2_ceil(16), 4);
    assert_eq!(log2_ceil(32), 5);
    assert_eq!(log2_ceil(33), 6);
}

/// Tests that the table holds every supported mnemonic in priority order.
#[test]
fn test_table_order() {
    let names: Vec<&str> = INSTRUCTIONS.iter().map(|(name, _)| *name).collect();
    assert_eq!(
        names,
        vec![
            "add", "sub", "sll", "xor", "srl", "or", "and", "lb", "lh", "lw", "ld", "lbu", "lhu",
            "lwu", "addi", "slli", "xori", "srli", "srai", "ori", "andi", "jalr", "sb", "sh", "sw",
            "sd", "beq", "bne", "blt", "bge", "bltu", "bgeu", "lui", "jal",
        ]
    );

    let table = InstructionTable::rv64i();
    assert_eq!(table.len(), 34);
    assert!(!table.is_empty());
}

/// Tests mnemonic lookup and wildcard fields.
#[test]
fn test_table_lookup() {
    let table = InstructionTable::default();

    let lw = table.lookup("lw").unwrap();
    assert_eq!(lw.opcode, opcodes::OP_LOAD);
    assert_eq!(lw.funct3, Some(0b010));
    assert_eq!(lw.funct7, None);
    assert_eq!(lw.format, InstFormat::I);
    assert!(lw.mem_read);
    assert!(lw.mem_to_reg);

    let lui = table.lookup("lui").unwrap();
    assert_eq!(lui.funct3, None);
    assert_eq!(lui.funct7, None);

    let srai = table.lookup("srai").unwrap();
    assert_eq!(srai.funct7, Some(0b0100000));
    assert_eq!(srai.alu_src, AluSrc::Imm);

    assert_eq!(table.lookup("sd").unwrap().funct3, Some(0b011));
    assert!(table.lookup("mul").is_none());
}

/// Tests that no two table entries can match the same supported encoding.
#[test]
fn test_table_entries_mutually_exclusive() {
    for (i, (name_a, a)) in INSTRUCTIONS.iter().enumerate() {
        for (name_b, b) in INSTRUCTIONS.iter().skip(i + 1) {
            if a.opcode != b.opcode {
                continue;
            }
            let f3_overlap = match (a.funct3, b.funct3) {
                (Some(x), Some(y)) => x == y,
                _ => true,
            };
            let f7_overlap = match (a.funct7, b.funct7) {
                (Some(x), Some(y)) => x == y,
                _ => true,
            };
            assert!(
                !(f3_overlap && f7_overlap),
                "{} and {} overlap",
                name_a,
                name_b
            );
        }
    }
}

/// Tests the table predicate against wildcard and exact fields.
#[test]
fn test_spec_matches() {
    let table = InstructionTable::rv64i();
    let addi = table.lookup("addi").unwrap();
    // addi ignores funct7, so any upper immediate bits still match.
    assert!(addi.matches(0x00000013));
    assert!(addi.matches(0xFFF00013));
    assert!(!addi.matches(0x00001013));

    let slli = table.lookup("slli").unwrap();
    assert!(slli.matches(0x00309093));
    assert!(!slli.matches(0x40309093));
}
