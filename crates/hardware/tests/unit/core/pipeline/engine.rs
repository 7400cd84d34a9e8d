//! Synchronous Step Tests.
//!
//! Drives `step` directly to check the per-latch load/hold/flush choices and
//! that a faulting step leaves its input untouched.

use rvpipe_core::common::error::Fault;
use rvpipe_core::core::arch::gpr::Gpr;
use rvpipe_core::core::pipeline::engine::{PipelineState, step};
use rvpipe_core::core::pipeline::latches::{IdEx, IfId};
use rvpipe_core::core::pipeline::traits::PipelineLatch;
use rvpipe_core::soc::memory::WordMemory;

use crate::common::builder::instruction::asm;
use crate::common::builder::pipeline_state::{id_ex_load, if_id};

fn memories(program: &[u32]) -> (WordMemory, WordMemory) {
    (
        WordMemory::from_words(64, program).unwrap(),
        WordMemory::new(64),
    )
}

#[test]
fn reset_state_is_all_bubbles() {
    let s = PipelineState::reset();
    assert_eq!(s.pc, 0);
    assert!(s.if_id.is_bubble());
    assert!(s.id_ex.is_bubble());
    assert!(s.ex_mem.is_bubble());
    assert!(s.mem_wb.is_bubble());
    assert_eq!(s, PipelineState::default());
}

#[test]
fn instructions_advance_one_stage_per_cycle() {
    let add = asm().addi(1, 0, 5).build();
    let (imem, dmem) = memories(&[add]);
    let regs = Gpr::new();

    let (s1, _) = step(&PipelineState::reset(), &regs, &imem, &dmem).unwrap();
    assert_eq!(s1.pc, 4);
    assert_eq!(s1.if_id.inst, add);

    let (s2, _) = step(&s1, &regs, &imem, &dmem).unwrap();
    assert_eq!(s2.id_ex.inst, add);
    assert!(s2.if_id.is_bubble());

    let (s3, _) = step(&s2, &regs, &imem, &dmem).unwrap();
    assert_eq!(s3.ex_mem.alu_result, 5);

    let (s4, _) = step(&s3, &regs, &imem, &dmem).unwrap();
    let (_, out) = step(&s4, &regs, &imem, &dmem).unwrap();
    assert!(out.reg_write.enable);
    assert_eq!((out.reg_write.rd, out.reg_write.value), (1, 5));
}

#[test]
fn load_use_holds_pc_and_decode_and_bubbles_execute() {
    let consumer = asm().add(3, 2, 2).build();
    let (imem, dmem) = memories(&[0, 0, 0, 0, 0x13]);
    let state = PipelineState {
        pc: 16,
        if_id: if_id(12, consumer),
        id_ex: id_ex_load(2),
        ..PipelineState::reset()
    };
    let (next, out) = step(&state, &Gpr::new(), &imem, &dmem).unwrap();
    assert!(out.hazards.stall_f && out.hazards.stall_d && out.hazards.flush_e);
    assert_eq!(next.pc, 16);
    assert_eq!(next.if_id, state.if_id);
    assert_eq!(next.id_ex, IdEx::default());
    // The load itself still advances.
    assert_eq!(next.ex_mem.rd, 2);
}

#[test]
fn taken_jump_flushes_fetch_and_decode_latches() {
    let jal = asm().jal(0, 40).build();
    let (imem, dmem) = memories(&[]);
    let mut decoded = IdEx::default();
    decoded.pc = 8;
    decoded.pc_plus4 = 12;
    decoded.inst = jal;
    decoded.imm = 40;
    decoded.ctrl.jump = true;
    let state = PipelineState {
        pc: 16,
        if_id: if_id(12, asm().addi(5, 0, 1).build()),
        id_ex: decoded,
        ..PipelineState::reset()
    };
    let (next, out) = step(&state, &Gpr::new(), &imem, &dmem).unwrap();
    assert!(out.pc_src);
    assert!(out.hazards.flush_d && out.hazards.flush_e);
    assert_eq!(next.pc, 48);
    assert_eq!(next.if_id, IfId::default());
    assert_eq!(next.id_ex, IdEx::default());
}

#[test]
fn fault_leaves_input_state_untouched() {
    let (imem, dmem) = memories(&[]);
    let fault = Fault::IllegalInstruction {
        pc: 4,
        inst: 0xFFFF_FFFF,
    };
    let state = PipelineState {
        id_ex: IdEx {
            fault: Some(fault),
            ..IdEx::default()
        },
        ..PipelineState::reset()
    };
    let before = state;
    assert_eq!(step(&state, &Gpr::new(), &imem, &dmem), Err(fault));
    assert_eq!(state, before);
}

#[test]
fn flush_resets_latch() {
    let mut latch = if_id(8, 0x1234);
    latch.flush();
    assert!(latch.is_bubble());
}
