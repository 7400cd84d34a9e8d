//! End-to-End Pipeline Scenarios.
//!
//! Short programs run on the full simulator, checked through architectural
//! state and the per-cycle output trace.

use pretty_assertions::assert_eq;
use rstest::rstest;
use rvpipe_core::core::pipeline::engine::CycleOutputs;
use rvpipe_core::core::pipeline::forwarding::ForwardSel;
use rvpipe_core::sim::RunOutcome;

use crate::common::builder::InstructionBuilder;
use crate::common::builder::instruction::asm;
use crate::common::harness::TestContext;

fn count(trace: &[CycleOutputs], pred: impl Fn(&CycleOutputs) -> bool) -> usize {
    trace.iter().filter(|out| pred(out)).count()
}

// ══════════════════════════════════════════════════════════
// 1. Load-use hazards
// ══════════════════════════════════════════════════════════

#[test]
fn load_use_stalls_once_and_sees_loaded_value() {
    let mut ctx = TestContext::new().load_program(&[
        asm().lw(2, 1, 0).build(),
        asm().add(3, 2, 2).build(),
    ]);
    ctx.write_data(0, 7);

    let trace = ctx.run(12);
    assert_eq!(count(&trace, |o| o.hazards.stall_f), 1);
    assert_eq!(ctx.get_reg(2), 7);
    assert_eq!(ctx.get_reg(3), 14);
}

#[test]
fn second_consumer_of_load_does_not_stall() {
    let mut ctx = TestContext::new().load_program(&[
        asm().lw(2, 1, 0).build(),
        asm().add(3, 2, 2).build(),
        asm().add(4, 2, 2).build(),
    ]);
    ctx.write_data(0, 7);

    let trace = ctx.run(14);
    let stalls: Vec<usize> = trace
        .iter()
        .enumerate()
        .filter(|(_, o)| o.hazards.stall_f)
        .map(|(cycle, _)| cycle)
        .collect();
    // The only stall is the cycle the load is in Execute with its first consumer in Decode.
    assert_eq!(stalls, vec![2]);
    assert!(trace[2].hazards.stall_d && trace[2].hazards.flush_e);
    assert_eq!(ctx.get_reg(3), 14);
    assert_eq!(ctx.get_reg(4), 14);
    assert_eq!(ctx.stats().stalls_data, 1);
}

// ══════════════════════════════════════════════════════════
// 2. Forwarding
// ══════════════════════════════════════════════════════════

#[test]
fn store_sees_forwarded_address_and_data() {
    let mut ctx = TestContext::new().load_program(&[
        asm().addi(5, 0, 25).build(),
        asm().addi(6, 0, 100).build(),
        asm().sw(5, 6, 0).build(),
    ]);
    let trace = ctx.run(10);

    let writes: Vec<(u32, u32)> = trace
        .iter()
        .filter(|o| o.mem.write_enable)
        .map(|o| (o.mem.addr, o.mem.write_data))
        .collect();
    assert_eq!(writes, vec![(100, 25)]);
    assert_eq!(ctx.read_data(100), 25);
}

#[test]
fn memory_stage_wins_over_writeback() {
    let mut ctx = TestContext::new().load_program(&[
        asm().addi(1, 0, 1).build(),
        asm().addi(1, 0, 2).build(),
        asm().add(2, 1, 1).build(),
    ]);
    let trace = ctx.run(10);

    // The add executes in cycle 4 with both writers of x1 still in flight.
    assert_eq!(trace[4].forwarding.a, ForwardSel::Memory);
    assert_eq!(trace[4].forwarding.b, ForwardSel::Memory);
    assert_eq!(ctx.get_reg(2), 4);
}

#[rstest]
#[case::adjacent(0, ForwardSel::Memory)]
#[case::one_between(1, ForwardSel::Writeback)]
#[case::two_between(2, ForwardSel::RegFile)]
#[case::three_between(3, ForwardSel::RegFile)]
fn dependency_at_each_distance(#[case] gap: usize, #[case] path: ForwardSel) {
    let mut program = vec![asm().addi(1, 0, 5).build()];
    program.extend(std::iter::repeat_n(asm().nop().build(), gap));
    program.push(asm().add(2, 1, 1).build());

    let mut ctx = TestContext::new().load_program(&program);
    let trace = ctx.run(12);

    assert_eq!(trace[3 + gap].forwarding.a, path);
    assert_eq!(ctx.get_reg(2), 10);
    assert_eq!(ctx.stats().stalls_data, 0);
}

// ══════════════════════════════════════════════════════════
// 3. Control hazards
// ══════════════════════════════════════════════════════════

#[test]
fn only_taken_branch_flushes_and_retires() {
    let mut ctx = TestContext::new().load_program(&[
        asm().beq(1, 0, 8).build(),
        asm().beq(0, 0, 8).build(),
        asm().addi(2, 0, 5).build(),
        asm().addi(3, 0, 6).build(),
    ]);
    ctx.set_reg(1, 1);
    let trace = ctx.run(12);

    // Not-taken branch in Execute: no redirect, nothing retired.
    assert!(!trace[2].pc_src);
    assert!(!trace[2].retired);
    assert!(!trace[2].hazards.flush_d);

    // Taken branch in Execute.
    assert!(trace[3].pc_src);
    assert_eq!(trace[3].pc_target, 12);
    assert!(trace[3].hazards.flush_d && trace[3].hazards.flush_e);
    assert_eq!(count(&trace, |o| o.hazards.flush_d), 1);

    assert_eq!(ctx.get_reg(2), 0);
    assert_eq!(ctx.get_reg(3), 6);
    // The taken branch at Execute, then the surviving addi at Writeback.
    assert_eq!(count(&trace, |o| o.retired), 2);
    assert_eq!(ctx.stats().flushes_control, 1);
}

#[test]
fn jump_discards_both_fetched_instructions() {
    let mut ctx = TestContext::new().load_program(&[
        asm().addi(1, 0, 1).build(),
        asm().jal(0, 12).build(),
        asm().addi(2, 0, 5).build(),
        asm().sw(1, 0, 0).build(),
        asm().addi(3, 0, 7).build(),
    ]);
    let outcome = ctx.run_to_completion();

    assert!(matches!(outcome, RunOutcome::Drained { .. }));
    assert_eq!(ctx.get_reg(2), 0);
    assert_eq!(ctx.read_data(0), 0);
    assert_eq!(ctx.stats().stores, 0);
    assert_eq!(ctx.get_reg(3), 7);
}

#[test]
fn jal_links_return_address() {
    let mut ctx = TestContext::new().load_program(&[
        asm().jal(1, 8).build(),
        asm().addi(5, 0, 1).build(),
        asm().addi(2, 1, 0).build(),
    ]);
    ctx.run_to_completion();

    assert_eq!(ctx.get_reg(1), 4);
    assert_eq!(ctx.get_reg(2), 4);
    assert_eq!(ctx.get_reg(5), 0);
    // The linking jump strobes at Execute and again at Writeback.
    assert_eq!(ctx.stats().instructions_retired, 3);
}

// ══════════════════════════════════════════════════════════
// 4. Zero register
// ══════════════════════════════════════════════════════════

#[test]
fn x0_never_written_or_forwarded() {
    let mut ctx = TestContext::new().load_program(&[
        asm().addi(0, 0, 5).build(),
        asm().add(1, 0, 0).build(),
        asm().lw(0, 0, 0).build(),
        asm().add(2, 0, 0).build(),
    ]);
    ctx.write_data(0, 9);
    let trace = ctx.run(12);

    assert_eq!(ctx.get_reg(0), 0);
    assert_eq!(ctx.get_reg(1), 0);
    assert_eq!(ctx.get_reg(2), 0);
    assert!(trace.iter().all(|o| o.forwarding.a == ForwardSel::RegFile));
    // Load-use detection compares raw register fields, so x0 still stalls.
    assert_eq!(ctx.stats().stalls_data, 1);
}

// ══════════════════════════════════════════════════════════
// 5. Custom ALU extension
// ══════════════════════════════════════════════════════════

type RType = fn(InstructionBuilder, u32, u32, u32) -> InstructionBuilder;

#[rstest]
#[case::min(InstructionBuilder::min, 0xFFFF_FFFB)]
#[case::max(InstructionBuilder::max, 3)]
#[case::minu(InstructionBuilder::minu, 3)]
#[case::maxu(InstructionBuilder::maxu, 0xFFFF_FFFB)]
#[case::andn(InstructionBuilder::andn, 0xFFFF_FFF8)]
#[case::orn(InstructionBuilder::orn, 0xFFFF_FFFF)]
#[case::xnor(InstructionBuilder::xnor, 0x0000_0007)]
#[case::rol(InstructionBuilder::rol, 0xFFFF_FFDF)]
#[case::ror(InstructionBuilder::ror, 0x7FFF_FFFF)]
fn extension_op_with_forwarded_operands(#[case] op: RType, #[case] expected: u32) {
    let mut ctx = TestContext::new().load_program(&[
        asm().addi(1, 0, -5).build(),
        asm().addi(2, 0, 3).build(),
        op(asm(), 3, 1, 2).build(),
    ]);
    ctx.run_to_completion();
    assert_eq!(ctx.get_reg(3), expected);
}

#[test]
fn abs_of_negative_and_min() {
    let mut ctx = TestContext::new().load_program(&[
        asm().addi(1, 0, -5).build(),
        asm().abs(2, 1).build(),
    ]);
    ctx.run_to_completion();
    assert_eq!(ctx.get_reg(2), 5);

    let mut ctx = TestContext::new().load_program(&[asm().abs(2, 1).build()]);
    ctx.set_reg(1, 0x8000_0000);
    ctx.run_to_completion();
    assert_eq!(ctx.get_reg(2), 0x8000_0000);
}
