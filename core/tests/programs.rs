use pinocho_core::{Chip8, Config, Instruction, KeyCode, MachineError, Opcode, Status, Step};

fn load(program: &[u8]) -> Chip8 {
    let mut chip8 = Chip8::seeded(0);
    chip8.load_program(program).unwrap();
    chip8
}

fn run_for(chip8: &mut Chip8, steps: usize) {
    for _ in 0..steps {
        chip8.step().unwrap();
    }
}

#[test]
fn multiplies_by_repeated_addition() {
    let mut chip8 = load(&[
        0x60, 0x00, // V0 = 0
        0x61, 0x05, // V1 = 5
        0x70, 0x03, // V0 += 3
        0x71, 0xFF, // V1 -= 1
        0x31, 0x00, // skip if V1 == 0
        0x12, 0x04, // jump 0x204
        0x12, 0x0C, // halt
    ]);
    run_for(&mut chip8, 100);
    assert_eq!(chip8.registers().get(0x0), 15);
    assert_eq!(chip8.registers().get(0x1), 0);
    assert_eq!(chip8.registers().get(0xF), 0);
    assert_eq!(chip8.registers().get_pc(), 0x20C);
}

#[test]
fn returns_from_subroutine() {
    let mut chip8 = load(&[
        0x22, 0x06, // call 0x206
        0x62, 0x01, // V2 = 1
        0x12, 0x04, // halt
        0x61, 0x07, // V1 = 7
        0x00, 0xEE, // return
    ]);
    run_for(&mut chip8, 5);
    assert_eq!(chip8.registers().get(0x1), 7);
    assert_eq!(chip8.registers().get(0x2), 1);
    assert_eq!(chip8.stack_depth(), 0);
    assert_eq!(chip8.registers().get_pc(), 0x204);
}

#[test]
fn draws_decimal_digits_of_a_register() {
    let mut chip8 = load(&[
        0x60, 0x7B, // V0 = 123
        0xA3, 0x00, // I = 0x300
        0xF0, 0x33, // BCD V0
        0xF2, 0x65, // V0..=V2 = mem[I..]
        0x63, 0x00, // V3 = 0
        0xF2, 0x29, // I = sprite for V2
        0xD3, 0x35, // draw at (0, 0)
    ]);
    run_for(&mut chip8, 7);
    assert_eq!(chip8.registers().v()[..3], [1, 2, 3]);
    assert_eq!(chip8.registers().get_addr(), 15);

    // the 3 sprite
    let frame = chip8.display_snapshot();
    assert_eq!(frame[0][..4], [1, 1, 1, 1]);
    assert_eq!(frame[1][..4], [0, 0, 0, 1]);
    assert_eq!(frame[2][..4], [1, 1, 1, 1]);
}

#[test]
fn waits_for_a_key_then_continues() {
    let config = Config {
        seed: Some(1),
        ..Config::default()
    };
    let mut chip8 = Chip8::from_config(&config);
    chip8
        .load_program(&[0xF4, 0x0A, 0x65, 0x01])
        .unwrap();

    assert_eq!(chip8.step(), Ok(Step::AwaitingKey));
    assert_eq!(chip8.step(), Ok(Step::AwaitingKey));
    chip8.key_press(KeyCode::new(0x9).unwrap());
    assert_eq!(
        chip8.step(),
        Ok(Step::Executed(Instruction::WaitKey { x: 0x4 }))
    );
    assert_eq!(
        chip8.step(),
        Ok(Step::Executed(Instruction::Load { x: 0x5, kk: 0x1 }))
    );
    assert_eq!(chip8.registers().get(0x4), 0x9);
    assert_eq!(chip8.status(), &Status::Ready);
}

#[test]
fn rejects_loads_past_end_of_memory() {
    let mut chip8 = Chip8::seeded(0);
    assert_eq!(
        chip8.load(&[0xAA, 0xBB], 0xFFF),
        Err(MachineError::OutOfRange {
            address: 0xFFF,
            len: 2
        })
    );
    assert_eq!(chip8.memory().read(0xFFF), 0x0);
    assert!(chip8.load(&[0xAA], 0xFFF).is_ok());
}

#[test]
fn stays_faulted_until_reset() {
    let mut chip8 = load(&[0x00, 0xEE]);
    let error = MachineError::StackUnderflow { depth: 0 };
    assert_eq!(chip8.step(), Err(error.clone()));
    assert_eq!(chip8.step(), Err(error));

    chip8.reset();
    chip8.load_program(&[0x60, 0x01]).unwrap();
    run_for(&mut chip8, 1);
    assert_eq!(chip8.registers().get(0x0), 0x1);
}

#[test]
fn disassembles_instructions() {
    let listing: Vec<String> = [0x00E0, 0xA22A, 0xD015, 0xF033]
        .iter()
        .filter_map(|&word| Instruction::decode(Opcode(word)))
        .map(|instruction| instruction.to_string())
        .collect();
    assert_eq!(listing.len(), 4);
    assert_eq!(listing[0], "CLS");
    assert_eq!(listing[1], "LD I, 0x22A");
}
