use rand::RngCore;

use crate::chip8::{Chip8, Status};
use crate::constants::{FLAG_REGISTER, SPRITE_HEIGHT, SPRITE_SHEET_START};
use crate::error::MachineError;
use crate::instruction::Instruction;
use crate::timers::Timer;

/// Applies `instruction` to the machine.
///
/// The program counter already points past the instruction. Operations that can fail
/// check before mutating anything, and every operation that produces a flag writes VF
/// last so the flag wins when VF is also the destination.
pub fn execute(chip8: &mut Chip8, instruction: Instruction) -> Result<(), MachineError> {
    use Instruction::*;

    match instruction {
        Sys { addr } => sys(addr),
        Cls => clr(chip8),
        Ret => rts(chip8)?,
        Jump { addr } => jump(chip8, addr),
        Call { addr } => call(chip8, addr)?,
        SkipEq { x, kk } => ske(chip8, x, kk),
        SkipNe { x, kk } => skne(chip8, x, kk),
        SkipEqReg { x, y } => skre(chip8, x, y),
        Load { x, kk } => load(chip8, x, kk),
        Add { x, kk } => add(chip8, x, kk),
        Move { x, y } => mv(chip8, x, y),
        Or { x, y } => or(chip8, x, y),
        And { x, y } => and(chip8, x, y),
        Xor { x, y } => xor(chip8, x, y),
        AddReg { x, y } => add_reg(chip8, x, y),
        Sub { x, y } => sub(chip8, x, y),
        ShiftRight { x, .. } => shr(chip8, x),
        SubN { x, y } => subn(chip8, x, y),
        ShiftLeft { x, .. } => shl(chip8, x),
        SkipNeReg { x, y } => skrne(chip8, x, y),
        LoadI { addr } => loadi(chip8, addr),
        JumpV0 { addr } => jumpi(chip8, addr),
        Rand { x, kk } => rand(chip8, x, kk),
        Draw { x, y, n } => draw(chip8, x, y, n),
        SkipPressed { x } => skpr(chip8, x),
        SkipNotPressed { x } => skup(chip8, x),
        LoadDelay { x } => lddt(chip8, x),
        WaitKey { x } => keyd(chip8, x),
        SetDelay { x } => setdt(chip8, x),
        SetSound { x } => setst(chip8, x),
        AddI { x } => addi(chip8, x),
        LoadSprite { x } => ldspr(chip8, x),
        Bcd { x } => bcd(chip8, x),
        Store { x } => stor(chip8, x),
        Read { x } => read(chip8, x),
    }
    Ok(())
}

/// pc += 2 when `condition` holds
fn skip_if(chip8: &mut Chip8, condition: bool) {
    if condition {
        let pc = chip8.registers.get_pc();
        chip8.registers.set_pc(pc.wrapping_add(2));
    }
}

fn flag(chip8: &mut Chip8, set: bool) {
    chip8.registers.set(FLAG_REGISTER, set as u8);
}

/// native routine; only meaningful on the original hardware
fn sys(addr: u16) {
    log::warn!("ignoring SYS {:#05X}", addr);
}

/// clear
fn clr(chip8: &mut Chip8) {
    chip8.display.clear();
}

/// PC = STACK.pop()
fn rts(chip8: &mut Chip8) -> Result<(), MachineError> {
    let addr = chip8.stack.pop()?;
    chip8.registers.set_pc(addr);
    Ok(())
}

/// PC = addr
fn jump(chip8: &mut Chip8, addr: u16) {
    chip8.registers.set_pc(addr);
}

/// STACK.push(PC); PC = addr
fn call(chip8: &mut Chip8, addr: u16) -> Result<(), MachineError> {
    chip8.stack.push(chip8.registers.get_pc())?;
    chip8.registers.set_pc(addr);
    Ok(())
}

/// if Vx == kk then pc += 2
fn ske(chip8: &mut Chip8, x: u8, kk: u8) {
    let condition = chip8.registers.get(x) == kk;
    skip_if(chip8, condition);
}

/// if Vx != kk then pc += 2
fn skne(chip8: &mut Chip8, x: u8, kk: u8) {
    let condition = chip8.registers.get(x) != kk;
    skip_if(chip8, condition);
}

/// if Vx == Vy then pc += 2
fn skre(chip8: &mut Chip8, x: u8, y: u8) {
    let condition = chip8.registers.get(x) == chip8.registers.get(y);
    skip_if(chip8, condition);
}

/// Vx = kk
fn load(chip8: &mut Chip8, x: u8, kk: u8) {
    chip8.registers.set(x, kk);
}

/// Vx += kk
/// Overflow is dropped and VF is untouched
fn add(chip8: &mut Chip8, x: u8, kk: u8) {
    let res = chip8.registers.get(x).wrapping_add(kk);
    chip8.registers.set(x, res);
}

/// Vx = Vy
fn mv(chip8: &mut Chip8, x: u8, y: u8) {
    let vy = chip8.registers.get(y);
    chip8.registers.set(x, vy);
}

/// Vx |= Vy
fn or(chip8: &mut Chip8, x: u8, y: u8) {
    let res = chip8.registers.get(x) | chip8.registers.get(y);
    chip8.registers.set(x, res);
}

/// Vx &= Vy
fn and(chip8: &mut Chip8, x: u8, y: u8) {
    let res = chip8.registers.get(x) & chip8.registers.get(y);
    chip8.registers.set(x, res);
}

/// Vx ^= Vy
fn xor(chip8: &mut Chip8, x: u8, y: u8) {
    let res = chip8.registers.get(x) ^ chip8.registers.get(y);
    chip8.registers.set(x, res);
}

/// Vx += Vy; VF = carry
fn add_reg(chip8: &mut Chip8, x: u8, y: u8) {
    let sum = u16::from(chip8.registers.get(x)) + u16::from(chip8.registers.get(y));
    chip8.registers.set(x, sum as u8);
    flag(chip8, sum > 0xFF);
}

/// Vx -= Vy; VF = !borrow
fn sub(chip8: &mut Chip8, x: u8, y: u8) {
    let (vx, vy) = (chip8.registers.get(x), chip8.registers.get(y));
    chip8.registers.set(x, vx.wrapping_sub(vy));
    flag(chip8, vx >= vy);
}

/// Vx >>= 1; VF = the bit shifted out
fn shr(chip8: &mut Chip8, x: u8) {
    let vx = chip8.registers.get(x);
    chip8.registers.set(x, vx >> 1);
    flag(chip8, vx & 0x01 == 0x01);
}

/// Vx = Vy - Vx; VF = !borrow
fn subn(chip8: &mut Chip8, x: u8, y: u8) {
    let (vx, vy) = (chip8.registers.get(x), chip8.registers.get(y));
    chip8.registers.set(x, vy.wrapping_sub(vx));
    flag(chip8, vy >= vx);
}

/// Vx <<= 1; VF = the bit shifted out
fn shl(chip8: &mut Chip8, x: u8) {
    let vx = chip8.registers.get(x);
    chip8.registers.set(x, vx << 1);
    flag(chip8, vx & 0x80 == 0x80);
}

/// if Vx != Vy then pc += 2
fn skrne(chip8: &mut Chip8, x: u8, y: u8) {
    let condition = chip8.registers.get(x) != chip8.registers.get(y);
    skip_if(chip8, condition);
}

/// I = addr
fn loadi(chip8: &mut Chip8, addr: u16) {
    chip8.registers.set_addr(addr);
}

/// PC = V0 + addr
fn jumpi(chip8: &mut Chip8, addr: u16) {
    let target = u16::from(chip8.registers.get(0x0)) + addr;
    chip8.registers.set_pc(target);
}

/// Vx = rand_byte & kk
fn rand(chip8: &mut Chip8, x: u8, kk: u8) {
    let rand_byte = chip8.rng.next_u32() as u8;
    chip8.registers.set(x, rand_byte & kk);
}

/// draw_sprite(x=Vx y=Vy size=n)
/// XORs the sprite in memory I..I+n onto the display at Vx, Vy.
/// VF = whether any pixels were erased
fn draw(chip8: &mut Chip8, x: u8, y: u8, n: u8) {
    let rows = chip8.memory.slice(chip8.registers.get_addr(), n as usize);
    let collision =
        chip8
            .display
            .draw_sprite(chip8.registers.get(x), chip8.registers.get(y), &rows);
    flag(chip8, collision);
}

/// if Vx.pressed then pc += 2
fn skpr(chip8: &mut Chip8, x: u8) {
    let condition = chip8.keypad.is_pressed(chip8.registers.get(x));
    skip_if(chip8, condition);
}

/// if !Vx.pressed then pc += 2
fn skup(chip8: &mut Chip8, x: u8) {
    let condition = !chip8.keypad.is_pressed(chip8.registers.get(x));
    skip_if(chip8, condition);
}

/// Vx = DT
fn lddt(chip8: &mut Chip8, x: u8) {
    let delay = chip8.registers.get_timer(Timer::Delay);
    chip8.registers.set(x, delay);
}

/// await keypress for Vx
/// The program counter is put back on this instruction until a key arrives.
fn keyd(chip8: &mut Chip8, x: u8) {
    let pc = chip8.registers.get_pc();
    chip8.registers.set_pc(pc.wrapping_sub(2));
    chip8.keypad.clear_press();
    chip8.status = Status::AwaitingKey { register: x };
    log::debug!("awaiting key for V{:X}", x);
}

/// DT = Vx
fn setdt(chip8: &mut Chip8, x: u8) {
    let vx = chip8.registers.get(x);
    chip8.registers.set_timer(Timer::Delay, vx);
}

/// ST = Vx
fn setst(chip8: &mut Chip8, x: u8) {
    let vx = chip8.registers.get(x);
    chip8.registers.set_timer(Timer::Sound, vx);
}

/// I += Vx
fn addi(chip8: &mut Chip8, x: u8) {
    let i = chip8.registers.get_addr();
    let vx = u16::from(chip8.registers.get(x));
    chip8.registers.set_addr(i.wrapping_add(vx));
}

/// I = Vx * 5
/// Set I to the memory address of the sprite for Vx
/// See constants::SPRITE_SHEET for more details
fn ldspr(chip8: &mut Chip8, x: u8) {
    let digit = u16::from(chip8.registers.get(x));
    chip8
        .registers
        .set_addr(SPRITE_SHEET_START + SPRITE_HEIGHT * digit);
}

/// mem[I..I+3] = bcd(Vx)
/// Store the decimal digits of Vx in memory starting at address I, hundreds first
fn bcd(chip8: &mut Chip8, x: u8) {
    let vx = chip8.registers.get(x);
    let i = chip8.registers.get_addr();
    let digits = [vx / 100, vx / 10 % 10, vx % 10];
    for (offset, digit) in (0u16..).zip(digits.iter()) {
        chip8.memory.write(i.wrapping_add(offset), *digit);
    }
}

/// mem[I..=I+x] = V0..=Vx
fn stor(chip8: &mut Chip8, x: u8) {
    let mut cursor = chip8.registers.get_addr();
    for register in 0..=x {
        chip8.memory.write(cursor, chip8.registers.get(register));
        cursor = cursor.wrapping_add(1);
    }
    if chip8.quirks.load_store_increments_index {
        chip8.registers.set_addr(cursor);
    }
}

/// V0..=Vx = mem[I..=I+x]
fn read(chip8: &mut Chip8, x: u8) {
    let mut cursor = chip8.registers.get_addr();
    for register in 0..=x {
        let byte = chip8.memory.read(cursor);
        chip8.registers.set(register, byte);
        cursor = cursor.wrapping_add(1);
    }
    if chip8.quirks.load_store_increments_index {
        chip8.registers.set_addr(cursor);
    }
}
