use rand::rngs::StdRng;
use rand::{RngCore, SeedableRng};

use crate::config::{Config, Quirks};
use crate::constants::PROGRAM_START;
use crate::display_buffer::{DisplayBuffer, FrameBuffer};
use crate::error::MachineError;
use crate::instruction::Instruction;
use crate::keypad::{KeyCode, Keypad};
use crate::memory::Memory;
use crate::opcode::Opcode;
use crate::operations;
use crate::registers::RegisterFile;
use crate::stack::CallStack;

/// Where the machine is in its fetch-decode-execute loop
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Status {
    /// The next `step` executes the instruction at the program counter
    Ready,
    /// Fx0A is pending; the next press is written to `register`
    AwaitingKey { register: u8 },
    /// A fatal error occurred; `step` keeps returning it until `reset`
    Faulted(MachineError),
}

/// What a call to `step` did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    Executed(Instruction),
    /// Nothing happened; the machine is waiting for a key press
    AwaitingKey,
}

/// # Chip-8
/// Chip-8 is a virtual machine and corresponding interpreted language.
///
/// Owns every piece of machine state:
///  - `memory`, `registers`, `stack`
///  - the `display` buffer and the `keypad`
///  - the random source used by RND
///
/// Supplies interfaces for:
/// - loading programs and data
/// - pressing and releasing keys
/// - advancing the CPU by a single cycle
/// - advancing its timers
/// - inspecting its frame buffer and tone for some display and speaker
pub struct Chip8 {
    pub(crate) memory: Memory,
    pub(crate) registers: RegisterFile,
    pub(crate) stack: CallStack,
    pub(crate) display: DisplayBuffer,
    pub(crate) keypad: Keypad,
    pub(crate) status: Status,
    pub(crate) quirks: Quirks,
    pub(crate) rng: Box<dyn RngCore + Send>,
}

impl Chip8 {
    /// A machine seeded from the operating system's entropy source
    pub fn new() -> Self {
        Self::with_rng(StdRng::from_entropy(), Quirks::default())
    }

    /// A machine whose RND instruction produces the same sequence on every run
    pub fn seeded(seed: u64) -> Self {
        Self::with_rng(StdRng::seed_from_u64(seed), Quirks::default())
    }

    pub fn from_config(config: &Config) -> Self {
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Self::with_rng(rng, config.quirks)
    }

    pub fn with_rng(rng: impl RngCore + Send + 'static, quirks: Quirks) -> Self {
        Chip8 {
            memory: Memory::new(),
            registers: RegisterFile::new(),
            stack: CallStack::new(),
            display: DisplayBuffer::with_clipping(quirks.clip_sprites),
            keypad: Keypad::new(),
            status: Status::Ready,
            quirks,
            rng: Box::new(rng),
        }
    }

    /// Returns to the power-on state: memory holds only the sprite sheet, PC = 0x200,
    /// empty stack, zeroed timers and a clear screen.
    /// Quirks and the random source are kept.
    pub fn reset(&mut self) {
        self.memory = Memory::new();
        self.registers = RegisterFile::new();
        self.stack.clear();
        self.display = DisplayBuffer::with_clipping(self.quirks.clip_sprites);
        self.keypad = Keypad::new();
        self.status = Status::Ready;
    }

    /// Writes `bytes` into memory starting at `at`
    pub fn load(&mut self, bytes: &[u8], at: u16) -> Result<(), MachineError> {
        self.memory.load(bytes, at)?;
        log::debug!("loaded {} bytes at {:#05X}", bytes.len(), at);
        Ok(())
    }

    /// Loads a program where execution starts
    pub fn load_program(&mut self, program: &[u8]) -> Result<(), MachineError> {
        self.load(program, PROGRAM_START)
    }

    /// Set the pressed status of key
    pub fn key_press(&mut self, key: KeyCode) {
        self.keypad.press(key);
    }

    /// Unset the pressed status of key
    pub fn key_release(&mut self, key: KeyCode) {
        self.keypad.release(key);
    }

    /// Advances the CPU by a single cycle
    /// - returns the stored error if the machine has faulted
    /// - completes a pending key wait if a key was pressed, otherwise does nothing
    /// - gets, decodes and executes the next opcode
    ///
    /// A cycle that fails leaves the program counter on the failing instruction and
    /// applies none of its effects.
    pub fn step(&mut self) -> Result<Step, MachineError> {
        match self.status.clone() {
            Status::Faulted(error) => return Err(error),
            Status::AwaitingKey { register } => return Ok(self.resume_key_wait(register)),
            Status::Ready => {}
        }

        let pc = self.registers.get_pc();
        let op = self.fetch(pc);
        let instruction = match Instruction::decode(op) {
            Some(instruction) => instruction,
            None => return Err(self.fault(MachineError::Decode { word: op.0, pc })),
        };
        log::trace!(
            "{:04X} {} {:<20} v{:02X?} i{:04X}",
            pc,
            op,
            instruction.to_string(),
            self.registers.v(),
            self.registers.get_addr()
        );

        self.registers.set_pc(pc.wrapping_add(2));
        if let Err(error) = operations::execute(self, instruction) {
            self.registers.set_pc(pc);
            return Err(self.fault(error));
        }

        match self.status {
            Status::AwaitingKey { .. } => Ok(Step::AwaitingKey),
            _ => Ok(Step::Executed(instruction)),
        }
    }

    /// Decrements the delay and sound timers; called at a fixed rate by the host
    pub fn tick_timers(&mut self) {
        self.registers.timers_mut().tick();
    }

    pub fn sound_active(&self) -> bool {
        self.registers.timers().is_sound_active()
    }

    pub fn display_snapshot(&self) -> FrameBuffer {
        self.display.snapshot()
    }

    /// Returns the FrameBuffer if the display should be redrawn
    pub fn take_frame(&mut self) -> Option<FrameBuffer> {
        self.display.take_frame()
    }

    pub fn status(&self) -> &Status {
        &self.status
    }

    pub fn registers(&self) -> &RegisterFile {
        &self.registers
    }

    pub fn memory(&self) -> &Memory {
        &self.memory
    }

    pub fn stack_depth(&self) -> usize {
        self.stack.depth()
    }

    pub fn quirks(&self) -> Quirks {
        self.quirks
    }

    /// Gets the opcode pointed at by `pc`.
    /// Memory is stored as bytes, but opcodes are 16 bits so we combine two subsequent bytes.
    fn fetch(&self, pc: u16) -> Opcode {
        Opcode(self.memory.read_word(pc))
    }

    fn resume_key_wait(&mut self, register: u8) -> Step {
        match self.keypad.take_press() {
            Some(key) => {
                log::debug!("key {} pressed; resuming with V{:X}", key, register);
                self.registers.set(register, key.value());
                let pc = self.registers.get_pc();
                self.registers.set_pc(pc.wrapping_add(2));
                self.status = Status::Ready;
                Step::Executed(Instruction::WaitKey { x: register })
            }
            None => Step::AwaitingKey,
        }
    }

    fn fault(&mut self, error: MachineError) -> MachineError {
        log::error!("machine halted: {}", error);
        self.status = Status::Faulted(error.clone());
        error
    }
}

impl Default for Chip8 {
    fn default() -> Self {
        Self::new()
    }
}
