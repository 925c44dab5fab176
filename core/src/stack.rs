use crate::constants::STACK_DEPTH;
use crate::error::MachineError;

/// # Call stack
/// A bounded LIFO of return addresses.
/// Exceeding the depth or returning with nothing on the stack is fatal; neither is
/// clamped.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CallStack {
    addresses: Vec<u16>,
}

impl CallStack {
    pub fn new() -> Self {
        CallStack {
            addresses: Vec::with_capacity(STACK_DEPTH),
        }
    }

    pub fn depth(&self) -> usize {
        self.addresses.len()
    }

    pub fn push(&mut self, addr: u16) -> Result<(), MachineError> {
        if self.addresses.len() == STACK_DEPTH {
            return Err(MachineError::StackOverflow {
                depth: self.depth(),
            });
        }
        self.addresses.push(addr);
        Ok(())
    }

    pub fn pop(&mut self) -> Result<u16, MachineError> {
        self.addresses
            .pop()
            .ok_or(MachineError::StackUnderflow { depth: 0 })
    }

    pub fn clear(&mut self) {
        self.addresses.clear();
    }
}
