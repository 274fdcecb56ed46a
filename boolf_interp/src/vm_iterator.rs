use crate::{vm::BoolfuckVM, vm_error::VMError};
use boolf_types::state::VMState;

// Facilitates step-by-step execution of a Boolfuck program, yielding the state after each step.
// This is particularly useful for debugging.
pub struct VMIterator<'a> {
    vm: &'a mut BoolfuckVM,
    done: bool,
}

impl<'a> VMIterator<'a> {
    pub fn new(vm: &'a mut BoolfuckVM) -> Self {
        VMIterator { vm, done: false }
    }
}

// Iterate one step at a time. The iteration ends (returning None) at the end of the
// program, or straight after yielding an error since retrying the step would fail again.
impl<'a> Iterator for VMIterator<'a> {
    type Item = Result<VMState, VMError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        match self.vm.interpret_step() {
            Ok(Some(state)) => Some(Ok(state)),
            Ok(None) => {
                self.done = true;
                None
            }
            Err(err) => {
                self.done = true;
                Some(Err(err))
            }
        }
    }
}
