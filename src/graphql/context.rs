use crate::state::State;

pub struct Context {
    state: State,
}

impl Context {
    pub fn new(state: State) -> Self {
        Context {
            state,
        }
    }

    pub fn state(&self) -> &State {
        &self.state
    }
}

impl juniper::Context for Context {}
