use std::sync::Arc;

pub mod upstream;
#[cfg(test)]
pub mod fake;

use upstream::Upstream;

#[derive(Clone)]
pub struct State {
    upstream: Arc<dyn Upstream>,
}

impl State {
    pub fn init(upstream: Arc<dyn Upstream>) -> Self {
        State {
            upstream,
        }
    }

    pub fn upstream(&self) -> &dyn Upstream {
        self.upstream.as_ref()
    }
}
