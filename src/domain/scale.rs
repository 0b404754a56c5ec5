//! Scale entity: a uniquely named two-pan balance.

use crate::domain::pan::Pan;

/// A two-pan balance. The name is unique across the whole tree; the pan
/// definitions are fixed at registration and only their extra masses are
/// written later, by the balancing pass.
#[derive(Debug, Clone)]
pub struct Scale {
    name: String,
    left: Pan,
    right: Pan,
}

impl Scale {
    pub fn new(name: impl Into<String>, left: Pan, right: Pan) -> Self {
        Self {
            name: name.into(),
            left,
            right,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn left(&self) -> &Pan {
        &self.left
    }

    pub fn right(&self) -> &Pan {
        &self.right
    }

    pub(crate) fn left_mut(&mut self) -> &mut Pan {
        &mut self.left
    }

    pub(crate) fn right_mut(&mut self) -> &mut Pan {
        &mut self.right
    }
}
