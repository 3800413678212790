use crate::paths::{LazyLocation, Location};

/// Context passed to tracing callbacks while comparing.
///
/// One context is reported for every node the comparer visits, after the node and its
/// children have been evaluated.
#[derive(Debug, Clone)]
pub struct TracingContext<'a, 'b> {
    /// The location in the actual document
    pub instance_location: &'b LazyLocation<'a>,
    /// The result of comparing this node
    pub result: NodeEvaluationResult,
}

impl<'a, 'b> TracingContext<'a, 'b> {
    pub fn new(
        instance_location: &'b LazyLocation<'a>,
        result: impl Into<NodeEvaluationResult>,
    ) -> Self {
        Self {
            instance_location,
            result: result.into(),
        }
    }

    /// The visited location as a JSON pointer.
    #[must_use]
    pub fn location(&self) -> Location {
        Location::from(self.instance_location)
    }

    /// Call the tracing callback with this context
    pub fn call(self, callback: TracingCallback<'_>) {
        callback(self);
    }
}

/// Result of comparing a single node.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeEvaluationResult {
    Valid,
    Invalid,
}

impl From<bool> for NodeEvaluationResult {
    fn from(value: bool) -> Self {
        if value {
            Self::Valid
        } else {
            Self::Invalid
        }
    }
}

/// Type alias for tracing callbacks.
///
/// A tracing callback is called for each node visited during a comparison.
pub type TracingCallback<'a> = &'a mut dyn FnMut(TracingContext);
