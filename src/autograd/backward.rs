//! Backward operation trait

/// A node on the gradient tape.
///
/// Implementations capture whatever forward-pass state they need (input
/// values, shared gradient cells) and, when invoked, accumulate gradients
/// into their inputs' cells. Gradients ADD into the cell rather than replace
/// it, so repeated backward passes accumulate until the next `zero_grad`.
pub trait BackwardOp {
    /// Propagate gradients to the operation's inputs
    fn backward(&self);
}
