//! Pipeline Latch Interface.
//!
//! Defines the behaviour shared by the latches on either side of the decode
//! stage, so the stage can bubble or flush them without knowing their type.

/// Represents a pipeline latch (inter-stage buffer).
pub trait PipelineLatch {
    /// Clears all entries in the latch.
    ///
    /// Called when a load-use stall inserts a bubble into execute.
    fn flush(&mut self);

    /// Checks if the latch is empty.
    ///
    /// # Returns
    ///
    /// `true` if there are no valid instructions in the latch, `false` otherwise.
    fn is_empty(&self) -> bool;
}
