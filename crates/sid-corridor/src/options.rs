//! Configuration for corridor voxelization.

/// Options accepted by the voxelization entry points.
///
/// # Example
///
/// ```
/// use sid_corridor::CorridorOptions;
///
/// // Defaults run the exact collision phase.
/// assert!(CorridorOptions::default().precision);
///
/// // Skip it to get the conservative bounding set quickly.
/// let coarse = CorridorOptions::default().with_precision(false);
/// assert!(!coarse.precision);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CorridorOptions {
    /// Run the exact collision phase after the conservative bounding pass.
    ///
    /// When `false`, classification stops after the bounding dilation and
    /// returns the outer cover unpruned. Defaults to `true`.
    pub precision: bool,
}

impl Default for CorridorOptions {
    fn default() -> Self {
        Self { precision: true }
    }
}

impl CorridorOptions {
    /// Creates the default options.
    #[must_use]
    pub const fn new() -> Self {
        Self { precision: true }
    }

    /// Sets whether the exact collision phase runs.
    #[must_use]
    pub const fn with_precision(mut self, precision: bool) -> Self {
        self.precision = precision;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_runs_collision() {
        assert!(CorridorOptions::default().precision);
        assert_eq!(CorridorOptions::new(), CorridorOptions::default());
    }

    #[test]
    fn test_with_precision() {
        let options = CorridorOptions::new().with_precision(false);
        assert!(!options.precision);
        assert!(options.with_precision(true).precision);
    }
}
