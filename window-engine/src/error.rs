/// Errors reported when building an engine from caller-supplied configuration or state.
///
/// Recompute and reset never fail; these only guard construction.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    #[error("estimated item size must be greater than zero")]
    ZeroEstimatedItemSize,

    #[error("restored range is inverted: start {start_index} > end {end_index}")]
    InvertedRange { start_index: usize, end_index: usize },
}
