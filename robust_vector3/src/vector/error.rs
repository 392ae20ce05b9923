use thiserror::Error;

/// Reason a vector has no defined unit direction.
///
/// Returned by [Vector3::try_normalize](crate::Vector3::try_normalize) and
/// [Vector3::scale](crate::Vector3::scale).
#[derive(Debug, Copy, Clone, PartialEq, Eq, Error)]
pub enum NormalizeError {
    /// All components are zero so the vector points nowhere.
    #[error("cannot normalize a vector with zero magnitude")]
    ZeroMagnitude,
    /// At least one component is NaN.
    #[error("cannot normalize a vector with a NaN component")]
    NanComponent,
    /// Infinite components mix with other non-zero components, leaving no single
    /// representable direction.
    #[error("cannot normalize a vector with ambiguous infinite components")]
    AmbiguousDirection,
}
