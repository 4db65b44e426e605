use thiserror::Error;

/// Failure of a fallible range conversion.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConversionError {
    /// The element at `index` does not fit the target element type.
    #[error("element {index} cannot be converted to `{target}`")]
    Element { index: usize, target: &'static str },
}

impl ConversionError {
    pub(crate) fn element<T>(index: usize) -> Self {
        Self::Element {
            index,
            target: core::any::type_name::<T>(),
        }
    }

    /// Index of the element that failed to convert.
    pub fn index(&self) -> usize {
        match self {
            Self::Element { index, .. } => *index,
        }
    }
}
