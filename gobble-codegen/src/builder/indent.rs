//! Indentation configuration for code generation.

/// Indentation style for generated code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Indent {
    /// Spaces with the specified width.
    Spaces(u8),
    /// Tab character.
    Tab,
}

impl Indent {
    /// Tab indentation, as produced by gofmt.
    pub const GO: Self = Self::Tab;

    /// Write one indent level to `buffer`.
    pub fn write_to(&self, buffer: &mut String) {
        match self {
            Self::Spaces(width) => buffer.extend(std::iter::repeat_n(' ', usize::from(*width))),
            Self::Tab => buffer.push('\t'),
        }
    }
}

impl Default for Indent {
    fn default() -> Self {
        Self::GO
    }
}
