//! Invisible and format characters handled by the common pass.

/// A zero-width or format character recognized by the normalizer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FormatChar {
    ByteOrderMark,
    ReversedByteOrderMark,
    WordJoiner,
    SoftHyphen,
    ZeroWidthSpace,
    NoBreakSpace,
    ZeroWidthNonJoiner,
    ZeroWidthJoiner,
}

impl FormatChar {
    pub const ALL: [Self; 8] = [
        Self::ByteOrderMark,
        Self::ReversedByteOrderMark,
        Self::WordJoiner,
        Self::SoftHyphen,
        Self::ZeroWidthSpace,
        Self::NoBreakSpace,
        Self::ZeroWidthNonJoiner,
        Self::ZeroWidthJoiner,
    ];

    pub const fn as_char(self) -> char {
        match self {
            Self::ByteOrderMark => '\u{feff}',
            Self::ReversedByteOrderMark => '\u{fffe}',
            Self::WordJoiner => '\u{2060}',
            Self::SoftHyphen => '\u{00ad}',
            Self::ZeroWidthSpace => '\u{200b}',
            Self::NoBreakSpace => '\u{00a0}',
            Self::ZeroWidthNonJoiner => '\u{200c}',
            Self::ZeroWidthJoiner => '\u{200d}',
        }
    }

    pub fn from_char(c: char) -> Option<Self> {
        Self::ALL.into_iter().find(|f| f.as_char() == c)
    }

    /// Position in [`FormatChar::ALL`].
    pub const fn index(self) -> usize {
        self as usize
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::ByteOrderMark => "byte_order_mark",
            Self::ReversedByteOrderMark => "reversed_byte_order_mark",
            Self::WordJoiner => "word_joiner",
            Self::SoftHyphen => "soft_hyphen",
            Self::ZeroWidthSpace => "zero_width_space",
            Self::NoBreakSpace => "no_break_space",
            Self::ZeroWidthNonJoiner => "zero_width_non_joiner",
            Self::ZeroWidthJoiner => "zero_width_joiner",
        }
    }

    /// Characters that stand in for a space and are replaced by one.
    /// All others are deleted outright.
    pub const fn is_space_like(self) -> bool {
        matches!(self, Self::ZeroWidthSpace | Self::NoBreakSpace)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_char() {
        for f in FormatChar::ALL {
            assert_eq!(FormatChar::from_char(f.as_char()), Some(f));
        }
        assert_eq!(FormatChar::from_char(' '), None);
    }

    #[test]
    fn test_index_matches_order() {
        for (i, f) in FormatChar::ALL.into_iter().enumerate() {
            assert_eq!(f.index(), i);
        }
    }

    #[test]
    fn test_space_like() {
        assert!(FormatChar::NoBreakSpace.is_space_like());
        assert!(FormatChar::ZeroWidthSpace.is_space_like());
        assert!(!FormatChar::ZeroWidthJoiner.is_space_like());
    }

    #[test]
    fn test_names_are_unique_snake_case() {
        let names: Vec<_> = FormatChar::ALL.into_iter().map(FormatChar::name).collect();
        for (i, name) in names.iter().enumerate() {
            assert!(name.chars().all(|c| c.is_ascii_lowercase() || c == '_'));
            assert!(!names[..i].contains(name));
        }
        assert_eq!(FormatChar::ReversedByteOrderMark.name(), "reversed_byte_order_mark");
    }
}
