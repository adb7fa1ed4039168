/// One of the two players.
///
/// Boxes completed by `Side::One` carry a positive counter (`+4`), boxes
/// completed by `Side::Two` a negative one (`-4`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Side {
    #[default]
    One,
    Two,
}

impl Side {
    pub fn opposite(&self) -> Self {
        match self {
            Self::One => Self::Two,
            Self::Two => Self::One,
        }
    }

    /// Sign applied to box counters claimed by this side
    #[inline]
    pub fn sign(&self) -> i8 {
        match self {
            Self::One => 1,
            Self::Two => -1,
        }
    }

    /// Multiplier turning a Side::One-relative score into this side's view
    #[inline]
    pub fn perspective(&self) -> f64 {
        match self {
            Self::One => 1.0,
            Self::Two => -1.0,
        }
    }

    pub fn index(&self) -> usize {
        match self {
            Self::One => 0,
            Self::Two => 1,
        }
    }
}

impl std::fmt::Display for Side {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::One => write!(f, "Player 1"),
            Self::Two => write!(f, "Player 2"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_opposite_is_involution() {
        assert_eq!(Side::One.opposite(), Side::Two);
        assert_eq!(Side::Two.opposite().opposite(), Side::Two);
    }

    #[test]
    fn test_sign_and_perspective_agree() {
        for side in [Side::One, Side::Two] {
            assert_eq!(side.sign() as f64, side.perspective());
        }
    }
}
