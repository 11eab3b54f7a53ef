//! Layout: the addressable viewport size.

use crate::error::{Result, ScreenError};

/// Width and height of the viewport in character cells.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Layout {
    /// Width in columns.
    pub width: u16,
    /// Height in lines.
    pub height: u16,
}

impl Layout {
    /// Create a new layout.
    #[inline]
    pub const fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }

    /// Create a layout from signed dimensions, as reported by some terminal APIs.
    ///
    /// # Errors
    /// Returns [`ScreenError::NegativeDimension`] if either dimension is negative,
    /// and [`ScreenError::DimensionTooLarge`] if either does not fit in a `u16`.
    pub fn try_new(width: i64, height: i64) -> Result<Self> {
        if width < 0 || height < 0 {
            return Err(ScreenError::NegativeDimension { width, height });
        }
        match (u16::try_from(width), u16::try_from(height)) {
            (Ok(w), Ok(h)) => Ok(Self::new(w, h)),
            _ => Err(ScreenError::DimensionTooLarge { width, height }),
        }
    }
}

impl TryFrom<(i32, i32)> for Layout {
    type Error = ScreenError;

    fn try_from((width, height): (i32, i32)) -> Result<Self> {
        Self::try_new(i64::from(width), i64::from(height))
    }
}

impl std::fmt::Debug for Layout {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Layout({}x{})", self.width, self.height)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_layout_new() {
        let layout = Layout::new(80, 24);
        assert_eq!(layout.width, 80);
        assert_eq!(layout.height, 24);
        assert_eq!(Layout::try_new(80, 24), Ok(layout));
    }

    #[test]
    fn test_layout_rejects_negative() {
        let err = Layout::try_from((-1i32, 24i32)).unwrap_err();
        assert_eq!(
            err,
            ScreenError::NegativeDimension {
                width: -1,
                height: 24
            }
        );
        assert!(Layout::try_from((80i32, -5i32)).is_err());
    }

    #[test]
    fn test_layout_rejects_oversized() {
        assert_eq!(
            Layout::try_new(70_000, 10),
            Err(ScreenError::DimensionTooLarge {
                width: 70_000,
                height: 10
            })
        );
        assert_eq!(
            Layout::try_new(80, i64::from(u16::MAX) + 1),
            Err(ScreenError::DimensionTooLarge {
                width: 80,
                height: 65_536
            })
        );
        assert!(Layout::try_new(i64::from(u16::MAX), 1).is_ok());
    }

    #[test]
    fn test_negative_wins_over_oversized() {
        assert_eq!(
            Layout::try_new(-1, 70_000),
            Err(ScreenError::NegativeDimension {
                width: -1,
                height: 70_000
            })
        );
    }

    #[test]
    fn test_layout_accepts_zero() {
        assert_eq!(Layout::try_from((0i32, 0i32)).unwrap(), Layout::new(0, 0));
    }

    #[test]
    fn test_layout_debug() {
        assert_eq!(format!("{:?}", Layout::new(80, 24)), "Layout(80x24)");
    }
}
