/// Cursor position bounded to `[0, max]`
///
/// Movement never wraps. With no rows (`max == None`) the cursor stays at 0
/// and reports nothing selected.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Cursor {
    position: usize,
}

impl Cursor {
    pub fn new() -> Self {
        Self::default()
    }

    /// Cursor starting at `position`; callers keep it within range
    pub fn at(position: usize) -> Self {
        Self { position }
    }

    pub fn position(&self) -> usize {
        self.position
    }

    pub fn up(&mut self, max: Option<usize>) -> usize {
        if max.is_some() && self.position > 0 {
            self.position -= 1;
        }
        self.position
    }

    pub fn down(&mut self, max: Option<usize>) -> usize {
        match max {
            Some(max) if self.position < max => self.position += 1,
            _ => {}
        }
        self.position
    }

    pub fn selected(&self, max: Option<usize>) -> Option<usize> {
        match max {
            Some(max) if self.position <= max => Some(self.position),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_down_clamps_at_max() {
        let mut cursor = Cursor::at(2);
        assert_eq!(cursor.down(Some(2)), 2);
        assert_eq!(cursor.up(Some(2)), 1);
    }

    #[test]
    fn test_up_clamps_at_zero() {
        let mut cursor = Cursor::new();
        assert_eq!(cursor.up(Some(5)), 0);
        assert_eq!(cursor.down(Some(5)), 1);
    }

    #[test]
    fn test_empty_collection_pins_cursor() {
        let mut cursor = Cursor::new();
        assert_eq!(cursor.down(None), 0);
        assert_eq!(cursor.up(None), 0);
        assert_eq!(cursor.selected(None), None);
    }

    #[test]
    fn test_any_sequence_stays_in_range() {
        let max = 3;
        // Deterministic mixed walk covering both bounds repeatedly
        let moves = [1, 1, 1, 1, 1, 0, 0, 0, 0, 0, 0, 1, 0, 1, 1, 1, 1, 1, 0];

        for start in 0..=max {
            let mut cursor = Cursor::at(start);
            for &down in &moves {
                if down == 1 {
                    cursor.down(Some(max));
                } else {
                    cursor.up(Some(max));
                }
                assert!(cursor.position() <= max);
                assert_eq!(cursor.selected(Some(max)), Some(cursor.position()));
            }
        }
    }
}
