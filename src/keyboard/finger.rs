#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Hand {
    Left,
    Right,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Finger {
    Pinky,
    Ring,
    Middle,
    Index,
    Thumb,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FingerAssignment {
    pub hand: Hand,
    pub finger: Finger,
}

impl FingerAssignment {
    pub fn new(hand: Hand, finger: Finger) -> Self {
        Self { hand, finger }
    }
}

/// Standard touch-typing finger for a column of the ten-key letter block.
/// Layout independent: Tarmak and Colemak move letters, not fingers.
pub fn finger_for_column(col: usize) -> FingerAssignment {
    use Finger::*;
    use Hand::*;

    match col {
        0 => FingerAssignment::new(Left, Pinky),
        1 => FingerAssignment::new(Left, Ring),
        2 => FingerAssignment::new(Left, Middle),
        3 | 4 => FingerAssignment::new(Left, Index),
        5 | 6 => FingerAssignment::new(Right, Index),
        7 => FingerAssignment::new(Right, Middle),
        8 => FingerAssignment::new(Right, Ring),
        _ => FingerAssignment::new(Right, Pinky),
    }
}

pub fn space_finger() -> FingerAssignment {
    FingerAssignment::new(Hand::Right, Finger::Thumb)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_columns_are_mirrored() {
        assert_eq!(finger_for_column(0).finger, Finger::Pinky);
        assert_eq!(finger_for_column(9).finger, Finger::Pinky);
        assert_eq!(finger_for_column(4).hand, Hand::Left);
        assert_eq!(finger_for_column(5).hand, Hand::Right);
        assert_eq!(finger_for_column(4).finger, Finger::Index);
        assert_eq!(finger_for_column(5).finger, Finger::Index);
    }
}
