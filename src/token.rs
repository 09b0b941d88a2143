/// A comparable sequence element that has a dedicated gap marker.
///
/// The marker is an ordinary value of the token type (`'-'`, `b'-'`, `"-"`),
/// so aligned sequences stay plain `Vec<T>` and can be compared column by
/// column without unwrapping.
pub trait Token: Clone + PartialEq {
    /// The placeholder written opposite an unmatched token.
    fn gap() -> Self;

    fn is_gap(&self) -> bool {
        *self == Self::gap()
    }
}

impl Token for u8 {
    fn gap() -> Self {
        b'-'
    }
}

impl Token for char {
    fn gap() -> Self {
        '-'
    }
}

impl Token for String {
    fn gap() -> Self {
        String::from("-")
    }

    fn is_gap(&self) -> bool {
        self == "-"
    }
}

impl<'a> Token for &'a str {
    fn gap() -> Self {
        "-"
    }
}
