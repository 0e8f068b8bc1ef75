/// Outcome of iterating one point, handed from the evaluator to the colour map.
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum EscapeResult {
    /// Escape index divided by the base iteration budget. Exceeds `1.0` when
    /// the adaptive cap runs past that budget.
    Escaped(f64),
    /// No escape within the iteration cap.
    Bounded,
}

impl EscapeResult {
    #[must_use]
    pub fn is_bounded(&self) -> bool {
        matches!(self, Self::Bounded)
    }
}
