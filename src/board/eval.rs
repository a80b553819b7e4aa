//! Static material evaluation.

use super::state::Board;
use super::types::Color;

impl Board {
    /// Score the board by material balance from `perspective`'s point of
    /// view: piece values are added for `perspective` and subtracted for
    /// the opponent, so a positive score favors `perspective`.
    ///
    /// The search always evaluates with the side it is maximizing for as
    /// the perspective, which fixes the sign convention in one place.
    #[must_use]
    pub fn evaluate(&self, perspective: Color) -> i32 {
        let mut score = 0;
        for (_, piece) in self.pieces() {
            let value = piece.kind.value();
            if piece.color == perspective {
                score += value;
            } else {
                score -= value;
            }
        }
        score
    }

    /// Total material for one side, in centipawns (kings included).
    #[must_use]
    pub fn material(&self, color: Color) -> i32 {
        self.pieces()
            .filter(|(_, p)| p.color == color)
            .map(|(_, p)| p.kind.value())
            .sum()
    }
}
