//! The jigger — the two-sided measuring cup every pour goes through.
//!
//! A jigger holds exactly one fill at a time. Filling an already-filled
//! jigger fails by returning `false` (callers must check), flipping to
//! the other capacity is only possible while empty, and pouring empties
//! it into a `Portion` at the current capacity.

use crate::shared::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum JiggerSize {
    #[default]
    Small,
    Large,
}

impl JiggerSize {
    pub fn capacity_ml(&self) -> f32 {
        match self {
            JiggerSize::Small => JIGGER_SMALL_ML,
            JiggerSize::Large => JIGGER_LARGE_ML,
        }
    }

    pub fn flipped(&self) -> JiggerSize {
        match self {
            JiggerSize::Small => JiggerSize::Large,
            JiggerSize::Large => JiggerSize::Small,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct Jigger {
    size: JiggerSize,
    content: Option<IngredientId>,
}

impl Jigger {
    pub fn size(&self) -> JiggerSize {
        self.size
    }

    pub fn capacity_ml(&self) -> f32 {
        self.size.capacity_ml()
    }

    pub fn is_filled(&self) -> bool {
        self.content.is_some()
    }

    /// Fills from a bottle. Fails when something is already in the cup.
    #[must_use]
    pub fn fill(&mut self, ingredient: IngredientId) -> bool {
        if self.content.is_some() {
            return false;
        }
        self.content = Some(ingredient);
        true
    }

    /// Flips to the other capacity. Only an empty jigger can be flipped.
    #[must_use]
    pub fn flip(&mut self) -> bool {
        if self.content.is_some() {
            return false;
        }
        self.size = self.size.flipped();
        true
    }

    /// Empties the cup into a portion at the current capacity.
    pub fn pour(&mut self) -> Option<Portion> {
        self.content.take().map(|ingredient| Portion {
            ingredient,
            ml: self.size.capacity_ml(),
        })
    }

    /// Dumps the content without pouring it anywhere.
    pub fn discard(&mut self) {
        self.content = None;
    }
}
