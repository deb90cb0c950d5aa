//! This module defines [TranslationParameters].

/// External parameters affecting the translation of a plan
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TranslationParameters {
    /// Maximal depth of a plan that will be translated
    pub(crate) max_depth: Option<usize>,
}

impl TranslationParameters {
    /// Set the maximal depth of a plan that will be translated.
    ///
    /// `None` removes the limit.
    pub fn set_max_depth(&mut self, max_depth: Option<usize>) {
        self.max_depth = max_depth;
    }

    /// Return the maximal depth of a plan that will be translated.
    pub fn max_depth(&self) -> Option<usize> {
        self.max_depth
    }
}
