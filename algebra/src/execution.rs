//! This module contains the translation of logical plans into physical plans.

pub mod translation;
pub mod translation_parameters;

pub use translation::{translate_plan, PlanTranslator, TranslationObserver};
pub use translation_parameters::TranslationParameters;
