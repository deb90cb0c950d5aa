//! This module defines [PlanTranslator],
//! which turns a tree of logical operators into the corresponding tree of physical operators.

use algebra_physical::operations::PhysicalOperatorEnum;

use crate::{
    error::Error,
    logical::{LogicalOperator, LogicalOperatorEnum},
};

use super::translation_parameters::TranslationParameters;

/// Receives a notification for every node of a plan once it has been translated.
///
/// Nodes are reported bottom-up,
/// i.e. the input of a node is always reported before the node itself.
pub trait TranslationObserver {
    /// Called after `logical` has been translated into `physical`.
    ///
    /// `level` is the distance of the node from the root of the plan.
    fn node_translated(
        &mut self,
        level: usize,
        logical: &LogicalOperatorEnum,
        physical: &PhysicalOperatorEnum,
    );
}

/// [TranslationObserver] that ignores all notifications
#[derive(Debug)]
struct Unobserved;

impl TranslationObserver for Unobserved {
    fn node_translated(&mut self, _: usize, _: &LogicalOperatorEnum, _: &PhysicalOperatorEnum) {}
}

/// Translates logical plans into physical plans
#[derive(Debug, Default, Clone, Copy)]
pub struct PlanTranslator {
    /// Parameters restricting which plans are translated
    parameters: TranslationParameters,
}

impl PlanTranslator {
    /// Create a new [PlanTranslator].
    pub fn new(parameters: TranslationParameters) -> Self {
        Self { parameters }
    }

    /// Return the [TranslationParameters] of this translator.
    pub fn parameters(&self) -> &TranslationParameters {
        &self.parameters
    }

    /// Translate the plan with the given root.
    ///
    /// Returns [Error::EmptyPlan] if there is no root
    /// and [Error::PlanTooDeep] if the plan exceeds the configured depth.
    /// No physical operator is returned unless the whole plan was translated.
    pub fn translate(
        &self,
        plan: Option<&LogicalOperatorEnum>,
    ) -> Result<PhysicalOperatorEnum, Error> {
        self.translate_observed(plan, &mut Unobserved)
    }

    /// Translate the plan with the given root,
    /// reporting every translated node to the given [TranslationObserver].
    pub fn translate_observed(
        &self,
        plan: Option<&LogicalOperatorEnum>,
        observer: &mut dyn TranslationObserver,
    ) -> Result<PhysicalOperatorEnum, Error> {
        let root = plan.ok_or(Error::EmptyPlan)?;

        let depth = root.depth();
        if let Some(limit) = self.parameters.max_depth {
            if depth > limit {
                return Err(Error::PlanTooDeep { depth, limit });
            }
        }

        log::debug!("translating plan of depth {depth}");
        let physical = Self::translate_node(root, 0, observer)?;
        log::trace!("translated plan:\n{physical}");

        Ok(physical)
    }

    /// Translate the subtree below `node` with inputs before their parents.
    fn translate_node(
        node: &LogicalOperatorEnum,
        level: usize,
        observer: &mut dyn TranslationObserver,
    ) -> Result<PhysicalOperatorEnum, Error> {
        let translated_input = match node.input() {
            Some(input) => Some(Self::translate_node(input, level + 1, observer)?),
            None => None,
        };

        let physical = node.translate(translated_input)?;
        log::trace!("translated {} at level {level}", node.label());
        observer.node_translated(level, node, &physical);

        Ok(physical)
    }
}

/// Translate the plan with the given root using the default [TranslationParameters].
pub fn translate_plan(plan: Option<&LogicalOperatorEnum>) -> Result<PhysicalOperatorEnum, Error> {
    PlanTranslator::default().translate(plan)
}
