pub mod binding;
pub mod classifier;
pub mod error;
pub mod functions;
pub mod receiver;
pub mod settings;
pub mod traversal;
pub mod variables;

use crate::session::history::History;
use crate::session::unit::CompiledUnit;
use binding::{FunctionRegistry, VariableRegistry};
use classifier::Classifier;
use error::Result;
use functions::rebuild_functions;
use settings::{Setting, Settings};
use traversal::ordered_units;
use variables::rebuild_variables;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Summary {
    pub units: usize,
    pub variables: usize,
    pub functions: usize,
    pub unresolved_functions: usize,
}

/// Keeps the variable and function registries of a session in step with its history.
///
/// Call [`ContextUpdater::update`] once after every evaluated unit. Calls must not
/// overlap.
#[derive(Debug, Clone, Default)]
pub struct ContextUpdater {
    pub classifier: Classifier,
    pub settings: Settings,
}

impl ContextUpdater {
    pub fn new(classifier: Classifier, settings: Settings) -> Self {
        Self {
            classifier,
            settings,
        }
    }

    pub fn with_settings(settings: Settings) -> Self {
        Self::new(Classifier::default(), settings)
    }

    /// Best effort refresh. Failures are logged and swallowed, leaving the registries
    /// possibly stale or partially rebuilt unless [`Setting::RetainOnFailure`] is on.
    pub fn update<H: History>(
        &self,
        history: &H,
        variables: &mut VariableRegistry<<H::Unit as CompiledUnit>::Value>,
        functions: &mut FunctionRegistry,
    ) {
        let result = if self.settings.is_enabled(&Setting::RetainOnFailure) {
            let mut fresh_variables = VariableRegistry::default();
            let mut fresh_functions = FunctionRegistry::default();

            self.try_update(history, &mut fresh_variables, &mut fresh_functions)
                .map(|summary| {
                    *variables = fresh_variables;
                    *functions = fresh_functions;
                    summary
                })
        } else {
            self.try_update(history, variables, functions)
        };

        match result {
            Ok(summary) => log::debug!("session context updated: {:?}", summary),
            Err(e) => log::error!("Exception updating current variables: {}", e),
        }
    }

    /// Rebuilds both registries, stopping at the first failure.
    pub fn try_update<H: History>(
        &self,
        history: &H,
        variables: &mut VariableRegistry<<H::Unit as CompiledUnit>::Value>,
        functions: &mut FunctionRegistry,
    ) -> Result<Summary> {
        let units = ordered_units(history)?;

        rebuild_variables(&units, variables, &self.classifier, &self.settings)?;
        let unresolved_functions = rebuild_functions(&units, functions, &self.classifier)?;

        Ok(Summary {
            units: units.len(),
            variables: variables.len(),
            functions: functions.len(),
            unresolved_functions,
        })
    }
}
