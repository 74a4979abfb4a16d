//! Completion candidates drawn from the session registries.
use crate::context::binding::{FunctionRegistry, VariableRegistry};
use rustyline::completion::Completer;
use rustyline::completion::Pair;
use rustyline::Context;

pub struct BindingCompleter {
    candidates: Vec<Pair>,
}

impl BindingCompleter {
    pub fn from_registries<V>(variables: &VariableRegistry<V>, functions: &FunctionRegistry) -> Self {
        let mut candidates: Vec<Pair> = variables
            .values()
            .map(|binding| Pair {
                display: format!("{}: {}", binding.name, binding.type_name()),
                replacement: binding.name.clone(),
            })
            .chain(functions.iter().map(|function| Pair {
                display: function.to_string(),
                replacement: function.name().to_string(),
            }))
            .collect();

        candidates.sort_by(|a, b| {
            a.replacement
                .cmp(&b.replacement)
                .then_with(|| a.display.cmp(&b.display))
        });
        Self { candidates }
    }

    pub fn len(&self) -> usize {
        self.candidates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.candidates.is_empty()
    }

    fn complete_identifier(&self, line: &str, pos: usize) -> rustyline::Result<(usize, Vec<Pair>)> {
        let head = &line[..pos];
        let start = head
            .char_indices()
            .rev()
            .find(|(_, c)| !(c.is_alphanumeric() || *c == '_'))
            .map(|(i, c)| i + c.len_utf8())
            .unwrap_or(0);
        let prefix = &head[start..];

        if prefix.is_empty() {
            return Ok((pos, vec![]));
        }

        let matches = self
            .candidates
            .iter()
            .filter(|candidate| candidate.replacement.starts_with(prefix))
            .map(|candidate| Pair {
                display: candidate.display.clone(),
                replacement: candidate.replacement.clone(),
            })
            .collect();

        Ok((start, matches))
    }
}

impl Completer for BindingCompleter {
    type Candidate = Pair;

    fn complete(
        &self,
        line: &str,
        pos: usize,
        _ctx: &Context<'_>,
    ) -> rustyline::Result<(usize, Vec<Pair>)> {
        self.complete_identifier(line, pos)
    }
}
