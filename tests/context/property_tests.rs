use crate::helpers::*;
use quickcheck::{Arbitrary, Gen};
use quickcheck_macros::quickcheck;
use session_context::context::classifier::is_internal;
use session_context::context::functions::{BASELINE_METHODS, ENTRY_POINT};
use session_context::ContextUpdater;
use std::collections::BTreeMap;

#[derive(Clone, Debug)]
struct MemberName(String);

impl Arbitrary for MemberName {
    fn arbitrary(gen: &mut Gen) -> Self {
        let known = [
            "a",
            "b",
            "result",
            "$$implicitReceiver0",
            "$$implicitReceiver3",
            "kotlinVars",
            "script$Line_2",
            "main",
            "toString",
        ];

        if let Some(true) = gen.choose(&[true, false]) {
            match gen.choose(&known) {
                Some(v) => MemberName(v.to_string()),
                None => MemberName(String::arbitrary(gen)),
            }
        } else {
            MemberName(String::arbitrary(gen))
        }
    }
}

#[derive(Clone, Debug)]
struct Session {
    receiver: Vec<(MemberName, i64)>,
    lines: Vec<Vec<(MemberName, i64)>>,
}

impl Arbitrary for Session {
    fn arbitrary(gen: &mut Gen) -> Self {
        Session {
            receiver: Vec::arbitrary(gen),
            lines: Vec::arbitrary(gen),
        }
    }
}

impl Session {
    fn history(&self) -> session_context::session::history::SessionHistory<Unit> {
        let receiver = receiver(
            self.receiver
                .iter()
                .map(|(name, value)| (name.0.as_str(), *value))
                .collect(),
        );

        let units = self
            .lines
            .iter()
            .enumerate()
            .map(|(i, members)| {
                let unit = if i == 0 {
                    first_line(receiver.clone())
                } else {
                    line(i + 1)
                };

                members.iter().fold(unit, |unit, (name, value)| {
                    unit.declare(name.0.clone(), "Int", *value)
                        .expose(method(&format!("Line_{}", i + 1), &name.0), Some(function(i as u64, &name.0)))
                })
            })
            .collect();

        history(units)
    }

    /// Expected registry: receiver first, then lines in order, first binding wins.
    fn expected(&self) -> BTreeMap<String, i64> {
        let mut expected = BTreeMap::new();
        if self.lines.is_empty() {
            return expected;
        }

        for (name, value) in self.receiver.iter().chain(self.lines.iter().flatten()) {
            if !is_internal(&name.0) {
                expected.entry(name.0.clone()).or_insert(*value);
            }
        }
        expected
    }
}

#[quickcheck]
fn internal_names_never_registered(session: Session) -> bool {
    let (variables, functions) = run_update(&ContextUpdater::default(), &session.history());

    variables.keys().all(|name| !is_internal(name))
        && functions
            .iter()
            .all(|f| f.name() != ENTRY_POINT && !is_internal(f.name()))
}

#[quickcheck]
fn first_binding_wins(session: Session) -> bool {
    let (variables, _) = run_update(&ContextUpdater::default(), &session.history());

    let actual: BTreeMap<String, i64> = variables
        .values()
        .map(|binding| (binding.name.clone(), binding.value))
        .collect();

    actual == session.expected()
}

#[quickcheck]
fn baseline_methods_never_registered(lines: u8) -> bool {
    let count = (lines % 5) as usize + 1;
    let units = (1..=count)
        .map(|n| {
            let unit = if n == 1 {
                first_line(empty_receiver())
            } else {
                line(n)
            };

            BASELINE_METHODS.iter().fold(unit, |unit, key| {
                unit.expose(key.clone(), Some(function(n as u64, &key.name)))
            })
        })
        .collect();

    let (_, functions) = run_update(&ContextUpdater::default(), &history(units));
    functions.is_empty()
}
