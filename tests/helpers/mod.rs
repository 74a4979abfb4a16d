use session_context::context::binding::{FunctionRegistry, VariableRegistry};
use session_context::context::classifier::RECEIVER_LINK_FIELD;
use session_context::context::ContextUpdater;
use session_context::session::history::SessionHistory;
use session_context::session::member::{
    DataMember, DeclarationId, FunctionDescriptor, MethodKey, Parameter,
};
use session_context::session::unit::{DeclarationLayer, Receiver, ScriptUnit};
use std::rc::Rc;

pub type Unit = ScriptUnit<i64>;

pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// A unit as the interpreter compiles the n-th line of a session.
pub fn line(n: usize) -> Unit {
    ScriptUnit::new(format!("Line_{}", n))
}

/// The first line of a session, linked to `receiver`.
pub fn first_line(receiver: Rc<Receiver<i64>>) -> Unit {
    line(1).link_receiver(RECEIVER_LINK_FIELD, receiver)
}

pub fn receiver(members: Vec<(&str, i64)>) -> Rc<Receiver<i64>> {
    let members = members
        .into_iter()
        .map(|(name, value)| DataMember::user(name, "Int", value))
        .collect();

    Rc::new(Receiver::new(vec![DeclarationLayer::new("Receiver", members)]))
}

pub fn empty_receiver() -> Rc<Receiver<i64>> {
    Rc::new(Receiver::new(vec![]))
}

pub fn function(id: u64, name: &str) -> FunctionDescriptor {
    FunctionDescriptor::new(
        DeclarationId(id),
        name,
        vec![Parameter::new("x", "Int")],
        "Int",
    )
}

pub fn method(owner: &str, name: &str) -> MethodKey {
    MethodKey::new(owner, name, &["int"])
}

pub fn history(units: Vec<Unit>) -> SessionHistory<Unit> {
    let mut history = SessionHistory::new();
    for unit in units {
        history.push(unit);
    }
    history
}

pub fn run_update(
    updater: &ContextUpdater,
    history: &SessionHistory<Unit>,
) -> (VariableRegistry<i64>, FunctionRegistry) {
    let mut variables = VariableRegistry::default();
    let mut functions = FunctionRegistry::default();
    updater.update(history, &mut variables, &mut functions);
    (variables, functions)
}

pub fn values(variables: &VariableRegistry<i64>) -> Vec<(String, i64)> {
    let mut values: Vec<_> = variables
        .values()
        .map(|binding| (binding.name.clone(), binding.value))
        .collect();
    values.sort();
    values
}
