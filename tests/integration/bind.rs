use std::collections::HashSet;

use argbind::{
    ArgumentStack, Binder, BindingError, CommandParameter, CommandSignature, ResolutionContext,
    ResolveError, ResolveResult, ResolverRegistry, Value, ValueResolver,
};

#[derive(Debug, Clone, PartialEq, Eq)]
struct Player {
    name: String,
}

struct PlayerResolver {
    online: HashSet<String>,
}

impl ValueResolver for PlayerResolver {
    type Output = Value;
    fn resolve(&self, ctx: &mut ResolutionContext<'_>) -> ResolveResult<Value> {
        let name = ctx.pop()?;
        if !self.online.contains(&name.to_ascii_lowercase()) {
            return Err(ResolveError::semantic(format!(
                "No player found for name {name}"
            )));
        }
        Ok(Value::custom(Player { name }))
    }
}

fn registry() -> ResolverRegistry {
    let mut registry = ResolverRegistry::new();
    registry.register(
        "player",
        PlayerResolver {
            online: ["steve", "alex"].iter().map(|s| s.to_string()).collect(),
        },
    );
    registry
}

fn give() -> CommandSignature {
    CommandSignature::new(
        "give",
        vec![
            CommandParameter::new("target", "player"),
            CommandParameter::new("amount", "int"),
            CommandParameter::new("note", "string").greedy().optional(),
        ],
    )
    .unwrap()
}

fn toks(line: &str) -> Vec<String> {
    line.split_whitespace().map(str::to_string).collect()
}

#[test]
fn binds_custom_builtin_and_greedy_parameters() {
    let registry = registry();
    let bound = Binder::new(&registry)
        .bind(&give(), &toks("Steve 64 for the new base"))
        .unwrap();

    assert_eq!(
        bound.custom::<Player>(0),
        Some(&Player {
            name: "Steve".into()
        })
    );
    assert_eq!(bound.get::<i32>(1), Some(64));
    assert_eq!(bound.get::<&str>(2), Some("for the new base"));
    let names: Vec<&str> = bound.iter().map(|(n, _)| n).collect();
    assert_eq!(names, vec!["target", "amount", "note"]);
}

#[test]
fn optional_greedy_tail_may_be_absent() {
    let registry = registry();
    let bound = Binder::new(&registry).bind(&give(), &toks("alex 1")).unwrap();
    assert!(bound.by_name("note").unwrap().is_absent());
}

#[test]
fn lookup_failure_is_a_semantic_error_at_its_position() {
    let registry = registry();
    let err: BindingError = Binder::new(&registry)
        .bind(&give(), &toks("herobrine 64"))
        .unwrap_err();
    assert_eq!(err.position, 0);
    assert_eq!(
        err.kind,
        ResolveError::semantic("No player found for name herobrine")
    );
}

#[test]
fn out_of_range_amount_reports_the_raw_token() {
    let registry = registry();
    let raw = toks("steve 99999999999999 extra");
    let mut stack = ArgumentStack::new(&raw);
    let sig = give();
    let err = Binder::new(&registry)
        .bind_stack(sig.name(), sig.parameters(), &mut stack, &raw)
        .unwrap_err();
    assert_eq!(err.position, 1);
    assert!(matches!(
        err.kind,
        ResolveError::InvalidNumber { ref token, .. } if token == "99999999999999"
    ));
    // Player and amount were consumed; the greedy tail was never attempted.
    assert_eq!(stack.iter().collect::<Vec<_>>(), vec!["extra"]);
}

#[test]
fn same_input_binds_identically_on_fresh_stacks() {
    let registry = registry();
    let binder = Binder::new(&registry);
    let raw = toks("steve 3 hi");
    let first = binder.bind(&give(), &raw).unwrap();
    let second = binder.bind(&give(), &raw).unwrap();
    assert_eq!(first.get::<i32>(1), second.get::<i32>(1));
    assert_eq!(first.get::<&str>(2), second.get::<&str>(2));
}
