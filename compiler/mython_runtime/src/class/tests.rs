use super::*;
use pretty_assertions::assert_eq;

fn method(name: &str, params: &[&str]) -> Method {
    Method::new(
        name,
        params.iter().map(ToString::to_string).collect(),
        Statement::none(),
    )
}

fn params_of(class: &Class, name: &str) -> Option<Vec<String>> {
    class.method(name).map(|m| m.formal_params.clone())
}

#[test]
fn method_found_in_own_table() {
    let class = Class::new("A", vec![method("f", &["x"])], None);
    assert_eq!(params_of(&class, "f"), Some(vec!["x".to_string()]));
    assert!(class.method("g").is_none());
}

#[test]
fn first_definition_wins_regardless_of_arity() {
    let class = Class::new("A", vec![method("f", &[]), method("f", &["a", "b"])], None);
    assert_eq!(params_of(&class, "f"), Some(Vec::new()));
}

#[test]
fn method_inherited_from_parent_chain() {
    let base = Rc::new(Class::new("Base", vec![method("f", &["x"])], None));
    let mid = Rc::new(Class::new("Mid", Vec::new(), Some(base)));
    let leaf = Class::new("Leaf", vec![method("g", &[])], Some(mid));
    assert!(leaf.method("f").is_some());
    assert!(leaf.method("g").is_some());
    assert!(leaf.method("h").is_none());
}

#[test]
fn has_method_checks_arity_of_found_method() {
    let parent = Rc::new(Class::new("A", vec![method("f", &["x"])], None));
    let child = Rc::new(Class::new("B", Vec::new(), Some(parent)));
    let inst = ClassInstance::new(child);
    assert!(inst.has_method("f", 1));
    assert!(!inst.has_method("f", 0));
    assert!(!inst.has_method("f", 2));
}

#[test]
fn subclass_method_hides_same_arity_ancestor() {
    let parent = Rc::new(Class::new("A", vec![method("f", &["x"])], None));
    let child = Rc::new(Class::new("B", vec![method("f", &["x", "y"])], Some(parent)));
    let inst = ClassInstance::new(child);
    // A.f takes one argument, but B.f is found first by name.
    assert!(!inst.has_method("f", 1));
    assert!(inst.has_method("f", 2));
}

#[test]
fn fields_persist_and_last_write_wins() {
    let inst = ClassInstance::new(Rc::new(Class::new("A", Vec::new(), None)));
    assert!(inst.field("x").is_none());
    inst.set_field("x", Value::number(1));
    inst.set_field("x", Value::number(2));
    assert_eq!(inst.field("x"), Some(Value::number(2)));
    assert_eq!(inst.fields().len(), 1);
}

#[test]
fn registry_define_and_get() {
    let mut registry = ClassRegistry::new();
    assert!(registry.is_empty());
    let a = registry.define(Class::new("A", Vec::new(), None));
    registry.define(Class::new("B", Vec::new(), Some(Rc::clone(&a))));

    assert_eq!(registry.len(), 2);
    assert!(registry.contains("A"));
    let b = registry.get("B").map(|c| c.parent().map(|p| p.name().to_string()));
    assert_eq!(b, Some(Some("A".to_string())));
    assert!(registry.get("C").is_none());
}

#[test]
fn registry_redefinition_replaces() {
    let mut registry = ClassRegistry::new();
    registry.define(Class::new("A", Vec::new(), None));
    registry.define(Class::new("A", vec![method("f", &[])], None));
    assert_eq!(registry.len(), 1);
    assert!(registry.get("A").is_some_and(|c| c.method("f").is_some()));
}
