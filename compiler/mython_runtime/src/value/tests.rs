#![allow(clippy::unwrap_used, reason = "Tests use unwrap for brevity")]

use super::*;
use crate::ast::Statement;
use crate::class::{Class, Method};
use pretty_assertions::assert_eq;

fn empty_class(name: &str) -> Rc<Class> {
    Rc::new(Class::new(name, Vec::new(), None))
}

#[test]
fn own_creates_single_owner() {
    let v = Value::number(7);
    assert_eq!(v.owner_count(), 1);
}

#[test]
fn share_aliases_the_same_object() {
    let v = Value::string("abc");
    let alias = v.share();
    assert!(v.ptr_eq(&alias));
    assert_eq!(v.owner_count(), 2);
    drop(alias);
    assert_eq!(v.owner_count(), 1);
}

#[test]
fn field_write_visible_through_every_handle() {
    let obj = Value::instance(empty_class("Point"));
    let alias = obj.share();
    if let Some(inst) = alias.as_instance() {
        inst.set_field("x", Value::number(3));
    }
    let x = obj.as_instance().and_then(|inst| inst.field("x"));
    assert_eq!(x, Some(Value::number(3)));
}

#[test]
fn downcasts_return_none_for_other_variants() {
    let n = Value::number(1);
    assert_eq!(n.as_number(), Some(1));
    assert_eq!(n.as_str(), None);
    assert_eq!(n.as_bool(), None);
    assert!(n.as_instance().is_none());
    assert!(n.as_class().is_none());
    assert!(n.as_function().is_none());
}

#[test]
fn downcasts_on_sentinel_return_none() {
    let none = Value::none();
    assert!(none.is_none());
    assert_eq!(none.as_number(), None);
    assert_eq!(none.as_str(), None);
    assert_eq!(none.type_name(), "None");
}

#[test]
fn dereferencing_sentinel_is_an_error() {
    let err = Value::none().object("print").map(|_| ()).unwrap_err();
    assert_eq!(
        err.kind,
        crate::EvalErrorKind::NoneDereference {
            operation: "print".to_string()
        }
    );
}

#[test]
fn truthiness_rules() {
    assert!(Value::bool(true).is_truthy());
    assert!(!Value::bool(false).is_truthy());
    assert!(Value::number(-2).is_truthy());
    assert!(!Value::number(0).is_truthy());
    assert!(Value::string("x").is_truthy());
    assert!(!Value::string("").is_truthy());
    assert!(Value::instance(empty_class("A")).is_truthy());
    assert!(!Value::class(empty_class("A")).is_truthy());
    assert!(!Value::none().is_truthy());
    let f = crate::Function::user("f", Vec::new(), Statement::none());
    assert!(!Value::function(f).is_truthy());
}

#[test]
fn equality_is_structural_for_primitives_and_identity_otherwise() {
    assert_eq!(Value::number(2), Value::number(2));
    assert_eq!(Value::string("a"), Value::from("a"));
    assert_ne!(Value::number(2), Value::string("2"));
    assert_eq!(Value::none(), Value::none());

    let class = empty_class("A");
    let a = Value::instance(Rc::clone(&class));
    let b = Value::instance(class);
    assert_ne!(a, b);
    assert_eq!(a, a.share());
}

#[test]
fn type_names() {
    let class = Rc::new(Class::new(
        "A",
        vec![Method::new("f", Vec::new(), Statement::none())],
        None,
    ));
    assert_eq!(Value::number(1).type_name(), "Number");
    assert_eq!(Value::string("").type_name(), "String");
    assert_eq!(Value::bool(true).type_name(), "Bool");
    assert_eq!(Value::class(Rc::clone(&class)).type_name(), "Class");
    assert_eq!(Value::instance(class).type_name(), "ClassInstance");
}

#[test]
fn debug_of_self_referencing_instance_terminates() {
    let obj = Value::instance(empty_class("Node"));
    if let Some(inst) = obj.as_instance() {
        inst.set_field("next", obj.share());
    }
    let text = format!("{obj:?}");
    assert!(text.contains("Node"));
    assert!(text.contains("next"));
}
