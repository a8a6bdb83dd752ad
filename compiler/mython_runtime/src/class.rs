//! Classes, instances and method lookup.
//!
//! Lookup is two-phase. `Class::method` finds a method by name only, walking
//! the parent chain; `ClassInstance::has_method` then checks the arity of
//! whatever was found. A subclass method therefore hides every ancestor
//! method of the same name, whatever their parameter counts.

use std::cell::{Ref, RefCell};
use std::fmt;
use std::rc::Rc;

use rustc_hash::FxHashMap;

use crate::ast::Statement;
use crate::environment::Environment;
use crate::value::Value;

/// A method definition.
#[derive(Debug)]
pub struct Method {
    pub name: String,
    pub formal_params: Vec<String>,
    pub body: Rc<Statement>,
}

impl Method {
    pub fn new(name: impl Into<String>, formal_params: Vec<String>, body: Statement) -> Self {
        Method {
            name: name.into(),
            formal_params,
            body: Rc::new(body),
        }
    }

    #[inline]
    pub fn arity(&self) -> usize {
        self.formal_params.len()
    }
}

/// Class metadata: name, ordered method table and an optional parent.
#[derive(Debug)]
pub struct Class {
    name: String,
    methods: Vec<Method>,
    parent: Option<Rc<Class>>,
}

impl Class {
    pub fn new(name: impl Into<String>, methods: Vec<Method>, parent: Option<Rc<Class>>) -> Self {
        Class {
            name: name.into(),
            methods,
            parent,
        }
    }

    /// The class name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The direct parent, if any.
    pub fn parent(&self) -> Option<&Rc<Class>> {
        self.parent.as_ref()
    }

    /// Find a method by name: own table first (first match wins), then the
    /// parent chain. Arity is not considered.
    pub fn method(&self, name: &str) -> Option<&Method> {
        let mut class = self;
        loop {
            if let Some(method) = class.methods.iter().find(|m| m.name == name) {
                return Some(method);
            }
            class = class.parent.as_deref()?;
        }
    }
}

/// A live object: its class plus persistent field storage.
///
/// Fields live for the whole lifetime of the instance. Method calls never
/// write parameters here; they get their own frame.
pub struct ClassInstance {
    class: Rc<Class>,
    fields: RefCell<Environment>,
}

impl ClassInstance {
    pub fn new(class: Rc<Class>) -> Self {
        ClassInstance {
            class,
            fields: RefCell::new(Environment::new()),
        }
    }

    pub fn class(&self) -> &Rc<Class> {
        &self.class
    }

    /// `true` iff name lookup finds a method and that method takes exactly
    /// `arg_count` parameters.
    pub fn has_method(&self, name: &str, arg_count: usize) -> bool {
        self.class
            .method(name)
            .is_some_and(|method| method.arity() == arg_count)
    }

    /// Read a field. The returned handle shares the stored object.
    pub fn field(&self, name: &str) -> Option<Value> {
        self.fields.borrow().get(name)
    }

    /// Write a field (last write wins).
    pub fn set_field(&self, name: impl Into<String>, value: Value) {
        self.fields.borrow_mut().define(name, value);
    }

    /// Borrow the whole field storage.
    pub fn fields(&self) -> Ref<'_, Environment> {
        self.fields.borrow()
    }
}

impl fmt::Debug for ClassInstance {
    // Field values are not printed: an instance may reach itself through them.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let fields = self.fields.borrow();
        let mut names: Vec<&str> = fields.names().collect();
        names.sort_unstable();
        f.debug_struct("ClassInstance")
            .field("class", &self.class.name())
            .field("fields", &names)
            .finish()
    }
}

/// The program's classes, reachable by name.
#[derive(Debug, Default)]
pub struct ClassRegistry {
    classes: FxHashMap<String, Rc<Class>>,
}

impl ClassRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a class, replacing any earlier class of the same name.
    /// Returns the shared handle now stored in the registry.
    pub fn define(&mut self, class: Class) -> Rc<Class> {
        let class = Rc::new(class);
        tracing::trace!(class = class.name(), "class defined");
        self.classes
            .insert(class.name().to_string(), Rc::clone(&class));
        class
    }

    /// Look up a class by name.
    pub fn get(&self, name: &str) -> Option<Rc<Class>> {
        self.classes.get(name).cloned()
    }

    /// `true` if a class of that name is registered.
    pub fn contains(&self, name: &str) -> bool {
        self.classes.contains_key(name)
    }

    /// Number of registered classes.
    pub fn len(&self) -> usize {
        self.classes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.classes.is_empty()
    }

    /// Every registered class, in no particular order.
    pub fn iter(&self) -> impl Iterator<Item = &Rc<Class>> {
        self.classes.values()
    }
}

#[cfg(test)]
mod tests;
