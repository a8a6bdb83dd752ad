//! The statement tree.
//!
//! Mython does not distinguish expressions from statements: every node
//! executes against an environment and produces a value (possibly the
//! "no value" sentinel). The parser builds this tree; the constructor
//! helpers below exist so hosts and tests can build it by hand.

use std::rc::Rc;

use crate::class::Class;
use crate::function::Function;
use crate::value::Value;

/// Integer arithmetic operators (`+` also covers concatenation and `__add__`).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ArithmeticOp {
    Add,
    Sub,
    Mult,
    Div,
}

impl ArithmeticOp {
    pub fn as_symbol(self) -> &'static str {
        match self {
            ArithmeticOp::Add => "+",
            ArithmeticOp::Sub => "-",
            ArithmeticOp::Mult => "*",
            ArithmeticOp::Div => "/",
        }
    }
}

/// Binary logical operators. Both operands are always evaluated.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum LogicalOp {
    And,
    Or,
}

/// Comparators bound into a `Comparison` node.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum CompareOp {
    Equal,
    NotEqual,
    Less,
    Greater,
    LessOrEqual,
    GreaterOrEqual,
}

impl CompareOp {
    pub fn as_symbol(self) -> &'static str {
        match self {
            CompareOp::Equal => "==",
            CompareOp::NotEqual => "!=",
            CompareOp::Less => "<",
            CompareOp::Greater => ">",
            CompareOp::LessOrEqual => "<=",
            CompareOp::GreaterOrEqual => ">=",
        }
    }
}

/// A node of the program tree.
#[derive(Debug)]
pub enum Statement {
    /// Literal; evaluates to a shared handle of the stored value.
    Constant(Value),
    /// `name = value`
    Assignment { name: String, value: Box<Statement> },
    /// `a.b.c`: a variable followed by a chain of field reads.
    VariableValue { dotted_ids: Vec<String> },
    /// `object.field = value`
    FieldAssignment {
        object: Box<Statement>,
        field: String,
        value: Box<Statement>,
    },
    /// `print a, b, c`
    Print { args: Vec<Statement> },
    /// `object.method(args)`
    MethodCall {
        object: Box<Statement>,
        method: String,
        args: Vec<Statement>,
    },
    /// `Class(args)`
    NewInstance { class: Rc<Class>, args: Vec<Statement> },
    /// Evaluates to a pre-built function value.
    FunctionDefinition(Value),
    /// Evaluates to a pre-built class value.
    ClassDefinition(Value),
    /// `f(args)`
    FunctionCall {
        function: Box<Statement>,
        args: Vec<Statement>,
    },
    /// `str(x)`
    Stringify(Box<Statement>),
    Arithmetic {
        op: ArithmeticOp,
        lhs: Box<Statement>,
        rhs: Box<Statement>,
    },
    Logical {
        op: LogicalOp,
        lhs: Box<Statement>,
        rhs: Box<Statement>,
    },
    Not(Box<Statement>),
    Comparison {
        op: CompareOp,
        lhs: Box<Statement>,
        rhs: Box<Statement>,
    },
    /// A block of statements run in order.
    Compound(Vec<Statement>),
    Return(Box<Statement>),
    IfElse {
        condition: Box<Statement>,
        if_body: Box<Statement>,
        else_body: Option<Box<Statement>>,
    },
}

// Constructors

impl Statement {
    pub fn number(n: i64) -> Self {
        Statement::Constant(Value::number(n))
    }

    pub fn string(s: impl Into<String>) -> Self {
        Statement::Constant(Value::string(s))
    }

    pub fn bool(b: bool) -> Self {
        Statement::Constant(Value::bool(b))
    }

    /// The `None` literal.
    pub fn none() -> Self {
        Statement::Constant(Value::none())
    }

    pub fn assign(name: impl Into<String>, value: Statement) -> Self {
        Statement::Assignment {
            name: name.into(),
            value: Box::new(value),
        }
    }

    /// A plain variable reference.
    pub fn variable(name: impl Into<String>) -> Self {
        Statement::VariableValue {
            dotted_ids: vec![name.into()],
        }
    }

    /// `a.b.c` from `["a", "b", "c"]`.
    pub fn dotted<S: Into<String>>(ids: impl IntoIterator<Item = S>) -> Self {
        Statement::VariableValue {
            dotted_ids: ids.into_iter().map(Into::into).collect(),
        }
    }

    pub fn assign_field(object: Statement, field: impl Into<String>, value: Statement) -> Self {
        Statement::FieldAssignment {
            object: Box::new(object),
            field: field.into(),
            value: Box::new(value),
        }
    }

    pub fn print(args: Vec<Statement>) -> Self {
        Statement::Print { args }
    }

    /// `print name`
    pub fn print_variable(name: impl Into<String>) -> Self {
        Statement::Print {
            args: vec![Statement::variable(name)],
        }
    }

    pub fn method_call(object: Statement, method: impl Into<String>, args: Vec<Statement>) -> Self {
        Statement::MethodCall {
            object: Box::new(object),
            method: method.into(),
            args,
        }
    }

    pub fn new_instance(class: Rc<Class>, args: Vec<Statement>) -> Self {
        Statement::NewInstance { class, args }
    }

    pub fn function_definition(function: Function) -> Self {
        Statement::FunctionDefinition(Value::function(function))
    }

    pub fn class_definition(class: Rc<Class>) -> Self {
        Statement::ClassDefinition(Value::class(class))
    }

    pub fn call(function: Statement, args: Vec<Statement>) -> Self {
        Statement::FunctionCall {
            function: Box::new(function),
            args,
        }
    }

    pub fn stringify(argument: Statement) -> Self {
        Statement::Stringify(Box::new(argument))
    }

    pub fn arithmetic(op: ArithmeticOp, lhs: Statement, rhs: Statement) -> Self {
        Statement::Arithmetic {
            op,
            lhs: Box::new(lhs),
            rhs: Box::new(rhs),
        }
    }

    pub fn add(lhs: Statement, rhs: Statement) -> Self {
        Self::arithmetic(ArithmeticOp::Add, lhs, rhs)
    }

    pub fn sub(lhs: Statement, rhs: Statement) -> Self {
        Self::arithmetic(ArithmeticOp::Sub, lhs, rhs)
    }

    pub fn mult(lhs: Statement, rhs: Statement) -> Self {
        Self::arithmetic(ArithmeticOp::Mult, lhs, rhs)
    }

    pub fn div(lhs: Statement, rhs: Statement) -> Self {
        Self::arithmetic(ArithmeticOp::Div, lhs, rhs)
    }

    pub fn and(lhs: Statement, rhs: Statement) -> Self {
        Statement::Logical {
            op: LogicalOp::And,
            lhs: Box::new(lhs),
            rhs: Box::new(rhs),
        }
    }

    pub fn or(lhs: Statement, rhs: Statement) -> Self {
        Statement::Logical {
            op: LogicalOp::Or,
            lhs: Box::new(lhs),
            rhs: Box::new(rhs),
        }
    }

    pub fn not(argument: Statement) -> Self {
        Statement::Not(Box::new(argument))
    }

    pub fn compare(op: CompareOp, lhs: Statement, rhs: Statement) -> Self {
        Statement::Comparison {
            op,
            lhs: Box::new(lhs),
            rhs: Box::new(rhs),
        }
    }

    pub fn compound(statements: Vec<Statement>) -> Self {
        Statement::Compound(statements)
    }

    pub fn ret(value: Statement) -> Self {
        Statement::Return(Box::new(value))
    }

    pub fn if_else(condition: Statement, if_body: Statement, else_body: Option<Statement>) -> Self {
        Statement::IfElse {
            condition: Box::new(condition),
            if_body: Box::new(if_body),
            else_body: else_body.map(Box::new),
        }
    }

    /// Short node name for tracing.
    pub fn kind_name(&self) -> &'static str {
        match self {
            Statement::Constant(_) => "Constant",
            Statement::Assignment { .. } => "Assignment",
            Statement::VariableValue { .. } => "VariableValue",
            Statement::FieldAssignment { .. } => "FieldAssignment",
            Statement::Print { .. } => "Print",
            Statement::MethodCall { .. } => "MethodCall",
            Statement::NewInstance { .. } => "NewInstance",
            Statement::FunctionDefinition(_) => "FunctionDefinition",
            Statement::ClassDefinition(_) => "ClassDefinition",
            Statement::FunctionCall { .. } => "FunctionCall",
            Statement::Stringify(_) => "Stringify",
            Statement::Arithmetic { .. } => "Arithmetic",
            Statement::Logical { .. } => "Logical",
            Statement::Not(_) => "Not",
            Statement::Comparison { .. } => "Comparison",
            Statement::Compound(_) => "Compound",
            Statement::Return(_) => "Return",
            Statement::IfElse { .. } => "IfElse",
        }
    }
}
