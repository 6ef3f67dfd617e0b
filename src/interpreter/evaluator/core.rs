use std::rc::Rc;

use crate::{
    ast::{Block, Expression, Program, Statement},
    error::RuntimeError,
    interpreter::{
        evaluator::{builtin, collections, infix, prefix},
        value::{
            core::{Function, Value},
            environment::{EnvRef, Environment},
        },
    },
};

/// Evaluates a whole program against an environment.
///
/// Statements run in order. An error value ends the run and becomes the
/// result; a return value ends the run and its payload becomes the
/// result. Otherwise the program's value is the value of its last
/// statement, or null for an empty program.
///
/// A `let` that re-binds an existing name replaces `env` with a fresh
/// enclosed frame, which is why the handle is taken mutably: callers
/// that run several programs against one environment (the REPL) keep
/// the shadowing visible across runs.
pub fn eval_program(program: &Program, env: &mut EnvRef) -> Value {
    let mut result = Value::Null;

    for statement in &program.statements {
        result = eval_statement(statement, env);

        match result {
            Value::Error(_) => return result,
            Value::Return(value) => return *value,
            _ => {},
        }
    }

    result
}

/// Evaluates one statement.
///
/// A `let` binds into the innermost frame and has no value of its own.
/// Re-binding a name the innermost frame already holds opens a fresh
/// enclosed frame instead of overwriting, so closures that captured
/// the old frame keep seeing the old value; the new frame becomes the
/// environment for the statements that follow.
///
/// A `return` wraps its operand in the return sentinel so enclosing
/// blocks can pass it outward unchanged.
fn eval_statement(statement: &Statement, env: &mut EnvRef) -> Value {
    match statement {
        Statement::Let { name, value } => {
            let value = eval_expression(value, env);
            if value.is_error() {
                return value;
            }
            if env.borrow().binds(name) {
                let shadowing = Environment::new_enclosed(env);
                *env = shadowing;
            }
            env.borrow_mut().set(name.clone(), value);
            Value::Null
        },
        Statement::Return { value } => {
            let value = eval_expression(value, env);
            if value.is_error() {
                return value;
            }
            Value::Return(Box::new(value))
        },
        Statement::Expression { expression } => eval_expression(expression, env),
    }
}

/// Evaluates the statements of a block.
///
/// Unlike [`eval_program`], a return sentinel is passed through still
/// wrapped. Only the function boundary unwraps it, which is what makes
/// `return` inside nested blocks unwind to the enclosing function and
/// no further.
///
/// Shadowing frames opened inside the block end with it; bindings for
/// fresh names go into the shared frame and stay visible afterwards.
fn eval_block(block: &Block, env: &EnvRef) -> Value {
    let mut env = Rc::clone(env);
    let mut result = Value::Null;

    for statement in &block.statements {
        result = eval_statement(statement, &mut env);

        if matches!(result, Value::Return(_) | Value::Error(_)) {
            return result;
        }
    }

    result
}

/// Evaluates a single expression.
pub fn eval_expression(expression: &Expression, env: &EnvRef) -> Value {
    match expression {
        Expression::Identifier { name } => eval_identifier(name, env),
        Expression::IntegerLiteral { value } => Value::Integer(*value),
        Expression::BooleanLiteral { value } => Value::Boolean(*value),
        Expression::StringLiteral { value } => Value::from(value.as_str()),
        Expression::ArrayLiteral { elements } => match eval_expressions(elements, env) {
            Ok(elements) => Value::from(elements),
            Err(error) => error,
        },
        Expression::HashLiteral { pairs } => collections::eval_hash_literal(pairs, env),
        Expression::Prefix { operator, right } => {
            let right = eval_expression(right, env);
            if right.is_error() {
                return right;
            }
            prefix::eval(*operator, right)
        },
        Expression::Infix { operator, left, right } => {
            let left = eval_expression(left, env);
            if left.is_error() {
                return left;
            }
            let right = eval_expression(right, env);
            if right.is_error() {
                return right;
            }
            infix::eval(*operator, left, right)
        },
        Expression::If { condition,
                         consequence,
                         alternative, } => {
            eval_if(condition, consequence, alternative.as_ref(), env)
        },
        Expression::FunctionLiteral { parameters, body } => {
            Value::Function(Rc::new(Function { parameters: parameters.clone(),
                                               body:       body.clone(),
                                               env:        Rc::clone(env), }))
        },
        Expression::Call { function, arguments } => {
            let callee = eval_expression(function, env);
            if callee.is_error() {
                return callee;
            }
            match eval_expressions(arguments, env) {
                Ok(arguments) => apply_function(&callee, arguments),
                Err(error) => error,
            }
        },
        Expression::Index { left, index } => {
            let left = eval_expression(left, env);
            if left.is_error() {
                return left;
            }
            let index = eval_expression(index, env);
            if index.is_error() {
                return index;
            }
            collections::eval_index(&left, &index)
        },
    }
}

/// Resolves a name against the environment chain, then the builtins.
///
/// User bindings always win; a builtin is only consulted when the whole
/// chain misses.
fn eval_identifier(name: &str, env: &EnvRef) -> Value {
    if let Some(value) = env.borrow().get(name) {
        return value;
    }

    match builtin::lookup(name) {
        Some(builtin) => Value::Builtin(builtin),
        None => Value::Error(RuntimeError::IdentifierNotFound { name: name.to_string() }),
    }
}

/// Evaluates a conditional expression.
///
/// Null and false are the only falsy values; a missing alternative
/// makes a falsy condition evaluate to null.
fn eval_if(condition: &Expression,
           consequence: &Block,
           alternative: Option<&Block>,
           env: &EnvRef)
           -> Value {
    let condition = eval_expression(condition, env);
    if condition.is_error() {
        return condition;
    }

    if condition.is_truthy() {
        eval_block(consequence, env)
    } else if let Some(alternative) = alternative {
        eval_block(alternative, env)
    } else {
        Value::Null
    }
}

/// Evaluates an expression list left to right.
///
/// The first error stops evaluation; later expressions never run. The
/// error comes back through `Err` so call sites surface it as the sole
/// result.
fn eval_expressions(expressions: &[Expression], env: &EnvRef) -> Result<Vec<Value>, Value> {
    let mut values = Vec::with_capacity(expressions.len());

    for expression in expressions {
        let value = eval_expression(expression, env);
        if value.is_error() {
            return Err(value);
        }
        values.push(value);
    }

    Ok(values)
}

/// Applies a callee to already-evaluated arguments.
///
/// A user function gets a fresh frame enclosed by its captured
/// environment (not the caller's), parameters bound positionally, and a
/// single layer of return sentinel unwrapped from the body's result.
fn apply_function(callee: &Value, arguments: Vec<Value>) -> Value {
    match callee {
        Value::Function(function) => {
            if arguments.len() != function.parameters.len() {
                return Value::Error(RuntimeError::WrongArgumentCount {
                    got:  arguments.len(),
                    want: function.parameters.len(),
                });
            }

            let extended = Environment::new_enclosed(&function.env);
            for (parameter, argument) in function.parameters.iter().zip(arguments) {
                extended.borrow_mut().set(parameter.clone(), argument);
            }

            match eval_block(&function.body, &extended) {
                Value::Return(value) => *value,
                other => other,
            }
        },
        Value::Builtin(builtin) => builtin.apply(&arguments),
        other => Value::Error(RuntimeError::NotAFunction { type_name: other.type_name() }),
    }
}
