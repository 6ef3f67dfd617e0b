use std::fmt;

/// The root node produced by a single parse.
///
/// A program is the ordered sequence of statements read from one source
/// input. Rendering a program concatenates the rendered statements, which
/// is what the parser tests compare against.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Program {
    /// The top-level statements in source order.
    pub statements: Vec<Statement>,
}

/// A sequence of statements enclosed in braces.
///
/// Blocks appear as the branches of `if` expressions and as function
/// bodies. They are not statements themselves; the grammar only produces
/// them inside those constructs.
#[derive(Debug, Clone, PartialEq)]
pub struct Block {
    /// The statements in source order.
    pub statements: Vec<Statement>,
}

/// A top-level or block-level statement.
#[derive(Debug, Clone, PartialEq)]
pub enum Statement {
    /// A `let` binding: `let <name> = <value>;`.
    Let {
        /// The name being bound. The grammar guarantees an identifier.
        name:  String,
        /// The bound expression.
        value: Expression,
    },
    /// An early return: `return <value>;`.
    Return {
        /// The returned expression.
        value: Expression,
    },
    /// A bare expression evaluated for its value.
    Expression {
        /// The wrapped expression.
        expression: Expression,
    },
}

/// An expression node.
///
/// Expressions cover every construct that produces a value, from literals
/// through operator applications to function literals and calls. Prefix
/// and infix renderings are fully parenthesised so that precedence is
/// explicit in the printed form.
#[derive(Debug, Clone, PartialEq)]
pub enum Expression {
    /// A reference to a binding by name.
    Identifier {
        /// The referenced name.
        name: String,
    },
    /// A 64-bit signed integer literal.
    IntegerLiteral {
        /// The literal value.
        value: i64,
    },
    /// A boolean literal, `true` or `false`.
    BooleanLiteral {
        /// The literal value.
        value: bool,
    },
    /// A double-quoted string literal.
    StringLiteral {
        /// The literal contents, without the surrounding quotes.
        value: String,
    },
    /// An array literal: `[e1, e2, ...]`.
    ArrayLiteral {
        /// The element expressions in source order.
        elements: Vec<Expression>,
    },
    /// A hash literal: `{k1: v1, k2: v2, ...}`.
    ///
    /// Pairs keep their source order, which only matters for rendering;
    /// evaluation stores them in an unordered map.
    HashLiteral {
        /// The key/value expression pairs in source order.
        pairs: Vec<(Expression, Expression)>,
    },
    /// A prefix operator application: `!x` or `-x`.
    Prefix {
        /// The applied operator.
        operator: PrefixOperator,
        /// The operand.
        right:    Box<Expression>,
    },
    /// A binary operator application.
    Infix {
        /// The applied operator.
        operator: InfixOperator,
        /// The left operand.
        left:     Box<Expression>,
        /// The right operand.
        right:    Box<Expression>,
    },
    /// A conditional expression with an optional alternative branch.
    If {
        /// The tested condition.
        condition:   Box<Expression>,
        /// The branch taken when the condition is truthy.
        consequence: Block,
        /// The branch taken otherwise, if present.
        alternative: Option<Block>,
    },
    /// A function literal: `fn(a, b) { ... }`.
    FunctionLiteral {
        /// The parameter names in declaration order.
        parameters: Vec<String>,
        /// The function body.
        body:       Block,
    },
    /// A call: `<callee>(a, b)`.
    Call {
        /// The expression evaluating to the callee.
        function:  Box<Expression>,
        /// The argument expressions in source order.
        arguments: Vec<Expression>,
    },
    /// An index access: `<collection>[<index>]`.
    Index {
        /// The indexed expression.
        left:  Box<Expression>,
        /// The index expression.
        index: Box<Expression>,
    },
}

/// A prefix (unary) operator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PrefixOperator {
    /// Logical negation (`!x`).
    Bang,
    /// Arithmetic negation (`-x`).
    Minus,
}

/// A binary operator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InfixOperator {
    /// Addition (`+`)
    Add,
    /// Subtraction (`-`)
    Sub,
    /// Multiplication (`*`)
    Mul,
    /// Division (`/`)
    Div,
    /// Less than (`<`)
    Lt,
    /// Greater than (`>`)
    Gt,
    /// Equal to (`==`)
    Eq,
    /// Not equal to (`!=`)
    NotEq,
}

impl fmt::Display for PrefixOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let operator = match self {
            Self::Bang => "!",
            Self::Minus => "-",
        };
        write!(f, "{operator}")
    }
}

impl fmt::Display for InfixOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let operator = match self {
            Self::Add => "+",
            Self::Sub => "-",
            Self::Mul => "*",
            Self::Div => "/",
            Self::Lt => "<",
            Self::Gt => ">",
            Self::Eq => "==",
            Self::NotEq => "!=",
        };
        write!(f, "{operator}")
    }
}

impl fmt::Display for Program {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for statement in &self.statements {
            write!(f, "{statement}")?;
        }
        Ok(())
    }
}

impl fmt::Display for Block {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for statement in &self.statements {
            write!(f, "{statement}")?;
        }
        Ok(())
    }
}

impl fmt::Display for Statement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Let { name, value } => write!(f, "let {name} = {value};"),
            Self::Return { value } => write!(f, "return {value};"),
            Self::Expression { expression } => write!(f, "{expression}"),
        }
    }
}

impl fmt::Display for Expression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Identifier { name } => write!(f, "{name}"),
            Self::IntegerLiteral { value } => write!(f, "{value}"),
            Self::BooleanLiteral { value } => write!(f, "{value}"),
            Self::StringLiteral { value } => write!(f, "{value}"),
            Self::ArrayLiteral { elements } => {
                write!(f, "[")?;
                write_joined(f, elements)?;
                write!(f, "]")
            },
            Self::HashLiteral { pairs } => {
                write!(f, "{{")?;
                for (index, (key, value)) in pairs.iter().enumerate() {
                    if index > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{key}: {value}")?;
                }
                write!(f, "}}")
            },
            Self::Prefix { operator, right } => write!(f, "({operator}{right})"),
            Self::Infix { operator, left, right } => write!(f, "({left} {operator} {right})"),
            Self::If { condition,
                       consequence,
                       alternative, } => {
                write!(f, "if{condition} {consequence}")?;
                if let Some(alternative) = alternative {
                    write!(f, " else {alternative}")?;
                }
                Ok(())
            },
            Self::FunctionLiteral { parameters, body } => {
                write!(f, "fn(")?;
                for (index, parameter) in parameters.iter().enumerate() {
                    if index > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{parameter}")?;
                }
                write!(f, ") {body}")
            },
            Self::Call { function, arguments } => {
                write!(f, "{function}(")?;
                write_joined(f, arguments)?;
                write!(f, ")")
            },
            Self::Index { left, index } => write!(f, "({left}[{index}])"),
        }
    }
}

/// Writes a comma-separated expression list.
fn write_joined(f: &mut fmt::Formatter<'_>, expressions: &[Expression]) -> fmt::Result {
    for (index, expression) in expressions.iter().enumerate() {
        if index > 0 {
            write!(f, ", ")?;
        }
        write!(f, "{expression}")?;
    }
    Ok(())
}
