use crate::{
    ast::{Expression, InfixOperator, PrefixOperator},
    error::ParseError,
    interpreter::{
        lexer::Token,
        parser::{
            core::{ParseResult, Parser, Precedence},
            statement::parse_block,
        },
    },
};

/// Parses the current identifier token as a name reference.
pub(in crate::interpreter::parser) fn parse_identifier(p: &mut Parser<'_>)
                                                       -> ParseResult<Expression> {
    let Token::Identifier(name) = &p.cur_token else {
        return Err(unexpected(p, "IDENT"));
    };

    Ok(Expression::Identifier { name: name.clone() })
}

/// Parses the current integer token.
///
/// The lexer hands over the raw lexeme; a value outside the signed
/// 64-bit range is reported here with the lexeme quoted.
pub(in crate::interpreter::parser) fn parse_integer_literal(p: &mut Parser<'_>)
                                                            -> ParseResult<Expression> {
    let Token::Integer(literal) = &p.cur_token else {
        return Err(unexpected(p, "INT"));
    };

    literal.parse::<i64>()
           .map(|value| Expression::IntegerLiteral { value })
           .map_err(|_| ParseError::InvalidInteger { literal: literal.clone() })
}

/// Parses the current string token.
pub(in crate::interpreter::parser) fn parse_string_literal(p: &mut Parser<'_>)
                                                           -> ParseResult<Expression> {
    let Token::Str(value) = &p.cur_token else {
        return Err(unexpected(p, "STRING"));
    };

    Ok(Expression::StringLiteral { value: value.clone() })
}

/// Parses `true` or `false`.
pub(in crate::interpreter::parser) fn parse_boolean_literal(p: &mut Parser<'_>)
                                                            -> ParseResult<Expression> {
    Ok(Expression::BooleanLiteral { value: p.cur_token_is(&Token::True) })
}

/// Parses a prefix operator application: `!x` or `-x`.
///
/// The operand is parsed at prefix strength, so `-a * b` groups as
/// `((-a) * b)`.
pub(in crate::interpreter::parser) fn parse_prefix(p: &mut Parser<'_>) -> ParseResult<Expression> {
    let operator = match &p.cur_token {
        Token::Bang => PrefixOperator::Bang,
        Token::Minus => PrefixOperator::Minus,
        _ => return Err(ParseError::NoPrefixParseFn { kind: p.cur_token.kind() }),
    };

    p.next_token();
    let right = p.parse_expression(Precedence::Prefix)?;

    Ok(Expression::Prefix { operator,
                            right: Box::new(right) })
}

/// Extends `left` with a binary operator application.
///
/// The right operand is parsed at the operator's own strength, which
/// makes every operator left-associative.
pub(in crate::interpreter::parser) fn parse_infix(p: &mut Parser<'_>,
                                                  left: Expression)
                                                  -> ParseResult<Expression> {
    let operator = match &p.cur_token {
        Token::Plus => InfixOperator::Add,
        Token::Minus => InfixOperator::Sub,
        Token::Asterisk => InfixOperator::Mul,
        Token::Slash => InfixOperator::Div,
        Token::Lt => InfixOperator::Lt,
        Token::Gt => InfixOperator::Gt,
        Token::Eq => InfixOperator::Eq,
        Token::NotEq => InfixOperator::NotEq,
        _ => return Err(ParseError::NoPrefixParseFn { kind: p.cur_token.kind() }),
    };

    let precedence = p.cur_precedence();
    p.next_token();
    let right = p.parse_expression(precedence)?;

    Ok(Expression::Infix { operator,
                           left: Box::new(left),
                           right: Box::new(right) })
}

/// Parses a parenthesised expression.
pub(in crate::interpreter::parser) fn parse_grouped(p: &mut Parser<'_>)
                                                    -> ParseResult<Expression> {
    p.next_token();

    let expression = p.parse_expression(Precedence::Lowest)?;
    p.expect_peek(&Token::RParen)?;

    Ok(expression)
}

/// Parses a conditional: `if (<cond>) { ... }` with an optional
/// `else { ... }`.
pub(in crate::interpreter::parser) fn parse_if(p: &mut Parser<'_>) -> ParseResult<Expression> {
    p.expect_peek(&Token::LParen)?;
    p.next_token();

    let condition = p.parse_expression(Precedence::Lowest)?;

    p.expect_peek(&Token::RParen)?;
    p.expect_peek(&Token::LBrace)?;

    let consequence = parse_block(p)?;

    let alternative = if p.peek_token_is(&Token::Else) {
        p.next_token();
        p.expect_peek(&Token::LBrace)?;
        Some(parse_block(p)?)
    } else {
        None
    };

    Ok(Expression::If { condition: Box::new(condition),
                        consequence,
                        alternative })
}

/// Parses a function literal: `fn(<params>) { ... }`.
pub(in crate::interpreter::parser) fn parse_function_literal(p: &mut Parser<'_>)
                                                             -> ParseResult<Expression> {
    p.expect_peek(&Token::LParen)?;

    let parameters = parse_function_parameters(p)?;

    p.expect_peek(&Token::LBrace)?;

    let body = parse_block(p)?;

    Ok(Expression::FunctionLiteral { parameters, body })
}

/// Parses a possibly empty, comma-separated parameter list up to `)`.
fn parse_function_parameters(p: &mut Parser<'_>) -> ParseResult<Vec<String>> {
    let mut parameters = Vec::new();

    if p.peek_token_is(&Token::RParen) {
        p.next_token();
        return Ok(parameters);
    }

    parameters.push(p.expect_ident()?);

    while p.peek_token_is(&Token::Comma) {
        p.next_token();
        parameters.push(p.expect_ident()?);
    }

    p.expect_peek(&Token::RParen)?;

    Ok(parameters)
}

/// Extends `left` into a call: `<callee>(<args>)`.
pub(in crate::interpreter::parser) fn parse_call(p: &mut Parser<'_>,
                                                 left: Expression)
                                                 -> ParseResult<Expression> {
    let arguments = parse_expression_list(p, &Token::RParen)?;

    Ok(Expression::Call { function:  Box::new(left),
                          arguments })
}

/// Extends `left` into an index access: `<collection>[<index>]`.
pub(in crate::interpreter::parser) fn parse_index(p: &mut Parser<'_>,
                                                  left: Expression)
                                                  -> ParseResult<Expression> {
    p.next_token();

    let index = p.parse_expression(Precedence::Lowest)?;

    p.expect_peek(&Token::RBracket)?;

    Ok(Expression::Index { left:  Box::new(left),
                           index: Box::new(index) })
}

/// Parses an array literal: `[e1, e2, ...]`.
pub(in crate::interpreter::parser) fn parse_array_literal(p: &mut Parser<'_>)
                                                          -> ParseResult<Expression> {
    let elements = parse_expression_list(p, &Token::RBracket)?;

    Ok(Expression::ArrayLiteral { elements })
}

/// Parses a hash literal: `{k1: v1, k2: v2, ...}`.
///
/// Pairs are kept in source order; the evaluator decides how they are
/// stored.
pub(in crate::interpreter::parser) fn parse_hash_literal(p: &mut Parser<'_>)
                                                         -> ParseResult<Expression> {
    let mut pairs = Vec::new();

    while !p.peek_token_is(&Token::RBrace) {
        p.next_token();

        let key = p.parse_expression(Precedence::Lowest)?;
        p.expect_peek(&Token::Colon)?;
        p.next_token();
        let value = p.parse_expression(Precedence::Lowest)?;

        pairs.push((key, value));

        if !p.peek_token_is(&Token::RBrace) {
            p.expect_peek(&Token::Comma)?;
        }
    }

    p.expect_peek(&Token::RBrace)?;

    Ok(Expression::HashLiteral { pairs })
}

/// Parses a possibly empty, comma-separated expression list terminated
/// by `end`. Shared by array literals and call arguments.
fn parse_expression_list(p: &mut Parser<'_>, end: &Token) -> ParseResult<Vec<Expression>> {
    let mut list = Vec::new();

    if p.peek_token_is(end) {
        p.next_token();
        return Ok(list);
    }

    p.next_token();
    list.push(p.parse_expression(Precedence::Lowest)?);

    while p.peek_token_is(&Token::Comma) {
        p.next_token();
        p.next_token();
        list.push(p.parse_expression(Precedence::Lowest)?);
    }

    p.expect_peek(end)?;

    Ok(list)
}

/// Builds the standard expectation error for the current token.
fn unexpected(p: &Parser<'_>, expected: &'static str) -> ParseError {
    ParseError::UnexpectedToken { expected,
                                  actual: p.cur_token.kind() }
}
