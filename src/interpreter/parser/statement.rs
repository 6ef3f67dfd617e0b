use crate::{
    ast::{Block, Statement},
    interpreter::{
        lexer::Token,
        parser::core::{ParseResult, Parser, Precedence},
    },
};

/// Parses a single statement.
///
/// Dispatches on the current token: `let` and `return` have dedicated
/// forms, anything else is an expression used as a statement. The
/// trailing semicolon is optional for all three, which is what lets the
/// last expression of a block stand alone as its value.
pub(in crate::interpreter::parser) fn parse_statement(p: &mut Parser<'_>)
                                                      -> ParseResult<Statement> {
    match &p.cur_token {
        Token::Let => parse_let_statement(p),
        Token::Return => parse_return_statement(p),
        _ => parse_expression_statement(p),
    }
}

/// Parses a `let` binding: `let <name> = <expression>;`.
fn parse_let_statement(p: &mut Parser<'_>) -> ParseResult<Statement> {
    let name = p.expect_ident()?;
    p.expect_peek(&Token::Assign)?;
    p.next_token();

    let value = p.parse_expression(Precedence::Lowest)?;

    if p.peek_token_is(&Token::Semicolon) {
        p.next_token();
    }

    Ok(Statement::Let { name, value })
}

/// Parses an early return: `return <expression>;`.
fn parse_return_statement(p: &mut Parser<'_>) -> ParseResult<Statement> {
    p.next_token();

    let value = p.parse_expression(Precedence::Lowest)?;

    if p.peek_token_is(&Token::Semicolon) {
        p.next_token();
    }

    Ok(Statement::Return { value })
}

/// Parses a bare expression in statement position.
fn parse_expression_statement(p: &mut Parser<'_>) -> ParseResult<Statement> {
    let expression = p.parse_expression(Precedence::Lowest)?;

    if p.peek_token_is(&Token::Semicolon) {
        p.next_token();
    }

    Ok(Statement::Expression { expression })
}

/// Parses the statements of a brace-delimited block.
///
/// Called with the current token on `{`; returns with it on the closing
/// `}` (or on end of input, which also closes the block).
pub(in crate::interpreter::parser) fn parse_block(p: &mut Parser<'_>) -> ParseResult<Block> {
    let mut statements = Vec::new();

    p.next_token();

    while !p.cur_token_is(&Token::RBrace) && !p.cur_token_is(&Token::Eof) {
        statements.push(parse_statement(p)?);
        p.next_token();
    }

    Ok(Block { statements })
}
