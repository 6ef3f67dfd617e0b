/// The evaluator module executes AST nodes and computes results.
///
/// The evaluator walks the AST recursively, sequencing statements,
/// applying operators, resolving identifiers through the environment
/// chain, and applying functions and builtins. It is the core execution
/// engine of the interpreter.
///
/// # Responsibilities
/// - Evaluates AST nodes against an environment, producing values.
/// - Implements closures by pairing functions with their defining
///   environment.
/// - Carries early returns and runtime errors in-band as sentinel
///   values.
pub mod evaluator;
/// The lexer module tokenizes source code for further parsing.
///
/// The lexer reads the raw source text and produces a stream of tokens,
/// each corresponding to a meaningful language element such as an
/// integer, identifier, operator, delimiter, or keyword. This is the
/// first stage of interpretation.
///
/// # Responsibilities
/// - Converts the input character stream into classified tokens.
/// - Handles integer and string literals, identifiers, and operators.
/// - Stays total: unrecognized characters become tokens the parser
///   rejects, never lexer failures.
pub mod lexer;
/// The parser module builds the abstract syntax tree (AST) from tokens.
///
/// The parser processes the token stream produced by the lexer and
/// constructs an AST representing the syntactic structure of statements
/// and expressions. Operator precedence is handled by a Pratt parser
/// with per-token-kind dispatch tables.
///
/// # Responsibilities
/// - Converts tokens into structured AST nodes (expressions,
///   statements).
/// - Accumulates grammar errors instead of aborting, so one pass
///   reports every broken statement.
/// - Supports operators, conditionals, function literals, calls,
///   arrays, and hashes.
pub mod parser;
/// The value module defines the runtime data types for evaluation.
///
/// This module declares all the value types used during execution:
/// integers, booleans, strings, arrays, hashes, functions and builtins,
/// plus the return and error sentinels. It also holds the environment
/// frames that give the language lexical scope, and the hash key
/// derivation used by hash values.
///
/// # Responsibilities
/// - Defines the `Value` enum and all supported value variants.
/// - Implements type names, truthiness, and printable inspect forms.
/// - Provides shared, nestable environment frames for closures.
pub mod value;
