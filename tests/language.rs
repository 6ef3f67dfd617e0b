use std::fs;

use walkdir::WalkDir;
use wisp::{execute, interpreter::value::environment::Environment};

/// Runs a source string in a fresh environment and returns the inspect
/// form of its result. Runtime errors come back as their `ERROR: ...`
/// rendering; parse errors fail the test.
fn run(source: &str) -> String {
    let mut env = Environment::new().into_ref();

    match execute(source, &mut env) {
        Ok(value) => value.to_string(),
        Err(errors) => panic!("unexpected parse errors in {source:?}: {errors:?}"),
    }
}

fn assert_result(source: &str, expected: &str) {
    assert_eq!(run(source), expected, "source: {source}");
}

#[test]
fn book_examples_work() {
    let mut count = 0;

    for entry in
        WalkDir::new("book/src").into_iter()
                                .filter_map(Result::ok)
                                .filter(|e| e.path().extension().is_some_and(|ext| ext == "md"))
    {
        let path = entry.path();
        let content =
            fs::read_to_string(path).unwrap_or_else(|e| panic!("Failed to read {path:?}: {e}"));

        for (i, code) in extract_wisp_blocks(&content).into_iter().enumerate() {
            count += 1;
            let mut env = Environment::new().into_ref();
            match execute(&code, &mut env) {
                Ok(value) => {
                    assert!(!value.is_error(),
                            "example {} in {:?} produced {}:\n{}",
                            i + 1,
                            path,
                            value,
                            code);
                },
                Err(errors) => panic!("example {} in {:?} failed to parse:\n{}\nErrors: {:?}",
                                      i + 1,
                                      path,
                                      code,
                                      errors),
            }
        }
    }

    assert!(count > 0, "No language examples found in book/src");
}

fn extract_wisp_blocks(content: &str) -> Vec<String> {
    let mut blocks = Vec::new();
    let mut inside = false;
    let mut buf = String::new();

    for line in content.lines() {
        let trimmed = line.trim_start();
        if trimmed.starts_with("```wisp") {
            inside = true;
            buf.clear();
            continue;
        }
        if inside && trimmed.starts_with("```") {
            inside = false;
            blocks.push(buf.clone());
            continue;
        }
        if inside {
            buf.push_str(line);
            buf.push('\n');
        }
    }

    blocks
}

#[test]
fn integer_arithmetic() {
    assert_result("5", "5");
    assert_result("10", "10");
    assert_result("-5", "-5");
    assert_result("-10", "-10");
    assert_result("5 + 5 + 5 + 5 - 10", "10");
    assert_result("2 * 2 * 2 * 2 * 2", "32");
    assert_result("-50 + 100 + -50", "0");
    assert_result("5 * 2 + 10", "20");
    assert_result("5 + 2 * 10", "25");
    assert_result("20 + 2 * -10", "0");
    assert_result("50 / 2 * 2 + 10", "60");
    assert_result("2 * (5 + 10)", "30");
    assert_result("3 * 3 * 3 + 10", "37");
    assert_result("3 * (3 * 3) + 10", "37");
    assert_result("(5 + 10 * 2 + 15 / 3) * 2 + -10", "50");
}

#[test]
fn division_truncates_toward_zero() {
    assert_result("7 / 2", "3");
    assert_result("-7 / 2", "-3");
    assert_result("7 / -2", "-3");
}

#[test]
fn division_by_zero_is_an_error() {
    assert_result("5 / 0", "ERROR: division by zero");
    assert_result("let x = 0; 1 / x", "ERROR: division by zero");
}

#[test]
fn boolean_expressions() {
    assert_result("true", "true");
    assert_result("false", "false");
    assert_result("1 < 2", "true");
    assert_result("1 > 2", "false");
    assert_result("1 < 1", "false");
    assert_result("1 > 1", "false");
    assert_result("1 == 1", "true");
    assert_result("1 != 1", "false");
    assert_result("1 == 2", "false");
    assert_result("1 != 2", "true");
    assert_result("true == true", "true");
    assert_result("false == false", "true");
    assert_result("true == false", "false");
    assert_result("true != false", "true");
    assert_result("(1 < 2) == true", "true");
    assert_result("(1 < 2) == false", "false");
    assert_result("(1 > 2) == true", "false");
    assert_result("(1 > 2) == false", "true");
}

#[test]
fn bang_operator() {
    assert_result("!true", "false");
    assert_result("!false", "true");
    assert_result("!5", "false");
    assert_result("!!true", "true");
    assert_result("!!false", "false");
    assert_result("!!5", "true");
}

#[test]
fn if_else_expressions() {
    assert_result("if (true) { 10 }", "10");
    assert_result("if (false) { 10 }", "null");
    assert_result("if (1) { 10 }", "10");
    assert_result("if (1 < 2) { 10 }", "10");
    assert_result("if (1 > 2) { 10 }", "null");
    assert_result("if (1 > 2) { 10 } else { 20 }", "20");
    assert_result("if (1 < 2) { 10 } else { 20 }", "10");
}

#[test]
fn everything_but_null_and_false_is_truthy() {
    assert_result("if (0) { 1 } else { 2 }", "1");
    assert_result("if (\"\") { 1 } else { 2 }", "1");
    assert_result("if (\"false\") { 1 } else { 2 }", "1");
    assert_result("if ([]) { 1 } else { 2 }", "1");
    // The only source-level way to produce null is an if without an
    // alternative.
    assert_result("if (if (false) { 1 }) { 1 } else { 2 }", "2");
}

#[test]
fn return_statements() {
    assert_result("return 10;", "10");
    assert_result("return 10; 9;", "10");
    assert_result("return 2 * 5; 9;", "10");
    assert_result("9; return 2 * 5; 9;", "10");
}

#[test]
fn return_unwinds_to_the_nearest_function_boundary() {
    assert_result("if (10 > 1) { if (10 > 1) { return 10; } return 1; }", "10");
    assert_result("let f = fn() { if (true) { if (true) { return 1; } return 2; } return 3; }; \
                   f()",
                  "1");
}

#[test]
fn let_statements() {
    assert_result("let a = 5; a;", "5");
    assert_result("let a = 5 * 5; a;", "25");
    assert_result("let a = 5; let b = a; b;", "5");
    assert_result("let a = 5; let b = a; let c = a + b + 5; c;", "15");
    // A let has no value of its own.
    assert_result("let a = 5;", "null");
}

#[test]
fn rebinding_shadows_instead_of_overwriting() {
    assert_result("let x = 5; let x = x + 5; x", "10");
    // The closure keeps seeing the binding that was current when the
    // function literal was evaluated.
    assert_result("let x = 5; let f = fn() { x }; let x = 10; f()", "5");
    assert_result("let x = 5; let f = fn() { x }; let x = 10; x", "10");
}

#[test]
fn functions_and_calls() {
    assert_result("let identity = fn(x) { x; }; identity(5);", "5");
    assert_result("let identity = fn(x) { return x; }; identity(5);", "5");
    assert_result("let double = fn(x) { x * 2; }; double(5);", "10");
    assert_result("let add = fn(x, y) { x + y; }; add(5, 5);", "10");
    assert_result("let add = fn(x, y) { x + y; }; add(5 + 5, add(5, 5));", "20");
    assert_result("fn(x) { x; }(5)", "5");
}

#[test]
fn functions_are_first_class() {
    assert_result("let applyFunc = fn(a, b, func) { func(a, b) }; \
                   applyFunc(2, 2, fn(a, b) { a * b })",
                  "4");
    assert_result("let makeGreeter = fn(greeting) { fn(name) { greeting + \" \" + name } }; \
                   let hello = makeGreeter(\"Hello\"); hello(\"wisp\")",
                  "Hello wisp");
}

#[test]
fn closures_capture_their_defining_environment() {
    assert_result("let newAdder = fn(x) { fn(y) { x + y } }; \
                   let addTwo = newAdder(2); addTwo(3)",
                  "5");
    assert_result("let newAdder = fn(x) { fn(y) { x + y } }; \
                   let addTwo = newAdder(2); let addTen = newAdder(10); \
                   addTwo(1) + addTen(1)",
                  "14");
}

#[test]
fn recursion_resolves_through_the_captured_environment() {
    assert_result("let fact = fn(n) { if (n < 1) { 1 } else { n * fact(n - 1) } }; fact(5)",
                  "120");
    assert_result("let fib = fn(n) { if (n < 2) { return n; } fib(n - 1) + fib(n - 2) }; \
                   fib(10)",
                  "55");
}

#[test]
fn call_arity_is_checked() {
    assert_result("let add = fn(a, b) { a + b }; add(1)",
                  "ERROR: wrong number of arguments. got=1, want=2");
    assert_result("let add = fn(a, b) { a + b }; add(1, 2, 3)",
                  "ERROR: wrong number of arguments. got=3, want=2");
    assert_result("fn() { 1 }()", "1");
}

#[test]
fn function_inspect_form() {
    assert_result("fn(x) { x + 2 }", "fn(x) {\n(x + 2)\n}");
}

#[test]
fn string_literals_and_concatenation() {
    assert_result("\"Hello World!\"", "Hello World!");
    assert_result("\"Hello\" + \" \" + \"World!\"", "Hello World!");
}

#[test]
fn string_equality_compares_contents() {
    assert_result("\"a\" == \"a\"", "true");
    assert_result("\"a\" == \"b\"", "false");
    assert_result("\"a\" != \"b\"", "true");
    assert_result("let a = \"wi\" + \"sp\"; let b = \"wisp\"; a == b", "true");
}

#[test]
fn arrays() {
    assert_result("[1, 2 * 2, 3 + 3]", "[1, 4, 6]");
    assert_result("[]", "[]");
    assert_result("let myArray = [1, 2, 3]; myArray[2];", "3");
    assert_result("let a = [1, 2 * 2, 3 + 3]; a[1]", "4");
    assert_result("[1, 2, 3][0]", "1");
    assert_result("let i = 0; [1][i];", "1");
    assert_result("[1, 2, 3][1 + 1];", "3");
    assert_result("let myArray = [1, 2, 3]; myArray[0] + myArray[1] + myArray[2];", "6");
}

#[test]
fn out_of_bounds_indexing_is_null_not_an_error() {
    assert_result("[1, 2, 3][3]", "null");
    assert_result("[1, 2, 3][-1]", "null");
    assert_result("[][0]", "null");
}

#[test]
fn aggregate_equality_is_identity() {
    assert_result("[1, 2] == [1, 2]", "false");
    assert_result("let a = [1, 2]; a == a", "true");
    assert_result("let a = [1, 2]; let b = a; a == b", "true");
    assert_result("let a = [1]; let b = [1]; a != b", "true");
}

#[test]
fn hash_literals() {
    assert_result("{\"one\": 1}", "{one: 1}");
    assert_result("{}", "{}");
    // Expression keys are evaluated before hashing.
    assert_result("{\"thr\" + \"ee\": 6 / 2}", "{three: 3}");
    // Equal contents means an equal key: the later pair wins.
    assert_result("{\"a\": 1, \"a\": 2}", "{a: 2}");

    let rendered = run("{1: \"x\", true: \"y\"}");
    assert!(rendered == "{1: x, true: y}" || rendered == "{true: y, 1: x}",
            "unexpected hash rendering: {rendered}");
}

#[test]
fn unusable_hash_keys_are_errors() {
    assert_result("{[1, 2]: \"x\"}", "ERROR: unusable as hash key: ARRAY");
    assert_result("{fn(x) { x }: \"x\"}", "ERROR: unusable as hash key: FUNCTION");
}

#[test]
fn indexing_non_arrays_is_an_error() {
    assert_result("5[0]", "ERROR: index operator not supported: INTEGER");
    assert_result("\"abc\"[0]", "ERROR: index operator not supported: STRING");
    assert_result("{\"k\": 1}[\"k\"]", "ERROR: index operator not supported: HASH");
}

#[test]
fn len_builtin() {
    assert_result("len(\"\")", "0");
    assert_result("len(\"four\")", "4");
    assert_result("len(\"hello world\")", "11");
    assert_result("len(1)", "ERROR: argument to `len` not supported, got type INTEGER");
    assert_result("len(\"one\", \"two\")", "ERROR: wrong number of arguments. got=2, want=1");
    assert_result("len", "builtin function");
}

#[test]
fn user_bindings_shadow_builtins() {
    assert_result("let len = fn(x) { 99 }; len(\"abc\")", "99");
}

#[test]
fn error_messages() {
    assert_result("5 + true;", "ERROR: type mismatch: INTEGER + BOOLEAN");
    assert_result("5 == true;", "ERROR: type mismatch: INTEGER == BOOLEAN");
    assert_result("-true", "ERROR: unknown operator: -BOOLEAN");
    assert_result("true + false;", "ERROR: unknown operator: BOOLEAN + BOOLEAN");
    assert_result("5; true + false; 5", "ERROR: unknown operator: BOOLEAN + BOOLEAN");
    assert_result("if (10 > 1) { true + false; }",
                  "ERROR: unknown operator: BOOLEAN + BOOLEAN");
    assert_result("if (10 > 1) { if (10 > 1) { return true + false; } return 1; }",
                  "ERROR: unknown operator: BOOLEAN + BOOLEAN");
    assert_result("foobar", "ERROR: identifier not found: foobar");
    assert_result("\"Hello\" - \"World\"", "ERROR: unknown operator: STRING - STRING");
    assert_result("5(1)", "ERROR: not a function: INTEGER");
    assert_result("\"x\"()", "ERROR: not a function: STRING");
}

#[test]
fn errors_short_circuit_the_rest_of_the_program() {
    assert_result("5 + true; 5;", "ERROR: type mismatch: INTEGER + BOOLEAN");
    // The first error inside an argument list is the call's result.
    assert_result("len(foobar)", "ERROR: identifier not found: foobar");
    assert_result("[1, foobar, crash][0]", "ERROR: identifier not found: foobar");
    assert_result("{\"k\": foobar}", "ERROR: identifier not found: foobar");
}
