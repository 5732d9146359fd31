//! Parsing helpers shared by unit tests.

use oxc_allocator::Allocator;
use oxc_ast::ast::{CallExpression, Expression, JSXElement, Program, Statement};
use oxc_parser::Parser;
use oxc_span::SourceType;

use crate::context::RuleContext;
use crate::diagnostic::Diagnostic;

fn unwrap_parens<'b, 'a>(expr: &'b Expression<'a>) -> &'b Expression<'a> {
    match expr {
        Expression::ParenthesizedExpression(paren) => unwrap_parens(&paren.expression),
        _ => expr,
    }
}

fn first_expression<'b, 'a>(program: &'b Program<'a>) -> Option<&'b Expression<'a>> {
    for stmt in &program.body {
        if let Statement::VariableDeclaration(decl) = stmt {
            for declarator in &decl.declarations {
                if let Some(init) = &declarator.init {
                    return Some(unwrap_parens(init));
                }
            }
        }
        if let Statement::ExpressionStatement(expr_stmt) = stmt {
            return Some(unwrap_parens(&expr_stmt.expression));
        }
    }
    None
}

/// Parse `code` and run `f` on its first top-level JSX element.
pub fn with_element<R>(code: &str, f: impl FnOnce(&JSXElement<'_>, &mut RuleContext<'_>) -> R) -> R {
    let allocator = Allocator::default();
    let ret = Parser::new(&allocator, code, SourceType::tsx()).parse();
    assert!(ret.errors.is_empty(), "parse errors in {code:?}");

    let Some(Expression::JSXElement(element)) = first_expression(&ret.program) else {
        panic!("no JSX element in {code:?}");
    };
    let mut ctx = RuleContext::new(code);
    f(&**element, &mut ctx)
}

/// Parse `code` and run `f` on its first top-level call expression.
pub fn with_call<R>(
    code: &str,
    f: impl FnOnce(&CallExpression<'_>, &mut RuleContext<'_>) -> R,
) -> R {
    let allocator = Allocator::default();
    let ret = Parser::new(&allocator, code, SourceType::tsx()).parse();
    assert!(ret.errors.is_empty(), "parse errors in {code:?}");

    let Some(Expression::CallExpression(call)) = first_expression(&ret.program) else {
        panic!("no call expression in {code:?}");
    };
    let mut ctx = RuleContext::new(code);
    f(&**call, &mut ctx)
}

/// Apply every fix of `diagnostics` to `code`.
pub fn fixed(code: &str, diagnostics: &[Diagnostic]) -> String {
    crate::fix::apply_fixes(code, diagnostics).output
}
