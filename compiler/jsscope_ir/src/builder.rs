//! Ergonomic construction of operation trees.
//!
//! Every name passed as `&str` is interned through the builder's interner,
//! which must be the one the evaluator runs with.

use std::sync::Arc;

use crate::ast::{
    AssignTarget, BinaryOp, DeclKind, Element, Expr, FunctionBody, FunctionDef, FunctionKind,
    Literal, LogicalOp, MemberKey, Pattern, PatternProp, Property, Stmt, UnaryOp,
};
use crate::{Name, StringInterner};

/// Builds expressions, statements and patterns against one interner.
#[derive(Clone, Copy)]
pub struct ScriptBuilder<'a> {
    interner: &'a StringInterner,
}

impl<'a> ScriptBuilder<'a> {
    pub fn new(interner: &'a StringInterner) -> Self {
        ScriptBuilder { interner }
    }

    /// Intern a name.
    #[inline]
    pub fn name(&self, s: &str) -> Name {
        self.interner.intern(s)
    }

    fn names(&self, names: &[&str]) -> Vec<Name> {
        names.iter().map(|s| self.name(s)).collect()
    }

    // Literals

    pub fn undefined(&self) -> Expr {
        Expr::Literal(Literal::Undefined)
    }

    pub fn null(&self) -> Expr {
        Expr::Literal(Literal::Null)
    }

    pub fn boolean(&self, b: bool) -> Expr {
        Expr::Literal(Literal::Bool(b))
    }

    pub fn num(&self, n: f64) -> Expr {
        Expr::Literal(Literal::Number(n))
    }

    pub fn str(&self, s: &str) -> Expr {
        Expr::Literal(Literal::Str(self.name(s)))
    }

    pub fn ident(&self, s: &str) -> Expr {
        Expr::Ident(self.name(s))
    }

    pub fn this(&self) -> Expr {
        Expr::This
    }

    // Collections

    pub fn array(&self, items: Vec<Expr>) -> Expr {
        Expr::Array(items.into_iter().map(Element::Item).collect())
    }

    /// Array literal mixing plain items and spreads.
    pub fn array_with(&self, elements: Vec<Element>) -> Expr {
        Expr::Array(elements)
    }

    pub fn item(&self, expr: Expr) -> Element {
        Element::Item(expr)
    }

    pub fn spread(&self, expr: Expr) -> Element {
        Element::Spread(expr)
    }

    pub fn object(&self, props: Vec<(&str, Expr)>) -> Expr {
        Expr::Object(
            props
                .into_iter()
                .map(|(key, value)| Property::KeyValue(self.name(key), value))
                .collect(),
        )
    }

    /// Object literal mixing key/value pairs and spreads.
    pub fn object_with(&self, props: Vec<Property>) -> Expr {
        Expr::Object(props)
    }

    pub fn prop(&self, key: &str, value: Expr) -> Property {
        Property::KeyValue(self.name(key), value)
    }

    pub fn spread_prop(&self, expr: Expr) -> Property {
        Property::Spread(expr)
    }

    // Access and calls

    pub fn member(&self, object: Expr, key: &str) -> Expr {
        Expr::Member {
            object: Box::new(object),
            key: MemberKey::Static(self.name(key)),
        }
    }

    pub fn index(&self, object: Expr, index: Expr) -> Expr {
        Expr::Member {
            object: Box::new(object),
            key: MemberKey::Computed(Box::new(index)),
        }
    }

    pub fn call(&self, callee: Expr, args: Vec<Expr>) -> Expr {
        self.call_with(callee, args.into_iter().map(Element::Item).collect())
    }

    pub fn call_with(&self, callee: Expr, args: Vec<Element>) -> Expr {
        Expr::Call {
            callee: Box::new(callee),
            args,
        }
    }

    /// `receiver.method(args)`
    pub fn method(&self, receiver: Expr, method: &str, args: Vec<Expr>) -> Expr {
        self.method_with(receiver, method, args.into_iter().map(Element::Item).collect())
    }

    pub fn method_with(&self, receiver: Expr, method: &str, args: Vec<Element>) -> Expr {
        Expr::MethodCall {
            receiver: Box::new(receiver),
            key: MemberKey::Static(self.name(method)),
            args,
        }
    }

    /// `receiver[key](args)`
    pub fn method_computed(&self, receiver: Expr, key: Expr, args: Vec<Expr>) -> Expr {
        Expr::MethodCall {
            receiver: Box::new(receiver),
            key: MemberKey::Computed(Box::new(key)),
            args: args.into_iter().map(Element::Item).collect(),
        }
    }

    // Operators

    pub fn binary(&self, op: BinaryOp, left: Expr, right: Expr) -> Expr {
        Expr::Binary {
            op,
            left: Box::new(left),
            right: Box::new(right),
        }
    }

    pub fn add(&self, left: Expr, right: Expr) -> Expr {
        self.binary(BinaryOp::Add, left, right)
    }

    /// Left-folded `+` over all parts, the usual string-building idiom.
    pub fn concat(&self, parts: Vec<Expr>) -> Expr {
        let mut parts = parts.into_iter();
        let first = parts.next().unwrap_or_else(|| self.str(""));
        parts.fold(first, |acc, part| self.add(acc, part))
    }

    pub fn logical(&self, op: LogicalOp, left: Expr, right: Expr) -> Expr {
        Expr::Logical {
            op,
            left: Box::new(left),
            right: Box::new(right),
        }
    }

    pub fn unary(&self, op: UnaryOp, operand: Expr) -> Expr {
        Expr::Unary {
            op,
            operand: Box::new(operand),
        }
    }

    pub fn conditional(&self, test: Expr, consequent: Expr, alternate: Expr) -> Expr {
        Expr::Conditional {
            test: Box::new(test),
            consequent: Box::new(consequent),
            alternate: Box::new(alternate),
        }
    }

    // Functions

    fn def(
        &self,
        name: Option<&str>,
        params: &[&str],
        rest: Option<&str>,
        kind: FunctionKind,
        body: FunctionBody,
    ) -> Arc<FunctionDef> {
        FunctionDef::new(
            name.map(|n| self.name(n)),
            self.names(params).into_iter().map(Pattern::Ident).collect(),
            rest.map(|r| self.name(r)),
            kind,
            body,
        )
    }

    /// Anonymous `function (params) { body }`.
    pub fn function(&self, params: &[&str], body: Vec<Stmt>) -> Expr {
        Expr::Function(self.def(None, params, None, FunctionKind::Normal, FunctionBody::Block(body)))
    }

    /// `function (params, ...rest) { body }`.
    pub fn function_rest(&self, params: &[&str], rest: &str, body: Vec<Stmt>) -> Expr {
        Expr::Function(self.def(
            None,
            params,
            Some(rest),
            FunctionKind::Normal,
            FunctionBody::Block(body),
        ))
    }

    /// `(params) => { body }`.
    pub fn arrow(&self, params: &[&str], body: Vec<Stmt>) -> Expr {
        Expr::Function(self.def(None, params, None, FunctionKind::Arrow, FunctionBody::Block(body)))
    }

    /// `(params) => expr`.
    pub fn arrow_expr(&self, params: &[&str], body: Expr) -> Expr {
        Expr::Function(self.def(None, params, None, FunctionKind::Arrow, FunctionBody::Expr(body)))
    }

    /// Function literal with destructuring parameters.
    pub fn function_patterns(&self, kind: FunctionKind, params: Vec<Pattern>, body: FunctionBody) -> Expr {
        Expr::Function(FunctionDef::new(None, params, None, kind, body))
    }

    /// `function name(params) { body }` declaration.
    pub fn func_decl(&self, name: &str, params: &[&str], body: Vec<Stmt>) -> Stmt {
        Stmt::Function(self.def(
            Some(name),
            params,
            None,
            FunctionKind::Normal,
            FunctionBody::Block(body),
        ))
    }

    /// `function name(params, ...rest) { body }` declaration.
    pub fn func_decl_rest(&self, name: &str, params: &[&str], rest: &str, body: Vec<Stmt>) -> Stmt {
        Stmt::Function(self.def(
            Some(name),
            params,
            Some(rest),
            FunctionKind::Normal,
            FunctionBody::Block(body),
        ))
    }

    // Patterns

    pub fn pat(&self, name: &str) -> Pattern {
        Pattern::Ident(self.name(name))
    }

    /// `[a, b, c]`
    pub fn array_pat(&self, names: &[&str]) -> Pattern {
        Pattern::Array {
            elements: names.iter().map(|n| Some(self.pat(n))).collect(),
            rest: None,
        }
    }

    /// `{ a, b, c }`
    pub fn object_pat(&self, keys: &[&str]) -> Pattern {
        Pattern::Object {
            props: keys.iter().map(|k| self.shorthand(k)).collect(),
            rest: None,
        }
    }

    /// `key` inside an object pattern.
    pub fn shorthand(&self, key: &str) -> PatternProp {
        PatternProp {
            key: self.name(key),
            value: self.pat(key),
        }
    }

    /// `key: pattern` inside an object pattern.
    pub fn rename(&self, key: &str, value: Pattern) -> PatternProp {
        PatternProp {
            key: self.name(key),
            value,
        }
    }

    // Statements

    pub fn declare(&self, kind: DeclKind, pattern: Pattern, init: Option<Expr>) -> Stmt {
        Stmt::Declare {
            kind,
            pattern,
            init,
        }
    }

    pub fn let_(&self, name: &str, init: Expr) -> Stmt {
        self.declare(DeclKind::Let, self.pat(name), Some(init))
    }

    pub fn const_(&self, name: &str, init: Expr) -> Stmt {
        self.declare(DeclKind::Const, self.pat(name), Some(init))
    }

    pub fn var_(&self, name: &str, init: Expr) -> Stmt {
        self.declare(DeclKind::Var, self.pat(name), Some(init))
    }

    pub fn assign(&self, name: &str, value: Expr) -> Stmt {
        self.assign_pattern(self.pat(name), value)
    }

    pub fn assign_pattern(&self, pattern: Pattern, value: Expr) -> Stmt {
        Stmt::Assign {
            target: AssignTarget::Pattern(pattern),
            op: None,
            value,
        }
    }

    /// `name op= value`
    pub fn assign_op(&self, name: &str, op: BinaryOp, value: Expr) -> Stmt {
        Stmt::Assign {
            target: AssignTarget::Pattern(self.pat(name)),
            op: Some(op),
            value,
        }
    }

    /// `object.key = value`
    pub fn set(&self, object: Expr, key: &str, value: Expr) -> Stmt {
        Stmt::Assign {
            target: AssignTarget::Member {
                object,
                key: MemberKey::Static(self.name(key)),
            },
            op: None,
            value,
        }
    }

    /// `object[index] = value`
    pub fn set_index(&self, object: Expr, index: Expr, value: Expr) -> Stmt {
        Stmt::Assign {
            target: AssignTarget::Member {
                object,
                key: MemberKey::Computed(Box::new(index)),
            },
            op: None,
            value,
        }
    }

    pub fn expr(&self, expr: Expr) -> Stmt {
        Stmt::Expr(expr)
    }

    pub fn ret(&self, expr: Expr) -> Stmt {
        Stmt::Return(Some(expr))
    }

    pub fn ret_void(&self) -> Stmt {
        Stmt::Return(None)
    }

    pub fn block(&self, stmts: Vec<Stmt>) -> Stmt {
        Stmt::Block(stmts)
    }

    pub fn if_(&self, test: Expr, then_branch: Vec<Stmt>, else_branch: Option<Vec<Stmt>>) -> Stmt {
        Stmt::If {
            test,
            then_branch,
            else_branch,
        }
    }

    pub fn for_of(&self, kind: DeclKind, pattern: Pattern, iterable: Expr, body: Vec<Stmt>) -> Stmt {
        Stmt::ForOf {
            kind,
            pattern,
            iterable,
            body,
        }
    }

    pub fn for_in(&self, kind: DeclKind, name: &str, object: Expr, body: Vec<Stmt>) -> Stmt {
        Stmt::ForIn {
            kind,
            name: self.name(name),
            object,
            body,
        }
    }

    /// `console.log(args)`
    pub fn log(&self, args: Vec<Expr>) -> Stmt {
        Stmt::Expr(Expr::MethodCall {
            receiver: Box::new(Expr::Ident(Name::CONSOLE)),
            key: MemberKey::Static(Name::LOG),
            args: args.into_iter().map(Element::Item).collect(),
        })
    }
}
