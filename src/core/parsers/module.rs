//! Parsing of the content configuration module.
//!
//! The module is parsed with swc and lowered into the ESTree-shaped
//! [`SyntaxTree`] the extractor works on. Only the node kinds the extractor
//! can reason about are lowered structurally; everything else becomes an
//! opaque `Unsupported` node.

use std::sync::Arc;

use swc_common::{FileName, Globals, SourceMap};
use swc_ecma_ast::{
    BlockStmt, BlockStmtOrExpr, Callee, Decl, Expr, ExprOrSpread, Lit, MemberProp, Module,
    ModuleDecl, ModuleItem, Pat, Prop, PropName, PropOrSpread, Stmt, Tpl, VarDecl, VarDeclKind,
};
use swc_ecma_parser::{Parser, StringInput, Syntax, TsSyntax};

use crate::core::error::{CmsError, Result};
use crate::core::syntax::{Field, NodeId, Scalar, SyntaxTree, TreeBuilder, field};

/// Kind given to nodes whose structure is not lowered.
pub const UNSUPPORTED: &str = "Unsupported";

/// Parse TypeScript/JavaScript source into a syntax tree.
pub fn parse_module_source(code: String, file_path: &str) -> Result<SyntaxTree> {
    use swc_common::GLOBALS;

    let source_map: Arc<SourceMap> = Default::default();

    GLOBALS.set(&Globals::new(), || {
        let source_file = source_map.new_source_file(FileName::Real(file_path.into()).into(), code);

        let syntax = Syntax::Typescript(TsSyntax {
            tsx: file_path.ends_with(".tsx") || file_path.ends_with(".jsx"),
            ..Default::default()
        });

        let mut parser = Parser::new(syntax, StringInput::from(&*source_file), None);
        let module = parser.parse_module().map_err(|e| CmsError::ModuleParse {
            path: file_path.to_string(),
            message: format!("{:?}", e),
        })?;

        Ok(lower_module(&module))
    })
}

/// Lower a parsed swc module into an ESTree-shaped tree.
pub fn lower_module(module: &Module) -> SyntaxTree {
    let mut lowering = Lowering {
        builder: TreeBuilder::new(),
    };
    let root = lowering.module(module);
    lowering.builder.finish(root)
}

struct Lowering {
    builder: TreeBuilder,
}

fn string(value: impl Into<String>) -> Field {
    Field::Value(Scalar::String(value.into()))
}

fn boolean(value: bool) -> Field {
    Field::Value(Scalar::Bool(value))
}

fn null() -> Field {
    Field::Value(Scalar::Null)
}

impl Lowering {
    fn node(&mut self, kind: &str, fields: Vec<(String, Field)>) -> Field {
        Field::Node(self.builder.add(kind, fields))
    }

    fn unsupported(&mut self) -> Field {
        self.node(UNSUPPORTED, Vec::new())
    }

    fn module(&mut self, module: &Module) -> NodeId {
        let body = module
            .body
            .iter()
            .map(|item| self.module_item(item))
            .collect();
        self.builder.add(
            "Program",
            vec![
                field("sourceType", string("module")),
                field("body", Field::List(body)),
            ],
        )
    }

    fn module_item(&mut self, item: &ModuleItem) -> Field {
        match item {
            ModuleItem::ModuleDecl(decl) => self.module_decl(decl),
            ModuleItem::Stmt(stmt) => self.stmt(stmt),
        }
    }

    fn module_decl(&mut self, decl: &ModuleDecl) -> Field {
        match decl {
            ModuleDecl::Import(import) => {
                let source = import.src.value.to_string_lossy().to_string();
                let source = self.literal(Scalar::String(source));
                self.node("ImportDeclaration", vec![field("source", source)])
            }
            ModuleDecl::ExportDecl(export) => {
                let declaration = self.decl(&export.decl);
                self.node(
                    "ExportNamedDeclaration",
                    vec![field("declaration", declaration)],
                )
            }
            ModuleDecl::ExportDefaultExpr(export) => {
                let declaration = self.expr(&export.expr);
                self.node(
                    "ExportDefaultDeclaration",
                    vec![field("declaration", declaration)],
                )
            }
            _ => self.unsupported(),
        }
    }

    fn stmt(&mut self, stmt: &Stmt) -> Field {
        match stmt {
            Stmt::Decl(decl) => self.decl(decl),
            Stmt::Expr(stmt) => {
                let expression = self.expr(&stmt.expr);
                self.node("ExpressionStatement", vec![field("expression", expression)])
            }
            Stmt::Return(stmt) => {
                let argument = match &stmt.arg {
                    Some(arg) => self.expr(arg),
                    None => null(),
                };
                self.node("ReturnStatement", vec![field("argument", argument)])
            }
            Stmt::Block(block) => self.block(block),
            _ => self.unsupported(),
        }
    }

    fn block(&mut self, block: &BlockStmt) -> Field {
        let body = block.stmts.iter().map(|stmt| self.stmt(stmt)).collect();
        self.node("BlockStatement", vec![field("body", Field::List(body))])
    }

    fn decl(&mut self, decl: &Decl) -> Field {
        match decl {
            Decl::Var(var) => self.var_decl(var),
            Decl::Fn(function) => {
                let id = self.identifier(function.ident.sym.as_str());
                let body = match &function.function.body {
                    Some(body) => self.block(body),
                    None => null(),
                };
                self.node(
                    "FunctionDeclaration",
                    vec![field("id", id), field("body", body)],
                )
            }
            _ => self.unsupported(),
        }
    }

    fn var_decl(&mut self, var: &VarDecl) -> Field {
        let kind = match var.kind {
            VarDeclKind::Const => "const",
            VarDeclKind::Let => "let",
            _ => "var",
        };
        let declarations = var
            .decls
            .iter()
            .map(|declarator| {
                let id = self.pat(&declarator.name);
                let init = match &declarator.init {
                    Some(init) => self.expr(init),
                    None => null(),
                };
                self.node(
                    "VariableDeclarator",
                    vec![field("id", id), field("init", init)],
                )
            })
            .collect();
        self.node(
            "VariableDeclaration",
            vec![
                field("kind", string(kind)),
                field("declarations", Field::List(declarations)),
            ],
        )
    }

    fn pat(&mut self, pat: &Pat) -> Field {
        match pat {
            Pat::Ident(binding) => self.identifier(binding.id.sym.as_str()),
            _ => self.unsupported(),
        }
    }

    fn identifier(&mut self, name: &str) -> Field {
        self.node("Identifier", vec![field("name", string(name))])
    }

    fn literal(&mut self, value: Scalar) -> Field {
        self.node("Literal", vec![field("value", Field::Value(value))])
    }

    fn wrapper(&mut self, kind: &str, inner: &Expr) -> Field {
        let expression = self.expr(inner);
        self.node(kind, vec![field("expression", expression)])
    }

    fn expr(&mut self, expr: &Expr) -> Field {
        match expr {
            Expr::Ident(ident) => self.identifier(ident.sym.as_str()),
            Expr::Lit(lit) => self.lit(lit),
            Expr::Tpl(tpl) => self.tpl(tpl),
            Expr::Call(call) => {
                let callee = match &call.callee {
                    Callee::Expr(callee) => self.expr(callee),
                    _ => self.unsupported(),
                };
                let arguments = call
                    .args
                    .iter()
                    .map(|arg| self.expr_or_spread(arg))
                    .collect();
                self.node(
                    "CallExpression",
                    vec![
                        field("callee", callee),
                        field("arguments", Field::List(arguments)),
                    ],
                )
            }
            Expr::Member(member) => {
                let object = self.expr(&member.obj);
                let (property, computed) = match &member.prop {
                    MemberProp::Ident(name) => (self.identifier(name.sym.as_str()), false),
                    MemberProp::Computed(computed) => (self.expr(&computed.expr), true),
                    _ => (self.unsupported(), false),
                };
                self.node(
                    "MemberExpression",
                    vec![
                        field("object", object),
                        field("property", property),
                        field("computed", boolean(computed)),
                    ],
                )
            }
            Expr::Object(object) => {
                let properties = object
                    .props
                    .iter()
                    .map(|prop| match prop {
                        PropOrSpread::Spread(spread) => {
                            let argument = self.expr(&spread.expr);
                            self.node("SpreadElement", vec![field("argument", argument)])
                        }
                        PropOrSpread::Prop(prop) => self.prop(prop),
                    })
                    .collect();
                self.node(
                    "ObjectExpression",
                    vec![field("properties", Field::List(properties))],
                )
            }
            Expr::Array(array) => {
                let elements = array
                    .elems
                    .iter()
                    .map(|element| match element {
                        Some(element) => self.expr_or_spread(element),
                        None => null(),
                    })
                    .collect();
                self.node(
                    "ArrayExpression",
                    vec![field("elements", Field::List(elements))],
                )
            }
            Expr::Arrow(arrow) => {
                let (body, expression) = match &*arrow.body {
                    BlockStmtOrExpr::BlockStmt(block) => (self.block(block), false),
                    BlockStmtOrExpr::Expr(expr) => (self.expr(expr), true),
                };
                self.node(
                    "ArrowFunctionExpression",
                    vec![
                        field("body", body),
                        field("expression", boolean(expression)),
                    ],
                )
            }
            Expr::Fn(function) => {
                let body = match &function.function.body {
                    Some(body) => self.block(body),
                    None => null(),
                };
                self.node("FunctionExpression", vec![field("body", body)])
            }
            Expr::Await(await_expr) => {
                let argument = self.expr(&await_expr.arg);
                self.node("AwaitExpression", vec![field("argument", argument)])
            }
            // ESTree has no node for parentheses.
            Expr::Paren(paren) => self.expr(&paren.expr),
            Expr::TsAs(ts_as) => self.wrapper("TSAsExpression", &ts_as.expr),
            Expr::TsConstAssertion(ts_const) => self.wrapper("TSAsExpression", &ts_const.expr),
            Expr::TsSatisfies(ts_sat) => self.wrapper("TSSatisfiesExpression", &ts_sat.expr),
            Expr::TsNonNull(ts_non_null) => self.wrapper("TSNonNullExpression", &ts_non_null.expr),
            Expr::TsTypeAssertion(assertion) => self.wrapper("TSTypeAssertion", &assertion.expr),
            Expr::TsInstantiation(instantiation) => {
                self.wrapper("TSInstantiationExpression", &instantiation.expr)
            }
            _ => self.unsupported(),
        }
    }

    fn expr_or_spread(&mut self, arg: &ExprOrSpread) -> Field {
        let expression = self.expr(&arg.expr);
        if arg.spread.is_some() {
            self.node("SpreadElement", vec![field("argument", expression)])
        } else {
            expression
        }
    }

    fn prop(&mut self, prop: &Prop) -> Field {
        match prop {
            Prop::KeyValue(kv) => {
                let (key, computed) = self.prop_name(&kv.key);
                let value = self.expr(&kv.value);
                self.property(key, value, computed, false)
            }
            Prop::Shorthand(ident) => {
                let key = self.identifier(ident.sym.as_str());
                let value = self.identifier(ident.sym.as_str());
                self.property(key, value, false, true)
            }
            _ => self.unsupported(),
        }
    }

    fn property(&mut self, key: Field, value: Field, computed: bool, shorthand: bool) -> Field {
        self.node(
            "Property",
            vec![
                field("key", key),
                field("value", value),
                field("computed", boolean(computed)),
                field("shorthand", boolean(shorthand)),
            ],
        )
    }

    fn prop_name(&mut self, name: &PropName) -> (Field, bool) {
        match name {
            PropName::Ident(ident) => (self.identifier(ident.sym.as_str()), false),
            PropName::Str(s) => (
                self.literal(Scalar::String(s.value.to_string_lossy().to_string())),
                false,
            ),
            PropName::Num(n) => (self.literal(Scalar::Number(n.value)), false),
            PropName::Computed(computed) => (self.expr(&computed.expr), true),
            _ => (self.unsupported(), false),
        }
    }

    fn lit(&mut self, lit: &Lit) -> Field {
        match lit {
            Lit::Str(s) => self.literal(Scalar::String(s.value.to_string_lossy().to_string())),
            Lit::Num(n) => self.literal(Scalar::Number(n.value)),
            Lit::Bool(b) => self.literal(Scalar::Bool(b.value)),
            Lit::Null(_) => self.literal(Scalar::Null),
            _ => self.unsupported(),
        }
    }

    fn tpl(&mut self, tpl: &Tpl) -> Field {
        let quasis = tpl
            .quasis
            .iter()
            .map(|quasi| {
                let cooked = match &quasi.cooked {
                    Some(cooked) => string(cooked.to_string_lossy().to_string()),
                    None => null(),
                };
                let value = self.node(
                    "",
                    vec![
                        field("raw", string(quasi.raw.to_string())),
                        field("cooked", cooked),
                    ],
                );
                self.node(
                    "TemplateElement",
                    vec![field("value", value), field("tail", boolean(quasi.tail))],
                )
            })
            .collect();
        let expressions = tpl.exprs.iter().map(|expr| self.expr(expr)).collect();
        self.node(
            "TemplateLiteral",
            vec![
                field("quasis", Field::List(quasis)),
                field("expressions", Field::List(expressions)),
            ],
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(code: &str) -> SyntaxTree {
        parse_module_source(code.to_string(), "content.config.ts").unwrap()
    }

    #[test]
    fn test_lowers_exported_object() {
        let tree = parse("export const collections = { blogs, data: dataFile };");
        let declarator = tree
            .root()
            .child_at("body", 0)
            .and_then(|n| n.child("declaration"))
            .and_then(|n| n.child_at("declarations", 0))
            .unwrap();
        assert_eq!(
            declarator.child("id").and_then(|n| n.str("name")),
            Some("collections")
        );

        let init = declarator.child("init").unwrap();
        assert!(init.is("ObjectExpression"));
        let values: Vec<_> = init
            .children("properties")
            .filter_map(|p| p.child("value"))
            .filter_map(|v| v.str("name"))
            .collect();
        assert_eq!(values, vec!["blogs", "dataFile"]);
    }

    #[test]
    fn test_lowers_member_call_chain() {
        let tree = parse("const title = z.string().optional();");
        let init = tree
            .root()
            .child_at("body", 0)
            .and_then(|n| n.child_at("declarations", 0))
            .and_then(|n| n.child("init"))
            .unwrap();
        assert!(init.is("CallExpression"));

        let callee = init.child("callee").unwrap();
        assert!(callee.is("MemberExpression"));
        assert_eq!(callee.child("property").and_then(|p| p.str("name")), Some("optional"));
        assert!(callee.child("object").unwrap().is("CallExpression"));
    }

    #[test]
    fn test_lowers_template_literal() {
        let tree = parse("const base = `./src/content`;");
        let init = tree
            .root()
            .child_at("body", 0)
            .and_then(|n| n.child_at("declarations", 0))
            .and_then(|n| n.child("init"))
            .unwrap();
        assert!(init.is("TemplateLiteral"));
        assert_eq!(init.list_len("expressions"), 0);
        let cooked = init
            .child_at("quasis", 0)
            .and_then(|q| q.child("value"))
            .and_then(|v| v.str("cooked"));
        assert_eq!(cooked, Some("./src/content"));
    }

    #[test]
    fn test_satisfies_is_kept_as_wrapper() {
        let tree = parse("const x = { a: 1 } satisfies Record<string, number>;");
        let init = tree
            .root()
            .child_at("body", 0)
            .and_then(|n| n.child_at("declarations", 0))
            .and_then(|n| n.child("init"))
            .unwrap();
        assert!(init.is("TSSatisfiesExpression"));
        assert!(init.child("expression").unwrap().is("ObjectExpression"));
    }

    #[test]
    fn test_parse_error_names_file() {
        let err = parse_module_source("const = ;".to_string(), "broken.ts").unwrap_err();
        assert!(err.to_string().starts_with("failed to parse broken.ts"));
    }
}
