//! Compose-time check that every function a template calls is bound.
//!
//! Tera only resolves function names while rendering. Walking the parsed tree
//! once at startup moves that failure into initialization.

use tera::ast::{Expr, ExprVal, Node};
use tera::Template;

use crate::functions::FunctionMap;

/// First function called by `template` that `funcs` does not bind.
pub(crate) fn first_unbound_function(template: &Template, funcs: &FunctionMap) -> Option<String> {
    let mut walker = Walker { funcs, unbound: None };
    walker.nodes(&template.ast);
    for def in template.macros.values() {
        walker.nodes(&def.body);
        walker.exprs(def.args.values().flatten());
    }
    walker.unbound
}

struct Walker<'a> {
    funcs: &'a FunctionMap,
    unbound: Option<String>,
}

impl Walker<'_> {
    fn nodes(&mut self, nodes: &[Node]) {
        for node in nodes {
            if self.unbound.is_some() {
                return;
            }
            self.node(node);
        }
    }

    fn node(&mut self, node: &Node) {
        match node {
            Node::VariableBlock(_, expr) => self.expr(expr),
            Node::Set(_, set) => self.expr(&set.value),
            Node::MacroDefinition(_, def, _) => {
                self.exprs(def.args.values().flatten());
                self.nodes(&def.body);
            }
            Node::FilterSection(_, section, _) => {
                self.exprs(section.filter.args.values());
                self.nodes(&section.body);
            }
            Node::Block(_, block, _) => self.nodes(&block.body),
            Node::Forloop(_, forloop, _) => {
                self.expr(&forloop.container);
                self.nodes(&forloop.body);
                if let Some(empty) = &forloop.empty_body {
                    self.nodes(empty);
                }
            }
            Node::If(if_node, _) => {
                for (_, cond, body) in &if_node.conditions {
                    self.expr(cond);
                    self.nodes(body);
                }
                if let Some((_, body)) = &if_node.otherwise {
                    self.nodes(body);
                }
            }
            _ => {}
        }
    }

    fn exprs<'e>(&mut self, exprs: impl IntoIterator<Item = &'e Expr>) {
        for expr in exprs {
            self.expr(expr);
        }
    }

    fn expr(&mut self, expr: &Expr) {
        self.val(&expr.val);
        for filter in &expr.filters {
            self.exprs(filter.args.values());
        }
    }

    fn val(&mut self, val: &ExprVal) {
        if self.unbound.is_some() {
            return;
        }
        match val {
            ExprVal::FunctionCall(call) => {
                if !self.funcs.is_bound(&call.name) {
                    self.unbound = Some(call.name.clone());
                    return;
                }
                self.exprs(call.args.values());
            }
            ExprVal::MacroCall(call) => self.exprs(call.args.values()),
            ExprVal::Math(math) => {
                self.expr(&math.lhs);
                self.expr(&math.rhs);
            }
            ExprVal::Logic(logic) => {
                self.expr(&logic.lhs);
                self.expr(&logic.rhs);
            }
            ExprVal::In(in_expr) => {
                self.expr(&in_expr.lhs);
                self.expr(&in_expr.rhs);
            }
            ExprVal::Test(test) => self.exprs(&test.args),
            ExprVal::Array(items) => self.exprs(items),
            ExprVal::StringConcat(concat) => {
                for v in &concat.values {
                    self.val(v);
                }
            }
            _ => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn funcs() -> FunctionMap {
        FunctionMap::new().with(
            "app_name",
            |_: &HashMap<String, tera::Value>| -> tera::Result<tera::Value> {
                Ok(tera::Value::from("x"))
            },
        )
    }

    fn check(src: &str) -> Option<String> {
        let template = Template::new("t", None, src).expect("parse");
        first_unbound_function(&template, &funcs())
    }

    #[test]
    fn bound_and_builtin_calls_pass() {
        assert_eq!(check("{{ app_name() }}{% for i in range(end=3) %}{{ i }}{% endfor %}"), None);
    }

    #[test]
    fn unbound_call_in_variable_block() {
        assert_eq!(check("<p>{{ missing() }}</p>"), Some("missing".to_string()));
    }

    #[test]
    fn unbound_call_nested_in_control_flow() {
        let src = "{% if ok %}{% for x in xs %}{{ helper(v=x) }}{% endfor %}{% endif %}";
        assert_eq!(check(src), Some("helper".to_string()));
    }

    #[test]
    fn unbound_call_inside_function_args() {
        assert_eq!(check("{{ app_name(x=inner()) }}"), Some("inner".to_string()));
    }

    #[test]
    fn unbound_call_in_set() {
        assert_eq!(check("{% set a = nope() %}{{ a }}"), Some("nope".to_string()));
    }

    #[test]
    fn plain_variables_are_not_calls() {
        assert_eq!(check("{{ title }}{{ user.name | upper }}"), None);
    }
}
