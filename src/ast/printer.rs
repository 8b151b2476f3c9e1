use crate::ast::*;

/// Render the tree as one s-expression per function. Variable and call
/// indices print as names when they resolve, `$n` / `#n` otherwise.
pub fn to_sexp(tree: &SyntaxTree) -> String {
    let mut buf = String::new();
    for function in &tree.functions {
        let printer = Printer {
            table: &tree.functions,
            function,
        };
        printer.function(&mut buf);
        buf.push('\n');
    }
    buf
}

pub fn to_json(tree: &SyntaxTree) -> String {
    serde_json::to_string_pretty(tree).expect("syntax tree should be serializable")
}

struct Printer<'a> {
    table: &'a FunctionTable,
    function: &'a Function,
}

impl Printer<'_> {
    fn function(&self, buf: &mut String) {
        let f = self.function;
        buf.push_str("(fun ");
        buf.push_str(&f.name);
        if !f.attributes.is_empty() {
            buf.push_str(" [");
            buf.push_str(&f.attributes.join(" "));
            buf.push(']');
        }
        buf.push_str(" (");
        buf.push_str(&f.parameters.join(" "));
        buf.push(')');
        if let Some(ref body) = f.body {
            buf.push(' ');
            self.block(buf, body);
        }
        buf.push(')');
    }

    fn block(&self, buf: &mut String, block: &Block) {
        buf.push_str("(block");
        for statement in block {
            buf.push(' ');
            self.statement(buf, statement);
        }
        buf.push(')');
    }

    fn statement(&self, buf: &mut String, statement: &Statement) {
        match statement {
            Statement::If(s) => {
                buf.push_str("(if ");
                self.expression(buf, &s.condition);
                buf.push(' ');
                self.block(buf, &s.then_block);
                if let Some(ref else_block) = s.else_block {
                    buf.push(' ');
                    self.block(buf, else_block);
                }
                buf.push(')');
            }
            Statement::Return(r) => {
                buf.push_str("(return ");
                self.expression(buf, &r.value);
                buf.push(')');
            }
        }
    }

    fn expression(&self, buf: &mut String, expr: &Expression) {
        match expr.second_term() {
            Some(right) => {
                buf.push('(');
                buf.push_str(&expr.op.to_string());
                buf.push(' ');
                self.term(buf, expr.first_term());
                buf.push(' ');
                self.term(buf, Some(right));
                buf.push(')');
            }
            None if expr.is_binary() => {
                buf.push('(');
                buf.push_str(&expr.op.to_string());
                buf.push(' ');
                self.term(buf, expr.first_term());
                buf.push_str(" _)");
            }
            None => self.term(buf, expr.first_term()),
        }
    }

    fn term(&self, buf: &mut String, term: Option<&Term>) {
        match term {
            None => buf.push('_'),
            Some(Term::Constant(c)) => buf.push_str(&c.value.to_string()),
            Some(Term::Variable(v)) => match self.function.parameters.get(v.index) {
                Some(name) => buf.push_str(name),
                None => buf.push_str(&format!("${}", v.index)),
            },
            Some(Term::Call(c)) => {
                buf.push_str("(call ");
                match self.table.get(c.function) {
                    Some(callee) => buf.push_str(&callee.name),
                    None => buf.push_str(&format!("#{}", c.function)),
                }
                for arg in &c.arguments {
                    buf.push(' ');
                    self.expression(buf, arg);
                }
                buf.push(')');
            }
        }
    }
}
