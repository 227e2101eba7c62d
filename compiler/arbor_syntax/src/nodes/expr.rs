use arbor_tree::{support, update, NodeList, Payload};

use super::{present, Expr};
use crate::SyntaxKind;

ast_node! {
    /// A name, as a reference or an assignment target.
    Identifier, visit_identifier, Identifier
}

impl Identifier {
    pub fn name(&self) -> &str {
        support::text(&self.0, 0)
    }

    pub fn update(&self, name: &str) -> Identifier {
        Identifier(update(&self.0, Vec::new(), vec![Payload::text(name)]))
    }

    pub fn with_name(&self, name: &str) -> Identifier {
        self.update(name)
    }
}

ast_node! {
    /// Integer literal.
    NumberLiteral, visit_number_literal, NumberLiteral
}

impl NumberLiteral {
    pub fn value(&self) -> i64 {
        support::int(&self.0, 0)
    }

    pub fn update(&self, value: i64) -> NumberLiteral {
        NumberLiteral(update(&self.0, Vec::new(), vec![Payload::Int(value)]))
    }

    pub fn with_value(&self, value: i64) -> NumberLiteral {
        self.update(value)
    }
}

ast_node! {
    FloatLiteral, visit_float_literal, FloatLiteral
}

impl FloatLiteral {
    pub fn value(&self) -> f64 {
        support::float(&self.0, 0)
    }

    /// Payload comparison is bitwise, so `-0.0` and `0.0` are different
    /// values here.
    pub fn update(&self, value: f64) -> FloatLiteral {
        FloatLiteral(update(&self.0, Vec::new(), vec![Payload::float(value)]))
    }

    pub fn with_value(&self, value: f64) -> FloatLiteral {
        self.update(value)
    }
}

ast_node! {
    StringLiteral, visit_string_literal, StringLiteral
}

impl StringLiteral {
    pub fn value(&self) -> &str {
        support::text(&self.0, 0)
    }

    pub fn update(&self, value: &str) -> StringLiteral {
        StringLiteral(update(&self.0, Vec::new(), vec![Payload::text(value)]))
    }

    pub fn with_value(&self, value: &str) -> StringLiteral {
        self.update(value)
    }
}

ast_node! {
    BoolLiteral, visit_bool_literal, BoolLiteral
}

impl BoolLiteral {
    pub fn value(&self) -> bool {
        support::boolean(&self.0, 0)
    }

    pub fn update(&self, value: bool) -> BoolLiteral {
        BoolLiteral(update(&self.0, Vec::new(), vec![Payload::Bool(value)]))
    }

    pub fn with_value(&self, value: bool) -> BoolLiteral {
        self.update(value)
    }
}

ast_node! {
    /// `left op right` for the four arithmetic operators.
    BinaryExpr, visit_binary_expr, Add | Subtract | Multiply | Divide
}

impl BinaryExpr {
    /// The operator, one of the binary kinds.
    pub fn operator(&self) -> SyntaxKind {
        self.0.kind()
    }

    pub fn left(&self) -> Expr {
        support::required(&self.0, 0)
    }

    pub fn right(&self) -> Expr {
        support::required(&self.0, 1)
    }

    pub fn update(&self, left: impl Into<Expr>, right: impl Into<Expr>) -> BinaryExpr {
        let slots = vec![present::<Expr>(&left.into()), present::<Expr>(&right.into())];
        BinaryExpr(update(&self.0, slots, Vec::new()))
    }

    pub fn with_left(&self, left: impl Into<Expr>) -> BinaryExpr {
        self.update(left, self.right())
    }

    pub fn with_right(&self, right: impl Into<Expr>) -> BinaryExpr {
        self.update(self.left(), right)
    }
}

ast_node! {
    /// `-operand` or `!operand`.
    UnaryExpr, visit_unary_expr, Negate | Not
}

impl UnaryExpr {
    pub fn operator(&self) -> SyntaxKind {
        self.0.kind()
    }

    pub fn operand(&self) -> Expr {
        support::required(&self.0, 0)
    }

    pub fn update(&self, operand: impl Into<Expr>) -> UnaryExpr {
        UnaryExpr(update(&self.0, vec![present::<Expr>(&operand.into())], Vec::new()))
    }

    pub fn with_operand(&self, operand: impl Into<Expr>) -> UnaryExpr {
        self.update(operand)
    }
}

ast_node! {
    ParenExpr, visit_paren_expr, Parenthesized
}

impl ParenExpr {
    pub fn expr(&self) -> Expr {
        support::required(&self.0, 0)
    }

    pub fn update(&self, expr: impl Into<Expr>) -> ParenExpr {
        ParenExpr(update(&self.0, vec![present::<Expr>(&expr.into())], Vec::new()))
    }

    pub fn with_expr(&self, expr: impl Into<Expr>) -> ParenExpr {
        self.update(expr)
    }
}

ast_node! {
    /// `callee(arguments...)`.
    CallExpr, visit_call_expr, Call
}

impl CallExpr {
    pub fn callee(&self) -> Expr {
        support::required(&self.0, 0)
    }

    pub fn arguments(&self) -> NodeList<Expr> {
        support::list(&self.0, 1)
    }

    pub fn update(&self, callee: impl Into<Expr>, arguments: &NodeList<Expr>) -> CallExpr {
        let slots = vec![present::<Expr>(&callee.into()), arguments.syntax().cloned()];
        CallExpr(update(&self.0, slots, Vec::new()))
    }

    pub fn with_callee(&self, callee: impl Into<Expr>) -> CallExpr {
        self.update(callee, &self.arguments())
    }

    pub fn with_arguments(&self, arguments: &NodeList<Expr>) -> CallExpr {
        self.update(self.callee(), arguments)
    }
}

ast_node! {
    /// `target = value`.
    AssignExpr, visit_assign_expr, Assign
}

impl AssignExpr {
    pub fn target(&self) -> Identifier {
        support::required(&self.0, 0)
    }

    pub fn value(&self) -> Expr {
        support::required(&self.0, 1)
    }

    pub fn update(&self, target: &Identifier, value: impl Into<Expr>) -> AssignExpr {
        let slots = vec![present(target), present::<Expr>(&value.into())];
        AssignExpr(update(&self.0, slots, Vec::new()))
    }

    pub fn with_target(&self, target: &Identifier) -> AssignExpr {
        self.update(target, self.value())
    }

    pub fn with_value(&self, value: impl Into<Expr>) -> AssignExpr {
        self.update(&self.target(), value)
    }
}

impl Expr {
    pub fn as_identifier(&self) -> Option<&Identifier> {
        match self {
            Expr::Identifier(node) => Some(node),
            _ => None,
        }
    }

    pub fn as_number_literal(&self) -> Option<&NumberLiteral> {
        match self {
            Expr::NumberLiteral(node) => Some(node),
            _ => None,
        }
    }

    pub fn as_binary(&self) -> Option<&BinaryExpr> {
        match self {
            Expr::Binary(node) => Some(node),
            _ => None,
        }
    }

    /// The expression with parentheses stripped.
    pub fn unparenthesized(&self) -> Expr {
        let mut expr = self.clone();
        while let Expr::Paren(paren) = &expr {
            expr = paren.expr();
        }
        expr
    }

    /// Whether this is a literal of any type.
    pub fn is_literal(&self) -> bool {
        matches!(
            self,
            Expr::NumberLiteral(_)
                | Expr::FloatLiteral(_)
                | Expr::StringLiteral(_)
                | Expr::BoolLiteral(_)
        )
    }
}
