use arbor_tree::{support, update, NodeList};

use super::{present, Expr, Stmt};

ast_node! {
    /// An expression evaluated for its effect.
    ExprStmt, visit_expr_stmt, ExpressionStatement
}

impl ExprStmt {
    pub fn expr(&self) -> Expr {
        support::required(&self.0, 0)
    }

    pub fn update(&self, expr: impl Into<Expr>) -> ExprStmt {
        ExprStmt(update(&self.0, vec![present::<Expr>(&expr.into())], Vec::new()))
    }

    pub fn with_expr(&self, expr: impl Into<Expr>) -> ExprStmt {
        self.update(expr)
    }
}

ast_node! {
    /// `return` with an optional value.
    ReturnStmt, visit_return_stmt, Return
}

impl ReturnStmt {
    pub fn value(&self) -> Option<Expr> {
        support::child(&self.0, 0)
    }

    pub fn update(&self, value: Option<Expr>) -> ReturnStmt {
        ReturnStmt(update(&self.0, vec![value.as_ref().and_then(present)], Vec::new()))
    }

    pub fn with_value(&self, value: Option<Expr>) -> ReturnStmt {
        self.update(value)
    }
}

ast_node! {
    /// A braced statement list.
    Block, visit_block, Block
}

impl Block {
    pub fn statements(&self) -> NodeList<Stmt> {
        support::list(&self.0, 0)
    }

    pub fn update(&self, statements: &NodeList<Stmt>) -> Block {
        Block(update(&self.0, vec![statements.syntax().cloned()], Vec::new()))
    }

    pub fn with_statements(&self, statements: &NodeList<Stmt>) -> Block {
        self.update(statements)
    }
}

ast_node! {
    /// `if condition then_branch else else_branch`. The else branch is a
    /// block or another `if`.
    IfStmt, visit_if_stmt, If
}

impl IfStmt {
    pub fn condition(&self) -> Expr {
        support::required(&self.0, 0)
    }

    pub fn then_branch(&self) -> Block {
        support::required(&self.0, 1)
    }

    pub fn else_branch(&self) -> Option<Stmt> {
        support::child(&self.0, 2)
    }

    pub fn update(
        &self,
        condition: impl Into<Expr>,
        then_branch: &Block,
        else_branch: Option<Stmt>,
    ) -> IfStmt {
        let slots = vec![
            present::<Expr>(&condition.into()),
            present(then_branch),
            else_branch.as_ref().and_then(present),
        ];
        IfStmt(update(&self.0, slots, Vec::new()))
    }

    pub fn with_condition(&self, condition: impl Into<Expr>) -> IfStmt {
        self.update(condition, &self.then_branch(), self.else_branch())
    }

    pub fn with_then_branch(&self, then_branch: &Block) -> IfStmt {
        self.update(self.condition(), then_branch, self.else_branch())
    }

    pub fn with_else_branch(&self, else_branch: Option<Stmt>) -> IfStmt {
        self.update(self.condition(), &self.then_branch(), else_branch)
    }
}

ast_node! {
    /// Root of a program.
    SourceFile, visit_source_file, SourceFile
}

impl SourceFile {
    pub fn statements(&self) -> NodeList<Stmt> {
        support::list(&self.0, 0)
    }

    pub fn update(&self, statements: &NodeList<Stmt>) -> SourceFile {
        SourceFile(update(&self.0, vec![statements.syntax().cloned()], Vec::new()))
    }

    pub fn with_statements(&self, statements: &NodeList<Stmt>) -> SourceFile {
        self.update(statements)
    }
}
