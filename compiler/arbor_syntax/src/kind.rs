//! Node kinds of the expression language and their shapes.

use arbor_tree::{Kind, PayloadSpec, PayloadType, Shape, SlotSpec};

/// Every kind of node the schema can build.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(u8)]
pub enum SyntaxKind {
    List,

    // Leaves
    Identifier,
    NumberLiteral,
    FloatLiteral,
    StringLiteral,
    BoolLiteral,

    // Expressions
    Add,
    Subtract,
    Multiply,
    Divide,
    Negate,
    Not,
    Parenthesized,
    Call,
    Assign,

    // Statements
    ExpressionStatement,
    Return,
    Block,
    If,

    SourceFile,
}

const EXPRESSIONS: &[SyntaxKind] = &[
    SyntaxKind::Identifier,
    SyntaxKind::NumberLiteral,
    SyntaxKind::FloatLiteral,
    SyntaxKind::StringLiteral,
    SyntaxKind::BoolLiteral,
    SyntaxKind::Add,
    SyntaxKind::Subtract,
    SyntaxKind::Multiply,
    SyntaxKind::Divide,
    SyntaxKind::Negate,
    SyntaxKind::Not,
    SyntaxKind::Parenthesized,
    SyntaxKind::Call,
    SyntaxKind::Assign,
];

const STATEMENTS: &[SyntaxKind] = &[
    SyntaxKind::ExpressionStatement,
    SyntaxKind::Return,
    SyntaxKind::Block,
    SyntaxKind::If,
];

static IDENTIFIER: Shape<SyntaxKind> = Shape {
    name: "Identifier",
    kinds: &[SyntaxKind::Identifier],
    slots: &[],
    payload: &[PayloadSpec::new("name", PayloadType::Text)],
};

static NUMBER_LITERAL: Shape<SyntaxKind> = Shape {
    name: "NumberLiteral",
    kinds: &[SyntaxKind::NumberLiteral],
    slots: &[],
    payload: &[PayloadSpec::new("value", PayloadType::Int)],
};

static FLOAT_LITERAL: Shape<SyntaxKind> = Shape {
    name: "FloatLiteral",
    kinds: &[SyntaxKind::FloatLiteral],
    slots: &[],
    payload: &[PayloadSpec::new("value", PayloadType::Float)],
};

static STRING_LITERAL: Shape<SyntaxKind> = Shape {
    name: "StringLiteral",
    kinds: &[SyntaxKind::StringLiteral],
    slots: &[],
    payload: &[PayloadSpec::new("value", PayloadType::Text)],
};

static BOOL_LITERAL: Shape<SyntaxKind> = Shape {
    name: "BoolLiteral",
    kinds: &[SyntaxKind::BoolLiteral],
    slots: &[],
    payload: &[PayloadSpec::new("value", PayloadType::Bool)],
};

static BINARY: Shape<SyntaxKind> = Shape {
    name: "BinaryExpr",
    kinds: &[
        SyntaxKind::Add,
        SyntaxKind::Subtract,
        SyntaxKind::Multiply,
        SyntaxKind::Divide,
    ],
    slots: &[
        SlotSpec::required("left", EXPRESSIONS),
        SlotSpec::required("right", EXPRESSIONS),
    ],
    payload: &[],
};

static UNARY: Shape<SyntaxKind> = Shape {
    name: "UnaryExpr",
    kinds: &[SyntaxKind::Negate, SyntaxKind::Not],
    slots: &[SlotSpec::required("operand", EXPRESSIONS)],
    payload: &[],
};

static PARENTHESIZED: Shape<SyntaxKind> = Shape {
    name: "ParenExpr",
    kinds: &[SyntaxKind::Parenthesized],
    slots: &[SlotSpec::required("expr", EXPRESSIONS)],
    payload: &[],
};

static CALL: Shape<SyntaxKind> = Shape {
    name: "CallExpr",
    kinds: &[SyntaxKind::Call],
    slots: &[
        SlotSpec::required("callee", EXPRESSIONS),
        SlotSpec::list("arguments", EXPRESSIONS),
    ],
    payload: &[],
};

static ASSIGN: Shape<SyntaxKind> = Shape {
    name: "AssignExpr",
    kinds: &[SyntaxKind::Assign],
    slots: &[
        SlotSpec::required("target", &[SyntaxKind::Identifier]),
        SlotSpec::required("value", EXPRESSIONS),
    ],
    payload: &[],
};

static EXPRESSION_STATEMENT: Shape<SyntaxKind> = Shape {
    name: "ExprStmt",
    kinds: &[SyntaxKind::ExpressionStatement],
    slots: &[SlotSpec::required("expr", EXPRESSIONS)],
    payload: &[],
};

static RETURN: Shape<SyntaxKind> = Shape {
    name: "ReturnStmt",
    kinds: &[SyntaxKind::Return],
    slots: &[SlotSpec::optional("value", EXPRESSIONS)],
    payload: &[],
};

static BLOCK: Shape<SyntaxKind> = Shape {
    name: "Block",
    kinds: &[SyntaxKind::Block],
    slots: &[SlotSpec::list("statements", STATEMENTS)],
    payload: &[],
};

static IF: Shape<SyntaxKind> = Shape {
    name: "IfStmt",
    kinds: &[SyntaxKind::If],
    slots: &[
        SlotSpec::required("condition", EXPRESSIONS),
        SlotSpec::required("then_branch", &[SyntaxKind::Block]),
        SlotSpec::optional("else_branch", &[SyntaxKind::Block, SyntaxKind::If]),
    ],
    payload: &[],
};

static SOURCE_FILE: Shape<SyntaxKind> = Shape {
    name: "SourceFile",
    kinds: &[SyntaxKind::SourceFile],
    slots: &[SlotSpec::list("statements", STATEMENTS)],
    payload: &[],
};

impl SyntaxKind {
    pub fn is_expression(self) -> bool {
        EXPRESSIONS.contains(&self)
    }

    pub fn is_statement(self) -> bool {
        STATEMENTS.contains(&self)
    }

    pub fn is_binary(self) -> bool {
        matches!(
            self,
            SyntaxKind::Add | SyntaxKind::Subtract | SyntaxKind::Multiply | SyntaxKind::Divide
        )
    }

    pub fn is_unary(self) -> bool {
        matches!(self, SyntaxKind::Negate | SyntaxKind::Not)
    }
}

impl Kind for SyntaxKind {
    const LIST: Self = SyntaxKind::List;

    fn shape(self) -> Option<&'static Shape<Self>> {
        let shape = match self {
            SyntaxKind::List => return None,
            SyntaxKind::Identifier => &IDENTIFIER,
            SyntaxKind::NumberLiteral => &NUMBER_LITERAL,
            SyntaxKind::FloatLiteral => &FLOAT_LITERAL,
            SyntaxKind::StringLiteral => &STRING_LITERAL,
            SyntaxKind::BoolLiteral => &BOOL_LITERAL,
            SyntaxKind::Add | SyntaxKind::Subtract | SyntaxKind::Multiply | SyntaxKind::Divide => {
                &BINARY
            }
            SyntaxKind::Negate | SyntaxKind::Not => &UNARY,
            SyntaxKind::Parenthesized => &PARENTHESIZED,
            SyntaxKind::Call => &CALL,
            SyntaxKind::Assign => &ASSIGN,
            SyntaxKind::ExpressionStatement => &EXPRESSION_STATEMENT,
            SyntaxKind::Return => &RETURN,
            SyntaxKind::Block => &BLOCK,
            SyntaxKind::If => &IF,
            SyntaxKind::SourceFile => &SOURCE_FILE,
        };
        Some(shape)
    }

    fn name(self) -> &'static str {
        match self {
            SyntaxKind::List => "List",
            SyntaxKind::Identifier => "Identifier",
            SyntaxKind::NumberLiteral => "NumberLiteral",
            SyntaxKind::FloatLiteral => "FloatLiteral",
            SyntaxKind::StringLiteral => "StringLiteral",
            SyntaxKind::BoolLiteral => "BoolLiteral",
            SyntaxKind::Add => "Add",
            SyntaxKind::Subtract => "Subtract",
            SyntaxKind::Multiply => "Multiply",
            SyntaxKind::Divide => "Divide",
            SyntaxKind::Negate => "Negate",
            SyntaxKind::Not => "Not",
            SyntaxKind::Parenthesized => "Parenthesized",
            SyntaxKind::Call => "Call",
            SyntaxKind::Assign => "Assign",
            SyntaxKind::ExpressionStatement => "ExpressionStatement",
            SyntaxKind::Return => "Return",
            SyntaxKind::Block => "Block",
            SyntaxKind::If => "If",
            SyntaxKind::SourceFile => "SourceFile",
        }
    }
}
