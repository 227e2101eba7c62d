//! A small schema for engine tests.

use crate::{GreenNode, Kind, Payload, PayloadSpec, PayloadType, Shape, SlotSpec};

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub(crate) enum TestKind {
    List,
    Num,
    Real,
    Name,
    Pair,
    Group,
    Sum,
    Product,
}

const VALUES: &[TestKind] = &[
    TestKind::Num,
    TestKind::Real,
    TestKind::Name,
    TestKind::Pair,
    TestKind::Group,
    TestKind::Sum,
    TestKind::Product,
];

static NUM: Shape<TestKind> = Shape {
    name: "Num",
    kinds: &[TestKind::Num],
    slots: &[],
    payload: &[PayloadSpec::new("value", PayloadType::Int)],
};

static REAL: Shape<TestKind> = Shape {
    name: "Real",
    kinds: &[TestKind::Real],
    slots: &[],
    payload: &[PayloadSpec::new("value", PayloadType::Float)],
};

static NAME: Shape<TestKind> = Shape {
    name: "Name",
    kinds: &[TestKind::Name],
    slots: &[],
    payload: &[PayloadSpec::new("text", PayloadType::Text)],
};

static PAIR: Shape<TestKind> = Shape {
    name: "Pair",
    kinds: &[TestKind::Pair],
    slots: &[
        SlotSpec::required("left", VALUES),
        SlotSpec::optional("right", &[]),
    ],
    payload: &[],
};

static GROUP: Shape<TestKind> = Shape {
    name: "Group",
    kinds: &[TestKind::Group],
    slots: &[
        SlotSpec::required("head", VALUES),
        SlotSpec::list("items", &[TestKind::Num, TestKind::Name]),
        SlotSpec::optional("tail", VALUES),
    ],
    payload: &[],
};

static BINARY: Shape<TestKind> = Shape {
    name: "Binary",
    kinds: &[TestKind::Sum, TestKind::Product],
    slots: &[
        SlotSpec::required("left", VALUES),
        SlotSpec::required("right", VALUES),
    ],
    payload: &[],
};

impl Kind for TestKind {
    const LIST: Self = TestKind::List;

    fn shape(self) -> Option<&'static Shape<Self>> {
        match self {
            TestKind::List => None,
            TestKind::Num => Some(&NUM),
            TestKind::Real => Some(&REAL),
            TestKind::Name => Some(&NAME),
            TestKind::Pair => Some(&PAIR),
            TestKind::Group => Some(&GROUP),
            // Product deliberately shares Sum's shape.
            TestKind::Sum | TestKind::Product => Some(&BINARY),
        }
    }

    fn name(self) -> &'static str {
        match self {
            TestKind::List => "List",
            TestKind::Num => "Num",
            TestKind::Real => "Real",
            TestKind::Name => "Name",
            TestKind::Pair => "Pair",
            TestKind::Group => "Group",
            TestKind::Sum => "Sum",
            TestKind::Product => "Product",
        }
    }
}

pub(crate) type Green = GreenNode<TestKind>;

pub(crate) fn num(value: i64) -> Green {
    GreenNode::new(TestKind::Num, Vec::new(), vec![Payload::Int(value)])
}

pub(crate) fn name(text: &str) -> Green {
    GreenNode::new(TestKind::Name, Vec::new(), vec![Payload::text(text)])
}

pub(crate) fn pair(left: Green, right: Option<Green>) -> Green {
    GreenNode::new(TestKind::Pair, vec![Some(left), right], Vec::new())
}

pub(crate) fn sum(left: Green, right: Green) -> Green {
    GreenNode::new(TestKind::Sum, vec![Some(left), Some(right)], Vec::new())
}

pub(crate) fn group(head: Green, items: Option<Green>, tail: Option<Green>) -> Green {
    GreenNode::new(TestKind::Group, vec![Some(head), items, tail], Vec::new())
}

pub(crate) fn nums(values: &[i64]) -> Green {
    GreenNode::list(values.iter().map(|&value| num(value)))
}
