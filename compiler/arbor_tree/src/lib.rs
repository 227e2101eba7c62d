//! Arbor Tree - immutable green/red syntax trees
//!
//! This crate is the schema-agnostic tree engine:
//! - Kinds and shapes: the static description of node categories
//! - Green nodes: immutable, position-free, structurally shared
//! - List builder and green cache
//! - Red nodes: parent-aware views materialized lazily, safe to share
//!   across threads
//! - List facade, typed-node trait, update and list-rewrite helpers
//!
//! # Design Philosophy
//!
//! - **Share Everything**: green subtrees are `Arc`s, an edit rebuilds only
//!   the spine from the edited node to the root
//! - **Materialize Lazily**: a red child exists only after first access and
//!   is written exactly once
//! - **Fail Fast**: shape violations are programmer errors and panic
//!
//! Concrete node kinds and their typed API live in the schema crate
//! (`arbor_syntax`).

mod ast;
mod green;
mod kind;
mod payload;
mod red;
mod rewrite;

#[cfg(test)]
mod test_support;

pub use ast::{support, AstNode};
pub use green::{
    occupancy, GreenCache, GreenChildren, GreenDescendants, GreenListBuilder, GreenNode,
    IntoGreenList, ShapeError,
};
pub use kind::{Kind, PayloadSpec, Shape, SlotArity, SlotSpec};
pub use payload::{Payload, PayloadType};
pub use red::{NodeList, NodeListIter, SyntaxChildren, SyntaxDescendants, SyntaxNode};
pub use rewrite::{rewrite_list, update};

use std::sync::Once;

static TRACING_INIT: Once = Once::new();

/// Initialize tracing for debug output.
///
/// Safe to call multiple times. Enable with `RUST_LOG=arbor_tree=trace`.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        // Only initialize if RUST_LOG is set
        if std::env::var("RUST_LOG").is_ok() {
            let filter = EnvFilter::from_default_env();
            tracing_subscriber::registry()
                .with(fmt::layer().with_target(true).with_level(true))
                .with(filter)
                .init();
        }
    });
}
