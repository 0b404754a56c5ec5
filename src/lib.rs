//! libra: balance arbitrarily nested two-pan scale trees.
//!
//! A scale is two pans; a pan holds either a fixed weight or another scale.
//! Given a flat batch of scale definitions, [`ScaleTree`] validates the
//! structure (single root, unique names, single-use references, no cycles)
//! and computes, in one post-order traversal, the extra mass each pan needs
//! so every scale balances exactly.
//!
//! ```
//! use libra::domain::ScaleTree;
//!
//! let mut tree = ScaleTree::new();
//! tree.add("S2", "5", "5").unwrap();
//! tree.add("S1", "S2", "30").unwrap();
//! tree.balance().unwrap();
//!
//! let results = tree.results().unwrap();
//! assert_eq!(results[1].left_add, 20);
//! ```

pub mod cli;
pub mod domain;
pub mod exitcode;
pub mod parser;
pub mod util;

use domain::{Adjustment, DomainResult, ScaleTree};
use parser::Record;

/// Register a batch of parsed records, balance, and extract the results.
pub fn balance_records(records: &[Record]) -> DomainResult<Vec<Adjustment>> {
    let mut tree = ScaleTree::new();
    for record in records {
        tree.add(&record.name, &record.left, &record.right)?;
    }
    tree.balance()?;
    tree.results()
}
