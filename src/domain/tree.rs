//! Arena-based scale tree: registration, root discovery, balancing.

use std::collections::{HashMap, HashSet};
use std::fmt;

use generational_arena::{Arena, Index};
use tracing::instrument;

use crate::domain::error::{DomainError, DomainResult};
use crate::domain::pan::Pan;
use crate::domain::scale::Scale;

/// Balancing outcome for one scale: the extra mass each pan needs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Adjustment {
    pub name: String,
    pub left_add: i64,
    pub right_add: i64,
}

impl fmt::Display for Adjustment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{},{}", self.name, self.left_add, self.right_add)
    }
}

/// Traversal state per arena slot.
///
/// Re-entering an `InProgress` scale means the walk came back to an
/// ancestor, i.e. a reference cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum VisitState {
    Unvisited,
    InProgress,
    Balanced,
}

/// Resolved reference targets of one scale's pans, by arena slot.
type PanTargets = (Option<Index>, Option<Index>);

/// The balancing engine: owns all registered scales in an arena, validates
/// referential integrity, discovers the root, and assigns extra masses in a
/// single post-order traversal.
///
/// Scales are addressed by arena index during traversal; names are only
/// hashed at registration and once more when references are resolved.
#[derive(Debug, Default)]
pub struct ScaleTree {
    arena: Arena<Scale>,
    /// Registration order, drives deterministic output.
    order: Vec<Index>,
    names: HashMap<String, Index>,
    /// Every scale name used as a pan target, for root discovery and
    /// duplicate-use detection.
    referenced: HashSet<String>,
    root: Option<Index>,
}

/// Arena slots are dense because scales are never removed.
fn slot_of(idx: Index) -> usize {
    idx.into_raw_parts().0
}

impl ScaleTree {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Register one scale from raw tokens.
    ///
    /// Validation order: empty arguments, duplicate scale name, pan token
    /// shape, duplicate pan reference. A scale may be used as a pan target
    /// at most once across the whole tree.
    #[instrument(level = "debug", skip(self))]
    pub fn add(&mut self, name: &str, left_token: &str, right_token: &str) -> DomainResult<()> {
        if name.is_empty() || left_token.is_empty() || right_token.is_empty() {
            return Err(DomainError::EmptyName);
        }
        if self.names.contains_key(name) {
            return Err(DomainError::DuplicateScaleName(name.to_string()));
        }

        let left = Pan::parse(left_token)?;
        let right = Pan::parse(right_token)?;

        for pan in [&left, &right] {
            if let Some(target) = pan.reference() {
                if !self.referenced.insert(target.to_string()) {
                    return Err(DomainError::DuplicateReference(target.to_string()));
                }
            }
        }

        let idx = self.arena.insert(Scale::new(name, left, right));
        self.names.insert(name.to_string(), idx);
        self.order.push(idx);
        Ok(())
    }

    /// Balance every scale in the tree, exactly once each.
    ///
    /// Discovers the root lazily, resolves reference pans to arena indices,
    /// then walks the tree post-order assigning each lighter pan the mass
    /// difference to its sibling. Re-running on an already balanced tree
    /// recomputes identical extra masses.
    #[instrument(level = "debug", skip(self))]
    pub fn balance(&mut self) -> DomainResult<()> {
        let root = match self.root {
            Some(root) => root,
            None => {
                let root = self.resolve_root()?;
                self.root = Some(root);
                root
            }
        };

        let targets = self.resolve_targets();
        let mut state = vec![VisitState::Unvisited; self.arena.len()];
        self.balance_scale(root, &targets, &mut state)?;
        Ok(())
    }

    /// Per-scale extra masses in registration order.
    ///
    /// `ScaleNotFound` here would mean the arena and the registration order
    /// disagree, which successful registration rules out.
    #[instrument(level = "debug", skip(self))]
    pub fn results(&self) -> DomainResult<Vec<Adjustment>> {
        let mut adjustments = Vec::with_capacity(self.order.len());
        for &idx in &self.order {
            let scale = self
                .arena
                .get(idx)
                .ok_or_else(|| DomainError::ScaleNotFound(format!("slot {}", slot_of(idx))))?;
            adjustments.push(Adjustment {
                name: scale.name().to_string(),
                left_add: scale.left().extra_mass(),
                right_add: scale.right().extra_mass(),
            });
        }
        Ok(adjustments)
    }

    /// The root is the one scale no *other* scale uses as a pan target.
    ///
    /// A self-reference does not disqualify its own scale: `S1,S1,10` keeps
    /// `S1` as root and the traversal then reports the cycle. When every
    /// scale is referenced by another, the whole set is locked in a cycle
    /// and that cycle is reported instead of a bare root failure.
    #[instrument(level = "debug", skip(self))]
    fn resolve_root(&self) -> DomainResult<Index> {
        let mut candidates = Vec::new();
        for &idx in &self.order {
            let scale = &self.arena[idx];
            let self_referencing = scale.left().reference() == Some(scale.name())
                || scale.right().reference() == Some(scale.name());
            if !self.referenced.contains(scale.name()) || self_referencing {
                candidates.push(idx);
            }
        }

        match candidates.len() {
            0 if self.order.is_empty() => Err(DomainError::NoRoot),
            0 => Err(self.locked_cycle()),
            1 => Ok(candidates[0]),
            n => Err(DomainError::MultipleRoots(n)),
        }
    }

    /// Name a cycle when root discovery found no candidate among registered
    /// scales. Every scale then has exactly one parent, so a full walk over
    /// the reference edges must re-enter an in-progress scale.
    fn locked_cycle(&self) -> DomainError {
        let targets = self.resolve_targets();
        let mut state = vec![VisitState::Unvisited; self.arena.len()];
        for &idx in &self.order {
            if state[slot_of(idx)] == VisitState::Unvisited {
                if let Err(err) = self.walk_for_cycle(idx, &targets, &mut state) {
                    return err;
                }
            }
        }
        DomainError::NoRoot
    }

    fn walk_for_cycle(
        &self,
        idx: Index,
        targets: &[PanTargets],
        state: &mut [VisitState],
    ) -> DomainResult<()> {
        let slot = slot_of(idx);
        match state[slot] {
            VisitState::InProgress => {
                return Err(DomainError::CircularReference(
                    self.arena[idx].name().to_string(),
                ));
            }
            VisitState::Balanced => return Ok(()),
            VisitState::Unvisited => {}
        }
        state[slot] = VisitState::InProgress;
        let (left, right) = targets[slot];
        for target in [left, right].into_iter().flatten() {
            self.walk_for_cycle(target, targets, state)?;
        }
        state[slot] = VisitState::Balanced;
        Ok(())
    }

    /// Resolve each reference pan to its target's arena index, once, so the
    /// traversal chases indices instead of hashing names. A reference to a
    /// name that was never registered resolves to `None` and contributes
    /// mass 0 during balancing.
    fn resolve_targets(&self) -> Vec<PanTargets> {
        let mut targets = vec![(None, None); self.arena.len()];
        for (idx, scale) in self.arena.iter() {
            targets[slot_of(idx)] = (
                scale
                    .left()
                    .reference()
                    .and_then(|name| self.names.get(name).copied()),
                scale
                    .right()
                    .reference()
                    .and_then(|name| self.names.get(name).copied()),
            );
        }
        targets
    }

    /// Post-order balance of one scale, returning its total mass (both pans
    /// plus assigned extras, i.e. twice the heavier side).
    fn balance_scale(
        &mut self,
        idx: Index,
        targets: &[PanTargets],
        state: &mut [VisitState],
    ) -> DomainResult<i64> {
        let slot = slot_of(idx);
        if state[slot] == VisitState::InProgress {
            return Err(DomainError::CircularReference(
                self.arena[idx].name().to_string(),
            ));
        }
        state[slot] = VisitState::InProgress;

        let (left_target, right_target) = targets[slot];
        let (mut left_mass, mut right_mass) = {
            let scale = &self.arena[idx];
            (scale.left().literal_mass(), scale.right().literal_mass())
        };

        if let Some(target) = left_target {
            left_mass += self.balance_scale(target, targets, state)?;
        }
        if let Some(target) = right_target {
            right_mass += self.balance_scale(target, targets, state)?;
        }

        let (left_add, right_add) = match left_mass.cmp(&right_mass) {
            std::cmp::Ordering::Greater => (0, left_mass - right_mass),
            std::cmp::Ordering::Less => (right_mass - left_mass, 0),
            std::cmp::Ordering::Equal => (0, 0),
        };

        let scale = self
            .arena
            .get_mut(idx)
            .ok_or_else(|| DomainError::ScaleNotFound(format!("slot {}", slot)))?;
        scale.left_mut().set_extra_mass(left_add);
        scale.right_mut().set_extra_mass(right_add);

        state[slot] = VisitState::Balanced;
        Ok(left_mass + left_add + right_mass + right_add)
    }
}
