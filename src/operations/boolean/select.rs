use super::classify::{BoundaryMatch, Classification};
use super::segment::LoopSource;

/// The type of boolean operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BooleanOp {
    Fuse,
    Cut,
    Intersect,
}

/// What happens to the part of one loop that lies inside the other.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InsidePolicy {
    Keep,
    Remove,
}

/// Segment retention rules of an operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetentionPolicy {
    /// Fate of loop A's segments inside B.
    pub first_inside: InsidePolicy,
    /// Fate of loop B's segments inside A.
    pub second_inside: InsidePolicy,
}

impl BooleanOp {
    /// Retention rules for the operation.
    #[must_use]
    pub fn policy(self) -> RetentionPolicy {
        let (first_inside, second_inside) = match self {
            Self::Fuse => (InsidePolicy::Remove, InsidePolicy::Remove),
            Self::Cut => (InsidePolicy::Remove, InsidePolicy::Keep),
            Self::Intersect => (InsidePolicy::Keep, InsidePolicy::Keep),
        };
        RetentionPolicy {
            first_inside,
            second_inside,
        }
    }
}

/// Decision about whether to keep a segment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeepDecision {
    Keep,
    KeepReversed,
    Discard,
}

/// Determines whether a segment should be kept based on its classification
/// relative to the other loop and the boolean operation.
///
/// | Segment | vs other loop     | Fuse    | Cut (A-B)     | Intersect |
/// |---------|-------------------|---------|---------------|-----------|
/// | from A  | OUTSIDE B         | keep    | keep          | discard   |
/// | from A  | INSIDE B          | discard | discard       | keep      |
/// | from A  | BOUNDARY same     | keep    | discard       | keep      |
/// | from A  | BOUNDARY opposite | discard | keep          | discard   |
/// | from B  | OUTSIDE A         | keep    | discard       | discard   |
/// | from B  | INSIDE A          | discard | keep (rev)    | keep      |
/// | from B  | BOUNDARY          | discard | discard       | discard   |
///
/// Both loops share one orientation when this is consulted.
#[must_use]
pub fn should_keep_segment(
    source: LoopSource,
    classification: Classification,
    op: BooleanOp,
) -> KeepDecision {
    let policy = op.policy();
    let keep_if = |cond: bool| if cond { KeepDecision::Keep } else { KeepDecision::Discard };
    match (source, classification) {
        (LoopSource::A, Classification::Outside) => keep_if(policy.first_inside == InsidePolicy::Remove),
        (LoopSource::A, Classification::Inside) => keep_if(policy.first_inside == InsidePolicy::Keep),
        (LoopSource::A, Classification::Boundary(BoundaryMatch::Same)) => keep_if(op != BooleanOp::Cut),
        (LoopSource::A, Classification::Boundary(BoundaryMatch::Opposite)) => {
            keep_if(op == BooleanOp::Cut)
        }

        (LoopSource::B, Classification::Outside) => keep_if(policy.second_inside == InsidePolicy::Remove),
        (LoopSource::B, Classification::Inside) => match (policy.second_inside, op) {
            (InsidePolicy::Remove, _) => KeepDecision::Discard,
            (InsidePolicy::Keep, BooleanOp::Cut) => KeepDecision::KeepReversed,
            (InsidePolicy::Keep, _) => KeepDecision::Keep,
        },
        // Shared stretches are taken from A only.
        (LoopSource::B, Classification::Boundary(_)) => KeepDecision::Discard,
    }
}
