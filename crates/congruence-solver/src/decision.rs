// Copyright (c) 2025 Felix Kahle.
//
// Permission is hereby granted, free of charge, to any person obtaining
// a copy of this software and associated documentation files (the
// "Software"), to deal in the Software without restriction, including
// without limitation the rights to use, copy, modify, merge, publish,
// distribute, sublicense, and/or sell copies of the Software, and to
// permit persons to whom the Software is furnished to do so, subject to
// the following conditions:
//
// The above copyright notice and this permission notice shall be
// included in all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND,
// EXPRESS OR IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF
// MERCHANTABILITY, FITNESS FOR A PARTICULAR PURPOSE AND
// NONINFRINGEMENT. IN NO EVENT SHALL THE AUTHORS OR COPYRIGHT HOLDERS BE
// LIABLE FOR ANY CLAIM, DAMAGES OR OTHER LIABILITY, WHETHER IN AN ACTION
// OF CONTRACT, TORT OR OTHERWISE, ARISING FROM, OUT OF OR IN CONNECTION
// WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE SOFTWARE.

//! Decision points of the equation reducer.
//!
//! Every branch the reducer can take is named by a `Decision` with a stable
//! numeric identifier in `0..Decision::COUNT`. Monitors receive them through
//! `ReductionMonitor::on_decision`; the `CoverageMonitor` uses the identifiers
//! to index its bitset.

/// A branch taken by the equation reducer.
#[repr(u8)]
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
pub enum Decision {
    /// An input equation is about to be split along its modulus.
    SplitEquation = 0,
    /// A new prime-power group is started.
    OpenPrimePower = 1,
    /// The next prime factor is looked at.
    InspectFactor = 2,
    /// The inspected factor equals the group's prime; the power grows.
    ExtendPrimePower = 3,
    /// The inspected factor differs; the group is closed.
    ClosePrimePower = 4,
    /// A pivot equation starts a scan over the later equations.
    ScanPivot = 5,
    /// A later equation is compared against the pivot.
    ScanPair = 6,
    /// One modulus divides the other.
    ComparablePair = 7,
    /// The pivot has the strictly larger modulus.
    PivotModulusGreater = 8,
    /// The later equation is implied by the pivot and removed.
    DiscardLater = 9,
    /// The later equation contradicts the pivot.
    ConflictLaterSubsumed = 10,
    /// The later equation has the larger or equal modulus.
    PivotModulusNotGreater = 11,
    /// The pivot is implied by the later equation and removed.
    DiscardPivot = 12,
    /// The pivot contradicts the later equation.
    ConflictPivotSubsumed = 13,
    /// Neither modulus divides the other; both equations stay.
    IncomparablePair = 14,
    /// A surviving equation is written to the output.
    EmitReduced = 15,
}

impl Decision {
    /// The number of distinct decisions.
    pub const COUNT: usize = 16;

    /// All decisions ordered by identifier.
    pub const ALL: [Decision; Decision::COUNT] = [
        Decision::SplitEquation,
        Decision::OpenPrimePower,
        Decision::InspectFactor,
        Decision::ExtendPrimePower,
        Decision::ClosePrimePower,
        Decision::ScanPivot,
        Decision::ScanPair,
        Decision::ComparablePair,
        Decision::PivotModulusGreater,
        Decision::DiscardLater,
        Decision::ConflictLaterSubsumed,
        Decision::PivotModulusNotGreater,
        Decision::DiscardPivot,
        Decision::ConflictPivotSubsumed,
        Decision::IncomparablePair,
        Decision::EmitReduced,
    ];

    /// Returns the stable identifier of the decision.
    #[inline(always)]
    pub const fn id(self) -> usize {
        self as usize
    }

    /// Returns the decision with identifier `id`, if any.
    #[inline]
    pub fn from_id(id: usize) -> Option<Self> {
        Self::ALL.get(id).copied()
    }

    /// Returns a short name for reports.
    pub const fn name(self) -> &'static str {
        match self {
            Decision::SplitEquation => "SplitEquation",
            Decision::OpenPrimePower => "OpenPrimePower",
            Decision::InspectFactor => "InspectFactor",
            Decision::ExtendPrimePower => "ExtendPrimePower",
            Decision::ClosePrimePower => "ClosePrimePower",
            Decision::ScanPivot => "ScanPivot",
            Decision::ScanPair => "ScanPair",
            Decision::ComparablePair => "ComparablePair",
            Decision::PivotModulusGreater => "PivotModulusGreater",
            Decision::DiscardLater => "DiscardLater",
            Decision::ConflictLaterSubsumed => "ConflictLaterSubsumed",
            Decision::PivotModulusNotGreater => "PivotModulusNotGreater",
            Decision::DiscardPivot => "DiscardPivot",
            Decision::ConflictPivotSubsumed => "ConflictPivotSubsumed",
            Decision::IncomparablePair => "IncomparablePair",
            Decision::EmitReduced => "EmitReduced",
        }
    }

    /// Returns `true` for the two decisions that end a reduction as unsatisfiable.
    #[inline]
    pub const fn is_conflict(self) -> bool {
        matches!(
            self,
            Decision::ConflictLaterSubsumed | Decision::ConflictPivotSubsumed
        )
    }
}

impl std::fmt::Display for Decision {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::Decision;

    #[test]
    fn test_ids_are_dense_and_ordered() {
        for (index, decision) in Decision::ALL.iter().enumerate() {
            assert_eq!(decision.id(), index);
            assert_eq!(Decision::from_id(index), Some(*decision));
        }
        assert_eq!(Decision::from_id(Decision::COUNT), None);
    }

    #[test]
    fn test_names_are_unique() {
        let mut names: Vec<&str> = Decision::ALL.iter().map(|d| d.name()).collect();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), Decision::COUNT);
        assert_eq!(Decision::DiscardPivot.to_string(), "DiscardPivot");
    }

    #[test]
    fn test_conflict_decisions() {
        let conflicts: Vec<Decision> = Decision::ALL
            .iter()
            .copied()
            .filter(|d| d.is_conflict())
            .collect();
        assert_eq!(
            conflicts,
            vec![
                Decision::ConflictLaterSubsumed,
                Decision::ConflictPivotSubsumed
            ]
        );
    }
}
