#![forbid(unsafe_code)]

//! Integer space distribution.
//!
//! Every split here is exact: the shares handed out always add up to the
//! total being distributed, so no pixel drifts between siblings.

/// Splits `total` pixels among parts in proportion to integer weights.
///
/// Each part receives `floor(total * weight / total_weight)`. The pixels lost
/// to flooring (always fewer than the number of parts) go one at a time to
/// the earliest parts. Call [`share`](Self::share) once per part, in order.
#[derive(Debug, Clone)]
pub(crate) struct WeightedSplit {
    total: u64,
    total_weight: u64,
    leftover: u64,
}

impl WeightedSplit {
    /// Prepare a proportional split. `weights` is walked twice.
    pub(crate) fn new<I>(total: u64, weights: I) -> Self
    where
        I: IntoIterator<Item = u64> + Clone,
    {
        let total_weight: u64 = weights.clone().into_iter().sum();
        if total_weight == 0 {
            return Self {
                total,
                total_weight,
                leftover: 0,
            };
        }
        let floored: u64 = weights
            .into_iter()
            .map(|weight| floor_share(total, weight, total_weight))
            .sum();
        Self {
            total,
            total_weight,
            leftover: total.saturating_sub(floored),
        }
    }

    /// Prepare an even split over `parts` equal parts.
    pub(crate) fn even(total: u64, parts: u64) -> Self {
        Self {
            total,
            total_weight: parts,
            leftover: if parts == 0 { 0 } else { total % parts },
        }
    }

    /// Next part's share.
    pub(crate) fn share(&mut self, weight: u64) -> u64 {
        if self.total_weight == 0 {
            return 0;
        }
        let base = floor_share(self.total, weight, self.total_weight);
        if self.leftover > 0 {
            self.leftover -= 1;
            base + 1
        } else {
            base
        }
    }
}

#[inline]
fn floor_share(total: u64, weight: u64, total_weight: u64) -> u64 {
    let share = u128::from(total) * u128::from(weight) / u128::from(total_weight);
    u64::try_from(share).unwrap_or(u64::MAX)
}
