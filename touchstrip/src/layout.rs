use {
    crate::types::{PhysicalPixels, Size},
    itertools::Itertools,
    std::cmp::{max, min, Reverse},
    touchstrip_macros::impl_with,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SpecMode {
    /// The parent imposes no constraint; the child reports the size it wants.
    Unspecified,
    /// The child may be at most this large.
    AtMost,
    /// The child gets exactly this size.
    Exactly,
}

/// A single-axis size constraint passed into a measure pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MeasureSpec {
    mode: SpecMode,
    size: PhysicalPixels,
}

impl MeasureSpec {
    pub const fn exactly(size: PhysicalPixels) -> Self {
        Self {
            mode: SpecMode::Exactly,
            size,
        }
    }

    pub const fn at_most(size: PhysicalPixels) -> Self {
        Self {
            mode: SpecMode::AtMost,
            size,
        }
    }

    pub const fn unspecified() -> Self {
        Self {
            mode: SpecMode::Unspecified,
            size: PhysicalPixels::ZERO,
        }
    }

    pub fn mode(&self) -> SpecMode {
        self.mode
    }

    /// Magnitude of the constraint, regardless of mode.
    pub fn size(&self) -> PhysicalPixels {
        self.size
    }

    /// Final size for this axis, given the measured content size.
    pub fn resolve(&self, content: PhysicalPixels) -> PhysicalPixels {
        match self.mode {
            SpecMode::Unspecified => content,
            SpecMode::AtMost => min(content, self.size),
            SpecMode::Exactly => self.size,
        }
    }
}

/// How an item sizes itself along one axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SizePolicy {
    /// Size to the content.
    #[default]
    Content,
    /// Take all the space the parent offers.
    Fill,
    /// Always this size.
    Fixed(PhysicalPixels),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Margins {
    left: PhysicalPixels,
    top: PhysicalPixels,
    right: PhysicalPixels,
    bottom: PhysicalPixels,
}

impl Margins {
    pub const fn new(
        left: PhysicalPixels,
        top: PhysicalPixels,
        right: PhysicalPixels,
        bottom: PhysicalPixels,
    ) -> Self {
        Self {
            left,
            top,
            right,
            bottom,
        }
    }

    pub const fn uniform(value: PhysicalPixels) -> Self {
        Self::new(value, value, value, value)
    }

    pub fn left(&self) -> PhysicalPixels {
        self.left
    }

    pub fn top(&self) -> PhysicalPixels {
        self.top
    }

    pub fn right(&self) -> PhysicalPixels {
        self.right
    }

    pub fn bottom(&self) -> PhysicalPixels {
        self.bottom
    }

    pub fn x_sum(&self) -> PhysicalPixels {
        self.left + self.right
    }

    pub fn y_sum(&self) -> PhysicalPixels {
        self.top + self.bottom
    }
}

/// Cross-axis placement of an item within the space the parent gives it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Alignment {
    #[default]
    Start,
    Middle,
    End,
}

/// Per-item layout parameters, stored on the item's widget base. The parent
/// container reads them during its measure and layout passes and ignores the
/// options that don't apply to it.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct ItemOptions {
    x: SizePolicy,
    y: SizePolicy,
    margins: Margins,
    weight: u32,
}

#[impl_with]
impl ItemOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn x(&self) -> SizePolicy {
        self.x
    }

    pub fn set_x(&mut self, x: SizePolicy) -> &mut Self {
        self.x = x;
        self
    }

    pub fn y(&self) -> SizePolicy {
        self.y
    }

    pub fn set_y(&mut self, y: SizePolicy) -> &mut Self {
        self.y = y;
        self
    }

    pub fn margins(&self) -> Margins {
        self.margins
    }

    pub fn set_margins(&mut self, margins: Margins) -> &mut Self {
        self.margins = margins;
        self
    }

    /// Share of leftover main-axis space this item receives when the parent
    /// has more room than the content needs. Zero means no share.
    pub fn weight(&self) -> u32 {
        self.weight
    }

    pub fn set_weight(&mut self, weight: u32) -> &mut Self {
        self.weight = weight;
        self
    }
}

/// Used when a measure handler fails.
pub(crate) const FALLBACK_SIZE: Size = Size::new(
    PhysicalPixels::from_i32(48),
    PhysicalPixels::from_i32(48),
);

/// Derives the spec a container passes to a child for one axis. `used` is the
/// space already taken on this axis by margins and previously placed siblings.
pub fn child_measure_spec(
    parent: MeasureSpec,
    used: PhysicalPixels,
    policy: SizePolicy,
) -> MeasureSpec {
    let available = max(PhysicalPixels::ZERO, parent.size() - used);
    match (policy, parent.mode()) {
        (SizePolicy::Fixed(size), _) => MeasureSpec::exactly(size),
        (_, SpecMode::Unspecified) => MeasureSpec::unspecified(),
        (SizePolicy::Fill, SpecMode::Exactly) => MeasureSpec::exactly(available),
        (SizePolicy::Fill, SpecMode::AtMost) => MeasureSpec::at_most(available),
        (SizePolicy::Content, SpecMode::Exactly | SpecMode::AtMost) => {
            MeasureSpec::at_most(available)
        }
    }
}

/// Splits `extra` proportionally to `weights`. Rounding leftovers go to the
/// largest remainders first, so the results always sum to `extra`.
pub(crate) fn weighted_split(extra: PhysicalPixels, weights: &[u32]) -> Vec<PhysicalPixels> {
    let total: u32 = weights.iter().sum();
    if total == 0 || extra <= PhysicalPixels::ZERO {
        return vec![PhysicalPixels::ZERO; weights.len()];
    }
    let extra = extra.to_i32() as i64;
    let total = total as i64;
    let mut shares = weights
        .iter()
        .enumerate()
        .map(|(index, &weight)| {
            let exact = extra * weight as i64;
            (index, exact / total, exact % total)
        })
        .collect_vec();
    let mut leftover = extra - shares.iter().map(|&(_, share, _)| share).sum::<i64>();
    shares.sort_by_key(|&(_, _, remainder)| Reverse(remainder));
    for share in &mut shares {
        if leftover == 0 {
            break;
        }
        share.1 += 1;
        leftover -= 1;
    }
    shares.sort_by_key(|&(index, _, _)| index);
    shares
        .into_iter()
        .map(|(_, share, _)| PhysicalPixels::from_i32(share as i32))
        .collect()
}

#[cfg(test)]
mod tests {
    use {super::*, crate::types::PpxSuffix};

    #[test]
    fn resolve_respects_mode() {
        assert_eq!(MeasureSpec::exactly(100.ppx()).resolve(30.ppx()), 100.ppx());
        assert_eq!(MeasureSpec::at_most(100.ppx()).resolve(30.ppx()), 30.ppx());
        assert_eq!(MeasureSpec::at_most(100.ppx()).resolve(300.ppx()), 100.ppx());
        assert_eq!(MeasureSpec::unspecified().resolve(300.ppx()), 300.ppx());
    }

    #[test]
    fn child_spec_derivation() {
        let parent = MeasureSpec::exactly(200.ppx());
        assert_eq!(
            child_measure_spec(parent, 0.ppx(), SizePolicy::Fill),
            MeasureSpec::exactly(200.ppx())
        );
        assert_eq!(
            child_measure_spec(parent, 50.ppx(), SizePolicy::Fill),
            MeasureSpec::exactly(150.ppx())
        );
        assert_eq!(
            child_measure_spec(parent, 0.ppx(), SizePolicy::Content),
            MeasureSpec::at_most(200.ppx())
        );
        assert_eq!(
            child_measure_spec(parent, 0.ppx(), SizePolicy::Fixed(70.ppx())),
            MeasureSpec::exactly(70.ppx())
        );
        assert_eq!(
            child_measure_spec(MeasureSpec::unspecified(), 50.ppx(), SizePolicy::Content),
            MeasureSpec::unspecified()
        );
        // Never negative, even when siblings overcommitted the space.
        assert_eq!(
            child_measure_spec(parent, 300.ppx(), SizePolicy::Fill),
            MeasureSpec::exactly(0.ppx())
        );
    }

    #[test]
    fn weighted_split_largest_remainder() {
        assert_eq!(weighted_split(100.ppx(), &[1, 1]), vec![50.ppx(), 50.ppx()]);
        assert_eq!(weighted_split(100.ppx(), &[1, 2]), vec![33.ppx(), 67.ppx()]);
        assert_eq!(
            weighted_split(10.ppx(), &[1, 1, 1]),
            vec![4.ppx(), 3.ppx(), 3.ppx()]
        );
        assert_eq!(weighted_split(7.ppx(), &[0, 0]), vec![0.ppx(), 0.ppx()]);
        assert_eq!(
            weighted_split(5.ppx(), &[2, 0, 1]),
            vec![3.ppx(), 0.ppx(), 2.ppx()]
        );
    }
}
