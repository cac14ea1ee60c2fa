//! Contiguous year ranges.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct YearHorizon {
    pub start: i32,
    pub end: i32,
}

impl YearHorizon {
    /// Construct a horizon; `None` when `start > end`.
    pub fn new(start: i32, end: i32) -> Option<Self> {
        if start > end {
            return None;
        }
        Some(YearHorizon { start, end })
    }

    pub fn contains(&self, year: i32) -> bool {
        year >= self.start && year <= self.end
    }

    pub fn len(&self) -> usize {
        (self.end - self.start + 1) as usize
    }

    /// Always false for a horizon built through `new`, which needs `start <= end`.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn years(self) -> impl Iterator<Item = i32> {
        self.start..=self.end
    }

    /// Offset of `year` from the start, if it lies inside the horizon.
    pub fn index_of(&self, year: i32) -> Option<usize> {
        self.contains(year).then(|| (year - self.start) as usize)
    }
}

impl Default for YearHorizon {
    fn default() -> Self {
        YearHorizon {
            start: 2015,
            end: 2020,
        }
    }
}
