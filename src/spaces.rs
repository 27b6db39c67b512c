use serde::Serialize;

/// 离散动作空间 {0, 1, ..., n-1}
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Discrete {
    pub n: i64,
}

impl Discrete {
    pub fn new(n: i64) -> Self {
        Self { n }
    }

    pub fn contains(&self, action: i64) -> bool {
        (0..self.n).contains(&action)
    }
}

/// 连续观测空间的边界，仅作参考，不由环境强制
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct BoxSpace {
    pub low: [f64; 4],
    pub high: [f64; 4],
}

impl BoxSpace {
    /// Symmetric box `[-high, high]`.
    pub fn symmetric(high: [f64; 4]) -> Self {
        Self {
            low: high.map(|h| -h),
            high,
        }
    }

    pub fn contains(&self, value: &[f64; 4]) -> bool {
        value
            .iter()
            .zip(self.low.iter().zip(self.high.iter()))
            .all(|(v, (lo, hi))| *lo <= *v && *v <= *hi)
    }

    pub fn shape(&self) -> usize {
        self.high.len()
    }
}
