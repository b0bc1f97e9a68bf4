/// Bounds for path enumeration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnumerateConfig {
    /// Maximum number of distinct paths recorded.
    pub limit: usize,
    /// Number of leading array elements descended into.
    pub array_sample: usize,
    /// Containers nested this deep are recorded but not entered.
    pub max_depth: usize,
}

impl EnumerateConfig {
    /// Default bounds with a different path limit.
    pub fn with_limit(limit: usize) -> Self {
        Self {
            limit,
            ..Self::default()
        }
    }
}

impl Default for EnumerateConfig {
    fn default() -> Self {
        Self {
            limit: 200,
            array_sample: 5,
            max_depth: 32,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_with_limit_keeps_other_defaults() {
        let config = EnumerateConfig::with_limit(10);
        assert_eq!(config.limit, 10);
        assert_eq!(config.array_sample, EnumerateConfig::default().array_sample);
        assert_eq!(config.max_depth, EnumerateConfig::default().max_depth);
    }
}
