//! Animation speed setting shared by the decorative effects.

/// Global animation pacing selected in the configuration file.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum AnimationSpeed {
    Slow,
    #[default]
    Medium,
    Fast,
}

impl AnimationSpeed {
    /// Multiplier applied to particle drift per frame.
    pub fn particle_drift_speed(self) -> f32 {
        match self {
            AnimationSpeed::Slow => 0.5,
            AnimationSpeed::Medium => 1.0,
            AnimationSpeed::Fast => 2.0,
        }
    }

    /// Duration of a section entrance transition.
    pub fn entrance_duration_ms(self) -> u64 {
        match self {
            AnimationSpeed::Slow => 700,
            AnimationSpeed::Medium => 400,
            AnimationSpeed::Fast => 250,
        }
    }

    /// Parse a lowercase name. Unrecognized names fall back to medium.
    pub fn parse(s: &str) -> Self {
        match s {
            "slow" => AnimationSpeed::Slow,
            "fast" => AnimationSpeed::Fast,
            "medium" => AnimationSpeed::Medium,
            _ => AnimationSpeed::Medium,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_falls_back_to_medium() {
        assert_eq!(AnimationSpeed::parse("slow"), AnimationSpeed::Slow);
        assert_eq!(AnimationSpeed::parse("fast"), AnimationSpeed::Fast);
        assert_eq!(AnimationSpeed::parse("ludicrous"), AnimationSpeed::Medium);
    }

    #[test]
    fn fast_drifts_more_than_slow() {
        assert!(
            AnimationSpeed::Fast.particle_drift_speed()
                > AnimationSpeed::Slow.particle_drift_speed()
        );
    }
}
