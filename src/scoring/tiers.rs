/// A single scoring tier: an inclusive value range mapped to points and a
/// status label.
#[derive(Debug, Clone, Copy)]
pub struct Tier<S: Copy> {
    pub min: f64,
    pub max: f64,
    pub points: f64,
    pub status: S,
}

/// Ordered range-to-points lookup table.
///
/// Tiers are evaluated in order and the first match wins, so half-open
/// boundaries are encoded by nesting: a narrow optimal band listed before a
/// wider band claims the shared boundary values. Values outside every tier
/// (including NaN) fall through to the catch-all.
#[derive(Debug, Clone, Copy)]
pub struct TierTable<S: Copy + 'static> {
    tiers: &'static [Tier<S>],
    fallback_points: f64,
    fallback_status: S,
}

impl<S: Copy> TierTable<S> {
    pub const fn new(tiers: &'static [Tier<S>], fallback_points: f64, fallback_status: S) -> Self {
        Self {
            tiers,
            fallback_points,
            fallback_status,
        }
    }

    pub fn lookup(&self, value: f64) -> (f64, S) {
        for tier in self.tiers {
            if value >= tier.min && value <= tier.max {
                return (tier.points, tier.status);
            }
        }
        (self.fallback_points, self.fallback_status)
    }
}
