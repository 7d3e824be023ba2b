//! Linear cross-fade between two clips

/// A weight ramp from one clip to another over a fixed duration.
///
/// Both ends start from whatever weight they had when the fade began, so a
/// fade that interrupts another one continues smoothly. At completion `from`
/// is at 0 and `to` at 1.
#[derive(Debug, Clone, PartialEq)]
pub struct CrossFade {
    pub from: String,
    pub to: String,
    pub duration: f32,
    pub elapsed: f32,
    from_start: f32,
    to_start: f32,
}

impl CrossFade {
    pub fn new(
        from: impl Into<String>,
        to: impl Into<String>,
        duration: f32,
        from_start: f32,
        to_start: f32,
    ) -> Self {
        Self {
            from: from.into(),
            to: to.into(),
            duration: duration.max(0.0),
            elapsed: 0.0,
            from_start: from_start.clamp(0.0, 1.0),
            to_start: to_start.clamp(0.0, 1.0),
        }
    }

    /// Step the fade forward.
    pub fn advance(&mut self, dt: f32) {
        self.elapsed += dt.max(0.0);
    }

    /// Fraction of the fade completed, in [0, 1]
    pub fn progress(&self) -> f32 {
        if self.duration <= 0.0 {
            return 1.0;
        }
        (self.elapsed / self.duration).clamp(0.0, 1.0)
    }

    pub fn from_weight(&self) -> f32 {
        self.from_start * (1.0 - self.progress())
    }

    pub fn to_weight(&self) -> f32 {
        let p = self.progress();
        if p >= 1.0 {
            return 1.0;
        }
        self.to_start + (1.0 - self.to_start) * p
    }

    pub fn is_complete(&self) -> bool {
        self.progress() >= 1.0
    }
}
