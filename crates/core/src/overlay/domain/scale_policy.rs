/// Target platform of the rendering surface.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Platform {
    Ios,
    Android,
}

/// Per-platform coordinate conversion policy, selected once at
/// startup.
///
/// The two platforms' native coordinate conventions diverge by
/// exactly 4x in scale, and iOS carries a fixed vertical chrome
/// offset that has no counterpart in detector space. Both constants
/// live here and nowhere else; mapping code takes the policy as data.
///
/// | platform | multiplier | vertical_offset |
/// |----------|------------|-----------------|
/// | iOS      | 0.5        | 100.0           |
/// | Android  | 2.0        | 0.0             |
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScalePolicy {
    pub multiplier: f64,
    pub vertical_offset: f64,
}

impl ScalePolicy {
    pub fn new(multiplier: f64, vertical_offset: f64) -> Self {
        Self {
            multiplier,
            vertical_offset,
        }
    }

    pub fn for_platform(platform: Platform) -> Self {
        match platform {
            Platform::Ios => Self::new(0.5, 100.0),
            Platform::Android => Self::new(2.0, 0.0),
        }
    }

    /// Identity policy: detector units scale by view width alone.
    /// Used as the reference in tests.
    pub fn reference() -> Self {
        Self::new(1.0, 0.0)
    }
}
