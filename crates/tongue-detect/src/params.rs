use tongue_base::Vec2;

/// Multi-scale search parameters for a cascade classifier.
#[derive(Clone, Debug, PartialEq)]
pub struct DetectParams {
    scale_factor: f64,
    min_neighbors: i32,
    min_size: Vec2<i32>,
    max_size: Option<Vec2<i32>>,
}

impl Default for DetectParams {
    fn default() -> Self {
        Self {
            scale_factor: 1.1,
            min_neighbors: 3,
            min_size: Vec2::new(100, 100),
            max_size: None,
        }
    }
}

impl DetectParams {
    /// Set how much the search window grows between scales (must be > 1).
    pub fn with_scale_factor(mut self, scale_factor: f64) -> Self {
        self.scale_factor = scale_factor;
        self
    }

    /// Set how many overlapping hits a candidate needs to be kept.
    pub fn with_min_neighbors(mut self, min_neighbors: i32) -> Self {
        self.min_neighbors = min_neighbors;
        self
    }

    /// Set the smallest region size reported.
    pub fn with_min_size(mut self, min_size: Vec2<i32>) -> Self {
        self.min_size = min_size;
        self
    }

    /// Set the largest region size reported, `None` for unbounded.
    pub fn with_max_size(mut self, max_size: Option<Vec2<i32>>) -> Self {
        self.max_size = max_size;
        self
    }

    pub fn scale_factor(&self) -> f64 {
        self.scale_factor
    }

    pub fn min_neighbors(&self) -> i32 {
        self.min_neighbors
    }

    pub fn min_size(&self) -> Vec2<i32> {
        self.min_size
    }

    pub fn max_size(&self) -> Option<Vec2<i32>> {
        self.max_size
    }
}
