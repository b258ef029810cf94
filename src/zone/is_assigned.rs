use super::Zone;

impl Zone {
    /// True if this zone currently belongs to a region.
    pub fn is_assigned(&self) -> bool {
        self.region().is_some()
    }
}
