/// Two-state gate behind the lazy-render wrapper: children of an off-screen
/// container stop rendering while the container keeps its last measured
/// height, so the layout does not collapse. Starts visible until the first
/// observation says otherwise; toggles for the life of the container.
#[derive(Debug, Clone)]
pub struct VisibilityGate {
    root_margin: f32,
    visible: bool,
    frozen_height: Option<f32>,
}

impl VisibilityGate {
    /// `root_margin` inflates the viewport when the observer computes
    /// intersection (prefetch margin before actually entering view)
    pub fn new(root_margin: f32) -> Self {
        Self {
            root_margin,
            visible: true,
            frozen_height: None,
        }
    }

    /// Feed one intersection observation. Hiding freezes the height that was
    /// measured just before the children unmount; showing releases it.
    /// Same-state observations are no-ops, so the first frozen height sticks.
    pub fn observe(&mut self, intersecting: bool, measured_height: f32) {
        if intersecting == self.visible {
            return;
        }
        if intersecting {
            self.frozen_height = None;
            self.visible = true;
        } else {
            self.frozen_height = Some(measured_height);
            self.visible = false;
        }
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// Height to pin the container to while hidden; None means automatic
    pub fn frozen_height(&self) -> Option<f32> {
        self.frozen_height
    }

    pub fn root_margin(&self) -> f32 {
        self.root_margin
    }
}

impl Default for VisibilityGate {
    fn default() -> Self {
        Self::new(0.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_visible() {
        let gate = VisibilityGate::default();
        assert!(gate.is_visible());
        assert_eq!(gate.frozen_height(), None);
    }

    #[test]
    fn test_hide_freezes_measured_height() {
        let mut gate = VisibilityGate::default();
        gate.observe(false, 320.0);
        assert!(!gate.is_visible());
        assert_eq!(gate.frozen_height(), Some(320.0));
    }

    #[test]
    fn test_repeated_hidden_keeps_first_height() {
        let mut gate = VisibilityGate::default();
        gate.observe(false, 320.0);
        // While hidden the measured height is the frozen one anyway
        gate.observe(false, 0.0);
        assert_eq!(gate.frozen_height(), Some(320.0));
    }

    #[test]
    fn test_show_releases_height() {
        let mut gate = VisibilityGate::default();
        gate.observe(false, 320.0);
        gate.observe(true, 320.0);
        assert!(gate.is_visible());
        assert_eq!(gate.frozen_height(), None);
    }

    #[test]
    fn test_toggles_indefinitely() {
        let mut gate = VisibilityGate::new(50.0);
        assert_eq!(gate.root_margin(), 50.0);

        for round in 0..10 {
            let height = 100.0 + round as f32;
            gate.observe(false, height);
            assert!(!gate.is_visible());
            assert_eq!(gate.frozen_height(), Some(height));
            gate.observe(true, height);
            assert!(gate.is_visible());
            assert_eq!(gate.frozen_height(), None);
        }
    }

    #[test]
    fn test_visible_observation_is_noop_at_start() {
        let mut gate = VisibilityGate::default();
        gate.observe(true, 50.0);
        assert!(gate.is_visible());
        assert_eq!(gate.frozen_height(), None);
    }
}
