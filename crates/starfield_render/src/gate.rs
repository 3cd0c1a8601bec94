use bevy::prelude::*;
use bevy::ui::ComputedNode;
use bevy::window::PrimaryWindow;
use starfield_sim::VisibilityGate;

/// Lazy-render wrapper for a UI node: while the node is outside the viewport
/// (inflated by the gate's root margin) its children stop rendering and the
/// node is pinned to its last measured height so layout does not collapse
#[derive(Component, Debug, Clone)]
pub struct ShowWhenVisible {
    pub gate: VisibilityGate,
}

impl ShowWhenVisible {
    pub fn new(root_margin: f32) -> Self {
        Self {
            gate: VisibilityGate::new(root_margin),
        }
    }
}

impl Default for ShowWhenVisible {
    fn default() -> Self {
        Self::new(0.0)
    }
}

/// Viewport-intersection observer driving every gate
pub fn observe_visibility(
    window: Query<&Window, With<PrimaryWindow>>,
    mut gates: Query<(
        &mut ShowWhenVisible,
        &ComputedNode,
        &GlobalTransform,
        &mut Node,
        Option<&Children>,
    )>,
    mut visibilities: Query<&mut Visibility>,
) {
    let Ok(window) = window.get_single() else {
        return;
    };
    let viewport = Vec2::new(window.width(), window.height());

    for (mut wrapper, computed, transform, mut node, children) in &mut gates {
        let scale = computed.inverse_scale_factor();
        let size = computed.size() * scale;
        let center = transform.translation().truncate() * scale;
        let margin = wrapper.gate.root_margin();

        let intersecting = center.x + size.x / 2.0 >= -margin
            && center.x - size.x / 2.0 <= viewport.x + margin
            && center.y + size.y / 2.0 >= -margin
            && center.y - size.y / 2.0 <= viewport.y + margin;

        wrapper.gate.observe(intersecting, size.y);

        let desired = match wrapper.gate.frozen_height() {
            Some(height) => Val::Px(height),
            None => Val::Auto,
        };
        if node.height != desired {
            node.height = desired;
            node.min_height = desired;
        }

        let target = if wrapper.gate.is_visible() {
            Visibility::Inherited
        } else {
            Visibility::Hidden
        };
        let Some(children) = children else {
            continue;
        };
        for child in children {
            if let Ok(mut visibility) = visibilities.get_mut(*child) {
                visibility.set_if_neq(target);
            }
        }
    }
}
