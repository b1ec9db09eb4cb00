/// Discrete actions triggered by the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Move the composite object in front of the camera.
    PlaceObject,
    /// Show or hide the orientation gizmo.
    ToggleGizmo,
    Quit,
}

/// Everything the core needs from input for one frame.
///
/// Movement components are unitless steps (typically -1, 0 or 1) that are
/// scaled by the configured move speed. Pointer deltas are raw motion
/// units and are divided by the configured pointer divisor.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FrameInput {
    /// Positive moves along the view heading.
    pub forward: f32,
    /// Positive moves to the right.
    pub strafe: f32,
    /// Positive moves up (towards -y).
    pub vertical: f32,
    pub pointer_dx: f32,
    pub pointer_dy: f32,
    pub actions: Vec<Action>,
}

impl FrameInput {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fold another batch of input into this one.
    pub fn merge(&mut self, other: FrameInput) {
        self.forward += other.forward;
        self.strafe += other.strafe;
        self.vertical += other.vertical;
        self.pointer_dx += other.pointer_dx;
        self.pointer_dy += other.pointer_dy;
        self.actions.extend(other.actions);
    }
}
