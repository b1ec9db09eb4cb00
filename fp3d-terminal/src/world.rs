/// Demo scene state driven by frame input
use fp3d_core::{
    Action, AxesIndicator, Camera, Color, CompositeObject, Cube, DrawableId, FrameContext,
    FrameInput, Mesh, Primitive, RenderConfig, Scene, Shape, Vec3,
};

/// Distance in front of the camera where placed objects land.
const PLACE_DISTANCE: f32 = 4.0;

/// Heading change of the drone per frame, in radians.
const DRONE_SPIN: f32 = 0.02;

/// Camera, scene and the handles the input actions act on.
pub struct World {
    pub camera: Camera,
    pub scene: Scene,
    pub config: RenderConfig,
    gizmo: DrawableId,
    drone: DrawableId,
}

impl World {
    /// Build the demo scene around `mesh`, which is shown 8 units ahead.
    pub fn new(mut mesh: Mesh, config: RenderConfig) -> Self {
        let mut scene = Scene::new();

        mesh.translate(Vec3::new(0.0, 0.0, 8.0));
        scene.push(mesh);

        for center in [
            Vec3::new(-2.0, 2.0, 10.0),
            Vec3::new(0.0, 2.0, 12.0),
            Vec3::new(0.0, 2.0, 10.0),
        ] {
            scene.push(Cube::new(center, 2.0, Color::WHITE));
        }

        let drone = scene.push(CompositeObject::new(
            Mesh::cube(0.5),
            Vec3::new(3.0, -1.0, 6.0),
        ));
        let gizmo = scene.push(AxesIndicator::new());

        Self {
            camera: Camera::default(),
            scene,
            config,
            gizmo,
            drone,
        }
    }

    /// Apply one frame of input. Returns `false` once a quit was requested.
    pub fn update(&mut self, input: &FrameInput) -> bool {
        self.camera.apply_input(input, &self.config);

        if let Some(Shape::Composite(drone)) = self.scene.shape_mut(self.drone) {
            drone.turn(DRONE_SPIN);
        }

        let mut running = true;
        for action in &input.actions {
            match action {
                Action::PlaceObject => {
                    let target = self.camera.point_in_front(PLACE_DISTANCE);
                    if let Some(Shape::Composite(drone)) = self.scene.shape_mut(self.drone) {
                        drone.place_at(target);
                        log::debug!("placed object at {:?}", target);
                    }
                }
                Action::ToggleGizmo => {
                    if let Some(active) = self.scene.toggle(self.gizmo) {
                        log::info!("gizmo {}", if active { "shown" } else { "hidden" });
                    }
                }
                Action::Quit => running = false,
            }
        }
        running
    }

    pub fn render(&self, width: u32, height: u32) -> Vec<Primitive> {
        let frame = FrameContext::new(width, height, &self.config);
        self.scene.render(&self.camera, &frame)
    }

    pub fn drone(&self) -> Option<&CompositeObject> {
        match self.scene.get(self.drone).map(|d| d.shape()) {
            Some(Shape::Composite(drone)) => Some(drone),
            _ => None,
        }
    }

    pub fn gizmo_visible(&self) -> bool {
        self.scene.get(self.gizmo).map_or(false, |d| d.is_active())
    }
}
