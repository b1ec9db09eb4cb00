/// FP3D Terminal Demo - First-person walk through a small scene
///
/// Usage: fp3d-terminal [path/to/model.obj]
///
/// Controls:
///   - W/S/A/D: Move and strafe
///   - Space/C: Move up/down
///   - Mouse / Arrow Keys: Look around
///   - P: Place the drone in front of the camera
///   - G: Toggle the axes gizmo
///   - Q/ESC: Quit
use anyhow::Context;
use fp3d_core::{obj, Mesh, RenderConfig};
use fp3d_terminal::logging::{init_logging, LoggingConfig};
use fp3d_terminal::TerminalApp;

fn main() -> anyhow::Result<()> {
    init_logging(LoggingConfig::default());

    let config = RenderConfig::from_env().context("invalid render configuration")?;

    let mesh = match std::env::args().nth(1) {
        Some(path) => {
            println!("Loading model: {path}");
            obj::load_mesh(&path)
        }
        None => Mesh::cube(2.0),
    };
    log::info!("starting with {} triangles", mesh.len());

    let mut app = TerminalApp::new(mesh, config).context("failed to query terminal size")?;
    app.run().context("terminal renderer failed")?;

    println!("Thank you for using FP3D!");
    Ok(())
}
