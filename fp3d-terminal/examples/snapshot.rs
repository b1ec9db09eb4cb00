/// Example: Render a single frame of the demo scene as plain text
///
/// Usage: cargo run --example snapshot -- [path/to/model.obj] [columns] [rows]
use anyhow::Context;
use fp3d_core::{obj, primitive, Mesh, RenderConfig};
use fp3d_terminal::logging::{init_logging, LogTarget, LoggingConfig};
use fp3d_terminal::{AsciiRenderer, World};

fn main() -> anyhow::Result<()> {
    init_logging(LoggingConfig {
        env_filter: None,
        target: LogTarget::Stderr,
    });

    let args: Vec<String> = std::env::args().collect();
    let mesh = match args.get(1) {
        Some(path) => obj::load_mesh(path),
        None => Mesh::cube(2.0),
    };
    let columns: usize = match args.get(2) {
        Some(s) => s.parse().context("columns must be a number")?,
        None => 80,
    };
    let rows: usize = match args.get(3) {
        Some(s) => s.parse().context("rows must be a number")?,
        None => 24,
    };

    let config = RenderConfig::from_env().context("invalid render configuration")?;
    let world = World::new(mesh, config);

    let mut renderer = AsciiRenderer::new(columns, rows);
    let (width, height) = renderer.logical_size();
    let primitives = world.render(width, height);
    primitive::submit(&primitives, &mut renderer);

    for y in 0..rows {
        let line: String = (0..columns)
            .filter_map(|x| renderer.cell(x, y))
            .map(|cell| cell.character)
            .collect();
        println!("{}", line.trim_end());
    }
    Ok(())
}
