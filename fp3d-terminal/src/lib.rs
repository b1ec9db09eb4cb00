/// Terminal frontend for the first-person renderer
use crossterm::{
    cursor,
    event::{self, DisableMouseCapture, EnableMouseCapture},
    execute, queue,
    style::{Color, Print, ResetColor, SetForegroundColor},
    terminal,
};
use fp3d_core::{primitive, FrameInput, Mesh, RenderConfig};
use std::io::{self, stdout, Write};
use std::time::{Duration, Instant};

pub mod input;
pub mod logging;
pub mod renderer;
pub mod world;

pub use input::{InputMapper, Translated};
pub use renderer::AsciiRenderer;
pub use world::World;

/// Holds the terminal in raw mode on the alternate screen. Dropping it
/// restores the terminal, also on early returns and panics.
struct TerminalGuard;

impl TerminalGuard {
    fn enter() -> io::Result<Self> {
        terminal::enable_raw_mode()?;
        let guard = TerminalGuard;
        execute!(
            stdout(),
            terminal::EnterAlternateScreen,
            cursor::Hide,
            EnableMouseCapture
        )?;
        Ok(guard)
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        if let Err(e) = restore(&mut stdout()) {
            log::error!("failed to restore terminal screen: {e}");
        }
        if let Err(e) = terminal::disable_raw_mode() {
            log::error!("failed to leave raw mode: {e}");
        }
    }
}

fn restore<W: Write>(out: &mut W) -> io::Result<()> {
    execute!(
        out,
        DisableMouseCapture,
        terminal::LeaveAlternateScreen,
        cursor::Show
    )
}

/// Main application struct for terminal rendering
pub struct TerminalApp {
    world: World,
    renderer: AsciiRenderer,
    mapper: InputMapper,
    running: bool,
    last_frame: Instant,
    frame_count: u32,
    fps: f32,
}

impl TerminalApp {
    pub fn new(mesh: Mesh, config: RenderConfig) -> io::Result<Self> {
        let (width, height) = terminal::size()?;

        Ok(Self {
            world: World::new(mesh, config),
            renderer: AsciiRenderer::new(width as usize, height as usize),
            mapper: InputMapper::new(),
            running: true,
            last_frame: Instant::now(),
            frame_count: 0,
            fps: 0.0,
        })
    }

    pub fn run(&mut self) -> io::Result<()> {
        let _guard = TerminalGuard::enter()?;
        self.main_loop()
    }

    fn main_loop(&mut self) -> io::Result<()> {
        let target_frame_time = Duration::from_millis(1000 / 30); // 30 FPS target
        log::info!("entering main loop");

        while self.running {
            let frame_start = Instant::now();

            let input = self.poll_input()?;
            if !self.world.update(&input) {
                self.running = false;
            }

            self.render()?;

            // Frame timing
            self.frame_count += 1;
            let elapsed = frame_start.elapsed();
            if elapsed < target_frame_time {
                std::thread::sleep(target_frame_time - elapsed);
            }

            let now = Instant::now();
            if (now - self.last_frame).as_secs() >= 1 {
                self.fps = self.frame_count as f32 / (now - self.last_frame).as_secs_f32();
                self.frame_count = 0;
                self.last_frame = now;
            }
        }

        log::info!("main loop finished");
        Ok(())
    }

    /// Drain pending events into a single frame of input.
    fn poll_input(&mut self) -> io::Result<FrameInput> {
        let mut input = FrameInput::new();
        while event::poll(Duration::from_millis(0))? {
            match self.mapper.translate(&event::read()?) {
                Translated::Input(next) => input.merge(next),
                Translated::Resize { width, height } => {
                    log::debug!("terminal resized to {width}x{height}");
                    self.renderer.resize(width as usize, height as usize);
                }
                Translated::Ignored => {}
            }
        }
        Ok(input)
    }

    fn render(&mut self) -> io::Result<()> {
        let (width, height) = self.renderer.logical_size();
        let primitives = self.world.render(width, height);

        self.renderer.clear();
        primitive::submit(&primitives, &mut self.renderer);

        let mut stdout = stdout();
        self.renderer.draw(&mut stdout)?;

        let camera = &self.world.camera;
        queue!(
            stdout,
            cursor::MoveTo(0, 0),
            SetForegroundColor(Color::Yellow),
            Print(format!(
                "FP3D | FPS: {:.1} | pos ({:.1}, {:.1}, {:.1}) yaw {:.2} pitch {:.2} | WASD/Space/C=Move Mouse/Arrows=Look P=Place G=Gizmo Q=Quit",
                self.fps,
                camera.position.x,
                camera.position.y,
                camera.position.z,
                camera.yaw(),
                camera.pitch(),
            )),
            ResetColor
        )?;

        stdout.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_restore_leaves_alternate_screen_and_shows_cursor() {
        let mut out = Vec::new();
        restore(&mut out).unwrap();
        let text = String::from_utf8_lossy(&out);

        assert!(text.contains("\x1b[?1049l"));
        assert!(text.contains("\x1b[?25h"));
        let leave = text.find("\x1b[?1049l");
        let show = text.find("\x1b[?25h");
        assert!(leave < show);
    }
}
