/// Maps crossterm events onto the core's per-frame input
use crossterm::event::{
    Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseEvent, MouseEventKind,
};
use fp3d_core::{Action, FrameInput};

/// Pointer units per arrow-key press.
const ARROW_LOOK_STEP: f32 = 25.0;

/// Pointer units per terminal cell of mouse travel, horizontally and vertically.
const MOUSE_CELL_X: f32 = 8.0;
const MOUSE_CELL_Y: f32 = 16.0;

#[derive(Debug, Clone, PartialEq)]
pub enum Translated {
    Input(FrameInput),
    Resize { width: u16, height: u16 },
    Ignored,
}

/// Stateful translator; remembers the last mouse cell to derive deltas.
#[derive(Debug, Default)]
pub struct InputMapper {
    last_mouse: Option<(u16, u16)>,
}

impl InputMapper {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn translate(&mut self, event: &Event) -> Translated {
        match event {
            Event::Key(key) => translate_key(key),
            Event::Mouse(mouse) => self.translate_mouse(mouse),
            Event::Resize(width, height) => Translated::Resize {
                width: *width,
                height: *height,
            },
            _ => Translated::Ignored,
        }
    }

    fn translate_mouse(&mut self, mouse: &MouseEvent) -> Translated {
        match mouse.kind {
            MouseEventKind::Moved | MouseEventKind::Drag(_) => {
                let position = (mouse.column, mouse.row);
                let previous = self.last_mouse.replace(position);
                match previous {
                    Some((x, y)) => Translated::Input(FrameInput {
                        pointer_dx: (position.0 as f32 - x as f32) * MOUSE_CELL_X,
                        pointer_dy: (position.1 as f32 - y as f32) * MOUSE_CELL_Y,
                        ..Default::default()
                    }),
                    None => Translated::Ignored,
                }
            }
            _ => Translated::Ignored,
        }
    }
}

fn translate_key(key: &KeyEvent) -> Translated {
    if key.kind == KeyEventKind::Release {
        return Translated::Ignored;
    }

    let mut input = FrameInput::new();
    match key.code {
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            input.actions.push(Action::Quit)
        }
        KeyCode::Char('q') | KeyCode::Esc => input.actions.push(Action::Quit),
        KeyCode::Char('w') | KeyCode::Char('W') => input.forward = 1.0,
        KeyCode::Char('s') | KeyCode::Char('S') => input.forward = -1.0,
        KeyCode::Char('d') | KeyCode::Char('D') => input.strafe = 1.0,
        KeyCode::Char('a') | KeyCode::Char('A') => input.strafe = -1.0,
        KeyCode::Char(' ') => input.vertical = 1.0,
        KeyCode::Char('c') | KeyCode::Char('C') => input.vertical = -1.0,
        KeyCode::Left => input.pointer_dx = -ARROW_LOOK_STEP,
        KeyCode::Right => input.pointer_dx = ARROW_LOOK_STEP,
        KeyCode::Up => input.pointer_dy = -ARROW_LOOK_STEP,
        KeyCode::Down => input.pointer_dy = ARROW_LOOK_STEP,
        KeyCode::Char('p') | KeyCode::Char('P') => input.actions.push(Action::PlaceObject),
        KeyCode::Char('g') | KeyCode::Char('G') => input.actions.push(Action::ToggleGizmo),
        _ => return Translated::Ignored,
    }
    Translated::Input(input)
}
