// Shape routines built only from cursor commands.
// After every segment an optional observer sees the surface and may stop the routine;
// a stopped routine leaves the cursor where the last completed segment put it.

use crate::canvas::Surface;
use crate::cursor::Cursor;

/// Turn used by `spiral` in the demo scenes.
pub const DEFAULT_SPIRAL_TURN: f64 = 18.0;

/// Shown the surface after each drawing step. Returning false asks the caller to stop.
/// Visual: the window repaints once per segment, so shapes appear edge by edge.
pub trait Present<S: ?Sized> {
    fn present(&mut self, surface: &S) -> bool;
}

impl<S: ?Sized, F: FnMut(&S) -> bool> Present<S> for F {
    fn present(&mut self, surface: &S) -> bool {
        self(surface)
    }
}

fn keep_going<S: Surface>(cursor: &Cursor<'_, S>, on_step: &mut Option<&mut dyn Present<S>>) -> bool {
    match on_step {
        Some(observer) => observer.present(cursor.surface()),
        None => true,
    }
}

/// Regular polygon, turning left by 360/sides after each side.
/// Fewer than 3 sides draws nothing. Returns false if the observer stopped it.
/// Visual: starting along the current heading, the outline closes back on the start
/// point and grows upward on screen (left turns with y pointing down).
pub fn polygon<S: Surface>(
    cursor: &mut Cursor<'_, S>,
    sides: u32,
    side_length: f64,
    pen: S::Pixel,
    mut on_step: Option<&mut dyn Present<S>>,
) -> bool {
    if sides < 3 {
        return true;
    }
    cursor.set_pen(pen);
    cursor.pen_down();
    let angle = 360.0 / f64::from(sides);
    for side in 0..sides {
        cursor.forward(side_length);
        cursor.turn_left(angle);
        if !keep_going(cursor, &mut on_step) {
            tracing::info!(sides, completed = side + 1, "polygon stopped by observer");
            return false;
        }
    }
    true
}

/// Outward spiral: segment i (from 1) is `i * increment` long, each followed by a right turn.
/// Visual: a coil winding clockwise on screen, each loop wider than the last.
pub fn spiral<S: Surface>(
    cursor: &mut Cursor<'_, S>,
    steps: u32,
    increment: f64,
    turn_degrees: f64,
    pen: S::Pixel,
    mut on_step: Option<&mut dyn Present<S>>,
) -> bool {
    cursor.set_pen(pen);
    cursor.pen_down();
    let mut length = increment;
    for step in 0..steps {
        cursor.forward(length);
        cursor.turn_right(turn_degrees);
        length += increment;
        if !keep_going(cursor, &mut on_step) {
            tracing::info!(steps, completed = step + 1, "spiral stopped by observer");
            return false;
        }
    }
    true
}

/// Set the pen, then move to (x,y), drawing only with the pen down.
pub fn move_with_pen<S: Surface>(
    cursor: &mut Cursor<'_, S>,
    x: f64,
    y: f64,
    pen_down: bool,
    mut on_step: Option<&mut dyn Present<S>>,
) -> bool {
    if pen_down {
        cursor.pen_down();
    } else {
        cursor.pen_up();
    }
    cursor.move_to(x, y, pen_down);
    keep_going(cursor, &mut on_step)
}
