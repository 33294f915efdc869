//! Host loop for a sequence of input events.
//!
//! This is what a windowed front end does on every event: feed the controller,
//! then repaint whichever surfaces it flagged as stale.

use crate::draw::Surface;
use crate::input::{InputEvent, InputState};
use crate::ui::ToolPalette;
use log::debug;

/// How much repainting a replay caused.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ReplayStats {
    /// Events fed to the controller
    pub events: usize,
    /// Full canvas redraws
    pub redraws: usize,
    /// Live preview redraws
    pub preview_redraws: usize,
}

/// Feeds `events` to `state`, repainting `canvas` and `preview` as requested.
///
/// Tool changes are selected on `palette` first, the way a click on a tool
/// icon would. Stale surfaces are repainted once before the first event,
/// matching a host that paints at startup.
pub fn replay<C, P>(
    state: &mut InputState,
    palette: &mut ToolPalette,
    events: &[InputEvent],
    canvas: &mut C,
    preview: &mut P,
) -> ReplayStats
where
    C: Surface + ?Sized,
    P: Surface + ?Sized,
{
    let mut stats = ReplayStats::default();
    repaint(state, canvas, preview, &mut stats);

    for event in events {
        debug!("Event: {event:?}");
        state.handle_event(palette.route(*event));
        stats.events += 1;
        repaint(state, canvas, preview, &mut stats);
    }

    stats
}

fn repaint<C, P>(state: &mut InputState, canvas: &mut C, preview: &mut P, stats: &mut ReplayStats)
where
    C: Surface + ?Sized,
    P: Surface + ?Sized,
{
    if state.needs_redraw {
        state.render(canvas);
        stats.redraws += 1;
    }
    if state.preview_dirty {
        state.render_preview(preview);
        stats.preview_redraws += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::draw::{RED, RecordingSurface};
    use crate::input::{ControllerSettings, Tool, parse_script};

    #[test]
    fn repaints_only_when_flagged() {
        let events = parse_script(
            "tool circle\ndown 0 0\nmove 1 1\nmove 3 4\nup 3 4\nmove 9 9\ncolor blue\n",
        )
        .unwrap();
        let mut state = InputState::with_defaults(RED, Tool::Line, ControllerSettings::default());
        let mut canvas = RecordingSurface::new();
        let mut preview = RecordingSurface::new();
        let mut palette = ToolPalette::new(state.current_tool());

        let stats = replay(&mut state, &mut palette, &events, &mut canvas, &mut preview);

        assert_eq!(stats.events, 7);
        // startup + down + 2 moves + up; the idle move and color change repaint nothing
        assert_eq!(stats.redraws, 5);
        // startup + tool + color
        assert_eq!(stats.preview_redraws, 3);
        assert_eq!(canvas.visible_stroke_count(), 1);
        assert_eq!(state.shapes().len(), 1);
        assert_eq!(palette.selected(), Tool::Circle);
    }

    #[test]
    fn palette_selection_follows_scripted_tool_changes() {
        let events = parse_script("tool rect
tool pencil
down 0 0
up 0 0
").unwrap();
        let mut state = InputState::with_defaults(RED, Tool::Line, ControllerSettings::default());
        let mut palette = ToolPalette::new(state.current_tool());

        replay(
            &mut state,
            &mut palette,
            &events,
            &mut RecordingSurface::new(),
            &mut RecordingSurface::new(),
        );

        assert_eq!(palette.selected(), Tool::Pencil);
        assert_eq!(palette.selected(), state.current_tool());
    }
}
