// Inline style strings for everything the widget paints.
use super::constants::{
    GHOST_CURSOR_SIZE_PX, HIGHLIGHT_LIFT_PX, HIGHLIGHT_TRANSITION_SEC, PERSPECTIVE_PX,
};
use hero_core::constants::CHAR_COLORS;
use hero_core::{LanguagePhase, RenderFrame};

pub fn container_style(frame: &RenderFrame) -> String {
    format!(
        "display:inline-block;position:relative;transform-style:preserve-3d;\
         transform:perspective({:.0}px) translate3d({:.3}px,{:.3}px,0) \
         rotateX({:.3}deg) rotateY({:.3}deg)",
        PERSPECTIVE_PX, frame.translate.x, frame.translate.y, frame.tilt.x, frame.tilt.y
    )
}

#[inline]
pub fn char_color(index: usize) -> &'static str {
    CHAR_COLORS[index % CHAR_COLORS.len()]
}

pub fn char_style(index: usize, highlighted: Option<usize>) -> String {
    let base = format!(
        "display:inline-block;transform-style:preserve-3d;transition:color {s}s,transform {s}s;",
        s = HIGHLIGHT_TRANSITION_SEC
    );
    if highlighted == Some(index) {
        format!(
            "{base}color:{};transform:translateY({:.0}px)",
            char_color(index),
            -HIGHLIGHT_LIFT_PX
        )
    } else {
        base
    }
}

pub fn ghost_cursor_style(frame: &RenderFrame) -> String {
    let half = GHOST_CURSOR_SIZE_PX / 2.0;
    format!(
        "position:absolute;left:50%;top:50%;width:{size:.0}px;height:{size:.0}px;\
         border-radius:50%;pointer-events:none;background:rgba(255,255,255,0.85);\
         opacity:{:.3};transform:translate({:.3}px,{:.3}px)",
        frame.ghost_opacity,
        frame.ghost_cursor.x - half,
        frame.ghost_cursor.y - half,
        size = GHOST_CURSOR_SIZE_PX
    )
}

/// Which variant to show and how it is placed for the current swap phase.
pub fn language_view(frame: &RenderFrame) -> (usize, String) {
    let (index, y_pct, opacity) = match frame.language_phase {
        LanguagePhase::Exiting { previous, progress } => {
            (previous, -100.0 * progress, 1.0 - progress)
        }
        LanguagePhase::Entering { progress } => {
            (frame.language_index, 100.0 * (1.0 - progress), progress)
        }
        LanguagePhase::Settled => (frame.language_index, 0.0, 1.0),
    };
    (
        index,
        format!(
            "display:inline-block;transform:translateY({:.2}%);opacity:{:.3}",
            y_pct, opacity
        ),
    )
}
