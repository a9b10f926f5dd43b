//! Toast animation effects.

use ratatui::layout::Rect;

/// Slide a toast in from the right edge of `viewport`.
///
/// `progress` is `None` once the effect has settled, in which case `base` is
/// returned untouched. The result is clipped to the viewport and may be zero
/// width at the very start of the effect.
#[must_use]
pub fn slide_in_from_right(progress: Option<f32>, base: Rect, viewport: Rect) -> Rect {
    let Some(progress) = progress else {
        return base;
    };
    let t = ease_out_cubic(progress);
    let viewport_right = viewport.x.saturating_add(viewport.width);
    let travel = viewport_right.saturating_sub(base.x);
    let offset = ((1.0 - t) * f32::from(travel)).round() as u16;
    let x = base.x.saturating_add(offset).min(viewport_right);
    Rect {
        x,
        width: base.width.min(viewport_right.saturating_sub(x)),
        ..base
    }
}

fn ease_out_cubic(t: f32) -> f32 {
    let t = t.clamp(0.0, 1.0);
    let inv = 1.0 - t;
    1.0 - inv * inv * inv
}
