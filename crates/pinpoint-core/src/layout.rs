//! Label placement: keeps text boxes off each other and inside the canvas.

use tracing::trace;

use crate::consts::{EDGE_MARGIN, MAX_OVERLAP_ATTEMPTS, OVERLAP_SHIFT_STEP};
use crate::geometry::{CanvasSize, LabelBox, PixelPos};
use crate::text::TextMetrics;

/// Compute the final box for `text` whose preferred baseline-left point is
/// `desired`.
///
/// The candidate is first pushed downward in fixed steps while it overlaps
/// anything in `existing`, giving up after a bounded number of attempts, so
/// the result is not guaranteed overlap-free. It is then clamped into the
/// canvas (right, left, bottom, top, in that order). Clamping wins over
/// overlap avoidance and may reintroduce an overlap.
///
/// The caller is responsible for appending the returned box to `existing`
/// before placing the next label of the same pass.
pub fn place_label<M: TextMetrics + ?Sized>(
    metrics: &M,
    text: &str,
    desired: PixelPos,
    canvas: CanvasSize,
    existing: &[LabelBox],
) -> LabelBox {
    let size = metrics.measure(text);
    let mut candidate = LabelBox::around_text(desired, size.width, size.height);

    let attempts = avoid_overlaps(&mut candidate, existing);
    if attempts > 0 {
        trace!(text, attempts, "shifted label to avoid overlap");
    }

    clamp_to_canvas(&mut candidate, canvas);
    candidate
}

/// Shift `candidate` down until it is clear of `existing` or the attempt
/// budget runs out. Returns the number of shifts applied.
fn avoid_overlaps(candidate: &mut LabelBox, existing: &[LabelBox]) -> usize {
    let mut attempts = 0;
    while attempts < MAX_OVERLAP_ATTEMPTS && existing.iter().any(|b| candidate.overlaps(b)) {
        candidate.translate(0, OVERLAP_SHIFT_STEP);
        attempts += 1;
    }
    attempts
}

fn clamp_to_canvas(b: &mut LabelBox, canvas: CanvasSize) {
    let right = canvas.width.saturating_sub(EDGE_MARGIN);
    if b.x2 > right {
        b.translate(right.saturating_sub(b.x2), 0);
    }
    if b.x1 < EDGE_MARGIN {
        b.translate(EDGE_MARGIN.saturating_sub(b.x1), 0);
    }

    let bottom = canvas.height.saturating_sub(EDGE_MARGIN);
    if b.y2 > bottom {
        b.translate(0, bottom.saturating_sub(b.y2));
    }
    if b.y1 < EDGE_MARGIN {
        b.translate(0, EDGE_MARGIN.saturating_sub(b.y1));
    }
}
