// Popover position calculation.
//
// Two passes over the priority list of the preferred side: the first candidate that fits
// every bound wins outright. Otherwise candidates that keep their full height inside the
// clamp bound beat those that would have to scroll, then the largest visible area wins.
// The winner is clamped into that same bound and marked scrollable if it lost height.

mod placement;

pub use placement::{ParseSideError, Placement, PriorityMapping, Side, PRIORITY_MAPPING};

use log::{debug, trace};
use serde::{Deserialize, Serialize};

use crate::config::PlacementConfig;
use crate::geometry::{Rect, Size, intersect_rectangles};

/// Everything the calculator needs for one positioning decision.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PositionRequest {
    pub preferred: Side,
    pub trigger: Rect,
    pub arrow: Size,
    pub body: Size,
    pub container: Rect,
    pub viewport: Rect,
    /// The popover is rendered outside its ancestors, so the container does not clip it.
    #[serde(default)]
    pub render_with_portal: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PositionResult {
    pub internal_position: Placement,
    pub bounding_offset: Rect,
    pub scrollable: bool,
}

/// How a single candidate fared in both passes.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CandidateReport {
    pub placement: Placement,
    pub rect: Rect,
    pub fits: bool,
    /// Height survives clamping into the bound the winner is clamped into.
    pub keeps_height: bool,
    pub visible_area: f32,
}

pub fn calculate_position(
    preferred: Side,
    trigger: Rect,
    arrow: Size,
    body: Size,
    container: Rect,
    viewport: Rect,
    render_with_portal: bool,
) -> PositionResult {
    let request = PositionRequest {
        preferred,
        trigger,
        arrow,
        body,
        container,
        viewport,
        render_with_portal,
    };
    calculate_position_with(&PlacementConfig::default(), &request)
}

pub fn calculate_position_with(config: &PlacementConfig, request: &PositionRequest) -> PositionResult {
    if let Some((placement, rect)) = first_fitting(config, request) {
        return PositionResult {
            internal_position: placement,
            bounding_offset: rect,
            scrollable: false,
        };
    }

    let placement = best_fallback(config, request);
    debug!(
        "no {} placement fits; falling back to {placement}",
        request.preferred
    );
    let rect = placement.candidate_rect(&request.trigger, &request.arrow, &request.body, config);
    let clamped = rect.clamp_into(&clamp_bound(request));

    PositionResult {
        internal_position: placement,
        bounding_offset: clamped,
        scrollable: clamped.height < rect.height,
    }
}

/// Per-candidate breakdown of both passes, in priority order.
pub fn evaluate_candidates(config: &PlacementConfig, request: &PositionRequest) -> Vec<CandidateReport> {
    let bound = clamp_bound(request);
    candidates(config, request)
        .map(|(placement, rect)| CandidateReport {
            placement,
            rect,
            fits: fits(&rect, request),
            keeps_height: keeps_height(&rect, &bound),
            visible_area: visible_area(&rect, request),
        })
        .collect()
}

/// Fit pass: first candidate, in priority order, that lies inside every bound.
pub fn first_fitting(config: &PlacementConfig, request: &PositionRequest) -> Option<(Placement, Rect)> {
    candidates(config, request).find(|(_, rect)| fits(rect, request))
}

/// Scoring pass, ranked by `(keeps full height in the clamp bound, visible area)`.
/// Later candidates must score strictly higher to replace an earlier one.
pub fn best_fallback(config: &PlacementConfig, request: &PositionRequest) -> Placement {
    let bound = clamp_bound(request);
    let mut best: Option<(Placement, bool, f32)> = None;
    for (placement, rect) in candidates(config, request) {
        let whole = keeps_height(&rect, &bound);
        let area = visible_area(&rect, request);
        trace!("candidate {placement}: keeps height {whole}, visible area {area}");
        let better = match best {
            None => true,
            Some((_, best_whole, best_area)) => {
                (whole && !best_whole) || (whole == best_whole && area > best_area)
            }
        };
        if better {
            best = Some((placement, whole, area));
        }
    }
    best.map(|(placement, _, _)| placement)
        .unwrap_or(request.preferred.priority()[0])
}

fn candidates<'a>(
    config: &'a PlacementConfig,
    request: &'a PositionRequest,
) -> impl Iterator<Item = (Placement, Rect)> + 'a {
    request.preferred.priority().iter().map(move |placement| {
        let rect =
            placement.candidate_rect(&request.trigger, &request.arrow, &request.body, config);
        (*placement, rect)
    })
}

fn fits(rect: &Rect, request: &PositionRequest) -> bool {
    rect.fits_within(&request.viewport)
        && (request.render_with_portal || rect.fits_within(&request.container))
}

fn visible_area(rect: &Rect, request: &PositionRequest) -> f32 {
    let area = if request.render_with_portal {
        intersect_rectangles(&[*rect, request.viewport])
    } else {
        intersect_rectangles(&[*rect, request.viewport, request.container])
    };
    area.unwrap_or(0.0)
}

fn keeps_height(rect: &Rect, bound: &Rect) -> bool {
    rect.clamp_into(bound).height >= rect.height
}

// A container larger than the viewport lets the body overflow the viewport (the page
// scrolls); a portal escapes the container entirely.
fn clamp_bound(request: &PositionRequest) -> Rect {
    if request.render_with_portal {
        return request.viewport;
    }
    if request.container.area() >= request.viewport.area() {
        request.container
    } else {
        request.viewport
    }
}
