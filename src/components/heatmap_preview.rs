use yew::prelude::*;

use crate::model::{HEATMAP_COLS, HEATMAP_ROWS};
use crate::state::{Heatmap, JsRandom};

#[function_component(HeatmapPreview)]
pub fn heatmap_preview() -> Html {
    // Drawn once per mount; a remount rolls a new pattern.
    let heatmap = use_state(|| Heatmap::generate(&mut JsRandom));

    let grid_style = format!(
        "display:grid; gap:4px; margin-bottom:12px; grid-template-columns:repeat({}, 12px); grid-template-rows:repeat({}, 12px); grid-auto-flow:column;",
        HEATMAP_COLS, HEATMAP_ROWS
    );
    // Week-major to match grid-auto-flow:column.
    let cells = (0..HEATMAP_COLS)
        .flat_map(|col| (0..HEATMAP_ROWS).map(move |row| (row, col)))
        .filter_map(|(row, col)| heatmap.cell(row, col))
        .map(|c| {
            let style = format!(
                "width:12px; height:12px; border-radius:2px; background:{}; animation:pop-in 0.12s ease-out {:.3}s both;",
                c.tier.color(),
                c.reveal_delay()
            );
            html! { <div key={format!("{}-{}", c.col, c.row)} class="heatmap-cell" style={style}></div> }
        });
    html! {
        <div class="heatmap" style={grid_style}>
            { for cells }
        </div>
    }
}
