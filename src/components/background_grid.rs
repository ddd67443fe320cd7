use web_sys::MouseEvent;
use wasm_bindgen::JsCast;
use yew::prelude::*;

use crate::dom::{WindowListener, viewport_size};
use crate::model::{GLOW_GRID_COLS, GLOW_GRID_ROWS, PointerPosition, Viewport};
use crate::state::glow_cells;
use crate::util::{cell_style, clog};

#[function_component(BackgroundGrid)]
pub fn background_grid() -> Html {
    let viewport = use_state(Viewport::default);
    let pointer = use_state(|| None::<PointerPosition>);

    {
        let viewport = viewport.clone();
        let pointer = pointer.clone();
        use_effect_with((), move |_| {
            let mut guards = Vec::new();
            if let Some(window) = web_sys::window() {
                let (width, height) = viewport_size(&window);
                viewport.set(Viewport { width, height });

                let resize = {
                    let window_rs = window.clone();
                    WindowListener::new(&window, "resize", move |_e| {
                        let (width, height) = viewport_size(&window_rs);
                        viewport.set(Viewport { width, height });
                    })
                };
                let mousemove = WindowListener::new(&window, "mousemove", move |e| {
                    if let Some(m) = e.dyn_ref::<MouseEvent>() {
                        pointer.set(Some(PointerPosition {
                            x: m.client_x() as f64,
                            y: m.client_y() as f64,
                        }));
                    }
                });
                guards.extend(resize);
                guards.extend(mousemove);
            } else {
                clog("no window; background grid stays inert");
            }
            move || drop(guards)
        });
    }

    let cells = glow_cells(*viewport, *pointer);
    let grid_style = format!(
        "position:absolute; inset:0; display:grid; grid-template-columns:repeat({}, 1fr); grid-template-rows:repeat({}, 1fr); gap:8px; padding:8px; pointer-events:none;",
        GLOW_GRID_COLS, GLOW_GRID_ROWS
    );
    html! {
        <div class="glow-grid" style={grid_style}>
            { for cells.iter().map(|c| html! {
                <div key={format!("{}-{}", c.row, c.col)} style={cell_style(c.tier.color(), c.scale())}></div>
            }) }
        </div>
    }
}
