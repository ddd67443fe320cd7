use yew::prelude::*;

#[function_component(Hero)]
pub fn hero() -> Html {
    html! {
        <div class="hero fade-down" style="display:flex; flex-direction:column; align-items:center; text-align:center; gap:10px;">
            <div style="display:flex; align-items:center; gap:8px; font-size:13px; color:#8b949e;">
                <span>{"\u{25A3}"}</span>
                <span>{"GitWidget"}</span>
            </div>
            <h1 style="margin:0; font-size:clamp(1.5rem, 4vw, 3.75rem); font-weight:700; line-height:1.15; letter-spacing:-0.02em;">
                {"Keep your "}<span style="color:#22c55e;">{"streak alive"}</span>{"."}
                <br />
                {"Always in sight."}
            </h1>
            <p style="margin:0; max-width:42rem; color:#8b949e; font-size:clamp(0.875rem, 1.6vw, 1.125rem);">
                {"A minimal Windows widget that shows your live GitHub contributions, auto-updates, and stays out of your way."}
            </p>
        </div>
    }
}
