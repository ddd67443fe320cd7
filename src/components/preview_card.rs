use yew::prelude::*;

use super::heatmap_preview::HeatmapPreview;

/// Language bar pills under the heatmap: (color, width px, pulse delay s).
const LANGUAGE_PILLS: [(&str, u32, f64); 4] = [
    ("#3b82f6", 32, 0.0),
    ("#a855f7", 28, 0.7),
    ("#facc15", 24, 1.4),
    ("#f97316", 20, 2.1),
];

#[function_component(PreviewCard)]
pub fn preview_card() -> Html {
    let dot = |color: &str| {
        html! { <span style={format!("width:10px; height:10px; border-radius:50%; background:{};", color)}></span> }
    };
    html! {
        <div class="preview-card" style="position:relative; background:#161b22; border:1px solid #30363d; border-radius:12px; padding:16px; width:100%; max-width:384px; display:flex; flex-direction:column; align-items:center; box-shadow:0 6px 18px rgba(0,0,0,0.6);">
            <div style="position:absolute; top:12px; left:12px; display:flex; gap:6px;">
                { dot("#ef4444") }
                { dot("#facc15") }
                { dot("#22c55e") }
            </div>
            <div style="display:flex; align-items:center; gap:8px; margin:24px 0 8px 0; font-size:13px; color:#8b949e;">
                <span class="pulse" style="width:8px; height:8px; border-radius:50%; background:#22c55e;"></span>
                <span>{"Live Preview"}</span>
            </div>
            <div class="float" style="border-radius:12px; overflow:hidden; width:100%; max-width:265px; background:#000; border:2px solid #23272f;">
                <div style="padding:12px;">
                    <HeatmapPreview />
                    <div style="display:flex; justify-content:space-between; align-items:center;">
                        <div style="display:flex; gap:6px; align-items:center;">
                            { for LANGUAGE_PILLS.iter().map(|(color, width, delay)| html! {
                                <span class="breathe" style={format!("width:{}px; height:12px; border-radius:6px; background:{}; animation-delay:{}s;", width, color, delay)}></span>
                            }) }
                        </div>
                        <svg width="16" height="16" viewBox="0 0 24 24" fill="none" stroke="#fff" stroke-width="2" style="margin-left:8px;">
                            <path d="M9 21H5a2 2 0 0 1-2-2V5a2 2 0 0 1 2-2h4" />
                            <polyline points="16,17 21,12 16,7" />
                            <line x1="21" y1="12" x2="9" y2="12" />
                        </svg>
                    </div>
                </div>
            </div>
        </div>
    }
}
