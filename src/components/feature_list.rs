use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct FeatureRowProps {
    pub icon: &'static str,
    pub color: &'static str,
    pub title: &'static str,
    pub blurb: &'static str,
}

#[function_component(FeatureRow)]
pub fn feature_row(props: &FeatureRowProps) -> Html {
    html! {
        <div style="display:flex; align-items:flex-start; gap:12px;">
            <span style={format!("width:20px; text-align:center; flex-shrink:0; color:{};", props.color)}>{ props.icon }</span>
            <div>
                <span style="display:block; font-weight:500; color:#f0f6fc;">{ props.title }</span>
                <p style="margin:2px 0 0 0; color:#8b949e;">{ props.blurb }</p>
            </div>
        </div>
    }
}

#[function_component(FeatureList)]
pub fn feature_list() -> Html {
    html! {
        <div class="features fade-up" style="display:flex; flex-direction:column; gap:12px; width:100%; max-width:28rem; font-size:14px;">
            <div style="display:flex; align-items:center; gap:8px; color:#8b949e;">
                <span style="color:#22c55e;">{"\u{26A1}"}</span>
                <span>{"Why You'll Love It"}</span>
            </div>
            <FeatureRow icon={"\u{21BB}"} color={"#4ade80"} title={"Auto Updates"} blurb={"Always synced with your latest GitHub contributions."} />
            <FeatureRow icon={"\u{1F3A8}"} color={"#60a5fa"} title={"GitHub Style"} blurb={"Matches GitHub's native dark theme."} />
            <FeatureRow icon={"\u{26A1}"} color={"#facc15"} title={"Lightweight"} blurb={"Uses minimal resources while staying always visible."} />
        </div>
    }
}
