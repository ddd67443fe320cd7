use super::{
    action_links::ActionLinks, background_grid::BackgroundGrid, feature_list::FeatureList,
    hero::Hero, preview_card::PreviewCard, structured_data::StructuredData,
};
use yew::prelude::*;

#[function_component(App)]
pub fn app() -> Html {
    html! {
        <section class="landing" style="position:relative; width:100%; height:100vh; background:#0d1117; color:#e5e7eb; display:flex; flex-direction:column; align-items:center; justify-content:center; overflow:hidden; padding:16px; box-sizing:border-box; font-family:var(--font-mono, monospace);">
            <StructuredData />
            <BackgroundGrid />
            <div style="z-index:10; width:100%; max-width:72rem; margin:0 auto; display:flex; flex-direction:column; justify-content:center; align-items:center; height:100%; gap:28px;">
                <Hero />
                <div style="display:flex; flex-wrap:wrap; align-items:center; justify-content:center; gap:32px; width:100%; max-width:64rem;">
                    <PreviewCard />
                    <FeatureList />
                </div>
                <ActionLinks />
            </div>
        </section>
    }
}
