use yew::prelude::*;

use crate::model::links;

#[derive(Properties, PartialEq, Clone)]
pub struct ActionLinkProps {
    pub href: &'static str,
    pub label: &'static str,
    pub icon: &'static str,
    #[prop_or(false)]
    pub primary: bool,
}

#[function_component(ActionLink)]
pub fn action_link(props: &ActionLinkProps) -> Html {
    let class = if props.primary {
        "action action-primary"
    } else {
        "action action-outline"
    };
    html! {
        <a class={class} href={props.href} target="_blank" rel="noopener noreferrer">
            <span style="margin-right:8px;">{ props.icon }</span>
            { props.label }
        </a>
    }
}

#[function_component(ActionLinks)]
pub fn action_links() -> Html {
    html! {
        <div class="actions fade-up" style="display:flex; flex-wrap:wrap; gap:16px; align-items:center; justify-content:center; width:100%;">
            <ActionLink href={links::DOWNLOAD_URL} label={"Install Widget"} icon={"\u{2B07}"} primary={true} />
            <ActionLink href={links::REPOSITORY_URL} label={"Star on GitHub"} icon={"\u{2605}"} />
            <ActionLink href={links::SOCIAL_URL} label={"Twitter"} icon={"\u{1D54F}"} />
        </div>
    }
}
