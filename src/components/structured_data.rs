//! JSON-LD `SoftwareApplication` block for search engines.
//! Informational only; nothing on the page reads it back.

use serde::Serialize;
use yew::prelude::*;

use crate::model::links;

pub const SCRIPT_ID: &str = "structured-data";

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SoftwareApplication {
    #[serde(rename = "@context")]
    pub context: &'static str,
    #[serde(rename = "@type")]
    pub kind: &'static str,
    pub name: &'static str,
    pub operating_system: &'static str,
    pub application_category: &'static str,
    pub description: &'static str,
    pub url: &'static str,
    pub author: Person,
    pub offers: Offer,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Person {
    #[serde(rename = "@type")]
    pub kind: &'static str,
    pub name: &'static str,
    pub url: &'static str,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Offer {
    #[serde(rename = "@type")]
    pub kind: &'static str,
    pub price: &'static str,
    pub price_currency: &'static str,
}

pub fn software_application() -> SoftwareApplication {
    SoftwareApplication {
        context: "https://schema.org",
        kind: "SoftwareApplication",
        name: "GitWidget",
        operating_system: "Windows, macOS",
        application_category: "DeveloperTool",
        description: "GitWidget is a free, lightweight Electron-based desktop widget that displays your GitHub contributions and top languages for developers.",
        url: links::SITE_URL,
        author: Person {
            kind: "Person",
            name: links::AUTHOR_NAME,
            url: links::AUTHOR_URL,
        },
        offers: Offer {
            kind: "Offer",
            price: "0.00",
            price_currency: "USD",
        },
    }
}

fn inject(json: &str) -> Option<()> {
    let document = web_sys::window()?.document()?;
    let head = document.head()?;
    if let Some(old) = document.get_element_by_id(SCRIPT_ID) {
        old.remove();
    }
    let script = document.create_element("script").ok()?;
    script.set_id(SCRIPT_ID);
    script.set_attribute("type", "application/ld+json").ok()?;
    script.set_text_content(Some(json));
    head.append_child(&script).ok()?;
    Some(())
}

#[function_component(StructuredData)]
pub fn structured_data() -> Html {
    use_effect_with((), |_| {
        match serde_json::to_string(&software_application()) {
            Ok(json) => {
                if inject(&json).is_none() {
                    log::warn!("could not attach structured data to <head>");
                }
            }
            Err(e) => log::error!("structured data serialization failed: {}", e),
        }
        || ()
    });
    html! {}
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn json_ld_shape() {
        let v = serde_json::to_value(software_application()).unwrap();
        assert_eq!(v["@context"], "https://schema.org");
        assert_eq!(v["@type"], "SoftwareApplication");
        assert_eq!(v["operatingSystem"], "Windows, macOS");
        assert_eq!(v["applicationCategory"], "DeveloperTool");
        assert!(v["description"].as_str().unwrap().contains("Electron-based"));
        assert_eq!(v["author"]["@type"], "Person");
        assert_eq!(v["offers"]["price"], "0.00");
        assert_eq!(v["offers"]["priceCurrency"], "USD");
    }
}

#[cfg(all(test, target_arch = "wasm32"))]
mod browser_tests {
    use super::*;
    use wasm_bindgen_test::*;

    #[wasm_bindgen_test]
    fn repeated_inject_keeps_one_script() {
        let document = web_sys::window().unwrap().document().unwrap();
        assert!(inject(r#"{"n":1}"#).is_some());
        assert!(inject(r#"{"n":2}"#).is_some());

        let script = document.get_element_by_id(SCRIPT_ID).unwrap();
        assert_eq!(script.text_content().as_deref(), Some(r#"{"n":2}"#));
        let head = document.head().unwrap();
        assert!(script.parent_node().is_some_and(|p| p.is_same_node(Some(&head))));
        // removing the one we found leaves none behind
        script.remove();
        assert!(document.get_element_by_id(SCRIPT_ID).is_none());
    }
}
